use roster_state::Notifier;

/// Reports user-facing errors on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify_error(&self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }
}
