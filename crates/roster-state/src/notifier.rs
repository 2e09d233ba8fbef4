/// Presentation hook for errors the user must see.
///
/// Only refresh and add failures are reported here; boot and storage
/// failures are logged and never reach the user.
pub trait Notifier: Send + Sync {
    fn notify_error(&self, title: &str, message: &str);
}
