/// How boot established the initial list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootOutcome {
    /// Decoded from the local store; nothing was fetched.
    Restored { count: usize },
    /// Fetched from the remote source after the store had nothing usable.
    Fetched { count: usize },
    /// Store had nothing usable and both fetch attempts failed.
    Unavailable { reason: String },
}

impl BootOutcome {
    pub fn count(&self) -> usize {
        match self {
            Self::Restored { count } | Self::Fetched { count } => *count,
            Self::Unavailable { .. } => 0,
        }
    }
}
