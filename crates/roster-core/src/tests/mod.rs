
use crate::UserRecord;

pub(crate) fn record(id: &str) -> UserRecord {
    UserRecord::new(id, format!("First-{id}"), format!("Last-{id}"))
}
