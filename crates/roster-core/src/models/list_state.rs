use crate::UserRecord;

/// Ordered list of user records plus the boot gate for persistence.
///
/// Order is significant: new records go to the front, a refresh replaces
/// the whole sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    items: Vec<UserRecord>,
    bootstrapped: bool,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[UserRecord] {
        &self.items
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    /// Flips the boot gate. Returns `false` if it was already set.
    pub fn mark_bootstrapped(&mut self) -> bool {
        if self.bootstrapped {
            return false;
        }
        self.bootstrapped = true;
        true
    }

    /// Replaces the whole list, discarding the previous order.
    pub fn replace(&mut self, items: Vec<UserRecord>) {
        self.items = items;
    }

    /// Inserts a record at index 0. Does not check for id collisions.
    pub fn prepend(&mut self, record: UserRecord) {
        self.items.insert(0, record);
    }

    /// Drops every record with the given id. Returns whether anything was removed.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|record| record.id != id);
        self.items.len() != before
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
