// Dirty tracking
// Ids of tasks whose in-memory schedule differs from the last fetched
// snapshot. Cleared only by a fully successful flush or a refetch.

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirtySet {
    ids: HashSet<String>,
}

impl DirtySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, task_id: impl Into<String>) {
        self.ids.insert(task_id.into());
    }

    pub fn unmark(&mut self, task_id: &str) {
        self.ids.remove(task_id);
    }

    pub fn contains(&self, task_id: &str) -> bool {
        self.ids.contains(task_id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
