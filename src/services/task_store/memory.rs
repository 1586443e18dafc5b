// In-memory task store
// Map-backed TaskStore used by the demo binary and tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::task::Task;

use super::{SchedulePatch, StoreError, TaskStore};

#[derive(Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<Mutex<HashMap<String, Task>>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored task set.
    pub fn seed(&self, tasks: impl IntoIterator<Item = Task>) {
        let mut guard = self.tasks.lock().expect("task store mutex poisoned");
        guard.clear();
        for task in tasks {
            guard.insert(task.id.clone(), task);
        }
    }

    /// Current copy of one task, if present.
    pub fn get(&self, task_id: &str) -> Option<Task> {
        self.tasks
            .lock()
            .expect("task store mutex poisoned")
            .get(task_id)
            .cloned()
    }
}

impl TaskStore for InMemoryTaskStore {
    async fn fetch_tasks(&self, _project_id: &str) -> Result<Vec<Task>, StoreError> {
        let guard = self.tasks.lock().expect("task store mutex poisoned");
        let mut tasks: Vec<Task> = guard.values().cloned().collect();
        tasks.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(tasks)
    }

    async fn update_schedule(
        &self,
        task_id: &str,
        patch: SchedulePatch,
    ) -> Result<Task, StoreError> {
        let mut guard = self.tasks.lock().expect("task store mutex poisoned");
        let task = guard
            .get_mut(task_id)
            .ok_or_else(|| StoreError::NotFound(task_id.to_string()))?;
        task.start_date = patch.start_date;
        task.due_date = patch.due_date;
        Ok(task.clone())
    }
}
