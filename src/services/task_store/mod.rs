//! Task persistence boundary.
//! The engine never owns storage; it talks to the project-management
//! backend through this trait, with an HTTP client for production and a
//! map-backed store for tests and the demo binary.

use std::future::Future;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::task::Task;
use crate::utils::date::lenient_day;

mod http;
mod memory;

pub use http::HttpTaskStore;
pub use memory::InMemoryTaskStore;

/// Partial task update carrying only the schedule fields, the body of a
/// reschedule PUT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePatch {
    #[serde(with = "lenient_day")]
    pub start_date: Option<NaiveDate>,
    #[serde(with = "lenient_day")]
    pub due_date: Option<NaiveDate>,
}

impl SchedulePatch {
    /// Snapshot the schedule fields of a working-copy task.
    pub fn from_task(task: &Task) -> Self {
        Self {
            start_date: task.start_date,
            due_date: task.due_date,
        }
    }
}

/// Errors from the persistence collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),
    #[error("task {0} not found")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

/// Async task persistence interface.
///
/// `update_schedule` returns the canonical updated task so callers can
/// refresh their working copy with whatever the backend actually stored.
pub trait TaskStore {
    fn fetch_tasks(
        &self,
        project_id: &str,
    ) -> impl Future<Output = Result<Vec<Task>, StoreError>> + Send;

    fn update_schedule(
        &self,
        task_id: &str,
        patch: SchedulePatch,
    ) -> impl Future<Output = Result<Task, StoreError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_serializes_schedule_fields_only() {
        let task = Task::builder("t-1", "T")
            .start_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .build();
        let patch = SchedulePatch::from_task(&task);
        let json = serde_json::to_value(patch).unwrap();

        assert_eq!(json["startDate"], "2024-02-01");
        assert_eq!(json["dueDate"], serde_json::Value::Null);
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
