// Task module
// Project task model matching the task-persistence collaborator's wire format

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date::lenient_day;

/// Workflow status of a task, used only as a rendering hint by the layout
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

/// Priority of a task, used only as a rendering hint by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// Project task with calendar-day scheduling fields.
///
/// Dates arrive from the collaborator as ISO-8601 strings; deserialization
/// is lenient (unparsable dates degrade to `None` with a logged warning)
/// because the layout engine must be total over untrusted input. The engine
/// also never assumes `start_date <= due_date` holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default, with = "lenient_day")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "lenient_day")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

impl Task {
    /// Create a new task with required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            start_date: None,
            due_date: None,
            assignee_id: None,
        }
    }

    /// Create a builder for constructing tasks with optional fields
    pub fn builder(id: impl Into<String>, title: impl Into<String>) -> TaskBuilder {
        TaskBuilder::new(id, title)
    }

    /// Whether the schedule fields violate the `start <= due` invariant.
    /// Corrupt tasks still render (anchored at start, single day); this
    /// flag lets the host surface a data-quality warning.
    pub fn has_inverted_schedule(&self) -> bool {
        matches!(
            (self.start_date, self.due_date),
            (Some(start), Some(due)) if start > due
        )
    }

    /// Whether the task carries any schedule information at all.
    pub fn is_scheduled(&self) -> bool {
        self.start_date.is_some() || self.due_date.is_some()
    }
}

/// Builder for creating tasks with optional fields
pub struct TaskBuilder {
    id: String,
    title: String,
    status: TaskStatus,
    priority: TaskPriority,
    start_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    assignee_id: Option<String>,
}

impl TaskBuilder {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            start_date: None,
            due_date: None,
            assignee_id: None,
        }
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn start_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn assignee_id(mut self, assignee: impl Into<String>) -> Self {
        self.assignee_id = Some(assignee.into());
        self
    }

    pub fn build(self) -> Task {
        Task {
            id: self.id,
            title: self.title,
            status: self.status,
            priority: self.priority,
            start_date: self.start_date,
            due_date: self.due_date,
            assignee_id: self.assignee_id,
        }
    }
}
