// Test fixtures - reusable test data
// Provides consistent task sets and dates across integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use taskgrid::models::task::{Task, TaskPriority, TaskStatus};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    pub fn feb(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
    }

    pub fn mar(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }
}

/// Sample tasks for testing
pub mod tasks {
    use super::dates::*;
    use super::*;

    /// A: days Jan 1-5, B: days Jan 3-4 (the overlapping pair from the
    /// lane scenarios).
    pub fn overlapping_pair() -> Vec<Task> {
        vec![
            Task::builder("a", "Task A")
                .start_date(jan(1))
                .due_date(jan(5))
                .build(),
            Task::builder("b", "Task B")
                .start_date(jan(3))
                .due_date(jan(4))
                .build(),
        ]
    }

    /// A full project snapshot: overlapping spans, a due-only milestone,
    /// an open-ended task and an unscheduled one.
    pub fn project_snapshot() -> Vec<Task> {
        vec![
            Task::builder("t-1", "Design review")
                .status(TaskStatus::InProgress)
                .priority(TaskPriority::High)
                .start_date(jan(10))
                .due_date(jan(12))
                .build(),
            Task::builder("t-2", "Write docs")
                .start_date(jan(11))
                .due_date(jan(15))
                .build(),
            Task::builder("t-3", "Release milestone")
                .due_date(feb(1))
                .build(),
            Task::builder("t-4", "Ongoing support")
                .priority(TaskPriority::Low)
                .start_date(jan(8))
                .build(),
            Task::new("t-5", "Unscheduled idea"),
        ]
    }
}
