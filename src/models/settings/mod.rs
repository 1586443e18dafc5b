// Scheduler settings model
// Persisted as TOML; every field has a default so partial files load.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    /// Number of visual lanes per day in the calendar views.
    pub lane_count: usize,
    /// Padding added on both sides of the linear timeline range.
    pub range_padding_days: i64,
    /// Assumed length of a task whose due date is missing, when sizing the
    /// timeline range.
    pub fallback_due_offset_days: i64,
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday.
    pub first_day_of_week: u8,
    /// Base URL of the task-persistence collaborator.
    pub api_base_url: String,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            lane_count: 3,
            range_padding_days: 14,
            fallback_due_offset_days: 30,
            first_day_of_week: 0, // Sunday
            api_base_url: "http://127.0.0.1:7878/api".to_string(),
        }
    }
}
