// Drag session state
// A drag is a plain value type plus pure pointer math; no element lookups
// or pixel state beyond the origin x recorded at drag start.

use crate::models::task::Task;
use crate::utils::date::whole_days_between;

/// An in-progress drag gesture. Created on drag start, consumed on drop or
/// cancel, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub task_id: String,
    pub origin_pointer_x: f32,
    /// Day column the task's bar started in when the gesture began.
    pub origin_day_index: usize,
}

impl DragSession {
    pub fn new(task_id: impl Into<String>, origin_pointer_x: f32, origin_day_index: usize) -> Self {
        Self {
            task_id: task_id.into(),
            origin_pointer_x,
            origin_day_index,
        }
    }
}

/// Translate the current pointer position into a day column index.
///
/// Pure: `round(Δx / column_width) + origin`, clamped into
/// `[0, axis_len - 1]`. A non-positive column width (degenerate layout)
/// pins the result to the origin column.
pub fn compute_drop_day_index(
    session: &DragSession,
    current_pointer_x: f32,
    day_column_width: f32,
    axis_len: usize,
) -> usize {
    if axis_len == 0 {
        return 0;
    }
    let last = (axis_len - 1) as i64;

    if day_column_width <= 0.0 {
        return (session.origin_day_index as i64).clamp(0, last) as usize;
    }

    let delta_columns =
        ((current_pointer_x - session.origin_pointer_x) / day_column_width).round() as i64;
    (session.origin_day_index as i64 + delta_columns).clamp(0, last) as usize
}

/// The task's schedule length in whole UTC calendar days, as preserved
/// across drops. Corrupt (`start > due`) and partially-dated tasks count
/// as zero-length so a drop lands them on a single day.
pub fn schedule_duration_days(task: &Task) -> i64 {
    match (task.start_date, task.due_date) {
        (Some(start), Some(due)) if start <= due => whole_days_between(start, due),
        _ => 0,
    }
}
