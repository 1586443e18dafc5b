// Per-day task activity rules
// Decides which tasks occupy a given calendar day.

use chrono::NaiveDate;

use crate::models::task::Task;

/// Whether `task` is active on `day`.
///
/// - both dates present: active within the closed `[start, due]` interval;
/// - only a due date: active on that day only;
/// - only a start date: open-ended, active on every day from start;
/// - no dates: never active.
///
/// A corrupt interval (`start > due`) is treated as a single-day task
/// anchored at `start`.
pub fn is_active_on(task: &Task, day: NaiveDate) -> bool {
    match (task.start_date, task.due_date) {
        (Some(start), Some(due)) => {
            if start > due {
                day == start
            } else {
                start <= day && day <= due
            }
        }
        (None, Some(due)) => day == due,
        (Some(start), None) => day >= start,
        (None, None) => false,
    }
}

/// Tasks from `tasks` active on `day`, in input order.
pub fn active_on<'a>(day: NaiveDate, tasks: &'a [Task]) -> Vec<&'a Task> {
    tasks.iter().filter(|task| is_active_on(task, day)).collect()
}

/// The day a task's bar is anchored to for ordering purposes: its start
/// date, falling back to the due date for due-only tasks.
pub fn anchor_day(task: &Task) -> Option<NaiveDate> {
    task.start_date.or(task.due_date)
}
