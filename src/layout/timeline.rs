// Timeline indexing
// Maps task date intervals onto a contiguous day-column axis for the linear
// Timeline/Gantt renderers. Pure index arithmetic; no per-day scanning.

use chrono::NaiveDate;

use crate::models::task::Task;
use crate::utils::date::whole_days_between;

/// Column placement of one task bar on a day axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelinePlacement {
    /// 0-based column of the bar's first day, clamped into the axis.
    pub start_index: usize,
    /// Number of day columns the bar covers, at least 1.
    pub span_days: usize,
    /// False when the task's interval lies entirely outside the axis
    /// (or the task has no dates at all).
    pub visible: bool,
}

impl TimelinePlacement {
    fn hidden() -> Self {
        Self {
            start_index: 0,
            span_days: 1,
            visible: false,
        }
    }
}

/// Compute the column placement of `task` against `axis`.
///
/// `axis` must be the contiguous ascending day list produced by
/// [`crate::layout::grid::build_linear_range`]; indices are derived from
/// day offsets against its first element. Fallback anchors: a missing start
/// anchors to the due date; a missing due on a started task extends the bar
/// to the axis end (open-ended); a corrupt `start > due` interval collapses
/// to a single day at start.
pub fn position(task: &Task, axis: &[NaiveDate]) -> TimelinePlacement {
    let (Some(&axis_first), Some(&axis_last)) = (axis.first(), axis.last()) else {
        return TimelinePlacement::hidden();
    };

    let (bar_start, bar_end) = match (task.start_date, task.due_date) {
        (Some(start), Some(due)) if start <= due => (start, due),
        (Some(start), Some(_)) => (start, start),
        (Some(start), None) => (start, axis_last.max(start)),
        (None, Some(due)) => (due, due),
        (None, None) => return TimelinePlacement::hidden(),
    };

    if bar_end < axis_first || bar_start > axis_last {
        return TimelinePlacement::hidden();
    }

    let last_index = axis.len() - 1;
    let clamp = |day: NaiveDate| -> usize {
        whole_days_between(axis_first, day).clamp(0, last_index as i64) as usize
    };
    let start_index = clamp(bar_start);
    let end_index = clamp(bar_end);

    TimelinePlacement {
        start_index,
        span_days: end_index.saturating_sub(start_index) + 1,
        visible: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn axis(from: u32, to: u32) -> Vec<NaiveDate> {
        (from..=to).map(day).collect()
    }

    fn spanned(start: u32, due: u32) -> Task {
        Task::builder("t", "T")
            .start_date(day(start))
            .due_date(day(due))
            .build()
    }

    #[test]
    fn test_interval_inside_axis() {
        let placement = position(&spanned(5, 9), &axis(1, 30));
        assert_eq!(placement.start_index, 4);
        assert_eq!(placement.span_days, 5);
        assert!(placement.visible);
    }

    #[test]
    fn test_single_day_task() {
        let placement = position(&spanned(5, 5), &axis(1, 30));
        assert_eq!(placement.span_days, 1);
        assert!(placement.visible);
    }

    #[test]
    fn test_interval_clipped_at_both_edges() {
        // Bar starts before the axis and ends after it.
        let placement = position(&spanned(1, 30), &axis(10, 20));
        assert_eq!(placement.start_index, 0);
        assert_eq!(placement.span_days, 11);
        assert!(placement.visible);
    }

    #[test]
    fn test_interval_outside_axis_is_hidden() {
        let placement = position(&spanned(1, 5), &axis(10, 20));
        assert!(!placement.visible);
        let placement = position(&spanned(25, 28), &axis(10, 20));
        assert!(!placement.visible);
    }

    #[test]
    fn test_due_only_anchor() {
        let task = Task::builder("t", "Due only").due_date(day(12)).build();
        let placement = position(&task, &axis(10, 20));
        assert_eq!(placement.start_index, 2);
        assert_eq!(placement.span_days, 1);
        assert!(placement.visible);
    }

    #[test]
    fn test_open_ended_runs_to_axis_end() {
        let task = Task::builder("t", "Ongoing").start_date(day(15)).build();
        let placement = position(&task, &axis(10, 20));
        assert_eq!(placement.start_index, 5);
        assert_eq!(placement.span_days, 6);
        assert!(placement.visible);
    }

    #[test]
    fn test_corrupt_interval_collapses_to_start_day() {
        let placement = position(&spanned(15, 12), &axis(10, 20));
        assert_eq!(placement.start_index, 5);
        assert_eq!(placement.span_days, 1);
        assert!(placement.visible);
    }

    #[test]
    fn test_unscheduled_and_empty_axis_hidden() {
        assert!(!position(&Task::new("t", "None"), &axis(10, 20)).visible);
        assert!(!position(&spanned(12, 14), &[]).visible);
    }

    #[test]
    fn test_idempotent() {
        let task = spanned(5, 9);
        let axis = axis(1, 30);
        assert_eq!(position(&task, &axis), position(&task, &axis));
    }
}
