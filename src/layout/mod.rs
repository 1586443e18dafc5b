// Layout engine
// Pure, re-callable derivations from a task list to per-day lane
// assignments (Calendar) and day-column placements (Timeline/Gantt).

pub mod grid;
pub mod lanes;
pub mod overlap;
pub mod timeline;

use chrono::NaiveDate;

pub use grid::{build_linear_range, build_month_grid, GridDay};
pub use lanes::{DayLanes, LaneAssigner};
pub use overlap::{active_on, is_active_on};
pub use timeline::{position, TimelinePlacement};

use crate::models::settings::SchedulerSettings;
use crate::models::task::Task;

/// Full month view layout: the padded day grid plus per-day lane
/// assignments.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub days: Vec<GridDay>,
    pub lanes: Vec<DayLanes>,
}

/// Full linear view layout: the day axis plus one placement per task,
/// in task-list order.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub axis: Vec<NaiveDate>,
    pub placements: Vec<(String, TimelinePlacement)>,
}

/// Recompute the calendar month layout for `reference`'s month.
///
/// Stateless between calls: the lane-continuity cache lives only for the
/// duration of one walk, so identical inputs always yield identical output.
pub fn month_layout(
    reference: NaiveDate,
    tasks: &[Task],
    settings: &SchedulerSettings,
) -> MonthLayout {
    let days = build_month_grid(reference, settings.first_day_of_week);
    let day_axis: Vec<NaiveDate> = days.iter().map(|day| day.date).collect();
    let mut assigner = LaneAssigner::new(settings.lane_count);
    let lanes = assigner.assign(&day_axis, tasks);
    MonthLayout { days, lanes }
}

/// Recompute the linear Timeline/Gantt layout around the task set.
pub fn timeline_layout(
    tasks: &[Task],
    today: NaiveDate,
    settings: &SchedulerSettings,
) -> TimelineLayout {
    let axis = build_linear_range(
        tasks,
        today,
        settings.range_padding_days,
        settings.fallback_due_offset_days,
    );
    let placements = tasks
        .iter()
        .map(|task| (task.id.clone(), position(task, &axis)))
        .collect();
    TimelineLayout { axis, placements }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::builder("a", "A")
                .start_date(day(2024, 6, 3))
                .due_date(day(2024, 6, 7))
                .build(),
            Task::builder("b", "B")
                .start_date(day(2024, 6, 5))
                .due_date(day(2024, 6, 6))
                .build(),
        ]
    }

    #[test]
    fn test_month_layout_aligns_grid_and_lanes() {
        let layout = month_layout(day(2024, 6, 15), &sample_tasks(), &SchedulerSettings::default());
        assert_eq!(layout.days.len(), layout.lanes.len());
        for (grid_day, day_lanes) in layout.days.iter().zip(&layout.lanes) {
            assert_eq!(grid_day.date, day_lanes.date);
        }
    }

    #[test]
    fn test_month_layout_is_idempotent() {
        let tasks = sample_tasks();
        let settings = SchedulerSettings::default();
        let reference = day(2024, 6, 15);
        assert_eq!(
            month_layout(reference, &tasks, &settings),
            month_layout(reference, &tasks, &settings)
        );
    }

    #[test]
    fn test_timeline_layout_places_every_task() {
        let tasks = sample_tasks();
        let layout = timeline_layout(&tasks, day(2024, 6, 1), &SchedulerSettings::default());
        assert_eq!(layout.placements.len(), tasks.len());
        for (id, placement) in &layout.placements {
            assert!(placement.visible, "task {} should be in range", id);
        }
    }

    #[test]
    fn test_timeline_layout_is_idempotent() {
        let tasks = sample_tasks();
        let settings = SchedulerSettings::default();
        let today = day(2024, 6, 1);
        assert_eq!(
            timeline_layout(&tasks, today, &settings),
            timeline_layout(&tasks, today, &settings)
        );
    }
}
