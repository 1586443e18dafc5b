// Lane assignment
// Places overlapping multi-day tasks into a bounded number of visual lanes,
// day by day, preferring each task's previous lane so bars do not jump rows
// as an interval continues across the grid.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::models::task::Task;

use super::overlap::{active_on, anchor_day};

/// Lane occupancy for a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLanes {
    pub date: NaiveDate,
    /// One slot per lane, holding the occupying task id.
    pub slots: Vec<Option<String>>,
    /// Active tasks that found no free lane on this day.
    pub overflow: usize,
}

impl DayLanes {
    /// Number of occupied lanes.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Lane index the given task occupies on this day, if any.
    pub fn lane_of(&self, task_id: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_deref() == Some(task_id))
    }
}

/// Day-by-day lane assigner with a lane-continuity cache.
///
/// The `preferred_lane` map persists across the whole day walk (it is the
/// documented contract, not incidental state): a task placed in lane 1 on
/// one day is offered lane 1 again on the next, and only loses it when the
/// lane is already taken. Entries are pruned as soon as a task stops being
/// active, so a finished task's lane is reusable the following day.
pub struct LaneAssigner {
    lane_count: usize,
    preferred_lane: HashMap<String, usize>,
}

impl LaneAssigner {
    pub fn new(lane_count: usize) -> Self {
        Self {
            lane_count: lane_count.max(1),
            preferred_lane: HashMap::new(),
        }
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    /// Drop the continuity cache, as if the walk started from scratch.
    pub fn reset(&mut self) {
        self.preferred_lane.clear();
    }

    /// Walk `days` left to right and assign lanes for every day.
    pub fn assign(&mut self, days: &[NaiveDate], tasks: &[Task]) -> Vec<DayLanes> {
        days.iter().map(|&day| self.assign_day(day, tasks)).collect()
    }

    /// Assign lanes for a single day, advancing the continuity cache.
    pub fn assign_day(&mut self, day: NaiveDate, tasks: &[Task]) -> DayLanes {
        let active = active_on(day, tasks);
        let mut slots: Vec<Option<String>> = vec![None; self.lane_count];

        // Pass 1: continuing tasks reclaim their previous lane while it is
        // still free, lowest lane first (ties broken by id so two competing
        // tasks resolve the same way on every walk).
        let (mut continuing, fresh): (Vec<&Task>, Vec<&Task>) = active
            .iter()
            .copied()
            .partition(|task| self.preferred_lane.contains_key(&task.id));
        continuing.sort_by(|a, b| {
            self.preferred_lane[&a.id]
                .cmp(&self.preferred_lane[&b.id])
                .then_with(|| a.id.cmp(&b.id))
        });

        let mut pending: Vec<&Task> = fresh;
        for task in continuing {
            let lane = self.preferred_lane[&task.id];
            if lane < self.lane_count && slots[lane].is_none() {
                slots[lane] = Some(task.id.clone());
            } else {
                pending.push(task);
            }
        }

        // Pass 2: freshly appearing tasks, plus continuing tasks that lost
        // their slot, take the first empty lane in (start date, id) order.
        pending.sort_by(|a, b| {
            (anchor_day(a), &a.id).cmp(&(anchor_day(b), &b.id))
        });
        for task in pending {
            if let Some(lane) = slots.iter().position(Option::is_none) {
                slots[lane] = Some(task.id.clone());
                self.preferred_lane.insert(task.id.clone(), lane);
            }
        }

        // Release lanes of tasks whose interval has ended.
        let active_ids: HashSet<&str> = active.iter().map(|task| task.id.as_str()).collect();
        self.preferred_lane
            .retain(|id, _| active_ids.contains(id.as_str()));

        let occupied = slots.iter().filter(|slot| slot.is_some()).count();
        DayLanes {
            date: day,
            slots,
            overflow: active.len().saturating_sub(occupied),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::add_days;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn days(from: u32, to: u32) -> Vec<NaiveDate> {
        (from..=to).map(day).collect()
    }

    fn spanned(id: &str, start: u32, due: u32) -> Task {
        Task::builder(id, id)
            .start_date(day(start))
            .due_date(day(due))
            .build()
    }

    #[test]
    fn test_two_overlapping_tasks_take_separate_lanes() {
        // A over days 1-5, B over days 3-4.
        let tasks = vec![spanned("a", 1, 5), spanned("b", 3, 4)];
        let mut assigner = LaneAssigner::new(3);
        let layout = assigner.assign(&days(1, 5), &tasks);

        let day3 = &layout[2];
        assert_eq!(day3.lane_of("a"), Some(0));
        assert_eq!(day3.lane_of("b"), Some(1));
        assert_eq!(day3.overflow, 0);
    }

    #[test]
    fn test_overflow_counts_unplaced_tasks() {
        let tasks = vec![
            spanned("a", 1, 1),
            spanned("b", 1, 1),
            spanned("c", 1, 1),
            spanned("d", 1, 1),
        ];
        let mut assigner = LaneAssigner::new(3);
        let layout = assigner.assign(&[day(1)], &tasks);

        assert_eq!(layout[0].occupied(), 3);
        assert_eq!(layout[0].overflow, 1);
        // Deterministic order: a, b, c placed; d overflows.
        assert_eq!(layout[0].lane_of("a"), Some(0));
        assert_eq!(layout[0].lane_of("b"), Some(1));
        assert_eq!(layout[0].lane_of("c"), Some(2));
        assert_eq!(layout[0].lane_of("d"), None);
    }

    #[test]
    fn test_lane_continuity_across_days() {
        // B starts first and takes lane 0 on day 1; A appears on day 2 and
        // must not displace it on any later day.
        let tasks = vec![spanned("b", 1, 6), spanned("a", 2, 6)];
        let mut assigner = LaneAssigner::new(3);
        let layout = assigner.assign(&days(1, 6), &tasks);

        for day_lanes in &layout[1..] {
            assert_eq!(day_lanes.lane_of("b"), Some(0));
            assert_eq!(day_lanes.lane_of("a"), Some(1));
        }
    }

    #[test]
    fn test_lane_released_after_interval_ends() {
        let tasks = vec![spanned("a", 1, 2), spanned("b", 3, 4)];
        let mut assigner = LaneAssigner::new(3);
        let layout = assigner.assign(&days(1, 4), &tasks);

        assert_eq!(layout[1].lane_of("a"), Some(0));
        assert_eq!(layout[2].lane_of("a"), None);
        // B inherits the freed lane 0 instead of stacking below a ghost.
        assert_eq!(layout[2].lane_of("b"), Some(0));
    }

    #[test]
    fn test_reappearing_task_is_fresh_again() {
        // A gap in activity prunes the cached lane; on return the task
        // competes as fresh.
        let tasks = vec![spanned("a", 1, 1), spanned("b", 3, 3)];
        let mut assigner = LaneAssigner::new(2);
        let layout = assigner.assign(&days(1, 3), &tasks);

        assert_eq!(layout[0].lane_of("a"), Some(0));
        assert_eq!(layout[1].occupied(), 0);
        assert_eq!(layout[2].lane_of("b"), Some(0));
    }

    #[test]
    fn test_fresh_task_takes_lowest_free_lane_not_lowest_lane() {
        // C continues in lane 1; the newcomer D fills the freed lane 0
        // without displacing C downward.
        let tasks = vec![spanned("a", 1, 2), spanned("c", 1, 5), spanned("d", 3, 5)];
        let mut assigner = LaneAssigner::new(3);
        let layout = assigner.assign(&days(1, 5), &tasks);

        // Day 1: a takes lane 0 (earlier id), c lane 1.
        assert_eq!(layout[0].lane_of("a"), Some(0));
        assert_eq!(layout[0].lane_of("c"), Some(1));
        // Day 3: a is gone, d appears; c keeps lane 1, d fills lane 0.
        assert_eq!(layout[2].lane_of("c"), Some(1));
        assert_eq!(layout[2].lane_of("d"), Some(0));
    }

    #[test]
    fn test_lane_count_one_still_places_one_task() {
        let tasks = vec![spanned("a", 1, 2), spanned("b", 1, 2)];
        let mut assigner = LaneAssigner::new(1);
        let layout = assigner.assign(&days(1, 2), &tasks);
        for day_lanes in &layout {
            assert_eq!(day_lanes.occupied(), 1);
            assert_eq!(day_lanes.overflow, 1);
        }
    }

    #[test]
    fn test_zero_lane_count_clamps_to_one() {
        let assigner = LaneAssigner::new(0);
        assert_eq!(assigner.lane_count(), 1);
    }

    #[test]
    fn test_reset_gives_identical_walk() {
        let tasks = vec![spanned("a", 1, 4), spanned("b", 2, 5), spanned("c", 3, 6)];
        let axis = days(1, 6);
        let mut assigner = LaneAssigner::new(2);
        let first = assigner.assign(&axis, &tasks);
        assigner.reset();
        let second = assigner.assign(&axis, &tasks);
        assert_eq!(first, second);
    }

    #[test]
    fn test_open_ended_task_occupies_every_later_day() {
        let ongoing = Task::builder("a", "Ongoing").start_date(day(2)).build();
        let tasks = vec![ongoing, spanned("b", 4, 5)];
        let mut assigner = LaneAssigner::new(3);
        let layout = assigner.assign(&days(1, 6), &tasks);

        assert_eq!(layout[0].lane_of("a"), None);
        for day_lanes in &layout[1..] {
            assert_eq!(day_lanes.lane_of("a"), Some(0));
        }
        assert_eq!(layout[4].lane_of("b"), Some(1));
    }

    #[test]
    fn test_long_walk_keeps_lane_stable() {
        let start = day(1);
        let axis: Vec<NaiveDate> = (0..60).map(|i| add_days(start, i)).collect();
        let tasks = vec![
            spanned("long", 1, 31),
            spanned("early", 1, 3),
            spanned("mid", 10, 20),
        ];
        let mut assigner = LaneAssigner::new(3);
        let layout = assigner.assign(&axis, &tasks);

        let long_lanes: HashSet<Option<usize>> = layout[..31]
            .iter()
            .map(|day_lanes| day_lanes.lane_of("long"))
            .collect();
        assert_eq!(long_lanes.len(), 1);
    }
}
