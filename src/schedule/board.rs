// Schedule board
// Owns the in-memory working copy of the task list between fetches: drag
// state machine, dirty tracking, and the batched flush back to the store.

use std::collections::HashMap;

use chrono::NaiveDate;
use thiserror::Error;
use tokio::task::JoinSet;

use crate::layout::timeline::position;
use crate::models::task::Task;
use crate::services::task_store::{SchedulePatch, StoreError, TaskStore};
use crate::utils::date::add_days;

use super::dirty::DirtySet;
use super::drag::{compute_drop_day_index, schedule_duration_days, DragSession};

/// Result of a drop gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The task was rescheduled in the working copy.
    Applied {
        new_start: NaiveDate,
        new_due: NaiveDate,
    },
    /// The drop was discarded without mutation (no session, target
    /// mismatch, out-of-range index, or a drop back onto the same day).
    Ignored,
}

/// Batched save failure: at least one task update was rejected. The dirty
/// set is retained in full so the user can retry without re-dragging.
#[derive(Debug, Error)]
#[error("{} of {attempted} schedule updates failed", .failures.len())]
pub struct FlushError {
    pub attempted: usize,
    pub failures: Vec<(String, StoreError)>,
}

/// Schedule dates as last confirmed by the store, keyed by task id.
type ScheduleSnapshot = HashMap<String, (Option<NaiveDate>, Option<NaiveDate>)>;

fn snapshot_of(tasks: &[Task]) -> ScheduleSnapshot {
    tasks
        .iter()
        .map(|task| (task.id.clone(), (task.start_date, task.due_date)))
        .collect()
}

/// In-memory schedule state for one view of a project's tasks.
pub struct ScheduleBoard {
    tasks: Vec<Task>,
    /// Dates as fetched (or last fully flushed); the dirty set tracks
    /// divergence from this, not from the previous drop.
    snapshot: ScheduleSnapshot,
    axis: Vec<NaiveDate>,
    dirty: DirtySet,
    session: Option<DragSession>,
}

impl ScheduleBoard {
    /// Create a board over a fetched task snapshot and the day axis the
    /// view renders against.
    pub fn new(tasks: Vec<Task>, axis: Vec<NaiveDate>) -> Self {
        Self {
            snapshot: snapshot_of(&tasks),
            tasks,
            axis,
            dirty: DirtySet::new(),
            session: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn axis(&self) -> &[NaiveDate] {
        &self.axis
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn dirty_task_ids(&self) -> &DirtySet {
        &self.dirty
    }

    pub fn active_session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Replace the working copy with a fresh fetch. Clears the dirty set
    /// and discards any in-flight drag: a refetched view starts clean.
    pub fn apply_fetch(&mut self, tasks: Vec<Task>) {
        self.snapshot = snapshot_of(&tasks);
        self.tasks = tasks;
        self.dirty.clear();
        self.session = None;
    }

    /// Swap the rendered day axis (view range change). Any in-flight drag
    /// is discarded since its origin column no longer means anything.
    pub fn set_axis(&mut self, axis: Vec<NaiveDate>) {
        self.axis = axis;
        self.session = None;
    }

    /// Start a drag for `task_id` at pointer position `pointer_x`.
    ///
    /// No-op (returns false) when another task's drag is already active or
    /// the task is unknown; restarting the same task's drag re-anchors it.
    pub fn begin_drag(&mut self, task_id: &str, pointer_x: f32) -> bool {
        if let Some(session) = &self.session {
            if session.task_id != task_id {
                log::warn!(
                    "Ignoring drag start for {}: drag already active for {}",
                    task_id,
                    session.task_id
                );
                return false;
            }
        }
        let Some(task) = self.task(task_id) else {
            log::warn!("Ignoring drag start for unknown task {}", task_id);
            return false;
        };

        let origin_day_index = position(task, &self.axis).start_index;
        self.session = Some(DragSession::new(task_id, pointer_x, origin_day_index));
        true
    }

    /// Day column under the pointer for the active drag, if any.
    pub fn drop_day_index(&self, current_pointer_x: f32, day_column_width: f32) -> Option<usize> {
        self.session.as_ref().map(|session| {
            compute_drop_day_index(session, current_pointer_x, day_column_width, self.axis.len())
        })
    }

    /// Complete the active drag by dropping `dropped_task_id` onto
    /// `day_index`.
    ///
    /// Aborts without mutation when the drop target does not match the
    /// session's task (the drag-target-mismatch guard) or the index is out
    /// of range. On success the task moves to the new start day with its
    /// duration preserved in whole UTC calendar days, and is dirty iff its
    /// dates now differ from the fetched snapshot, so dragging a task back
    /// to where it was fetched drops it from the dirty set again. Either
    /// way the session ends.
    pub fn complete_drop(&mut self, dropped_task_id: &str, day_index: usize) -> DropOutcome {
        let Some(session) = self.session.take() else {
            log::debug!("Drop for {} with no active drag, ignoring", dropped_task_id);
            return DropOutcome::Ignored;
        };

        if session.task_id != dropped_task_id {
            log::warn!(
                "Drag target mismatch: session is for {}, drop reported {}; aborting",
                session.task_id,
                dropped_task_id
            );
            return DropOutcome::Ignored;
        }

        let Some(&new_start) = self.axis.get(day_index) else {
            log::warn!(
                "Drop index {} outside axis of {} days, ignoring",
                day_index,
                self.axis.len()
            );
            return DropOutcome::Ignored;
        };

        let Some(task) = self.tasks.iter_mut().find(|task| task.id == session.task_id) else {
            log::warn!("Dragged task {} vanished from working copy", session.task_id);
            return DropOutcome::Ignored;
        };

        let duration_days = schedule_duration_days(task);
        let new_due = add_days(new_start, duration_days);
        if task.start_date == Some(new_start) && task.due_date == Some(new_due) {
            return DropOutcome::Ignored;
        }

        task.start_date = Some(new_start);
        task.due_date = Some(new_due);
        let matches_snapshot = self
            .snapshot
            .get(&session.task_id)
            .is_some_and(|&dates| dates == (Some(new_start), Some(new_due)));
        if matches_snapshot {
            self.dirty.unmark(&session.task_id);
        } else {
            self.dirty.mark(session.task_id);
        }
        DropOutcome::Applied { new_start, new_due }
    }

    /// Discard the active drag without touching the working copy.
    pub fn cancel_drag(&mut self) {
        self.session = None;
    }

    /// Persist every dirty task with one update call each, in parallel,
    /// awaiting all of them.
    ///
    /// The dirty set is cleared only when every update succeeds; any
    /// rejection keeps the whole set intact (no partial-success clearing)
    /// and surfaces the per-task causes. Canonical tasks returned by the
    /// updates that did succeed still refresh the working copy, so a retry
    /// re-sends converged data.
    pub async fn flush_changes<S>(&mut self, store: &S) -> Result<(), FlushError>
    where
        S: TaskStore + Clone + Send + Sync + 'static,
    {
        if self.dirty.is_empty() {
            return Ok(());
        }

        let mut updates = JoinSet::new();
        let mut attempted = 0;
        for id in self.dirty.iter() {
            let Some(task) = self.tasks.iter().find(|task| task.id == id) else {
                log::warn!("Dirty task {} missing from working copy, skipping", id);
                continue;
            };
            let patch = SchedulePatch::from_task(task);
            let store = store.clone();
            let id = id.to_string();
            attempted += 1;
            updates.spawn(async move {
                let result = store.update_schedule(&id, patch).await;
                (id, result)
            });
        }

        let mut canonical = Vec::new();
        let mut failures = Vec::new();
        while let Some(joined) = updates.join_next().await {
            match joined {
                Ok((_, Ok(task))) => canonical.push(task),
                Ok((id, Err(err))) => {
                    log::error!("Failed to save task {}: {}", id, err);
                    failures.push((id, err));
                }
                Err(join_err) => {
                    log::error!("Task update worker failed: {}", join_err);
                    failures.push((
                        String::from("<unknown>"),
                        StoreError::Internal(join_err.to_string()),
                    ));
                }
            }
        }

        for task in canonical {
            if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) {
                *existing = task;
            }
        }

        if failures.is_empty() {
            self.snapshot = snapshot_of(&self.tasks);
            self.dirty.clear();
            Ok(())
        } else {
            Err(FlushError {
                attempted,
                failures,
            })
        }
    }
}
