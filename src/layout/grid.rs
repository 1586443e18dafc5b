// Date grid construction for the month and linear timeline views

use chrono::{Datelike, NaiveDate};

use crate::models::task::Task;
use crate::utils::date::{add_days, end_of_month, start_of_month, whole_days_between};

/// Padding applied to the fallback window when no task carries a date.
const EMPTY_WINDOW_PAD_DAYS: i64 = 7;

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    /// False for the leading/trailing padding days borrowed from the
    /// adjacent months to complete the first and last week rows.
    pub is_current_month: bool,
}

/// Build the ordered day list for a full-month grid.
///
/// The result always spans whole weeks: it starts on the `first_day_of_week`
/// column (0 = Sunday) on or before the 1st of the month and its length is a
/// multiple of 7. Days outside the reference month are flagged
/// `is_current_month = false`.
pub fn build_month_grid(reference: NaiveDate, first_day_of_week: u8) -> Vec<GridDay> {
    // Settings deserialize any u8, so wrap out-of-range values onto a
    // weekday instead of letting the offset math go negative.
    let first_day_of_week = first_day_of_week % 7;
    let first_of_month = start_of_month(reference);
    let last_of_month = end_of_month(reference);
    let days_in_month = whole_days_between(first_of_month, last_of_month) + 1;

    // Offset of the 1st within its week row, relative to the configured
    // first weekday column.
    let leading = (first_of_month.weekday().num_days_from_sunday() as i64
        - first_day_of_week as i64
        + 7)
        % 7;
    let weeks_needed = (leading + days_in_month + 6) / 7; // Ceiling division

    let grid_start = add_days(first_of_month, -leading);
    let month = reference.month();
    let year = reference.year();

    (0..weeks_needed * 7)
        .map(|offset| {
            let date = add_days(grid_start, offset);
            GridDay {
                date,
                is_current_month: date.month() == month && date.year() == year,
            }
        })
        .collect()
}

/// Build the contiguous day axis for the linear Timeline/Gantt views.
///
/// With no scheduled tasks the axis is a deterministic window: start of
/// `today`'s month through the end of the month after next, padded 7 days on
/// each side. Otherwise it spans `[min(start) - padding, max(due) + padding]`
/// where a missing start falls back to `today` and a missing due to
/// `start + fallback_due_offset_days`. Total over any task list.
pub fn build_linear_range(
    tasks: &[Task],
    today: NaiveDate,
    padding_days: i64,
    fallback_due_offset_days: i64,
) -> Vec<NaiveDate> {
    let mut min_start: Option<NaiveDate> = None;
    let mut max_due: Option<NaiveDate> = None;

    for task in tasks {
        if !task.is_scheduled() {
            continue;
        }
        let start = task.start_date.unwrap_or(today);
        let due = task
            .due_date
            .unwrap_or_else(|| add_days(start, fallback_due_offset_days));
        // Corrupt intervals anchor to start; the range still covers both.
        let (lo, hi) = if start <= due { (start, due) } else { (due, start) };

        min_start = Some(min_start.map_or(lo, |m| m.min(lo)));
        max_due = Some(max_due.map_or(hi, |m| m.max(hi)));
    }

    let (first, last) = match (min_start, max_due) {
        (Some(min_start), Some(max_due)) => (
            add_days(min_start, -padding_days),
            add_days(max_due, padding_days),
        ),
        _ => {
            let window_start = start_of_month(today);
            let window_end = end_of_month(add_days(end_of_month(today), 32));
            (
                add_days(window_start, -EMPTY_WINDOW_PAD_DAYS),
                add_days(window_end, EMPTY_WINDOW_PAD_DAYS),
            )
        }
    };

    let len = whole_days_between(first, last) + 1;
    (0..len).map(|offset| add_days(first, offset)).collect()
}
