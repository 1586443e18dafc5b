// Taskgrid demo binary
// Headless smoke harness: seeds an in-memory store, renders a month layout
// as text, then exercises a drag-reschedule and a batched flush.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};

use taskgrid::layout::{month_layout, timeline_layout};
use taskgrid::models::task::{Task, TaskPriority, TaskStatus};
use taskgrid::schedule::ScheduleBoard;
use taskgrid::services::settings::SettingsService;
use taskgrid::services::task_store::{InMemoryTaskStore, TaskStore};

fn sample_tasks(today: NaiveDate) -> Vec<Task> {
    let day = |offset: i64| taskgrid::utils::date::add_days(today, offset);
    vec![
        Task::builder("t-1", "Design review")
            .status(TaskStatus::InProgress)
            .priority(TaskPriority::High)
            .start_date(day(-2))
            .due_date(day(3))
            .build(),
        Task::builder("t-2", "Write migration guide")
            .start_date(day(0))
            .due_date(day(1))
            .build(),
        Task::builder("t-3", "Quarterly goals")
            .priority(TaskPriority::Low)
            .start_date(day(1))
            .build(),
        Task::builder("t-4", "Release cut")
            .due_date(day(5))
            .build(),
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting taskgrid demo");

    let settings = SettingsService::load_or_default();
    let today = Local::now().date_naive();

    let store = InMemoryTaskStore::new();
    store.seed(sample_tasks(today));
    let tasks = store.fetch_tasks("demo").await?;

    // Month view: lane occupancy per day.
    let month = month_layout(today, &tasks, &settings);
    println!("Month grid for {}-{:02}:", today.year(), today.month());
    for (grid_day, lanes) in month.days.iter().zip(&month.lanes) {
        if !grid_day.is_current_month || lanes.occupied() == 0 {
            continue;
        }
        let slots: Vec<String> = lanes
            .slots
            .iter()
            .map(|slot| slot.clone().unwrap_or_else(|| "-".into()))
            .collect();
        println!(
            "  {}  [{}]  +{}",
            grid_day.date,
            slots.join(" | "),
            lanes.overflow
        );
    }

    // Timeline view: column placements.
    let timeline = timeline_layout(&tasks, today, &settings);
    println!("\nTimeline axis: {} day columns", timeline.axis.len());
    for (id, placement) in &timeline.placements {
        if placement.visible {
            println!(
                "  {}  col {} span {}",
                id, placement.start_index, placement.span_days
            );
        }
    }

    // Drag t-2 five columns to the right and flush the change.
    let mut board = ScheduleBoard::new(tasks, timeline.axis.clone());
    if board.begin_drag("t-2", 400.0) {
        if let Some(index) = board.drop_day_index(600.0, 40.0) {
            let outcome = board.complete_drop("t-2", index);
            println!("\nDrag t-2 -> {:?}", outcome);
        }
    }
    board.flush_changes(&store).await?;
    println!(
        "Flushed; store now has t-2 starting {:?}",
        store.get("t-2").and_then(|task| task.start_date)
    );

    Ok(())
}
