// Taskgrid Library
// Task scheduling and layout engine for calendar, timeline and gantt views

pub mod layout;
pub mod models;
pub mod schedule;
pub mod services;
pub mod utils;
