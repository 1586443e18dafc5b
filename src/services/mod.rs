// Module exports for services

pub mod settings;
pub mod task_store;
