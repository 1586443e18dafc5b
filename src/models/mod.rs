// Module exports for models

pub mod settings;
pub mod task;
