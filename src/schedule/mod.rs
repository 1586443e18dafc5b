// Interactive rescheduling
// Drag state, dirty tracking and the working-copy board.

pub mod board;
pub mod dirty;
pub mod drag;

pub use board::{DropOutcome, FlushError, ScheduleBoard};
pub use dirty::DirtySet;
pub use drag::{compute_drop_day_index, DragSession};
