mod config;
mod error;
mod grid;
mod gui;
pub mod logging;
mod neighbors;
mod patterns;
mod scheduler;
mod session;
mod transition;

pub use config::Config;
pub use error::{Error, Result};
pub use grid::Grid;
pub use gui::App;
pub use neighbors::{count_neighbors, NEIGHBOR_OFFSETS};
pub use patterns::{Pattern, PATTERNS};
pub use scheduler::{Scheduler, SchedulerState, Snapshot, StepOutcome};
pub use session::Session;
pub use transition::{next_state, step, Transition};
