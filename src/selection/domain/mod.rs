//! Domain model for the daily selection.

mod error;
mod mode;
mod selection;
mod strategy;

pub use error::ParseGenerationModeError;
pub use mode::GenerationMode;
pub use selection::DailySelection;
pub use strategy::{DAILY_LIMIT, select};
