//! Application services for daily planning.

mod config;
mod observers;
mod planner;

pub use config::PlannerConfig;
pub use observers::{ChangeNotifier, PlannerEvent, SubscriptionId};
pub use planner::{DailyPlanner, PlannerError, PlannerResult};
