pub mod error;
pub mod input;
pub mod model;
pub mod service;
pub mod time;
pub mod usecase;

pub use error::ValidationError;
pub use input::{validate, GoalInput, PlanParams};
pub use model::plan::{CalculationResult, MonthEntry, MonthlyBreakdown};
pub use service::format::{format_brl, format_duration};
pub use time::{count_business_days, month_name, months_between, parse_iso_date, MONTH_NAMES_PT};
pub use usecase::goal_plan::compute_goal_plan;
