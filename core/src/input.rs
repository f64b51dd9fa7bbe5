use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time::parse_iso_date;

/// Raw, unparsed form values as typed by the user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct GoalInput {
    pub monthly_goal: String,
    pub sale_value: String,
    pub time_per_sale: String,
    pub adjustment_percent: String,
    pub start_date: String,
    pub end_date: String,
}

/// Validated numeric parameters of a goal plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanParams {
    pub monthly_goal: f64,
    pub sale_value: f64,
    pub time_per_sale: f64, // minutes
    pub adjustment_percent: f64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Checks the raw input, reporting only the first problem found.
///
/// Order: goal, sale value, time per sale, dates, date range. The adjustment
/// never fails: anything that is not a finite number counts as 0.
pub fn validate(input: &GoalInput) -> Result<PlanParams, ValidationError> {
    let monthly_goal = parse_positive(&input.monthly_goal).ok_or(ValidationError::InvalidGoal)?;
    let sale_value = parse_positive(&input.sale_value).ok_or(ValidationError::InvalidSaleValue)?;
    let time_per_sale =
        parse_positive(&input.time_per_sale).ok_or(ValidationError::InvalidTimePerSale)?;
    let adjustment_percent = parse_number(&input.adjustment_percent).unwrap_or(0.0);

    let start = parse_iso_date(&input.start_date)?;
    let end = parse_iso_date(&input.end_date)?;
    if start > end {
        return Err(ValidationError::DateRangeInverted);
    }

    Ok(PlanParams {
        monthly_goal,
        sale_value,
        time_per_sale,
        adjustment_percent,
        start,
        end,
    })
}

/// Parses a finite decimal number, ignoring surrounding whitespace.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_positive(raw: &str) -> Option<f64> {
    parse_number(raw).filter(|v| *v > 0.0)
}
