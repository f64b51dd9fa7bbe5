use tracing::{debug, trace};

use crate::error::ValidationError;
use crate::input::{validate, GoalInput, PlanParams};
use crate::model::plan::{CalculationResult, MonthEntry, MonthlyBreakdown};
use crate::service::format::format_duration;
use crate::time::{month_name, months_between};

/// Spreads the monthly goal over every month between the two input dates.
///
/// Each month keeps the full base goal, divided evenly across its business
/// days, then scaled by the adjustment percent. Sales and time per day are
/// derived from the adjusted daily goal.
pub fn compute_goal_plan(input: &GoalInput) -> Result<CalculationResult, ValidationError> {
    let params = validate(input).map_err(|err| {
        debug!(kind = err.kind(), "rejected goal plan input");
        err
    })?;

    let months = months_between(params.start, params.end);
    if months.is_empty() {
        return Err(ValidationError::EmptyPeriod);
    }

    let total_business_days: u32 = months.iter().map(|m| m.business_days).sum();
    if total_business_days == 0 {
        return Err(ValidationError::NoBusinessDays);
    }

    let breakdown: Vec<MonthlyBreakdown> = months
        .iter()
        .map(|entry| breakdown_month(entry, &params))
        .collect();

    let total_goal: f64 = breakdown.iter().map(|b| b.monthly_goal).sum();
    let average_daily_goal = total_goal / total_business_days as f64;
    trace!(total_goal, total_business_days, average_daily_goal, "goal plan computed");

    Ok(CalculationResult {
        total_goal,
        monthly_goal_base: params.monthly_goal,
        start_date: input.start_date.clone(),
        end_date: input.end_date.clone(),
        total_business_days,
        average_daily_goal,
        breakdown,
    })
}

fn breakdown_month(entry: &MonthEntry, params: &PlanParams) -> MonthlyBreakdown {
    let days = entry.business_days as f64;

    let base_daily_goal = if entry.business_days > 0 {
        params.monthly_goal / days
    } else {
        0.0
    };
    let daily_goal = base_daily_goal * (1.0 + params.adjustment_percent / 100.0);
    let monthly_goal = daily_goal * days;

    // A partial sale still has to be made in full. Ratios too large for a
    // u64 (including an overflowing division) saturate at u64::MAX.
    let sales_per_day = if daily_goal > 0.0 {
        (daily_goal / params.sale_value).ceil().min(u64::MAX as f64) as u64
    } else {
        0
    };
    let minutes_per_day = sales_per_day as f64 * params.time_per_sale;

    MonthlyBreakdown {
        month_label: month_name(entry.month_index).to_string(),
        year: entry.year,
        business_days: entry.business_days,
        monthly_goal,
        daily_goal,
        sales_per_day,
        time_per_day_label: format_duration(minutes_per_day),
    }
}
