use serde::{Deserialize, Serialize};

/// One calendar month of the planning period, as produced by month enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthEntry {
    pub year: i32,
    pub month_index: u32, // 0 = January
    pub business_days: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBreakdown {
    #[serde(rename = "month")]
    pub month_label: String,
    pub year: i32,
    pub business_days: u32,
    /// Adjusted goal for the whole month.
    pub monthly_goal: f64,
    /// Adjusted goal per business day.
    pub daily_goal: f64,
    pub sales_per_day: u64,
    #[serde(rename = "timePerDay")]
    pub time_per_day_label: String,
}

impl MonthlyBreakdown {
    /// "Mês/Ano" label, e.g. `Novembro 2025`.
    pub fn period_label(&self) -> String {
        format!("{} {}", self.month_label, self.year)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub total_goal: f64,
    #[serde(rename = "monthlyGoal")]
    pub monthly_goal_base: f64,
    // Echoed as typed by the user, not normalized.
    pub start_date: String,
    pub end_date: String,
    pub total_business_days: u32,
    pub average_daily_goal: f64,
    pub breakdown: Vec<MonthlyBreakdown>,
}

impl CalculationResult {
    pub fn month_count(&self) -> usize {
        self.breakdown.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CalculationResult {
        CalculationResult {
            total_goal: 70000.0,
            monthly_goal_base: 70000.0,
            start_date: "2025-11-01".to_string(),
            end_date: "2025-11-30".to_string(),
            total_business_days: 20,
            average_daily_goal: 3500.0,
            breakdown: vec![MonthlyBreakdown {
                month_label: "Novembro".to_string(),
                year: 2025,
                business_days: 20,
                monthly_goal: 70000.0,
                daily_goal: 3500.0,
                sales_per_day: 14,
                time_per_day_label: "4h 40min".to_string(),
            }],
        }
    }

    #[test]
    fn test_period_label() {
        let result = sample();
        assert_eq!(result.breakdown[0].period_label(), "Novembro 2025");
        assert_eq!(result.month_count(), 1);
    }

    #[test]
    fn test_serializes_with_result_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["totalGoal"], 70000.0);
        assert_eq!(json["monthlyGoal"], 70000.0);
        assert_eq!(json["totalBusinessDays"], 20);
        assert_eq!(json["averageDailyGoal"], 3500.0);
        assert_eq!(json["startDate"], "2025-11-01");

        let row = &json["breakdown"][0];
        assert_eq!(row["month"], "Novembro");
        assert_eq!(row["businessDays"], 20);
        assert_eq!(row["dailyGoal"], 3500.0);
        assert_eq!(row["salesPerDay"], 14);
        assert_eq!(row["timePerDay"], "4h 40min");
    }
}
