use metas_core::{format_brl, CalculationResult};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled, Debug, PartialEq)]
struct SummaryRow {
    #[tabled(rename = "Métrica")]
    metric: &'static str,
    #[tabled(rename = "Valor")]
    value: String,
}

#[derive(Tabled, Debug, PartialEq)]
struct BreakdownRow {
    #[tabled(rename = "Mês/Ano")]
    period: String,
    #[tabled(rename = "Dias Úteis")]
    business_days: u32,
    #[tabled(rename = "Meta Mensal (Ajustada)")]
    monthly_goal: String,
    #[tabled(rename = "Meta Diária (Ajustada)")]
    daily_goal: String,
    #[tabled(rename = "Vendas / Dia (mín.)")]
    sales_per_day: u64,
    #[tabled(rename = "Tempo / Dia")]
    time_per_day: String,
}

fn summary_rows(result: &CalculationResult) -> Vec<SummaryRow> {
    vec![
        SummaryRow {
            metric: "Meta Total (Ajustada)",
            value: format_brl(result.total_goal),
        },
        SummaryRow {
            metric: "Meta Mensal (Base)",
            value: format_brl(result.monthly_goal_base),
        },
        SummaryRow {
            metric: "Período",
            value: format!("{} meses", result.month_count()),
        },
        SummaryRow {
            metric: "Total de Dias Úteis",
            value: result.total_business_days.to_string(),
        },
        SummaryRow {
            metric: "Meta Diária Média (Ajustada)",
            value: format_brl(result.average_daily_goal),
        },
    ]
}

fn breakdown_rows(result: &CalculationResult) -> Vec<BreakdownRow> {
    result
        .breakdown
        .iter()
        .map(|month| BreakdownRow {
            period: month.period_label(),
            business_days: month.business_days,
            monthly_goal: format_brl(month.monthly_goal),
            daily_goal: format_brl(month.daily_goal),
            sales_per_day: month.sales_per_day,
            time_per_day: month.time_per_day_label.clone(),
        })
        .collect()
}

fn styled<T: Tabled>(rows: Vec<T>) -> Table {
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

/// Summary panel followed by the month-by-month table.
pub fn render(result: &CalculationResult) -> String {
    format!(
        "\x1b[1;32mResumo da Meta\x1b[0m ({} a {})\n{}\n\n\x1b[1;32mDetalhamento Mensal\x1b[0m\n{}",
        result.start_date,
        result.end_date,
        styled(summary_rows(result)),
        styled(breakdown_rows(result)),
    )
}
