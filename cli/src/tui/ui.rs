use std::ops::Range;

use metas_core::{format_brl, MonthlyBreakdown};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Padding, Paragraph},
};

use crate::tui::app::PlanApp;

struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    goal: Color,
    selected: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    goal: Color::Green,
    selected: Color::Yellow,
};

pub fn draw(frame: &mut Frame, app: &PlanApp) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Chart + side panels
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, main_layout[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65),
            Constraint::Length(1),
            Constraint::Percentage(35),
        ])
        .split(main_layout[1]);

    draw_chart(frame, app, content_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(1)])
        .split(content_chunks[2]);

    draw_summary(frame, app, side_chunks[0]);
    draw_month_detail(frame, app.current_month(), side_chunks[1]);

    let help = Line::from(vec![
        Span::styled("NAV: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), main_layout[2]);
}

fn draw_header(frame: &mut Frame, app: &PlanApp, area: Rect) {
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Min(1),
            Constraint::Length(30),
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        "CALCULADORA DE METAS",
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(title, header_layout[0]);

    let current = app
        .current_month()
        .map(|m| format!(" {} ", m.period_label()))
        .unwrap_or_default();
    let arrow_style = |enabled: bool| Style::default().fg(if enabled { THEME.text } else { THEME.muted });
    let nav = Line::from(vec![
        Span::styled(" < ", arrow_style(app.has_previous())),
        Span::styled(current, Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        Span::styled(" > ", arrow_style(app.has_next())),
    ]);
    let nav = Paragraph::new(nav)
        .alignment(Alignment::Right)
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(nav, header_layout[2]);

    let rule = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));
    frame.render_widget(rule, area);
}

/// Short bar label such as `Nov/25`.
fn short_label(month: &MonthlyBreakdown) -> String {
    let name: String = month.month_label.chars().take(3).collect();
    format!("{}/{:02}", name, month.year.rem_euclid(100))
}

fn compact_amount(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else {
        format!("{:.0}", value)
    }
}

const BAR_WIDTH: u16 = 7;
const BAR_GAP: u16 = 1;

/// Range of months whose bars are drawn, keeping `selected` on screen.
fn visible_range(len: usize, selected: usize, capacity: usize) -> Range<usize> {
    let capacity = capacity.max(1);
    let start = (selected + 1).saturating_sub(capacity);
    start..len.min(start + capacity)
}

fn draw_chart(frame: &mut Frame, app: &PlanApp, area: Rect) {
    let inner_width = area.width.saturating_sub(2);
    let capacity = ((inner_width + BAR_GAP) / (BAR_WIDTH + BAR_GAP)) as usize;
    let window = visible_range(app.result.breakdown.len(), app.selected, capacity);

    let bars: Vec<Bar> = app.result.breakdown[window.clone()]
        .iter()
        .zip(window)
        .map(|(month, index)| {
            let color = if index == app.selected { THEME.selected } else { THEME.goal };
            Bar::default()
                .label(short_label(month))
                .value(month.monthly_goal.max(0.0).round() as u64)
                .style(Style::default().fg(color))
                .text_value(compact_amount(month.monthly_goal))
        })
        .collect();

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(" Meta Mensal (Ajustada) ");

    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn metric_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(THEME.muted)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

fn draw_summary(frame: &mut Frame, app: &PlanApp, area: Rect) {
    let result = &app.result;
    let lines = vec![
        metric_line("Meta total:", format_brl(result.total_goal), THEME.goal),
        metric_line("Meta base:", format_brl(result.monthly_goal_base), THEME.text),
        metric_line("Período:", format!("{} meses", result.month_count()), THEME.text),
        metric_line("Dias úteis:", result.total_business_days.to_string(), THEME.text),
        metric_line("Média diária:", format_brl(result.average_daily_goal), THEME.goal),
    ];

    let summary = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .padding(Padding::horizontal(1))
            .title(" Resumo da Meta "),
    );
    frame.render_widget(summary, area);
}

fn draw_month_detail(frame: &mut Frame, month: Option<&MonthlyBreakdown>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .padding(Padding::horizontal(1))
        .title(" Detalhamento ");

    let Some(month) = month else {
        frame.render_widget(Paragraph::new("Sem dados").block(block), area);
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            month.period_label(),
            Style::default().fg(THEME.selected).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        metric_line("Dias úteis:", month.business_days.to_string(), THEME.text),
        metric_line("Meta mensal:", format_brl(month.monthly_goal), THEME.goal),
        metric_line("Meta diária:", format_brl(month.daily_goal), THEME.goal),
        metric_line("Vendas/dia:", month.sales_per_day.to_string(), THEME.text),
        metric_line("Tempo/dia:", month.time_per_day_label.clone(), THEME.text),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_label_and_amount() {
        let month = MonthlyBreakdown {
            month_label: "Março".to_string(),
            year: 2026,
            business_days: 22,
            monthly_goal: 70000.0,
            daily_goal: 3181.82,
            sales_per_day: 13,
            time_per_day_label: "4h 20min".to_string(),
        };
        assert_eq!(short_label(&month), "Mar/26");
        assert_eq!(compact_amount(70000.0), "70.0k");
        assert_eq!(compact_amount(950.4), "950");
    }

    #[test]
    fn test_visible_range_follows_selection() {
        assert_eq!(visible_range(9, 0, 6), 0..6);
        assert_eq!(visible_range(9, 5, 6), 0..6);
        assert_eq!(visible_range(9, 6, 6), 1..7);
        assert_eq!(visible_range(9, 8, 6), 3..9);
        assert_eq!(visible_range(3, 2, 6), 0..3);
        assert_eq!(visible_range(9, 4, 0), 4..5);
    }
}
