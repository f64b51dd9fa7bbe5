/// Renders a number of minutes as `Xh Ymin`.
///
/// Non-positive input renders as `0min`. Leftover minutes are rounded, and
/// each part is omitted when zero (`120` -> `2h`, `45` -> `45min`), so a
/// positive value under half a minute renders as an empty label. Hour counts
/// beyond `u64::MAX` saturate.
pub fn format_duration(total_minutes: f64) -> String {
    if total_minutes <= 0.0 {
        return "0min".to_string();
    }

    let hours = (total_minutes / 60.0).floor();
    let minutes = (total_minutes % 60.0).round();

    let mut parts = Vec::new();
    if hours > 0.0 {
        parts.push(format!("{}h", hours as u64));
    }
    if minutes > 0.0 {
        parts.push(format!("{}min", minutes as u64));
    }

    parts.join(" ")
}

/// Formats an amount in Brazilian reais, e.g. `R$ 70.000,00`.
pub fn format_brl(value: f64) -> String {
    if !value.is_finite() {
        return format!("R$ {}", value);
    }

    let cents = (value.abs() * 100.0).round() as u128;
    let units = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(120.0), "2h");
        assert_eq!(format_duration(0.0), "0min");
        assert_eq!(format_duration(-5.0), "0min");
        assert_eq!(format_duration(90.0), "1h 30min");
        assert_eq!(format_duration(280.0), "4h 40min");
        assert_eq!(format_duration(45.0), "45min");
        assert_eq!(format_duration(61.4), "1h 1min");
        assert_eq!(format_duration(0.2), "");
    }

    #[test]
    fn test_format_duration_saturates_huge_hours() {
        let label = format_duration(f64::MAX);
        assert!(label.starts_with(&format!("{}h", u64::MAX)));
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(70000.0), "R$ 70.000,00");
        assert_eq!(format_brl(3500.5), "R$ 3.500,50");
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(999.999), "R$ 1.000,00");
        assert_eq!(format_brl(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_brl(-1234.567), "-R$ 1.234,57");
        assert_eq!(format_brl(-0.001), "R$ 0,00");
    }
}
