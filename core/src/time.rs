use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::error::ValidationError;
use crate::model::plan::MonthEntry;

pub const MONTH_NAMES_PT: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
    "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
];

/// Portuguese name of a zero-based month index. Out-of-range indices wrap.
pub fn month_name(month_index: u32) -> &'static str {
    MONTH_NAMES_PT[(month_index % 12) as usize]
}

/// Counts Monday–Friday days of the given month (`month_index` 0 = January).
///
/// Works on plain calendar dates, so the result never depends on the local
/// clock or timezone. An out-of-range month yields 0.
pub fn count_business_days(year: i32, month_index: u32) -> u32 {
    if month_index > 11 {
        return 0;
    }
    let Some(mut date) = NaiveDate::from_ymd_opt(year, month_index + 1, 1) else {
        return 0;
    };

    let mut business_days = 0;
    while date.month0() == month_index {
        if is_business_day(date.weekday()) {
            business_days += 1;
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    business_days
}

fn is_business_day(weekday: Weekday) -> bool {
    !matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Parses a `YYYY-MM-DD` date.
///
/// The input must split into exactly three numeric components that form a
/// real calendar day (`2025-02-30` is rejected, not rolled over).
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let parts: Vec<&str> = input.split('-').collect();
    if parts.len() != 3 {
        return Err(ValidationError::InvalidDate);
    }

    let year: i32 = parts[0].parse().map_err(|_| ValidationError::InvalidDate)?;
    let month: u32 = parts[1].parse().map_err(|_| ValidationError::InvalidDate)?;
    let day: u32 = parts[2].parse().map_err(|_| ValidationError::InvalidDate)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(ValidationError::InvalidDate)
}

/// Every calendar month from `start`'s month to `end`'s month, inclusive.
///
/// Only year and month matter; the day components are discarded. Returns an
/// empty list when `start` lies in a later month than `end`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> Vec<MonthEntry> {
    let last = (end.year(), end.month0());
    let (mut year, mut month_index) = (start.year(), start.month0());

    let mut months = Vec::new();
    while (year, month_index) <= last {
        let business_days = count_business_days(year, month_index);
        debug!(year, month = month_index + 1, business_days, "enumerated month");
        months.push(MonthEntry {
            year,
            month_index,
            business_days,
        });

        if month_index == 11 {
            year += 1;
            month_index = 0;
        } else {
            month_index += 1;
        }
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn days_in_month(year: i32, month_index: u32) -> u32 {
        let first = date(year, month_index + 1, 1);
        let next = if month_index == 11 {
            date(year + 1, 1, 1)
        } else {
            date(year, month_index + 2, 1)
        };
        (next - first).num_days() as u32
    }

    #[test]
    fn test_count_business_days_known_months() {
        assert_eq!(count_business_days(2025, 10), 20); // Nov 2025
        assert_eq!(count_business_days(2025, 11), 23); // Dec 2025
        assert_eq!(count_business_days(2026, 1), 20); // Feb 2026
        assert_eq!(count_business_days(2024, 1), 21); // Feb 2024, leap year
        assert_eq!(count_business_days(2026, 4), 21); // May 2026
    }

    #[test]
    fn test_count_business_days_matches_weekend_subtraction() {
        for year in 1995..=2035 {
            for month_index in 0..12 {
                let total = days_in_month(year, month_index);
                let weekends = (1..=total)
                    .filter(|d| {
                        let wd = date(year, month_index + 1, *d).weekday();
                        wd == Weekday::Sat || wd == Weekday::Sun
                    })
                    .count() as u32;

                let counted = count_business_days(year, month_index);
                assert_eq!(counted, total - weekends, "{}-{}", year, month_index + 1);
                assert!((20..=23).contains(&counted));
            }
        }
    }

    #[test]
    fn test_count_business_days_out_of_range_month() {
        assert_eq!(count_business_days(2025, 12), 0);
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2025-11-01"), Ok(date(2025, 11, 1)));
        assert_eq!(parse_iso_date("2024-02-29"), Ok(date(2024, 2, 29)));

        assert_eq!(parse_iso_date("2025-02-30"), Err(ValidationError::InvalidDate));
        assert_eq!(parse_iso_date("2025-13-01"), Err(ValidationError::InvalidDate));
        assert_eq!(parse_iso_date("2025-11"), Err(ValidationError::InvalidDate));
        assert_eq!(parse_iso_date("2025-11-01-02"), Err(ValidationError::InvalidDate));
        assert_eq!(parse_iso_date("2025-aa-01"), Err(ValidationError::InvalidDate));
        assert_eq!(parse_iso_date(""), Err(ValidationError::InvalidDate));
    }

    #[test]
    fn test_months_between_crosses_year() {
        let months = months_between(date(2025, 11, 15), date(2026, 7, 1));
        assert_eq!(months.len(), 9);
        assert_eq!((months[0].year, months[0].month_index), (2025, 10));
        assert_eq!((months[2].year, months[2].month_index), (2026, 0));
        assert_eq!((months[8].year, months[8].month_index), (2026, 6));

        let total: u32 = months.iter().map(|m| m.business_days).sum();
        assert_eq!(total, 195);
    }

    #[test]
    fn test_months_between_single_and_inverted() {
        assert_eq!(months_between(date(2025, 11, 30), date(2025, 11, 1)).len(), 1);
        assert!(months_between(date(2025, 12, 1), date(2025, 11, 30)).is_empty());
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(0), "Janeiro");
        assert_eq!(month_name(2), "Março");
        assert_eq!(month_name(11), "Dezembro");
    }
}
