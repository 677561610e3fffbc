//! Display formatting for dates and amounts.

use chrono::{Datelike, NaiveDateTime};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// "Mar 4, 2025".
pub fn format_date(dt: &NaiveDateTime) -> String {
    let month = MONTH_NAMES[dt.month0() as usize];
    format!("{} {}, {}", month, dt.day(), dt.year())
}

/// [`format_date`], or "N/A" when the backend sent no timestamp.
pub fn format_optional_date(dt: Option<&NaiveDateTime>) -> String {
    dt.map(format_date).unwrap_or_else(|| "N/A".to_string())
}

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// US dollar amount with grouping and cents: "$1,450.50".
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Whole thousands of dollars: "$453K".
pub fn format_thousands(amount: f64) -> String {
    format!("${:.0}K", amount / 1000.0)
}

/// Percentage without trailing zeros: "63%", "62.5%".
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn dates_use_short_month_names() {
        let dt = NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        assert_eq!(format_date(&dt), "Mar 4, 2025");
        assert_eq!(format_optional_date(None), "N/A");
    }

    #[test]
    fn currency_groups_and_rounds() {
        assert_eq!(format_currency(1450.5), "$1,450.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(-20.0), "-$20.00");
    }

    #[test]
    fn thousands_and_percent() {
        assert_eq!(format_thousands(452_800.0), "$453K");
        assert_eq!(format_percent(63.0), "63%");
        assert_eq!(format_percent(62.5), "62.5%");
    }
}
