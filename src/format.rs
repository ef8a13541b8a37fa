//! Value formatting helpers for printed documents.
//!
//! Every monetary amount renders with exactly two decimal places and
//! thousands separators; every date renders as a long-form Spanish label
//! (`7 de marzo de 2025`). Both routines are pure and locale-fixed so the
//! same record always produces the same text.

use chrono::{Datelike, NaiveDate};

use crate::record::Currency;

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Formats a monetary amount as `$1,234.50 MXN`.
pub fn money(amount: f64, currency: &Currency) -> String {
    format!("${} {}", decimal(amount), currency.label())
}

/// Formats an amount with grouped integer digits and two decimals.
pub fn decimal(amount: f64) -> String {
    // Render via the fixed-precision string so grouping sees the rounded
    // value, not the raw float.
    let fixed = format!("{:.2}", amount.abs());
    let (integer, fraction) = fixed
        .split_once('.')
        .unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (offset, digit) in integer.chars().enumerate() {
        if offset > 0 && (integer.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Formats a date as a long Spanish label, e.g. `7 de marzo de 2025`.
pub fn long_date(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} de {} de {}", date.day(), month, date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_renders_zero() {
        assert_eq!(money(0.0, &Currency::Mxn), "$0.00 MXN");
    }

    #[test]
    fn money_renders_fractional_amount() {
        assert_eq!(money(1234.5, &Currency::Mxn), "$1,234.50 MXN");
    }

    #[test]
    fn money_groups_millions() {
        assert_eq!(money(1_000_000.0, &Currency::Usd), "$1,000,000.00 USD");
    }

    #[test]
    fn decimal_rounds_to_two_places() {
        assert_eq!(decimal(0.5), "0.50");
        assert_eq!(decimal(999.999), "1,000.00");
    }

    #[test]
    fn decimal_keeps_sign_outside_grouping() {
        assert_eq!(decimal(-1234.5), "-1,234.50");
    }

    #[test]
    fn long_date_uses_spanish_month_names() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(long_date(date), "7 de marzo de 2025");
    }

    #[test]
    fn long_date_covers_year_boundaries() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(long_date(date), "31 de diciembre de 2024");
    }
}
