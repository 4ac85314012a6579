// src/variables/format.rs
//! German (de-DE) value formatting for resolved tokens.

use crate::model::{Lead, Property};
use chrono::{Datelike, NaiveDate};

/// Largest magnitude printed through the integer path.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Plain number: integers without fraction (`3`), others in shortest decimal form (`3.5`).
pub fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// de-DE grouping: `.` thousands separator, `,` decimal separator,
/// at most three fraction digits.
pub fn german_number(value: f64) -> String {
    if !value.is_finite() {
        return plain_number(value);
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// A set, non-zero number
fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Sale price, else monthly cold rent, else empty.
pub fn price(property: &Property) -> String {
    if let Some(sale) = nonzero(property.sale_price) {
        format!("{} €", german_number(sale))
    } else if let Some(rent) = nonzero(property.rent_cold) {
        format!("{} €/Monat", german_number(rent))
    } else {
        String::new()
    }
}

/// `<n> m²`, empty when unset or zero
pub fn area(value: Option<f64>) -> String {
    nonzero(value)
        .map(|v| format!("{} m²", plain_number(v)))
        .unwrap_or_default()
}

pub fn energy_consumption(value: Option<f64>) -> String {
    nonzero(value)
        .map(|v| format!("{} kWh/(m²·a)", plain_number(v)))
        .unwrap_or_default()
}

/// Optional number as plain text; zero is printed
pub fn count(value: Option<f64>) -> String {
    value.map(plain_number).unwrap_or_default()
}

/// de-DE short date without zero padding: `5.3.2024`
pub fn short_date(date: NaiveDate) -> String {
    format!("{}.{}.{}", date.day(), date.month(), date.year())
}

pub fn year(date: NaiveDate) -> String {
    format!("{:04}", date.year())
}

/// Explicit name, else `first last`, else the generic `Interessent`.
pub fn lead_name(lead: &Lead) -> String {
    if let Some(name) = lead.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        return name.to_string();
    }
    let joined = join_name(lead);
    if joined.is_empty() {
        "Interessent".to_string()
    } else {
        joined
    }
}

/// Explicit greeting, else a neutral salutation built from the name.
pub fn lead_greeting(lead: &Lead) -> String {
    if let Some(greeting) = lead.greeting.as_deref().filter(|g| !g.trim().is_empty()) {
        return greeting.to_string();
    }
    match lead.first_name.as_deref().filter(|f| !f.trim().is_empty()) {
        Some(_) => format!("Sehr geehrte/r {}", join_name(lead)),
        None => "Sehr geehrte Damen und Herren".to_string(),
    }
}

fn join_name(lead: &Lead) -> String {
    format!(
        "{} {}",
        lead.first_name.as_deref().unwrap_or(""),
        lead.last_name.as_deref().unwrap_or("")
    )
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PropertyId;

    #[test]
    fn test_german_number() {
        assert_eq!(german_number(450000.0), "450.000");
        assert_eq!(german_number(1250.0), "1.250");
        assert_eq!(german_number(999.0), "999");
        assert_eq!(german_number(1234567.891), "1.234.567,891");
        assert_eq!(german_number(12.5), "12,5");
        assert_eq!(german_number(0.12345), "0,123");
        assert_eq!(german_number(-2500.0), "-2.500");
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(plain_number(3.0), "3");
        assert_eq!(plain_number(3.5), "3.5");
        assert_eq!(plain_number(120.25), "120.25");
    }

    #[test]
    fn test_price_prefers_sale_price() {
        let mut property = Property::new(PropertyId::new_v4());
        assert_eq!(price(&property), "");

        property.rent_cold = Some(1250.0);
        assert_eq!(price(&property), "1.250 €/Monat");

        property.sale_price = Some(450000.0);
        assert_eq!(price(&property), "450.000 €");
    }

    #[test]
    fn test_units() {
        assert_eq!(area(Some(85.0)), "85 m²");
        assert_eq!(area(Some(0.0)), "");
        assert_eq!(area(None), "");
        assert_eq!(energy_consumption(Some(72.5)), "72.5 kWh/(m²·a)");
        assert_eq!(count(Some(0.0)), "0");
    }

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(short_date(date), "5.3.2024");
        assert_eq!(year(date), "2024");
    }

    #[test]
    fn test_lead_name_and_greeting() {
        let mut lead = Lead::default();
        assert_eq!(lead_name(&lead), "Interessent");
        assert_eq!(lead_greeting(&lead), "Sehr geehrte Damen und Herren");

        lead.first_name = Some("Jonas".to_string());
        lead.last_name = Some("Weber".to_string());
        assert_eq!(lead_name(&lead), "Jonas Weber");
        assert_eq!(lead_greeting(&lead), "Sehr geehrte/r Jonas Weber");

        lead.name = Some("Dr. Jonas Weber".to_string());
        lead.greeting = Some("Lieber Jonas".to_string());
        assert_eq!(lead_name(&lead), "Dr. Jonas Weber");
        assert_eq!(lead_greeting(&lead), "Lieber Jonas");
    }
}
