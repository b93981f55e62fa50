//! Display formatting for listing cards, detail pages and filter pills.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Default cut-off for card descriptions.
pub const DEFAULT_TRUNCATE_LEN: usize = 150;

/// Street and city/state halves of a free-text address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressParts {
    pub street: String,
    pub city_state: String,
}

/// Compact price label: `$1.3M`, `$450K`, `$950`.
#[must_use]
pub fn format_price(price: f64) -> String {
    if price >= 1_000_000.0 {
        let millions = (price / 100_000.0).round() / 10.0;
        return format!("${millions:.1}M");
    }
    if price >= 1_000.0 {
        let thousands = (price / 1_000.0).round();
        return format!("${thousands:.0}K");
    }
    format!("${}", format_count(price))
}

/// `1,850 sq ft`.
#[must_use]
pub fn format_square_feet(square_feet: f64) -> String {
    format!("{} sq ft", format_count(square_feet))
}

/// Number with thousands separators and at most three fraction digits.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_count(value: f64) -> String {
    let scaled = (value.abs() * 1_000.0).round() as u64;
    let whole = (scaled / 1_000).to_string();
    let fraction = scaled % 1_000;

    let mut out = String::with_capacity(whole.len() + whole.len() / 3 + 5);
    if value < 0.0 && scaled > 0 {
        out.push('-');
    }
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if fraction > 0 {
        let digits = format!("{fraction:03}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Split on the first comma; the remainder is the city/state part.
#[must_use]
pub fn split_address(address: &str) -> AddressParts {
    match address.split_once(',') {
        Some((street, rest)) => AddressParts {
            street: street.trim().to_owned(),
            city_state: rest.trim().to_owned(),
        },
        None => AddressParts {
            street: address.to_owned(),
            city_state: String::new(),
        },
    }
}

#[must_use]
pub fn bedroom_text(bedrooms: f64) -> String {
    if is_one(bedrooms) {
        "1 bed".to_owned()
    } else {
        format!("{} beds", format_count(bedrooms))
    }
}

#[must_use]
pub fn bathroom_text(bathrooms: f64) -> String {
    if is_one(bathrooms) {
        "1 bath".to_owned()
    } else {
        format!("{} baths", format_count(bathrooms))
    }
}

/// Cut `text` to `max_len` characters and mark the cut with `...`.
#[must_use]
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_owned();
    }
    let head: String = text.chars().take(max_len).collect();
    format!("{}...", head.trim())
}

fn is_one(value: f64) -> bool {
    (value - 1.0).abs() < f64::EPSILON
}
