//! Currency field helpers: grouped-thousands display, plain digits while
//! editing.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy::MidpointAwayFromZero;

/// Parse a currency-formatted field. Thousands separators are stripped
/// before parsing; anything that still fails to parse is `None`.
pub fn parse_amount(text: &str) -> Option<f64> {
    let plain = strip_grouping(text);
    let plain = plain.trim();
    if plain.is_empty() {
        return None;
    }
    plain.parse::<Decimal>().ok()?.to_f64()
}

/// Format an amount for display: two decimals, grouped thousands.
/// `10000` becomes `"10,000.00"`.
pub fn format_amount(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(2, MidpointAwayFromZero);
            group_thousands(&format!("{rounded:.2}"))
        }
        // Out of Decimal range; fall back to ungrouped formatting.
        None => format!("{value:.2}"),
    }
}

/// The focus-in transform: drop the separators so the field holds plain
/// digits while it is being edited.
pub fn strip_grouping(text: &str) -> String {
    text.replace(',', "")
}

fn group_thousands(plain: &str) -> String {
    let (sign, rest) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(plain.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
