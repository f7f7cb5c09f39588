//! Messy currency parsing
//!
//! Past-performance values arrive as whatever the vendor wrote:
//! `"$30,000"`, `"30000"`, `"approx $25,000 (firm fixed price)"`. The
//! evaluator only needs a whole-dollar amount, and an unparseable value
//! must degrade to zero, never abort the evaluation.

/// Parse the first run of digits and thousands separators in `raw` into a
/// whole-dollar amount, ignoring any currency symbol before it.
///
/// A value with no digits at all contributes 0. Amounts beyond `u64`
/// saturate instead of wrapping.
pub fn parse_amount(raw: &str) -> u64 {
    let Some(start) = raw.find(|c: char| c.is_ascii_digit()) else {
        return 0;
    };

    raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(char::is_ascii_digit)
        .fold(0u64, |amount, digit| {
            amount
                .saturating_mul(10)
                .saturating_add(u64::from(digit) - u64::from('0'))
        })
}

/// Format a whole-dollar amount with thousands separators, e.g. `$25,000`
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${grouped}")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_amount_is_total(raw in "\\PC{0,40}") {
            // never panics, whatever the vendor wrote
            let _ = parse_amount(&raw);
        }

        #[test]
        fn formatted_amounts_round_trip(amount in 0u64..10_000_000_000) {
            prop_assert_eq!(parse_amount(&format_usd(amount)), amount);
        }
    }
}
