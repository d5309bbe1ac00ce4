//! Amount extraction from free-text notification bodies.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::money::Amount;

/// Currency-prefixed decimal pattern: an ASCII `$` immediately followed by
/// one or more digits, optionally a decimal point and exactly two digits.
const AMOUNT_PATTERN: &str = r"\$\d+(\.\d{2})?";

static AMOUNT_REGEX: OnceLock<Regex> = OnceLock::new();

fn amount_regex() -> &'static Regex {
    AMOUNT_REGEX.get_or_init(|| Regex::new(AMOUNT_PATTERN).expect("amount pattern compiles"))
}

/// Extracts the first currency-prefixed amount from `text`.
///
/// The first match in left-to-right scan order wins; later occurrences are
/// ignored. Absence of an amount is a normal outcome for non-transaction
/// text and yields `None`, as does a matched numeral that fails to parse or
/// is not positive. Never errors.
#[must_use]
pub fn extract_amount(text: &str) -> Option<Amount> {
    let matched = amount_regex().find(text)?.as_str();
    let numeral = matched.trim_start_matches('$');

    let value = match Decimal::from_str(numeral) {
        Ok(value) => value,
        Err(err) => {
            // Unreachable given the pattern, but a parse failure must yield
            // "no value found" rather than fail the caller.
            tracing::debug!(numeral, error = %err, "matched amount failed numeral parse");
            return None;
        }
    };

    match Amount::new(value) {
        Ok(amount) => Some(amount),
        Err(err) => {
            tracing::debug!(matched, error = %err, "matched amount rejected");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn no_currency_prefixed_numeral_yields_none() {
        assert!(extract_amount("").is_none());
        assert!(extract_amount("Thank you for using the app").is_none());
        assert!(extract_amount("paid 12.34 dollars").is_none());
        assert!(extract_amount("$ 12.34 has a space after the symbol").is_none());
    }

    #[test]
    fn whole_dollar_amount_extracts_with_cent_scale() {
        let amount = extract_amount("You paid $12 to Store X").unwrap();
        assert_eq!(amount.as_decimal(), dec!(12.00));
        assert_eq!(amount.to_cents(), 1200);
    }

    #[test]
    fn dollars_and_cents_extract_exactly() {
        let amount = extract_amount("Payment of $12.34 complete").unwrap();
        assert_eq!(amount.as_decimal(), dec!(12.34));
    }

    #[test]
    fn first_match_wins() {
        let amount = extract_amount("Paid $12.34 at store, prior charge $5.00").unwrap();
        assert_eq!(amount.as_decimal(), dec!(12.34));
    }

    #[test]
    fn one_decimal_digit_only_matches_the_whole_dollars() {
        // "$12.3" does not satisfy the two-decimal form, so the match is "$12".
        let amount = extract_amount("charge of $12.3 applied").unwrap();
        assert_eq!(amount.as_decimal(), dec!(12.00));
    }

    #[test]
    fn zero_amount_is_rejected() {
        assert!(extract_amount("refund preview: $0.00").is_none());
        assert!(extract_amount("balance change $0").is_none());
    }

    #[test]
    fn amount_embedded_mid_sentence_extracts() {
        let amount = extract_amount("You paid $42.00 to Store X").unwrap();
        assert_eq!(amount.as_decimal(), dec!(42.00));
    }
}
