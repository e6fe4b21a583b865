//! # Numeric Text Cleanup
//!
//! Turns whatever the user typed into the text of a non-negative number.
//!
//! Rules, applied left to right:
//!
//! - ASCII digits are kept
//! - `.` and `,` are decimal separators; the first one is kept and written
//!   as `.`, later ones are dropped (their digits are kept)
//! - a separator with no digit before it gets a leading `0`
//! - everything else (signs, letters, spaces, grouping marks) is dropped
//! - leading zeros of the integer part are removed, keeping a single `0`
//!
//! With `discard_decimals` the text is cut at the first separator.
//!
//! Cleanup is idempotent: cleaning clean text returns it unchanged.
//!
//! ## Example
//!
//! ```rust
//! use thread_core::decimal::DecimalFormatter;
//!
//! let formatter = DecimalFormatter;
//! assert_eq!(formatter.cleanup("1,5.3 mm", false), "1.53");
//! assert_eq!(formatter.cleanup("12.9", true), "12");
//! assert_eq!(formatter.cleanup("-007", true), "7");
//! ```

use tracing::trace;

/// Separators accepted as the decimal point
const DECIMAL_SEPARATORS: [char; 2] = ['.', ','];

/// Cleans raw numeric text from input fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalFormatter;

impl DecimalFormatter {
    /// Clean `input`, dropping the fractional part when `discard_decimals` is set.
    pub fn cleanup(&self, input: &str, discard_decimals: bool) -> String {
        let mut integer_part = String::with_capacity(input.len());
        let mut fraction_part: Option<String> = None;

        for ch in input.chars() {
            if ch.is_ascii_digit() {
                match fraction_part.as_mut() {
                    Some(fraction) => fraction.push(ch),
                    None => integer_part.push(ch),
                }
            } else if DECIMAL_SEPARATORS.contains(&ch) && fraction_part.is_none() {
                if discard_decimals {
                    if integer_part.is_empty() {
                        integer_part.push('0');
                    }
                    break;
                }
                fraction_part = Some(String::new());
            }
        }

        let mut cleaned = strip_leading_zeros(&integer_part, fraction_part.is_some());
        if let Some(fraction) = fraction_part {
            cleaned.push('.');
            cleaned.push_str(&fraction);
        }

        trace!(input, cleaned = %cleaned, discard_decimals, "cleaned numeric text");
        cleaned
    }
}

/// Remove leading zeros, keeping one digit when the part would become empty.
///
/// A fractional number always keeps an integer digit, so `".5"` becomes `"0.5"`.
fn strip_leading_zeros(integer_part: &str, has_fraction: bool) -> String {
    let trimmed = integer_part.trim_start_matches('0');
    if trimmed.is_empty() && (has_fraction || !integer_part.is_empty()) {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const F: DecimalFormatter = DecimalFormatter;

    #[test]
    fn test_keeps_plain_numbers() {
        assert_eq!(F.cleanup("10", true), "10");
        assert_eq!(F.cleanup("2.5", false), "2.5");
        assert_eq!(F.cleanup("0", true), "0");
    }

    #[test]
    fn test_strips_invalid_characters() {
        assert_eq!(F.cleanup(" 1 2a3 ", true), "123");
        assert_eq!(F.cleanup("-5", true), "5");
        assert_eq!(F.cleanup("+2.0mm", false), "2.0");
        assert_eq!(F.cleanup("abc", false), "");
        assert_eq!(F.cleanup("", false), "");
    }

    #[test]
    fn test_collapses_multiple_separators() {
        assert_eq!(F.cleanup("1.2.3", false), "1.23");
        assert_eq!(F.cleanup("1,2,3", false), "1.23");
        assert_eq!(F.cleanup("1..5", false), "1.5");
    }

    #[test]
    fn test_comma_becomes_point() {
        assert_eq!(F.cleanup("1,5", false), "1.5");
    }

    #[test]
    fn test_discard_decimals_truncates() {
        assert_eq!(F.cleanup("12.9", true), "12");
        assert_eq!(F.cleanup("12,9.4", true), "12");
        assert_eq!(F.cleanup(".9", true), "0");
    }

    #[test]
    fn test_leading_separator_gets_zero() {
        assert_eq!(F.cleanup(".5", false), "0.5");
        assert_eq!(F.cleanup(".", false), "0.");
    }

    #[test]
    fn test_trailing_separator_is_kept_while_typing() {
        assert_eq!(F.cleanup("3.", false), "3.");
        assert_eq!("3.".parse::<f64>().unwrap(), 3.0);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(F.cleanup("000", true), "0");
        assert_eq!(F.cleanup("007", true), "7");
        assert_eq!(F.cleanup("00.50", false), "0.50");
    }

    #[test]
    fn test_cleaned_text_parses() {
        assert_eq!(F.cleanup("x1.5y", false).parse::<f64>().unwrap(), 1.5);
        assert_eq!(F.cleanup("20.7", true).parse::<u32>().unwrap(), 20);
    }

    proptest! {
        #[test]
        fn cleanup_is_idempotent(input in ".{0,24}", discard in any::<bool>()) {
            let once = F.cleanup(&input, discard);
            let twice = F.cleanup(&once, discard);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn cleanup_output_is_numeric(input in "[0-9.,a-z +-]{0,16}", discard in any::<bool>()) {
            let cleaned = F.cleanup(&input, discard);
            prop_assert!(cleaned.chars().all(|c| c.is_ascii_digit() || c == '.'));
            let max_points = if discard { 0 } else { 1 };
            prop_assert!(cleaned.matches('.').count() <= max_points);
            if !cleaned.is_empty() {
                prop_assert!(cleaned.parse::<f64>().is_ok());
            }
        }
    }
}
