//! Numeral words
//!
//! Grongigo spells numbers in base nine as a single katakana run: digit
//! morphemes joined by `ド` (add) and `グ` (multiply). Multiplication binds a
//! single digit to the running product, addition flushes it:
//!
//! ```text
//! バギン グ バギン ド パパン  =  9 * 9 + 1  =  82
//! ```

use super::tables::{digits_longest_first, NUMERAL_ADD, NUMERAL_MULTIPLY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Digit(i64),
    Add,
    Multiply,
}

/// Read `word` as a numeral, or `None` if it is not one.
pub fn parse_numeral(word: &str) -> Option<i64> {
    let units = segment(word)?;
    evaluate(&units)
}

/// Split a word into digit and operator units, longest digit first.
/// Any unmatched residue means the word is not a numeral.
fn segment(word: &str) -> Option<Vec<Unit>> {
    if word.is_empty() {
        return None;
    }

    let mut units = Vec::new();
    let mut rest = word;

    while !rest.is_empty() {
        if let Some((digit, value)) = digits_longest_first()
            .iter()
            .find(|(digit, _)| rest.starts_with(digit))
        {
            units.push(Unit::Digit(*value));
            rest = &rest[digit.len()..];
        } else if let Some(tail) = rest.strip_prefix(NUMERAL_ADD) {
            units.push(Unit::Add);
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix(NUMERAL_MULTIPLY) {
            units.push(Unit::Multiply);
            rest = tail;
        } else {
            return None;
        }
    }

    Some(units)
}

fn evaluate(units: &[Unit]) -> Option<i64> {
    let mut total: i64 = 0;
    let mut product: Option<i64> = None;
    let mut iter = units.iter();

    while let Some(unit) = iter.next() {
        match unit {
            Unit::Digit(value) => {
                // Two digits with no operator between them
                if product.is_some() {
                    return None;
                }
                product = Some(*value);
            }
            Unit::Multiply => {
                let Some(Unit::Digit(value)) = iter.next() else {
                    return None;
                };
                product = Some(product.unwrap_or(1).checked_mul(*value)?);
            }
            Unit::Add => {
                if let Some(value) = product.take() {
                    total = total.checked_add(value)?;
                }
            }
        }
    }

    match product {
        Some(value) => total.checked_add(value),
        None => Some(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tables::DIGITS;

    #[test]
    fn test_single_digits() {
        for (word, value) in DIGITS {
            assert_eq!(parse_numeral(word), Some(*value), "digit {word}");
        }
    }

    #[test]
    fn test_addition() {
        assert_eq!(parse_numeral("バギンドパパン"), Some(10));
        assert_eq!(parse_numeral("バギンドドググ"), Some(11));
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        assert_eq!(parse_numeral("バギングバギンドパパン"), Some(82));
        assert_eq!(parse_numeral("バギンググシギ"), Some(27));
        assert_eq!(parse_numeral("バギングバギングドググ"), Some(162));
    }

    #[test]
    fn test_adjacent_digits_rejected() {
        assert_eq!(parse_numeral("パパンパパン"), None);
    }

    #[test]
    fn test_dangling_multiply_rejected() {
        assert_eq!(parse_numeral("バギング"), None);
    }

    #[test]
    fn test_residue_rejected() {
        assert_eq!(parse_numeral("バギンガ"), None);
        assert_eq!(parse_numeral("ヘンスウ"), None);
    }

    #[test]
    fn test_operators_alone() {
        // Additions with nothing to add sum to zero
        assert_eq!(parse_numeral("ド"), Some(0));
        assert_eq!(parse_numeral("ドド"), Some(0));
        assert_eq!(parse_numeral("グ"), None);
        assert_eq!(parse_numeral(""), None);
    }
}
