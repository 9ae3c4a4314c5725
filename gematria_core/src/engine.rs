//! Gematria value calculation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Letter, Method};

/// Value of one recognized letter, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterResult {
    pub letter: char,
    pub value: u32,
}

/// Total value and per-letter breakdown of a text.
///
/// `total` always equals the sum of `letters[i].value`. It is widened to
/// `u64` so arbitrarily long input cannot overflow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GematriaResult {
    pub total: u64,
    pub letters: Vec<LetterResult>,
}

impl FromIterator<LetterResult> for GematriaResult {
    fn from_iter<I: IntoIterator<Item = LetterResult>>(iter: I) -> Self {
        let letters: Vec<LetterResult> = iter.into_iter().collect();
        let total = letters.iter().map(|l| u64::from(l.value)).sum();
        Self { total, letters }
    }
}

/// Compute the gematria value of `text`.
///
/// Characters other than the 27 Hebrew letters are skipped, so this never
/// fails: empty or non-Hebrew input yields a zero total and no letters.
#[must_use]
pub fn calculate(text: &str, method: Method) -> GematriaResult {
    let result: GematriaResult = text
        .chars()
        .filter_map(Letter::from_char)
        .map(|letter| LetterResult {
            letter: letter.as_char(),
            value: method.value_of(letter),
        })
        .collect();

    debug!(
        "Calculated {method} gematria over {} letters: {}",
        result.letters.len(),
        result.total
    );
    result
}

/// Like [`calculate`], taking a method identifier. Unknown identifiers are
/// treated as `standard`.
#[must_use]
pub fn calculate_by_id(text: &str, method_id: &str) -> GematriaResult {
    calculate(text, Method::from_id(method_id))
}

/// Whether `text` contains any code point in the Hebrew block (U+0590-U+05FF).
///
/// Vowel points and punctuation in the block count, even though
/// [`calculate`] ignores them.
#[must_use]
pub fn is_hebrew_text(text: &str) -> bool {
    text.chars().any(|c| ('\u{0590}'..='\u{05FF}').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(result: &GematriaResult) -> Vec<(char, u32)> {
        result.letters.iter().map(|l| (l.letter, l.value)).collect()
    }

    #[test]
    fn test_standard_aleph_bet_gimel() {
        let result = calculate("אבג", Method::Standard);
        assert_eq!(result.total, 6);
        assert_eq!(pairs(&result), vec![('א', 1), ('ב', 2), ('ג', 3)]);
    }

    #[test]
    fn test_tav_standard_and_reduced() {
        assert_eq!(pairs(&calculate("ת", Method::Standard)), vec![('ת', 400)]);
        let reduced = calculate("ת", Method::Reduced);
        assert_eq!(reduced.total, 4);
        assert_eq!(pairs(&reduced), vec![('ת', 4)]);
    }

    #[test]
    fn test_final_kaf_equals_kaf() {
        let final_kaf = calculate("ך", Method::Standard);
        let kaf = calculate("כ", Method::Standard);
        assert_eq!(final_kaf.letters[0].value, kaf.letters[0].value);
        assert_eq!(final_kaf.letters[0].letter, 'ך');
    }

    #[test]
    fn test_shin_ordinal() {
        assert_eq!(calculate("ש", Method::Ordinal).letters[0].value, 21);
        assert_eq!(calculate("ץ", Method::Ordinal).letters[0].value, 18);
    }

    #[test]
    fn test_shalom() {
        assert_eq!(calculate("שלום", Method::Standard).total, 376);
    }

    #[test]
    fn test_skips_non_letters() {
        // qamats, maqaf, space, Latin and digits
        let result = calculate("דָּוִד־ david 12", Method::Standard);
        assert_eq!(pairs(&result), vec![('ד', 4), ('ו', 6), ('ד', 4)]);
        assert_eq!(result.total, 14);
    }

    #[test]
    fn test_empty_and_foreign_input() {
        for method in Method::ALL {
            assert_eq!(calculate("", method), GematriaResult::default());
            let result = calculate("hello, world 123", method);
            assert_eq!(result.total, 0);
            assert!(result.letters.is_empty());
        }
    }

    #[test]
    fn test_calculate_by_id_fallback() {
        assert_eq!(
            calculate_by_id("ת", "no-such-method"),
            calculate("ת", Method::Standard)
        );
        assert_eq!(calculate_by_id("ת", "integral").total, 4);
    }

    #[test]
    fn test_calculate_by_id_is_exact_match() {
        assert_eq!(calculate_by_id("ת", "Ordinal").total, 400);
        assert_eq!(calculate_by_id("ת", " integral ").total, 400);
        assert_eq!(calculate_by_id("ת", "REDUCED").total, 400);
        assert_eq!(calculate_by_id("ת", "ordinal").total, 22);
    }

    #[test]
    fn test_total_past_u32_range() {
        let text = "ת".repeat(10_737_419);
        let result = calculate(&text, Method::Standard);
        assert_eq!(result.letters.len(), 10_737_419);
        assert_eq!(result.total, 400 * 10_737_419);
        assert!(result.total > u64::from(u32::MAX));
    }

    #[test]
    fn test_is_hebrew_text() {
        assert!(!is_hebrew_text("abc"));
        assert!(is_hebrew_text("דוד"));
        assert!(!is_hebrew_text(""));
        assert!(is_hebrew_text("abc \u{05B8}"));
        assert!(!is_hebrew_text("\u{FB2A}"));
    }
}
