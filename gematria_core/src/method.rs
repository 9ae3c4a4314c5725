use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{GematriaError, Letter};

/// Calculation method for letter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Mispar hechrechi: 1-9, 10-90, 100-400.
    #[default]
    Standard,
    /// Mispar siduri: alphabet position 1-22.
    Ordinal,
    /// Mispar katan: standard value reduced to one digit.
    Reduced,
    /// Ordinal value reduced to one digit.
    Integral,
}

impl Method {
    pub const ALL: [Self; 4] = [Self::Standard, Self::Ordinal, Self::Reduced, Self::Integral];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Ordinal => "ordinal",
            Self::Reduced => "reduced",
            Self::Integral => "integral",
        }
    }

    /// Lenient lookup on the exact lowercase identifiers. Anything else,
    /// including other spellings of a known id, resolves to
    /// [`Method::Standard`].
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == id)
            .unwrap_or_else(|| {
                warn!("Unknown gematria method '{id}', falling back to standard");
                Self::default()
            })
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard (Rishon)",
            Self::Ordinal => "Ordinal (Seder)",
            Self::Reduced => "Reduced (Katan)",
            Self::Integral => "Integral Reduced",
        }
    }

    #[must_use]
    pub const fn hebrew_label(&self) -> &'static str {
        match self {
            Self::Standard => "רגילה (ראשון)",
            Self::Ordinal => "סדרית (סדר)",
            Self::Reduced => "מצומצמת (קטן)",
            Self::Integral => "אינטגרלית מצומצמת",
        }
    }

    /// Value of a single letter under this method.
    #[must_use]
    pub const fn value_of(&self, letter: Letter) -> u32 {
        match self {
            Self::Standard => letter.standard_value(),
            Self::Ordinal => letter.ordinal(),
            Self::Reduced => reduce_to_single_digit(letter.standard_value()),
            Self::Integral => reduce_to_single_digit(letter.ordinal()),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Method {
    type Err = GematriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "ordinal" => Ok(Self::Ordinal),
            "reduced" => Ok(Self::Reduced),
            "integral" => Ok(Self::Integral),
            _ => Err(GematriaError::UnknownMethod(s.to_string())),
        }
    }
}

/// Repeatedly sum decimal digits until a single digit remains.
///
/// `400 -> 4`, `99 -> 18 -> 9`. Zero stays zero.
#[must_use]
pub const fn reduce_to_single_digit(mut n: u32) -> u32 {
    while n > 9 {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        n = sum;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_to_single_digit() {
        assert_eq!(reduce_to_single_digit(0), 0);
        assert_eq!(reduce_to_single_digit(9), 9);
        assert_eq!(reduce_to_single_digit(10), 1);
        assert_eq!(reduce_to_single_digit(99), 9);
        assert_eq!(reduce_to_single_digit(400), 4);
        assert_eq!(reduce_to_single_digit(u32::MAX), 3);
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!("ordinal".parse::<Method>().ok(), Some(Method::Ordinal));
        assert_eq!(" Reduced ".parse::<Method>().ok(), Some(Method::Reduced));
        assert!(matches!(
            "katan".parse::<Method>(),
            Err(GematriaError::UnknownMethod(ref s)) if s == "katan"
        ));
    }

    #[test]
    fn test_from_id_falls_back_to_standard() {
        assert_eq!(Method::from_id("integral"), Method::Integral);
        assert_eq!(Method::from_id("garbage"), Method::Standard);
        assert_eq!(Method::from_id(""), Method::Standard);
    }

    #[test]
    fn test_from_id_is_case_and_space_sensitive() {
        assert_eq!(Method::from_id("Ordinal"), Method::Standard);
        assert_eq!(Method::from_id(" integral "), Method::Standard);
        assert_eq!(Method::from_id("ordinal"), Method::Ordinal);
        // the strict parser stays forgiving for CLI input
        assert_eq!("Ordinal".parse::<Method>().ok(), Some(Method::Ordinal));
    }

    #[test]
    fn test_derived_method_values() {
        assert_eq!(Method::Reduced.value_of(Letter::Tav), 4);
        assert_eq!(Method::Integral.value_of(Letter::Tav), 4);
        assert_eq!(Method::Integral.value_of(Letter::Shin), 3);
        assert_eq!(Method::Reduced.value_of(Letter::FinalTsadi), 9);
    }

    #[test]
    fn test_display_matches_id() {
        for method in Method::ALL {
            assert_eq!(method.to_string().parse::<Method>().ok(), Some(method));
        }
    }
}
