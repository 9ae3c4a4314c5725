//! The 27 Hebrew letters recognized by the calculator.
//!
//! Every letter carries its standard (mispar hechrechi) value and its ordinal
//! position in the alphabet. Final forms share both with their base letter.

use serde::{Deserialize, Serialize};

/// A recognized Hebrew consonant, including the five word-final forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Letter {
    Aleph,
    Bet,
    Gimel,
    Dalet,
    He,
    Vav,
    Zayin,
    Het,
    Tet,
    Yod,
    Kaf,
    Lamed,
    Mem,
    Nun,
    Samekh,
    Ayin,
    Pe,
    Tsadi,
    Qof,
    Resh,
    Shin,
    Tav,
    FinalKaf,
    FinalMem,
    FinalNun,
    FinalPe,
    FinalTsadi,
}

impl Letter {
    /// All letters: the 22 base letters in alphabet order, then the finals.
    pub const ALL: [Self; 27] = [
        Self::Aleph,
        Self::Bet,
        Self::Gimel,
        Self::Dalet,
        Self::He,
        Self::Vav,
        Self::Zayin,
        Self::Het,
        Self::Tet,
        Self::Yod,
        Self::Kaf,
        Self::Lamed,
        Self::Mem,
        Self::Nun,
        Self::Samekh,
        Self::Ayin,
        Self::Pe,
        Self::Tsadi,
        Self::Qof,
        Self::Resh,
        Self::Shin,
        Self::Tav,
        Self::FinalKaf,
        Self::FinalMem,
        Self::FinalNun,
        Self::FinalPe,
        Self::FinalTsadi,
    ];

    pub const FINALS: [Self; 5] = [
        Self::FinalKaf,
        Self::FinalMem,
        Self::FinalNun,
        Self::FinalPe,
        Self::FinalTsadi,
    ];

    /// Classify a code point. Anything outside the 27 letters (vowel points,
    /// cantillation, punctuation, other scripts) yields `None`.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        let letter = match c {
            'א' => Self::Aleph,
            'ב' => Self::Bet,
            'ג' => Self::Gimel,
            'ד' => Self::Dalet,
            'ה' => Self::He,
            'ו' => Self::Vav,
            'ז' => Self::Zayin,
            'ח' => Self::Het,
            'ט' => Self::Tet,
            'י' => Self::Yod,
            'כ' => Self::Kaf,
            'ל' => Self::Lamed,
            'מ' => Self::Mem,
            'נ' => Self::Nun,
            'ס' => Self::Samekh,
            'ע' => Self::Ayin,
            'פ' => Self::Pe,
            'צ' => Self::Tsadi,
            'ק' => Self::Qof,
            'ר' => Self::Resh,
            'ש' => Self::Shin,
            'ת' => Self::Tav,
            'ך' => Self::FinalKaf,
            'ם' => Self::FinalMem,
            'ן' => Self::FinalNun,
            'ף' => Self::FinalPe,
            'ץ' => Self::FinalTsadi,
            _ => return None,
        };
        Some(letter)
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Aleph => 'א',
            Self::Bet => 'ב',
            Self::Gimel => 'ג',
            Self::Dalet => 'ד',
            Self::He => 'ה',
            Self::Vav => 'ו',
            Self::Zayin => 'ז',
            Self::Het => 'ח',
            Self::Tet => 'ט',
            Self::Yod => 'י',
            Self::Kaf => 'כ',
            Self::Lamed => 'ל',
            Self::Mem => 'מ',
            Self::Nun => 'נ',
            Self::Samekh => 'ס',
            Self::Ayin => 'ע',
            Self::Pe => 'פ',
            Self::Tsadi => 'צ',
            Self::Qof => 'ק',
            Self::Resh => 'ר',
            Self::Shin => 'ש',
            Self::Tav => 'ת',
            Self::FinalKaf => 'ך',
            Self::FinalMem => 'ם',
            Self::FinalNun => 'ן',
            Self::FinalPe => 'ף',
            Self::FinalTsadi => 'ץ',
        }
    }

    /// Transliterated English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aleph => "Aleph",
            Self::Bet => "Bet",
            Self::Gimel => "Gimel",
            Self::Dalet => "Dalet",
            Self::He => "Heh",
            Self::Vav => "Vav",
            Self::Zayin => "Zayin",
            Self::Het => "Chet",
            Self::Tet => "Tet",
            Self::Yod => "Yud",
            Self::Kaf => "Kaf",
            Self::Lamed => "Lamed",
            Self::Mem => "Mem",
            Self::Nun => "Nun",
            Self::Samekh => "Samech",
            Self::Ayin => "Ayin",
            Self::Pe => "Peh",
            Self::Tsadi => "Tzadi",
            Self::Qof => "Kuf",
            Self::Resh => "Resh",
            Self::Shin => "Shin",
            Self::Tav => "Tav",
            Self::FinalKaf => "Final Kaf",
            Self::FinalMem => "Final Mem",
            Self::FinalNun => "Final Nun",
            Self::FinalPe => "Final Peh",
            Self::FinalTsadi => "Final Tzadi",
        }
    }

    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(
            self,
            Self::FinalKaf | Self::FinalMem | Self::FinalNun | Self::FinalPe | Self::FinalTsadi
        )
    }

    /// The non-final form of this letter; base letters map to themselves.
    #[must_use]
    pub const fn base(self) -> Self {
        match self {
            Self::FinalKaf => Self::Kaf,
            Self::FinalMem => Self::Mem,
            Self::FinalNun => Self::Nun,
            Self::FinalPe => Self::Pe,
            Self::FinalTsadi => Self::Tsadi,
            other => other,
        }
    }

    /// Position in the alphabet, 1 (Aleph) to 22 (Tav).
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        // Base variants are declared in alphabet order.
        self.base() as u32 + 1
    }

    /// Standard value: units for the first nine letters, tens for the next
    /// nine, hundreds for the last four.
    #[must_use]
    pub const fn standard_value(self) -> u32 {
        match self.ordinal() {
            n @ 1..=9 => n,
            n @ 10..=18 => (n - 9) * 10,
            n => (n - 18) * 100,
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(c)
    }
}
