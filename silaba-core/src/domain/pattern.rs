//! Unit shapes and their weights.
//!
//! [`UnitPattern::ALL`] is ordered by preference. The segmenter walks it in
//! this order and keeps the first candidate among equal totals, so the order
//! is part of the output, not an implementation detail.

use crate::domain::alphabet::SoundClass::{self, Consonant as C, Vowel as V};
use std::fmt;

/// Weight of a single unit, and of a sum of units
pub type Weight = u64;

/// Phonological shape of a unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum UnitPattern {
    /// Vowel, two consonants, vowel
    Vccv,
    /// Three vowels
    Vvv,
    /// Two consonants, vowel
    Ccv,
    /// Consonant, vowel
    Cv,
    /// Vowel, consonant
    Vc,
    /// Lone consonant
    C,
    /// Lone vowel
    V,
}

impl UnitPattern {
    /// Every pattern, most preferred first
    pub const ALL: [UnitPattern; 7] = [
        UnitPattern::Vccv,
        UnitPattern::Vvv,
        UnitPattern::Ccv,
        UnitPattern::Cv,
        UnitPattern::Vc,
        UnitPattern::C,
        UnitPattern::V,
    ];

    /// Class sequence the pattern matches
    pub fn shape(self) -> &'static [SoundClass] {
        match self {
            UnitPattern::Vccv => &[V, C, C, V],
            UnitPattern::Vvv => &[V, V, V],
            UnitPattern::Ccv => &[C, C, V],
            UnitPattern::Cv => &[C, V],
            UnitPattern::Vc => &[V, C],
            UnitPattern::C => &[C],
            UnitPattern::V => &[V],
        }
    }

    /// Number of characters the pattern spans
    pub fn length(self) -> usize {
        self.shape().len()
    }

    /// Fixed weight; longer, more specific shapes weigh more
    pub fn weight(self) -> Weight {
        match self {
            UnitPattern::Vccv => 100_000,
            UnitPattern::Vvv => 90_000,
            UnitPattern::Ccv => 50_000,
            UnitPattern::Cv => 40_000,
            UnitPattern::Vc => 30_000,
            UnitPattern::C => 10,
            UnitPattern::V => 5,
        }
    }

    /// Upper-case name, e.g. `CCV`
    pub fn name(self) -> &'static str {
        match self {
            UnitPattern::Vccv => "VCCV",
            UnitPattern::Vvv => "VVV",
            UnitPattern::Ccv => "CCV",
            UnitPattern::Cv => "CV",
            UnitPattern::Vc => "VC",
            UnitPattern::C => "C",
            UnitPattern::V => "V",
        }
    }

    /// Check if the pattern matches `classes` starting at `start`
    pub fn matches_at(self, classes: &[SoundClass], start: usize) -> bool {
        let shape = self.shape();
        classes
            .get(start..start + shape.len())
            .is_some_and(|window| window == shape)
    }

    /// Pattern of a literal unit text, matched exactly over its whole length
    pub fn of_text(text: &str) -> Option<UnitPattern> {
        let classes: Vec<SoundClass> = text.chars().map(SoundClass::of).collect();
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.shape() == classes.as_slice())
    }
}

impl fmt::Display for UnitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
