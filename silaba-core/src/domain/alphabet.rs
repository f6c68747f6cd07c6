//! Character classification for the phonotactic grammar

use std::fmt;

/// Classification of a letter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SoundClass {
    /// One of `a e i o u`, either case
    Vowel,
    /// Any other ASCII letter
    Consonant,
}

impl SoundClass {
    /// Check if this is the vowel class
    pub fn is_vowel(self) -> bool {
        matches!(self, SoundClass::Vowel)
    }

    /// Single-letter tag used in token listings and pattern names
    pub fn tag(self) -> char {
        match self {
            SoundClass::Vowel => 'V',
            SoundClass::Consonant => 'C',
        }
    }

    /// Class of any character, counting everything that is not a vowel as a consonant
    pub fn of(ch: char) -> Self {
        if is_vowel(ch) {
            SoundClass::Vowel
        } else {
            SoundClass::Consonant
        }
    }
}

impl fmt::Display for SoundClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Check if a character is one of the five vowels, ignoring case
pub fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Classify a character, or `None` if it is not an ASCII letter
pub fn classify(ch: char) -> Option<SoundClass> {
    if !ch.is_ascii_alphabetic() {
        return None;
    }
    Some(SoundClass::of(ch))
}
