//! Lexer: raw text into classified symbols

use crate::domain::alphabet::{classify, SoundClass};
use crate::error::LexError;
use std::fmt;

/// One classified character with its original position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbol {
    character: char,
    class: SoundClass,
    position: usize,
}

impl Symbol {
    /// Creates a new symbol
    pub fn new(character: char, class: SoundClass, position: usize) -> Self {
        Self {
            character,
            class,
            position,
        }
    }

    /// The character as it appeared in the input
    pub fn character(&self) -> char {
        self.character
    }

    /// Vowel/consonant classification
    pub fn class(&self) -> SoundClass {
        self.class
    }

    /// Check if the symbol is a vowel
    pub fn is_vowel(&self) -> bool {
        self.class.is_vowel()
    }

    /// 0-based index in the input
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}({})", self.character, self.class, self.position)
    }
}

/// Converts text into symbols, stopping at the first non-alphabetic character.
///
/// Empty input is not an error here; the validator rejects it.
pub fn tokenize(text: &str) -> Result<Vec<Symbol>, LexError> {
    let mut symbols = Vec::with_capacity(text.len());
    // Every character before a failure is ASCII, so the char index equals the byte index.
    for (position, ch) in text.chars().enumerate() {
        let class = classify(ch).ok_or(LexError { position })?;
        symbols.push(Symbol::new(ch, class, position));
    }
    Ok(symbols)
}

/// Classes of a symbol slice, in order
pub fn classes(symbols: &[Symbol]) -> Vec<SoundClass> {
    symbols.iter().map(Symbol::class).collect()
}
