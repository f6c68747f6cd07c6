//! Grammar validation over vowel/consonant runs.
//!
//! The validator never looks at tokens. It scans the classification of every
//! character, treating anything that is not a vowel as a consonant, and
//! applies the rules in a fixed order so diagnostics are stable:
//!
//! 1. the input is not empty
//! 2. no run of four or more vowels
//! 3. the last character is a vowel
//! 4. every consonant run of length two or more is bounded by vowels; a
//!    word-initial run is additionally capped at two

use crate::domain::alphabet::SoundClass;
use crate::error::{GrammarRule, ValidationError};

/// Longest vowel run the grammar accepts
pub const MAX_VOWEL_RUN: usize = 3;

/// Longest consonant run accepted at the very start of a word
pub const MAX_INITIAL_CONSONANT_RUN: usize = 2;

/// Validates raw text against the grammar
pub fn validate(text: &str) -> Result<(), ValidationError> {
    let classes: Vec<SoundClass> = text.chars().map(SoundClass::of).collect();
    validate_classes(&classes)
}

/// Validates a position-addressable class sequence
pub fn validate_classes(classes: &[SoundClass]) -> Result<(), ValidationError> {
    if classes.is_empty() {
        return Err(ValidationError::new(GrammarRule::EmptyInput, 0));
    }
    check_vowel_runs(classes)?;
    check_final_vowel(classes)?;
    check_consonant_runs(classes)
}

fn check_vowel_runs(classes: &[SoundClass]) -> Result<(), ValidationError> {
    let mut run = 0;
    for (i, class) in classes.iter().enumerate() {
        if class.is_vowel() {
            run += 1;
            if run > MAX_VOWEL_RUN {
                return Err(ValidationError::new(GrammarRule::TooManyVowels, i));
            }
        } else {
            run = 0;
        }
    }
    Ok(())
}

fn check_final_vowel(classes: &[SoundClass]) -> Result<(), ValidationError> {
    let last = classes.len() - 1;
    if classes[last].is_vowel() {
        Ok(())
    } else {
        Err(ValidationError::new(GrammarRule::MissingFinalVowel, last))
    }
}

fn check_consonant_runs(classes: &[SoundClass]) -> Result<(), ValidationError> {
    let n = classes.len();
    let vowel_at = |k: usize| k < n && classes[k].is_vowel();

    let mut p = 0;
    while p < n {
        if classes[p].is_vowel() {
            p += 1;
            continue;
        }
        let mut q = p;
        while q < n && !classes[q].is_vowel() {
            q += 1;
        }
        let run = q - p;
        if run >= 2 {
            let legal = if p == 0 {
                run <= MAX_INITIAL_CONSONANT_RUN && vowel_at(q)
            } else {
                vowel_at(p - 1) && vowel_at(q)
            };
            if !legal {
                return Err(ValidationError::new(GrammarRule::InvalidConsonantRun, p));
            }
        }
        p = q;
    }
    Ok(())
}
