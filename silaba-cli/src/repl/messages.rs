//! Banners printed by the shell

/// Printed once when the shell starts
pub const INTRO: &str = "\
=====================================================
            WORD ANALYSIS - HOW TO USE
=====================================================
Type a word and the shell checks whether it is valid
under the rules of the fictional language, then shows
how it splits into units (\"syllables\").

Main rules:
  1) Only letters A-Z or a-z
  2) At most 3 consecutive vowels
  3) Ends in a vowel
  4) Consonant sequences follow restrictions (see examples)
Special commands:
  0 -> quit
  1 -> run the semantic analyzer on the last valid word
=====================================================

";

/// Printed before every semantic analysis
pub const SEMANTIC_RULES: &str = "\
=====================================================
            SEMANTIC ANALYSIS - RULES
=====================================================
Each character is represented by its ASCII value:
  vowel -> positive (+n)
  consonant -> negative (-n)

Conversion per syntactic unit:
  V    -> +n
  C    -> -n
  VC   -> +n -m
  CV   -> -m +n
  CCV  -> *( -c -c +v )  (sum of the values by position)
  VVV  -> *( +v +v +v )  (sum of the three vowels)
  VCCV -> ( +v -c ) * ( -c +v )
The final expression reads the units from left to right.
Example: 'agua' -> a gu a -> x = +97 -103 +117 +97
=====================================================

";

/// Printed after a word passes every stage
pub const VALID: &str = "Valid";

/// Printed when `1` is used before any word was accepted
pub const NO_SAVED_WORD: &str = "No word saved for semantic analysis";
