//! Arithmetic rendering of a segmented word.
//!
//! Every letter becomes its character code, positive for vowels and negative
//! for consonants. Each unit shape groups its codes differently:
//!
//! | Shape | Fragment |
//! |---|---|
//! | V | `+v` |
//! | C | `-c` |
//! | VC | `+v -c` |
//! | CV | `-c +v` |
//! | CCV | `*(-c -c +v)` |
//! | VVV | `*(+v +v +v)` |
//! | VCCV | `(+v-c)*(-c+v)` |

use crate::domain::alphabet::is_vowel;
use crate::domain::ast::Ast;
use crate::domain::pattern::UnitPattern;

/// Prefix of every rendered expression
pub const EXPRESSION_PREFIX: &str = "x = ";

/// Character code carrying the sign of its class
pub fn signed_code(ch: char) -> i64 {
    let code = i64::from(u32::from(ch));
    if is_vowel(ch) {
        code
    } else {
        -code
    }
}

fn signed(ch: char) -> String {
    format!("{:+}", signed_code(ch))
}

/// Renders one unit text as an arithmetic fragment
pub fn render_unit(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    match (UnitPattern::of_text(text), chars.as_slice()) {
        (Some(UnitPattern::V | UnitPattern::C), &[a]) => signed(a),
        (Some(UnitPattern::Vc | UnitPattern::Cv), &[a, b]) => {
            format!("{} {}", signed(a), signed(b))
        }
        (Some(UnitPattern::Ccv | UnitPattern::Vvv), &[a, b, c]) => {
            format!("*({} {} {})", signed(a), signed(b), signed(c))
        }
        (Some(UnitPattern::Vccv), &[a, b, c, d]) => {
            format!("({}{})*({}{})", signed(a), signed(b), signed(c), signed(d))
        }
        _ => render_fallback(&chars),
    }
}

/// Space-separated signed codes, one per character
fn render_fallback(chars: &[char]) -> String {
    chars
        .iter()
        .map(|&ch| signed(ch))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a whole tree as `x = <fragment> <fragment> ...`
pub fn render_semantics(ast: &Ast) -> String {
    let fragments: Vec<String> = ast
        .units()
        .iter()
        .map(|unit| render_unit(unit.text()))
        .collect();
    format!("{EXPRESSION_PREFIX}{}", fragments.join(" "))
}
