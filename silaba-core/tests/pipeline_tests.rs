//! End-to-end tests for the analysis pipeline

use silaba_core::*;

#[test]
fn test_agua_reference_example() {
    let symbols = tokenize("agua").unwrap();
    let tokens: Vec<String> = symbols.iter().map(ToString::to_string).collect();
    assert_eq!(tokens, vec!["a:V(0)", "g:C(1)", "u:V(2)", "a:V(3)"]);

    assert!(validate("agua").is_ok());

    let state = segment(&symbols).unwrap();
    let ast = build_ast(&symbols, &state);
    assert_eq!(render_semantics(&ast), "x = +97 -103 +117 +97");

    // Same bytes on a second run
    let again = analyze("agua").unwrap();
    assert_eq!(again.semantics(), "x = +97 -103 +117 +97");
}

#[test]
fn test_xyz_fails_on_final_vowel() {
    let err = validate("xyz").unwrap_err();
    assert_eq!(err.rule, GrammarRule::MissingFinalVowel);
    assert_eq!(err.reason(), "string does not end in a vowel");
    assert_eq!(err.position, 2);
}

#[test]
fn test_lexer_reports_first_non_letter() {
    assert_eq!(tokenize("ab3c").unwrap_err().position, 2);
    assert_eq!(tokenize("a3b!").unwrap_err().position, 1);
}

#[test]
fn test_diagnostics_follow_rule_order() {
    let cases = [
        ("", GrammarRule::EmptyInput, 0),
        ("aeiou", GrammarRule::TooManyVowels, 3),
        ("kat", GrammarRule::MissingFinalVowel, 2),
        ("stra", GrammarRule::InvalidConsonantRun, 0),
    ];
    for (text, rule, position) in cases {
        let err = validate(text).unwrap_err();
        assert_eq!((err.rule, err.position), (rule, position), "{text:?}");
    }
}

#[test]
fn test_mixed_shapes() {
    let analysis = analyze("altaeitra").unwrap();
    let shapes: Vec<&str> = analysis
        .ast()
        .units()
        .iter()
        .map(|u| u.pattern().map_or("?", UnitPattern::name))
        .collect();
    let texts: Vec<&str> = analysis.ast().units().iter().map(AstNode::text).collect();
    assert_eq!(texts.concat(), "altaeitra");
    assert!(shapes.iter().all(|s| *s != "?"));
}

#[test]
fn test_vccv_rendering_end_to_end() {
    let analysis = analyze("alta").unwrap();
    assert_eq!(analysis.unit_line(), "Unit:VCCV(alta)@0");
    assert_eq!(analysis.semantics(), "x = (+97-108)*(-116+97)");
}

#[test]
fn test_errors_are_recoverable_values() {
    let inputs = ["ab3c", "", "xyz", "agua"];
    let outcomes: Vec<std::result::Result<String, String>> = inputs
        .iter()
        .map(|w| analyze(w).map(|a| a.semantics()).map_err(|e| e.to_string()))
        .collect();

    assert_eq!(
        outcomes,
        vec![
            Err("non-alphabetic character at position 2".to_string()),
            Err("empty input at position 0".to_string()),
            Err("string does not end in a vowel at position 2".to_string()),
            Ok("x = +97 -103 +117 +97".to_string()),
        ]
    );
}
