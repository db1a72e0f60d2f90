use crate::*;
use rl_core::config::ReaderConfig;
use rl_core::{ParsedLiteral, RlError};

fn lit(head: &str, args: &[&str]) -> ParsedLiteral {
    ParsedLiteral::new(head, args.iter().map(|a| a.to_string()).collect())
}

// ========== Syntax ==========

#[test]
fn test_syntax_accepts_well_formed() {
    let syntax = LiteralSyntax::new();
    for raw in [
        "smokes(Ron).",
        "father(jamespotter, harrypotter).",
        "friends(harry, ron, hermione).",
        "1(2,3,4).",
        "1(2,3,4,5,6).",
        "1a1(383,A83, 918B).",
        "1a1(383,       A83, 918B).",
        "1a1(383,  A83,     918B).",
    ] {
        assert!(syntax.validate(raw).is_ok(), "{raw} should be accepted");
    }
}

#[test]
fn test_syntax_rejects_malformed() {
    let syntax = LiteralSyntax::new();
    for raw in [
        "smokes).",
        ")*#c.",
        "(D*ccc!.",
        "smokes(asdf)",
        "ccccc)(.",
        "1a1(  3  , 83     , 18A).",
        "fr ( harry , ron , herm ) .",
    ] {
        let err = syntax.validate(raw).unwrap_err();
        assert!(err.is_syntax(), "{raw} should be rejected");
    }
}

#[test]
fn test_syntax_rejects_empty_tokens() {
    let syntax = LiteralSyntax::new();
    assert!(!syntax.is_valid("(a,b)."));
    assert!(!syntax.is_valid("p(a,,b)."));
    assert!(!syntax.is_valid("p(,a)."));
    assert!(!syntax.is_valid("p(a,)."));
}

#[test]
fn test_syntax_rejects_nullary() {
    assert!(!LiteralSyntax::new().is_valid("const()."));
}

#[test]
fn test_syntax_rejects_concatenated_clauses() {
    let syntax = LiteralSyntax::new();
    assert!(!syntax.is_valid("p(a).q(b)."));
    assert!(!syntax.is_valid("p(a).\nq(b)."));
}

#[test]
fn test_syntax_rejects_surrounding_whitespace() {
    let syntax = LiteralSyntax::new();
    assert!(!syntax.is_valid(" p(a)."));
    assert!(!syntax.is_valid("p(a). "));
    assert!(!syntax.is_valid("p(a ,b)."));
    assert!(!syntax.is_valid(""));
}

#[test]
fn test_syntax_rejects_punctuation_in_tokens() {
    let syntax = LiteralSyntax::new();
    assert!(!syntax.is_valid("has_pet(bob,cat)."));
    assert!(!syntax.is_valid("p(a-b)."));
    assert!(!syntax.is_valid("p(f(a))."));
}

// ========== Parser ==========

#[test]
fn test_parse_two_args() {
    let parser = LiteralParser::new();
    assert_eq!(
        parser.parse("father(harrypotter,jamespotter).").unwrap(),
        lit("father", &["harrypotter", "jamespotter"])
    );
}

#[test]
fn test_parse_strips_spaces_after_commas() {
    let parser = LiteralParser::new();
    assert_eq!(
        parser.parse("father(jamespotter, harrypotter).").unwrap(),
        lit("father", &["jamespotter", "harrypotter"])
    );
    assert_eq!(
        parser.parse("1a1(383,       A83, 918B).").unwrap(),
        lit("1a1", &["383", "A83", "918B"])
    );
}

#[test]
fn test_parse_single_arg() {
    let parser = LiteralParser::new();
    assert_eq!(parser.parse("smokes(bob).").unwrap(), lit("smokes", &["bob"]));
}

#[test]
fn test_parse_keeps_repeated_args() {
    let parser = LiteralParser::new();
    let parsed = parser.parse("same(a, a, b).").unwrap();
    assert_eq!(parsed.arguments, vec!["a", "a", "b"]);
}

#[test]
fn test_parse_invalid_propagates_syntax_error() {
    let parser = LiteralParser::new();
    let err = parser.parse("smokes(asdf)").unwrap_err();
    assert!(matches!(err, RlError::Syntax { ref literal } if literal == "smokes(asdf)"));
}

#[test]
fn test_parse_all_preserves_order() {
    let parser = LiteralParser::new();
    let parsed = parser.parse_all(["b(x).", "a(y).", "c(z)."]).unwrap();
    let heads: Vec<&str> = parsed.iter().map(|l| l.head.as_str()).collect();
    assert_eq!(heads, vec!["b", "a", "c"]);
}

#[test]
fn test_parse_all_fails_on_first_bad_literal() {
    let parser = LiteralParser::new();
    let err = parser.parse_all(["a(b).", "bad", "worse("]).unwrap_err();
    match err {
        RlError::SyntaxAt { index, literal } => {
            assert_eq!(index, 2);
            assert_eq!(literal, "bad");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_all_empty() {
    let parser = LiteralParser::new();
    assert!(parser.parse_all(Vec::<&str>::new()).unwrap().is_empty());
}

// ========== LiteralSource ==========

#[test]
fn test_content_one_per_line() {
    let parser = LiteralParser::new();
    let parsed = parser.parse_content("f(a1,a2).\nf(a1,a3).\r\nb(a4).").unwrap();
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[1], lit("f", &["a1", "a3"]));
    assert_eq!(parsed[2], lit("b", &["a4"]));
}

#[test]
fn test_content_skips_blank_lines_by_default() {
    let parser = LiteralParser::new();
    let parsed = parser.parse_content("f(a).\n\n   \ng(b).\n").unwrap();
    assert_eq!(parsed.len(), 2);
}

#[test]
fn test_content_strict_blank_lines() {
    let parser = LiteralParser::with_reader(ReaderConfig { skip_blank_lines: false });
    let err = parser.parse_content("f(a).\n\ng(b).").unwrap_err();
    assert!(matches!(err, RlError::SyntaxAt { index: 2, .. }));
}

#[test]
fn test_content_reports_file_line_number() {
    let parser = LiteralParser::new();
    let err = parser.parse_content("f(a).\n\nf ( b ) .").unwrap_err();
    assert!(matches!(err, RlError::SyntaxAt { index: 3, .. }));
}

#[test]
fn test_parse_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pos.txt");
    std::fs::write(&path, "father(harrypotter,jamespotter).\nsmokes(bob).\n").unwrap();
    let parsed = LiteralParser::new().parse_file(&path).unwrap();
    assert_eq!(parsed, vec![
        lit("father", &["harrypotter", "jamespotter"]),
        lit("smokes", &["bob"]),
    ]);
}

#[test]
fn test_parse_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = LiteralParser::new().parse_file(&dir.path().join("nope.txt")).unwrap_err();
    assert!(err.is_io());
}
