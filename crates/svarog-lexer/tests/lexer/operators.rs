use svarog_lexer::SyntaxKind;

use super::common::{assert_lossless, kinds, single};

#[test]
fn longest_match_wins() {
    assert_eq!(single("<<<"), (SyntaxKind::LtLtLt, "<<<"));
    assert_eq!(single("<<"), (SyntaxKind::LtLt, "<<"));
    assert_eq!(single("<="), (SyntaxKind::LtEq, "<="));
    assert_eq!(single("==="), (SyntaxKind::EqEqEq, "==="));
    assert_eq!(single("=="), (SyntaxKind::EqEq, "=="));
    assert_eq!(single("="), (SyntaxKind::Assign, "="));
}

#[test]
fn dot_star_is_one_token() {
    assert_eq!(single(".*"), (SyntaxKind::DotStar, ".*"));
    assert_eq!(
        kinds(".a"),
        vec![SyntaxKind::Dot, SyntaxKind::Ident]
    );
}

#[test]
fn named_connection_shape() {
    assert_eq!(
        kinds(".i1(in_a)"),
        vec![
            SyntaxKind::Dot,
            SyntaxKind::Ident,
            SyntaxKind::LParen,
            SyntaxKind::Ident,
            SyntaxKind::RParen,
        ]
    );
}

#[test]
fn scope_and_colon() {
    assert_eq!(single("::"), (SyntaxKind::ColonColon, "::"));
    assert_eq!(single(":"), (SyntaxKind::Colon, ":"));
}

#[test]
fn unknown_byte_is_error_token() {
    assert_eq!(kinds("\u{7f}"), vec![SyntaxKind::Error]);
    assert_lossless("\u{7f}ok");
}

#[test]
fn non_ascii_is_error_but_lossless() {
    assert_lossless("module m; // ünïcode\nendmodule");
    assert_lossless("é");
}
