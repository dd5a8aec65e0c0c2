use svarog_lexer::SyntaxKind;

use super::common::{kinds, single};

#[test]
fn int_literals() {
    assert_eq!(single("42"), (SyntaxKind::IntLiteral, "42"));
    assert_eq!(single("1_000"), (SyntaxKind::IntLiteral, "1_000"));
}

#[test]
fn real_literals() {
    assert_eq!(single("3.14"), (SyntaxKind::RealLiteral, "3.14"));
    assert_eq!(single("1e9"), (SyntaxKind::RealLiteral, "1e9"));
    assert_eq!(single("2.5e-3"), (SyntaxKind::RealLiteral, "2.5e-3"));
}

#[test]
fn sized_based_literal_is_two_tokens() {
    assert_eq!(
        kinds("4'b0101"),
        vec![SyntaxKind::IntLiteral, SyntaxKind::BasedLiteral]
    );
    assert_eq!(single("'hDEAD_beef"), (SyntaxKind::BasedLiteral, "'hDEAD_beef"));
    assert_eq!(single("'sd10"), (SyntaxKind::BasedLiteral, "'sd10"));
}

#[test]
fn unbased_unsized_literal() {
    assert_eq!(single("'0"), (SyntaxKind::UnbasedUnsizedLiteral, "'0"));
    assert_eq!(single("'z"), (SyntaxKind::UnbasedUnsizedLiteral, "'z"));
}

#[test]
fn integer_dot_ident_is_not_real() {
    // `3.x` is an int followed by a field access, not a real literal
    assert_eq!(
        kinds("3.x"),
        vec![SyntaxKind::IntLiteral, SyntaxKind::Dot, SyntaxKind::Ident]
    );
}
