use svarog_lexer::SyntaxKind;

use super::common::{assert_lossless, kinds, lex_kinds, single};

#[test]
fn line_comment_runs_to_newline() {
    assert_eq!(
        lex_kinds("// Inputs\nclk"),
        vec![
            (SyntaxKind::LineComment, "// Inputs"),
            (SyntaxKind::Whitespace, "\n"),
            (SyntaxKind::Ident, "clk"),
        ]
    );
}

#[test]
fn block_comment_single_token() {
    assert_eq!(single("/*AUTOARG*/"), (SyntaxKind::BlockComment, "/*AUTOARG*/"));
    assert_eq!(
        single("/* bar AUTO_TEMPLATE (\n .i1(in_a)); */"),
        (
            SyntaxKind::BlockComment,
            "/* bar AUTO_TEMPLATE (\n .i1(in_a)); */"
        )
    );
}

#[test]
fn unterminated_block_comment_consumes_rest() {
    assert_eq!(kinds("/* oops"), vec![SyntaxKind::BlockComment]);
    assert_lossless("/* oops");
}

#[test]
fn directive_comment_inside_port_list() {
    assert_eq!(
        kinds("(/*AUTOINST*/)"),
        vec![
            SyntaxKind::LParen,
            SyntaxKind::BlockComment,
            SyntaxKind::RParen,
        ]
    );
}

#[test]
fn slash_alone_is_operator() {
    assert_eq!(
        kinds("a / b"),
        vec![
            SyntaxKind::Ident,
            SyntaxKind::Whitespace,
            SyntaxKind::Slash,
            SyntaxKind::Whitespace,
            SyntaxKind::Ident,
        ]
    );
    assert_eq!(single("/"), (SyntaxKind::Slash, "/"));
}
