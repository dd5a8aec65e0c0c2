use svarog_lexer::SyntaxKind;

use super::common::{kinds, lex_kinds, single};

#[test]
fn plain_idents() {
    assert_eq!(single("clk"), (SyntaxKind::Ident, "clk"));
    assert_eq!(single("_rst_n"), (SyntaxKind::Ident, "_rst_n"));
    assert_eq!(single("data$x"), (SyntaxKind::Ident, "data$x"));
}

#[test]
fn keywords_classified() {
    assert_eq!(single("module"), (SyntaxKind::ModuleKw, "module"));
    assert_eq!(single("endmodule"), (SyntaxKind::EndmoduleKw, "endmodule"));
    assert_eq!(single("input"), (SyntaxKind::InputKw, "input"));
    assert_eq!(single("inout"), (SyntaxKind::InoutKw, "inout"));
    assert_eq!(single("output"), (SyntaxKind::OutputKw, "output"));
    assert_eq!(single("logic"), (SyntaxKind::LogicKw, "logic"));
    assert_eq!(single("always_comb"), (SyntaxKind::AlwaysCombKw, "always_comb"));
    assert_eq!(single("endfunction"), (SyntaxKind::EndfunctionKw, "endfunction"));
}

#[test]
fn keyword_prefix_is_plain_ident() {
    assert_eq!(single("inputs"), (SyntaxKind::Ident, "inputs"));
    assert_eq!(single("module_t"), (SyntaxKind::Ident, "module_t"));
    // AUTO_TEMPLATE is not a reserved word, only meaningful inside comments
    assert_eq!(single("AUTO_TEMPLATE"), (SyntaxKind::Ident, "AUTO_TEMPLATE"));
}

#[test]
fn escaped_ident_runs_to_whitespace() {
    assert_eq!(
        lex_kinds("\\bus+index "),
        vec![
            (SyntaxKind::EscapedIdent, "\\bus+index"),
            (SyntaxKind::Whitespace, " "),
        ]
    );
}

#[test]
fn system_ident() {
    assert_eq!(single("$display"), (SyntaxKind::SystemIdent, "$display"));
}

#[test]
fn compiler_directive() {
    assert_eq!(
        kinds("`define FOO 1"),
        vec![
            SyntaxKind::Directive,
            SyntaxKind::Whitespace,
            SyntaxKind::Ident,
            SyntaxKind::Whitespace,
            SyntaxKind::IntLiteral,
        ]
    );
}
