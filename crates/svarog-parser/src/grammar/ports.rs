use svarog_lexer::SyntaxKind;

use crate::parser::Parser;

use super::declarations;
use super::expressions;

// Parse parameter port list: `#( param_decl { , param_decl } )`
pub(crate) fn param_port_list(p: &mut Parser) {
    let m = p.start();
    p.bump(); // #
    p.expect(SyntaxKind::LParen);
    if !p.at(SyntaxKind::RParen) {
        param_port_decl(p);
        while p.eat(SyntaxKind::Comma) {
            if p.at(SyntaxKind::RParen) {
                break;
            }
            param_port_decl(p);
        }
    }
    p.expect(SyntaxKind::RParen);
    m.complete(p, SyntaxKind::ParamPortList);
}

// Single parameter declaration inside `#(...)`.
fn param_port_decl(p: &mut Parser) {
    let m = p.start();
    if p.at(SyntaxKind::ParameterKw) || p.at(SyntaxKind::LocalparamKw) {
        p.bump();
    }
    // Optional type
    if declarations::is_data_type_keyword(p.current()) {
        declarations::type_spec(p);
    }
    // Declarator: name [= expr]
    let d = p.start();
    p.expect(SyntaxKind::Ident);
    if p.eat(SyntaxKind::Assign) {
        expressions::expr(p);
    }
    d.complete(p, SyntaxKind::Declarator);
    m.complete(p, SyntaxKind::ParamDecl);
}

// Parse a module header port list: `( port { , port } )`.
//
// Handles ANSI ports (`input logic clk`), plain name lists
// (`module m(a, b);`), and the mixed forms the expander itself produces
// (a trailing comma before `)`, interleaved comments).
pub(crate) fn port_decl_list(p: &mut Parser) {
    let m = p.start();
    p.bump(); // (
    while !p.at(SyntaxKind::RParen) && !at_list_recovery(p) {
        if p.eat(SyntaxKind::Comma) {
            continue;
        }
        let cp = p.checkpoint();
        port_decl(p);
        if !p.has_progressed(cp) {
            p.error_bump("expected a port");
        }
    }
    p.expect(SyntaxKind::RParen);
    m.complete(p, SyntaxKind::PortList);
}

// Stop scanning a broken port list at tokens that belong to the
// enclosing construct.
pub(crate) fn at_list_recovery(p: &Parser) -> bool {
    p.at_end() || p.at(SyntaxKind::Semicolon) || p.at(SyntaxKind::EndmoduleKw)
}

// Single header port entry. Every piece is optional so that degenerate
// lists (stale directive leftovers) still produce one Port per name.
fn port_decl(p: &mut Parser) {
    let m = p.start();
    // Direction: input / output / inout / ref
    if is_direction(p.current()) {
        p.bump();
    }
    // Optional net type or var keyword
    if declarations::is_net_type(p.current()) || p.at(SyntaxKind::VarKw) {
        p.bump();
    }
    // Optional data type; a lone identifier followed by `,` or `)` is the
    // port name, not a type.
    declarations::type_spec_opt(p);
    // Port name
    if p.at(SyntaxKind::Ident) || p.at(SyntaxKind::EscapedIdent) {
        p.bump();
    }
    // Unpacked dimensions
    while p.at(SyntaxKind::LBracket) {
        declarations::unpacked_dimension(p);
    }
    // Default value
    if p.eat(SyntaxKind::Assign) {
        expressions::expr(p);
    }
    m.complete(p, SyntaxKind::Port);
}

pub(crate) fn is_direction(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::InputKw | SyntaxKind::OutputKw | SyntaxKind::InoutKw | SyntaxKind::RefKw
    )
}
