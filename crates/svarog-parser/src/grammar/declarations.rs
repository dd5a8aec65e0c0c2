use svarog_lexer::SyntaxKind;

use crate::parser::Parser;

use super::expressions;

// Body-level port declaration: `direction [net|var] [type] name {, name} ;`
//
// This is the non-ANSI form (`input clk;`) that pairs with a plain-name
// header list, but it also appears alongside ANSI headers in the wild.
pub(crate) fn port_decl(p: &mut Parser) {
    let m = p.start();
    p.bump(); // direction keyword
    if is_net_type(p.current()) || p.at(SyntaxKind::VarKw) {
        p.bump();
    }
    type_spec_opt(p);
    declarator(p);
    while p.eat(SyntaxKind::Comma) {
        declarator(p);
    }
    p.expect(SyntaxKind::Semicolon);
    m.complete(p, SyntaxKind::PortDecl);
}

// Net declaration: `wire [7:0] a, b ;`
pub(crate) fn net_decl(p: &mut Parser) {
    let m = p.start();
    p.bump(); // net type keyword
    type_spec_opt(p);
    declarator(p);
    while p.eat(SyntaxKind::Comma) {
        declarator(p);
    }
    p.expect(SyntaxKind::Semicolon);
    m.complete(p, SyntaxKind::NetDecl);
}

// Variable declaration: `logic [3:0] a = 0, b ;` or `mytype_t x ;`
pub(crate) fn var_decl(p: &mut Parser) {
    let m = p.start();
    if p.at(SyntaxKind::VarKw) || p.at(SyntaxKind::GenvarKw) {
        p.bump();
    }
    type_spec_opt(p);
    declarator(p);
    while p.eat(SyntaxKind::Comma) {
        declarator(p);
    }
    p.expect(SyntaxKind::Semicolon);
    m.complete(p, SyntaxKind::VarDecl);
}

// `parameter` / `localparam` declaration as a module item.
pub(crate) fn param_decl(p: &mut Parser) {
    let m = p.start();
    p.bump(); // parameter | localparam
    if is_data_type_keyword(p.current())
        || p.at(SyntaxKind::SignedKw)
        || p.at(SyntaxKind::UnsignedKw)
    {
        type_spec(p);
    }
    p.expect(SyntaxKind::Ident);
    if p.eat(SyntaxKind::Assign) {
        expressions::expr(p);
    }
    while p.eat(SyntaxKind::Comma) {
        p.expect(SyntaxKind::Ident);
        if p.eat(SyntaxKind::Assign) {
            expressions::expr(p);
        }
    }
    p.expect(SyntaxKind::Semicolon);
    m.complete(p, SyntaxKind::ParamDecl);
}

fn declarator(p: &mut Parser) {
    let d = p.start();
    if p.at(SyntaxKind::Ident) || p.at(SyntaxKind::EscapedIdent) {
        p.bump();
    } else {
        p.error("expected identifier");
    }
    while p.at(SyntaxKind::LBracket) {
        unpacked_dimension(p);
    }
    if p.eat(SyntaxKind::Assign) {
        expressions::expr(p);
    }
    d.complete(p, SyntaxKind::Declarator);
}

// Parse a type spec if one is present. A lone identifier followed by
// another identifier is a user-defined type name; otherwise it is the
// declared name and no type is consumed.
pub(crate) fn type_spec_opt(p: &mut Parser) {
    if is_data_type_keyword(p.current())
        || p.at(SyntaxKind::SignedKw)
        || p.at(SyntaxKind::UnsignedKw)
        || p.at(SyntaxKind::LBracket)
        || (p.at(SyntaxKind::Ident) && p.nth(1) == SyntaxKind::Ident)
        || (p.at(SyntaxKind::Ident) && p.nth(1) == SyntaxKind::ColonColon)
    {
        type_spec(p);
    }
}

// Data type: `[keyword | ident[::ident]] [signing] {packed_dimension}`
pub(crate) fn type_spec(p: &mut Parser) {
    let m = p.start();
    if is_data_type_keyword(p.current()) {
        p.bump();
    } else if p.at(SyntaxKind::Ident) {
        p.bump();
        if p.at(SyntaxKind::ColonColon) && p.nth(1) == SyntaxKind::Ident {
            p.bump(); // ::
            p.bump(); // ident
        }
    }
    if p.at(SyntaxKind::SignedKw) || p.at(SyntaxKind::UnsignedKw) {
        p.bump();
    }
    while p.at(SyntaxKind::LBracket) {
        packed_dimension(p);
    }
    m.complete(p, SyntaxKind::TypeSpec);
}

fn packed_dimension(p: &mut Parser) {
    let m = p.start();
    p.bump(); // [
    if !p.at(SyntaxKind::RBracket) {
        expressions::expr(p);
        if p.eat(SyntaxKind::Colon) {
            expressions::expr(p);
        }
    }
    p.expect(SyntaxKind::RBracket);
    m.complete(p, SyntaxKind::PackedDimension);
}

pub(crate) fn unpacked_dimension(p: &mut Parser) {
    let m = p.start();
    p.bump(); // [
    if !p.at(SyntaxKind::RBracket) {
        expressions::expr(p);
        if p.eat(SyntaxKind::Colon) {
            expressions::expr(p);
        }
    }
    p.expect(SyntaxKind::RBracket);
    m.complete(p, SyntaxKind::UnpackedDimension);
}

pub(crate) fn is_net_type(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::WireKw
            | SyntaxKind::TriKw
            | SyntaxKind::Tri0Kw
            | SyntaxKind::Tri1Kw
            | SyntaxKind::TriandKw
            | SyntaxKind::TriorKw
            | SyntaxKind::TriregKw
            | SyntaxKind::WandKw
            | SyntaxKind::WorKw
            | SyntaxKind::UwireKw
            | SyntaxKind::Supply0Kw
            | SyntaxKind::Supply1Kw
    )
}

pub(crate) fn is_data_type_keyword(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::LogicKw
            | SyntaxKind::RegKw
            | SyntaxKind::BitKw
            | SyntaxKind::ByteKw
            | SyntaxKind::IntKw
            | SyntaxKind::IntegerKw
            | SyntaxKind::ShortintKw
            | SyntaxKind::LongintKw
            | SyntaxKind::RealKw
            | SyntaxKind::RealtimeKw
            | SyntaxKind::TimeKw
            | SyntaxKind::StringKw
            | SyntaxKind::EventKw
            | SyntaxKind::VoidKw
    )
}
