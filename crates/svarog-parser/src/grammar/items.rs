use svarog_lexer::SyntaxKind;

use crate::parser::Parser;

use super::declarations;
use super::expressions;
use super::ports;

// Parse a module declaration:
// `module [lifetime] name [#(params)] [(ports)] ; { item } endmodule [: name]`
pub(crate) fn module_decl(p: &mut Parser) {
    let m = p.start();
    p.bump(); // module / macromodule

    // Optional lifetime: automatic | static
    if p.at(SyntaxKind::AutomaticKw) || p.at(SyntaxKind::StaticKw) {
        p.bump();
    }

    // Module name
    if p.at(SyntaxKind::Ident) || p.at(SyntaxKind::EscapedIdent) {
        p.bump();
    } else {
        p.error("expected module name");
    }

    // Optional parameter port list #(...)
    if p.at(SyntaxKind::Hash) && p.nth(1) == SyntaxKind::LParen {
        ports::param_port_list(p);
    }

    // Optional port list (...)
    if p.at(SyntaxKind::LParen) {
        ports::port_decl_list(p);
    }

    p.expect(SyntaxKind::Semicolon);

    // Module body: items until endmodule
    let body = p.start();
    while !p.at(SyntaxKind::EndmoduleKw) && !p.at_end() {
        if !module_item(p) {
            break;
        }
    }
    body.complete(p, SyntaxKind::ModuleBody);

    if !p.eat(SyntaxKind::EndmoduleKw) {
        p.error("expected `endmodule`");
    }

    // Optional `: name`
    if p.eat(SyntaxKind::Colon) && p.at(SyntaxKind::Ident) {
        p.bump();
    }

    m.complete(p, SyntaxKind::ModuleDecl);
}

// Parse one module item. Returns false if no progress was made.
fn module_item(p: &mut Parser) -> bool {
    match p.current() {
        kind if ports::is_direction(kind) => {
            declarations::port_decl(p);
            true
        }
        kind if declarations::is_net_type(kind) => {
            declarations::net_decl(p);
            true
        }
        SyntaxKind::ParameterKw | SyntaxKind::LocalparamKw => {
            declarations::param_decl(p);
            true
        }
        SyntaxKind::AssignKw => {
            continuous_assign(p);
            true
        }
        SyntaxKind::AlwaysKw
        | SyntaxKind::AlwaysCombKw
        | SyntaxKind::AlwaysFfKw
        | SyntaxKind::AlwaysLatchKw => {
            let m = p.start();
            p.bump();
            opaque_statement(p);
            m.complete(p, SyntaxKind::AlwaysBlock);
            true
        }
        SyntaxKind::InitialKw | SyntaxKind::FinalKw => {
            let m = p.start();
            p.bump();
            opaque_statement(p);
            m.complete(p, SyntaxKind::InitialBlock);
            true
        }
        // Function/task bodies may declare their own input/output ports;
        // skipping them whole keeps those out of the module's port set.
        SyntaxKind::FunctionKw => {
            opaque_region(p, SyntaxKind::EndfunctionKw, SyntaxKind::FunctionDecl);
            true
        }
        SyntaxKind::TaskKw => {
            opaque_region(p, SyntaxKind::EndtaskKw, SyntaxKind::TaskDecl);
            true
        }
        SyntaxKind::GenerateKw => {
            opaque_region(p, SyntaxKind::EndgenerateKw, SyntaxKind::GenerateRegion);
            true
        }
        SyntaxKind::VarKw | SyntaxKind::GenvarKw => {
            declarations::var_decl(p);
            true
        }
        kind if declarations::is_data_type_keyword(kind) => {
            declarations::var_decl(p);
            true
        }
        SyntaxKind::Ident | SyntaxKind::EscapedIdent => {
            // Ambiguous: `Ident #` or `Ident Ident (` is an instantiation,
            // `Ident Ident` otherwise is a variable of a user-defined type.
            if p.nth(1) == SyntaxKind::Hash {
                module_instantiation(p);
            } else if p.nth(1) == SyntaxKind::Ident {
                if p.nth(2) == SyntaxKind::LParen {
                    module_instantiation(p);
                } else {
                    declarations::var_decl(p);
                }
            } else {
                p.error_bump("unexpected token in module body");
            }
            true
        }
        _ => {
            p.error_bump("unexpected token in module body");
            !p.at_end()
        }
    }
}

// `assign lhs = rhs {, lhs = rhs} ;`
fn continuous_assign(p: &mut Parser) {
    let m = p.start();
    p.bump(); // assign
    expressions::expr(p);
    p.expect(SyntaxKind::Assign);
    expressions::expr(p);
    while p.eat(SyntaxKind::Comma) {
        expressions::expr(p);
        p.expect(SyntaxKind::Assign);
        expressions::expr(p);
    }
    p.expect(SyntaxKind::Semicolon);
    m.complete(p, SyntaxKind::ContinuousAssign);
}

// Module instantiation: `mod_name [#(params)] inst_name (ports) {, inst_name (ports)} ;`
fn module_instantiation(p: &mut Parser) {
    let m = p.start();
    p.bump(); // module name

    // Optional parameter overrides #(...)
    if p.at(SyntaxKind::Hash) && p.nth(1) == SyntaxKind::LParen {
        param_override_list(p);
    }

    // Instance name
    p.expect(SyntaxKind::Ident);

    // Port connections (...)
    if p.at(SyntaxKind::LParen) {
        instance_port_list(p);
    }

    // Additional instances: `, name (...)`
    while p.eat(SyntaxKind::Comma) {
        p.expect(SyntaxKind::Ident);
        if p.at(SyntaxKind::LParen) {
            instance_port_list(p);
        }
    }

    p.expect(SyntaxKind::Semicolon);
    m.complete(p, SyntaxKind::ModuleInstantiation);
}

fn instance_port_list(p: &mut Parser) {
    let m = p.start();
    p.bump(); // (
    while !p.at(SyntaxKind::RParen) && !ports::at_list_recovery(p) {
        if p.eat(SyntaxKind::Comma) {
            continue;
        }
        let cp = p.checkpoint();
        instance_port(p);
        if !p.has_progressed(cp) {
            p.error_bump("expected a port connection");
        }
    }
    p.expect(SyntaxKind::RParen);
    m.complete(p, SyntaxKind::InstancePortList);
}

fn instance_port(p: &mut Parser) {
    let m = p.start();
    if p.at(SyntaxKind::Dot) {
        // Named: .port_name(expr)
        p.bump(); // .
        p.expect(SyntaxKind::Ident);
        if p.at(SyntaxKind::LParen) {
            p.bump(); // (
            if !p.at(SyntaxKind::RParen) {
                expressions::expr(p);
            }
            p.expect(SyntaxKind::RParen);
        }
    } else if p.at(SyntaxKind::DotStar) {
        // Wildcard: .*
        p.bump();
    } else {
        // Positional
        expressions::expr(p);
    }
    m.complete(p, SyntaxKind::InstancePort);
}

// Parameter value override list: `#( .name(expr), ... )` or `#( expr, ... )`
fn param_override_list(p: &mut Parser) {
    let m = p.start();
    p.bump(); // #
    p.expect(SyntaxKind::LParen);
    if !p.at(SyntaxKind::RParen) {
        param_override(p);
        while p.eat(SyntaxKind::Comma) {
            param_override(p);
        }
    }
    p.expect(SyntaxKind::RParen);
    m.complete(p, SyntaxKind::ParamPortList);
}

fn param_override(p: &mut Parser) {
    let m = p.start();
    if p.at(SyntaxKind::Dot) {
        p.bump(); // .
        p.expect(SyntaxKind::Ident);
        if p.at(SyntaxKind::LParen) {
            p.bump(); // (
            if !p.at(SyntaxKind::RParen) {
                expressions::expr(p);
            }
            p.expect(SyntaxKind::RParen);
        }
    } else {
        expressions::expr(p);
    }
    m.complete(p, SyntaxKind::InstancePort);
}

// Consume an opaque region through its closing keyword, wrapped in `node`.
// Used for constructs whose interior the engine never inspects.
fn opaque_region(p: &mut Parser, end: SyntaxKind, node: SyntaxKind) {
    let m = p.start();
    p.bump(); // opening keyword
    while !p.at(end) && !p.at(SyntaxKind::EndmoduleKw) && !p.at_end() {
        p.bump();
    }
    if !p.eat(end) {
        p.error("unterminated construct");
    }
    // Optional `: name`
    if p.eat(SyntaxKind::Colon) && p.at(SyntaxKind::Ident) {
        p.bump();
    }
    m.complete(p, node);
}

// Skip one statement without modeling it: tracks bracket and
// begin/end-style nesting, stops after a top-level `;` or block closer
// unless an `else` continues the statement. Bounded by `endmodule`.
fn opaque_statement(p: &mut Parser) {
    let mut depth = 0u32;
    while !p.at_end() && !p.at(SyntaxKind::EndmoduleKw) {
        let kind = p.current();
        match kind {
            SyntaxKind::LParen
            | SyntaxKind::LBracket
            | SyntaxKind::LBrace
            | SyntaxKind::BeginKw
            | SyntaxKind::ForkKw
            | SyntaxKind::CaseKw
            | SyntaxKind::CasexKw
            | SyntaxKind::CasezKw => depth += 1,
            SyntaxKind::RParen
            | SyntaxKind::RBracket
            | SyntaxKind::RBrace
            | SyntaxKind::EndKw
            | SyntaxKind::JoinKw
            | SyntaxKind::JoinAnyKw
            | SyntaxKind::JoinNoneKw
            | SyntaxKind::EndcaseKw => depth = depth.saturating_sub(1),
            _ => {}
        }
        let closes_block = depth == 0
            && matches!(
                kind,
                SyntaxKind::EndKw
                    | SyntaxKind::JoinKw
                    | SyntaxKind::JoinAnyKw
                    | SyntaxKind::JoinNoneKw
                    | SyntaxKind::EndcaseKw
            );
        let ends_stmt = depth == 0 && kind == SyntaxKind::Semicolon;
        p.bump();
        if (closes_block || ends_stmt) && !p.at(SyntaxKind::ElseKw) {
            break;
        }
    }
}
