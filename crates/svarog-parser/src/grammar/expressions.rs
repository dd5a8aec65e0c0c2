use svarog_lexer::SyntaxKind;

use crate::parser::{CompletedMarker, Parser};

// Parse an expression. Returns None if no expression could be parsed.
//
// Covers the operand language of port connections and declaration
// initializers: literals, (hierarchical) names, concatenations with
// replication, index/range selects, calls, unary and binary operators,
// and the ternary. Enough to keep delimiters balanced; the engine never
// evaluates these trees.
pub(crate) fn expr(p: &mut Parser) -> Option<CompletedMarker> {
    expr_bp(p, 0)
}

// Pratt parser with minimum binding power.
fn expr_bp(p: &mut Parser, min_bp: u8) -> Option<CompletedMarker> {
    let mut lhs = lhs(p)?;

    loop {
        // Conditional ternary: `? expr : expr`
        if p.at(SyntaxKind::Question) {
            let (l_bp, _) = (2, 1);
            if l_bp < min_bp {
                break;
            }
            let m = lhs.precede(p);
            p.bump(); // ?
            expr_bp(p, 0);
            p.expect(SyntaxKind::Colon);
            expr_bp(p, 1); // right-associative
            lhs = m.complete(p, SyntaxKind::CondExpr);
            continue;
        }

        let Some(op_bp) = infix_bp(p.current()) else {
            break;
        };
        if op_bp.0 < min_bp {
            break;
        }
        let m = lhs.precede(p);
        p.bump(); // operator
        expr_bp(p, op_bp.1);
        lhs = m.complete(p, SyntaxKind::BinExpr);
    }

    Some(lhs)
}

fn lhs(p: &mut Parser) -> Option<CompletedMarker> {
    if is_prefix_op(p.current()) {
        let m = p.start();
        p.bump(); // prefix operator
        expr_bp(p, 15); // unary binds tighter than any binary operator
        return Some(m.complete(p, SyntaxKind::PrefixExpr));
    }
    let cm = atom(p)?;
    Some(postfix(p, cm))
}

fn atom(p: &mut Parser) -> Option<CompletedMarker> {
    match p.current() {
        SyntaxKind::IntLiteral => {
            let m = p.start();
            p.bump();
            // Sized based literal: IntLiteral directly followed by BasedLiteral
            if p.current() == SyntaxKind::BasedLiteral {
                p.bump();
            }
            Some(m.complete(p, SyntaxKind::Literal))
        }
        SyntaxKind::RealLiteral
        | SyntaxKind::BasedLiteral
        | SyntaxKind::UnbasedUnsizedLiteral
        | SyntaxKind::StringLiteral => {
            let m = p.start();
            p.bump();
            Some(m.complete(p, SyntaxKind::Literal))
        }
        SyntaxKind::Ident | SyntaxKind::EscapedIdent => {
            let m = p.start();
            p.bump();
            Some(m.complete(p, SyntaxKind::NameRef))
        }
        SyntaxKind::SystemIdent => {
            // System function call: $bits(foo) or bare $time
            let m = p.start();
            p.bump();
            if p.at(SyntaxKind::LParen) {
                arg_list(p);
            }
            Some(m.complete(p, SyntaxKind::CallExpr))
        }
        SyntaxKind::LParen => {
            let m = p.start();
            p.bump(); // (
            expr(p);
            p.expect(SyntaxKind::RParen);
            Some(m.complete(p, SyntaxKind::ParenExpr))
        }
        SyntaxKind::LBrace => Some(concat_expr(p)),
        SyntaxKind::TickBrace => {
            // Assignment pattern `'{...}`: treated as an opaque braced list
            let m = p.start();
            p.bump(); // '{
            if !p.at(SyntaxKind::RBrace) {
                expr(p);
                while p.eat(SyntaxKind::Comma) {
                    expr(p);
                }
            }
            p.expect(SyntaxKind::RBrace);
            Some(m.complete(p, SyntaxKind::ConcatExpr))
        }
        _ => None,
    }
}

// `{a, b}` concatenation or `{n{a, b}}` replication.
fn concat_expr(p: &mut Parser) -> CompletedMarker {
    let m = p.start();
    p.bump(); // {
    if !p.at(SyntaxKind::RBrace) {
        let first = expr(p);
        if first.is_some() && p.at(SyntaxKind::LBrace) {
            // Replication: first expr was the count, inner braces follow
            concat_expr(p);
            p.expect(SyntaxKind::RBrace);
            return m.complete(p, SyntaxKind::ReplicExpr);
        }
        while p.eat(SyntaxKind::Comma) {
            expr(p);
        }
    }
    p.expect(SyntaxKind::RBrace);
    m.complete(p, SyntaxKind::ConcatExpr)
}

fn arg_list(p: &mut Parser) {
    let m = p.start();
    p.bump(); // (
    if !p.at(SyntaxKind::RParen) {
        expr(p);
        while p.eat(SyntaxKind::Comma) {
            expr(p);
        }
    }
    p.expect(SyntaxKind::RParen);
    m.complete(p, SyntaxKind::ArgList);
}

// Postfix chain: `[...]` selects, `.field` accesses, `(args)` calls.
fn postfix(p: &mut Parser, mut lhs: CompletedMarker) -> CompletedMarker {
    loop {
        match p.current() {
            SyntaxKind::LBracket => {
                let m = lhs.precede(p);
                p.bump(); // [
                range_or_index(p);
                p.expect(SyntaxKind::RBracket);
                lhs = m.complete(p, SyntaxKind::IndexExpr);
            }
            SyntaxKind::Dot
                if matches!(
                    p.nth(1),
                    SyntaxKind::Ident | SyntaxKind::EscapedIdent
                ) =>
            {
                let m = lhs.precede(p);
                p.bump(); // .
                p.bump(); // field name
                lhs = m.complete(p, SyntaxKind::FieldExpr);
            }
            SyntaxKind::LParen => {
                let m = lhs.precede(p);
                arg_list(p);
                lhs = m.complete(p, SyntaxKind::CallExpr);
            }
            _ => return lhs,
        }
    }
}

// Interior of `[...]`: plain index, `hi:lo`, or `base+:width`/`base-:width`.
fn range_or_index(p: &mut Parser) {
    let Some(first) = expr(p) else {
        return;
    };
    let part_select = p.at(SyntaxKind::Colon)
        || (matches!(p.current(), SyntaxKind::Plus | SyntaxKind::Minus)
            && p.nth(1) == SyntaxKind::Colon);
    if !part_select {
        return;
    }
    let m = first.precede(p);
    if p.at(SyntaxKind::Plus) || p.at(SyntaxKind::Minus) {
        p.bump();
    }
    p.bump(); // :
    expr(p);
    m.complete(p, SyntaxKind::RangeExpr);
}

fn is_prefix_op(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Bang
            | SyntaxKind::Tilde
            | SyntaxKind::TildeAmp
            | SyntaxKind::TildePipe
            | SyntaxKind::TildeCaret
            | SyntaxKind::CaretTilde
            | SyntaxKind::Plus
            | SyntaxKind::Minus
            | SyntaxKind::Amp
            | SyntaxKind::Pipe
            | SyntaxKind::Caret
    )
}

// (left bp, right bp) per operator; higher binds tighter.
fn infix_bp(kind: SyntaxKind) -> Option<(u8, u8)> {
    let bp = match kind {
        SyntaxKind::PipePipe => (3, 4),
        SyntaxKind::AmpAmp => (4, 5),
        SyntaxKind::Pipe => (5, 6),
        SyntaxKind::Caret | SyntaxKind::CaretTilde | SyntaxKind::TildeCaret => (6, 7),
        SyntaxKind::Amp => (7, 8),
        SyntaxKind::EqEq
        | SyntaxKind::BangEq
        | SyntaxKind::EqEqEq
        | SyntaxKind::BangEqEq => (8, 9),
        SyntaxKind::Lt | SyntaxKind::LtEq | SyntaxKind::Gt | SyntaxKind::GtEq => (9, 10),
        SyntaxKind::LtLt | SyntaxKind::GtGt | SyntaxKind::LtLtLt | SyntaxKind::GtGtGt => {
            (10, 11)
        }
        SyntaxKind::Plus | SyntaxKind::Minus => (11, 12),
        SyntaxKind::Star | SyntaxKind::Slash | SyntaxKind::Percent => (12, 13),
        SyntaxKind::StarStar => (14, 13),
        _ => return None,
    };
    Some(bp)
}
