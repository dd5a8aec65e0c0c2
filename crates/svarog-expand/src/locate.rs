use std::collections::HashSet;

use smol_str::SmolStr;
use svarog_ast::{
    AstNode, InstancePortList, ModuleDecl, ModuleInstantiation, PortList,
};
use svarog_lexer::SyntaxKind;
use svarog_parser::{SyntaxNode, SyntaxToken};
use svarog_source::{LineIndex, TextRange, TextSize};

/// Which directive a site carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DirectiveKind {
    AutoArg,
    AutoInst,
}

/// One accepted directive with everything the expander needs.
#[derive(Debug)]
pub(crate) struct DirectiveSite {
    pub(crate) kind: DirectiveKind,
    /// The module whose ports drive generation: the owning module for
    /// AUTOARG, the instantiated module for AUTOINST.
    pub(crate) target_module: SmolStr,
    /// Everything between the directive's closing `*/` and the port
    /// list's closing `)`. Replaced wholesale by generated text.
    pub(crate) replacement_region: TextRange,
    /// Port/pin names already written by the user before the directive.
    pub(crate) preexisting: HashSet<SmolStr>,
    /// Leading whitespace of the line the owning construct starts on.
    pub(crate) indent: String,
    /// Offset used for template resolution (start of the instantiation).
    pub(crate) site_offset: TextSize,
}

/// Find every `/*AUTOARG*/` and `/*AUTOINST*/` in an accepted position.
///
/// A directive counts only when it sits directly inside a module header's
/// port list (AUTOARG) or an instance's port connection list (AUTOINST),
/// at parenthesis depth zero relative to that list. Anything else --
/// body-level comments, directives nested inside a connection expression,
/// lists with no closing `)` -- is ignored. At most one directive per
/// port list is accepted (the first).
pub(crate) fn locate_directives(
    root: &SyntaxNode,
    text: &str,
    line_index: &LineIndex,
) -> Vec<DirectiveSite> {
    let mut sites = Vec::new();
    let mut claimed_lists: HashSet<TextRange> = HashSet::new();

    for element in root.descendants_with_tokens() {
        let Some(token) = element.into_token() else {
            continue;
        };
        let Some(kind) = directive_kind(&token) else {
            continue;
        };
        let Some(site) = classify(kind, &token, text, line_index, &mut claimed_lists) else {
            continue;
        };
        sites.push(site);
    }

    sites
}

fn directive_kind(token: &SyntaxToken) -> Option<DirectiveKind> {
    if token.kind() != SyntaxKind::BlockComment {
        return None;
    }
    let text = token.text();
    let interior = text.strip_prefix("/*").unwrap_or(text);
    let interior = interior.strip_suffix("*/").unwrap_or(interior);
    match interior.trim() {
        "AUTOARG" => Some(DirectiveKind::AutoArg),
        "AUTOINST" => Some(DirectiveKind::AutoInst),
        _ => None,
    }
}

fn classify(
    kind: DirectiveKind,
    token: &SyntaxToken,
    text: &str,
    line_index: &LineIndex,
    claimed_lists: &mut HashSet<TextRange>,
) -> Option<DirectiveSite> {
    let directive_range = token.text_range();

    // Nearest enclosing port list of the right flavor.
    let list = token.parent_ancestors().find(|node| {
        matches!(
            node.kind(),
            SyntaxKind::PortList | SyntaxKind::InstancePortList
        )
    })?;

    match (kind, list.kind()) {
        (DirectiveKind::AutoArg, SyntaxKind::PortList) => {}
        (DirectiveKind::AutoInst, SyntaxKind::InstancePortList) => {}
        _ => return None,
    }

    check_paren_depth(&list, directive_range.start())?;

    let r_paren = match list.kind() {
        SyntaxKind::PortList => PortList::cast(list.clone())?.r_paren(),
        _ => InstancePortList::cast(list.clone())?.r_paren(),
    }?;
    if r_paren.text_range().start() < directive_range.end() {
        return None;
    }

    if !claimed_lists.insert(list.text_range()) {
        return None;
    }

    let replacement_region =
        TextRange::new(directive_range.end(), r_paren.text_range().start());

    match kind {
        DirectiveKind::AutoArg => {
            let module = list.parent().and_then(ModuleDecl::cast)?;
            let name = module.name()?;
            let anchor = module.keyword().unwrap_or(name.clone());
            Some(DirectiveSite {
                kind,
                target_module: SmolStr::new(name.text()),
                replacement_region,
                preexisting: predeclared_args(&list, directive_range.start()),
                indent: line_indent(text, line_index, anchor.text_range().start()),
                site_offset: anchor.text_range().start(),
            })
        }
        DirectiveKind::AutoInst => {
            let inst = list.parent().and_then(ModuleInstantiation::cast)?;
            let name = inst.module_name()?;
            Some(DirectiveSite {
                kind,
                target_module: SmolStr::new(name.text()),
                replacement_region,
                preexisting: preconnected_pins(&list, directive_range.start()),
                indent: line_indent(text, line_index, name.text_range().start()),
                site_offset: name.text_range().start(),
            })
        }
    }
}

// The directive must sit between the list's parens, and not nested
// inside a connection's own parentheses: between the opening `(` and the
// directive, opens and closes must balance.
fn check_paren_depth(list: &SyntaxNode, directive_start: TextSize) -> Option<()> {
    let open = list
        .children_with_tokens()
        .filter_map(rowan::NodeOrToken::into_token)
        .find(|tok| tok.kind() == SyntaxKind::LParen)?;
    let from = open.text_range().end();
    if directive_start < from {
        return None;
    }

    let mut depth = 0i32;
    for element in list.descendants_with_tokens() {
        let Some(tok) = element.into_token() else {
            continue;
        };
        let range = tok.text_range();
        if range.start() < from || range.end() > directive_start {
            continue;
        }
        match tok.kind() {
            SyntaxKind::LParen => depth += 1,
            SyntaxKind::RParen => depth -= 1,
            _ => {}
        }
    }
    (depth == 0).then_some(())
}

// Port names listed in a module header before the directive.
fn predeclared_args(list: &SyntaxNode, directive_start: TextSize) -> HashSet<SmolStr> {
    let Some(list) = PortList::cast(list.clone()) else {
        return HashSet::new();
    };
    list.ports()
        .filter_map(|port| port.name())
        .filter(|name| name.text_range().end() <= directive_start)
        .map(|name| SmolStr::new(name.text()))
        .collect()
}

// Pin names connected via `.name(...)` before the directive.
fn preconnected_pins(list: &SyntaxNode, directive_start: TextSize) -> HashSet<SmolStr> {
    let Some(list) = InstancePortList::cast(list.clone()) else {
        return HashSet::new();
    };
    list.ports()
        .filter_map(|port| port.port_name())
        .filter(|name| name.text_range().end() <= directive_start)
        .map(|name| SmolStr::new(name.text()))
        .collect()
}

// Leading whitespace of the line containing `offset`, or empty when the
// construct does not start the line.
fn line_indent(text: &str, line_index: &LineIndex, offset: TextSize) -> String {
    let lc = line_index.line_col(offset);
    let start = u32::from(offset) - lc.col;
    let prefix = &text[start as usize..u32::from(offset) as usize];
    if prefix.chars().all(char::is_whitespace) {
        prefix.to_owned()
    } else {
        String::new()
    }
}
