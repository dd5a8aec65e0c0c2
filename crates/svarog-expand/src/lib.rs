//! AUTO-expansion engine for SystemVerilog buffers.
//!
//! Rewrites `/*AUTOARG*/` and `/*AUTOINST*/` directives into concrete
//! port lists and named connections, guided by `AUTO_TEMPLATE` comment
//! blocks, and emits the result as LSP text edits. Expansion is
//! idempotent: the replacement region runs from the directive to the
//! port list's closing `)`, and the generated text is canonical, so
//! re-running on the output reproduces it byte for byte.

mod buffer;
mod expand;
mod locate;
mod template;

use std::collections::HashMap;

use lsp_types::{
    CodeAction, CodeActionKind, CodeActionParams, Position, Range, TextEdit, WorkspaceEdit,
};
use svarog_index::SymbolTable;
use svarog_source::{LineIndex, TextRange};

pub use buffer::{BufferTracker, DocumentSnapshot};

const EXPAND_IN_RANGE_TITLE: &str = "Expand all AUTOs in selected range";

/// Expand every AUTO directive in the tracked buffer.
///
/// One edit per accepted directive, in document order; directives with a
/// missing target module, or with nothing left to generate, produce no
/// edit. The function never fails -- on any malformed input it returns
/// the edits it could compute (possibly none).
pub fn generate_auto_expand_text_edits(
    symbols: &SymbolTable,
    tracker: &BufferTracker,
) -> Vec<TextEdit> {
    let Some(doc) = tracker.current() else {
        return Vec::new();
    };
    let root = doc.root();
    let templates = template::TemplateRegistry::scan(&root);
    locate::locate_directives(&root, doc.text(), doc.line_index())
        .iter()
        .filter_map(|site| {
            let new_text = expand::generate(site, symbols, &templates)?;
            Some(TextEdit {
                range: to_lsp_range(site.replacement_region, doc.line_index()),
                new_text,
            })
        })
        .collect()
}

/// Range-limited form: a single always-available code action carrying the
/// edits whose replacement region intersects the selected lines.
pub fn generate_auto_expand_code_actions(
    symbols: &SymbolTable,
    tracker: &BufferTracker,
    params: &CodeActionParams,
) -> Vec<CodeAction> {
    let Some(doc) = tracker.current() else {
        return Vec::new();
    };
    if params.text_document.uri != *doc.uri() {
        return Vec::new();
    }

    let edits: Vec<TextEdit> = generate_auto_expand_text_edits(symbols, tracker)
        .into_iter()
        .filter(|edit| lines_intersect(&edit.range, &params.range))
        .collect();

    let changes = HashMap::from([(doc.uri().clone(), edits)]);
    vec![CodeAction {
        title: EXPAND_IN_RANGE_TITLE.to_owned(),
        kind: Some(CodeActionKind::REFACTOR_REWRITE),
        edit: Some(WorkspaceEdit {
            changes: Some(changes),
            ..Default::default()
        }),
        ..Default::default()
    }]
}

// Selections arrive line-granular from the host; an edit applies when its
// line span overlaps the selection's.
fn lines_intersect(edit: &Range, selection: &Range) -> bool {
    edit.start.line <= selection.end.line && selection.start.line <= edit.end.line
}

fn to_lsp_range(range: TextRange, line_index: &LineIndex) -> Range {
    let start = line_index.line_col_utf16(range.start());
    let end = line_index.line_col_utf16(range.end());
    Range {
        start: Position {
            line: start.line,
            character: start.col,
        },
        end: Position {
            line: end.line,
            character: end.col,
        },
    }
}
