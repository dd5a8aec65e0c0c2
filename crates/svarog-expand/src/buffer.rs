use lsp_types::Url;
use svarog_parser::{Parse, SyntaxNode};
use svarog_source::LineIndex;

/// The open document the engine expands, as last pushed by the host.
#[derive(Debug)]
pub struct DocumentSnapshot {
    uri: Url,
    text: String,
    parse: Parse,
    line_index: LineIndex,
}

impl DocumentSnapshot {
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Root of the document's syntax tree.
    pub fn root(&self) -> SyntaxNode {
        self.parse.syntax()
    }
}

/// Tracks the current buffer for the active document.
///
/// `update` re-lexes and re-parses the full text; the engine reads a
/// consistent `(text, tree, line index)` triple through `current`.
/// Nothing is cached across expansion passes beyond this snapshot.
#[derive(Debug, Default)]
pub struct BufferTracker {
    current: Option<DocumentSnapshot>,
}

impl BufferTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tracked document with new content.
    pub fn update(&mut self, uri: Url, text: &str) {
        let parse = svarog_parser::parse_source(text);
        self.current = Some(DocumentSnapshot {
            uri,
            text: text.to_owned(),
            line_index: LineIndex::new(text),
            parse,
        });
    }

    /// The current snapshot, if any document has been pushed.
    pub fn current(&self) -> Option<&DocumentSnapshot> {
        self.current.as_ref()
    }
}
