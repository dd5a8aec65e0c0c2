mod event;
mod grammar;
mod parser;

use rowan::Language;
use svarog_lexer::Token;

pub use svarog_lexer::SyntaxKind;

use event::Event;

/// The `SystemVerilog` language tag for rowan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SvLanguage {}

impl Language for SvLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> SyntaxKind {
        assert!(
            raw.0 <= SyntaxKind::ErrorNode as u16,
            "invalid SyntaxKind value: {}",
            raw.0
        );
        // SAFETY: SyntaxKind is repr(u16) with contiguous variants.
        unsafe { std::mem::transmute(raw.0) }
    }

    fn kind_to_raw(kind: SyntaxKind) -> rowan::SyntaxKind {
        rowan::SyntaxKind(kind as u16)
    }
}

pub type SyntaxNode = rowan::SyntaxNode<SvLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<SvLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<SvLanguage>;

/// A recoverable problem found during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub range: svarog_source::TextRange,
    pub message: String,
}

/// Result of parsing a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    pub green: rowan::GreenNode,
    pub errors: Vec<ParseError>,
}

impl Parse {
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }
}

/// Parse a token stream into a green tree rooted at `SourceFile`.
///
/// The tree is lossless: every byte of `src`, including whitespace and
/// comments, appears in the tree. Leading trivia attach to the following
/// significant token inside whichever node is open at that point.
pub fn parse(tokens: &[Token], src: &str) -> Parse {
    let mut p = parser::Parser::new(tokens);
    grammar::source_file(&mut p);
    let (events, errors) = p.finish();
    build_tree(tokens, src, events, errors)
}

/// Convenience: lex and parse in one step.
pub fn parse_source(src: &str) -> Parse {
    let tokens = svarog_lexer::lex(src);
    parse(&tokens, src)
}

// Replay parser events into a rowan green tree.
fn build_tree(
    tokens: &[Token],
    src: &str,
    mut events: Vec<Event>,
    errors: Vec<ParseError>,
) -> Parse {
    let mut builder = rowan::GreenNodeBuilder::new();
    let mut text_pos = 0usize;
    let mut raw_idx = 0usize;
    let mut fp_kinds: Vec<SyntaxKind> = Vec::new();

    for i in 0..events.len() {
        match std::mem::replace(&mut events[i], Event::Tombstone) {
            Event::Tombstone => {}
            Event::Finish => builder.finish_node(),
            Event::Token { n_raw_tokens } => {
                for _ in 0..n_raw_tokens {
                    let tok = tokens[raw_idx];
                    let len: usize = tok.len.into();
                    builder.token(
                        SvLanguage::kind_to_raw(tok.kind),
                        &src[text_pos..text_pos + len],
                    );
                    text_pos += len;
                    raw_idx += 1;
                }
            }
            Event::Start {
                kind,
                forward_parent,
            } => {
                // Collect the forward-parent chain: each link is a node
                // that must wrap everything from this position on, so the
                // outermost (last collected) starts first.
                fp_kinds.clear();
                fp_kinds.push(kind);
                let mut fp = forward_parent;
                let mut idx = i;
                while let Some(dist) = fp {
                    idx += dist as usize;
                    fp = if let Event::Start {
                        kind,
                        forward_parent,
                    } = std::mem::replace(&mut events[idx], Event::Tombstone)
                    {
                        fp_kinds.push(kind);
                        forward_parent
                    } else {
                        None
                    };
                }
                for kind in fp_kinds.drain(..).rev() {
                    builder.start_node(SvLanguage::kind_to_raw(kind));
                }
            }
        }
    }

    Parse {
        green: builder.finish(),
        errors,
    }
}
