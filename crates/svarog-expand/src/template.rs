use smallvec::SmallVec;
use smol_str::SmolStr;
use svarog_lexer::SyntaxKind;
use svarog_parser::SyntaxNode;
use svarog_source::TextSize;

/// One parsed `AUTO_TEMPLATE` comment.
///
/// ```text
/// /* <target> AUTO_TEMPLATE ["<regex>"]
///    <target> AUTO_TEMPLATE
///    ( .pin(expr), .pin(expr) ); */
/// ```
///
/// Several target headers may share one binding group. The optional regex
/// is recognized and stored but not applied as an instance-name filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TemplateBlock {
    /// Byte offset of the comment in the buffer; blocks only apply to
    /// instances that appear after them.
    position: TextSize,
    targets: SmallVec<[SmolStr; 2]>,
    regex: Option<String>,
    /// Pin name -> verbatim connection text, in template order.
    bindings: Vec<(SmolStr, String)>,
}

impl TemplateBlock {
    /// The verbatim connection text for a pin, if the template binds it.
    pub(crate) fn binding(&self, pin: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(name, _)| name == pin)
            .map(|(_, text)| text.as_str())
    }

    /// The raw regex literal following `AUTO_TEMPLATE`, when present.
    /// Recognized and retained; not applied as an instance-name filter.
    #[allow(dead_code)]
    pub(crate) fn regex(&self) -> Option<&str> {
        self.regex.as_deref()
    }
}

/// All template blocks of a buffer, in lexical order.
#[derive(Debug, Default)]
pub(crate) struct TemplateRegistry {
    blocks: Vec<TemplateBlock>,
}

impl TemplateRegistry {
    /// Collect template blocks from every block comment in the tree.
    /// Malformed template comments are skipped whole.
    pub(crate) fn scan(root: &SyntaxNode) -> Self {
        let mut blocks = Vec::new();
        for element in root.descendants_with_tokens() {
            let Some(token) = element.into_token() else {
                continue;
            };
            if token.kind() != SyntaxKind::BlockComment {
                continue;
            }
            let text = token.text();
            if !text.contains("AUTO_TEMPLATE") {
                continue;
            }
            let interior = text.strip_prefix("/*").unwrap_or(text);
            let interior = interior.strip_suffix("*/").unwrap_or(interior);
            if let Some(block) = parse_template(interior, token.text_range().start()) {
                blocks.push(block);
            }
        }
        Self { blocks }
    }

    /// Resolve the template for an instance of `module` at byte offset
    /// `site`: the lexically last block before the site whose targets
    /// include the module.
    pub(crate) fn lookup(&self, site: TextSize, module: &str) -> Option<&TemplateBlock> {
        self.blocks
            .iter()
            .filter(|b| b.position < site && b.targets.iter().any(|t| t == module))
            .next_back()
    }
}

// Tokens of the comment interior with their byte ranges (relative to the
// interior), trivia removed.
fn interior_tokens(interior: &str) -> Vec<(SyntaxKind, usize, usize)> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    for tok in svarog_lexer::lex(interior) {
        let len: usize = tok.len.into();
        if !tok.kind.is_trivia() && tok.kind != SyntaxKind::Eof {
            out.push((tok.kind, pos, pos + len));
        }
        pos += len;
    }
    out
}

// Parse one template comment interior. The shape is a short state
// machine: target name -> AUTO_TEMPLATE -> optional regex -> either
// another target or the binding group. Any deviation rejects the whole
// comment.
fn parse_template(interior: &str, position: TextSize) -> Option<TemplateBlock> {
    let tokens = interior_tokens(interior);
    let mut cursor = 0usize;
    let mut targets = SmallVec::new();
    let mut regex = None;

    // Target headers: `<name> AUTO_TEMPLATE ["<regex>"]`, one or more.
    loop {
        let &(kind, start, end) = tokens.get(cursor)?;
        if kind != SyntaxKind::Ident {
            return None;
        }
        let target = &interior[start..end];
        let &(kw_kind, kw_start, kw_end) = tokens.get(cursor + 1)?;
        if kw_kind != SyntaxKind::Ident || &interior[kw_start..kw_end] != "AUTO_TEMPLATE" {
            return None;
        }
        targets.push(SmolStr::new(target));
        cursor += 2;

        if let Some(&(SyntaxKind::StringLiteral, start, end)) = tokens.get(cursor) {
            let literal = &interior[start..end];
            regex = Some(literal.trim_matches('"').to_owned());
            cursor += 1;
        }

        match tokens.get(cursor) {
            Some(&(SyntaxKind::Ident, ..)) => continue,
            Some(&(SyntaxKind::LParen, ..)) => break,
            _ => return None,
        }
    }

    // Binding group: `( .pin(expr) {, .pin(expr)} ) [;]`
    cursor += 1; // (
    let mut bindings = Vec::new();
    loop {
        let &(kind, ..) = tokens.get(cursor)?;
        if kind == SyntaxKind::RParen {
            cursor += 1;
            break;
        }
        let &(dot, ..) = tokens.get(cursor)?;
        if dot != SyntaxKind::Dot {
            return None;
        }
        let &(pin_kind, pin_start, pin_end) = tokens.get(cursor + 1)?;
        if pin_kind != SyntaxKind::Ident {
            return None;
        }
        let &(open, _, open_end) = tokens.get(cursor + 2)?;
        if open != SyntaxKind::LParen {
            return None;
        }

        // Verbatim capture: everything up to the balancing `)`.
        let mut depth = 1u32;
        let mut scan = cursor + 3;
        let close_start = loop {
            let &(kind, start, _) = tokens.get(scan)?;
            match kind {
                SyntaxKind::LParen => depth += 1,
                SyntaxKind::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        break start;
                    }
                }
                _ => {}
            }
            scan += 1;
        };
        bindings.push((
            SmolStr::new(&interior[pin_start..pin_end]),
            interior[open_end..close_start].trim().to_owned(),
        ));
        cursor = scan + 1;

        match tokens.get(cursor) {
            Some(&(SyntaxKind::Comma, ..)) => cursor += 1,
            Some(&(SyntaxKind::RParen, ..)) => {}
            _ => return None,
        }
    }

    // Optional trailing `;`; nothing else may follow.
    if let Some(&(SyntaxKind::Semicolon, ..)) = tokens.get(cursor) {
        cursor += 1;
    }
    if cursor != tokens.len() {
        return None;
    }

    Some(TemplateBlock {
        position,
        targets,
        regex,
        bindings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(src: &str) -> TemplateRegistry {
        let parse = svarog_parser::parse_source(src);
        TemplateRegistry::scan(&parse.syntax())
    }

    #[test]
    fn single_target_with_regex() {
        let registry = scan(
            "module foo;\n  /* bar AUTO_TEMPLATE \"b_.*\" (\n       .i1(in_a),\n       .o2({x, y})\n     ); */\n  bar b();\nendmodule\n",
        );
        let block = registry
            .lookup(TextSize::new(1000), "bar")
            .expect("template for bar");
        assert_eq!(block.binding("i1"), Some("in_a"));
        assert_eq!(block.binding("o2"), Some("{x, y}"));
        assert_eq!(block.binding("io"), None);
        // Recognized but never applied as a filter
        assert_eq!(block.regex(), Some("b_.*"));
    }

    #[test]
    fn multiple_targets_share_one_group() {
        let registry = scan(
            "module foo;\n  /* qux AUTO_TEMPLATE\n     bar AUTO_TEMPLATE (\n       .i1(in_a)); */\nendmodule\n",
        );
        assert!(registry.lookup(TextSize::new(1000), "qux").is_some());
        assert!(registry.lookup(TextSize::new(1000), "bar").is_some());
        assert!(registry.lookup(TextSize::new(1000), "quux").is_none());
    }

    #[test]
    fn later_block_wins() {
        let registry = scan(
            "module foo;\n  /* bar AUTO_TEMPLATE (.i1(first)); */\n  /* bar AUTO_TEMPLATE (.i1(second)); */\nendmodule\n",
        );
        let block = registry
            .lookup(TextSize::new(1000), "bar")
            .expect("template for bar");
        assert_eq!(block.binding("i1"), Some("second"));
    }

    #[test]
    fn block_after_site_does_not_apply() {
        let src = "module foo;\n  /* bar AUTO_TEMPLATE (.i1(x)); */\nendmodule\n";
        let registry = scan(src);
        // A site before the comment sees no template
        assert!(registry.lookup(TextSize::new(5), "bar").is_none());
    }

    #[test]
    fn nested_parens_captured_verbatim() {
        let registry = scan("/* bar AUTO_TEMPLATE (.a(f(g(x), 2))); */\n");
        let block = registry
            .lookup(TextSize::new(1000), "bar")
            .expect("template for bar");
        assert_eq!(block.binding("a"), Some("f(g(x), 2)"));
    }

    #[test]
    fn malformed_blocks_are_skipped() {
        // Unbalanced parens
        assert!(
            scan("/* bar AUTO_TEMPLATE (.i1(x); */\n")
                .lookup(TextSize::new(1000), "bar")
                .is_none()
        );
        // Missing AUTO_TEMPLATE keyword
        assert!(
            scan("/* bar AUTO_TEMPLATE_X (.i1(x)); */\n")
                .lookup(TextSize::new(1000), "bar")
                .is_none()
        );
        // Trailing garbage after the group
        assert!(
            scan("/* bar AUTO_TEMPLATE (.i1(x)); extra */\n")
                .lookup(TextSize::new(1000), "bar")
                .is_none()
        );
        // A malformed comment does not hide a later well-formed one
        let registry = scan(
            "/* bar AUTO_TEMPLATE (.i1(x); */\n/* bar AUTO_TEMPLATE (.i1(y)); */\n",
        );
        let block = registry
            .lookup(TextSize::new(1000), "bar")
            .expect("second template parses");
        assert_eq!(block.binding("i1"), Some("y"));
    }
}
