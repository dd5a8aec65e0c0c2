use crate::TextSize;

/// A line/column position, both 0-indexed.
///
/// `line` is the 0-based line number. `col` is the offset from the start
/// of that line -- in bytes or in UTF-16 code units depending on which
/// conversion produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

// A char wider than one byte in UTF-8. Everything between two wide chars
// is ASCII, where byte columns and UTF-16 columns coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WideChar {
    offset: TextSize,
    utf8_len: u32,
    utf16_len: u32,
}

/// Maps byte offsets to line/column positions, in byte columns or UTF-16
/// code-unit columns (the LSP wire encoding).
///
/// Built once per file text. Lines are 0-indexed. Line breaks are
/// detected by `\n` (LF). For CRLF input, `\r` counts as a regular byte
/// in column math and `\n` starts the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the start of each line. First entry is always 0.
    line_starts: Vec<TextSize>,
    /// Total length of the source text in bytes.
    len: TextSize,
    /// All chars with a multi-byte UTF-8 encoding, in offset order.
    wide_chars: Vec<WideChar>,
}

impl LineIndex {
    /// Build a `LineIndex` by scanning `text` for newlines and non-ASCII
    /// chars.
    ///
    /// Empty text has exactly 1 line with start offset 0.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        let mut wide_chars = Vec::new();
        for (pos, c) in text.char_indices() {
            if c == '\n' {
                line_starts.push(TextSize::new(pos as u32 + 1));
            } else if c.len_utf8() > 1 {
                wide_chars.push(WideChar {
                    offset: TextSize::new(pos as u32),
                    utf8_len: c.len_utf8() as u32,
                    utf16_len: c.len_utf16() as u32,
                });
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
            wide_chars,
        }
    }

    /// Convert a byte offset to a line/byte-column position.
    ///
    /// Offsets beyond the end of text are clamped to the EOF position.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = std::cmp::min(offset, self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let col = u32::from(offset) - u32::from(self.line_starts[line]);
        LineCol {
            line: line as u32,
            col,
        }
    }

    /// Convert a byte offset to a line/UTF-16-column position.
    pub fn line_col_utf16(&self, offset: TextSize) -> LineCol {
        let lc = self.line_col(offset);
        let offset = std::cmp::min(offset, self.len);
        let line_start = self.line_starts[lc.line as usize];
        // Every wide char fully before `offset` on this line shrinks the
        // column by the difference between its UTF-8 and UTF-16 widths.
        let shrink: u32 = self
            .wide_on_line(line_start, offset)
            .map(|wc| wc.utf8_len - wc.utf16_len)
            .sum();
        LineCol {
            line: lc.line,
            col: lc.col - shrink,
        }
    }

    /// Convert a line/byte-column position back to a byte offset.
    ///
    /// Returns `None` if `line` is out of range or `col` is past the end
    /// of the line.
    pub fn offset(&self, lc: LineCol) -> Option<TextSize> {
        let line = lc.line as usize;
        let start = *self.line_starts.get(line)?;
        let end = self.line_ends_at(line);
        let raw = u32::from(start).checked_add(lc.col)?;
        let offset = TextSize::new(raw);
        if offset > end {
            return None;
        }
        Some(offset)
    }

    /// Convert a line/UTF-16-column position back to a byte offset.
    ///
    /// Returns `None` if `line` is out of range or `col` overruns the
    /// line. A `col` landing in the middle of a surrogate pair resolves
    /// to the start of that char.
    pub fn offset_utf16(&self, lc: LineCol) -> Option<TextSize> {
        let line = lc.line as usize;
        let start = *self.line_starts.get(line)?;
        let end = self.line_ends_at(line);
        let mut cursor = start;
        let mut remaining = lc.col;
        for wc in self.wide_on_line(start, end) {
            // ASCII run between the cursor and the next wide char: one
            // UTF-16 unit per byte.
            let ascii_units = u32::from(wc.offset) - u32::from(cursor);
            if remaining <= ascii_units {
                break;
            }
            remaining -= ascii_units;
            cursor = wc.offset;
            if remaining < wc.utf16_len {
                return Some(cursor);
            }
            remaining -= wc.utf16_len;
            cursor += TextSize::new(wc.utf8_len);
        }
        let raw = u32::from(cursor).checked_add(remaining)?;
        let offset = TextSize::new(raw);
        if offset > end {
            return None;
        }
        Some(offset)
    }

    /// Number of lines in the source text.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    // Exclusive end offset of the given line (start of the next line, or
    // EOF for the last line).
    fn line_ends_at(&self, line: usize) -> TextSize {
        self.line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.len)
    }

    // Wide chars with start offset in `[from, to)`.
    fn wide_on_line(
        &self,
        from: TextSize,
        to: TextSize,
    ) -> impl Iterator<Item = &WideChar> {
        let first = self.wide_chars.partition_point(|wc| wc.offset < from);
        self.wide_chars[first..]
            .iter()
            .take_while(move |wc| wc.offset < to)
    }
}
