use svarog_source::{LineCol, LineIndex, TextSize};

#[test]
fn empty_text_has_one_line() {
    let idx = LineIndex::new("");
    assert_eq!(idx.line_count(), 1);
    assert_eq!(idx.line_col(TextSize::new(0)), LineCol { line: 0, col: 0 });
}

#[test]
fn multi_line() {
    let idx = LineIndex::new("aaa\nbbb\nccc");
    assert_eq!(idx.line_count(), 3);
    assert_eq!(idx.line_col(TextSize::new(0)), LineCol { line: 0, col: 0 });
    // Offset 3 is the '\n' itself -- still on line 0
    assert_eq!(idx.line_col(TextSize::new(3)), LineCol { line: 0, col: 3 });
    assert_eq!(idx.line_col(TextSize::new(4)), LineCol { line: 1, col: 0 });
    assert_eq!(idx.line_col(TextSize::new(10)), LineCol { line: 2, col: 2 });
}

#[test]
fn offset_roundtrip() {
    let text = "first\nsecond\nthird";
    let idx = LineIndex::new(text);
    for i in 0..text.len() {
        let offset = TextSize::new(i as u32);
        let lc = idx.line_col(offset);
        assert_eq!(idx.offset(lc), Some(offset), "roundtrip failed at {i}");
    }
}

#[test]
fn out_of_range_offset_clamps_to_eof() {
    let idx = LineIndex::new("ab");
    assert_eq!(idx.line_col(TextSize::new(10)), LineCol { line: 0, col: 2 });
}

#[test]
fn offset_returns_none_for_out_of_range_line() {
    let idx = LineIndex::new("ab\ncd");
    assert!(idx.offset(LineCol { line: 5, col: 0 }).is_none());
}

#[test]
fn offset_returns_none_for_out_of_range_col() {
    let idx = LineIndex::new("ab\ncd");
    // Line 0 is "ab\n" (3 bytes including newline), col 4 is past end
    assert!(idx.offset(LineCol { line: 0, col: 4 }).is_none());
    // Line 1 is "cd" (2 bytes), col 3 is past end
    assert!(idx.offset(LineCol { line: 1, col: 3 }).is_none());
}

#[test]
fn crlf_line_split_on_lf() {
    let idx = LineIndex::new("ab\r\ncd");
    assert_eq!(idx.line_count(), 2);
    assert_eq!(idx.line_col(TextSize::new(3)), LineCol { line: 0, col: 3 });
    assert_eq!(idx.line_col(TextSize::new(4)), LineCol { line: 1, col: 0 });
}

#[test]
fn utf16_cols_match_byte_cols_for_ascii() {
    let text = "module m;\nendmodule\n";
    let idx = LineIndex::new(text);
    for i in 0..text.len() {
        let offset = TextSize::new(i as u32);
        assert_eq!(idx.line_col(offset), idx.line_col_utf16(offset));
        let lc = idx.line_col_utf16(offset);
        assert_eq!(idx.offset_utf16(lc), Some(offset));
    }
}

#[test]
fn utf16_col_shrinks_past_wide_chars() {
    // "é" is 2 bytes in UTF-8, 1 unit in UTF-16
    let text = "// é comment\nwire x;";
    let idx = LineIndex::new(text);
    let x_offset = TextSize::new(text.find('x').expect("has x") as u32);
    assert_eq!(idx.line_col_utf16(x_offset), LineCol { line: 1, col: 5 });

    // Position of "comment" on line 0: byte col 6, UTF-16 col 5
    let c_offset = TextSize::new(text.find("comment").expect("has comment") as u32);
    assert_eq!(idx.line_col(c_offset), LineCol { line: 0, col: 6 });
    assert_eq!(idx.line_col_utf16(c_offset), LineCol { line: 0, col: 5 });
    assert_eq!(
        idx.offset_utf16(LineCol { line: 0, col: 5 }),
        Some(c_offset)
    );
}

#[test]
fn utf16_surrogate_pair_counts_two_units() {
    // "𐍈" is 4 bytes in UTF-8, 2 units in UTF-16
    let text = "a𐍈b";
    let idx = LineIndex::new(text);
    let b_offset = TextSize::new(5);
    assert_eq!(idx.line_col_utf16(b_offset), LineCol { line: 0, col: 3 });
    assert_eq!(idx.offset_utf16(LineCol { line: 0, col: 3 }), Some(b_offset));
    // A column landing inside the pair resolves to the char start
    assert_eq!(
        idx.offset_utf16(LineCol { line: 0, col: 2 }),
        Some(TextSize::new(1))
    );
}

#[test]
fn offset_utf16_rejects_col_past_line_end() {
    let idx = LineIndex::new("ab\ncd");
    assert!(idx.offset_utf16(LineCol { line: 1, col: 3 }).is_none());
}
