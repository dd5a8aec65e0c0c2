pub use text_size::{TextRange, TextSize};

mod line_index;
pub use line_index::{LineCol, LineIndex};

/// Opaque handle to a source file within one expansion pass.
///
/// Files are numbered in scan order: the tracked (open) buffer first,
/// then project files in insertion order. Lower ids win when a module
/// name is defined more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub u32);
