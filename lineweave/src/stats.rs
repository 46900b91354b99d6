use serde::{Deserialize, Serialize};

/// Word and character totals derived from a reader's lines.
///
/// Computed once when an `AnnotatedReader` is constructed; the snapshot is
/// not recomputed if the underlying lines change later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Total whitespace-separated tokens across all lines
    pub words: usize,
    /// Total characters across all lines, counted post-trim
    pub chars: usize,
}

impl Stats {
    /// Computes totals over a set of already-trimmed lines.
    pub fn from_lines(lines: &[String]) -> Self {
        let words = lines.iter().map(|line| line.split_whitespace().count()).sum();
        let chars = lines.iter().map(|line| line.chars().count()).sum();
        Self { words, chars }
    }
}
