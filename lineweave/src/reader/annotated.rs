use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::document::Document;
use crate::errors::ReaderResult;
use crate::reader::basic::FileReader;
use crate::stats::Stats;

/// A [`FileReader`] paired with word/character statistics and keyword
/// filtering.
///
/// Composition rather than inheritance: the inner reader is reachable via
/// [`reader`](Self::reader) and both types implement [`Document`], so an
/// annotated reader can stand in wherever a plain one is combined or
/// rendered. The [`Stats`] are a snapshot taken at construction and are not
/// recomputed if the inner reader is reloaded later.
#[derive(Debug, Clone, Default)]
pub struct AnnotatedReader {
    reader: FileReader,
    stats: Stats,
}

impl AnnotatedReader {
    /// Creates an annotated reader over `path`, computing stats from the
    /// loaded lines. A missing file yields an empty reader with zeroed stats.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let reader = FileReader::new(path);
        let stats = Stats::from_lines(reader.lines());
        Self { reader, stats }
    }

    /// The underlying plain reader.
    pub fn reader(&self) -> &FileReader {
        &self.reader
    }

    /// The trimmed lines captured at construction.
    pub fn lines(&self) -> &[String] {
        self.reader.lines()
    }

    /// The path this reader was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.reader.path()
    }

    /// The word/character snapshot captured at construction.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Returns the lines whose content contains `keyword`, case-insensitively
    /// and in their original order. An empty keyword matches every line.
    pub fn filter_lines(&self, keyword: &str) -> Vec<String> {
        let keyword = keyword.to_lowercase();
        self.reader
            .lines()
            .iter()
            .filter(|line| line.to_lowercase().contains(&keyword))
            .cloned()
            .collect()
    }

    /// The base render string with `, <words> words` injected before the
    /// final closing parenthesis.
    pub fn render(&self) -> String {
        let base = self.reader.render();
        match base.rfind(')') {
            Some(idx) => format!("{}, {} words)", &base[..idx], self.stats.words),
            None => base,
        }
    }

    /// Appends the trimmed lines of every existing path to a copy of this
    /// reader's lines and writes the whole buffer to `output`, overwriting.
    ///
    /// Files are read directly; no intermediate readers or combined files are
    /// created. Returns `Created <output> with <N> lines` where `N` is the
    /// final buffer length.
    pub fn concatenate_multiple(
        &self,
        paths: &[PathBuf],
        output: impl AsRef<Path>,
    ) -> ReaderResult<String> {
        let output = output.as_ref();
        let mut all_lines = self.reader.lines().to_vec();
        for path in paths {
            if path.exists() {
                let content = fs::read_to_string(path)?;
                all_lines.extend(content.lines().map(|line| line.trim().to_string()));
            } else {
                debug!("skipping missing file {}", path.display());
            }
        }

        FileReader::write_file(output, &all_lines)?;
        info!("wrote {} lines to {}", all_lines.len(), output.display());
        Ok(format!(
            "Created {} with {} lines",
            output.display(),
            all_lines.len()
        ))
    }
}

impl Document for AnnotatedReader {
    fn path(&self) -> Option<&Path> {
        self.path()
    }

    fn lines(&self) -> &[String] {
        self.lines()
    }

    fn render(&self) -> String {
        self.render()
    }
}

impl fmt::Display for AnnotatedReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
