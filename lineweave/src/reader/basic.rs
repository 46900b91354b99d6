use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::document::Document;
use crate::errors::{ReaderError, ReaderResult};

/// An in-memory view of a text file's trimmed lines plus the path it was
/// loaded from.
///
/// Construction is forgiving: a path that does not exist simply produces an
/// empty reader. The cached `lines` always reflect the file as of the last
/// (re)load; reassigning the path with [`set_path`](Self::set_path) reloads
/// immediately.
#[derive(Debug, Clone, Default)]
pub struct FileReader {
    path: Option<PathBuf>,
    lines: Vec<String>,
}

impl FileReader {
    /// Creates a reader over `path`, loading and trimming every line if the
    /// file exists. A missing file is a silent no-op load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let mut reader = Self {
            path: Some(path.into()),
            lines: Vec::new(),
        };
        reader.reload();
        reader
    }

    /// The path this reader was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The trimmed lines captured at the last load.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Reassigns the path and reloads the cached lines from it, discarding
    /// any prior in-memory content.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
        self.reload();
    }

    /// Re-reads the cached lines from the current path. An unset path or a
    /// missing file leaves the reader empty.
    pub fn reload(&mut self) {
        self.lines = match self.path.as_deref() {
            Some(path) => load_trimmed(path),
            None => Vec::new(),
        };
    }

    /// Returns a lazy iterator of trimmed lines read directly from the file.
    ///
    /// The file is re-opened on every call, so the iterator is restartable
    /// and never consults the cached lines. An unset path or a missing file
    /// yields an empty iterator.
    pub fn produce_lines(&self) -> LineIter {
        let handle = self.path.as_deref().and_then(|path| File::open(path).ok());
        LineIter {
            inner: handle.map(|file| BufReader::new(file).lines()),
        }
    }

    /// Eagerly reads the trimmed lines directly from the file.
    ///
    /// Unlike [`produce_lines`](Self::produce_lines), this errors when no
    /// path is set, and surfaces the underlying I/O error when the path
    /// cannot be opened.
    pub fn collect_lines(&self) -> ReaderResult<Vec<String>> {
        let path = self.path.as_deref().ok_or(ReaderError::InvalidPath)?;
        let content = fs::read_to_string(path)?;
        Ok(content.lines().map(|line| line.trim().to_string()).collect())
    }

    /// Writes `content` joined with `\n` to `path`, overwriting any existing
    /// file. No trailing newline is appended beyond what the join produces.
    pub fn write_file(path: impl AsRef<Path>, content: &[impl AsRef<str>]) -> ReaderResult<()> {
        let joined = content
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(path.as_ref(), joined)?;
        Ok(())
    }

    /// Writes `content` to `path` and returns a reader over it, so the
    /// content round-trips through the filesystem rather than memory.
    pub fn from_content(path: impl AsRef<Path>, content: &[impl AsRef<str>]) -> ReaderResult<Self> {
        Self::write_file(path.as_ref(), content)?;
        Ok(Self::new(path.as_ref()))
    }

    /// A one-line display string: `FileReader('<path>', <N> lines)`.
    pub fn render(&self) -> String {
        let path = match self.path.as_deref() {
            Some(path) => path.display().to_string(),
            None => "None".to_string(),
        };
        format!("FileReader('{}', {} lines)", path, self.lines.len())
    }

    /// Concatenates this reader's lines with another document's (this
    /// reader's first) and writes the result to
    /// `combined_<base1>_<base2>.txt` in the current working directory,
    /// returning a reader over the new file.
    ///
    /// An unset path on either side falls back to the placeholder base names
    /// `file1`/`file2`. Repeated combinations of identically named inputs
    /// reuse the same output name; the file is overwritten each time.
    pub fn combine<D: Document + ?Sized>(&self, other: &D) -> ReaderResult<FileReader> {
        let mut combined = self.lines.clone();
        combined.extend_from_slice(other.lines());

        let output = PathBuf::from(format!(
            "combined_{}_{}.txt",
            base_name(self.path(), "file1"),
            base_name(other.path(), "file2"),
        ));
        debug!(
            "combining {} lines into {}",
            combined.len(),
            output.display()
        );
        Self::from_content(output, &combined)
    }

    /// Folds each existing path into a running combination, writing an
    /// intermediate combined file per step. Missing paths are skipped but
    /// still counted in the returned status string
    /// `Concatenated <K> files`, where `K` is the number of supplied paths
    /// plus one for this reader.
    pub fn concatenate_into(&self, paths: &[PathBuf]) -> ReaderResult<String> {
        let mut result = self.clone();
        for path in paths {
            if path.exists() {
                let other = FileReader::new(path);
                result = result.combine(&other)?;
            } else {
                debug!("skipping missing file {}", path.display());
            }
        }
        info!(
            "concatenated {} files into {}",
            paths.len() + 1,
            result.render()
        );
        Ok(format!("Concatenated {} files", paths.len() + 1))
    }
}

impl Document for FileReader {
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

impl fmt::Display for FileReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Lazy line iterator returned by [`FileReader::produce_lines`]. Stops at end
/// of file or at the first read error.
pub struct LineIter {
    inner: Option<io::Lines<BufReader<File>>>,
}

impl Iterator for LineIter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.inner.as_mut()?.next() {
            Some(Ok(line)) => Some(line.trim().to_string()),
            Some(Err(err)) => {
                debug!("stopping line iteration after read error: {err}");
                self.inner = None;
                None
            }
            None => None,
        }
    }
}

fn load_trimmed(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => content.lines().map(|line| line.trim().to_string()).collect(),
        Err(err) => {
            debug!("no content loaded from {}: {err}", path.display());
            Vec::new()
        }
    }
}

fn base_name(path: Option<&Path>, fallback: &str) -> String {
    path.and_then(Path::file_name)
        .and_then(OsStr::to_str)
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_new_on_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let reader = FileReader::new(dir.path().join("absent.txt"));
        assert!(reader.lines().is_empty());
        assert!(reader.path().is_some());
    }

    #[test]
    fn test_default_has_no_path() {
        let reader = FileReader::default();
        assert!(reader.path().is_none());
        assert!(reader.lines().is_empty());
    }

    #[test]
    fn test_write_file_joins_without_trailing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("joined.txt");
        FileReader::write_file(&path, &["a", "b", "c"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc");
    }

    #[test]
    fn test_lines_are_trimmed_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("padded.txt");
        fs::write(&path, "  left\nright  \n\tboth\t\n").unwrap();
        let reader = FileReader::new(&path);
        assert_eq!(reader.lines(), &["left", "right", "both"]);
    }

    #[test]
    fn test_render_with_unset_path() {
        let reader = FileReader::default();
        assert_eq!(reader.render(), "FileReader('None', 0 lines)");
    }

    #[test]
    fn test_base_name_fallbacks() {
        assert_eq!(base_name(None, "file1"), "file1");
        assert_eq!(base_name(Some(Path::new("dir/notes.txt")), "file1"), "notes.txt");
    }
}
