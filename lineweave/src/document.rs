use std::path::Path;

/// Capability surface shared by every reader type.
///
/// `FileReader` and `AnnotatedReader` both expose a source path, the trimmed
/// lines loaded from it, and a one-line display string. Operations that fold
/// readers together accept any `Document`, so heterogeneous collections of
/// readers can be combined through dynamic dispatch:
///
/// ```rust,ignore
/// let docs: Vec<Box<dyn Document>> = vec![
///     Box::new(FileReader::new("a.txt")),
///     Box::new(AnnotatedReader::new("b.txt")),
/// ];
/// for doc in &docs {
///     println!("{}", doc.render());
/// }
/// ```
pub trait Document {
    /// The path this document was loaded from, if any.
    fn path(&self) -> Option<&Path>;

    /// The trimmed lines captured at the last load.
    fn lines(&self) -> &[String];

    /// A one-line display string for the document.
    fn render(&self) -> String;
}
