//! Chunk metadata.

/// A named group of output files.
///
/// Hosts on the legacy pipeline shape hand chunks to the optimization hook;
/// the candidate asset set is derived by flattening each chunk's file list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chunk {
    /// Chunk name, e.g. `"main"`.
    pub name: String,
    /// Names of the assets this chunk emitted.
    pub files: Vec<String>,
}

impl Chunk {
    pub fn new<N, I, F>(name: N, files: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self {
            name: name.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}
