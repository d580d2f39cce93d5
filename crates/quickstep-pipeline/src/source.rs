//! Asset content representations.
//!
//! A [`Source`] is a piece of generated output with an optional source map.
//! Hosts store sources behind [`BoxSource`] so plugins can swap an asset's
//! content without caring how the host produced it.

use quickstep_engine::SourceMap;
use std::borrow::Cow;
use std::sync::Arc;

/// A piece of generated output with an optional source map.
pub trait Source: std::fmt::Debug + Send + Sync {
    /// The code text.
    fn source(&self) -> Cow<'_, str>;

    /// The source map, when one is carried.
    fn map(&self) -> Option<&SourceMap>;

    /// Code and map together.
    fn source_and_map(&self) -> (Cow<'_, str>, Option<&SourceMap>) {
        (self.source(), self.map())
    }
}

/// Shared handle to a source. Cheap to clone, immutable once stored.
pub type BoxSource = Arc<dyn Source>;

/// Plain code with no source map.
#[derive(Debug, Clone)]
pub struct RawSource(String);

impl RawSource {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Wrap the code into a shared handle.
    pub fn boxed(code: impl Into<String>) -> BoxSource {
        Arc::new(Self::new(code))
    }
}

impl Source for RawSource {
    fn source(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }

    fn map(&self) -> Option<&SourceMap> {
        None
    }
}

/// Transformed code with its new map, retaining the pre-transform original.
///
/// The original code and map are kept verbatim so the host can chain maps
/// later; this crate never merges them.
#[derive(Debug, Clone)]
pub struct SourceMapSource {
    code: String,
    name: String,
    map: SourceMap,
    original_source: String,
    original_map: Option<SourceMap>,
}

impl SourceMapSource {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        map: SourceMap,
        original_source: impl Into<String>,
        original_map: Option<SourceMap>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            map,
            original_source: original_source.into(),
            original_map,
        }
    }

    /// Diagnostic name of the generated file.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The code this source replaced.
    pub fn original_source(&self) -> &str {
        &self.original_source
    }

    /// The map of the code this source replaced, when it had one.
    pub fn original_map(&self) -> Option<&SourceMap> {
        self.original_map.as_ref()
    }
}

impl Source for SourceMapSource {
    fn source(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.code)
    }

    fn map(&self) -> Option<&SourceMap> {
        Some(&self.map)
    }
}
