//! Transform results and source-map documents.

use serde::{Deserialize, Serialize};

/// Result of a successful transform call.
///
/// Consumed immediately: returned to the host's loader contract or used to
/// replace an asset in place.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutput {
    /// The transformed code.
    pub code: String,
    /// Source map for the transformed code, when one was requested.
    pub map: Option<SourceMap>,
}

impl TransformOutput {
    /// Output carrying code only.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            map: None,
        }
    }

    /// Attach a source map to the output.
    pub fn with_map(mut self, map: SourceMap) -> Self {
        self.map = Some(map);
        self
    }
}

/// A source map v3 document.
///
/// Only the fields the pipeline reads are modeled; the mappings string is
/// carried opaquely. Round-trips through JSON with the standard camelCase
/// field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceMap {
    /// Format version, `3` for every map the engines emit.
    pub version: u32,
    /// Name of the generated file this map describes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Original source file names.
    pub sources: Vec<String>,
    /// Original source contents, parallel to `sources`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources_content: Option<Vec<String>>,
    /// Symbol names referenced by the mappings.
    pub names: Vec<String>,
    /// VLQ-encoded mappings, opaque to this crate.
    pub mappings: String,
}

impl SourceMap {
    /// An empty v3 map for the given generated file.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            version: 3,
            file: Some(file.into()),
            ..Self::default()
        }
    }
}
