//! The name-addressed asset store.

use crate::PipelineError;
use crate::source::BoxSource;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Metadata the host tracks alongside an asset's content.
///
/// Plugins that replace an asset must carry the pre-existing fields over,
/// changing only what they are responsible for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetInfo {
    /// The asset went through a size-optimization step.
    pub minimized: bool,
    /// The asset only exists for development builds.
    pub development: bool,
    /// The asset's name contains a content hash and never changes in place.
    pub immutable: bool,
    /// Path of the file this asset was generated from.
    pub source_filename: Option<String>,
}

/// A named build output: content plus metadata.
#[derive(Debug, Clone)]
pub struct Asset {
    pub source: BoxSource,
    pub info: AssetInfo,
}

/// The compilation's asset store.
///
/// Host-owned; plugins read assets and atomically replace them but never
/// control their lifecycle. Iteration follows insertion order.
#[derive(Debug, Default)]
pub struct Assets {
    assets: FxIndexMap<String, Asset>,
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an asset, replacing any previous one under the same name.
    pub fn emit(&mut self, name: impl Into<String>, source: BoxSource, info: AssetInfo) {
        self.assets.insert(name.into(), Asset { source, info });
    }

    /// Look up an asset by name.
    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.assets.get(name)
    }

    /// Atomically replace the content and metadata of an existing asset.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::UnknownAsset`] when no asset with that name
    /// exists; updates never create assets.
    pub fn update(
        &mut self,
        name: &str,
        source: BoxSource,
        info: AssetInfo,
    ) -> Result<(), PipelineError> {
        match self.assets.get_mut(name) {
            Some(asset) => {
                asset.source = source;
                asset.info = info;
                Ok(())
            }
            None => Err(PipelineError::UnknownAsset {
                name: name.to_string(),
            }),
        }
    }

    /// Asset names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.assets.keys().map(String::as_str)
    }

    /// Name and asset pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Asset)> {
        self.assets.iter().map(|(name, asset)| (name.as_str(), asset))
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.assets.contains_key(name)
    }
}
