//! Lifecycle hook registries.
//!
//! Each registry covers one point in the host's build lifecycle: hosts fire
//! the hook, plugins register taps. Sync taps are plain closures; async taps
//! that mutate the asset store are trait objects so their futures can borrow
//! the store.

use crate::asset::Assets;
use crate::chunk::Chunk;
use crate::compilation::Compilation;
use crate::compiler::BuildContext;
use anyhow::Context as _;
use async_trait::async_trait;
use std::fmt;
use std::hash::Hasher;
use std::sync::Arc;

/// Numeric position of a staged asset-processing tap.
///
/// Taps run sequentially in ascending stage order; taps sharing a stage run
/// in registration order.
pub type ProcessAssetsStage = i32;

/// Add additional assets to the compilation.
pub const PROCESS_ASSETS_STAGE_ADDITIONAL: ProcessAssetsStage = -2000;
/// Optimize existing assets in a general way.
pub const PROCESS_ASSETS_STAGE_OPTIMIZE: ProcessAssetsStage = 100;
/// Optimize the size of existing assets, e.g. by minimizing.
pub const PROCESS_ASSETS_STAGE_OPTIMIZE_SIZE: ProcessAssetsStage = 400;
/// Summarize the finished asset set, e.g. into a manifest.
pub const PROCESS_ASSETS_STAGE_SUMMARIZE: ProcessAssetsStage = 1000;
/// Report on the finished asset set.
pub const PROCESS_ASSETS_STAGE_REPORT: ProcessAssetsStage = 5000;

/// An async tap on the staged asset-processing hook (modern shape).
#[async_trait]
pub trait ProcessAssetsTap: Send + Sync {
    /// Process the compilation's assets in place.
    async fn process_assets(&self, assets: &mut Assets, ctx: &BuildContext) -> anyhow::Result<()>;
}

struct StagedTap {
    name: String,
    stage: ProcessAssetsStage,
    tap: Arc<dyn ProcessAssetsTap>,
}

/// Registry for the modern, staged asset-processing shape.
#[derive(Default)]
pub struct ProcessAssetsHook {
    taps: Vec<StagedTap>,
}

impl ProcessAssetsHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tap at the given stage.
    pub fn tap(
        &mut self,
        name: impl Into<String>,
        stage: ProcessAssetsStage,
        tap: Arc<dyn ProcessAssetsTap>,
    ) {
        self.taps.push(StagedTap {
            name: name.into(),
            stage,
            tap,
        });
    }

    /// Run every tap over the store, lowest stage first.
    ///
    /// The first failing tap aborts the rest; its name is attached as
    /// context on the error.
    pub async fn run(&self, assets: &mut Assets, ctx: &BuildContext) -> anyhow::Result<()> {
        let mut ordered: Vec<&StagedTap> = self.taps.iter().collect();
        // Stable sort keeps registration order within a stage.
        ordered.sort_by_key(|tap| tap.stage);

        for entry in ordered {
            tracing::trace!(
                "[quickstep-pipeline] process_assets tap '{}' (stage {})",
                entry.name,
                entry.stage
            );
            entry
                .tap
                .process_assets(assets, ctx)
                .await
                .with_context(|| format!("process_assets tap '{}' failed", entry.name))?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}

impl fmt::Debug for ProcessAssetsHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessAssetsHook")
            .field("taps", &self.taps.len())
            .finish()
    }
}

/// An async tap on the legacy flat per-chunk optimization hook.
#[async_trait]
pub trait OptimizeChunkAssetsTap: Send + Sync {
    /// Optimize the assets named by the given chunks in place.
    async fn optimize_chunk_assets(
        &self,
        chunks: &[Chunk],
        assets: &mut Assets,
        ctx: &BuildContext,
    ) -> anyhow::Result<()>;
}

/// Registry for the legacy per-chunk shape. Taps run in registration order.
#[derive(Default)]
pub struct OptimizeChunkAssetsHook {
    taps: Vec<(String, Arc<dyn OptimizeChunkAssetsTap>)>,
}

impl OptimizeChunkAssetsHook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tap(&mut self, name: impl Into<String>, tap: Arc<dyn OptimizeChunkAssetsTap>) {
        self.taps.push((name.into(), tap));
    }

    /// Run every tap; the first failure aborts the rest.
    pub async fn run(
        &self,
        chunks: &[Chunk],
        assets: &mut Assets,
        ctx: &BuildContext,
    ) -> anyhow::Result<()> {
        for (name, tap) in &self.taps {
            tracing::trace!("[quickstep-pipeline] optimize_chunk_assets tap '{}'", name);
            tap.optimize_chunk_assets(chunks, assets, ctx)
                .await
                .with_context(|| format!("optimize_chunk_assets tap '{name}' failed"))?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}

impl fmt::Debug for OptimizeChunkAssetsHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptimizeChunkAssetsHook")
            .field("taps", &self.taps.len())
            .finish()
    }
}

type CompilationTapFn = Box<dyn Fn(&mut Compilation, &BuildContext) -> anyhow::Result<()> + Send + Sync>;

/// Sync, fallible taps fired once when a compilation starts.
///
/// This is where plugins inspect the compilation's pipeline shape and bind
/// their work to it. A failing tap aborts the build before any asset work.
#[derive(Default)]
pub struct CompilationHook {
    taps: Vec<(String, CompilationTapFn)>,
}

impl CompilationHook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tap<F>(&mut self, name: impl Into<String>, tap: F)
    where
        F: Fn(&mut Compilation, &BuildContext) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.taps.push((name.into(), Box::new(tap)));
    }

    /// Fire every tap in registration order; the first failure aborts.
    pub fn call(&self, compilation: &mut Compilation, ctx: &BuildContext) -> anyhow::Result<()> {
        for (name, tap) in &self.taps {
            tracing::trace!("[quickstep-pipeline] compilation tap '{}'", name);
            tap(compilation, ctx).with_context(|| format!("compilation tap '{name}' failed"))?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}

impl fmt::Debug for CompilationHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompilationHook")
            .field("taps", &self.taps.len())
            .finish()
    }
}

type ChunkHashTapFn = Box<dyn Fn(&Chunk, &mut dyn Hasher) + Send + Sync>;

/// Sync taps fired while the host folds data into its chunk-hash stream.
///
/// Anything a tap writes into the hasher participates in build
/// invalidation for that chunk.
#[derive(Default)]
pub struct ChunkHashHook {
    taps: Vec<(String, ChunkHashTapFn)>,
}

impl ChunkHashHook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tap<F>(&mut self, name: impl Into<String>, tap: F)
    where
        F: Fn(&Chunk, &mut dyn Hasher) + Send + Sync + 'static,
    {
        self.taps.push((name.into(), Box::new(tap)));
    }

    /// Fire every tap in registration order.
    pub fn call(&self, chunk: &Chunk, hasher: &mut dyn Hasher) {
        for (_, tap) in &self.taps {
            tap(chunk, hasher);
        }
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}

impl fmt::Debug for ChunkHashHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkHashHook")
            .field("taps", &self.taps.len())
            .finish()
    }
}
