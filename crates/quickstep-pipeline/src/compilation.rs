//! One build pass and its hook surface.

use crate::asset::Assets;
use crate::chunk::Chunk;
use crate::compiler::BuildContext;
use crate::hooks::{ChunkHashHook, OptimizeChunkAssetsHook, ProcessAssetsHook};
use crate::stats::StatsPrinter;
use std::hash::Hasher;

/// Which asset-pipeline generation the host exposes.
///
/// The two shapes are mutually exclusive; a compilation carries exactly one,
/// declared at construction. Plugins match on this once, inside their
/// compilation tap, and bind to whichever hook is present.
#[derive(Debug)]
pub enum AssetPipelineHooks {
    /// The staged, named asset-processing hook plus a stats printer.
    Modern {
        process_assets: ProcessAssetsHook,
        stats: StatsPrinter,
    },
    /// The flat per-chunk optimization hook. No stats printer on this
    /// generation.
    Legacy {
        optimize_chunk_assets: OptimizeChunkAssetsHook,
    },
}

/// Hook surface of one compilation.
#[derive(Debug)]
pub struct CompilationHooks {
    /// Fired while the host folds data into its chunk-hash stream.
    pub chunk_hash: ChunkHashHook,
    /// The asset-pipeline shape this host exposes.
    pub pipeline: AssetPipelineHooks,
}

/// One build pass: the asset store, the chunk list, and the hooks.
///
/// A plugin's lifecycle against a compilation is two states only: awaiting
/// the compilation-start tap, then bound to the pipeline shape. Binding is
/// irreversible and nothing here cancels.
#[derive(Debug)]
pub struct Compilation {
    pub assets: Assets,
    pub chunks: Vec<Chunk>,
    pub hooks: CompilationHooks,
}

impl Compilation {
    /// A compilation whose host exposes the staged asset-processing shape.
    pub fn modern() -> Self {
        Self {
            assets: Assets::new(),
            chunks: Vec::new(),
            hooks: CompilationHooks {
                chunk_hash: ChunkHashHook::new(),
                pipeline: AssetPipelineHooks::Modern {
                    process_assets: ProcessAssetsHook::new(),
                    stats: StatsPrinter::new(),
                },
            },
        }
    }

    /// A compilation whose host exposes the flat per-chunk shape.
    pub fn legacy(chunks: Vec<Chunk>) -> Self {
        Self {
            assets: Assets::new(),
            chunks,
            hooks: CompilationHooks {
                chunk_hash: ChunkHashHook::new(),
                pipeline: AssetPipelineHooks::Legacy {
                    optimize_chunk_assets: OptimizeChunkAssetsHook::new(),
                },
            },
        }
    }

    /// Drive the asset pipeline, whichever shape is present.
    ///
    /// Modern hosts run the staged hook over the full store; legacy hosts
    /// run the per-chunk hook with the chunk list.
    pub async fn process_assets(&mut self, ctx: &BuildContext) -> anyhow::Result<()> {
        let Self { assets, chunks, hooks } = self;
        match &hooks.pipeline {
            AssetPipelineHooks::Modern { process_assets, .. } => {
                process_assets.run(assets, ctx).await
            }
            AssetPipelineHooks::Legacy { optimize_chunk_assets } => {
                optimize_chunk_assets.run(chunks, assets, ctx).await
            }
        }
    }

    /// Fold registered chunk-hash contributions into the host's hasher.
    pub fn chunk_hash(&self, chunk: &Chunk, hasher: &mut dyn Hasher) {
        self.hooks.chunk_hash.call(chunk, hasher);
    }

    /// Render the stats badges for one asset's metadata.
    ///
    /// Only the modern shape carries a stats printer; on the legacy shape
    /// this is always empty.
    pub fn render_asset_flags(&self, name: &str) -> Vec<String> {
        let AssetPipelineHooks::Modern { stats, .. } = &self.hooks.pipeline else {
            return Vec::new();
        };
        let Some(asset) = self.assets.get(name) else {
            return Vec::new();
        };

        let mut flags = Vec::new();
        flags.extend(stats.render("asset.info.minimized", asset.info.minimized));
        flags.extend(stats.render("asset.info.development", asset.info.development));
        flags.extend(stats.render("asset.info.immutable", asset.info.immutable));
        flags
    }
}
