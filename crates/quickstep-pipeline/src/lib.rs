//! # quickstep-pipeline
//!
//! Host-side build pipeline that quickstep plugins bind to.
//!
//! This crate models the host surface: a [`Compiler`] holding the installed
//! transform engine, per-build [`Compilation`]s with their asset store and
//! hook registries, and the [`Loader`] calling convention for per-module
//! transforms. It performs no transformation itself; engines implement the
//! `quickstep-engine` capability surface and plugins drive them.
//!
//! Hosts come in two generations. Modern hosts expose a staged, named
//! asset-processing hook plus a stats printer; legacy hosts expose a flat
//! per-chunk optimization hook. [`AssetPipelineHooks`] makes the shape an
//! explicit, exhaustive choice so plugins bind to exactly one.

pub mod asset;
pub mod chunk;
pub mod compilation;
pub mod compiler;
pub mod hooks;
pub mod loader;
pub mod source;
pub mod stats;

pub use asset::{Asset, AssetInfo, Assets};
pub use chunk::Chunk;
pub use compilation::{AssetPipelineHooks, Compilation, CompilationHooks};
pub use compiler::{BuildContext, Compiler, CompilerHooks, CompilerOptions};
pub use hooks::{
    ChunkHashHook, CompilationHook, OptimizeChunkAssetsHook, OptimizeChunkAssetsTap,
    PROCESS_ASSETS_STAGE_ADDITIONAL, PROCESS_ASSETS_STAGE_OPTIMIZE,
    PROCESS_ASSETS_STAGE_OPTIMIZE_SIZE, PROCESS_ASSETS_STAGE_REPORT,
    PROCESS_ASSETS_STAGE_SUMMARIZE, ProcessAssetsHook, ProcessAssetsStage, ProcessAssetsTap,
};
pub use loader::{Loader, LoaderContext, run_loader};
pub use source::{BoxSource, RawSource, Source, SourceMapSource};
pub use stats::{StatsPrinter, StatsStyle};

/// Errors raised by the pipeline's own data structures.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// An update targeted a name the asset store has never seen.
    ///
    /// Updates replace; they never create. Seeding new assets goes through
    /// [`Assets::emit`].
    #[error("unknown asset: {name}")]
    UnknownAsset { name: String },
}
