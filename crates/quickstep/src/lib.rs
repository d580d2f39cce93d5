//! # quickstep
//!
//! Engine-backed transform loader and minify plugin for bundler hosts.
//!
//! quickstep plugs a fast external source-transform engine into a host's
//! build pipeline at two points: [`TransformLoader`] transforms single
//! modules on their way into the build, and [`MinifyPlugin`] minifies every
//! `.js` asset of the finished bundle in place. Both read the one engine
//! handle installed on the compiler; neither transforms anything itself.
//!
//! The host surface (compiler, compilation, hooks, asset store) lives in
//! `quickstep-pipeline`; the engine contract lives in `quickstep-engine`.
//! Both are re-exported here.
//!
//! ## Quick Start
//!
//! Install an engine on the compiler, apply the plugin, run a build:
//!
//! ```no_run
//! use quickstep::{MinifyOptions, MinifyPlugin};
//! use quickstep_pipeline::{Compilation, Compiler};
//! use std::sync::Arc;
//! # use quickstep_engine::{TransformEngine, TransformError, TransformOptions, TransformOutput};
//! # #[derive(Debug)]
//! # struct MyEngine;
//! # #[async_trait::async_trait]
//! # impl TransformEngine for MyEngine {
//! #     async fn transform(
//! #         &self,
//! #         source: &str,
//! #         _options: &TransformOptions,
//! #     ) -> Result<TransformOutput, TransformError> {
//! #         Ok(TransformOutput::new(source))
//! #     }
//! # }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut compiler = Compiler::default();
//! compiler.set_engine(Arc::new(MyEngine));
//! MinifyPlugin::new(MinifyOptions::new().target("es2015")).apply(&mut compiler);
//!
//! let mut compilation = Compilation::modern();
//! // ... the host seeds compilation.assets ...
//! let ctx = compiler.run_compilation(&mut compilation)?;
//! compilation.process_assets(&ctx).await?;
//! # Ok(()) }
//! ```
//!
//! ## Per-module loading
//!
//! [`TransformLoader`] implements the host's [`Loader`] contract and is
//! driven through [`run_loader`] with a completion callback:
//!
//! ```no_run
//! use quickstep::{LoaderOptions, ModuleType, SharedTransformEngine, TransformLoader};
//! use quickstep_pipeline::{LoaderContext, run_loader};
//! use std::path::Path;
//! use std::sync::Arc;
//! # use quickstep_engine::{TransformEngine, TransformError, TransformOptions, TransformOutput};
//! # #[derive(Debug)]
//! # struct MyEngine;
//! # #[async_trait::async_trait]
//! # impl TransformEngine for MyEngine {
//! #     async fn transform(
//! #         &self,
//! #         source: &str,
//! #         _options: &TransformOptions,
//! #     ) -> Result<TransformOutput, TransformError> {
//! #         Ok(TransformOutput::new(source))
//! #     }
//! # }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let loader = TransformLoader::new(LoaderOptions::new().loader(ModuleType::Tsx));
//! let engine: SharedTransformEngine = Arc::new(MyEngine);
//!
//! let ctx = LoaderContext::new(Path::new("src/app.tsx"))
//!     .source_map(true)
//!     .engine(&engine);
//! run_loader(&loader, "const n: number = 1;", &ctx, |result| {
//!     // hand code and map back to the host
//! #     let _ = result;
//! })
//! .await;
//! # }
//! ```

pub mod error;
pub mod loader;
pub mod minify;
pub mod options;

pub use error::{Error, Result};
pub use loader::{DEFAULT_TARGET, TransformLoader};
pub use minify::{MinifyPlugin, PLUGIN_NAME};
pub use options::{LoaderOptions, MinifyOptions};

// Re-export the engine contract and the host surface so most users need
// only this crate.
pub use quickstep_engine::{
    ModuleType, SharedTransformEngine, SourceMap, TransformEngine, TransformError,
    TransformOptions, TransformOutput,
};
pub use quickstep_pipeline::{
    Compilation, Compiler, CompilerOptions, Loader, LoaderContext, run_loader,
};
