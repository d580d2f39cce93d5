//! # quickstep-engine
//!
//! The transform-engine capability the quickstep plugin suite is built
//! around: a single request/response call that takes source text plus
//! options and yields transformed code with an optional source map.
//!
//! The suite never implements an engine. It consumes one through the
//! [`TransformEngine`] trait and shares a single long-lived handle
//! ([`SharedTransformEngine`]) across the whole build; creating and tearing
//! the engine down is the host's job.
//!
//! ## Implementing an engine
//!
//! ```
//! use quickstep_engine::{
//!     TransformEngine, TransformError, TransformOptions, TransformOutput,
//! };
//!
//! #[derive(Debug)]
//! struct PassthroughEngine;
//!
//! #[async_trait::async_trait]
//! impl TransformEngine for PassthroughEngine {
//!     async fn transform(
//!         &self,
//!         source: &str,
//!         _options: &TransformOptions,
//!     ) -> Result<TransformOutput, TransformError> {
//!         Ok(TransformOutput::new(source))
//!     }
//! }
//! ```

use std::sync::Arc;

pub mod error;
pub mod options;
pub mod output;

pub use error::{ErrorLocation, TransformError, UnknownModuleType};
pub use options::{ModuleType, TransformOptions};
pub use output::{SourceMap, TransformOutput};

/// An external source-transform engine.
///
/// One call per request: transform `source` according to `options`. The
/// engine is opaque; any failure comes back as a [`TransformError`] carrying
/// the engine's own diagnostic text.
#[async_trait::async_trait]
pub trait TransformEngine: std::fmt::Debug + Send + Sync {
    /// Transform one piece of source text.
    async fn transform(
        &self,
        source: &str,
        options: &TransformOptions,
    ) -> Result<TransformOutput, TransformError>;
}

/// The single engine handle shared across a build.
///
/// Read-only from every caller's perspective: the suite never mutates or
/// recreates it.
pub type SharedTransformEngine = Arc<dyn TransformEngine>;
