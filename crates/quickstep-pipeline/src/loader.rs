//! Per-module loader seam.
//!
//! Loaders transform one module's source on its way into the build. The host
//! hands each invocation a [`LoaderContext`] and collects the result through
//! a completion callback, so the calling convention stays the same whether
//! the host awaits loaders inline or schedules them.

use crate::compiler::BuildContext;
use async_trait::async_trait;
use quickstep_engine::{SharedTransformEngine, TransformOutput};
use std::path::Path;

/// Everything a loader may read about the module it is transforming.
#[derive(Debug, Clone, Copy)]
pub struct LoaderContext<'a> {
    /// Filesystem path of the module being loaded.
    pub resource_path: &'a Path,
    /// Whether the host wants a source map for this module.
    pub source_map: bool,
    /// The transform engine installed on the compiler, if any.
    pub engine: Option<&'a SharedTransformEngine>,
}

impl<'a> LoaderContext<'a> {
    pub fn new(resource_path: &'a Path) -> Self {
        Self {
            resource_path,
            source_map: false,
            engine: None,
        }
    }

    pub fn source_map(mut self, source_map: bool) -> Self {
        self.source_map = source_map;
        self
    }

    pub fn engine(mut self, engine: &'a SharedTransformEngine) -> Self {
        self.engine = Some(engine);
        self
    }
}

impl LoaderContext<'_> {
    /// Snapshot this per-module context into a build-wide one.
    pub fn build_context(&self) -> BuildContext {
        BuildContext {
            engine: self.engine.cloned(),
            devtool: None,
        }
    }
}

/// A source transformer invoked once per module.
#[async_trait]
pub trait Loader: Send + Sync {
    /// Transform one module's source.
    async fn process(
        &self,
        source: &str,
        ctx: &LoaderContext<'_>,
    ) -> anyhow::Result<TransformOutput>;
}

/// Run a loader to completion and hand the result to `done`.
///
/// `done` is `FnOnce`, so the completion callback fires exactly once per
/// invocation, on success and on failure alike.
pub async fn run_loader<L, F>(loader: &L, source: &str, ctx: &LoaderContext<'_>, done: F)
where
    L: Loader + ?Sized,
    F: FnOnce(anyhow::Result<TransformOutput>),
{
    done(loader.process(source, ctx).await);
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct Shout;

    #[async_trait]
    impl Loader for Shout {
        async fn process(
            &self,
            source: &str,
            _ctx: &LoaderContext<'_>,
        ) -> anyhow::Result<TransformOutput> {
            Ok(TransformOutput::new(source.to_uppercase()))
        }
    }

    struct Refuse;

    #[async_trait]
    impl Loader for Refuse {
        async fn process(
            &self,
            _source: &str,
            _ctx: &LoaderContext<'_>,
        ) -> anyhow::Result<TransformOutput> {
            Err(anyhow!("refused"))
        }
    }

    #[tokio::test]
    async fn test_run_loader_delivers_success_once() {
        let ctx = LoaderContext::new(Path::new("src/index.js"));
        let mut delivered = None;
        run_loader(&Shout, "let x;", &ctx, |result| delivered = Some(result)).await;

        let output = delivered.expect("callback fired").expect("loader succeeded");
        assert_eq!(output.code, "LET X;");
    }

    #[tokio::test]
    async fn test_run_loader_delivers_failure() {
        let ctx = LoaderContext::new(Path::new("src/index.js"));
        let mut delivered = None;
        run_loader(&Refuse, "let x;", &ctx, |result| delivered = Some(result)).await;

        let err = delivered.expect("callback fired").unwrap_err();
        assert_eq!(err.to_string(), "refused");
    }

    #[test]
    fn test_context_builders() {
        let path = Path::new("pages/app.tsx");
        let ctx = LoaderContext::new(path).source_map(true);
        assert_eq!(ctx.resource_path, path);
        assert!(ctx.source_map);
        assert!(ctx.engine.is_none());
        assert!(ctx.build_context().engine.is_none());
    }
}
