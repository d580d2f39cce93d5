//! The long-lived compiler object and its per-build context snapshot.

use crate::compilation::Compilation;
use crate::hooks::CompilationHook;
use quickstep_engine::SharedTransformEngine;

/// The slice of host compiler configuration the suite consumes.
#[derive(Debug, Clone, Default)]
pub struct CompilerOptions {
    /// Source-map mode string, e.g. `"source-map"` or `"eval"`. Plugins
    /// without an explicit source-map setting inherit their behavior from
    /// whether this contains the substring `"source-map"`.
    pub devtool: Option<String>,
}

/// Hook surface of the compiler.
#[derive(Debug, Default)]
pub struct CompilerHooks {
    /// Fired once per compilation, before any asset work.
    pub compilation: CompilationHook,
}

/// Long-lived host object that drives compilations.
///
/// The transform engine is injected here once by the host's setup step;
/// every compilation reads the same handle through its [`BuildContext`].
#[derive(Debug)]
pub struct Compiler {
    pub options: CompilerOptions,
    /// The shared transform-engine handle, when the setup step installed one.
    pub engine: Option<SharedTransformEngine>,
    pub hooks: CompilerHooks,
}

impl Compiler {
    pub fn new(options: CompilerOptions) -> Self {
        Self {
            options,
            engine: None,
            hooks: CompilerHooks::default(),
        }
    }

    /// Install the shared engine handle.
    pub fn set_engine(&mut self, engine: SharedTransformEngine) {
        self.engine = Some(engine);
    }

    /// Start a compilation.
    ///
    /// Snapshots the engine handle and devtool setting into a
    /// [`BuildContext`], fires the compilation taps so plugins can bind to
    /// the compilation's pipeline shape, and hands the context back for the
    /// host to thread through the asset-pipeline drivers.
    ///
    /// # Errors
    ///
    /// Propagates the first failing compilation tap, aborting the build
    /// before any asset work.
    pub fn run_compilation(&self, compilation: &mut Compilation) -> anyhow::Result<BuildContext> {
        let ctx = BuildContext {
            engine: self.engine.clone(),
            devtool: self.options.devtool.clone(),
        };
        tracing::debug!(
            "[quickstep-pipeline] compilation starting (engine: {}, devtool: {:?})",
            if ctx.engine.is_some() { "installed" } else { "absent" },
            ctx.devtool
        );
        self.hooks.compilation.call(compilation, &ctx)?;
        Ok(ctx)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(CompilerOptions::default())
    }
}

/// Per-compilation snapshot of what plugins read from the compiler.
///
/// Immutable once taken: a compilation observes one engine handle and one
/// devtool setting for its whole lifetime.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    /// The shared transform-engine handle, when installed.
    pub engine: Option<SharedTransformEngine>,
    /// The compiler's source-map mode string.
    pub devtool: Option<String>,
}
