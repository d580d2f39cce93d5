//! The per-module transform loader.

use crate::error::Error;
use crate::options::LoaderOptions;
use async_trait::async_trait;
use quickstep_engine::{ModuleType, TransformOptions, TransformOutput};
use quickstep_pipeline::{Loader, LoaderContext};

/// Baseline target environment used when the user sets none.
pub const DEFAULT_TARGET: &str = "es2015";

/// Engine-backed [`Loader`] transforming one module per invocation.
///
/// # Examples
///
/// ```
/// use quickstep::loader::TransformLoader;
/// use quickstep::options::LoaderOptions;
/// use quickstep_engine::ModuleType;
///
/// let loader = TransformLoader::new(
///     LoaderOptions::new().target("es2020").loader(ModuleType::Tsx),
/// );
/// # let _ = loader;
/// ```
#[derive(Debug)]
pub struct TransformLoader {
    options: LoaderOptions,
}

impl TransformLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Parser mode this loader reads modules with.
    fn module_type(&self) -> ModuleType {
        self.options.loader.unwrap_or_default()
    }

    /// Assemble one transform request for the module at hand.
    fn request_options(&self, ctx: &LoaderContext<'_>, loader: ModuleType) -> TransformOptions {
        TransformOptions {
            target: Some(
                self.options
                    .target
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TARGET.to_owned()),
            ),
            loader: Some(loader),
            minify: self.options.minify,
            sourcemap: Some(ctx.source_map),
            sourcefile: Some(ctx.resource_path.display().to_string()),
            tsconfig_raw: self.options.tsconfig_raw.clone(),
            ..TransformOptions::default()
        }
    }
}

#[async_trait]
impl Loader for TransformLoader {
    async fn process(
        &self,
        source: &str,
        ctx: &LoaderContext<'_>,
    ) -> anyhow::Result<TransformOutput> {
        let engine = ctx.engine.ok_or(Error::MissingEngine)?;

        let module_type = self.module_type();
        let options = self.request_options(ctx, module_type);
        tracing::debug!(
            "[quickstep] transforming {} as {}",
            ctx.resource_path.display(),
            module_type
        );

        match engine.transform(source, &options).await {
            Ok(output) => Ok(output),
            Err(original) if module_type == ModuleType::Tsx && original.is_unexpected_token() => {
                // Generic type arguments are misread as JSX under the tsx
                // parser. Retry once as plain TypeScript; if that fails too,
                // surface the first failure, not the retry's.
                tracing::debug!(
                    "[quickstep] retrying {} as ts after: {}",
                    ctx.resource_path.display(),
                    original
                );
                let retry_options = self.request_options(ctx, ModuleType::Ts);
                match engine.transform(source, &retry_options).await {
                    Ok(output) => Ok(output),
                    Err(_) => Err(Error::Transform(original).into()),
                }
            }
            Err(error) => Err(Error::Transform(error).into()),
        }
    }
}
