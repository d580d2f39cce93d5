//! The whole-bundle minify plugin.

use crate::error::Error;
use crate::options::MinifyOptions;
use async_trait::async_trait;
use futures::future::try_join_all;
use quickstep_engine::{SourceMap, TransformOptions, TransformOutput};
use quickstep_pipeline::{
    AssetInfo, AssetPipelineHooks, Assets, BoxSource, BuildContext, Chunk, Compilation, Compiler,
    OptimizeChunkAssetsTap, PROCESS_ASSETS_STAGE_OPTIMIZE_SIZE, ProcessAssetsTap, RawSource,
    SourceMapSource,
};
use serde::Serialize;
use std::sync::Arc;

/// Name this plugin registers its taps under.
pub const PLUGIN_NAME: &str = "quickstep-minify";

/// True when the asset name ends in `.js`, any case.
fn is_js_asset(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 3 && bytes[bytes.len() - 3..].eq_ignore_ascii_case(b".js")
}

/// Identity serialized into the chunk-hash stream. Changing the crate
/// version or any option changes every chunk hash.
#[derive(Serialize)]
struct Fingerprint<'a> {
    name: &'a str,
    version: &'a str,
    options: &'a MinifyOptions,
}

/// One asset snapshotted for transformation.
struct TransformJob {
    name: String,
    code: String,
    map: Option<SourceMap>,
    info: AssetInfo,
}

/// Minifies every `.js` asset in place through the installed engine.
///
/// Apply it to a [`Compiler`] once; each compilation it binds to whichever
/// pipeline shape the host exposes. Requires the engine to already be
/// installed when the compilation starts.
///
/// # Examples
///
/// ```
/// use quickstep::minify::MinifyPlugin;
/// use quickstep::options::MinifyOptions;
/// use quickstep_pipeline::Compiler;
///
/// let mut compiler = Compiler::default();
/// MinifyPlugin::new(MinifyOptions::new().target("es2015")).apply(&mut compiler);
/// ```
#[derive(Debug, Clone)]
pub struct MinifyPlugin {
    options: MinifyOptions,
}

impl MinifyPlugin {
    /// Create the plugin, resolving the minify default.
    ///
    /// When the user set none of the four minify flags, full minification
    /// is switched on; otherwise the flags are taken as given.
    pub fn new(mut options: MinifyOptions) -> Self {
        if !options.has_minify_setting() {
            options.minify = Some(true);
        }
        Self { options }
    }

    /// The resolved options this plugin runs with.
    pub fn options(&self) -> &MinifyOptions {
        &self.options
    }

    /// Register this plugin on a compiler.
    pub fn apply(&self, compiler: &mut Compiler) {
        let plugin = self.clone();
        compiler
            .hooks
            .compilation
            .tap(PLUGIN_NAME, move |compilation, ctx| {
                plugin.bind(compilation, ctx)
            });
    }

    /// Compilation-start tap.
    ///
    /// Fails when no engine is installed, before any asset work. Otherwise
    /// registers the chunk-hash fingerprint and binds the minify step to
    /// the pipeline shape the host exposes.
    pub fn bind(&self, compilation: &mut Compilation, ctx: &BuildContext) -> anyhow::Result<()> {
        if ctx.engine.is_none() {
            return Err(Error::MissingEngine.into());
        }

        let meta = self.fingerprint()?;
        compilation
            .hooks
            .chunk_hash
            .tap(PLUGIN_NAME, move |_chunk, hasher| {
                hasher.write(meta.as_bytes());
            });

        match &mut compilation.hooks.pipeline {
            AssetPipelineHooks::Modern {
                process_assets,
                stats,
            } => {
                tracing::debug!("[quickstep] binding minify to the staged asset pipeline");
                process_assets.tap(
                    PLUGIN_NAME,
                    PROCESS_ASSETS_STAGE_OPTIMIZE_SIZE,
                    Arc::new(self.clone()),
                );
                stats.tap_flag("asset.info.minimized", PLUGIN_NAME, |minimized, style| {
                    minimized.then(|| style.green(&style.format_flag("minimized")))
                });
            }
            AssetPipelineHooks::Legacy {
                optimize_chunk_assets,
            } => {
                tracing::debug!("[quickstep] binding minify to the per-chunk asset pipeline");
                optimize_chunk_assets.tap(PLUGIN_NAME, Arc::new(self.clone()));
            }
        }
        Ok(())
    }

    /// Stable serialization of this plugin's identity and options.
    fn fingerprint(&self) -> serde_json::Result<String> {
        serde_json::to_string(&Fingerprint {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            options: &self.options,
        })
    }

    /// Whether to produce source maps, from the explicit option or the
    /// host's devtool setting.
    fn resolve_sourcemap(&self, ctx: &BuildContext) -> bool {
        match self.options.sourcemap {
            Some(explicit) => explicit,
            None => ctx
                .devtool
                .as_deref()
                .is_some_and(|devtool| devtool.contains("source-map")),
        }
    }

    /// Assemble the transform request for one asset.
    fn transform_options(&self, asset_name: &str, sourcemap: bool) -> TransformOptions {
        TransformOptions {
            target: self.options.target.clone(),
            loader: self.options.loader,
            minify: self.options.minify,
            minify_whitespace: self.options.minify_whitespace,
            minify_identifiers: self.options.minify_identifiers,
            minify_syntax: self.options.minify_syntax,
            sourcemap: Some(sourcemap),
            sourcefile: Some(asset_name.to_owned()),
            tsconfig_raw: None,
        }
    }

    /// Minify every `.js` candidate in place.
    ///
    /// `candidates` narrows the asset names considered; `None` means the
    /// whole store. Assets are snapshotted first, transformed concurrently,
    /// then written back. The first engine failure aborts the batch before
    /// any asset is replaced.
    async fn transform_assets(
        &self,
        assets: &mut Assets,
        candidates: Option<Vec<String>>,
        ctx: &BuildContext,
    ) -> anyhow::Result<()> {
        let engine = ctx.engine.as_ref().ok_or(Error::MissingEngine)?;
        let sourcemap = self.resolve_sourcemap(ctx);

        let names: Vec<String> = match candidates {
            Some(names) => names,
            None => assets.names().map(str::to_owned).collect(),
        };

        let mut jobs = Vec::new();
        for name in names {
            if !is_js_asset(&name) {
                continue;
            }
            let Some(asset) = assets.get(&name) else {
                continue;
            };
            let (code, map) = asset.source.source_and_map();
            jobs.push(TransformJob {
                name,
                code: code.into_owned(),
                map: map.cloned(),
                info: asset.info.clone(),
            });
        }

        if jobs.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            "[quickstep] minifying {} assets (sourcemap: {})",
            jobs.len(),
            sourcemap
        );

        let transforms = jobs.into_iter().map(|job| {
            let engine = Arc::clone(engine);
            let options = self.transform_options(&job.name, sourcemap);
            async move {
                let output = engine
                    .transform(&job.code, &options)
                    .await
                    .map_err(Error::Transform)?;
                Ok::<_, anyhow::Error>((job, output))
            }
        });

        for (job, output) in try_join_all(transforms).await? {
            let TransformJob {
                name,
                code,
                map,
                mut info,
            } = job;
            let TransformOutput {
                code: new_code,
                map: new_map,
            } = output;

            let source: BoxSource = match (sourcemap, new_map) {
                (true, Some(new_map)) => Arc::new(SourceMapSource::new(
                    new_code,
                    name.clone(),
                    new_map,
                    code,
                    map,
                )),
                _ => Arc::new(RawSource::new(new_code)),
            };
            info.minimized = true;
            assets.update(&name, source, info)?;
        }
        Ok(())
    }
}

#[async_trait]
impl ProcessAssetsTap for MinifyPlugin {
    async fn process_assets(&self, assets: &mut Assets, ctx: &BuildContext) -> anyhow::Result<()> {
        self.transform_assets(assets, None, ctx).await
    }
}

#[async_trait]
impl OptimizeChunkAssetsTap for MinifyPlugin {
    async fn optimize_chunk_assets(
        &self,
        chunks: &[Chunk],
        assets: &mut Assets,
        ctx: &BuildContext,
    ) -> anyhow::Result<()> {
        let candidates = chunks
            .iter()
            .flat_map(|chunk| chunk.files.iter().cloned())
            .collect();
        self.transform_assets(assets, Some(candidates), ctx).await
    }
}
