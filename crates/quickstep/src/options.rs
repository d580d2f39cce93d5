//! User-facing option structs for the loader and the minify plugin.

use quickstep_engine::ModuleType;
use serde::Serialize;

/// Options for [`TransformLoader`](crate::loader::TransformLoader).
///
/// Everything is optional; unset fields fall back to the loader's defaults
/// (`es2015` target, `js` parser mode, the engine's own minify default).
#[derive(Debug, Clone, Default)]
pub struct LoaderOptions {
    /// Target environment string passed to the engine.
    pub target: Option<String>,
    /// Parser mode for every module this loader handles.
    pub loader: Option<ModuleType>,
    /// Minify each module as it is transformed.
    pub minify: Option<bool>,
    /// Raw type-system configuration forwarded to the engine untouched.
    pub tsconfig_raw: Option<serde_json::Value>,
}

impl LoaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn loader(mut self, loader: ModuleType) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn minify(mut self, minify: bool) -> Self {
        self.minify = Some(minify);
        self
    }

    pub fn tsconfig_raw(mut self, tsconfig_raw: serde_json::Value) -> Self {
        self.tsconfig_raw = Some(tsconfig_raw);
        self
    }
}

/// Options for [`MinifyPlugin`](crate::minify::MinifyPlugin).
///
/// When none of the four minify flags is set, the plugin enables whole
/// program minification; setting any one of them puts the user in full
/// control. The resolved options also feed the plugin's chunk-hash
/// fingerprint, so changing them invalidates cached chunks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinifyOptions {
    /// Target environment string passed to the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Parser mode for every asset; defaults to plain JavaScript.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loader: Option<ModuleType>,
    /// Enable full minification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minify: Option<bool>,
    /// Remove whitespace only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minify_whitespace: Option<bool>,
    /// Shorten identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minify_identifiers: Option<bool>,
    /// Apply syntax-level rewrites.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minify_syntax: Option<bool>,
    /// Force source maps on or off, overriding the host's devtool setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sourcemap: Option<bool>,
}

impl MinifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn loader(mut self, loader: ModuleType) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn minify(mut self, minify: bool) -> Self {
        self.minify = Some(minify);
        self
    }

    pub fn minify_whitespace(mut self, minify_whitespace: bool) -> Self {
        self.minify_whitespace = Some(minify_whitespace);
        self
    }

    pub fn minify_identifiers(mut self, minify_identifiers: bool) -> Self {
        self.minify_identifiers = Some(minify_identifiers);
        self
    }

    pub fn minify_syntax(mut self, minify_syntax: bool) -> Self {
        self.minify_syntax = Some(minify_syntax);
        self
    }

    pub fn sourcemap(mut self, sourcemap: bool) -> Self {
        self.sourcemap = Some(sourcemap);
        self
    }

    /// True when the user touched any of the four minify flags.
    pub fn has_minify_setting(&self) -> bool {
        self.minify.is_some()
            || self.minify_whitespace.is_some()
            || self.minify_identifiers.is_some()
            || self.minify_syntax.is_some()
    }
}
