//! Per-call transform request options.

use crate::error::UnknownModuleType;
use serde::{Deserialize, Serialize};

/// Parser mode for a transform request.
///
/// Tells the engine how to read the incoming source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    /// Plain JavaScript.
    #[default]
    Js,
    /// JavaScript with JSX syntax.
    Jsx,
    /// TypeScript.
    Ts,
    /// TypeScript with JSX syntax.
    Tsx,
}

impl ModuleType {
    /// Parse a module type from a string.
    ///
    /// # Supported Values
    ///
    /// - `"js"` - Plain JavaScript
    /// - `"jsx"` - JavaScript with JSX
    /// - `"ts"` - TypeScript
    /// - `"tsx"` - TypeScript with JSX
    ///
    /// Values are case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use quickstep_engine::ModuleType;
    ///
    /// assert_eq!(ModuleType::parse("js").unwrap(), ModuleType::Js);
    /// assert_eq!(ModuleType::parse("TSX").unwrap(), ModuleType::Tsx);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error for unrecognized values.
    pub fn parse(s: &str) -> Result<Self, UnknownModuleType> {
        match s.to_lowercase().as_str() {
            "js" => Ok(Self::Js),
            "jsx" => Ok(Self::Jsx),
            "ts" => Ok(Self::Ts),
            "tsx" => Ok(Self::Tsx),
            _ => Err(UnknownModuleType(s.to_string())),
        }
    }
}

impl std::str::FromStr for ModuleType {
    type Err = UnknownModuleType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ModuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Js => write!(f, "js"),
            Self::Jsx => write!(f, "jsx"),
            Self::Ts => write!(f, "ts"),
            Self::Tsx => write!(f, "tsx"),
        }
    }
}

/// Options for a single transform call.
///
/// Constructed fresh per call; unset fields fall back to the engine's own
/// defaults. The serialized form skips unset fields so it only carries what
/// the caller actually chose.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOptions {
    /// Target environment string, e.g. `"es2015"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Parser mode for the source text.
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
    /// Request a source map for the transformed output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sourcemap: Option<bool>,
    /// Diagnostic source-file identifier reported in engine errors and maps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sourcefile: Option<String>,
    /// Raw type-system configuration passed through to the engine untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsconfig_raw: Option<serde_json::Value>,
}

impl TransformOptions {
    /// Creates empty options; every field falls back to the engine default.
    pub fn new() -> Self {
        Self::default()
    }
}
