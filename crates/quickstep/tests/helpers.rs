//! Shared test engines for quickstep integration tests.
//!
//! Two fakes cover the two plugins: `ScriptedEngine` replays canned results
//! for exercising the loader's retry policy, `RewriteEngine` behaves like a
//! crude minifier for exercising the whole-bundle pass. Both record every
//! call so tests can assert on the requests the plugins built.

#![allow(dead_code)]

use parking_lot::Mutex;
use quickstep_engine::{
    SourceMap, TransformEngine, TransformError, TransformOptions, TransformOutput,
};
use quickstep_pipeline::{AssetInfo, Assets, RawSource, SourceMapSource};
use std::collections::VecDeque;
use std::sync::Arc;

/// One recorded engine invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub source: String,
    pub options: TransformOptions,
}

/// Engine replaying a queue of canned results, recording every call.
///
/// Panics when called with an empty queue, so a test that scripts one
/// result also asserts the engine is called exactly once.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    script: Mutex<VecDeque<Result<TransformOutput, TransformError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, code: &str) {
        self.script.lock().push_back(Ok(TransformOutput::new(code)));
    }

    pub fn push_err(&self, error: TransformError) {
        self.script.lock().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait::async_trait]
impl TransformEngine for ScriptedEngine {
    async fn transform(
        &self,
        source: &str,
        options: &TransformOptions,
    ) -> Result<TransformOutput, TransformError> {
        self.calls.lock().push(RecordedCall {
            source: source.to_string(),
            options: options.clone(),
        });
        self.script
            .lock()
            .pop_front()
            .expect("scripted engine ran out of results")
    }
}

/// Squeeze source the way `RewriteEngine` does: strip `//` comments, trim
/// every line, drop blank ones, join without newlines.
pub fn squeeze(source: &str) -> String {
    source
        .lines()
        .map(|line| {
            let line = match line.find("//") {
                Some(index) => &line[..index],
                None => line,
            };
            line.trim()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// Engine behaving like a crude minifier.
///
/// Emits a source map when the request asks for one, and fails any source
/// containing the configured marker.
#[derive(Debug, Default)]
pub struct RewriteEngine {
    fail_marker: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RewriteEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every transform whose source contains `marker`.
    pub fn fail_on(marker: &str) -> Self {
        Self {
            fail_marker: Some(marker.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Sourcefile identifiers of every call, in call order.
    pub fn sourcefiles(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| call.options.sourcefile.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl TransformEngine for RewriteEngine {
    async fn transform(
        &self,
        source: &str,
        options: &TransformOptions,
    ) -> Result<TransformOutput, TransformError> {
        self.calls.lock().push(RecordedCall {
            source: source.to_string(),
            options: options.clone(),
        });

        if let Some(marker) = &self.fail_marker {
            if source.contains(marker) {
                let file = options.sourcefile.clone().unwrap_or_default();
                return Err(TransformError::new(format!("parse error: found {marker}"))
                    .with_location(file, 1, 0));
            }
        }

        let mut output = TransformOutput::new(squeeze(source));
        if options.sourcemap == Some(true) {
            let file = options.sourcefile.clone().unwrap_or_default();
            output = output.with_map(SourceMap::new(file));
        }
        Ok(output)
    }
}

/// Seed a plain-code asset into the store.
pub fn seed(assets: &mut Assets, name: &str, code: &str) {
    assets.emit(name, RawSource::boxed(code), AssetInfo::default());
}

/// Seed an asset already carrying a source map from an earlier step.
pub fn seed_mapped(assets: &mut Assets, name: &str, code: &str, map: SourceMap) {
    let source = SourceMapSource::new(code, name, map, code, None);
    assets.emit(name, Arc::new(source), AssetInfo::default());
}
