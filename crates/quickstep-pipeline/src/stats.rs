//! Stats-output customization.
//!
//! Hosts on the modern pipeline shape render a line per asset in their
//! build summary and let plugins contribute badges for asset-info flags.

use owo_colors::OwoColorize;
use std::fmt;

/// Styling helpers handed to flag formatters.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsStyle;

impl StatsStyle {
    /// Wrap text in green, the color hosts use for positive badges.
    pub fn green(&self, text: &str) -> String {
        text.green().to_string()
    }

    /// Bracket a flag name the way hosts print asset flags.
    pub fn format_flag(&self, flag: &str) -> String {
        format!("[{flag}]")
    }
}

type FlagFormatterFn = Box<dyn Fn(bool, &StatsStyle) -> Option<String> + Send + Sync>;

struct FlagFormatter {
    key: String,
    name: String,
    format: FlagFormatterFn,
}

/// Keyed badge formatters for the host's stats output.
///
/// Plugins register a formatter for an asset-info key such as
/// `"asset.info.minimized"`; the host asks for renderings while printing.
/// A formatter returning `None` contributes nothing.
#[derive(Default)]
pub struct StatsPrinter {
    formatters: Vec<FlagFormatter>,
}

impl StatsPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a badge formatter for an asset-info key.
    pub fn tap_flag<F>(&mut self, key: impl Into<String>, name: impl Into<String>, format: F)
    where
        F: Fn(bool, &StatsStyle) -> Option<String> + Send + Sync + 'static,
    {
        self.formatters.push(FlagFormatter {
            key: key.into(),
            name: name.into(),
            format: Box::new(format),
        });
    }

    /// Render every badge registered for `key` against a flag value.
    pub fn render(&self, key: &str, value: bool) -> Vec<String> {
        let style = StatsStyle;
        self.formatters
            .iter()
            .filter(|formatter| formatter.key == key)
            .filter_map(|formatter| (formatter.format)(value, &style))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}

impl fmt::Debug for StatsPrinter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<(&str, &str)> = self
            .formatters
            .iter()
            .map(|formatter| (formatter.key.as_str(), formatter.name.as_str()))
            .collect();
        f.debug_struct("StatsPrinter").field("formatters", &keys).finish()
    }
}
