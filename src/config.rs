//! # CLI Settings
//!
//! Optional YAML settings for the `chordsmith` binary. Every key may be
//! omitted:
//!
//! ```yaml
//! output: json        # text (default) or json
//! separator: " "      # between tones in text mode, default ", "
//! prompt: false       # interactive prompts, default true
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::api::ChordReport;
use crate::error::ChordError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Raw settings for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawSettings {
    output: Option<OutputFormat>,
    separator: Option<String>,
    prompt: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output: OutputFormat,
    pub separator: String,
    pub prompt: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            separator: ", ".to_string(),
            prompt: true,
        }
    }
}

impl Settings {
    pub fn from_yaml(content: &str) -> Result<Self, ChordError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawSettings =
            serde_yaml::from_str(content).map_err(|e| ChordError::ConfigError(e.to_string()))?;
        let defaults = Self::default();

        Ok(Self {
            output: raw.output.unwrap_or(defaults.output),
            separator: raw.separator.unwrap_or(defaults.separator),
            prompt: raw.prompt.unwrap_or(defaults.prompt),
        })
    }

    pub fn load(path: &Path) -> Result<Self, ChordError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ChordError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Format one resolved chord for output.
    pub fn format_report(&self, report: &ChordReport) -> Result<String, ChordError> {
        match self.output {
            OutputFormat::Text => Ok(format!("[{}]", report.tone_names().join(&self.separator))),
            OutputFormat::Json => {
                serde_json::to_string(report).map_err(|e| ChordError::ConfigError(e.to_string()))
            }
        }
    }
}
