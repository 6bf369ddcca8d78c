//! Warning configuration loading.
//!
//! ```toml
//! [warnings]
//! enabled = true
//! silence = ["precision-loss-bool-string"]
//! ```
//!
//! Silencing only affects which warnings reach the sink. Coercion results
//! and errors are the same under every configuration.

#![allow(missing_docs)]

use std::path::Path;

use serde::Deserialize;
use smol_str::SmolStr;

use crate::coerce::Coercer;
use crate::diagnostics::{DiagnosticSink, FilteredSink, TracingSink, WarningCategory};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoerceConfig {
    pub warnings_enabled: bool,
    pub silenced: Vec<WarningCategory>,
}

impl Default for CoerceConfig {
    fn default() -> Self {
        Self {
            warnings_enabled: true,
            silenced: Vec::new(),
        }
    }
}

impl CoerceConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: SmolStr::new(path.display().to_string()),
            reason: SmolStr::new(err.to_string()),
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: CoerceToml =
            toml::from_str(text).map_err(|err| ConfigError::Parse(err.to_string().into()))?;
        raw.into_config()
    }

    /// Wraps `inner` so it only receives the enabled categories.
    pub fn sink<S: DiagnosticSink>(&self, inner: S) -> FilteredSink<S> {
        self.silenced
            .iter()
            .fold(FilteredSink::new(inner).enabled(self.warnings_enabled), |sink, category| {
                sink.silence(*category)
            })
    }

    /// Coercer logging the enabled categories through `tracing`.
    #[must_use]
    pub fn coercer(&self) -> Coercer<FilteredSink<TracingSink>> {
        Coercer::new(self.sink(TracingSink))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CoerceToml {
    warnings: Option<WarningsSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WarningsSection {
    enabled: Option<bool>,
    silence: Option<Vec<String>>,
}

impl CoerceToml {
    fn into_config(self) -> Result<CoerceConfig, ConfigError> {
        let Some(section) = self.warnings else {
            return Ok(CoerceConfig::default());
        };
        let mut silenced = Vec::new();
        for name in section.silence.unwrap_or_default() {
            let category = name.parse::<WarningCategory>()?;
            if !silenced.contains(&category) {
                silenced.push(category);
            }
        }
        Ok(CoerceConfig {
            warnings_enabled: section.enabled.unwrap_or(true),
            silenced,
        })
    }
}
