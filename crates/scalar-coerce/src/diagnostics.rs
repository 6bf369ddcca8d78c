//! Non-fatal warning channel for lossy coercions.
//!
//! Coercions never stop on a warning: they record it on the sink they were
//! handed and carry on. Which sink is used is the caller's choice, so tests
//! can collect warnings while services forward them to `tracing`.

#![allow(missing_docs)]

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::Mutex;
use smol_str::SmolStr;
use tracing::warn;

use crate::error::ConfigError;

/// Kind of information a coercion discarded or assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCategory {
    /// Fractional part dropped while coercing to int.
    PrecisionLossInt,
    /// Non-canonical string coerced to `true`.
    PrecisionLossBoolString,
    /// Int other than 0 or 1 coerced to `true`.
    PrecisionLossBoolInt,
    /// Float other than 0 or 1 coerced to `true`.
    PrecisionLossBoolFloat,
}

impl WarningCategory {
    pub const ALL: [WarningCategory; 4] = [
        WarningCategory::PrecisionLossInt,
        WarningCategory::PrecisionLossBoolString,
        WarningCategory::PrecisionLossBoolInt,
        WarningCategory::PrecisionLossBoolFloat,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WarningCategory::PrecisionLossInt => "precision-loss-int",
            WarningCategory::PrecisionLossBoolString => "precision-loss-bool-string",
            WarningCategory::PrecisionLossBoolInt => "precision-loss-bool-int",
            WarningCategory::PrecisionLossBoolFloat => "precision-loss-bool-float",
        }
    }
}

impl fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WarningCategory {
    type Err = ConfigError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let name = text.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownCategory(SmolStr::new(name)))
    }
}

/// One recorded warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub category: WarningCategory,
    pub message: String,
}

/// Receiver of non-fatal coercion warnings.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, category: WarningCategory, message: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn record(&self, category: WarningCategory, message: &str) {
        (**self).record(category, message);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn record(&self, category: WarningCategory, message: &str) {
        (**self).record(category, message);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn record(&self, category: WarningCategory, message: &str) {
        (**self).record(category, message);
    }
}

/// Forwards warnings to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, category: WarningCategory, message: &str) {
        warn!(category = category.as_str(), "{message}");
    }
}

/// Drops every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _category: WarningCategory, _message: &str) {}
}

/// Keeps warnings in memory, in emission order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    warnings: Mutex<Vec<Warning>>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings.lock().clone()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.warnings
            .lock()
            .iter()
            .map(|warning| warning.message.clone())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.lock().is_empty()
    }

    /// Returns the recorded warnings and clears the sink.
    pub fn take(&self) -> Vec<Warning> {
        std::mem::take(&mut *self.warnings.lock())
    }
}

impl DiagnosticSink for CollectingSink {
    fn record(&self, category: WarningCategory, message: &str) {
        self.warnings.lock().push(Warning {
            category,
            message: message.to_string(),
        });
    }
}

/// Forwards only the categories that are not silenced.
#[derive(Debug, Clone)]
pub struct FilteredSink<S> {
    inner: S,
    enabled: bool,
    silenced: Vec<WarningCategory>,
}

impl<S: DiagnosticSink> FilteredSink<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            enabled: true,
            silenced: Vec::new(),
        }
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn silence(mut self, category: WarningCategory) -> Self {
        if !self.silenced.contains(&category) {
            self.silenced.push(category);
        }
        self
    }

    #[must_use]
    pub fn is_silenced(&self, category: WarningCategory) -> bool {
        !self.enabled || self.silenced.contains(&category)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: DiagnosticSink> DiagnosticSink for FilteredSink<S> {
    fn record(&self, category: WarningCategory, message: &str) {
        if !self.is_silenced(category) {
            self.inner.record(category, message);
        }
    }
}
