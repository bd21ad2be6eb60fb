//! Batch conversion files.
//!
//! ```yaml
//! strict: true
//! conversions:
//!   - label: marathon
//!     value: 42.195
//!     from: { dimension: length, unit: kilometers }
//!     to: { dimension: length, unit: miles }
//! ```
//!
//! Each request is converted independently; a failing request is reported in
//! its outcome and does not stop the batch.

use std::path::Path;

use mt_core::{Real, UnitsError, ensure_finite};
use mt_units::AnyUnit;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchFile {
    /// Reject non-finite inputs and overflowing results.
    #[serde(default)]
    pub strict: bool,
    pub conversions: Vec<ConversionRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: Real,
    pub from: AnyUnit,
    pub to: AnyUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl ConversionRequest {
    pub fn run(&self, strict: bool) -> Result<Real, UnitsError> {
        if strict {
            ensure_finite(self.value)?;
        }
        let out = self.from.convert(self.value, self.to)?;
        if strict && !out.is_finite() {
            return Err(UnitsError::Overflow);
        }
        Ok(out)
    }
}

pub fn parse_yaml(content: &str) -> CliResult<BatchFile> {
    let batch: BatchFile = serde_yaml::from_str(content)?;
    if batch.conversions.is_empty() {
        return Err(CliError::EmptyBatch);
    }
    Ok(batch)
}

pub fn load_yaml(path: &Path) -> CliResult<BatchFile> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

pub fn run_batch(batch: &BatchFile) -> Vec<ConversionOutcome> {
    batch
        .conversions
        .iter()
        .enumerate()
        .map(|(index, req)| {
            let input = req.from.describe(req.value);
            match req.run(batch.strict) {
                Ok(value) => {
                    tracing::trace!(index, %input, value, "converted");
                    ConversionOutcome {
                        label: req.label.clone(),
                        input,
                        output: Some(req.to.describe(value)),
                        value: Some(value),
                        error: None,
                    }
                }
                Err(err) => {
                    tracing::warn!(index, %input, %err, "conversion failed");
                    ConversionOutcome {
                        label: req.label.clone(),
                        input,
                        output: None,
                        value: None,
                        error: Some(err.to_string()),
                    }
                }
            }
        })
        .collect()
}
