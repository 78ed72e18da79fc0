//! Analysis configuration
//!
//! Tolerances and search bounds used by the decomposer and the periodicity
//! analyzer. Stored as JSON; any missing field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{DspError, DspResult};

/// Largest denominator tried when testing ω/2π for rationality
pub const DEFAULT_MAX_DENOMINATOR: u64 = 10_000;
/// Absolute tolerance for double-precision consistency checks
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Numeric policy for the analysis components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Max |x_e + x_o - x| accepted by the decomposer
    pub reconstruction_tolerance: f64,
    /// Largest fundamental period the periodicity analyzer can report
    pub max_denominator: u64,
    /// Max |ω/2π - k/N| for a convergent to count as exact
    pub periodicity_tolerance: f64,
    /// Max |e^(jωn) - e^(jω'n)| for aliases to count as identical
    pub alias_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reconstruction_tolerance: DEFAULT_TOLERANCE,
            max_denominator: DEFAULT_MAX_DENOMINATOR,
            periodicity_tolerance: DEFAULT_TOLERANCE,
            alias_tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl AnalysisConfig {
    /// Reject tolerances that are not strictly positive and finite, and a zero
    /// denominator bound.
    pub fn validate(&self) -> DspResult<()> {
        let tolerances = [
            ("reconstruction_tolerance", self.reconstruction_tolerance),
            ("periodicity_tolerance", self.periodicity_tolerance),
            ("alias_tolerance", self.alias_tolerance),
        ];
        for (name, value) in tolerances {
            if !(value.is_finite() && value > 0.0) {
                return Err(DspError::Config(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        if self.max_denominator == 0 {
            return Err(DspError::Config(
                "max_denominator must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file
    pub fn load(path: &Path) -> DspResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            DspError::Config(format!("Failed to read config '{}': {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|e| {
            DspError::Config(format!("Failed to parse config '{}': {e}", path.display()))
        })?;
        config.validate()?;
        log::debug!("Loaded analysis config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> DspResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DspError::Config(format!("Serialization error: {e}")))?;
        std::fs::write(path, json).map_err(|e| {
            DspError::Config(format!("Failed to write config '{}': {e}", path.display()))
        })
    }
}
