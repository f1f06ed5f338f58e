//! Configuration constants and settings for the analyzer.

use crate::error::{AnalyzeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Spindle speed substituted when no usable `S` word was found (RPM).
pub const DEFAULT_SPINDLE_SPEED: f64 = 1000.0;

/// Feed rate substituted when no usable `F` word was found (mm/rev).
pub const DEFAULT_FEED_RATE: f64 = 0.1;

/// Decimal places kept for feed rate output.
pub const FEED_DECIMALS: i32 = 4;

/// Decimal places kept for spindle speed output.
pub const SPEED_DECIMALS: i32 = 0;

/// Decimal places kept for depth of cut output.
pub const DEPTH_DECIMALS: i32 = 4;

/// First characters that mark a whole line as ignorable:
/// comment, program delimiter, program number, block number, parameter table.
pub const IGNORED_LINE_PREFIXES: [char; 5] = ['(', '%', 'O', 'N', '#'];

/// Characters that start trailing comment text inside a block.
pub const INLINE_COMMENT_MARKERS: [char; 2] = ['(', ';'];

/// G codes for rapid positioning and linear/circular interpolation.
pub const MOTION_CODES: [u32; 4] = [0, 1, 2, 3];

/// G code for constant surface speed mode.
pub const CSS_MODE_CODE: u32 = 96;

/// File extensions accepted as NC programs.
pub const PROGRAM_EXTENSIONS: [&str; 4] = ["nc", "txt", "gcode", "tap"];

/// Extractor defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Spindle speed used when the program commands none.
    pub default_spindle_speed: f64,
    /// Feed rate used when the program commands none.
    pub default_feed_rate: f64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            default_spindle_speed: DEFAULT_SPINDLE_SPEED,
            default_feed_rate: DEFAULT_FEED_RATE,
        }
    }
}

/// Empirical tool-life model constants.
///
/// `life = (speed_constant / speed) * feed^-feed_exponent * depth^-depth_exponent * 60`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolLifeConfig {
    pub speed_constant: f64,
    pub feed_exponent: f64,
    pub depth_exponent: f64,
}

impl Default for ToolLifeConfig {
    fn default() -> Self {
        Self {
            speed_constant: 200.0,
            feed_exponent: 0.8,
            depth_exponent: 0.4,
        }
    }
}

/// Energy tariffs, in currency units per kWh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TariffConfig {
    pub solar: f64,
    pub grid: f64,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            solar: 12.5,
            grid: 25.0,
        }
    }
}

/// Complete analyzer configuration, loadable from JSON.
///
/// Every section is optional in the file; missing keys keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub extractor: ExtractorConfig,
    pub tool_life: ToolLifeConfig,
    pub tariffs: TariffConfig,
}

impl AnalyzerConfig {
    /// Parse a configuration from JSON text and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AnalyzerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AnalyzeError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check that values fed into downstream formulas are usable.
    ///
    /// Defaults must be strictly positive: a zero default would be
    /// indistinguishable from "nothing found" and breaks the tool-life model.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("extractor.default_spindle_speed", self.extractor.default_spindle_speed),
            ("extractor.default_feed_rate", self.extractor.default_feed_rate),
            ("tool_life.speed_constant", self.tool_life.speed_constant),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(AnalyzeError::InvalidConfig {
                    message: format!("{} must be a positive number, got {}", name, value),
                });
            }
        }

        let non_negative = [
            ("tool_life.feed_exponent", self.tool_life.feed_exponent),
            ("tool_life.depth_exponent", self.tool_life.depth_exponent),
            ("tariffs.solar", self.tariffs.solar),
            ("tariffs.grid", self.tariffs.grid),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(AnalyzeError::InvalidConfig {
                    message: format!("{} must not be negative, got {}", name, value),
                });
            }
        }

        Ok(())
    }
}

/// Utility functions for decimal rounding.
pub mod rounding {
    /// Round to `places` decimal places, ties to even.
    #[inline]
    pub fn round_to(value: f64, places: i32) -> f64 {
        let factor = 10f64.powi(places);
        (value * factor).round_ties_even() / factor
    }
}
