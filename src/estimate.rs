//! Tool-life, energy and cost estimates for an analyzed program.
//!
//! The power figure comes from an external regression model; this module only
//! does the arithmetic that follows it.

use crate::config::rounding::round_to;
use crate::config::{TariffConfig, ToolLifeConfig};
use crate::error::{AnalyzeError, Result};
use crate::model::FeatureVector;
use serde::Serialize;
use std::fmt;

/// Lower bound of the power band labeled as solar-suitable (W).
pub const SOLAR_MIN_POWER_W: f64 = 1600.0;

/// Upper bound of the power band labeled as solar-suitable (W).
pub const SOLAR_MAX_POWER_W: f64 = 2200.0;

/// Recommended energy source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerSource {
    Solar,
    Grid,
}

impl PowerSource {
    /// Classify by the power band the source classifier was trained on.
    pub fn classify(power_w: f64) -> Self {
        if (SOLAR_MIN_POWER_W..=SOLAR_MAX_POWER_W).contains(&power_w) {
            PowerSource::Solar
        } else {
            PowerSource::Grid
        }
    }
}

impl fmt::Display for PowerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerSource::Solar => write!(f, "Solar"),
            PowerSource::Grid => write!(f, "Grid"),
        }
    }
}

/// Energy cost under each tariff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostEstimate {
    pub solar: f64,
    pub grid: f64,
}

/// Full estimate for one program.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    /// Predicted power draw (W), as supplied.
    pub power_w: f64,
    pub source: PowerSource,
    /// Tool life (minutes), 1 decimal.
    pub tool_life_min: f64,
    /// Operation time (hours).
    pub operation_h: f64,
    /// Energy consumed (kWh).
    pub energy_kwh: f64,
    pub cost: CostEstimate,
}

/// Empirical tool life in minutes, rounded to 1 decimal.
pub fn tool_life_minutes(features: &FeatureVector, model: &ToolLifeConfig) -> f64 {
    let life = (model.speed_constant / features.spindle_speed())
        * features.feed_rate().powf(-model.feed_exponent)
        * features.depth_of_cut().powf(-model.depth_exponent)
        * 60.0;
    round_to(life, 1)
}

/// Compute the tool-life, energy and cost estimate.
///
/// `power_w` must be finite and non-negative.
pub fn estimate(
    features: &FeatureVector,
    power_w: f64,
    model: &ToolLifeConfig,
    tariffs: &TariffConfig,
) -> Result<Estimate> {
    if !(power_w.is_finite() && power_w >= 0.0) {
        return Err(AnalyzeError::NonPositiveFeature {
            name: "power",
            value: power_w,
        });
    }

    let tool_life_min = tool_life_minutes(features, model);
    let operation_h = tool_life_min / 60.0;
    let energy_kwh = power_w * operation_h / 1000.0;

    Ok(Estimate {
        power_w,
        source: PowerSource::classify(power_w),
        tool_life_min,
        operation_h,
        energy_kwh,
        cost: CostEstimate {
            solar: round_to(energy_kwh * tariffs.solar, 2),
            grid: round_to(energy_kwh * tariffs.grid, 2),
        },
    })
}
