//! ExtractionResult - Cutting parameters derived from one program.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which axis the depth of cut was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthSource {
    /// Half the X (diameter) range of a turning operation.
    XDiameter,
    /// Z travel range, used when no X coordinate was commanded.
    ZTravel,
    /// No motion line carried X or Z; depth is zero.
    #[default]
    None,
}

/// Feed rate, spindle speed and depth of cut for a program.
///
/// All three values are rounded and non-negative. Feed and speed are never
/// zero since missing values are replaced by defaults; the `*_defaulted`
/// flags record when that happened. Depth is zero when no cutting motion was
/// found (`depth_source == DepthSource::None`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Largest commanded feed (mm/rev), 4 decimals.
    pub feed_rate: f64,
    /// Largest commanded spindle speed (RPM), whole units.
    pub spindle_speed: f64,
    /// Depth of cut (mm), 4 decimals.
    pub depth_of_cut: f64,
    /// Feed rate is the configured default, not a program value.
    pub feed_defaulted: bool,
    /// Spindle speed is the configured default, not a program value.
    pub speed_defaulted: bool,
    /// Axis used for the depth of cut.
    pub depth_source: DepthSource,
}

impl ExtractionResult {
    /// Check whether any cutting motion contributed to the depth.
    pub fn has_motion(&self) -> bool {
        self.depth_source != DepthSource::None
    }

    /// Check whether both feed and speed came from the program itself.
    pub fn is_fully_measured(&self) -> bool {
        !self.feed_defaulted && !self.speed_defaulted
    }
}

impl fmt::Display for ExtractionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "feed={}{} speed={}{} depth={}",
            self.feed_rate,
            if self.feed_defaulted { " (default)" } else { "" },
            self.spindle_speed,
            if self.speed_defaulted { " (default)" } else { "" },
            self.depth_of_cut
        )
    }
}
