//! FeatureVector - Model input in the column order the scaler expects.

use crate::error::{AnalyzeError, Result};
use crate::model::ExtractionResult;
use serde::Serialize;

/// Strictly positive `[feed_rate, depth_of_cut, spindle_speed]` triple.
///
/// The scaler and regression models were trained on this column order, which
/// differs from the field order of [`ExtractionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    feed_rate: f64,
    depth_of_cut: f64,
    spindle_speed: f64,
}

impl FeatureVector {
    /// Build a feature vector, rejecting zero, negative or non-finite values.
    pub fn new(feed_rate: f64, depth_of_cut: f64, spindle_speed: f64) -> Result<Self> {
        check_positive("feed_rate", feed_rate)?;
        check_positive("depth_of_cut", depth_of_cut)?;
        check_positive("spindle_speed", spindle_speed)?;
        Ok(Self {
            feed_rate,
            depth_of_cut,
            spindle_speed,
        })
    }

    pub fn feed_rate(&self) -> f64 {
        self.feed_rate
    }

    pub fn depth_of_cut(&self) -> f64 {
        self.depth_of_cut
    }

    pub fn spindle_speed(&self) -> f64 {
        self.spindle_speed
    }

    /// Values as a scaler row: `[feed, depth, speed]`.
    pub fn as_array(&self) -> [f64; 3] {
        [self.feed_rate, self.depth_of_cut, self.spindle_speed]
    }
}

impl TryFrom<&ExtractionResult> for FeatureVector {
    type Error = AnalyzeError;

    fn try_from(result: &ExtractionResult) -> Result<Self> {
        FeatureVector::new(result.feed_rate, result.depth_of_cut, result.spindle_speed)
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnalyzeError::NonPositiveFeature { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DepthSource;

    fn result(feed: f64, speed: f64, depth: f64) -> ExtractionResult {
        ExtractionResult {
            feed_rate: feed,
            spindle_speed: speed,
            depth_of_cut: depth,
            depth_source: DepthSource::XDiameter,
            ..Default::default()
        }
    }

    #[test]
    fn test_column_order() {
        let features = FeatureVector::try_from(&result(0.25, 1500.0, 2.0)).unwrap();
        assert_eq!(features.as_array(), [0.25, 2.0, 1500.0]);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = FeatureVector::try_from(&result(0.25, 1500.0, 0.0)).unwrap_err();
        match err {
            AnalyzeError::NonPositiveFeature { name, value } => {
                assert_eq!(name, "depth_of_cut");
                assert_eq!(value, 0.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(FeatureVector::new(f64::NAN, 1.0, 1000.0).is_err());
        assert!(FeatureVector::new(0.1, f64::INFINITY, 1000.0).is_err());
        assert!(FeatureVector::new(0.1, 1.0, -1000.0).is_err());
    }
}
