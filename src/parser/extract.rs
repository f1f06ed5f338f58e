//! Single-pass cutting-parameter extractor.

use crate::config::rounding::round_to;
use crate::config::{ExtractorConfig, DEPTH_DECIMALS, FEED_DECIMALS, SPEED_DECIMALS};
use crate::model::{DepthSource, ExtractionResult, Extent};

use super::block::Block;

/// Running state for one extraction pass.
#[derive(Debug, Default)]
struct Accumulator {
    max_feed: f64,
    max_speed: f64,
    x: Option<Extent>,
    z: Option<Extent>,
}

impl Accumulator {
    fn add_block(&mut self, block: &Block) {
        for feed in block.values('F') {
            self.max_feed = self.max_feed.max(feed.abs());
        }

        // Under G96 the S word is a surface speed, not an RPM.
        if !block.is_css_mode() {
            for speed in block.values('S') {
                self.max_speed = self.max_speed.max(speed.abs());
            }
        }

        if block.is_motion() {
            for x in block.values('X') {
                Extent::record(&mut self.x, x);
            }
            for z in block.values('Z') {
                Extent::record(&mut self.z, z);
            }
        }
    }

    /// X (diameter) wins over Z whenever any X was recorded.
    fn depth(&self) -> (f64, DepthSource) {
        match (self.x, self.z) {
            (Some(x), _) => (x.span() / 2.0, DepthSource::XDiameter),
            (None, Some(z)) => (z.span(), DepthSource::ZTravel),
            (None, None) => (0.0, DepthSource::None),
        }
    }

    fn finish(self, config: &ExtractorConfig) -> ExtractionResult {
        let (depth, depth_source) = self.depth();

        let feed_defaulted = self.max_feed == 0.0;
        let speed_defaulted = self.max_speed == 0.0;
        let feed = if feed_defaulted {
            config.default_feed_rate
        } else {
            self.max_feed
        };
        let speed = if speed_defaulted {
            config.default_spindle_speed
        } else {
            self.max_speed
        };

        ExtractionResult {
            feed_rate: round_to(feed, FEED_DECIMALS),
            spindle_speed: round_to(speed, SPEED_DECIMALS),
            depth_of_cut: round_to(depth.abs(), DEPTH_DECIMALS),
            feed_defaulted,
            speed_defaulted,
            depth_source,
        }
    }
}

/// Cutting-parameter extractor.
///
/// Holds only configuration; every call to [`Extractor::extract`] uses its
/// own accumulator, so one extractor can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create an extractor with custom defaults.
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Derive feed rate, spindle speed and depth of cut from program text.
    ///
    /// Never fails: ignorable lines, unknown words and malformed numbers are
    /// skipped, and missing feed/speed fall back to the configured defaults.
    pub fn extract(&self, program: &str) -> ExtractionResult {
        let mut acc = Accumulator::default();
        for block in program.lines().filter_map(Block::parse) {
            acc.add_block(&block);
        }
        acc.finish(&self.config)
    }
}

/// Extract with the standard defaults (1000 RPM, 0.1 mm/rev).
pub fn extract(program: &str) -> ExtractionResult {
    Extractor::default().extract(program)
}
