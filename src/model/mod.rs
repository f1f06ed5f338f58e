//! Data model types for cutting-parameter extraction.

mod extent;
mod features;
mod result;

pub use extent::Extent;
pub use features::FeatureVector;
pub use result::{DepthSource, ExtractionResult};
