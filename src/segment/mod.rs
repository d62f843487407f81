//! Token segmentation: composing the block token stream into slides.

mod options;
mod runs;
mod segmenter;

pub use options::SegmentOptions;
pub use runs::build_runs;
pub use segmenter::Segmenter;
