//! Sentiment progression pipeline.
//!
//! Split text into fixed-size word chunks, score each chunk, and label the
//! average as `Positive`, `Negative`, or `Neutral`. The per-chunk series shows
//! how the tone moves from the first verse to the last.
//!
//! # Quick Start
//!
//! ```rust
//! use lyric_sentiment::sentiment::{series_for, summarize, ProgressionPipelineBuilder};
//!
//! # fn main() -> lyric_sentiment::error::Result<()> {
//! let pipeline = ProgressionPipelineBuilder::vader().build()?;
//!
//! let lyrics = "good good good good good good good good good good \
//!               bad bad bad bad bad bad bad bad bad bad";
//! let result = pipeline.analyze(lyrics)?;
//!
//! println!("{}", summarize(result.as_ref()));
//! for point in series_for(result.as_ref()).unwrap_or_default() {
//!     println!("chunk {}: {:.3}", point.chunk_index, point.compound);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Models
//!
//! Any [`PolarityModel`] can replace the bundled VADER lexicon:
//!
//! ```rust
//! use lyric_sentiment::error::Result;
//! use lyric_sentiment::sentiment::{PolarityModel, PolarityScores, ProgressionPipelineBuilder};
//!
//! struct AlwaysUpbeat;
//!
//! impl PolarityModel for AlwaysUpbeat {
//!     fn polarity_scores(&self, _text: &str) -> Result<PolarityScores> {
//!         Ok(PolarityScores::from_compound(0.8))
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let pipeline = ProgressionPipelineBuilder::with_model(AlwaysUpbeat).build()?;
//! let result = pipeline.analyze("whatever the words")?.unwrap();
//! assert_eq!(result.average_compound(), 0.8);
//! # Ok(())
//! # }
//! ```

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod chunker;
pub(crate) mod label;
pub(crate) mod pipeline;
pub(crate) mod report;

// ============ Public API ============

pub use crate::models::{PolarityModel, PolarityScores, VaderModel};
pub use crate::pipelines::stats::PipelineStats;
pub use builder::{ProgressionOptions, ProgressionPipelineBuilder};
pub use chunker::{chunk_words, DEFAULT_CHUNK_SIZE};
pub use label::{classify, SentimentLabel, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use pipeline::{AnalysisResult, BatchOutput, BatchResult, ProgressionPipeline};
pub use report::{
    series_for, summarize, ProgressionChart, SeriesPoint, TrackLabel, NO_DATA_MESSAGE,
    X_AXIS_LABEL, Y_AXIS_LABEL,
};
