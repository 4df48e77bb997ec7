//! Sentiment progression for song lyrics and other free text.
//!
//! Text is split into fixed-size word chunks, each chunk is scored with a
//! lexicon-based polarity model ([VADER](https://github.com/cjhutto/vaderSentiment) by default),
//! and the per-chunk compound scores are averaged into a single label.
//! The per-chunk series is exposed for charting how the tone moves through a song.
//!
//! ```rust
//! use lyric_sentiment::sentiment::{summarize, ProgressionPipelineBuilder};
//!
//! # fn main() -> lyric_sentiment::error::Result<()> {
//! let pipeline = ProgressionPipelineBuilder::vader().chunk_size(10).build()?;
//!
//! let result = pipeline.analyze("I feel good, I knew that I would now")?;
//! println!("{}", summarize(result.as_ref()));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

// ============ Internal API ============

pub(crate) mod models;
pub(crate) mod pipelines;

// ============ Public API ============

pub mod error;

pub use pipelines::sentiment;
