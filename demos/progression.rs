//! Prints the sentiment progression of a text.
//!
//! Run with: cargo run --example progression -- "Artist" "Title" "lyrics ..."
//! Set `RUST_LOG=lyric_sentiment=debug` to see per-analysis logging.

use lyric_sentiment::error::Result;
use lyric_sentiment::sentiment::{
    series_for, summarize, ProgressionChart, ProgressionPipelineBuilder, TrackLabel,
};
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = "I feel good I knew that I would now \
                      so good so good but the night is cold and lonely \
                      and I cry alone with a broken heart";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let artist = args.next().unwrap_or_else(|| "Unknown Artist".into());
    let title = args.next().unwrap_or_else(|| "Sample".into());
    let lyrics = args.next().unwrap_or_else(|| SAMPLE.into());

    let pipeline = ProgressionPipelineBuilder::vader().build()?;
    let result = pipeline.analyze(&lyrics)?;

    println!("{}", summarize(result.as_ref()));

    if let Some(result) = &result {
        for (i, (chunk, scores)) in result.iter().enumerate() {
            println!("{:>3}  {:+.3}  {}", i + 1, scores.compound, chunk);
        }
    }

    let track = TrackLabel::new(artist, title);
    match ProgressionChart::from_result(result.as_ref(), &track) {
        Some(chart) => println!("\n{}", chart.to_json()?),
        None => println!("Could not analyze sentiment for '{track}'."),
    }

    println!("\npoints: {}", series_for(result.as_ref()).map_or(0, |s| s.len()));
    Ok(())
}
