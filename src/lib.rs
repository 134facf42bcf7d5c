//! Transcript Fetch - A Rust CLI tool for printing YouTube transcripts
//!
//! This library turns a YouTube URL or bare video ID into a video identifier,
//! fetches the English transcript for it and renders the caption segments as
//! plain text or one of the timed subtitle formats.

pub mod cli;
pub mod config;
pub mod extractors;
pub mod output;
pub mod transcript;
pub mod utils;

pub use cli::{Cli, OutputFormat};
pub use config::Config;
pub use extractors::extract_video_id;
pub use transcript::{
    join_segments, Transcript, TranscriptPipeline, TranscriptProvider, TranscriptSegment,
};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to transcript retrieval
#[derive(thiserror::Error, Debug)]
pub enum TranscriptError {
    #[error("Transcript client could not be created: {0}")]
    ClientInit(String),

    #[error("Could not retrieve transcript for video {video_id}: {reason}")]
    FetchFailed { video_id: String, reason: String },
}
