use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Printed on stdout when no video was given.
pub const USAGE_MESSAGE: &str = "Please provide a YouTube URL or video ID.";

#[derive(Parser, Debug)]
#[command(
    name = "transcript-fetch",
    about = "Transcript Fetch - Print the English transcript of a YouTube video",
    version,
    long_about = "Accepts a YouTube watch URL, a youtu.be short link or a bare video ID, fetches the video's English captions and prints them as one line of text."
)]
pub struct Cli {
    /// YouTube URL (youtube.com/watch?v=..., youtu.be/...) or bare video ID
    #[arg(value_name = "URL_OR_ID")]
    pub input: Option<String>,

    /// Output format (defaults to the configured format, then text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file path (prints to console if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file to use instead of the default lookup
    #[arg(short, long, value_name = "FILE", env = "TRANSCRIPT_FETCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable progress indicators
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Segment texts joined by single spaces
    #[default]
    Text,
    /// JSON with timestamps
    Json,
    /// SRT subtitle format
    Srt,
    /// WebVTT format
    Vtt,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Srt => write!(f, "srt"),
            OutputFormat::Vtt => write!(f, "vtt"),
        }
    }
}
