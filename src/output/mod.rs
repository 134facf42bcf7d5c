use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::transcript::Transcript;

pub mod formatters;

pub use formatters::*;

/// Render a transcript in the requested format
pub fn render(transcript: &Transcript, format: &OutputFormat) -> Result<String> {
    let content = match format {
        OutputFormat::Text => format_as_text(transcript),
        OutputFormat::Json => format_as_json(transcript)?,
        OutputFormat::Srt => format_as_srt(transcript),
        OutputFormat::Vtt => format_as_vtt(transcript),
    };
    Ok(content)
}

/// Save transcript to file
pub fn save_to_file(transcript: &Transcript, path: &Path, format: &OutputFormat) -> Result<()> {
    let content = render(transcript, format)?;

    fs_err::write(path, content)?;
    Ok(())
}

/// Write transcript to any sink, followed by a newline
pub fn write_to<W: Write>(out: &mut W, transcript: &Transcript, format: &OutputFormat) -> Result<()> {
    let content = render(transcript, format)?;

    writeln!(out, "{}", content).context("Failed to write transcript")?;
    out.flush()?;
    Ok(())
}

/// Print transcript to console
pub fn print_to_console(transcript: &Transcript, format: &OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    write_to(&mut stdout.lock(), transcript, format)
}
