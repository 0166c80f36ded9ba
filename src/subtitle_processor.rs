use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

// @module: Segment model and SRT document synthesis

/// A timed span of recognized or translated speech.
///
/// Plain immutable value object with no hidden identity: sequences of
/// segments can be copied, filtered, or replaced without aliasing concerns.
/// Timings are seconds from the start of the source audio. `end >= start` is
/// expected but not enforced; the formatter renders violations as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Start time in seconds
    pub start: f64,

    /// End time in seconds
    pub end: f64,

    /// Text spoken during the span
    pub text: String,
}

impl Segment {
    /// Create a new segment
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Segment {
            start,
            end,
            text: text.into(),
        }
    }

    /// Copy of this segment with the same timing and replaced text
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Segment {
            start: self.start,
            end: self.end,
            text: text.into(),
        }
    }
}

/// Format a seconds value as an SRT timestamp (`HH:MM:SS,mmm`).
///
/// Negative values clamp to zero. Milliseconds are floored from the
/// fractional part of the original value. Hours are not capped at 24; a
/// 25-hour timestamp renders as `25:00:00,000`.
pub fn format_timestamp(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let whole = seconds.floor();
    let millis = ((seconds - whole) * 1000.0).floor() as u64;
    let total = whole as u64;

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Render an ordered segment sequence as an SRT document.
///
/// Each segment yields a 1-indexed block of index line, timing line, trimmed
/// text and a blank separator. The document carries exactly one trailing
/// newline. An empty sequence renders as the empty string.
pub fn render_srt(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return String::new();
    }

    let mut lines: Vec<String> = Vec::with_capacity(segments.len() * 4);
    for (index, segment) in segments.iter().enumerate() {
        lines.push((index + 1).to_string());
        lines.push(format!(
            "{} --> {}",
            format_timestamp(segment.start),
            format_timestamp(segment.end)
        ));
        lines.push(segment.text.trim().to_string());
        lines.push(String::new());
    }

    let mut document = lines.join("\n").trim().to_string();
    document.push('\n');
    document
}

/// Render segments and persist the document at `path`.
pub fn write_srt(segments: &[Segment], path: &Path) -> Result<()> {
    let document = render_srt(segments);
    std::fs::write(path, &document)
        .with_context(|| format!("failed to write subtitle file: {:?}", path))?;
    debug!("Wrote {} subtitle blocks to {:?}", segments.len(), path);
    Ok(())
}
