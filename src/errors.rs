/*!
 * Error types for the subsmith pipeline.
 *
 * Stage failures are modeled as one variant per pipeline stage so callers can
 * tell "bad input video" from "model unavailable" without string matching,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors produced by a translation backend
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Request could not be sent, or timed out
    #[error("translation request failed: {0}")]
    RequestFailed(String),

    /// Backend answered with a non-success status
    #[error("translation backend responded with {status_code}: {message}")]
    Backend {
        /// HTTP status code
        status_code: u16,
        /// Error body from the backend
        message: String,
    },

    /// Response could not be decoded
    #[error("failed to parse translation response: {0}")]
    ParseError(String),

    /// Backend returned no usable text
    #[error("translation backend returned an empty result")]
    EmptyResult,
}

/// Pipeline failure, tagged with the stage that produced it.
///
/// Every failure aborts the run. Intermediate artifacts already written to
/// disk are left in place for inspection; nothing partial is ever registered
/// as complete.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Input video unreadable or audio extraction failed
    #[error("audio extraction failed: {0}")]
    AudioExtraction(String),

    /// Speech recognition collaborator unavailable or failed
    #[error("transcription failed: {0}")]
    Transcription(String),

    /// A translator call failed for one segment
    #[error("translation failed for segment {index}: {message}")]
    Translation {
        /// Zero-based index of the failing segment
        index: usize,
        /// Diagnostic from the translator
        message: String,
    },

    /// The rendered subtitle document could not be persisted
    #[error("could not write subtitle file: {0}")]
    SubtitleWrite(String),

    /// Burn-in collaborator failed
    #[error("subtitle burn-in failed: {0}")]
    BurnIn(String),

    /// Soft-mux collaborator failed
    #[error("subtitle mux failed: {0}")]
    Mux(String),
}

impl PipelineError {
    /// Name of the stage this error belongs to
    pub fn stage(&self) -> &'static str {
        match self {
            Self::AudioExtraction(_) => "audio-extraction",
            Self::Transcription(_) => "transcription",
            Self::Translation { .. } => "translation",
            Self::SubtitleWrite(_) => "subtitling",
            Self::BurnIn(_) => "burn-in",
            Self::Mux(_) => "mux",
        }
    }
}
