/*!
 * # subsmith
 *
 * Turn a source video into translated subtitle artifacts: an extracted audio
 * track, a time-aligned SRT file, a video with subtitles burned into the
 * picture, and a video carrying the subtitles as a selectable soft track.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle_processor`: segment model and SRT document synthesis
 * - `translation`: pluggable `Translator` capability (echo default, Ollama backend)
 * - `providers`: clients for translation backends
 * - `media_tools`: ffmpeg adapter for audio extraction, burn-in and soft-mux
 * - `transcription`: whisper.cpp CLI adapter
 * - `pipeline`: stage orchestration, job identity and artifact layout
 * - `job_registry`: process-wide job-to-artifact store
 * - `app_config`: configuration management
 * - `app_controller`: main application controller
 * - `language_utils`: ISO 639 language code utilities
 * - `file_utils`: file system operations
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod job_registry;
pub mod language_utils;
pub mod media_tools;
pub mod pipeline;
pub mod providers;
pub mod subtitle_processor;
pub mod transcription;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{PipelineError, TranslationError};
pub use job_registry::{ArtifactKind, InMemoryJobStore, JobArtifacts, JobStore};
pub use pipeline::{Pipeline, PipelineOutput, Stage};
pub use subtitle_processor::{format_timestamp, render_srt, Segment};
pub use translation::{EchoTranslator, Translator};
