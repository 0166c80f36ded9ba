use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use serde::Deserialize;
use tokio::process::Command;

use crate::subtitle_processor::Segment;

// @module: Speech-to-text engine adapter (whisper.cpp CLI)

/// Narrow interface to the external speech recognition engine.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// Transcribe an audio file into ordered, time-stamped segments.
    ///
    /// `language_hint` is `None` when the engine should detect the language
    /// itself. An empty or unintelligible recording is an error, not an empty
    /// sequence.
    async fn transcribe(&self, audio: &Path, language_hint: Option<&str>)
        -> Result<Vec<Segment>>;
}

/// JSON document written by whisper.cpp with `--output-json`
#[derive(Debug, Deserialize)]
struct WhisperOutput {
    transcription: Vec<WhisperUtterance>,
}

#[derive(Debug, Deserialize)]
struct WhisperUtterance {
    offsets: WhisperOffsets,
    text: String,
}

/// Utterance offsets in milliseconds
#[derive(Debug, Deserialize)]
struct WhisperOffsets {
    from: u64,
    to: u64,
}

/// `TranscriptionEngine` implementation shelling out to a whisper.cpp CLI
/// (`whisper-cli` or compatible).
pub struct WhisperCpp {
    binary: String,
    model: PathBuf,
    timeout: Duration,
}

impl WhisperCpp {
    pub fn new(binary: impl Into<String>, model: impl Into<PathBuf>, timeout: Duration) -> Self {
        WhisperCpp {
            binary: binary.into(),
            model: model.into(),
            timeout,
        }
    }
}

#[async_trait]
impl TranscriptionEngine for WhisperCpp {
    async fn transcribe(
        &self,
        audio: &Path,
        language_hint: Option<&str>,
    ) -> Result<Vec<Segment>> {
        if !audio.exists() {
            return Err(anyhow!("audio file does not exist: {:?}", audio));
        }

        // whisper-cli writes <prefix>.json next to the audio file
        let prefix = audio.with_extension("");
        let language = language_hint.unwrap_or("auto");
        info!("Transcribing {:?} with language={}", audio, language);

        let command_future = Command::new(&self.binary)
            .args([
                "-m",
                self.model.to_str().unwrap_or_default(),
                "-f",
                audio.to_str().unwrap_or_default(),
                "-l",
                language,
                "--output-json",
                "--output-file",
                prefix.to_str().unwrap_or_default(),
            ])
            .output();

        let output = tokio::select! {
            result = command_future => {
                result.with_context(|| format!("failed to execute {}", self.binary))?
            }
            _ = tokio::time::sleep(self.timeout) => {
                return Err(anyhow!("{} timed out after {:?}", self.binary, self.timeout));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("{} failed: {}", self.binary, stderr.trim()));
        }

        let json_path = prefix.with_extension("json");
        let raw = std::fs::read_to_string(&json_path)
            .with_context(|| format!("transcription output missing: {:?}", json_path))?;
        let parsed: WhisperOutput = serde_json::from_str(&raw)
            .with_context(|| format!("malformed transcription output: {:?}", json_path))?;

        let segments: Vec<Segment> = parsed
            .transcription
            .into_iter()
            .map(|utterance| {
                Segment::new(
                    utterance.offsets.from as f64 / 1000.0,
                    utterance.offsets.to as f64 / 1000.0,
                    utterance.text,
                )
            })
            .collect();

        if segments.is_empty() {
            return Err(anyhow!("no speech recognized in {:?}", audio));
        }

        debug!("Transcription produced {} segments", segments.len());
        Ok(segments)
    }
}
