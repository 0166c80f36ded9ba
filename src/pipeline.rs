/*!
 * Pipeline orchestration.
 *
 * A run is a linear sequence of five stages with no branching and no retry:
 * failure at any stage aborts the run and is reported tagged with that
 * stage. Intermediate artifacts already on disk are left in place for
 * inspection. Each run owns a fresh job identity and its own artifact
 * paths, so concurrent runs never contend on the same file.
 */

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};
use uuid::Uuid;

use crate::errors::PipelineError;
use crate::file_utils::FileManager;
use crate::job_registry::{JobArtifacts, JobStore};
use crate::language_utils;
use crate::media_tools::MediaTool;
use crate::subtitle_processor::{write_srt, Segment};
use crate::transcription::TranscriptionEngine;
use crate::translation::Translator;

/// Pipeline stages in execution order.
///
/// Transitions are one-directional; an enclosing scheduler may wrap each
/// stage call with timeout or retry policy without altering this contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Extract mono 16 kHz PCM audio from the input video
    AudioExtraction,
    /// Turn audio into ordered, time-stamped segments
    Transcription,
    /// Translate each segment, order preserved
    Translation,
    /// Render the SRT document and persist it
    Subtitling,
    /// Burn subtitles into frames and mux the soft track
    Finalization,
}

impl Stage {
    /// Canonical execution order
    pub const ALL: [Stage; 5] = [
        Stage::AudioExtraction,
        Stage::Transcription,
        Stage::Translation,
        Stage::Subtitling,
        Stage::Finalization,
    ];

    /// Stage label used in logs
    pub fn label(self) -> &'static str {
        match self {
            Self::AudioExtraction => "audio-extraction",
            Self::Transcription => "transcription",
            Self::Translation => "translation",
            Self::Subtitling => "subtitling",
            Self::Finalization => "finalization",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed artifact layout of one job, derived from its identity
#[derive(Debug, Clone)]
pub struct JobPaths {
    /// Extracted audio track
    pub audio: PathBuf,
    /// Translated subtitle document
    pub srt: PathBuf,
    /// Video with burned-in subtitles
    pub burned: PathBuf,
    /// Video with the soft subtitle track
    pub soft: PathBuf,
}

impl JobPaths {
    /// Deterministic artifact naming under `output_dir`
    pub fn for_job(job_id: &str, output_dir: &Path) -> Self {
        JobPaths {
            audio: output_dir.join(format!("{}_audio.wav", job_id)),
            srt: output_dir.join(format!("{}_translated.srt", job_id)),
            burned: output_dir.join(format!("{}_burned.mp4", job_id)),
            soft: output_dir.join(format!("{}_soft.mp4", job_id)),
        }
    }
}

/// Result bundle of a successful run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Unique job identity
    pub job_id: String,
    /// Subtitle document path
    pub srt_path: PathBuf,
    /// Burned-in video path
    pub burned_path: PathBuf,
    /// Soft-muxed video path
    pub soft_path: PathBuf,
}

/// Sequences the processing stages over the external collaborators
pub struct Pipeline {
    media: Arc<dyn MediaTool>,
    engine: Arc<dyn TranscriptionEngine>,
    store: Arc<dyn JobStore>,
}

impl Pipeline {
    pub fn new(
        media: Arc<dyn MediaTool>,
        engine: Arc<dyn TranscriptionEngine>,
        store: Arc<dyn JobStore>,
    ) -> Self {
        Pipeline {
            media,
            engine,
            store,
        }
    }

    /// Run the full pipeline on one input video.
    ///
    /// The job is registered in the store only after every stage has
    /// succeeded, all artifact paths inserted together.
    pub async fn run(
        &self,
        input_video: &Path,
        output_dir: &Path,
        source_lang: &str,
        target_lang: &str,
        translator: &dyn Translator,
    ) -> Result<PipelineOutput, PipelineError> {
        let job_id = Uuid::new_v4().simple().to_string();
        let paths = JobPaths::for_job(&job_id, output_dir);
        // "auto" means the engine detects the language; it is never passed
        // through as a literal code.
        let source_hint = if language_utils::is_auto(source_lang) {
            None
        } else {
            Some(source_lang)
        };

        info!("Job {} started for {:?}", job_id, input_video);

        self.extract_audio(input_video, output_dir, &paths).await?;
        let segments = self.transcribe(&paths, source_hint).await?;
        let translated = self
            .translate(&segments, translator, source_hint, target_lang)
            .await?;
        self.write_subtitles(&translated, &paths)?;
        self.finalize(input_video, target_lang, &paths).await?;

        self.store.insert(
            &job_id,
            JobArtifacts {
                srt: paths.srt.clone(),
                burned: paths.burned.clone(),
                soft: paths.soft.clone(),
            },
        );
        info!("Job {} finalized", job_id);

        Ok(PipelineOutput {
            job_id,
            srt_path: paths.srt,
            burned_path: paths.burned,
            soft_path: paths.soft,
        })
    }

    async fn extract_audio(
        &self,
        input_video: &Path,
        output_dir: &Path,
        paths: &JobPaths,
    ) -> Result<(), PipelineError> {
        debug!("Stage {} started", Stage::AudioExtraction);
        FileManager::ensure_dir(output_dir)
            .map_err(|e| PipelineError::AudioExtraction(format!("{:#}", e)))?;
        self.media
            .extract_audio(input_video, &paths.audio)
            .await
            .map_err(|e| PipelineError::AudioExtraction(format!("{:#}", e)))
    }

    async fn transcribe(
        &self,
        paths: &JobPaths,
        source_hint: Option<&str>,
    ) -> Result<Vec<Segment>, PipelineError> {
        debug!("Stage {} started", Stage::Transcription);
        let segments = self
            .engine
            .transcribe(&paths.audio, source_hint)
            .await
            .map_err(|e| PipelineError::Transcription(format!("{:#}", e)))?;
        info!("Transcription complete: {} segments", segments.len());
        Ok(segments)
    }

    async fn translate(
        &self,
        segments: &[Segment],
        translator: &dyn Translator,
        source_hint: Option<&str>,
        target_lang: &str,
    ) -> Result<Vec<Segment>, PipelineError> {
        debug!("Stage {} started", Stage::Translation);
        let mut translated = Vec::with_capacity(segments.len());
        for (index, segment) in segments.iter().enumerate() {
            let text = translator
                .translate(&segment.text, source_hint, target_lang)
                .await
                .map_err(|e| PipelineError::Translation {
                    index,
                    message: e.to_string(),
                })?;
            translated.push(segment.with_text(text));
        }
        Ok(translated)
    }

    fn write_subtitles(&self, segments: &[Segment], paths: &JobPaths) -> Result<(), PipelineError> {
        debug!("Stage {} started", Stage::Subtitling);
        write_srt(segments, &paths.srt)
            .map_err(|e| PipelineError::SubtitleWrite(format!("{:#}", e)))?;
        info!("Wrote subtitle document to {:?}", paths.srt);
        Ok(())
    }

    async fn finalize(
        &self,
        input_video: &Path,
        target_lang: &str,
        paths: &JobPaths,
    ) -> Result<(), PipelineError> {
        debug!("Stage {} started", Stage::Finalization);
        self.media
            .burn_subtitles(input_video, &paths.srt, &paths.burned)
            .await
            .map_err(|e| PipelineError::BurnIn(format!("{:#}", e)))?;

        let language_tag = language_utils::normalize_to_part2t(target_lang)
            .map_err(|e| PipelineError::Mux(format!("{:#}", e)))?;
        self.media
            .mux_subtitles(input_video, &paths.srt, &language_tag, &paths.soft)
            .await
            .map_err(|e| PipelineError::Mux(format!("{:#}", e)))
    }
}
