use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::{debug, error};
use tokio::process::Command;

// @module: External media tool adapter (ffmpeg)

/// Narrow interface to the external media transcoding tool.
///
/// The orchestrator needs exactly three operations; command construction
/// stays behind this boundary so tests can substitute a fake.
#[async_trait]
pub trait MediaTool: Send + Sync {
    /// Extract the audio track as mono 16 kHz PCM, the sample format typical
    /// speech recognition engines expect.
    async fn extract_audio(&self, video: &Path, audio_out: &Path) -> Result<()>;

    /// Render the subtitle document into the video frames.
    async fn burn_subtitles(&self, video: &Path, subtitles: &Path, video_out: &Path)
        -> Result<()>;

    /// Embed the subtitle document as a selectable track tagged with an ISO
    /// 639-2/T language code.
    async fn mux_subtitles(
        &self,
        video: &Path,
        subtitles: &Path,
        language_tag: &str,
        video_out: &Path,
    ) -> Result<()>;
}

/// `MediaTool` implementation shelling out to ffmpeg
pub struct FfmpegTool {
    binary: String,
    timeout: Duration,
}

impl FfmpegTool {
    pub fn new(binary: impl Into<String>, timeout: Duration) -> Self {
        FfmpegTool {
            binary: binary.into(),
            timeout,
        }
    }

    /// Escape a subtitle path for use inside an ffmpeg filter graph
    fn escape_filter_path(path: &Path) -> String {
        path.to_string_lossy()
            .replace('\\', "\\\\")
            .replace(':', "\\:")
            .replace('\'', "\\'")
    }

    /// Run one ffmpeg invocation with a caller-side timeout
    async fn run(&self, args: &[&str]) -> Result<()> {
        debug!("Running {} {}", self.binary, args.join(" "));

        let command_future = Command::new(&self.binary).args(args).output();
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
            let filtered = filter_ffmpeg_stderr(&stderr);
            error!("{} failed with {}: {}", self.binary, output.status, filtered);
            return Err(anyhow!("{} failed: {}", self.binary, filtered));
        }

        Ok(())
    }
}

#[async_trait]
impl MediaTool for FfmpegTool {
    async fn extract_audio(&self, video: &Path, audio_out: &Path) -> Result<()> {
        self.run(&[
            "-y",
            "-i",
            video.to_str().unwrap_or_default(),
            "-vn",
            "-acodec",
            "pcm_s16le",
            "-ar",
            "16000",
            "-ac",
            "1",
            audio_out.to_str().unwrap_or_default(),
        ])
        .await
    }

    async fn burn_subtitles(
        &self,
        video: &Path,
        subtitles: &Path,
        video_out: &Path,
    ) -> Result<()> {
        let filter = format!("subtitles='{}'", Self::escape_filter_path(subtitles));
        self.run(&[
            "-y",
            "-i",
            video.to_str().unwrap_or_default(),
            "-vf",
            &filter,
            "-c:v",
            "libx264",
            "-preset",
            "veryfast",
            "-crf",
            "23",
            "-c:a",
            "aac",
            "-b:a",
            "192k",
            video_out.to_str().unwrap_or_default(),
        ])
        .await
    }

    async fn mux_subtitles(
        &self,
        video: &Path,
        subtitles: &Path,
        language_tag: &str,
        video_out: &Path,
    ) -> Result<()> {
        let metadata = format!("language={}", language_tag);
        self.run(&[
            "-y",
            "-i",
            video.to_str().unwrap_or_default(),
            "-i",
            subtitles.to_str().unwrap_or_default(),
            "-c",
            "copy",
            "-c:s",
            "mov_text",
            "-metadata:s:s:0",
            &metadata,
            video_out.to_str().unwrap_or_default(),
        ])
        .await
    }
}

/// Filter ffmpeg stderr to only show meaningful error lines, stripping the
/// version banner, build configuration, and stream metadata noise.
fn filter_ffmpeg_stderr(stderr: &str) -> String {
    const NOISE_PREFIXES: &[&str] = &[
        "ffmpeg version",
        "built with",
        "configuration:",
        "lib",
        "Input #",
        "Output #",
        "Metadata:",
        "Duration:",
        "Chapter",
        "Stream #",
        "Stream mapping:",
        "Press [q]",
        "title",
        "encoder",
    ];

    let meaningful: Vec<&str> = stderr
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            if trimmed.is_empty() {
                return false;
            }
            !NOISE_PREFIXES.iter().any(|p| trimmed.starts_with(p))
        })
        .collect();

    if meaningful.is_empty() {
        "unknown ffmpeg error (stderr was empty after filtering)".to_string()
    } else {
        meaningful.join("\n")
    }
}
