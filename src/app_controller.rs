use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use crate::app_config::{Config, TranslationProvider};
use crate::file_utils::FileManager;
use crate::job_registry::InMemoryJobStore;
use crate::media_tools::FfmpegTool;
use crate::pipeline::{Pipeline, PipelineOutput};
use crate::transcription::WhisperCpp;
use crate::translation::{EchoTranslator, OllamaTranslator, Translator};

// @module: Application controller wiring config to the pipeline

/// Main application controller for subtitle translation runs
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Process-wide completed-job store
    store: Arc<InMemoryJobStore>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Controller {
            config,
            store: Arc::new(InMemoryJobStore::new()),
        })
    }

    /// Store holding the jobs completed by this controller
    pub fn store(&self) -> Arc<InMemoryJobStore> {
        Arc::clone(&self.store)
    }

    fn build_pipeline(&self) -> Pipeline {
        let media = Arc::new(FfmpegTool::new(
            self.config.media.binary.as_str(),
            Duration::from_secs(self.config.media.timeout_secs),
        ));
        let engine = Arc::new(WhisperCpp::new(
            self.config.transcription.binary.as_str(),
            self.config.transcription.model.as_str(),
            Duration::from_secs(self.config.transcription.timeout_secs),
        ));
        Pipeline::new(media, engine, self.store.clone())
    }

    fn build_translator(&self) -> Result<Box<dyn Translator>> {
        match self.config.translation.provider {
            TranslationProvider::Echo => Ok(Box::new(EchoTranslator)),
            TranslationProvider::Ollama => {
                let translator = OllamaTranslator::new(
                    &self.config.translation.endpoint,
                    self.config.translation.model.as_str(),
                    Duration::from_secs(self.config.translation.timeout_secs),
                )?;
                Ok(Box::new(translator))
            }
        }
    }

    /// Run the pipeline for a single video file
    pub async fn run(&self, input_file: &Path, output_dir: &Path) -> Result<PipelineOutput> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("input file does not exist: {:?}", input_file));
        }

        let start_time = std::time::Instant::now();
        info!(
            "Translating {:?} ({} -> {}, provider {})",
            input_file,
            self.config.source_language,
            self.config.target_language,
            self.config.translation.provider,
        );

        let pipeline = self.build_pipeline();
        let translator = self.build_translator()?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!(
            "Processing {:?}",
            input_file.file_name().unwrap_or_default()
        ));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let result = pipeline
            .run(
                input_file,
                output_dir,
                &self.config.source_language,
                &self.config.target_language,
                translator.as_ref(),
            )
            .await;
        spinner.finish_and_clear();

        let output = result.with_context(|| format!("pipeline failed for {:?}", input_file))?;
        info!(
            "Job {} finished in {}",
            output.job_id,
            Self::format_duration(start_time.elapsed())
        );
        info!("  subtitle: {:?}", output.srt_path);
        info!("  burned:   {:?}", output.burned_path);
        info!("  soft:     {:?}", output.soft_path);
        Ok(output)
    }

    /// Run the pipeline for every video file under a directory, sequentially
    pub async fn run_folder(&self, input_dir: &Path, output_dir: &Path) -> Result<Vec<PipelineOutput>> {
        let files = FileManager::find_video_files(input_dir)?;
        if files.is_empty() {
            warn!("No video files found in {:?}", input_dir);
            return Ok(Vec::new());
        }

        let total = files.len();
        info!("Processing {} video files from {:?}", total, input_dir);

        let progress = ProgressBar::new(total as u64);
        progress.set_style(
            ProgressStyle::with_template("[{bar:40}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut outputs = Vec::with_capacity(total);
        for file in files {
            progress.set_message(
                file.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );
            match self.run(&file, output_dir).await {
                Ok(output) => outputs.push(output),
                Err(e) => warn!("Skipping {:?}: {:#}", file, e),
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        info!("Batch complete: {}/{} files translated", outputs.len(), total);
        Ok(outputs)
    }

    /// Human-readable duration as h/m/s
    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
