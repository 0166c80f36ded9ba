// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use subsmith::app_config::{Config, LogLevel, TranslationProvider};
use subsmith::app_controller::Controller;

/// CLI wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliProvider {
    Echo,
    Ollama,
}

impl From<CliProvider> for TranslationProvider {
    fn from(provider: CliProvider) -> Self {
        match provider {
            CliProvider::Echo => TranslationProvider::Echo,
            CliProvider::Ollama => TranslationProvider::Ollama,
        }
    }
}

/// CLI wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for subsmith
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// subsmith - video subtitle translation pipeline
///
/// Extracts the audio track from a video, transcribes the speech, translates
/// every segment and produces a translated SRT file plus two videos: one with
/// the subtitles burned into the picture and one carrying them as a
/// selectable soft track.
#[derive(Parser, Debug)]
#[command(name = "subsmith")]
#[command(version)]
#[command(about = "Translate video speech into subtitle artifacts")]
#[command(long_about = "subsmith extracts audio from a video, transcribes it with a local
whisper.cpp engine, translates the segments and writes three artifacts:
a translated SRT file, a video with burned-in subtitles and a video with
a selectable soft subtitle track.

EXAMPLES:
    subsmith movie.mp4                      # Transcribe and echo-translate
    subsmith -t mn movie.mp4                # Translate into Mongolian
    subsmith -s en -t fr movie.mp4          # Declare the source language
    subsmith -p ollama -m llama3.2:3b movie.mp4
    subsmith /videos/ -o /srv/artifacts     # Process a whole directory
    subsmith completions bash > subsmith.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different file with --config-path. If the config file doesn't exist, a
    default one is created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input video file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output directory for generated artifacts
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Source language code (e.g. 'en'), or 'auto' to detect
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g. 'mn', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliProvider>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let now = chrono::Local::now().format("%H:%M:%S%.3f");
        let color = Self::color_for_level(record.level());
        let mut stderr = std::io::stderr();
        let _ = writeln!(
            stderr,
            "{}{} {:5} {}\x1B[0m",
            color,
            now,
            record.level(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the config (and any override) picks the real level
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "subsmith", &mut std::io::stdout());
        return Ok(());
    }

    let input_path = cli
        .input_path
        .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

    let mut config = Config::from_file_or_default(&cli.config_path)
        .with_context(|| format!("failed to load config from {}", cli.config_path))?;

    // Command line overrides take precedence over the config file.
    if let Some(source) = cli.source_language {
        config.source_language = source;
    }
    if let Some(target) = cli.target_language {
        config.target_language = target;
    }
    if let Some(provider) = cli.provider {
        config.translation.provider = provider.into();
    }
    if let Some(model) = cli.model {
        config.translation.model = model;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    if input_path.is_dir() {
        controller.run_folder(&input_path, &cli.output_dir).await?;
    } else {
        controller.run(&input_path, &cli.output_dir).await?;
    }

    Ok(())
}
