use crate::core::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::core::language::DEFAULT_LANGUAGE;
use crate::error::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vidsum")]
#[command(about = "Summarize YouTube videos using Google Gemini API")]
#[command(version)]
pub struct Cli {
    /// YouTube video URL
    pub video_url: String,

    /// Gemini API key (or set GEMINI_API_KEY env var)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini model to use
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Custom prompt for summarization
    #[arg(long)]
    pub prompt: Option<String>,

    /// Save summary to file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output language (e.g., Chinese, zh, Spanish, French)
    #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
    pub lang: String,

    /// Gemini API base URL
    #[arg(long, env = "GEMINI_API_BASE", default_value = DEFAULT_API_BASE, hide = true)]
    pub api_base: String,

    /// Print plain text instead of panels
    #[arg(long)]
    pub plain: bool,
}

/// Load `.env` from the working directory (or a parent) into the environment.
///
/// A missing file is normal; one that exists but cannot be read is reported
/// and otherwise ignored.
pub fn load_env_file() {
    if let Some(err) = env_file_error(dotenvy::dotenv()) {
        tracing::warn!(error = %err, "Ignoring unreadable .env file");
    }
}

fn env_file_error(loaded: dotenvy::Result<PathBuf>) -> Option<dotenvy::Error> {
    match loaded {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded environment file");
            None
        }
        Err(err) if err.not_found() => None,
        Err(err) => Some(err),
    }
}

/// Everything one invocation needs, resolved from flags and environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub video_url: String,
    pub api_key: String,
    pub model: String,
    pub prompt: Option<String>,
    pub output: Option<PathBuf>,
    pub language: String,
    pub api_base: String,
    pub plain: bool,
}

impl TryFrom<Cli> for Settings {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Self> {
        let api_key = cli
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(Error::MissingApiKey)?;

        Ok(Self {
            video_url: cli.video_url,
            api_key,
            model: cli.model,
            prompt: cli.prompt,
            output: cli.output,
            language: cli.lang,
            api_base: cli.api_base,
            plain: cli.plain,
        })
    }
}
