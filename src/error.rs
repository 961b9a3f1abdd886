use derive_more::{Display, From};
use std::path::PathBuf;
use std::process::ExitCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
    #[display(
        "No API key provided. Set GEMINI_API_KEY environment variable or use --api-key flag"
    )]
    MissingApiKey,

    #[display("Invalid YouTube URL provided")]
    InvalidUrl,

    #[display("Failed to generate summary: {_0}")]
    Summarization(String),

    #[display("Failed to write summary to {}: {source}", path.display())]
    OutputFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[from]
    #[display("{_0}")]
    Io(std::io::Error),
}

impl Error {
    /// Every failure is fatal to the invocation.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutputFile { source, .. } => Some(source),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}
