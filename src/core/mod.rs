pub mod gemini;
pub mod language;
pub mod prompt;
pub mod report;
pub mod summarizer;
pub mod url;

pub use gemini::{GeminiClient, GenerativeClient};
pub use language::normalize_language;
pub use report::Report;
pub use summarizer::VideoSummarizer;
