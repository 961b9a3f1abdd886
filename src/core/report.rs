use crate::error::{Error, Result};
use std::path::Path;
use tokio::fs;

const REPORT_TITLE: &str = "YouTube Video Summary";
const SEPARATOR_WIDTH: usize = 50;

pub struct Report<'a> {
    pub video_url: &'a str,
    pub model: &'a str,
    pub language: &'a str,
    pub summary: &'a str,
}

impl Report<'_> {
    pub fn render(&self) -> String {
        format!(
            "{REPORT_TITLE}\nURL: {}\nModel: {}\nLanguage: {}\n\n{}\n\n{}",
            self.video_url,
            self.model,
            self.language,
            "-".repeat(SEPARATOR_WIDTH),
            self.summary
        )
    }

    /// Write the report as UTF-8, replacing any existing file.
    pub async fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())
            .await
            .map_err(|source| Error::OutputFile {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(path = %path.display(), "Summary report written");
        Ok(())
    }
}
