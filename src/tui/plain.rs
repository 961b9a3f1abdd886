use crate::error::{Error, Result};
use crate::tui::Console;
use crate::tui::ui::TOOL_NAME;
use std::future::Future;
use std::io::Write;
use std::path::Path;

/// Unstyled output for pipes, redirects and `--plain`.
pub struct PlainConsole<W: Write> {
    out: W,
}

impl<W: Write> PlainConsole<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Console for PlainConsole<W> {
    fn banner(&mut self, model: &str) -> Result<()> {
        writeln!(self.out, "{TOOL_NAME}")?;
        writeln!(self.out, "Model: {model}")?;
        Ok(())
    }

    fn inputs(&mut self, video_url: &str, language: &str) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Video URL: {video_url}")?;
        writeln!(self.out, "Output Language: {language}")?;
        Ok(())
    }

    async fn wait_for<F: Future>(&mut self, message: &str, task: F) -> Result<F::Output> {
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(task.await)
    }

    fn summary(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "\nSummary:\n")?;
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn saved(&mut self, path: &Path) -> Result<()> {
        writeln!(self.out, "\nSummary saved to: {}", path.display())?;
        Ok(())
    }

    fn error(&mut self, err: &Error) {
        let _ = self.out.flush();
        eprintln!("Error: {err}");
    }
}
