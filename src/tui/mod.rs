pub mod components;
pub mod plain;
pub mod ui;

use crate::error::{Error, Result};
use crate::tui::components::{Spinner, TICK_RATE};
use crate::tui::ui::Panel;
use crossterm::style::Stylize;
use ratatui::{Terminal, TerminalOptions, Viewport, backend::CrosstermBackend};
use std::future::Future;
use std::io::{self, IsTerminal, Stdout};
use std::path::Path;

pub use plain::PlainConsole;

/// Everything the command shows the user while it runs.
pub trait Console {
    fn banner(&mut self, model: &str) -> Result<()>;

    fn inputs(&mut self, video_url: &str, language: &str) -> Result<()>;

    /// Drive `task` to completion while showing `message` as in-flight status.
    fn wait_for<F: Future>(
        &mut self,
        message: &str,
        task: F,
    ) -> impl Future<Output = Result<F::Output>>;

    fn summary(&mut self, text: &str) -> Result<()>;

    fn saved(&mut self, path: &Path) -> Result<()>;

    fn error(&mut self, err: &Error);
}

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Styled output drawn above a one-line inline viewport that hosts the spinner.
pub struct TerminalConsole {
    terminal: Tui,
    spinner: Spinner,
}

impl TerminalConsole {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(1),
            },
        )?;

        Ok(Self {
            terminal,
            spinner: Spinner::new(),
        })
    }

    fn width(&self) -> Result<u16> {
        Ok(self.terminal.size()?.width)
    }

    fn print(&mut self, panel: Panel) -> Result<()> {
        let height = panel.height();
        self.terminal
            .insert_before(height, |buf| panel.render(buf))?;
        Ok(())
    }
}

impl Console for TerminalConsole {
    fn banner(&mut self, model: &str) -> Result<()> {
        self.print(ui::banner(model))
    }

    fn inputs(&mut self, video_url: &str, language: &str) -> Result<()> {
        let width = self.width()?;
        self.print(ui::inputs(video_url, language, width))
    }

    async fn wait_for<F: Future>(&mut self, message: &str, task: F) -> Result<F::Output> {
        self.spinner.reset();
        let mut ticker = tokio::time::interval(TICK_RATE);
        tokio::pin!(task);

        let output = loop {
            tokio::select! {
                output = &mut task => break output,
                _ = ticker.tick() => {
                    let line = self.spinner.line(message);
                    self.spinner.advance();
                    self.terminal.draw(|f| f.render_widget(line, f.area()))?;
                }
            }
        };

        self.terminal.clear()?;
        Ok(output)
    }

    fn summary(&mut self, text: &str) -> Result<()> {
        let width = self.width()?;
        self.print(ui::summary(text, width))
    }

    fn saved(&mut self, path: &Path) -> Result<()> {
        let width = self.width()?;
        self.print(ui::saved(path, width))
    }

    fn error(&mut self, err: &Error) {
        let _ = self.terminal.clear();
        eprintln!("{} {err}", "Error:".red().bold());
    }
}

/// Panels need an interactive terminal; anything else gets plain text.
pub fn wants_plain(forced: bool) -> bool {
    forced || !io::stdout().is_terminal()
}
