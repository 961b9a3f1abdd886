use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::time::{Duration, Instant};

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
pub const TICK_RATE: Duration = Duration::from_millis(80);

pub struct Spinner {
    frame: usize,
    started: Instant,
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            frame: 0,
            started: Instant::now(),
        }
    }

    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn line(&self, message: &str) -> Line<'static> {
        let elapsed = self.started.elapsed().as_secs();
        Line::from(vec![
            Span::styled(
                FRAMES[self.frame],
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::raw(message.to_string()),
            Span::styled(format!(" ({elapsed}s)"), Style::default().fg(Color::DarkGray)),
        ])
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.started = Instant::now();
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}
