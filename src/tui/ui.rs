use crate::tui::components::{parse_blocks, render_lines};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap},
};
use std::path::Path;

pub const TOOL_NAME: &str = "YouTube Video Summarizer";

/// Output sized ahead of time so it can be pushed above the inline viewport.
pub struct Panel {
    header: Vec<Line<'static>>,
    body: Paragraph<'static>,
    body_width: Option<u16>,
    body_height: u16,
}

impl Panel {
    pub fn height(&self) -> u16 {
        clamp(self.header.len()).saturating_add(self.body_height)
    }

    pub fn render(self, buf: &mut Buffer) {
        let area = buf.area;
        let header_height = clamp(self.header.len()).min(area.height);
        if header_height > 0 {
            Paragraph::new(self.header).render(
                Rect {
                    height: header_height,
                    ..area
                },
                buf,
            );
        }

        let body_area = Rect {
            y: area.y + header_height,
            height: area.height - header_height,
            width: self.body_width.map_or(area.width, |w| w.min(area.width)),
            ..area
        };
        self.body.render(body_area, buf);
    }
}

pub fn banner(model: &str) -> Panel {
    let title = Line::from(Span::styled(
        TOOL_NAME,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    let subtitle = Line::from(Span::styled(
        format!("Model: {model}"),
        Style::default().add_modifier(Modifier::DIM),
    ));

    let content_width = clamp(title.width().max(subtitle.width()));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    Panel {
        header: Vec::new(),
        body: Paragraph::new(vec![title, subtitle]).block(block),
        body_width: Some(content_width.saturating_add(4)),
        body_height: 4,
    }
}

pub fn inputs(video_url: &str, language: &str, width: u16) -> Panel {
    let label = Style::default().fg(Color::Yellow);
    wrapped(
        vec![
            Line::default(),
            Line::from(vec![
                Span::styled("Video URL: ", label),
                Span::raw(video_url.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Output Language: ", label),
                Span::raw(language.to_string()),
            ]),
        ],
        width,
    )
}

pub fn summary(text: &str, width: u16) -> Panel {
    // two border columns and two columns of padding on each side
    let inner_width = width.saturating_sub(6) as usize;
    let body = render_lines(&parse_blocks(text), inner_width);
    let body_height = clamp(body.len()).saturating_add(4);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .padding(Padding::new(2, 2, 1, 1));

    Panel {
        header: vec![
            Line::default(),
            Line::from(Span::styled("Summary:", Style::default().fg(Color::Green))),
            Line::default(),
        ],
        body: Paragraph::new(body).block(block),
        body_width: None,
        body_height,
    }
}

pub fn saved(path: &Path, width: u16) -> Panel {
    wrapped(
        vec![
            Line::default(),
            Line::from(vec![
                Span::styled("Summary saved to: ", Style::default().fg(Color::Green)),
                Span::raw(path.display().to_string()),
            ]),
        ],
        width,
    )
}

fn wrapped(lines: Vec<Line<'static>>, width: u16) -> Panel {
    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    let body_height = clamp(body.line_count(width.max(1)));
    Panel {
        header: Vec::new(),
        body,
        body_width: None,
        body_height,
    }
}

fn clamp(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
