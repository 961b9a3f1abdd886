use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Item,
    Quote,
    Code,
    TableRow,
    Rule,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub kind: BlockKind,
    pub depth: usize,
    pub text: String,
}

/// Flatten markdown into styled-by-kind blocks of plain text.
pub fn parse_blocks(markdown: &str) -> Vec<TextBlock> {
    let mut reader = BlockReader::default();
    for event in Parser::new_ext(markdown, pulldown_cmark::Options::ENABLE_TABLES) {
        reader.handle(event);
    }
    reader.flush();
    reader.blocks
}

/// Wrap the blocks to `width` columns, one style per block kind.
pub fn render_lines(blocks: &[TextBlock], width: usize) -> Vec<Line<'static>> {
    let width = width.max(10);
    let mut lines = Vec::new();
    let mut previous: Option<BlockKind> = None;

    for block in blocks {
        let grouped = matches!(
            (previous, block.kind),
            (Some(BlockKind::Item), BlockKind::Item)
                | (Some(BlockKind::TableRow), BlockKind::TableRow)
        );
        if previous.is_some() && !grouped {
            lines.push(Line::default());
        }
        previous = Some(block.kind);

        if block.kind == BlockKind::Rule {
            lines.push(Line::from(Span::styled(
                "─".repeat(width),
                Style::default().fg(Color::DarkGray),
            )));
            continue;
        }

        let indent = "  ".repeat(block.depth);
        let hanging = match block.kind {
            BlockKind::Item => format!("{indent}  "),
            BlockKind::Quote => format!("{indent}│ "),
            _ => indent.clone(),
        };
        let first = match block.kind {
            BlockKind::Quote => format!("{indent}│ "),
            _ => indent,
        };

        let options = textwrap::Options::new(width)
            .initial_indent(&first)
            .subsequent_indent(&hanging);
        let style = style_for(block.kind);

        if block.kind == BlockKind::Code {
            for raw in block.text.lines() {
                for piece in textwrap::wrap(raw, &options) {
                    lines.push(Line::from(Span::styled(piece.into_owned(), style)));
                }
            }
            continue;
        }

        for piece in textwrap::wrap(&block.text, &options) {
            lines.push(Line::from(Span::styled(piece.into_owned(), style)));
        }
    }

    lines
}

fn style_for(kind: BlockKind) -> Style {
    match kind {
        BlockKind::Heading => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        BlockKind::TableRow => Style::default().fg(Color::Cyan),
        BlockKind::Item => Style::default().fg(Color::Green),
        BlockKind::Quote => Style::default().add_modifier(Modifier::ITALIC),
        BlockKind::Code => Style::default().fg(Color::Gray),
        BlockKind::Rule | BlockKind::Text => Style::default(),
    }
}

#[derive(Default)]
struct BlockReader {
    blocks: Vec<TextBlock>,
    current: String,
    kind: Option<BlockKind>,
    lists: Vec<Option<u64>>,
    quote_depth: usize,
    in_table_row: bool,
}

impl BlockReader {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { .. }) => self.begin(BlockKind::Heading),
            Event::Start(Tag::Paragraph) => {
                if self.kind.is_none() {
                    self.begin(self.text_kind());
                }
            }
            Event::Start(Tag::BlockQuote(_)) => {
                self.flush();
                self.quote_depth += 1;
            }
            Event::End(TagEnd::BlockQuote(_)) => {
                self.flush();
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            Event::Start(Tag::CodeBlock(_)) => self.begin(BlockKind::Code),
            Event::Start(Tag::List(start)) => {
                self.flush();
                self.lists.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                self.flush();
                self.lists.pop();
            }
            Event::Start(Tag::Item) => {
                self.begin(BlockKind::Item);
                let bullet = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let bullet = format!("{n}. ");
                        *n += 1;
                        bullet
                    }
                    _ => "• ".to_string(),
                };
                self.current.push_str(&bullet);
            }
            Event::Start(Tag::TableHead) | Event::Start(Tag::TableRow) => {
                self.begin(BlockKind::TableRow);
                self.in_table_row = true;
            }
            Event::Start(Tag::TableCell) => self.current.push_str("| "),
            Event::End(TagEnd::TableCell) => self.current.push(' '),
            Event::End(TagEnd::TableHead) | Event::End(TagEnd::TableRow) => {
                self.current.push('|');
                self.in_table_row = false;
                self.flush();
            }
            Event::End(TagEnd::Heading(_))
            | Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::CodeBlock)
            | Event::End(TagEnd::Item) => self.flush(),
            Event::Text(text) | Event::Code(text) => {
                if self.kind.is_none() {
                    self.begin(self.text_kind());
                }
                self.current.push_str(&text);
            }
            Event::SoftBreak => self.current.push(' '),
            Event::HardBreak => self.current.push('\n'),
            Event::Rule => {
                self.flush();
                self.blocks.push(TextBlock {
                    kind: BlockKind::Rule,
                    depth: 0,
                    text: String::new(),
                });
            }
            _ => {}
        }
    }

    fn text_kind(&self) -> BlockKind {
        if self.quote_depth > 0 {
            BlockKind::Quote
        } else {
            BlockKind::Text
        }
    }

    fn begin(&mut self, kind: BlockKind) {
        self.flush();
        self.kind = Some(kind);
    }

    fn flush(&mut self) {
        if self.in_table_row {
            return;
        }
        let kind = self.kind.take();
        let text = std::mem::take(&mut self.current);
        let trimmed = text.trim_end();
        let Some(kind) = kind else {
            return;
        };
        if trimmed.is_empty() || trimmed == "•" {
            return;
        }
        self.blocks.push(TextBlock {
            kind,
            depth: self.lists.len().saturating_sub(1) + self.quote_depth,
            text: trimmed.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{BlockKind, parse_blocks, render_lines};

    fn kinds(markdown: &str) -> Vec<BlockKind> {
        parse_blocks(markdown).into_iter().map(|b| b.kind).collect()
    }

    #[test]
    fn splits_headings_paragraphs_and_lists() {
        let blocks = parse_blocks("## Main topic\n\nThe video covers **Rust**.\n\n- first\n- second\n");
        assert_eq!(
            blocks.iter().map(|b| b.kind).collect::<Vec<_>>(),
            vec![
                BlockKind::Heading,
                BlockKind::Text,
                BlockKind::Item,
                BlockKind::Item
            ]
        );
        assert_eq!(blocks[0].text, "Main topic");
        assert_eq!(blocks[1].text, "The video covers Rust.");
        assert_eq!(blocks[2].text, "• first");
    }

    #[test]
    fn numbers_ordered_lists() {
        let blocks = parse_blocks("1. one\n2. two\n");
        assert_eq!(blocks[0].text, "1. one");
        assert_eq!(blocks[1].text, "2. two");
    }

    #[test]
    fn nested_items_are_indented() {
        let blocks = parse_blocks("- outer\n  - inner\n");
        assert_eq!(blocks[0].depth, 0);
        assert_eq!(blocks[1].depth, 1);
        assert_eq!(blocks[1].text, "• inner");
    }

    #[test]
    fn tables_become_pipe_rows() {
        let blocks = parse_blocks("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert_eq!(kinds("| a | b |\n|---|---|\n| 1 | 2 |\n"), vec![BlockKind::TableRow; 2]);
        assert_eq!(blocks[1].text, "| 1 | 2 |");
    }

    #[test]
    fn wraps_to_width_with_blank_line_between_blocks() {
        let blocks = parse_blocks("# Title\n\nalpha beta gamma delta epsilon\n");
        let lines = render_lines(&blocks, 12);
        let rendered: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(rendered[0], "Title");
        assert_eq!(rendered[1], "");
        assert!(rendered[2..].iter().all(|l| l.chars().count() <= 12));
        assert_eq!(rendered[2..].join(" "), "alpha beta gamma delta epsilon");
    }

    #[test]
    fn list_items_stay_together() {
        let lines = render_lines(&parse_blocks("- a\n- b\n"), 40);
        assert_eq!(lines.len(), 2);
    }
}
