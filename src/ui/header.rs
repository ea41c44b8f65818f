use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, PRIMARY_TEXT, SEPARATOR};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, value: i64) -> Paragraph<'static> {
        let text_style = Style::default().fg(PRIMARY_TEXT);
        let separator_style = Style::default().fg(SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  tally", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("count: {}", value), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
