use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, PRIMARY_TEXT, STATUS_ERROR};

const PANEL_WIDTH: u16 = 44;
const PANEL_HEIGHT: u16 = 7;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.value()), header);
    frame.render_widget(Footer::new().widget(app.focus(), footer), footer);

    let panel = centered_rect_by_size(body, PANEL_WIDTH, PANEL_HEIGHT);
    if panel.width == 0 || panel.height == 0 {
        return;
    }

    frame.render_widget(Clear, panel);
    frame.render_widget(counter_panel(app), panel);
}

fn counter_panel(app: &App) -> Paragraph<'static> {
    let count_line = Line::from(vec![
        Span::styled("Count: ", Style::default().fg(PRIMARY_TEXT)),
        Span::styled(
            app.value().to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ])
    .alignment(Alignment::Center);

    let mut field_style = Style::default().fg(PRIMARY_TEXT);
    if app.focus() == Focus::Input {
        field_style = field_style.bg(ACTIVE_HIGHLIGHT);
    }
    // Trailing block char stands in for the hardware cursor while editing.
    let field_text = if app.focus() == Focus::Input {
        format!("Set value: {}█", app.input())
    } else if app.input().is_empty() {
        "Set value: (press i)".to_string()
    } else {
        format!("Set value: {}", app.input())
    };
    let field_line = Line::from(Span::styled(field_text, field_style)).alignment(Alignment::Center);

    let status_line = match app.input_error() {
        Some(err) => Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(STATUS_ERROR),
        ))
        .alignment(Alignment::Center),
        None => Line::from(""),
    };

    let lines = vec![
        Line::from(""),
        count_line,
        Line::from(""),
        field_line,
        status_line,
    ];

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
