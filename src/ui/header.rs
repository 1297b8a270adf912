use crate::ui::theme::{ACCENT, GLOBAL_BORDER};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Number Incrementer";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let line = Line::from(Span::styled(TITLE, title_style));

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
