use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    focus: Focus,
}

impl Footer {
    pub fn new(focus: Focus) -> Self {
        Self { focus }
    }

    /// Key hints for the focused control.
    pub fn hints(&self) -> &'static str {
        match self.focus {
            Focus::Button => " Enter/Space: Increment │ Tab: Edit step │ q: Quit",
            Focus::IncrementBy => " Type a number │ ↑/↓: Step │ Enter: Done │ Tab: Button",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{VERSION} ");

        // Char count: hints contain box-drawing glyphs
        let used = hints.chars().count() + version.chars().count();
        let padding = (area.width.saturating_sub(2) as usize).saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::raw(hints),
            Span::raw(" ".repeat(padding)),
            Span::raw(version),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_focus() {
        assert!(Footer::new(Focus::Button).hints().contains("Increment"));
        assert!(Footer::new(Focus::IncrementBy).hints().contains("Step"));
    }
}
