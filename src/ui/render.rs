use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{incrementer_regions, layout_regions};
use crate::ui::theme::{ACCENT, FOCUS_BORDER, HEADER_TEXT, IDLE_BORDER, NUMBER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub const BUTTON_LABEL: &str = "Increment!";
pub const INPUT_LABEL: &str = "Increment by: ";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);

    let props = app.props();
    let regions = incrementer_regions(body);

    let number = Paragraph::new(Line::from(Span::styled(
        props.number.to_string(),
        Style::default().fg(NUMBER_TEXT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(control_block(false));
    frame.render_widget(number, regions.number);

    let button_focused = app.focus() == Focus::Button;
    let mut button_style = Style::default().fg(ACCENT);
    if button_focused {
        button_style = button_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    let button = Paragraph::new(Line::from(Span::styled(BUTTON_LABEL, button_style)))
        .alignment(Alignment::Center)
        .block(control_block(button_focused));
    frame.render_widget(button, regions.button);

    let input_focused = app.focus() == Focus::IncrementBy;
    let input = Paragraph::new(Line::from(vec![
        Span::styled(INPUT_LABEL, Style::default().fg(HEADER_TEXT)),
        Span::styled(
            app.increment_text().to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(control_block(input_focused));
    frame.render_widget(input, regions.input);

    if input_focused {
        place_input_cursor(frame, regions.input, app.increment_text());
    }

    let footer_widget = Footer::new(app.focus());
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn control_block(focused: bool) -> Block<'static> {
    let color = if focused { FOCUS_BORDER } else { IDLE_BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn place_input_cursor(frame: &mut Frame<'_>, input: Rect, text: &str) {
    if input.width < 3 || input.height < 3 {
        return;
    }
    let offset = (INPUT_LABEL.chars().count() + text.chars().count()) as u16;
    let max_x = input.x + input.width - 2;
    let x = (input.x + 1).saturating_add(offset).min(max_x);
    frame.set_cursor_position((x, input.y + 1));
}
