use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the column holding the number, button and input.
const CONTROL_WIDTH: u16 = 32;
const BUTTON_WIDTH: u16 = 16;
const CONTROL_HEIGHT: u16 = 3;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Screen areas of the incrementer widgets inside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementerRegions {
    pub number: Rect,
    pub button: Rect,
    pub input: Rect,
}

pub fn incrementer_regions(body: Rect) -> IncrementerRegions {
    let column = centered_rect_by_size(body, CONTROL_WIDTH, CONTROL_HEIGHT * 3 + 2);
    let [number, _, button, _, input] = Layout::vertical([
        Constraint::Length(CONTROL_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(CONTROL_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(CONTROL_HEIGHT),
    ])
    .areas(column);

    IncrementerRegions {
        number,
        button: centered_rect_by_size(button, BUTTON_WIDTH, CONTROL_HEIGHT),
        input,
    }
}
