use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x61, 0xaf, 0xef);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const FOCUS_BORDER: Color = Color::Rgb(0xe5, 0xc0, 0x7b);
pub const IDLE_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const NUMBER_TEXT: Color = Color::Rgb(0x98, 0xc3, 0x79);
