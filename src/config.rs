use ratatui::style::Color;

/// Playing-field width in cells.
pub const GRID_WIDTH: u16 = 32;

/// Playing-field height in cells.
pub const GRID_HEIGHT: u16 = 24;

/// Simulation ticks per second when no rate is given on the command line.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 10;

/// Solid block glyph used for every board entity.
pub const GLYPH_CELL: &str = "█";

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    /// Background color for the play area and surrounding frame.
    pub background: Color,
    /// Frame color around the play area.
    pub border: Color,
    pub apple: Color,
    pub snake: Color,
}

/// Green snake and red apple on black, framed in light cyan.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    background: Color::Black,
    border: Color::Rgb(93, 216, 228),
    apple: Color::Red,
    snake: Color::Green,
};
