use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::config::{GLYPH_CELL, Theme};
use crate::game::GameState;
use crate::grid::{GridSize, Position};

/// Renders the full game frame from immutable state.
///
/// The apple is painted before the snake so that a snake segment covers a
/// coincident apple, matching the board's draw order semantics.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let block = Block::bordered()
        .title(" snake ")
        .border_style(Style::new().fg(theme.border).bg(theme.background))
        .style(Style::new().bg(theme.background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    draw_cell(frame, inner, state.bounds(), state.apple.position, theme.apple);
    for segment in state.snake.segments() {
        draw_cell(frame, inner, state.bounds(), *segment, theme.snake);
    }
}

/// Paints one logical cell as a solid colored block.
fn draw_cell(
    frame: &mut Frame<'_>,
    inner: Rect,
    bounds: GridSize,
    position: Position,
    color: Color,
) {
    let Some((x, y)) = cell_to_screen(inner, bounds, position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_CELL, Style::new().fg(color));
}

/// Maps a logical cell to terminal coordinates inside the play area.
///
/// Cells that fall outside the visible area (undersized terminal) are
/// reported as `None` and simply not drawn.
fn cell_to_screen(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
