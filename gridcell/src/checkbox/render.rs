//! Checkbox cell rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style as RatatuiStyle};
use ratatui::widgets::Paragraph;

use super::CheckboxStyle;

/// Render a checkbox cell.
pub fn render_checkbox_cell(
    frame: &mut Frame,
    checked: bool,
    style: CheckboxStyle,
    base: RatatuiStyle,
    focused: bool,
    area: Rect,
) {
    let indicator = if checked {
        style.checked_char
    } else {
        style.unchecked_char
    };

    // Focused state gets a subtle background highlight
    let cell_style = if focused {
        base.bg(Color::Rgb(80, 80, 100)).add_modifier(Modifier::BOLD)
    } else {
        base
    };

    let paragraph = Paragraph::new(indicator.to_string())
        .alignment(style.align)
        .style(cell_style);
    frame.render_widget(paragraph, area);
}
