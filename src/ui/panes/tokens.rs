//! Token list pane rendering

use super::{border_style, clamp_scroll};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Keep `selected` inside the window that starts at `offset`
fn follow_selection(offset: &mut usize, selected: usize, visible_height: usize) {
    if selected < *offset {
        *offset = selected;
    } else if selected >= *offset + visible_height {
        *offset = selected + 1 - visible_height;
    }
}

/// Render the token list, highlighting the selected entry
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    token_lines: &[String],
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Tokens ({}) ", token_lines.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    follow_selection(scroll_offset, selected, visible_height);
    clamp_scroll(scroll_offset, token_lines.len(), visible_height);

    let items: Vec<ListItem> = token_lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let style = if idx == selected {
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(line.as_str()).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_selection() {
        let mut offset = 0;
        follow_selection(&mut offset, 12, 10);
        assert_eq!(offset, 3);

        follow_selection(&mut offset, 5, 10);
        assert_eq!(offset, 3);

        follow_selection(&mut offset, 1, 10);
        assert_eq!(offset, 1);
    }
}
