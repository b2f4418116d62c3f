//! Syntax tree pane rendering

use super::{border_style, clamp_scroll};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Colour the node label, leaving indentation and payload plain
fn highlight_node(line: &str) -> Line<'_> {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];
    let (label, rest) = match trimmed.find(':') {
        Some(pos) => trimmed.split_at(pos),
        None => (trimmed, ""),
    };

    Line::from(vec![
        Span::styled(indent, Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(label, Style::default().fg(DEFAULT_THEME.keyword)),
        Span::styled(rest, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Render the AST listing
pub fn render_ast_pane(
    frame: &mut Frame,
    area: Rect,
    ast_lines: &[String],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" AST ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if ast_lines.is_empty() {
        let paragraph = Paragraph::new("(no tree)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, ast_lines.len(), visible_height);

    let lines: Vec<Line> = ast_lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| highlight_node(line))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_node_splits_label() {
        let line = highlight_node("    BinaryExpr: +");
        let parts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["    ", "BinaryExpr", ": +"]);

        let line = highlight_node("  BlockStmt");
        let parts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["  ", "BlockStmt", ""]);
    }
}
