//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! one module per pane.
//!
//! # Pane Modules
//!
//! - [`source`]: Grongigo source with highlighting, selected line and error line
//! - [`tokens`]: Token stream as a selectable list
//! - [`ast`]: Indented syntax tree listing
//! - [`output`]: Generated C with highlighting, or the parse error
//! - [`status`]: Status bar with keybindings and pipeline state
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function. Panes receive their
//! scroll offset by reference and clamp it against the height they are given.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

pub mod ast;
pub mod output;
pub mod source;
pub mod status;
pub mod tokens;

// Re-export render functions for convenience
pub use ast::render_ast_pane;
pub use output::render_output_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;

/// Border style shared by every pane
fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp a scroll offset only if content exceeds the visible area
fn clamp_scroll(offset: &mut usize, total: usize, visible_height: usize) {
    if total > visible_height {
        let max_scroll = total - visible_height;
        *offset = (*offset).min(max_scroll);
    } else {
        *offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = 50;
        clamp_scroll(&mut offset, 30, 10);
        assert_eq!(offset, 20);

        clamp_scroll(&mut offset, 5, 10);
        assert_eq!(offset, 0);

        let mut offset = 3;
        clamp_scroll(&mut offset, 30, 10);
        assert_eq!(offset, 3);
    }
}
