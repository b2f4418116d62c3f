//! Source code pane rendering with syntax highlighting
//!
//! This module renders the Grongigo script being inspected with word-level
//! highlighting and two line indicators.
//!
//! # Features
//!
//! - Highlighting for keywords, operator words, numerals, literals and comments
//! - The line of the selected token is shown with a lighter background
//! - The line a parse error points at is shown in the error colour
//! - Line numbering
//!
//! # Rendering
//!
//! Words are classified with the same tables the lexer uses. Each line is
//! highlighted on its own, so block comments spanning lines are not tracked.

use super::border_style;
use crate::parser::numeral::parse_numeral;
use crate::parser::tables::{self, is_katakana, KeywordClass};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Highlight one line of Grongigo source
fn highlight_source_code(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // String and character literals
        let close = match c {
            tables::STRING_OPEN => Some(tables::STRING_CLOSE),
            tables::CHAR_OPEN => Some(tables::CHAR_CLOSE),
            _ => None,
        };
        if let Some(close) = close {
            let mut end = i + 1;
            while end < chars.len() && chars[end] != close {
                end += 1;
            }
            end = (end + 1).min(chars.len());
            spans.push(Span::styled(
                chars[i..end].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        if is_katakana(c) {
            let mut end = i + 1;
            while end < chars.len()
                && (is_katakana(chars[end]) || chars[end] == tables::PROLONGED_SOUND_MARK)
            {
                end += 1;
            }
            let word: String = chars[i..end].iter().collect();

            if word.starts_with(tables::LINE_COMMENT) {
                spans.push(comment_span(chars[i..].iter().collect()));
                break;
            }
            if word.starts_with(tables::BLOCK_COMMENT_OPEN) {
                let rest: String = chars[i..].iter().collect();
                let len = match rest[tables::BLOCK_COMMENT_OPEN.len()..]
                    .find(tables::BLOCK_COMMENT_CLOSE)
                {
                    Some(pos) => {
                        tables::BLOCK_COMMENT_OPEN.len() + pos + tables::BLOCK_COMMENT_CLOSE.len()
                    }
                    None => rest.len(),
                };
                let comment = &rest[..len];
                i += comment.chars().count();
                spans.push(comment_span(comment.to_string()));
                continue;
            }

            push_word(&mut spans, &word);
            i = end;
            continue;
        }

        if c.is_ascii_digit() {
            let mut end = i + 1;
            while end < chars.len() && (chars[end].is_ascii_digit() || chars[end] == '.') {
                end += 1;
            }
            spans.push(Span::styled(
                chars[i..end].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.number),
            ));
            i = end;
            continue;
        }

        let style = match c {
            '(' | ')' | '[' | ']' | '{' | '}' | '（' | '）' | '［' | '］' | '｛' | '｝' => {
                Style::default().fg(DEFAULT_THEME.primary) // Brackets
            }
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
        i += 1;
    }

    Line::from(spans)
}

fn comment_span(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(DEFAULT_THEME.comment))
}

/// Style a katakana word, splitting off a leading bracket word
fn push_word(spans: &mut Vec<Span<'static>>, word: &str) {
    if let Some((bracket, _, _)) = tables::bracket_prefix(word) {
        spans.push(Span::styled(
            bracket.to_string(),
            Style::default().fg(DEFAULT_THEME.primary),
        ));
        let rest = &word[bracket.len()..];
        if !rest.is_empty() {
            push_word(spans, rest);
        }
        return;
    }
    spans.push(Span::styled(word.to_string(), get_word_style(word)));
}

fn get_word_style(word: &str) -> Style {
    if word == tables::FUNCTION_MARKER {
        return Style::default()
            .fg(DEFAULT_THEME.function)
            .add_modifier(Modifier::BOLD);
    }
    match tables::keyword(word) {
        Some((KeywordClass::Type, _)) => Style::default().fg(DEFAULT_THEME.type_name), // Types
        Some((KeywordClass::Control, _)) | Some((KeywordClass::Other, _)) => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD), // Keywords
        None if tables::operator(word).is_some() => Style::default().fg(DEFAULT_THEME.operator),
        None if parse_numeral(word).is_some() => Style::default().fg(DEFAULT_THEME.number),
        None => Style::default().fg(DEFAULT_THEME.fg), // Identifiers
    }
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    current_line: usize,
    error_line: Option<usize>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines: Vec<&str> = source_code.lines().collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1
    super::clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_error = error_line == Some(line_num);
            let is_current = line_num == current_line;
            let line_num_str = format!("{:4} ", line_num);

            let num_style = if is_error {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment) // Line numbers
            };

            let mut content_line = highlight_source_code(line);

            if is_error {
                // Error lines drop syntax colours entirely
                let error_style = Style::default()
                    .bg(DEFAULT_THEME.error)
                    .fg(ratatui::style::Color::White)
                    .add_modifier(Modifier::BOLD);
                for span in &mut content_line.spans {
                    span.style = error_style;
                }
            } else if is_current {
                let current_style = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content_line.spans {
                    span.style = span.style.patch(current_style);
                }
            }

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(content_line.spans);

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
