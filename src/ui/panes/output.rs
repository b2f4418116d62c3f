//! Generated C pane rendering

use super::{border_style, clamp_scroll};
use crate::parser::ParseError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Simple syntax highlighting for the emitted C
fn highlight_c_code(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut current_word = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Preprocessor lines
        if c == '#' && current_word.is_empty() && spans.is_empty() {
            spans.push(Span::styled(
                line.to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            break;
        }

        // Handle strings and character constants
        if c == '"' || c == '\'' {
            flush_word(&mut spans, &mut current_word, false);
            let mut end = i + 1;
            while end < chars.len() && chars[end] != c {
                if chars[end] == '\\' {
                    end += 2;
                } else {
                    end += 1;
                }
            }
            end = (end + 1).min(chars.len());
            spans.push(Span::styled(
                chars[i..end].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        // Handle non-alphanumeric (delimiters)
        if !c.is_alphanumeric() && c != '_' && c != '.' {
            flush_word(&mut spans, &mut current_word, c == '(');

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary), // Brackets
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut current_word, false);
    Line::from(spans)
}

fn flush_word(spans: &mut Vec<Span<'static>>, word: &mut String, is_function: bool) {
    if !word.is_empty() {
        let style = get_keyword_style(word, is_function);
        spans.push(Span::styled(std::mem::take(word), style));
    }
}

fn get_keyword_style(word: &str, is_function: bool) -> Style {
    match word {
        "int" | "char" | "void" | "float" | "double" | "long" | "short" | "unsigned" => {
            Style::default().fg(DEFAULT_THEME.type_name) // Types
        }
        "struct" | "typedef" | "return" | "if" | "else" | "while" | "for" | "switch" | "case"
        | "default" | "break" | "continue" | "sizeof" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD), // Keywords
        "NULL" => Style::default().fg(DEFAULT_THEME.number), // Constants
        _ if word.starts_with(|c: char| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_function => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg), // Variables/Identifiers
    }
}

/// Render the generated C, or the parse error when compilation stopped
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    output: &Result<String, ParseError>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let code = match output {
        Ok(code) => code,
        Err(err) => {
            let block = Block::default()
                .title(" Parse Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.error));
            let paragraph = Paragraph::new(err.to_string())
                .block(block)
                .style(
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                )
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let block = Block::default()
        .title(" Generated C ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines: Vec<&str> = code.lines().collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| highlight_c_code(line))
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_keeps_text() {
        let line = "    printf(\"ガ\\n\", x[1]);";
        let highlighted = highlight_c_code(line);
        let text: String = highlighted.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, line);
    }

    #[test]
    fn test_function_name_style() {
        let highlighted = highlight_c_code("int main(void) {");
        let main = highlighted
            .spans
            .iter()
            .find(|s| s.content == "main")
            .unwrap();
        assert_eq!(main.style.fg, Some(DEFAULT_THEME.function));
    }
}
