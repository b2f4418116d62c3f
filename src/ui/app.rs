//! Main TUI application state and logic

use crate::dump::{format_ast, format_token};
use crate::parser::lexer::Token;
use crate::parser::ParseError;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Lines moved by PgUp/PgDn
const PAGE_SIZE: usize = 10;

/// Source lines kept above the selected token's line
const CONTEXT_LINES: usize = 3;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Ast,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> tokens -> ast -> output)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Ast,
            FocusedPane::Ast => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Ast => FocusedPane::Tokens,
            FocusedPane::Output => FocusedPane::Ast,
        }
    }
}

/// The main application state
pub struct App {
    /// The script being inspected
    pub source_code: String,

    /// Token listing, one entry per token
    pub tokens: Vec<Token>,
    pub token_lines: Vec<String>,

    /// Tree listing, empty when parsing failed
    pub ast_lines: Vec<String>,

    /// Generated C, or the error that stopped the pipeline
    pub output: Result<String, ParseError>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index of the selected token
    pub selected_token: usize,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub token_scroll: usize,
    pub ast_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Run the pipeline over `source_code` and keep every stage for display
    pub fn new(source_code: String) -> Self {
        let tokens = crate::tokenize(&source_code);
        let token_lines = tokens.iter().map(format_token).collect();

        let (ast_lines, output) = match crate::parse(tokens.clone()) {
            Ok(program) => (
                format_ast(&program).lines().map(str::to_string).collect(),
                Ok(crate::generate(&program)),
            ),
            Err(err) => (Vec::new(), Err(err)),
        };

        // Start on the offending token so the error is in view
        let selected_token = match &output {
            Ok(_) => 0,
            Err(err) => tokens
                .iter()
                .position(|t| t == &err.token)
                .unwrap_or_default(),
        };

        let source_scroll = match &output {
            Ok(_) => 0,
            Err(err) => (err.token.line as usize).saturating_sub(CONTEXT_LINES + 1),
        };

        let status_message = match &output {
            Ok(_) => format!("Compiled {} tokens", tokens.len()),
            Err(err) => err.to_string(),
        };

        App {
            source_code,
            tokens,
            token_lines,
            ast_lines,
            output,
            focused_pane: FocusedPane::Source,
            selected_token,
            source_scroll,
            token_scroll: 0,
            ast_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Line of the selected token, 1-based
    pub fn selected_line(&self) -> usize {
        self.tokens
            .get(self.selected_token)
            .map(|t| t.line as usize)
            .unwrap_or(0)
    }

    /// Line the parse error points at, if any
    pub fn error_line(&self) -> Option<usize> {
        self.output.as_ref().err().map(|e| e.token.line as usize)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Create layout: 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(pane_area);

        // Left column: Source (top) | Tokens (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        // Right column: Output (top) | AST (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        let selected_line = self.selected_line();
        let error_line = self.error_line();

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            selected_line,
            error_line,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            left_rows[1],
            &self.token_lines,
            self.selected_token,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.token_scroll,
        );

        super::panes::render_output_pane(
            frame,
            right_rows[0],
            &self.output,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_ast_pane(
            frame,
            right_rows[1],
            &self.ast_lines,
            self.focused_pane == FocusedPane::Ast,
            &mut self.ast_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.focused_pane,
            self.output.is_err(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => self.move_by(-1),
            KeyCode::Down => self.move_by(1),
            KeyCode::PageUp => self.move_by(-(PAGE_SIZE as isize)),
            KeyCode::PageDown => self.move_by(PAGE_SIZE as isize),
            KeyCode::Home => self.move_by(isize::MIN),
            KeyCode::End => self.move_by(isize::MAX),
            _ => {}
        }
    }

    /// Scroll the focused pane, or move the token selection
    fn move_by(&mut self, delta: isize) {
        match self.focused_pane {
            FocusedPane::Tokens => {
                let last = self.tokens.len().saturating_sub(1);
                self.selected_token = offset(self.selected_token, delta).min(last);
                if let Some(line) = self.token_lines.get(self.selected_token) {
                    self.status_message = line.clone();
                }
                self.source_scroll = self.selected_line().saturating_sub(CONTEXT_LINES + 1);
            }
            // Panes clamp their own offsets against the visible height
            FocusedPane::Source => self.source_scroll = offset(self.source_scroll, delta),
            FocusedPane::Ast => self.ast_scroll = offset(self.ast_scroll, delta),
            FocusedPane::Output => self.output_scroll = offset(self.output_scroll, delta),
        }
    }
}

fn offset(value: usize, delta: isize) -> usize {
    if delta < 0 {
        value.saturating_sub(delta.unsigned_abs())
    } else {
        value.saturating_add(delta as usize)
    }
}
