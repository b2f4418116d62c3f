//! Lexer (tokenizer) for Grongigo source text
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Words are not delimited by spaces alone: a katakana run is classified by
//! longest-prefix match against the bracket words, then by exact match against
//! the keyword and operator tables, then as a numeral, and finally as an
//! identifier.
//!
//! Tokenizing never fails. Characters outside the script's alphabet become
//! [`TokenKind::Unknown`] tokens for the parser to reject.

use super::ast::SourceLocation;
use super::numeral::parse_numeral;
use super::tables::{self, is_katakana};
use std::fmt;

/// Token categories produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    TypeKeyword,
    ControlKeyword,
    OtherKeyword,
    Operator,
    Number,
    Identifier,
    StringLiteral,
    CharLiteral,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Comma,
    Semicolon,
    Colon,
    Eof,
    Unknown,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::TypeKeyword => "type_keyword",
            TokenKind::ControlKeyword => "control_keyword",
            TokenKind::OtherKeyword => "other_keyword",
            TokenKind::Operator => "operator",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string_literal",
            TokenKind::CharLiteral => "char_literal",
            TokenKind::OpenBrace => "open_brace",
            TokenKind::CloseBrace => "close_brace",
            TokenKind::OpenParen => "open_paren",
            TokenKind::CloseParen => "close_paren",
            TokenKind::OpenBracket => "open_bracket",
            TokenKind::CloseBracket => "close_bracket",
            TokenKind::Comma => "comma",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Colon => "colon",
            TokenKind::Eof => "eof",
            TokenKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload carried by a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Str(String),
    Int(i64),
    Float(f64),
    None,
}

impl TokenValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Str(s) => write!(f, "{:?}", s),
            TokenValue::Int(n) => write!(f, "{}", n),
            TokenValue::Float(x) => write!(f, "{}", format_float(*x)),
            TokenValue::None => write!(f, "none"),
        }
    }
}

/// Render a float the way the generated C expects it: always with a
/// fractional part.
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// A classified lexical unit with its 1-based source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, line: u32, column: u32) -> Self {
        Self {
            kind,
            value,
            line,
            column,
        }
    }

    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    /// String payload, if any.
    pub fn text(&self) -> Option<&str> {
        self.value.as_str()
    }

    /// Whether this token has `kind` and the string value `text`.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text() == Some(text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            kind => write!(f, "{} {}", kind, self.value),
        }
    }
}

/// Lexer for Grongigo source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input. The last token is always [`TokenKind::Eof`].
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_at_end() {
                tokens.push(Token::new(
                    TokenKind::Eof,
                    TokenValue::None,
                    self.line,
                    self.column,
                ));
                break;
            }

            tokens.push(self.next_token());
        }

        tokens
    }

    /// Get next token; the caller guarantees input remains
    fn next_token(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let Some(ch) = self.peek() else {
            return Token::new(TokenKind::Eof, TokenValue::None, line, column);
        };

        let punctuation = match ch {
            '、' | ',' => Some((TokenKind::Comma, ",")),
            '。' | ';' => Some((TokenKind::Semicolon, ";")),
            '：' | ':' => Some((TokenKind::Colon, ":")),
            '(' | '（' => Some((TokenKind::OpenParen, "(")),
            ')' | '）' => Some((TokenKind::CloseParen, ")")),
            '[' | '［' => Some((TokenKind::OpenBracket, "[")),
            ']' | '］' => Some((TokenKind::CloseBracket, "]")),
            '{' | '｛' => Some((TokenKind::OpenBrace, "{")),
            '}' | '｝' => Some((TokenKind::CloseBrace, "}")),
            _ => None,
        };
        if let Some((kind, text)) = punctuation {
            self.advance();
            return Token::new(kind, TokenValue::Str(text.to_string()), line, column);
        }

        match ch {
            tables::STRING_OPEN => self.delimited_literal(
                tables::STRING_CLOSE,
                TokenKind::StringLiteral,
                line,
                column,
            ),
            tables::CHAR_OPEN => {
                self.delimited_literal(tables::CHAR_CLOSE, TokenKind::CharLiteral, line, column)
            }
            c if is_katakana(c) => self.katakana_word(line, column),
            c if c.is_ascii_alphabetic() || c == '_' => self.ascii_identifier(line, column),
            c if c.is_ascii_digit() => self.decimal_number(line, column),
            c => {
                self.advance();
                Token::new(TokenKind::Unknown, TokenValue::Str(c.to_string()), line, column)
            }
        }
    }

    /// Raw characters up to `close` or end of input, no escape processing
    fn delimited_literal(&mut self, close: char, kind: TokenKind, line: u32, column: u32) -> Token {
        self.advance(); // opening delimiter
        let mut value = String::new();

        while let Some(ch) = self.peek() {
            if ch == close {
                break;
            }
            value.push(ch);
            self.advance();
        }
        if self.peek() == Some(close) {
            self.advance();
        }

        Token::new(kind, TokenValue::Str(value), line, column)
    }

    fn katakana_word(&mut self, line: u32, column: u32) -> Token {
        let start = self.position;
        while let Some(ch) = self.peek() {
            if is_katakana(ch) || ch == tables::PROLONGED_SOUND_MARK {
                self.advance();
            } else {
                break;
            }
        }

        let word: String = self.input[start..self.position].iter().collect();
        let (kind, value) = self.classify_word(word);
        Token::new(kind, value, line, column)
    }

    /// Classify a scanned katakana run
    fn classify_word(&mut self, word: String) -> (TokenKind, TokenValue) {
        if let Some((keyword, kind, text)) = tables::bracket_prefix(&word) {
            let excess = word.chars().count() - keyword.chars().count();
            self.rewind(excess);
            return (kind, TokenValue::Str(text.to_string()));
        }

        if let Some((class, mapped)) = tables::keyword(&word) {
            let value = if mapped.is_empty() {
                word
            } else {
                mapped.to_string()
            };
            return (class.token_kind(), TokenValue::Str(value));
        }

        if let Some(op) = tables::operator(&word) {
            return (TokenKind::Operator, TokenValue::Str(op.to_string()));
        }

        if let Some(number) = parse_numeral(&word) {
            return (TokenKind::Number, TokenValue::Int(number));
        }

        (TokenKind::Identifier, TokenValue::Str(word))
    }

    fn ascii_identifier(&mut self, line: u32, column: u32) -> Token {
        let mut ident = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        Token::new(TokenKind::Identifier, TokenValue::Str(ident), line, column)
    }

    /// Digits with an optional decimal point
    fn decimal_number(&mut self, line: u32, column: u32) -> Token {
        let mut num_str = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() || ch == '.' {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let value = if num_str.contains('.') {
            TokenValue::Float(parse_float_prefix(&num_str))
        } else {
            match num_str.parse::<i64>() {
                Ok(n) => TokenValue::Int(n),
                Err(_) => TokenValue::Float(parse_float_prefix(&num_str)),
            }
        };

        Token::new(TokenKind::Number, value, line, column)
    }

    /// Skip whitespace and comments
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while matches!(self.peek(), Some(' ' | '\t' | '\r')) {
                self.advance();
            }

            if self.peek() == Some('\n') {
                self.advance();
                continue;
            }

            if self.starts_with(tables::LINE_COMMENT) {
                self.skip_line_comment();
                continue;
            }

            if self.starts_with(tables::BLOCK_COMMENT_OPEN) {
                self.skip_block_comment();
                continue;
            }

            break;
        }
    }

    /// Skip a line comment, leaving the line break for the caller
    fn skip_line_comment(&mut self) {
        self.advance_by(tables::LINE_COMMENT.chars().count());
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Skip a block comment; an unterminated one runs to end of input
    fn skip_block_comment(&mut self) {
        self.advance_by(tables::BLOCK_COMMENT_OPEN.chars().count());
        while !self.is_at_end() {
            if self.starts_with(tables::BLOCK_COMMENT_CLOSE) {
                self.advance_by(tables::BLOCK_COMMENT_CLOSE.chars().count());
                return;
            }
            self.advance();
        }
    }

    fn starts_with(&self, pattern: &str) -> bool {
        let mut pos = self.position;
        for expected in pattern.chars() {
            if self.input.get(pos) != Some(&expected) {
                return false;
            }
            pos += 1;
        }
        true
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Give back `n` characters of the current line
    fn rewind(&mut self, n: usize) {
        self.position -= n;
        self.column -= n as u32;
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

/// Longest leading float: `1.5.2` reads as `1.5`
fn parse_float_prefix(text: &str) -> f64 {
    let mut end = text.len();
    if let Some(first_dot) = text.find('.') {
        if let Some(second) = text[first_dot + 1..].find('.') {
            end = first_dot + 1 + second;
        }
    }
    text[..end].parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).tokenize().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = Lexer::new("パザ ゲギグウ ゴロ バサ ザジレ ロゾス ゼゼソ ゴパシ").tokenize();

        assert_eq!(tokens[0].kind, TokenKind::OtherKeyword);
        assert_eq!(tokens[0].text(), Some("パザ"));
        assert!(tokens[1].is(TokenKind::TypeKeyword, "int"));
        assert!(tokens[2].is(TokenKind::OtherKeyword, "main"));
        assert!(tokens[3].is(TokenKind::TypeKeyword, "void"));
        assert_eq!(tokens[4].kind, TokenKind::OpenBrace);
        assert!(tokens[5].is(TokenKind::ControlKeyword, "return"));
        assert_eq!(tokens[6].value, TokenValue::Int(0));
        assert_eq!(tokens[7].kind, TokenKind::CloseBrace);
        assert_eq!(tokens[8].kind, TokenKind::Eof);
    }

    #[test]
    fn test_bracket_word_rewinds_excess() {
        let tokens = Lexer::new("ザジレジョヂザギゲギグウ").tokenize();

        assert_eq!(tokens[0].kind, TokenKind::OpenParen);
        assert!(tokens[1].is(TokenKind::TypeKeyword, "int"));
        assert_eq!(tokens[1].column, 9);
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            kinds("ゲギグウ ゴゴ これはコメント\nバサ"),
            vec![TokenKind::TypeKeyword, TokenKind::TypeKeyword, TokenKind::Eof]
        );
        assert_eq!(
            kinds("ゲギグウ ゴビ コメント\n続き ビゴ バサ"),
            vec![TokenKind::TypeKeyword, TokenKind::TypeKeyword, TokenKind::Eof]
        );
    }

    #[test]
    fn test_unterminated_block_comment_runs_to_end() {
        assert_eq!(kinds("ゲギグウ ゴビ ずっと"), vec![TokenKind::TypeKeyword, TokenKind::Eof]);
    }

    #[test]
    fn test_literals_are_raw() {
        let tokens = Lexer::new("「a\\nb」『』「open").tokenize();

        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].text(), Some("a\\nb"));
        assert_eq!(tokens[1].kind, TokenKind::CharLiteral);
        assert_eq!(tokens[1].text(), Some(""));
        assert_eq!(tokens[2].text(), Some("open"));
        assert_eq!(tokens[3].kind, TokenKind::Eof);
    }

    #[test]
    fn test_decimal_numbers() {
        let tokens = Lexer::new("123 4.5 6.7.8").tokenize();

        assert_eq!(tokens[0].value, TokenValue::Int(123));
        assert_eq!(tokens[1].value, TokenValue::Float(4.5));
        assert_eq!(tokens[2].value, TokenValue::Float(6.7));
    }

    #[test]
    fn test_unknown_characters() {
        let tokens = Lexer::new("ゲギグウ ＠").tokenize();

        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        assert_eq!(tokens[1].text(), Some("＠"));
    }

    #[test]
    fn test_positions() {
        let tokens = Lexer::new("ゲギグウ バサ\n  x").tokenize();

        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 6));
        assert_eq!((tokens[2].line, tokens[2].column), (2, 3));
    }

    #[test]
    fn test_float_formatting() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(2.5), "2.5");
    }
}
