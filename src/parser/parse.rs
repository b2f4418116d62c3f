//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, cursor helpers, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: top-level functions, variables and parameter lists
//! - `statements`: Parsing statements (if, while, for, switch, etc.)
//! - `expressions`: Parsing expressions with one function per precedence level
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! The cursor only moves forward through [`Parser::advance`], one token of
//! lookahead at a time. The first unmet expectation aborts parsing.

use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, Token, TokenKind, TokenValue};
use thiserror::Error;

/// Parser error type, carrying the token the parser stopped at
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "Parse error at line {line}, column {column}: {message}",
    line = .token.line,
    column = .token.column
)]
pub struct ParseError {
    pub message: String,
    pub token: Token,
}

impl ParseError {
    pub fn new(message: impl Into<String>, token: Token) -> Self {
        Self {
            message: message.into(),
            token,
        }
    }

    pub fn location(&self) -> SourceLocation {
        self.token.location()
    }
}

/// Recursive descent parser for Grongigo token streams
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    /// Create a parser over a token sequence. A missing end-of-input token
    /// is supplied so the cursor always has something to stand on.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let (line, column) = tokens
                .last()
                .map(|t| (t.line, t.column))
                .unwrap_or((1, 1));
            tokens.push(Token::new(TokenKind::Eof, TokenValue::None, line, column));
        }

        Self {
            tokens,
            position: 0,
        }
    }

    /// Tokenize `source` and create a parser over the result.
    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source).tokenize())
    }

    /// Parse the entire program (top-level declarations)
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while !self.is_at_end() {
            let decl = self.parse_declaration()?;
            program.declarations.push(decl);
        }

        Ok(program)
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> &Token {
        // The last token is always Eof and advance never moves past it
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Current token has `kind` and string value `text`
    pub(crate) fn check_value(&self, kind: TokenKind, text: &str) -> bool {
        self.peek().is(kind, text)
    }

    /// Current token is an operator spelled as one of `ops`
    pub(crate) fn check_operator(&self, ops: &[&str]) -> bool {
        self.check(TokenKind::Operator)
            && self.peek().text().is_some_and(|op| ops.contains(&op))
    }

    pub(crate) fn check_control(&self, keyword: &str) -> bool {
        self.check_value(TokenKind::ControlKeyword, keyword)
    }

    /// Consume and return the current token
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.peek().clone())
    }

    pub(crate) fn expect_token(
        &mut self,
        kind: TokenKind,
        message: &str,
    ) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(format!("{}, found {}", message, self.peek())))
        }
    }

    pub(crate) fn expect_lparen(&mut self, ctx: &str) -> Result<Token, ParseError> {
        self.expect_token(TokenKind::OpenParen, &format!("Expected '(' {ctx}"))
    }

    pub(crate) fn expect_rparen(&mut self, ctx: &str) -> Result<Token, ParseError> {
        self.expect_token(TokenKind::CloseParen, &format!("Expected ')' {ctx}"))
    }

    pub(crate) fn expect_lbrace(&mut self, ctx: &str) -> Result<Token, ParseError> {
        self.expect_token(TokenKind::OpenBrace, &format!("Expected '{{' {ctx}"))
    }

    pub(crate) fn expect_rbrace(&mut self, ctx: &str) -> Result<Token, ParseError> {
        self.expect_token(TokenKind::CloseBrace, &format!("Expected '}}' {ctx}"))
    }

    /// String payload of a token the caller already checked
    pub(crate) fn token_text(token: &Token) -> String {
        token.text().unwrap_or_default().to_string()
    }

    /// A type keyword, returning its mapped C spelling
    pub(crate) fn expect_type(&mut self, ctx: &str) -> Result<String, ParseError> {
        let token = self.expect_token(TokenKind::TypeKeyword, &format!("Expected {ctx}"))?;
        Ok(Self::token_text(&token))
    }

    /// A name: an identifier, or a non-type non-control keyword used as one
    pub(crate) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if self.check(TokenKind::Identifier) || self.check(TokenKind::OtherKeyword) {
            let token = self.advance();
            Ok(Self::token_text(&token))
        } else {
            Err(self.error(format!("Expected identifier, found {}", self.peek())))
        }
    }

    /// Swallow one optional statement terminator
    pub(crate) fn skip_terminator(&mut self) {
        self.match_token(TokenKind::Semicolon);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<Program, ParseError> {
        Parser::from_source(source).parse_program()
    }

    #[test]
    fn test_parse_simple_function() {
        let program = parse("パザ ゲギグウ ゴロ バサ ザジレ ロゾス ゼゼソ ゴパシ").unwrap();

        assert_eq!(program.declarations.len(), 1);
        match &program.declarations[0] {
            Declaration::Function(func) => {
                assert_eq!(func.name, "main");
                assert_eq!(func.return_type, "int");
                assert!(func.params.is_empty());
                assert_eq!(func.body.statements.len(), 1);
                assert_eq!(func.location, SourceLocation::new(1, 4));
            }
            _ => panic!("Expected function definition"),
        }
    }

    #[test]
    fn test_empty_program() {
        let program = parse("  ゴゴ nothing here\n").unwrap();
        assert!(program.declarations.is_empty());
    }

    #[test]
    fn test_missing_eof_is_supplied() {
        let tokens = vec![Token::new(
            TokenKind::Identifier,
            TokenValue::Str("x".to_string()),
            1,
            1,
        )];
        let program = Parser::new(tokens).parse_program().unwrap();
        assert_eq!(program.declarations.len(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = parse("ゲギグウ ゲギグウ").unwrap_err();

        assert_eq!(err.location(), SourceLocation::new(1, 6));
        assert!(err
            .to_string()
            .starts_with("Parse error at line 1, column 6: Expected identifier"));
    }

    #[test]
    fn test_unknown_token_rejected() {
        let err = parse("＠").unwrap_err();
        assert_eq!(err.token.kind, TokenKind::Unknown);
    }
}
