//! Expression parsing implementation
//!
//! This module handles parsing of Grongigo expressions by recursive descent,
//! one function per precedence level.
//!
//! # Supported Expressions
//!
//! - Literals: numbers, characters, strings
//! - Identifiers, and keywords standing in for identifiers (`ゴロ`, `ジョウジ`)
//! - Binary operators: arithmetic, comparison, logical
//! - Prefix unary operators: `!`, `-`, `++`, `--`
//! - Postfix: `()`, `[]`, `++`, `--`
//! - Assignment: `=`
//!
//! # Precedence
//!
//! From loosest to tightest:
//!
//! ```text
//! =            right-associative
//! ||
//! &&
//! == !=
//! < > <= >=
//! + -
//! * / %
//! ! - ++ --    prefix
//! () [] ++ --  postfix
//! ```
//!
//! Every binary level is left-associative. Composite nodes take the location
//! of their left operand; prefix operators take their own.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::{TokenKind, TokenValue};
use crate::parser::parse::{ParseError, Parser};

const EQUALITY_OPS: &[&str] = &["==", "!="];
const RELATIONAL_OPS: &[&str] = &["<", ">", "<=", ">="];
const ADDITIVE_OPS: &[&str] = &["+", "-"];
const MULTIPLICATIVE_OPS: &[&str] = &["*", "/", "%"];
const PREFIX_OPS: &[&str] = &["!", "-", "++", "--"];
const POSTFIX_OPS: &[&str] = &["++", "--"];

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment()
    }

    /// Parse assignment (right-associative). The target is not validated.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_logical_or()?;

        if self.check_operator(&["="]) {
            self.advance();
            let value = self.parse_assignment()?;
            let location = expr.location();
            return Ok(Expr::Assign {
                target: Box::new(expr),
                value: Box::new(value),
                location,
            });
        }

        Ok(expr)
    }

    fn parse_logical_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(&["||"], Self::parse_logical_and)
    }

    fn parse_logical_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(&["&&"], Self::parse_equality)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(EQUALITY_OPS, Self::parse_relational)
    }

    fn parse_relational(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(RELATIONAL_OPS, Self::parse_additive)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(ADDITIVE_OPS, Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(MULTIPLICATIVE_OPS, Self::parse_unary)
    }

    /// One left-associative binary level: `next (op next)*`
    fn parse_binary_level(
        &mut self,
        ops: &[&str],
        next: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut left = next(self)?;

        while self.check_operator(ops) {
            let op = Self::token_text(&self.advance());
            let right = next(self)?;
            let location = left.location();
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
                location,
            };
        }

        Ok(left)
    }

    /// Parse prefix unary operators (right-recursive)
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.check_operator(PREFIX_OPS) {
            let token = self.advance();
            let operand = self.parse_unary()?;
            return Ok(Expr::Unary {
                op: Self::token_text(&token),
                operand: Box::new(operand),
                prefix: true,
                location: token.location(),
            });
        }

        self.parse_postfix()
    }

    /// Parse call, index and postfix increment/decrement, chained left to right
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            let location = expr.location();

            if self.match_token(TokenKind::OpenParen) {
                let mut args = Vec::new();
                if !self.check(TokenKind::CloseParen) {
                    loop {
                        args.push(self.parse_expression()?);
                        if !self.match_token(TokenKind::Comma) {
                            break;
                        }
                    }
                }
                self.expect_rparen("after arguments")?;

                expr = Expr::Call {
                    callee: Box::new(expr),
                    args,
                    location,
                };
            } else if self.match_token(TokenKind::OpenBracket) {
                let index = self.parse_expression()?;
                self.expect_token(TokenKind::CloseBracket, "Expected ']' after index")?;

                expr = Expr::Index {
                    array: Box::new(expr),
                    index: Box::new(index),
                    location,
                };
            } else if self.check_operator(POSTFIX_OPS) {
                let op = Self::token_text(&self.advance());
                expr = Expr::Unary {
                    op,
                    operand: Box::new(expr),
                    prefix: false,
                    location,
                };
            } else {
                break;
            }
        }

        Ok(expr)
    }

    /// Parse primary expression
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let loc = self.current_location();

        match self.peek().kind {
            TokenKind::Number => {
                let token = self.advance();
                let value = match token.value {
                    TokenValue::Int(n) => Number::Int(n),
                    TokenValue::Float(x) => Number::Float(x),
                    _ => return Err(ParseError::new("Malformed number literal", token)),
                };
                Ok(Expr::Number(value, loc))
            }
            TokenKind::StringLiteral => {
                let token = self.advance();
                Ok(Expr::StringLiteral(Self::token_text(&token), loc))
            }
            TokenKind::CharLiteral => {
                let token = self.advance();
                Ok(Expr::CharLiteral(Self::token_text(&token), loc))
            }
            // Keywords double as names: `ゴロ` is main, `ジョウジ` is printf
            TokenKind::Identifier | TokenKind::OtherKeyword | TokenKind::ControlKeyword => {
                let token = self.advance();
                Ok(Expr::Identifier(Self::token_text(&token), loc))
            }
            TokenKind::OpenParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect_rparen("after expression")?;
                Ok(expr)
            }
            _ => Err(self.error(format!("Unexpected token: {}", self.peek()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::Parser;

    /// The expression of the single top-level expression statement in `source`
    fn expr(source: &str) -> Expr {
        let program = Parser::from_source(source).parse_program().unwrap();
        assert_eq!(program.declarations.len(), 1, "{:?}", program);
        match program.declarations.into_iter().next() {
            Some(Declaration::Statement(Stmt::Expression { expr, .. })) => expr,
            other => panic!("Expected expression statement, got {:?}", other),
        }
    }

    fn binary_op(e: &Expr) -> &str {
        match e {
            Expr::Binary { op, .. } => op.as_str(),
            other => panic!("Expected binary, got {:?}", other),
        }
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        // a + b * c
        let e = expr("ガ ダグ ダ バゲス ザ");
        match &e {
            Expr::Binary { op, right, .. } => {
                assert_eq!(op, "+");
                assert_eq!(binary_op(right), "*");
            }
            other => panic!("Expected binary, got {:?}", other),
        }
    }

    #[test]
    fn test_left_associative() {
        // a - b - c == (a - b) - c
        let e = expr("ガ ジブ ダ ジブ ザ");
        match &e {
            Expr::Binary { left, right, .. } => {
                assert_eq!(binary_op(left), "-");
                assert!(matches!(**right, Expr::Identifier(ref n, _) if n == "ザ"));
            }
            other => panic!("Expected binary, got {:?}", other),
        }
    }

    #[test]
    fn test_assignment_right_associative() {
        let e = expr("ガ ギセス ダ ギセス パパン");
        match &e {
            Expr::Assign { value, .. } => assert!(matches!(**value, Expr::Assign { .. })),
            other => panic!("Expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_logical_precedence() {
        // a || b && c < d
        let e = expr("ガ ラダパ ダ バヅ ザ ギョウバシ バ");
        match &e {
            Expr::Binary { op, right, .. } => {
                assert_eq!(op, "||");
                assert_eq!(binary_op(right), "&&");
            }
            other => panic!("Expected binary, got {:?}", other),
        }
    }

    #[test]
    fn test_prefix_and_postfix() {
        let e = expr("ジデギ ジブ ガ ダグダグ");
        match &e {
            Expr::Unary {
                op,
                operand,
                prefix: true,
                location,
            } => {
                assert_eq!(op, "!");
                assert_eq!(*location, SourceLocation::new(1, 1));
                match &**operand {
                    Expr::Unary {
                        op, operand, prefix: true, ..
                    } => {
                        assert_eq!(op, "-");
                        assert!(matches!(**operand, Expr::Unary { prefix: false, .. }));
                    }
                    other => panic!("Expected unary, got {:?}", other),
                }
            }
            other => panic!("Expected unary, got {:?}", other),
        }
    }

    #[test]
    fn test_call_with_keyword_callee() {
        let e = expr("ジョウジ(「x」、ガ)");
        match &e {
            Expr::Call { callee, args, .. } => {
                assert!(matches!(**callee, Expr::Identifier(ref n, _) if n == "printf"));
                assert_eq!(args.len(), 2);
                assert!(matches!(args[0], Expr::StringLiteral(ref s, _) if s == "x"));
            }
            other => panic!("Expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_chained_postfix() {
        // f()[1]
        let e = expr("ゲゲル ザジレジョヂザギ ゴパシジョヂザギ ザジレパギセヅ パパン ゴパシザギセヅ");
        match &e {
            Expr::Index { array, index, .. } => {
                assert!(matches!(**array, Expr::Call { .. }));
                assert!(matches!(**index, Expr::Number(Number::Int(1), _)));
            }
            other => panic!("Expected index, got {:?}", other),
        }
    }

    #[test]
    fn test_parenthesized_grouping() {
        // (a + b) * c
        let e = expr("(ガ ダグ ダ) バゲス ザ");
        match &e {
            Expr::Binary { op, left, .. } => {
                assert_eq!(op, "*");
                assert_eq!(binary_op(left), "+");
            }
            other => panic!("Expected binary, got {:?}", other),
        }
    }

    #[test]
    fn test_binary_takes_left_location() {
        let e = expr("  ガ ダグ ダ");
        assert_eq!(e.location(), SourceLocation::new(1, 3));
    }

    #[test]
    fn test_unexpected_token_in_primary() {
        let err = Parser::from_source("ガ ダグ ゴパシ").parse_program().unwrap_err();
        assert!(err.message.starts_with("Unexpected token"));
        assert_eq!(err.token.column, 6);
    }
}
