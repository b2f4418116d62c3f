//! Declaration parsing implementation
//!
//! This module handles parsing of top-level declarations in Grongigo scripts:
//!
//! - Marked function definitions: `パザ type name params { ... }`
//! - Type-led declarations, resolved by one token of lookahead after the name:
//!   `type name ( params ) { ... }` is a function, anything else a variable
//! - Parameter lists in their parenthesized, bare-void and legacy bare forms
//! - Everything else falls through to the statement grammar
//!
//! # Grammar
//!
//! ```text
//! declaration   ::= marked_func | type_led_decl | statement
//! marked_func   ::= "パザ" type name params block
//! params        ::= "(" ( "void" | param ("," param)* )? ")"
//!                 | "void"
//!                 | param ("," param)*            -- ends at "{"
//! type_led_decl ::= type name "(" paren_params ")" block
//!                 | type name array_suffix? ("=" expression)?
//! name          ::= identifier | other_keyword
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::tables::FUNCTION_MARKER;
use tracing::trace;

impl Parser {
    /// Parse one top-level declaration
    pub(crate) fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let token = self.peek();
        trace!(kind = %token.kind, line = token.line, column = token.column, "declaration");

        if self.check_value(TokenKind::OtherKeyword, FUNCTION_MARKER) {
            let func = self.parse_function_declaration()?;
            self.skip_terminator();
            return Ok(Declaration::Function(func));
        }

        if self.check(TokenKind::TypeKeyword) {
            return self.parse_var_or_func_declaration();
        }

        let stmt = self.parse_statement()?;
        Ok(Declaration::Statement(stmt))
    }

    /// Parse a marked function: パザ type name params block
    pub(crate) fn parse_function_declaration(&mut self) -> Result<FunctionDecl, ParseError> {
        self.advance(); // consume marker
        let location = self.current_location();

        let return_type = self.expect_type("return type")?;
        let name = self.expect_identifier()?;

        let params = if self.check(TokenKind::OpenParen) {
            self.parse_parenthesized_parameters()?
        } else if self.check_value(TokenKind::TypeKeyword, "void") {
            self.advance();
            Vec::new()
        } else if self.check(TokenKind::TypeKeyword) {
            self.parse_bare_parameters()?
        } else {
            Vec::new()
        };

        let body = self.parse_block()?;

        Ok(FunctionDecl {
            return_type,
            name,
            params,
            body,
            location,
        })
    }

    /// Parse a declaration that starts with a type keyword
    pub(crate) fn parse_var_or_func_declaration(&mut self) -> Result<Declaration, ParseError> {
        let location = self.current_location();
        let decl_type = self.expect_type("type")?;
        let name = self.expect_identifier()?;

        if self.check(TokenKind::OpenParen) {
            let params = self.parse_parenthesized_parameters()?;
            let body = self.parse_block()?;
            self.skip_terminator();
            return Ok(Declaration::Function(FunctionDecl {
                return_type: decl_type,
                name,
                params,
                body,
                location,
            }));
        }

        let var = self.finish_var_declaration(decl_type, name, location)?;
        self.skip_terminator();
        Ok(Declaration::Variable(var))
    }

    /// Parse `( )`, `( void )` or `( type name, ... )`
    pub(crate) fn parse_parenthesized_parameters(&mut self) -> Result<Vec<Parameter>, ParseError> {
        self.expect_lparen("before parameters")?;
        let mut params = Vec::new();

        if self.check(TokenKind::CloseParen) {
            self.advance();
            return Ok(params);
        }

        // Special case: (void) means no parameters
        if self.check_value(TokenKind::TypeKeyword, "void")
            && self
                .peek_ahead(1)
                .is_some_and(|t| t.kind == TokenKind::CloseParen)
        {
            self.advance();
            self.advance();
            return Ok(params);
        }

        loop {
            params.push(self.parse_parameter()?);
            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        self.expect_rparen("after parameters")?;
        Ok(params)
    }

    /// Legacy form: `type name, type name {`. A type directly followed by
    /// the block opener contributes no parameter.
    pub(crate) fn parse_bare_parameters(&mut self) -> Result<Vec<Parameter>, ParseError> {
        let mut params = Vec::new();

        loop {
            let location = self.current_location();
            let param_type = self.expect_type("parameter type")?;
            if self.check(TokenKind::OpenBrace) {
                break;
            }

            let name = self.expect_identifier()?;
            params.push(Parameter {
                param_type,
                name,
                location,
            });

            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        Ok(params)
    }

    fn parse_parameter(&mut self) -> Result<Parameter, ParseError> {
        let location = self.current_location();
        let param_type = self.expect_type("parameter type")?;
        let name = self.expect_identifier()?;
        Ok(Parameter {
            param_type,
            name,
            location,
        })
    }

    /// Parse the rest of a variable declaration after its name:
    /// an optional `[size]` suffix and an optional `= initializer`.
    /// The size expression is checked for syntax and then dropped.
    pub(crate) fn finish_var_declaration(
        &mut self,
        mut var_type: String,
        name: String,
        location: SourceLocation,
    ) -> Result<VarDecl, ParseError> {
        if self.match_token(TokenKind::OpenBracket) {
            if !self.check(TokenKind::CloseBracket) {
                self.parse_expression()?;
            }
            self.expect_token(TokenKind::CloseBracket, "Expected ']' after array size")?;
            var_type.push_str(ARRAY_SUFFIX);
        }

        let init = if self.check_operator(&["="]) {
            self.advance();
            Some(self.parse_expression()?)
        } else {
            None
        };

        Ok(VarDecl {
            var_type,
            name,
            init,
            location,
        })
    }
}
