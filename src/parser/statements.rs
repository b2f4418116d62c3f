//! Statement parsing implementation
//!
//! This module handles parsing of all Grongigo statement types:
//!
//! - Variable declarations: `ゲギグウ ガ ギセス パパン`
//! - Control flow: `if`/`else`, `while`, `for`, `switch`
//! - Jump statements: `return`, `break`, `continue`
//! - Compound statements: `{ ... }`
//! - Expression statements: function calls, assignments
//!
//! No terminator is required between statements. A single `。` after a
//! statement is accepted and dropped.
//!
//! # Grammar
//!
//! ```text
//! statement ::= block | if_stmt | while_stmt | for_stmt | switch_stmt
//!             | return_stmt | "break" | "continue" | var_decl | expression
//! if_stmt   ::= "if" expression body ("else" (if_stmt | body))?
//! for_stmt  ::= "for" "(" for_init? "," expression? "," expression? ")" body
//!             | "for" expression body
//! switch_stmt ::= "switch" expression "{" clause* "}"
//! clause    ::= "case" expression ":" statement* | "default" ":" statement*
//! body      ::= block | statement
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a statement and its optional terminator
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let stmt = self.parse_statement_inner()?;
        self.skip_terminator();
        Ok(stmt)
    }

    fn parse_statement_inner(&mut self) -> Result<Stmt, ParseError> {
        let loc = self.current_location();

        if self.check(TokenKind::OpenBrace) {
            return self.parse_block().map(Stmt::Block);
        }

        if self.check(TokenKind::ControlKeyword) {
            let keyword = Self::token_text(self.peek());
            match keyword.as_str() {
                "if" => return self.parse_if_statement(),
                "while" => return self.parse_while_statement(),
                "for" => return self.parse_for_statement(),
                "switch" => return self.parse_switch_statement(),
                "return" => return self.parse_return_statement(),
                "break" => {
                    self.advance();
                    return Ok(Stmt::Break { location: loc });
                }
                "continue" => {
                    self.advance();
                    return Ok(Stmt::Continue { location: loc });
                }
                // printf and friends start expression statements
                _ => {}
            }
        }

        if self.check(TokenKind::TypeKeyword) {
            return self.parse_var_declaration().map(Stmt::VarDecl);
        }

        let expr = self.parse_expression()?;
        Ok(Stmt::Expression {
            expr,
            location: loc,
        })
    }

    /// Parse `{ statement* }`
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let location = self.current_location();
        self.expect_lbrace("to open block")?;

        let mut statements = Vec::new();
        while !self.check(TokenKind::CloseBrace) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        self.expect_rbrace("after block")?;
        Ok(Block {
            statements,
            location,
        })
    }

    /// A block if one opens here, otherwise a single statement. Its
    /// terminator is consumed here so a following `else` is still seen.
    fn parse_body(&mut self) -> Result<Box<Stmt>, ParseError> {
        let stmt = if self.check(TokenKind::OpenBrace) {
            Stmt::Block(self.parse_block()?)
        } else {
            self.parse_statement_inner()?
        };
        self.skip_terminator();
        Ok(Box::new(stmt))
    }

    /// Parse a type-led variable declaration inside a body
    pub(crate) fn parse_var_declaration(&mut self) -> Result<VarDecl, ParseError> {
        let location = self.current_location();
        let var_type = self.expect_type("type")?;
        let name = self.expect_identifier()?;
        self.finish_var_declaration(var_type, name, location)
    }

    /// Parse if statement; an `else` directly followed by `if` chains
    fn parse_if_statement(&mut self) -> Result<Stmt, ParseError> {
        let location = self.current_location();
        self.advance(); // consume 'if'

        let condition = self.parse_expression()?;
        let then_branch = self.parse_body()?;

        let else_branch = if self.check_control("else") {
            self.advance();
            if self.check_control("if") {
                Some(Box::new(self.parse_if_statement()?))
            } else {
                Some(self.parse_body()?)
            }
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
            location,
        })
    }

    /// Parse while statement
    fn parse_while_statement(&mut self) -> Result<Stmt, ParseError> {
        let location = self.current_location();
        self.advance(); // consume 'while'

        let condition = self.parse_expression()?;
        let body = self.parse_body()?;

        Ok(Stmt::While {
            condition,
            body,
            location,
        })
    }

    /// Parse for statement in either its three-clause or condition-only form
    fn parse_for_statement(&mut self) -> Result<Stmt, ParseError> {
        let location = self.current_location();
        self.advance(); // consume 'for'

        let (init, condition, update) = if self.match_token(TokenKind::OpenParen) {
            let init = if self.check(TokenKind::Comma) {
                None
            } else if self.check(TokenKind::TypeKeyword) {
                Some(ForInit::VarDecl(self.parse_var_declaration()?))
            } else {
                Some(ForInit::Expr(self.parse_expression()?))
            };
            self.expect_token(TokenKind::Comma, "Expected ',' after for initializer")?;

            let condition = if self.check(TokenKind::Comma) {
                None
            } else {
                Some(self.parse_expression()?)
            };
            self.expect_token(TokenKind::Comma, "Expected ',' after for condition")?;

            let update = if self.check(TokenKind::CloseParen) {
                None
            } else {
                Some(self.parse_expression()?)
            };
            self.expect_rparen("after for clauses")?;

            (init, condition, update)
        } else {
            (None, Some(self.parse_expression()?), None)
        };

        let body = self.parse_body()?;

        Ok(Stmt::For {
            init,
            condition,
            update,
            body,
            location,
        })
    }

    /// Parse switch statement
    fn parse_switch_statement(&mut self) -> Result<Stmt, ParseError> {
        let location = self.current_location();
        self.advance(); // consume 'switch'

        let subject = self.parse_expression()?;
        self.expect_lbrace("after switch subject")?;

        let mut cases = Vec::new();
        let mut default_case: Option<Vec<Stmt>> = None;

        loop {
            if self.check_control("case") {
                let case_location = self.current_location();
                self.advance();
                let value = self.parse_expression()?;
                self.expect_token(TokenKind::Colon, "Expected ':' after case value")?;
                let statements = self.parse_clause_statements()?;
                cases.push(CaseClause {
                    value,
                    statements,
                    location: case_location,
                });
            } else if self.check_control("default") {
                if default_case.is_some() {
                    return Err(self.error("Duplicate default clause in switch"));
                }
                self.advance();
                self.expect_token(TokenKind::Colon, "Expected ':' after default")?;
                default_case = Some(self.parse_clause_statements()?);
            } else {
                break;
            }
        }

        self.expect_rbrace("after switch body")?;

        Ok(Stmt::Switch {
            subject,
            cases,
            default_case,
            location,
        })
    }

    /// Statements of one clause, up to the next label or the closing brace
    fn parse_clause_statements(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.check_control("case")
            && !self.check_control("default")
            && !self.check(TokenKind::CloseBrace)
            && !self.is_at_end()
        {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    /// Parse return statement. The value is omitted when the next token
    /// closes the block, ends input, terminates the statement or starts
    /// another keyword-led construct.
    fn parse_return_statement(&mut self) -> Result<Stmt, ParseError> {
        let location = self.current_location();
        self.advance(); // consume 'return'

        let bare = self.check(TokenKind::CloseBrace)
            || self.is_at_end()
            || self.check(TokenKind::Semicolon)
            || self.check(TokenKind::ControlKeyword)
            || self.check(TokenKind::TypeKeyword);

        let value = if bare {
            None
        } else {
            Some(self.parse_expression()?)
        };

        Ok(Stmt::Return { value, location })
    }
}
