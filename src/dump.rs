//! Diagnostic listings of the token stream and the parsed tree
//!
//! Both are read-only views used by `--tokens`, `--ast` and the inspector.

use crate::parser::ast::*;
use crate::parser::lexer::{format_float, Token};
use std::fmt::Write;

/// One line per token: `Token(kind, value, L<line>:<column>)`
pub fn format_token(token: &Token) -> String {
    format!(
        "Token({}, {}, L{}:{})",
        token.kind, token.value, token.line, token.column
    )
}

pub fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|t| format_token(t) + "\n").collect()
}

/// Indented tree listing, two spaces per level
pub fn format_ast(program: &Program) -> String {
    let mut out = AstWriter::default();
    out.line(0, "Program");
    for decl in &program.declarations {
        out.declaration(decl, 1);
    }
    out.text
}

#[derive(Default)]
struct AstWriter {
    text: String,
}

impl AstWriter {
    fn line(&mut self, depth: usize, label: &str) {
        // Writing to a String cannot fail
        let _ = writeln!(self.text, "{}{}", "  ".repeat(depth), label);
    }

    fn declaration(&mut self, decl: &Declaration, depth: usize) {
        match decl {
            Declaration::Function(func) => {
                self.line(
                    depth,
                    &format!("FunctionDecl: {} {}", func.return_type, func.name),
                );
                for param in &func.params {
                    self.line(
                        depth + 1,
                        &format!("Parameter: {} {}", param.param_type, param.name),
                    );
                }
                self.block(&func.body, depth + 1);
            }
            Declaration::Variable(var) => self.var_decl(var, depth),
            Declaration::Statement(stmt) => self.statement(stmt, depth),
        }
    }

    fn var_decl(&mut self, var: &VarDecl, depth: usize) {
        self.line(depth, &format!("VarDecl: {} {}", var.var_type, var.name));
        if let Some(init) = &var.init {
            self.expr(init, depth + 1);
        }
    }

    fn block(&mut self, block: &Block, depth: usize) {
        self.line(depth, "BlockStmt");
        for stmt in &block.statements {
            self.statement(stmt, depth + 1);
        }
    }

    fn statement(&mut self, stmt: &Stmt, depth: usize) {
        match stmt {
            Stmt::Block(block) => self.block(block, depth),
            Stmt::VarDecl(var) => self.var_decl(var, depth),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                self.line(depth, "IfStmt");
                self.expr(condition, depth + 1);
                self.statement(then_branch, depth + 1);
                if let Some(else_branch) = else_branch {
                    self.statement(else_branch, depth + 1);
                }
            }
            Stmt::While {
                condition, body, ..
            } => {
                self.line(depth, "WhileStmt");
                self.expr(condition, depth + 1);
                self.statement(body, depth + 1);
            }
            Stmt::For {
                init,
                condition,
                update,
                body,
                ..
            } => {
                self.line(depth, "ForStmt");
                match init {
                    Some(ForInit::VarDecl(var)) => self.var_decl(var, depth + 1),
                    Some(ForInit::Expr(expr)) => self.expr(expr, depth + 1),
                    None => {}
                }
                if let Some(condition) = condition {
                    self.expr(condition, depth + 1);
                }
                if let Some(update) = update {
                    self.expr(update, depth + 1);
                }
                self.statement(body, depth + 1);
            }
            Stmt::Switch {
                subject,
                cases,
                default_case,
                ..
            } => {
                self.line(depth, "SwitchStmt");
                self.expr(subject, depth + 1);
                for case in cases {
                    self.line(depth + 1, "CaseClause");
                    self.expr(&case.value, depth + 2);
                    for stmt in &case.statements {
                        self.statement(stmt, depth + 2);
                    }
                }
                if let Some(statements) = default_case {
                    self.line(depth + 1, "DefaultClause");
                    for stmt in statements {
                        self.statement(stmt, depth + 2);
                    }
                }
            }
            Stmt::Return { value, .. } => {
                self.line(depth, "ReturnStmt");
                if let Some(value) = value {
                    self.expr(value, depth + 1);
                }
            }
            Stmt::Break { .. } => self.line(depth, "BreakStmt"),
            Stmt::Continue { .. } => self.line(depth, "ContinueStmt"),
            Stmt::Expression { expr, .. } => {
                self.line(depth, "ExprStmt");
                self.expr(expr, depth + 1);
            }
        }
    }

    fn expr(&mut self, expr: &Expr, depth: usize) {
        match expr {
            Expr::Binary {
                left, op, right, ..
            } => {
                self.line(depth, &format!("BinaryExpr: {}", op));
                self.expr(left, depth + 1);
                self.expr(right, depth + 1);
            }
            Expr::Unary {
                op,
                operand,
                prefix,
                ..
            } => {
                self.line(depth, &format!("UnaryExpr: {} (prefix={})", op, prefix));
                self.expr(operand, depth + 1);
            }
            Expr::Assign { target, value, .. } => {
                self.line(depth, "AssignExpr");
                self.expr(target, depth + 1);
                self.expr(value, depth + 1);
            }
            Expr::Call { callee, args, .. } => {
                self.line(depth, "CallExpr");
                self.expr(callee, depth + 1);
                for arg in args {
                    self.expr(arg, depth + 1);
                }
            }
            Expr::Index { array, index, .. } => {
                self.line(depth, "IndexExpr");
                self.expr(array, depth + 1);
                self.expr(index, depth + 1);
            }
            Expr::Identifier(name, _) => self.line(depth, &format!("Identifier: {}", name)),
            Expr::Number(Number::Int(n), _) => {
                self.line(depth, &format!("NumberLiteral: {}", n))
            }
            Expr::Number(Number::Float(x), _) => {
                self.line(depth, &format!("NumberLiteral: {}", format_float(*x)))
            }
            Expr::StringLiteral(value, _) => {
                self.line(depth, &format!("StringLiteral: {:?}", value))
            }
            Expr::CharLiteral(value, _) => self.line(depth, &format!("CharLiteral: {:?}", value)),
        }
    }
}
