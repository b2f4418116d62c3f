//! C code generator
//!
//! Walks a parsed [`Program`] and emits C source text. Output is line based:
//! every emitted line is prefixed with four spaces per nesting level, and the
//! lines are joined with `\n` at the end.
//!
//! # Output Shape
//!
//! ```text
//! #include <stdio.h>
//! #include <stdlib.h>
//! #include <string.h>
//!
//! int main(void)
//! {
//!     printf("Hello\n");
//!     return 0;
//! }
//!
//! ```
//!
//! - Binary expressions are always parenthesized, one layer per node
//! - Single-statement bodies are indented one level without braces
//! - `else if` chains stay on one line
//! - Calls to `printf` get a trailing newline added to a literal format string
//!
//! Generation cannot fail: every AST variant has an emission rule.

pub mod names;

use crate::parser::ast::*;
use crate::parser::lexer::format_float;
use names::{escape_char, escape_string, sanitize_name};

const INDENT: &str = "    ";

/// Headers emitted ahead of every program.
pub const PREAMBLE: &[&str] = &[
    "#include <stdio.h>",
    "#include <stdlib.h>",
    "#include <string.h>",
    "",
];

/// Function that gets `(void)` when declared without parameters.
pub const ENTRY_POINT: &str = "main";

/// Callee names that trigger the format-string newline rewrite.
pub const PRINT_FUNCTIONS: &[&str] = &["printf", "ジョウジ"];

/// Emits C source for a program
#[derive(Debug, Default)]
pub struct CodeGenerator {
    output: Vec<String>,
    indent_level: usize,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the full C translation unit for `program`
    pub fn generate(&mut self, program: &Program) -> String {
        self.output.clear();
        self.indent_level = 0;

        for line in PREAMBLE {
            self.emit(line);
        }

        for decl in &program.declarations {
            self.generate_declaration(decl);
            self.emit("");
        }

        std::mem::take(&mut self.output).join("\n")
    }

    fn emit(&mut self, code: &str) {
        let line = format!("{}{}", INDENT.repeat(self.indent_level), code);
        self.output.push(line);
    }

    /// Extend the last emitted line in place
    fn append_to_last_line(&mut self, text: &str) {
        match self.output.last_mut() {
            Some(line) => line.push_str(text),
            None => self.emit(text.trim_start()),
        }
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    // ===== Declarations =====

    fn generate_declaration(&mut self, decl: &Declaration) {
        match decl {
            Declaration::Function(func) => self.generate_function(func),
            Declaration::Variable(var) => self.generate_var_decl(var),
            Declaration::Statement(stmt) => self.generate_statement(stmt),
        }
    }

    fn generate_function(&mut self, func: &FunctionDecl) {
        let mut params = func
            .params
            .iter()
            .map(|p| format!("{} {}", p.param_type, sanitize_name(&p.name)))
            .collect::<Vec<_>>()
            .join(", ");
        if params.is_empty() && func.name == ENTRY_POINT {
            params.push_str("void");
        }

        self.emit(&format!(
            "{} {}({})",
            func.return_type,
            sanitize_name(&func.name),
            params
        ));
        self.generate_block(&func.body);
    }

    fn generate_var_decl(&mut self, var: &VarDecl) {
        let line = format!("{};", self.var_decl_text(var));
        self.emit(&line);
    }

    /// `type name`, `type name = init`, or the `[]` forms for arrays
    fn var_decl_text(&self, var: &VarDecl) -> String {
        let name = sanitize_name(&var.name);
        let declarator = match var.array_element_type() {
            Some(base) => format!("{} {}[]", base, name),
            None => format!("{} {}", var.var_type, name),
        };

        match &var.init {
            Some(init) => format!("{} = {}", declarator, self.generate_expr(init)),
            None => declarator,
        }
    }

    // ===== Statements =====

    fn generate_block(&mut self, block: &Block) {
        self.emit("{");
        self.indent();
        for stmt in &block.statements {
            self.generate_statement(stmt);
        }
        self.dedent();
        self.emit("}");
    }

    /// A block keeps its braces; anything else goes one level deeper
    fn generate_body(&mut self, body: &Stmt) {
        match body {
            Stmt::Block(block) => self.generate_block(block),
            stmt => {
                self.indent();
                self.generate_statement(stmt);
                self.dedent();
            }
        }
    }

    fn generate_statement(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(block) => self.generate_block(block),
            Stmt::VarDecl(var) => self.generate_var_decl(var),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                let header = format!("if ({})", self.generate_expr(condition));
                self.emit(&header);
                self.generate_if_tail(then_branch, else_branch.as_deref());
            }
            Stmt::While {
                condition, body, ..
            } => {
                let header = format!("while ({})", self.generate_expr(condition));
                self.emit(&header);
                self.generate_body(body);
            }
            Stmt::For {
                init,
                condition,
                update,
                body,
                ..
            } => {
                let init = match init {
                    Some(ForInit::VarDecl(var)) => self.var_decl_text(var),
                    Some(ForInit::Expr(expr)) => self.generate_expr(expr),
                    None => String::new(),
                };
                let condition = condition
                    .as_ref()
                    .map(|c| self.generate_expr(c))
                    .unwrap_or_default();
                let update = update
                    .as_ref()
                    .map(|u| self.generate_expr(u))
                    .unwrap_or_default();

                self.emit(&format!("for ({}; {}; {})", init, condition, update));
                self.generate_body(body);
            }
            Stmt::Switch {
                subject,
                cases,
                default_case,
                ..
            } => self.generate_switch(subject, cases, default_case.as_deref()),
            Stmt::Return { value, .. } => {
                let line = match value {
                    Some(value) => format!("return {};", self.generate_expr(value)),
                    None => "return;".to_string(),
                };
                self.emit(&line);
            }
            Stmt::Break { .. } => self.emit("break;"),
            Stmt::Continue { .. } => self.emit("continue;"),
            Stmt::Expression { expr, .. } => {
                let line = format!("{};", self.generate_expr(expr));
                self.emit(&line);
            }
        }
    }

    /// Branches of an `if` whose header is already emitted. An `else if`
    /// is written onto the `else` line.
    fn generate_if_tail(&mut self, then_branch: &Stmt, else_branch: Option<&Stmt>) {
        self.generate_body(then_branch);

        let Some(else_branch) = else_branch else {
            return;
        };

        self.emit("else");
        match else_branch {
            Stmt::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                let header = format!(" if ({})", self.generate_expr(condition));
                self.append_to_last_line(&header);
                self.generate_if_tail(then_branch, else_branch.as_deref());
            }
            other => self.generate_body(other),
        }
    }

    /// Case labels sit at the switch's own level, their statements one deeper
    fn generate_switch(
        &mut self,
        subject: &Expr,
        cases: &[CaseClause],
        default_case: Option<&[Stmt]>,
    ) {
        let header = format!("switch ({})", self.generate_expr(subject));
        self.emit(&header);
        self.emit("{");

        for case in cases {
            let label = format!("case {}:", self.generate_expr(&case.value));
            self.emit(&label);
            self.indent();
            for stmt in &case.statements {
                self.generate_statement(stmt);
            }
            self.dedent();
        }

        if let Some(statements) = default_case {
            self.emit("default:");
            self.indent();
            for stmt in statements {
                self.generate_statement(stmt);
            }
            self.dedent();
        }

        self.emit("}");
    }

    // ===== Expressions =====

    /// Render an expression as C text
    pub fn generate_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Binary {
                left, op, right, ..
            } => format!(
                "({} {} {})",
                self.generate_expr(left),
                op,
                self.generate_expr(right)
            ),
            Expr::Unary {
                op,
                operand,
                prefix,
                ..
            } => {
                let operand = self.generate_expr(operand);
                if *prefix {
                    format!("{}{}", op, operand)
                } else {
                    format!("{}{}", operand, op)
                }
            }
            Expr::Assign { target, value, .. } => format!(
                "{} = {}",
                self.generate_expr(target),
                self.generate_expr(value)
            ),
            Expr::Call { callee, args, .. } => self.generate_call(callee, args),
            Expr::Index { array, index, .. } => format!(
                "{}[{}]",
                self.generate_expr(array),
                self.generate_expr(index)
            ),
            Expr::Identifier(name, _) => sanitize_name(name),
            Expr::Number(Number::Int(n), _) => n.to_string(),
            Expr::Number(Number::Float(x), _) => format_float(*x),
            Expr::StringLiteral(value, _) => format!("\"{}\"", escape_string(value)),
            Expr::CharLiteral(value, _) => format!("'{}'", escape_char(value)),
        }
    }

    fn generate_call(&self, callee: &Expr, args: &[Expr]) -> String {
        let is_print = matches!(
            callee,
            Expr::Identifier(name, _) if PRINT_FUNCTIONS.contains(&name.as_str())
        );

        let args = args
            .iter()
            .enumerate()
            .map(|(i, arg)| match arg {
                Expr::StringLiteral(format, _) if is_print && i == 0 => {
                    format!("\"{}\"", escape_string(&with_trailing_newline(format)))
                }
                arg => self.generate_expr(arg),
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!("{}({})", self.generate_expr(callee), args)
    }
}

/// Add a newline to a format string that does not already end in one,
/// written either as a real newline or as the two characters `\n`
fn with_trailing_newline(format: &str) -> String {
    if format.ends_with('\n') || format.ends_with("\\n") {
        format.to_string()
    } else {
        format!("{}\n", format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn generate(source: &str) -> String {
        let program = Parser::from_source(source).parse_program().unwrap();
        CodeGenerator::new().generate(&program)
    }

    /// Generated lines after the preamble, without the final separator
    fn body_lines(source: &str) -> Vec<String> {
        generate(source)
            .lines()
            .skip(PREAMBLE.len())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_preamble_and_separators() {
        assert_eq!(
            generate(""),
            "#include <stdio.h>\n#include <stdlib.h>\n#include <string.h>\n"
        );
        assert_eq!(body_lines("ブゲス"), vec!["break;"]);
    }

    #[test]
    fn test_main_gets_void() {
        let lines = body_lines("パザ ゲギグウ ゴロ バサ ザジレ ロゾス ゼゼソ ゴパシ");
        assert_eq!(lines, vec!["int main(void)", "{", "    return 0;", "}"]);
    }

    #[test]
    fn test_other_functions_keep_empty_parens() {
        let lines = body_lines("パザ バサ ゲゲル バサ ザジレ ゴパシ");
        assert_eq!(lines[0], "void gegeru()");
    }

    #[test]
    fn test_parameters() {
        let lines = body_lines("ゲギグウ ダス (ゲギグウ ガ、ロジ ダ) ザジレ ゴパシ");
        assert_eq!(lines[0], "int dasu(int ga, char da)");
    }

    #[test]
    fn test_else_if_chain_on_one_line() {
        let lines = body_lines(
            "ジョウベン ガ ザジレ ブゲス ゴパシ ゾバ ジョウベン ダ ブゲス ゾバ ヅヅゲス",
        );
        assert_eq!(
            lines,
            vec![
                "if (ga)",
                "{",
                "    break;",
                "}",
                "else if (da)",
                "    break;",
                "else",
                "    continue;",
            ]
        );
    }

    #[test]
    fn test_switch_layout() {
        let lines = body_lines(
            "ゲンダブ ガ ザジレ ダガギ パパン： ブゲス ビデギ： ロゾス ゴパシ",
        );
        assert_eq!(
            lines,
            vec![
                "switch (ga)",
                "{",
                "case 1:",
                "    break;",
                "default:",
                "    return;",
                "}",
            ]
        );
    }

    #[test]
    fn test_array_declaration() {
        let lines = body_lines("ゲギグウ ガ ザジレパギセヅ ズガギ ゴパシザギセヅ ロジ ダ ザジレパギセヅ ゴパシザギセヅ ギセス 「hi」");
        assert_eq!(lines[0], "int ga[];");
        assert_eq!(lines[2], "char da[] = \"hi\";");
    }

    #[test]
    fn test_printf_newline_rewrite() {
        assert_eq!(body_lines("ジョウジ(「Hello」)")[0], "printf(\"Hello\\n\");");
        assert_eq!(body_lines("ジョウジ(「Hello\\n」)")[0], "printf(\"Hello\\\\n\");");
        assert_eq!(body_lines("ゲゲル(「Hello」)")[0], "gegeru(\"Hello\");");
        assert_eq!(body_lines("ジョウジ(ガ、「x」)")[0], "printf(ga, \"x\");");
    }

    #[test]
    fn test_literals() {
        assert_eq!(body_lines("ガ ギセス 『』")[0], "ga = '\\0';");
        assert_eq!(body_lines("ガ ギセス 1.0")[0], "ga = 1.0;");
        assert_eq!(body_lines("ガ ギセス ジブ パパン")[0], "ga = -1;");
    }

    #[test]
    fn test_binary_parenthesized() {
        assert_eq!(
            body_lines("ガ ギセス ダ ダグ ザ バゲス ドググ")[0],
            "ga = (da + (za * 2));"
        );
    }
}
