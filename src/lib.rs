//! # Introduction
//!
//! Grongigo compiles scripts written in a katakana-spelled C subset into
//! plain C source. Keywords, operators, brackets and base-9 numerals are all
//! katakana words; identifiers are transliterated to ASCII on the way out.
//!
//! ## Compilation pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → Code generator → C source
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds an AST. Tokenizing never
//!    fails; the parser stops at the first unexpected token.
//! 2. [`codegen`]: walks the AST and emits formatted C text.
//! 3. [`dump`]: read-only token and tree listings for diagnostics.
//! 4. [`transliterate`]: helpers for writing scripts from Japanese text.
//! 5. [`ui`]: ratatui-based inspector; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! let c = grongigo::compile("パザ ゲギグウ ゴロ バサ ザジレ ロゾス ゼゼソ ゴパシ").unwrap();
//! assert!(c.contains("int main(void)"));
//! assert!(c.contains("    return 0;"));
//! ```

pub mod codegen;
pub mod dump;
pub mod parser;
pub mod transliterate;
pub mod ui;

use codegen::CodeGenerator;
use parser::ast::Program;
use parser::lexer::{Lexer, Token};
use parser::{ParseError, Parser};
use thiserror::Error;
use tracing::debug;

/// Failure of a compilation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Split source text into tokens, ending with an end-of-input token
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens = Lexer::new(source).tokenize();
    debug!(bytes = source.len(), tokens = tokens.len(), "tokenized");
    tokens
}

/// Parse a token sequence into a program
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    let program = Parser::new(tokens).parse_program()?;
    debug!(declarations = program.declarations.len(), "parsed");
    Ok(program)
}

/// Emit C source for a parsed program
pub fn generate(program: &Program) -> String {
    let output = CodeGenerator::new().generate(program);
    debug!(bytes = output.len(), "generated");
    output
}

/// Run the whole pipeline on `source`
pub fn compile(source: &str) -> Result<String, CompileError> {
    let program = parse(tokenize(source))?;
    Ok(generate(&program))
}
