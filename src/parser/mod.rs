//! Grongigo source parser
//!
//! This module transforms Grongigo source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), with the grammar split across
//!   `declarations`, `statements` and `expressions`
//! - [`ast`]: AST node definitions
//! - [`tables`] and [`numeral`]: the fixed vocabulary and the base-9 numeral words
//!
//! # Language
//!
//! Grongigo is a C subset spelled in katakana:
//! - Types: `int`, `char`, `float`, `double`, `void`, `long`, `short`, `unsigned`, one-dimensional arrays
//! - Statements: declarations, control flow (`if`, `while`, `for`, `switch`), jumps
//! - Expressions: arithmetic, comparison, logical, assignment, calls, indexing
//! - Numbers are spelled as base-9 numeral words or written as ASCII decimals
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one token of lookahead.
//! No external parser generator dependencies.

pub mod ast;
mod declarations;
mod expressions;
pub mod lexer;
pub mod numeral;
pub mod parse;
mod statements;
pub mod tables;

pub use parse::{ParseError, Parser};
