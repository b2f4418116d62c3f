//! Command-line options
//!
//! ```text
//! grongigo <input> [-o <output>] [--tokens] [--ast] [--inspect] [-v]
//! grongigo jp2grg <text>...
//! grongigo num2grg <number>
//! ```

use std::path::{Path, PathBuf};

use grongigo::CompileError;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: grongigo <input> [options]
       grongigo jp2grg <text>...
       grongigo num2grg <number>

Options:
  -o, --output <file>  Write C source to <file> (default: input with .c extension)
  --tokens             Print the token stream
  --ast                Print the syntax tree
  --inspect            Browse source, tokens, tree and output in a terminal UI
  -v, --verbose        Log pipeline progress to stderr
  -h, --help           Show this help";

/// Errors reported by the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("Cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Compile {
        input: PathBuf,
        output: Option<PathBuf>,
        show_tokens: bool,
        show_ast: bool,
        inspect: bool,
    },
    /// Convert Japanese text to Grongigo
    Jp2Grg { text: String },
    /// Spell a number as a numeral word
    Num2Grg { value: u64 },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub command: Command,
    pub verbose: bool,
}

impl Command {
    /// Where compiled output goes: `-o`, or the input with a `.c` extension
    pub fn output_path(input: &Path, output: Option<&Path>) -> PathBuf {
        match output {
            Some(path) => path.to_path_buf(),
            None => input.with_extension("c"),
        }
    }
}

/// Parse arguments, not including the program name
pub fn parse_args<I>(args: I) -> Result<CliOptions, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    let mut verbose = false;

    match args.peek().map(String::as_str) {
        Some("jp2grg") => {
            args.next();
            let words: Vec<String> = args.collect();
            if words.is_empty() {
                return Err(CliError::Usage("jp2grg needs some text".to_string()));
            }
            return Ok(CliOptions {
                command: Command::Jp2Grg {
                    text: words.join(" "),
                },
                verbose,
            });
        }
        Some("num2grg") => {
            args.next();
            let raw = args
                .next()
                .ok_or_else(|| CliError::Usage("num2grg needs a number".to_string()))?;
            let value = raw
                .parse::<u64>()
                .map_err(|_| CliError::Usage(format!("'{}' is not a non-negative integer", raw)))?;
            return Ok(CliOptions {
                command: Command::Num2Grg { value },
                verbose,
            });
        }
        _ => {}
    }

    let mut input = None;
    let mut output = None;
    let mut show_tokens = false;
    let mut show_ast = false;
    let mut inspect = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Ok(CliOptions {
                    command: Command::Help,
                    verbose,
                })
            }
            flag @ ("-o" | "--output") => {
                let path = args
                    .next()
                    .ok_or_else(|| CliError::Usage(format!("{} needs a file name", flag)))?;
                output = Some(PathBuf::from(path));
            }
            "--tokens" => show_tokens = true,
            "--ast" => show_ast = true,
            "--inspect" => inspect = true,
            "-v" | "--verbose" => verbose = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(CliError::Usage(format!("Unknown option '{}'", flag)));
            }
            other if input.is_some() => {
                return Err(CliError::Usage(format!("Unexpected argument '{}'", other)));
            }
            other => input = Some(PathBuf::from(other)),
        }
    }

    let input = input.ok_or_else(|| CliError::Usage("No input file provided".to_string()))?;

    Ok(CliOptions {
        command: Command::Compile {
            input,
            output,
            show_tokens,
            show_ast,
            inspect,
        },
        verbose,
    })
}
