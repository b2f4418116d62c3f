// Grongigo: katakana script to C source compiler

mod cli;

use std::fs;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{CliError, Command, USAGE};
use grongigo::dump::{format_ast, format_tokens};
use grongigo::transliterate;
use grongigo::ui::App;

fn main() -> ExitCode {
    let options = match cli::parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(options.verbose);

    match run(options.command) {
        Ok(()) => ExitCode::SUCCESS,
        // Parse errors already read "Parse error at ..."
        Err(CliError::Compile(e)) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the default filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "grongigo=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Help => println!("{}", USAGE),
        Command::Jp2Grg { text } => println!("{}", transliterate::convert(&text)),
        Command::Num2Grg { value } => println!("{}", transliterate::number_to_numeral(value)),
        Command::Compile {
            input,
            output,
            show_tokens,
            show_ast,
            inspect,
        } => {
            let source = fs::read_to_string(&input).map_err(|source| CliError::Read {
                path: input.clone(),
                source,
            })?;
            info!(path = %input.display(), "read source");

            if inspect {
                return run_inspector(source);
            }

            let tokens = grongigo::tokenize(&source);
            if show_tokens {
                println!("=== Tokens ===");
                print!("{}", format_tokens(&tokens));
                println!();
            }

            let program = grongigo::parse(tokens).map_err(grongigo::CompileError::from)?;
            if show_ast {
                println!("=== AST ===");
                print!("{}", format_ast(&program));
                println!();
            }

            let code = grongigo::generate(&program);
            let path = Command::output_path(&input, output.as_deref());
            write_output(&path, &code)?;
            info!(input = %input.display(), output = %path.display(), "compiled");
        }
    }

    Ok(())
}

fn write_output(path: &Path, code: &str) -> Result<(), CliError> {
    fs::write(path, code).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = code.len(), "wrote output");
    Ok(())
}

fn run_inspector(source: String) -> Result<(), CliError> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(CliError::from)
}
