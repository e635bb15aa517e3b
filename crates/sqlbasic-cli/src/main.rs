//! sqlbasic CLI
//!
//! Command-line tool for checking, dumping and formatting SQL statements.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use sqlbasic_cli::commands;
use sqlbasic_cli::input::read_sql;

/// Check, dump and format single SQL statements.
#[derive(Parser)]
#[command(name = "sqlbasic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, env = "SQLBASIC_VERBOSE")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where to read the statement from.
#[derive(Args)]
struct Input {
    /// File containing the statement (standard input if omitted).
    file: Option<PathBuf>,

    /// Statement text, taking precedence over FILE.
    #[arg(long)]
    sql: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a statement and print its category.
    Check {
        #[command(flatten)]
        input: Input,

        /// Print a JSON report instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical single-line form.
    Dump {
        #[command(flatten)]
        input: Input,
    },

    /// Print the statement laid out over several lines.
    Format {
        #[command(flatten)]
        input: Input,

        /// Spaces per indentation level.
        #[arg(short, long, env = "SQLBASIC_INDENT", default_value_t = 2)]
        indent: usize,
    },

    /// List the tokens of a statement.
    Tokens {
        #[command(flatten)]
        input: Input,
    },

    /// List the reserved words.
    Keywords,
}

impl Input {
    fn read(self) -> anyhow::Result<String> {
        Ok(read_sql(self.sql, self.file.as_deref(), std::io::stdin())?)
    }
}

/// Prints a command's output, or its error as an invalid-query message.
fn emit<E: std::fmt::Display>(result: Result<String, E>) -> ExitCode {
    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("query is invalid: {err}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let code = match cli.command {
        Commands::Check { input, json } => {
            let sql = input.read()?;
            let (output, valid) = commands::check(&sql, json)?;
            println!("{output}");
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::Dump { input } => emit(commands::dump(&input.read()?)),
        Commands::Format { input, indent } => {
            debug!(indent, "formatting statement");
            emit(commands::format(&input.read()?, indent))
        }
        Commands::Tokens { input } => emit(commands::tokens(&input.read()?)),
        Commands::Keywords => {
            println!("{}", commands::keywords());
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
