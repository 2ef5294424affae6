//! Stache CLI - A command-line driver for the stache Mustache tokenizer.
//!
//! This is the main entry point for the `stache` binary. It uses clap for
//! argument parsing and dispatches to the appropriate command handler.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use stache_lex::DelimiterPair;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::OutputFormat, run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{CliError, Result};

/// Stache - inspect and validate Mustache templates
#[derive(Parser, Debug)]
#[command(name = "stache")]
#[command(author = "Stache Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and validate Mustache templates", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "STACHE_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "STACHE_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "STACHE_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the stache CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a template
    Tokens(TokensCommand),

    /// Check that templates tokenize without errors
    ///
    /// Every file is checked. Exits with a non-zero status if any failed.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Template file
    file: PathBuf,

    /// Initial delimiters, e.g. "<% %>" (default: from config)
    #[arg(short, long)]
    delimiters: Option<DelimiterPair>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Template name used in error messages (default: the file path)
    #[arg(long)]
    template_id: Option<String>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Template files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Initial delimiters, e.g. "<% %>" (default: from config)
    #[arg(short, long)]
    delimiters: Option<DelimiterPair>,
}

/// Main entry point for the stache CLI.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging, load configuration and run the selected command.
fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that token dumps on stdout stay machine readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Check(args) => execute_check(args, config),
    }
}

/// Delimiters from the command line, else from the configuration.
fn effective_delimiters(flag: Option<DelimiterPair>, config: &Config) -> Result<DelimiterPair> {
    match flag {
        Some(pair) => Ok(pair),
        None => config.lexer.delimiter_pair(),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        delimiters: effective_delimiters(args.delimiters, &config)?,
        format: args.format.unwrap_or(config.output.format),
        file: args.file,
        template_id: args.template_id,
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        delimiters: effective_delimiters(args.delimiters, &config)?,
        files: args.files,
    };
    run_check(check_args)
}
