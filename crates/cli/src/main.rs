//! `portfolio`: run the portfolio page in the terminal, or work with its
//! content and contact form from the command line.

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, WrapErr};
use colored::Colorize;
use pf_core::config::load_config;
use pf_core::form::validate;
use pf_core::init::{generate_portfolio_structure, InitOptions};
use pf_core::transport::SimulatedTransport;
use pf_protocol::ContactFormData;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "portfolio", version, about = "Interactive portfolio page in the terminal")]
struct Cli {
    /// Directory containing `.portfolio/`.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Append logs to this file while the page is running.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a contact form submission without sending it.
    Validate {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Print the loaded page content as JSON.
    Content,
    /// Write the built-in content to `.portfolio/` for editing.
    Init {
        /// Overwrite an existing `.portfolio/`.
        #[arg(long)]
        force: bool,
        /// Only write `config.toml`.
        #[arg(long)]
        minimal: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command {
        // When `portfolio` is called without a subcommand, launch the TUI
        None => {
            init_tracing(cli.log_file.as_deref(), true)?;
            run_page(&cli.root).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Validate {
            name,
            email,
            message,
        }) => {
            init_tracing(cli.log_file.as_deref(), false)?;
            Ok(run_validate(ContactFormData {
                name,
                email,
                message,
            }))
        }
        Some(Command::Content) => {
            init_tracing(cli.log_file.as_deref(), false)?;
            let config = load_config(&cli.root).await?;
            println!("{}", serde_json::to_string_pretty(&config.content)?);
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Init { force, minimal }) => {
            init_tracing(cli.log_file.as_deref(), false)?;
            let written = generate_portfolio_structure(InitOptions {
                target_dir: cli.root,
                force,
                minimal,
            })
            .await?;
            for file in written {
                println!("{} .portfolio/{file}", "created".green());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_page(root: &Path) -> color_eyre::Result<()> {
    let config = load_config(root)
        .await
        .wrap_err_with(|| format!("failed to load content from {}", root.display()))?;
    let transport = Arc::new(SimulatedTransport::new(Duration::from_millis(
        config.global.form.submit_delay_ms,
    )));

    pf_tui::run_app(config, transport)
        .await
        .map_err(|e| eyre!(e))
}

/// Print the validation result; the exit code is non-zero when invalid.
fn run_validate(data: ContactFormData) -> ExitCode {
    let errors = validate(&data);
    if errors.is_empty() {
        println!("{} form is valid", "✓".green().bold());
        return ExitCode::SUCCESS;
    }

    for (key, message) in errors.iter() {
        println!("{} {}: {}", "✗".red().bold(), key.key().bold(), message.red());
    }
    ExitCode::FAILURE
}

/// Install the tracing subscriber.
///
/// Logs go to `log_file` when given. Otherwise they go to stderr, except
/// while the TUI owns the terminal, where they are dropped.
fn init_tracing(log_file: Option<&Path>, interactive: bool) -> color_eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| eyre!(e))
        }
        None if interactive => Ok(()),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| eyre!(e)),
    }
}
