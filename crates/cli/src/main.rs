//! Mock Login CLI - Exercise the login form logic from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Submit the login form
//! mock-login check -i testuser@example.com -p Test1234
//!
//! # Click a mock social sign-in button
//! mock-login social facebook
//!
//! # Check a credentials file before pointing the server at it
//! mock-login credentials verify credentials.json
//! ```
//!
//! # Commands
//!
//! - `check` - Submit an identifier and password; exits 1 on an error message
//! - `social` - Mock Google/Facebook sign-in
//! - `credentials verify` - Validate a JSON credentials file

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mock_login_core::{Message, MessageKind, SocialProvider};

mod commands;

#[derive(Parser)]
#[command(name = "mock-login")]
#[command(author, version, about = "Mock login CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit the login form
    Check {
        /// Email or phone number
        #[arg(short, long, default_value = "")]
        identifier: String,

        /// Password
        #[arg(short, long, default_value = "")]
        password: String,

        /// JSON credentials file (default: `MOCK_LOGIN_CREDENTIALS` or the built-in list)
        #[arg(short, long)]
        credentials: Option<PathBuf>,
    },
    /// Run a mock social sign-in
    Social {
        /// `google` or `facebook`
        #[arg(value_parser = str::parse::<SocialProvider>)]
        provider: SocialProvider,
    },
    /// Manage credentials files
    Credentials {
        #[command(subcommand)]
        action: CredentialsAction,
    },
}

#[derive(Subcommand)]
enum CredentialsAction {
    /// Validate a credentials file
    Verify {
        /// Path to the JSON credentials file
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mock_login_cli=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

#[allow(clippy::print_stdout)]
fn run(cli: Cli) -> Result<ExitCode, commands::CommandError> {
    match cli.command {
        Commands::Check {
            identifier,
            password,
            credentials,
        } => {
            let message = commands::login::check(&identifier, &password, credentials.as_deref())?;
            Ok(print_message(&message))
        }
        Commands::Social { provider } => {
            let message = commands::login::social(provider);
            Ok(print_message(&message))
        }
        Commands::Credentials { action } => match action {
            CredentialsAction::Verify { path } => {
                let identifiers = commands::credentials::verify(&path)?;
                for identifier in identifiers {
                    println!("{identifier}");
                }
                Ok(ExitCode::SUCCESS)
            }
        },
    }
}

/// Print a message as `<kind>: <text>` and map its kind to an exit code.
#[allow(clippy::print_stdout)]
fn print_message(message: &Message) -> ExitCode {
    println!("{}: {}", message.kind(), message.text());
    ExitCode::from(exit_status(message.kind()))
}

const fn exit_status(kind: MessageKind) -> u8 {
    match kind {
        MessageKind::Success => 0,
        MessageKind::Error => 1,
    }
}
