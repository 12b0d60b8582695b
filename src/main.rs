//! assertion-verifier: check a `user=`/`expire=` assertion against the allow-list and its expiry.

use assertion_verifier::{inspect, verify};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "assertion-verifier")]
#[command(about = "Validate user/expire assertions against an allow-list and expiry date")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify an assertion. Exits 0 when verified, 1 on any rejection.
    Verify {
        /// Raw assertion text (newline-separated key=value entries).
        #[arg(value_name = "ASSERTION")]
        assertion: Option<String>,

        /// Read the assertion from a file ("-" for stdin).
        #[arg(long, conflicts_with = "assertion")]
        file: Option<PathBuf>,

        /// Path to policy JSON (default allow-list: origin).
        #[arg(long, env = "ASSERTION_VERIFIER_POLICY")]
        policy: Option<PathBuf>,

        /// Pin the clock (RFC 3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD, local time).
        #[arg(long)]
        now: Option<String>,

        /// Print a JSON report instead of a message.
        #[arg(long)]
        json: bool,
    },

    /// Parse an assertion and print its fields as JSON without applying policy.
    Inspect {
        #[arg(value_name = "ASSERTION")]
        assertion: Option<String>,

        /// Read the assertion from a file ("-" for stdin).
        #[arg(long, conflicts_with = "assertion")]
        file: Option<PathBuf>,
    },

    /// Print the effective policy as JSON.
    Policy {
        #[arg(long, env = "ASSERTION_VERIFIER_POLICY")]
        policy: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_code(verified: bool) -> ExitCode {
    if verified {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Verify {
            assertion,
            file,
            policy,
            now,
            json,
        } => {
            let verified = verify::run(
                assertion.as_deref(),
                file.as_deref(),
                policy.as_deref(),
                now.as_deref(),
                json,
            )?;
            Ok(exit_code(verified))
        }
        Commands::Inspect { assertion, file } => {
            let parsed = inspect::run(assertion.as_deref(), file.as_deref())?;
            Ok(exit_code(parsed))
        }
        Commands::Policy { policy } => {
            let policy = verify::load_policy(policy.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&policy)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
