//! rapidup - batch rapid upload for Baidu Netdisk
//!
//! CLI binary for submitting rapid upload links.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "rapidup")]
#[command(about = "Batch rapid upload for Baidu Netdisk")]
#[command(version)]
struct Cli {
    /// Disk web host
    #[arg(long, global = true, default_value = "pan.baidu.com")]
    host: String,

    /// Log to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit rapid upload links
    Upload {
        /// Target directory (defaults to the root)
        #[arg(short, long)]
        target: Option<String>,

        /// Web-UI URL of the target directory
        #[arg(long, conflicts_with = "target")]
        url: Option<String>,

        /// File with one link per line, `-` for stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Dry run - list parsed links without submitting
        #[arg(long)]
        dry_run: bool,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Session cookie management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test the session cookie
    Test,
    /// Show cookie setup instructions
    Setup,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "off",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Upload {
            target,
            url,
            input,
            dry_run,
            yes,
        } => {
            let all_ok = cli::run_upload(cli::UploadOptions {
                host: &cli.host,
                target: target.as_deref(),
                url: url.as_deref(),
                input: input.as_deref(),
                dry_run,
                yes,
            })
            .await?;

            if !all_ok {
                std::process::exit(1);
            }
        }
        Commands::Auth { action } => match action {
            AuthAction::Test => cli::run_auth_test(&cli.host).await?,
            AuthAction::Setup => cli::run_auth_setup(),
        },
    }

    Ok(())
}
