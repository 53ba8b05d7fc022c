//! Upload command - submit rapid upload links as a batch

use crate::cli::input::{confirm, is_interactive, read_links};
use crate::cli::progress::CliProgress;
use crate::cli::style::{CHECK, CROSS, Paint, Stream, Tone, hyperlink};
use anstream::{eprintln, println};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rapid_upload::error::Result;
use rapid_upload::remote::{DiskLocation, create_remote_service, parse_disk_url};
use rapid_upload::submit::{BatchTally, RetryPolicy, check_login, run_batch};
use rapid_upload::types::FileDescriptor;
use std::path::Path;

/// Options for the upload command
#[derive(Debug, Clone, Copy)]
pub struct UploadOptions<'a> {
    /// Web host, used unless `url` names one
    pub host: &'a str,
    /// Target directory
    pub target: Option<&'a str>,
    /// Web-UI URL of the target directory
    pub url: Option<&'a str>,
    /// File with links, `-` for stdin
    pub input: Option<&'a Path>,
    /// List links without submitting
    pub dry_run: bool,
    /// Skip the confirmation prompt
    pub yes: bool,
}

/// Run the upload command
///
/// Returns whether every file succeeded.
pub async fn run_upload(opts: UploadOptions<'_>) -> Result<bool> {
    let location = match opts.url {
        Some(url) => parse_disk_url(url)?,
        None => DiskLocation {
            host: opts.host.to_string(),
            path: opts.target.unwrap_or_default().to_string(),
        },
    };
    let target_dir = if location.path.is_empty() { "/" } else { &location.path };

    if opts.dry_run {
        let files = read_links(opts.input)?;
        println!("Dry run - no changes will be made");
        print_links(&files, target_dir);
        return Ok(true);
    }

    // Login check gates the whole command
    let service = create_remote_service(&location.host).await?;
    check_login(service.as_ref()).await?;
    println!("{} Logged in to {}", CHECK.paint(Tone::Success), location.host.paint(Tone::Accent));

    let files = read_links(opts.input)?;
    print_links(&files, target_dir);

    if !opts.yes && is_interactive() && !confirm(&format!("Submit {} files?", files.len()))? {
        println!("Cancelled");
        return Ok(true);
    }

    let progress = CliProgress::new();
    let mut rng = StdRng::from_os_rng();
    let tally = run_batch(
        service.as_ref(),
        &location.path,
        &files,
        &RetryPolicy::default(),
        &mut rng,
        &progress,
    )
    .await;

    print_summary(&tally, &location);
    Ok(tally.all_succeeded())
}

fn print_links(files: &[FileDescriptor], target_dir: &str) {
    println!(
        "{} {} link{} for {}:",
        "Found".paint(Tone::Emphasis),
        files.len().paint(Tone::Accent),
        if files.len() == 1 { "" } else { "s" },
        target_dir.paint(Tone::Accent)
    );
    for file in files {
        let size = file
            .size_bytes()
            .map_or_else(|| format!("{} B", file.size), format_size);
        println!("  - {} {}", file.path, size.paint(Tone::Muted));
    }
    println!();
}

fn print_summary(tally: &BatchTally, location: &DiskLocation) {
    println!();
    println!(
        "Done: {} succeeded, {} failed",
        tally.success_count.paint(Tone::Success),
        if tally.failure_count == 0 {
            tally.failure_count.to_string()
        } else {
            tally.failure_count.paint(Tone::Error).to_string()
        }
    );

    for failed in &tally.failures {
        eprintln!(
            "  {} {}: {}",
            CROSS.paint(Tone::Error).on(Stream::Stderr),
            failed.path.paint(Tone::Accent).on(Stream::Stderr),
            failed.reason
        );
    }

    println!(
        "Open {}",
        hyperlink(Stream::Stdout, "target directory", &location.web_url())
    );
}

/// Human-readable size with binary units
#[allow(clippy::cast_precision_loss)]
fn format_size(bytes: u128) -> String {
    const UNITS: [&str; 6] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
