//! CLI administration tool for the Freebie API logo store.
//!
//! Works directly on the logos directory, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Preview the filename a logo would be saved under
//! cargo run --bin admin -- filename "Canva Pro" --url https://example.com/canva.svg
//!
//! # Download and store a logo
//! cargo run --bin admin -- fetch https://logo.clearbit.com/figma.com Figma
//!
//! # List stored logos
//! cargo run --bin admin -- list
//! ```
//!
//! # Environment Variables
//!
//! - `PUBLIC_DIR` (optional): Public assets root, logos live in `<PUBLIC_DIR>/logos` (default: `public`)
//! - `UPSTREAM_TIMEOUT_SECS` (optional): Timeout for logo downloads (default: 15)

use freebie_api::application::services::LogoPersistService;
use freebie_api::domain::entities::SaveOutcome;
use freebie_api::domain::logo_filename::{
    DEFAULT_EXTENSION, logo_filename, public_path, sanitize_company_name,
};
use freebie_api::domain::repositories::LogoRepository;
use freebie_api::infrastructure::http::{HttpImageFetcher, build_client};
use freebie_api::infrastructure::persistence::FsLogoRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// CLI tool for managing stored logos.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the filename and public path derived for a company
    Filename {
        /// Company name as entered by the user
        company: String,

        /// Logo URL, used for the file extension
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Download a logo and store it (never overwrites)
    Fetch {
        /// Logo URL
        url: String,

        /// Company name
        company: String,
    },

    /// List stored logos
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let logos_dir = logos_dir();

    match cli.command {
        Commands::Filename { company, url } => show_filename(&company, url.as_deref())?,
        Commands::Fetch { url, company } => fetch_logo(logos_dir, &url, &company).await?,
        Commands::List => list_logos(logos_dir).await?,
    }

    Ok(())
}

fn logos_dir() -> PathBuf {
    let public_dir = std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string());
    PathBuf::from(public_dir).join("logos")
}

fn upstream_timeout() -> Result<Duration> {
    let secs = match std::env::var("UPSTREAM_TIMEOUT_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .context("UPSTREAM_TIMEOUT_SECS must be a valid number")?,
        Err(_) => 15,
    };
    Ok(Duration::from_secs(secs))
}

/// Prints the sanitized name and resulting filename without touching disk.
fn show_filename(company: &str, url: Option<&str>) -> Result<()> {
    let sanitized = sanitize_company_name(company);
    if sanitized.is_empty() {
        anyhow::bail!("Company name '{company}' has no letters or digits");
    }

    let filename = match url {
        Some(raw) => {
            let url = Url::parse(raw).with_context(|| format!("Invalid URL '{raw}'"))?;
            logo_filename(company, &url)
        }
        None => format!("{sanitized}.{DEFAULT_EXTENSION}"),
    };

    println!("  Sanitized: {}", sanitized.cyan());
    println!("  Filename:  {}", filename.bright_white().bold());
    println!("  Path:      {}", public_path(&filename).bright_cyan());

    Ok(())
}

/// Downloads `url` and stores it for `company`.
///
/// Uses the same service as `POST /api/save-logo`, so naming and
/// write-once behavior are identical.
async fn fetch_logo(logos_dir: PathBuf, url: &str, company: &str) -> Result<()> {
    println!("{}", "Fetching logo".bright_blue().bold());
    println!();

    let client = build_client(upstream_timeout()?).context("Failed to build HTTP client")?;
    let service = LogoPersistService::new(
        Arc::new(HttpImageFetcher::new(client)),
        Arc::new(FsLogoRepository::new(&logos_dir)),
    );

    let logo = service
        .persist(url, company)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to save logo: {e}"))?;

    match logo.outcome {
        SaveOutcome::Created => println!("{}", "Logo saved".green().bold()),
        SaveOutcome::AlreadyExists => {
            println!("{}", "Logo already exists, left untouched".yellow())
        }
    }
    println!("  File: {}", logos_dir.join(&logo.filename).display());
    println!("  Path: {}", logo.public_path.bright_cyan());
    println!();

    Ok(())
}

/// Lists stored logos.
///
/// # Output Format
///
/// ```text
/// Stored logos (public/logos)
///
///   Filename                                 Size
///   ---------------------------------------------------
///   canva-pro.svg                            2.1 KB
///   figma.png                                812 B
/// ```
async fn list_logos(logos_dir: PathBuf) -> Result<()> {
    println!(
        "{} ({})",
        "Stored logos".bright_blue().bold(),
        logos_dir.display()
    );
    println!();

    let repository = FsLogoRepository::new(&logos_dir);
    let logos = repository
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list logos: {e}"))?;

    if logos.is_empty() {
        println!("{}", "  No logos found".yellow());
        return Ok(());
    }

    println!(
        "  {:<40} {}",
        "Filename".bright_white().bold(),
        "Size".bright_white().bold()
    );
    println!("  {}", "-".repeat(51).bright_black());

    let mut total = 0u64;
    for logo in &logos {
        total += logo.size_bytes;
        println!(
            "  {:<40} {}",
            logo.filename.cyan(),
            format_size(logo.size_bytes).bright_black()
        );
    }

    println!();
    println!(
        "  Total: {} ({})",
        logos.len().to_string().bright_white().bold(),
        format_size(total)
    );
    println!();

    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
