//! CLI entry point for the memorial page builder.
//! Usage: generate [csv-path] [--out <dir>] [--config <site.toml>]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use memorial_site::config::{DEFAULT_CSV_NAME, DEFAULT_OUT_DIR};
use memorial_site::{BuildOptions, SiteConfig, build_site};

#[derive(Parser)]
#[command(
    name = "generate",
    author,
    version,
    about = "Build memorial pages and the map page from a CSV file."
)]
struct Cli {
    /// CSV file to read. Defaults to `<out>/memorials_completed_with_images.csv`.
    csv: Option<PathBuf>,
    /// Output root for `people/`, `map.html`, and `assets/`.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    out: PathBuf,
    /// TOML file overriding the footer, map title, and map intro text.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let Cli { csv, out, config } = Cli::parse();

    let csv_path = csv.unwrap_or_else(|| out.join(DEFAULT_CSV_NAME));
    if !csv_path.exists() {
        eprintln!("CSV not found: {}", csv_path.display());
        process::exit(1);
    }

    let config = match config {
        Some(path) => SiteConfig::load(&path).context("while loading site config")?,
        None => SiteConfig::default(),
    };

    info!("Start: building memorial site into {}", out.display());
    let summary = build_site(&BuildOptions {
        csv_path: csv_path.clone(),
        out_dir: out,
        config,
    })
    .context("while building memorial site")?;

    let csv_name = csv_path
        .file_name()
        .map_or_else(|| csv_path.display().to_string(), |name| name.to_string_lossy().into_owned());
    println!(
        "Created {} pages and rebuilt {} from {}",
        summary.pages,
        summary.map_path.display(),
        csv_name
    );
    Ok(())
}
