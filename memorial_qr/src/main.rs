//! CLI entry point for the batch QR generator.
//! Usage: generate_qr <input-file> <output-dir>

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use log::info;
use memorial_qr::{ensure_out_dir, read_jobs, write_job};

const USAGE: &str = "Usage: generate_qr <input-file> <output-dir>";

#[derive(Parser)]
#[command(
    name = "generate_qr",
    author,
    version,
    about = "Write one QR code PNG per `label,url` line."
)]
struct Cli {
    /// Text file with one `label,url` (or bare url) per line.
    input: PathBuf,
    /// Directory receiving the PNG files; created if missing.
    out_dir: PathBuf,
    /// Anything after the output directory is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _extra: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(_) => {
            println!("{USAGE}");
            process::exit(1);
        },
    };

    ensure_out_dir(&cli.out_dir).context("while preparing output directory")?;
    let jobs = read_jobs(&cli.input).context("while reading QR input")?;
    info!("{} QR jobs read from {}", jobs.len(), cli.input.display());

    for job in &jobs {
        let path = write_job(job, &cli.out_dir).with_context(|| format!("while writing QR for '{}'", job.label))?;
        let fname = path.file_name().map_or_else(|| job.file_name(), |n| n.to_string_lossy().into_owned());
        println!("wrote {fname}");
    }
    Ok(())
}
