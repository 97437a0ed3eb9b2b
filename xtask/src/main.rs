//! Project automation entry point.
//!
//! Implements the `xtask` helpers for rebuilding the memorial site, batch
//! generating QR signage, and packaging the generated site for upload.

use std::{
    ffi::OsStr,
    fs,
    fs::File,
    io,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result, bail};
use cargo_metadata::MetadataCommand;
use clap::{Args, Parser, Subcommand, ValueEnum};
use walkdir::WalkDir;
use zip::{CompressionMethod, ZipWriter, write::FileOptions};

#[derive(Parser)]
#[command(author, version, about = "Project automation tasks for the memorial site.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate every memorial page and the map page.
    Site(SiteArgs),
    /// Generate QR code PNGs from a `label,url` list.
    Qr(QrArgs),
    /// Stage the generated site (optionally zipped) for upload.
    Package(PackageArgs),
}

#[derive(Args, Clone)]
struct SiteArgs {
    /// CSV to read (defaults to the builder's own default inside --out).
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
    /// Output root of the generated site.
    #[arg(long, value_name = "DIR", default_value = "docs")]
    out: PathBuf,
    /// Site text overrides (TOML).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Cargo build profile used to run the builder.
    #[arg(long, value_enum, default_value_t = Profile::Debug)]
    profile: Profile,
}

#[derive(Args)]
struct QrArgs {
    /// Text file of `label,url` lines.
    input: PathBuf,
    /// Directory receiving the PNGs.
    out_dir: PathBuf,
    /// Build the QR tool without its encoder (placeholder images only).
    #[arg(long)]
    no_encoder: bool,
    /// Cargo build profile used to run the QR tool.
    #[arg(long, value_enum, default_value_t = Profile::Debug)]
    profile: Profile,
}

#[derive(Args)]
struct PackageArgs {
    /// Generated site to package.
    #[arg(long, value_name = "DIR", default_value = "docs")]
    site_dir: PathBuf,
    /// Regenerate the site before packaging.
    #[arg(long)]
    rebuild: bool,
    /// Where to place staged packages.
    #[arg(long, value_name = "DIR")]
    dist_dir: Option<PathBuf>,
    /// Desired archive style.
    #[arg(long, value_enum, default_value_t = ArchiveFormat::Zip, alias = "archive")]
    format: ArchiveFormat,
    /// Override generated package directory/archive name.
    #[arg(long, value_name = "NAME")]
    name: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Profile {
    Debug,
    Release,
}

impl Profile {
    fn cargo_flag(self) -> Option<&'static str> {
        match self {
            Profile::Debug => None,
            Profile::Release => Some("--release"),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ArchiveFormat {
    Zip,
    Directory,
}

struct Workspace {
    root: PathBuf,
    target_dir: PathBuf,
    site_version: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let workspace = Workspace::detect()?;

    match cli.command {
        Commands::Site(args) => build_site(&workspace, &args),
        Commands::Qr(args) => generate_qr(&workspace, &args),
        Commands::Package(args) => package_site(&workspace, &args),
    }
}

fn build_site(workspace: &Workspace, args: &SiteArgs) -> Result<()> {
    let out_dir = workspace.root.join(&args.out);

    let mut command = cargo_cmd("run", workspace);
    command.arg("-p").arg("memorial_site").arg("--bin").arg("generate");
    if let Some(flag) = args.profile.cargo_flag() {
        command.arg(flag);
    }
    command.arg("--");
    if let Some(csv) = &args.csv {
        command.arg(workspace.root.join(csv));
    }
    command.arg("--out").arg(&out_dir);
    if let Some(config) = &args.config {
        command.arg("--config").arg(workspace.root.join(config));
    }

    run_command(&mut command, "generate (memorial_site)")
}

fn generate_qr(workspace: &Workspace, args: &QrArgs) -> Result<()> {
    let input = workspace.root.join(&args.input);
    if !input.is_file() {
        bail!("QR input '{}' does not exist", input.display());
    }

    let mut command = cargo_cmd("run", workspace);
    command.arg("-p").arg("memorial_qr").arg("--bin").arg("generate_qr");
    if let Some(flag) = args.profile.cargo_flag() {
        command.arg(flag);
    }
    if args.no_encoder {
        command.arg("--no-default-features");
    }
    command.arg("--").arg(&input).arg(workspace.root.join(&args.out_dir));

    run_command(&mut command, "generate_qr (memorial_qr)")
}

fn package_site(workspace: &Workspace, args: &PackageArgs) -> Result<()> {
    if args.rebuild {
        build_site(
            workspace,
            &SiteArgs {
                csv: None,
                out: args.site_dir.clone(),
                config: None,
                profile: Profile::Release,
            },
        )?;
    }

    let site_dir = workspace.root.join(&args.site_dir);
    if !site_dir.join("map.html").is_file() {
        bail!(
            "expected a generated site at '{}' (no map.html); run `cargo run -p xtask -- site` first",
            site_dir.display()
        );
    }

    let dist_root = args
        .dist_dir
        .clone()
        .unwrap_or_else(|| workspace.target_dir.join("dist"));
    fs::create_dir_all(&dist_root).with_context(|| format!("unable to ensure dist dir {}", dist_root.display()))?;

    let package_name = args
        .name
        .clone()
        .unwrap_or_else(|| format!("memorial-site-v{}", workspace.site_version));

    let staging_dir = dist_root.join(&package_name);
    ensure_clean_dir(&staging_dir)?;
    let copied = stage_site(&site_dir, &staging_dir)
        .with_context(|| format!("staging site from {}", site_dir.display()))?;
    println!("Staged {copied} files from {}", site_dir.display());

    match args.format {
        ArchiveFormat::Directory => {
            println!("Package staged at {}", staging_dir.display());
        },
        ArchiveFormat::Zip => {
            let archive_path = dist_root.join(format!("{package_name}.zip"));
            create_zip_from_dir(&staging_dir, &archive_path)
                .with_context(|| format!("creating archive {}", archive_path.display()))?;
            println!("Archive written to {}", archive_path.display());
        },
    }

    Ok(())
}

fn ensure_clean_dir(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path).with_context(|| format!("removing existing directory {}", path.display()))?;
    }
    fs::create_dir_all(path).with_context(|| format!("creating directory {}", path.display()))
}

/// Copy the published part of a generated site into `dst`.
///
/// Source CSVs stay behind; they hold the raw records the pages were built from.
fn stage_site(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry.with_context(|| format!("walking {}", src.display()))?;
        let path = entry.path();
        let relative = match path.strip_prefix(src) {
            Ok(rel) if rel.as_os_str().is_empty() => continue,
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let target_path = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path).with_context(|| format!("creating {}", target_path.display()))?;
            continue;
        }
        if !is_published(relative) {
            continue;
        }
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::copy(path, &target_path)
            .with_context(|| format!("copying '{}' to '{}'", path.display(), target_path.display()))?;
        copied += 1;
    }
    Ok(copied)
}

fn is_published(path: &Path) -> bool {
    !path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn create_zip_from_dir(src: &Path, dest: &Path) -> Result<()> {
    let file = File::create(dest)?;
    let mut zip = ZipWriter::new(file);
    let dir_options = FileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .unix_permissions(0o755);
    let file_options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        let rel = match path.strip_prefix(src) {
            Ok(rel) if rel.as_os_str().is_empty() => continue,
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let mut name = rel.to_string_lossy().replace('\\', "/");
        if entry.file_type().is_dir() {
            name.push('/');
            zip.add_directory(name, dir_options)?;
            continue;
        }

        zip.start_file(name, file_options)?;
        let mut input = File::open(path)?;
        io::copy(&mut input, &mut zip)?;
    }

    zip.finish()?;
    Ok(())
}

fn cargo_cmd(subcommand: &str, workspace: &Workspace) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg(subcommand);
    cmd.current_dir(&workspace.root);
    cmd
}

fn run_command(command: &mut Command, label: &str) -> Result<()> {
    let status = command.status().with_context(|| format!("{label} failed to start"))?;
    if !status.success() {
        bail!("{label} exited with {}", status);
    }
    Ok(())
}

impl Workspace {
    fn detect() -> Result<Self> {
        let metadata = MetadataCommand::new()
            .no_deps()
            .exec()
            .context("gathering cargo metadata for workspace")?;

        let site_version = metadata
            .packages
            .iter()
            .find(|package| package.name == "memorial_site")
            .map(|package| package.version.to_string())
            .context("unable to find memorial_site package metadata")?;

        Ok(Self {
            root: metadata.workspace_root.into_std_path_buf(),
            target_dir: metadata.target_directory.into_std_path_buf(),
            site_version,
        })
    }
}
