//! Build automation tasks for Flagrun
//!
//! Usage:
//!   cargo xtask build-web       # Build WASM into dist/web
//!   cargo xtask package-itch    # Create zip for itch.io upload

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const MQ_JS_BUNDLE_URL: &str = "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Flagrun")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM for web deployment
    BuildWeb {
        /// Mark as dev build (adds DEV to the page title)
        #[arg(long)]
        dev: bool,
    },
    /// Create zip file ready for itch.io upload
    PackageItch,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb { dev } => build_web(dev),
        Commands::PackageItch => package_itch(),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live inside the workspace")
}

/// Run `program args...` in `dir`, failing on a non-zero exit
fn run(program: &str, args: &[&str], dir: &Path) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Could not start `{}`", program))?;
    anyhow::ensure!(status.success(), "`{} {}` exited with {}", program, args.join(" "), status);
    Ok(())
}

/// Fetch macroquad's JS loader next to the wasm, unless already there
fn fetch_mq_js_bundle(dist: &Path) -> Result<()> {
    if dist.join("mq_js_bundle.js").exists() {
        return Ok(());
    }
    println!("Fetching mq_js_bundle.js...");
    run("curl", &["-sSfL", "-o", "mq_js_bundle.js", MQ_JS_BUNDLE_URL], dist)
}

fn build_web(dev: bool) -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run("cargo", &["build", "--release", "--target", "wasm32-unknown-unknown"], &root)?;

    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    println!("Copying files to dist/web...");
    std::fs::copy(
        root.join("target/wasm32-unknown-unknown/release/flagrun.wasm"),
        dist.join("flagrun.wasm"),
    )
    .context("WASM binary missing after build")?;
    std::fs::copy(root.join("web/index.html"), dist.join("index.html"))
        .context("Failed to copy web/index.html")?;

    fetch_mq_js_bundle(&dist)?;

    if dev {
        let index_path = dist.join("index.html");
        let index = std::fs::read_to_string(&index_path)?;
        std::fs::write(&index_path, index.replace("<title>Flagrun", "<title>[DEV] Flagrun"))?;
    }

    println!("Web build complete: dist/web/");
    Ok(())
}

fn package_itch() -> Result<()> {
    build_web(false)?;

    let dist = project_root()?.join("dist");
    let zip_path = dist.join("flagrun-itch.zip");
    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating itch.io zip...");
    run("zip", &["-qr", "../flagrun-itch.zip", "."], &dist.join("web"))?;

    println!("itch.io package ready: dist/flagrun-itch.zip");
    Ok(())
}
