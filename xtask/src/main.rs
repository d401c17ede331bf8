//! Build automation tasks for Raven Shooter
//!
//! Usage:
//!   cargo xtask build-web       # Build both games for the web
//!   cargo xtask package-web     # Create a zip of the web build

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

/// The wasm binaries produced by the main crate
const BINS: [&str; 2] = ["raven-shooter", "welcome"];

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Raven Shooter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM binaries for web deployment
    BuildWeb,
    /// Create a zip of the web build, ready to upload
    PackageWeb,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb => build_web(),
        Commands::PackageWeb => package_web(),
    }
}

/// Get the project root directory
fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Download a file from URL to destination
fn download_file(url: &str, dest: &Path) -> Result<()> {
    println!("Downloading {}...", url);
    run_cmd(
        Command::new("curl")
            .args(["-L", "-o"])
            .arg(dest)
            .arg(url),
    )
}

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Build WASM for web deployment
fn build_web() -> Result<()> {
    let root = project_root();
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown"]),
    )?;

    // Clean and create dist folder
    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    println!("Copying files to dist/web...");
    for bin in BINS {
        let wasm = format!("{}.wasm", bin);
        std::fs::copy(
            root.join("target/wasm32-unknown-unknown/release").join(&wasm),
            dist.join(&wasm),
        )?;
    }

    // Copy web files from docs/ when present
    let docs = root.join("docs");
    for file in ["index.html", "welcome.html"] {
        let src = docs.join(file);
        if src.exists() {
            std::fs::copy(&src, dist.join(file))?;
        }
    }

    // Download macroquad JS bundle
    let mq_js = dist.join("mq_js_bundle.js");
    if !mq_js.exists() {
        download_file(
            "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js",
            &mq_js,
        )?;
    }

    // Copy sprite assets
    copy_dir_recursive(&root.join("assets"), &dist.join("assets"))?;

    println!("Web build complete: dist/web/");
    Ok(())
}

/// Zip up the web build
fn package_web() -> Result<()> {
    build_web()?;

    let root = project_root();
    let dist = root.join("dist");
    let zip_path = dist.join("raven-shooter-web.zip");

    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating web zip...");
    run_cmd(
        Command::new("zip")
            .current_dir(dist.join("web"))
            .args(["-r", "../raven-shooter-web.zip", "."]),
    )?;

    println!("Web package ready: dist/raven-shooter-web.zip");
    Ok(())
}
