//! `build-assets` and `clean`: run the asset pipeline and manage the
//! generated modules on disk.

use anyhow::{Context, Result};
use ltype_assets::config::BuildConfig;
use ltype_assets::emit::{GENERATED_FILES, GeneratedFile};
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Write,
    DryRun,
    Check,
}

pub fn run_build(config: &BuildConfig, mode: OutputMode) -> Result<()> {
    println!("Building asset tables...");
    println!("  Sprites: {}", config.sprites_path().display());
    println!("  Packs:   {}", config.packs_path().display());
    log::debug!("{:?}", config);

    // Everything is rendered before the first write
    let output = ltype_assets::build(config).context("Asset build failed")?;
    println!(
        "  {} sprites, {} packs, {} audio groups, {} background/HUD files",
        output.minimal.len(),
        output.full.packs.len(),
        output.full.audios.len(),
        output.full.files.len()
    );
    println!();

    let out_dir = config.out_path();
    match mode {
        OutputMode::DryRun => {
            for file in &output.files {
                println!("{} ({} lines):", file.name, file.content.lines().count());
                println!("{}", "=".repeat(80));
                println!("{}", file.content);
                println!("{}", "=".repeat(80));
            }
        }
        OutputMode::Check => {
            let stale = stale_files(&out_dir, &output.files)?;
            if !stale.is_empty() {
                anyhow::bail!(
                    "Generated sources in {} are out of date: {}. Run `cargo xtask build-assets` and commit the changes.",
                    out_dir.display(),
                    stale.join(", ")
                );
            }
            println!("Generated sources are up to date.");
        }
        OutputMode::Write => {
            for file in &output.files {
                write_output_file(&out_dir.join(file.name), &file.content)?;
            }
            println!("\nAsset tables written to {}", out_dir.display());
        }
    }

    Ok(())
}

/// Names of generated files whose content on disk differs from `files`.
fn stale_files(out_dir: &Path, files: &[GeneratedFile]) -> Result<Vec<&'static str>> {
    let mut stale = Vec::new();
    for file in files {
        let path = out_dir.join(file.name);
        if !path.exists() {
            stale.push(file.name);
            continue;
        }
        let on_disk = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if on_disk != file.content {
            stale.push(file.name);
        }
    }
    Ok(stale)
}

/// Write the generated code to the output file.
fn write_output_file(output_path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    // Create backup of existing file
    if output_path.exists() {
        let backup_path = output_path.with_extension("rs.bak");
        fs::copy(output_path, &backup_path)
            .with_context(|| format!("Failed to back up {}", output_path.display()))?;
        println!("  Backed up existing file to: {}", backup_path.display());
    }

    let mut file = fs::File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    file.write_all(content.as_bytes())?;

    println!(
        "  Wrote {} bytes to: {}",
        content.len(),
        output_path.display()
    );

    Ok(())
}

pub fn run_clean(config: &BuildConfig) -> Result<()> {
    println!("Cleaning generated files...");
    let out_dir = config.out_path();
    if !out_dir.exists() {
        println!("Nothing to clean.");
        return Ok(());
    }

    let mut known_files = Vec::new();
    for name in GENERATED_FILES {
        known_files.push(name.to_string());
        known_files.push(format!("{}.bak", name));
    }

    let mut deleted_count = 0;
    for entry in fs::read_dir(&out_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if known_files.iter().any(|known| known == name) {
            fs::remove_file(&path).with_context(|| format!("Failed to remove {:?}", path))?;
            deleted_count += 1;
        } else {
            println!("⚠️  Skipping unknown file: {:?}", name);
        }
    }

    if deleted_count > 0 {
        println!("✅ Removed {} generated files", deleted_count);
    } else {
        println!("Nothing to clean.");
    }
    Ok(())
}
