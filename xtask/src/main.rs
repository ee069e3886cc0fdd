use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ltype_assets::config::{
    BuildConfig, DEFAULT_BLANK_AUDIO, DEFAULT_BLANK_IMAGE, DEFAULT_OUT_DIR, DEFAULT_PACK,
    DEFAULT_PACKS_DIR, DEFAULT_SPRITES_DIR,
};
use std::path::PathBuf;

mod assets;
mod level_import;

use assets::OutputMode;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development automation scripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate asset identifiers and generate the client lookup tables
    BuildAssets {
        #[command(flatten)]
        content: ContentArgs,
        /// Print generated sources instead of writing them
        #[arg(long)]
        dry_run: bool,
        /// Fail if the generated sources on disk are out of date
        #[arg(long, conflicts_with = "dry_run")]
        check: bool,
    },
    /// Import a level layout (progress,<Category>_<number>,x per line)
    ImportLevel {
        /// Level layout file
        layout: PathBuf,
        /// Creator recorded for the new level
        #[arg(long, env = "LTYPE_LEVEL_CREATOR")]
        creator: String,
        /// Directory holding levels.csv and level_entities.csv
        #[arg(long, env = "LTYPE_LEVEL_STORE", default_value = "static/levels")]
        store: PathBuf,
        #[command(flatten)]
        content: ContentArgs,
    },
    /// Remove generated sources and their backups
    Clean {
        #[command(flatten)]
        content: ContentArgs,
    },
}

/// Content locations; every relative path is resolved against `--root`.
#[derive(Args, Debug)]
struct ContentArgs {
    /// Game repository root
    #[arg(long, env = "LTYPE_ROOT", default_value = ".")]
    root: PathBuf,
    /// Flat directory of sprite description resources
    #[arg(long, env = "LTYPE_SPRITES_DIR", default_value = DEFAULT_SPRITES_DIR)]
    sprites_dir: PathBuf,
    /// Directory with one sub-directory per content pack
    #[arg(long, env = "LTYPE_PACKS_DIR", default_value = DEFAULT_PACKS_DIR)]
    packs_dir: PathBuf,
    /// Pack promoted to index 0
    #[arg(long, env = "LTYPE_DEFAULT_PACK", default_value = DEFAULT_PACK)]
    default_pack: String,
    /// Image returned when a resolved file is missing
    #[arg(long, env = "LTYPE_BLANK_IMAGE", default_value = DEFAULT_BLANK_IMAGE)]
    blank_image: String,
    /// Audio returned when a resolved file is missing
    #[arg(long, env = "LTYPE_BLANK_AUDIO", default_value = DEFAULT_BLANK_AUDIO)]
    blank_audio: String,
    /// Directory the generated modules are written to
    #[arg(long, env = "LTYPE_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,
}

impl ContentArgs {
    fn into_config(self) -> BuildConfig {
        BuildConfig {
            root: self.root,
            sprites_dir: self.sprites_dir,
            packs_dir: self.packs_dir,
            default_pack: self.default_pack,
            blank_image: self.blank_image,
            blank_audio: self.blank_audio,
            out_dir: self.out_dir,
        }
    }
}

fn main() -> Result<()> {
    // Load .env before parsing so the env fallbacks see it
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::BuildAssets {
            content,
            dry_run,
            check,
        } => {
            let mode = if dry_run {
                OutputMode::DryRun
            } else if check {
                OutputMode::Check
            } else {
                OutputMode::Write
            };
            assets::run_build(&content.into_config(), mode)
        }
        Commands::ImportLevel {
            layout,
            creator,
            store,
            content,
        } => level_import::run_import(&content.into_config(), &layout, &creator, &store),
        Commands::Clean { content } => assets::run_clean(&content.into_config()),
    }
}
