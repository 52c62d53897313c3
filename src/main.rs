//! Tibia assets CLI - Command-line tool for inspecting Tibia client asset files.
//!
//! This is the main entry point for the `tibia-assets` command-line application.

use std::collections::BTreeMap;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tibia_assets::prelude::*;

/// Tibia assets - .dat and .spr inspection tool
#[derive(Parser)]
#[command(name = "tibia-assets")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show header counts and decoded totals of a .dat file
    DatInfo {
        /// Path to the .dat file
        #[arg(short, long, env = "TIBIA_DAT")]
        dat: PathBuf,

        /// ID of the first item record
        #[arg(long, default_value_t = DatOptions::FIRST_ITEM_ID)]
        first_item_id: u32,

        /// Only decode the item range
        #[arg(long)]
        items_only: bool,
    },

    /// Dump every decoded thing type of a .dat file as JSON
    DatDump {
        /// Path to the .dat file
        #[arg(short, long, env = "TIBIA_DAT")]
        dat: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,

        /// ID of the first item record
        #[arg(long, default_value_t = DatOptions::FIRST_ITEM_ID)]
        first_item_id: u32,
    },

    /// Show header and occupancy of a .spr file
    SprInfo {
        /// Path to the .spr file
        #[arg(short, long, env = "TIBIA_SPR")]
        spr: PathBuf,

        /// The file uses a 16-bit sprite count
        #[arg(long)]
        legacy: bool,
    },

    /// Export a single sprite as PNG
    SprExport {
        /// Path to the .spr file
        #[arg(short, long, env = "TIBIA_SPR")]
        spr: PathBuf,

        /// Sprite ID
        #[arg(short, long)]
        id: u32,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        /// The file uses a 16-bit sprite count
        #[arg(long)]
        legacy: bool,
    },

    /// Decode every sprite and write one PNG per ID
    SprExtract {
        /// Path to the .spr file
        #[arg(short, long, env = "TIBIA_SPR")]
        spr: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// The file uses a 16-bit sprite count
        #[arg(long)]
        legacy: bool,

        /// Skip malformed sprites instead of aborting
        #[arg(long)]
        lenient: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::DatInfo {
            dat,
            first_item_id,
            items_only,
        } => {
            cmd_dat_info(&dat, first_item_id, items_only)?;
        }
        Commands::DatDump {
            dat,
            output,
            first_item_id,
        } => {
            cmd_dat_dump(&dat, &output, first_item_id)?;
        }
        Commands::SprInfo { spr, legacy } => {
            cmd_spr_info(&spr, layout(legacy))?;
        }
        Commands::SprExport {
            spr,
            id,
            output,
            legacy,
        } => {
            cmd_spr_export(&spr, id, &output, layout(legacy))?;
        }
        Commands::SprExtract {
            spr,
            output,
            legacy,
            lenient,
        } => {
            let policy = if lenient {
                LoadPolicy::Lenient
            } else {
                LoadPolicy::Strict
            };
            cmd_spr_extract(&spr, &output, layout(legacy), policy)?;
        }
    }

    Ok(())
}

/// Install the log subscriber. `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn layout(legacy: bool) -> SpriteLayout {
    if legacy {
        SpriteLayout::Legacy
    } else {
        SpriteLayout::Extended
    }
}

fn load_dat(path: &Path, options: &DatOptions) -> Result<DatFile> {
    let data = ByteSource::open(path).context("Failed to open .dat file")?;

    let start = Instant::now();
    let dat = DatFile::parse_with(&data, options, &mut TracingObserver)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    info!(things = dat.len(), elapsed = ?start.elapsed(), "decoded dat file");

    Ok(dat)
}

fn cmd_dat_info(path: &Path, first_item_id: u32, items_only: bool) -> Result<()> {
    let options = DatOptions {
        first_item_id,
        through: if items_only {
            ThingCategory::Item
        } else {
            ThingCategory::Distance
        },
    };

    let dat = load_dat(path, &options)?;
    let header = dat.header();

    println!("Signature: 0x{:08X}", dat.signature());
    for category in ThingCategory::all() {
        println!(
            "{:>9}: last ID {:>6}, decoded {:>6}",
            category.name(),
            category.last_id(header),
            dat.things(category).len()
        );
    }
    println!("\nTotal: {} things", dat.len());

    Ok(())
}

fn cmd_dat_dump(path: &Path, output: &Path, first_item_id: u32) -> Result<()> {
    let options = DatOptions {
        first_item_id,
        ..DatOptions::default()
    };
    let dat = load_dat(path, &options)?;

    // Sorted by category, then ID, for stable output
    let dump: BTreeMap<&str, BTreeMap<u32, &ThingType>> = ThingCategory::all()
        .into_iter()
        .map(|category| {
            let things: BTreeMap<u32, &ThingType> =
                dat.things(category).iter().map(|(id, thing)| (*id, thing)).collect();
            (category.name(), things)
        })
        .collect();

    let file = fs::File::create(output).context("Failed to create output file")?;
    serde_json::to_writer_pretty(BufWriter::new(file), &dump).context("Failed to write JSON")?;

    println!("Wrote {} things to {}", dat.len(), output.display());

    Ok(())
}

fn cmd_spr_info(path: &Path, layout: SpriteLayout) -> Result<()> {
    let file = SpriteFile::open(path, layout).context("Failed to open .spr file")?;

    let mut occupied = 0usize;
    let mut empty = 0usize;
    let mut invalid = 0usize;

    for id in 0..=file.count() {
        match file.resolve(id) {
            Ok(_) => occupied += 1,
            Err(e) if e.is_not_found() => empty += 1,
            Err(e) => {
                debug!(id, error = %e, "unreadable address entry");
                invalid += 1;
            }
        }
    }

    println!("Signature: 0x{:08X}", file.signature());
    println!("Layout:    {:?}", file.layout());
    println!("Count:     {}", file.count());
    println!("Occupied:  {}", occupied);
    println!("Empty:     {}", empty);
    if invalid > 0 {
        println!("Invalid:   {}", invalid);
    }

    Ok(())
}

fn cmd_spr_export(path: &Path, id: u32, output: &Path, layout: SpriteLayout) -> Result<()> {
    let sprite = SpriteManager::new(path, layout)
        .load_by_id(id)
        .with_context(|| format!("Failed to load sprite {}", id))?;

    save_png(&sprite, output)?;
    println!("Sprite {} written to {}", id, output.display());

    Ok(())
}

fn cmd_spr_extract(path: &Path, output: &Path, layout: SpriteLayout, policy: LoadPolicy) -> Result<()> {
    println!("Loading sprites: {}", path.display());

    let manager = SpriteManager::new(path, layout).with_policy(policy);

    let pb = ProgressBar::new(0);
    pb.set_style(progress_style()?);

    let start = Instant::now();
    let sprites = manager
        .load_all_parallel_with_progress(|done, total| {
            pb.set_length(total as u64);
            pb.set_position(done as u64);
        })
        .context("Failed to load sprites")?;
    pb.finish_and_clear();

    let report = sprites.report();
    println!(
        "Decoded {} sprites in {:?} ({} empty, {} malformed)",
        report.loaded,
        start.elapsed(),
        report.not_found,
        report.failed
    );

    fs::create_dir_all(output)?;

    let pb = ProgressBar::new(sprites.len() as u64);
    pb.set_style(progress_style()?);

    for id in sprites.ids() {
        if let Some(sprite) = sprites.get(id) {
            save_png(sprite, &output.join(format!("{}.png", id)))?;
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done");
    println!("Wrote {} PNG files to {}", sprites.len(), output.display());

    Ok(())
}

fn progress_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
        .progress_chars("#>-"))
}

fn save_png(sprite: &Sprite, output: &Path) -> Result<()> {
    let image = image::RgbaImage::from_raw(sprite.width(), sprite.height(), sprite.to_rgba_bytes())
        .context("Sprite buffer does not match its dimensions")?;
    image
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
