//! Skyline Explorer - Skyscraper CSV Dashboard & Interactive Chart Viewer
//!
//! Loads a skyscraper CSV once at startup, cleans invalid numeric fields,
//! and opens a four-page dashboard (materials, counts, height map).

mod analysis;
mod charts;
mod data;
mod gui;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use env_logger::Env;
use log::info;

use data::{clean, records_from_dataframe, DataLoader, SkyscraperRecord};
use gui::SkylineApp;

#[derive(Parser)]
#[command(name = "skyline_explorer")]
#[command(about = "Interactive dashboard over a skyscraper CSV")]
struct Cli {
    /// Path to the skyscraper CSV file
    #[arg(default_value = "skyscrapers.csv")]
    data: PathBuf,
}

/// Load, clean, and extract the table. Runs once, before any rendering.
fn load_table(path: &Path) -> anyhow::Result<Vec<SkyscraperRecord>> {
    let mut loader = DataLoader::new();
    let df = loader.load_csv(path)?;
    let raw_rows = df.height();

    let cleaned = clean(df).context("cleaning the skyscraper table")?;
    let records = records_from_dataframe(&cleaned).context("extracting records")?;

    info!(
        "loaded {} rows from {}, {} retained after cleaning",
        raw_rows,
        path.display(),
        records.len()
    );
    Ok(records)
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    // The one recognized failure: a missing or unreadable source file.
    // Log it and terminate without rendering anything.
    let records = match load_table(&cli.data) {
        Ok(records) => records,
        Err(e) => {
            log::error!("{e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1100.0, 650.0])
            .with_title("Skyline Explorer"),
        ..Default::default()
    };

    eframe::run_native(
        "Skyline Explorer",
        options,
        Box::new(move |cc| Ok(Box::new(SkylineApp::new(cc, records)))),
    )
}
