use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use chipscreen::{GroupConfig, Screen};

const DEFAULT_LIBRARY_PATH: &str = "/Volumes/LabShare/HTGenomics/Microarray_database/arrays/";
const OUTPUT_FILE_NAME: &str = "microarray_chromosome_size_bias.csv";

#[derive(Parser, Debug)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "Screen a ssDNA ChIP-chip library for chromosome size bias effects",
    long_about = None,
)]
struct Cli {
    /// Path to the microarray experiment folders
    #[arg(short, long, default_value = DEFAULT_LIBRARY_PATH)]
    path: PathBuf,
}

fn main() -> Result<()> {
    // per-file warnings must stay visible without RUST_LOG set
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let cli = Cli::parse();

    println!();
    println!("--------------------------------------------");
    println!(" Screen ssDNA ChIP-chip data for changes in");
    println!("          chromosome size bias");
    println!("--------------------------------------------");
    println!();

    let screen = Screen::new(cli.path, GroupConfig::default(), true);
    let results = screen.run()?;

    let home = env::var("HOME").context("HOME is not set; cannot locate output directory")?;
    let outfile = PathBuf::from(home).join("Desktop").join(OUTPUT_FILE_NAME);
    println!("Writing data to '{}'", outfile.display());
    results.write_csv(&outfile)?;

    Ok(())
}
