use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod error;
mod generate;
mod grouping;
mod render;
mod source;
mod template;
mod types;

use generate::{run_generate, CatalogConfig};

#[derive(Parser)]
#[command(name = "itch-catalog")]
#[command(about = "Turn an itch.io purchases CSV into a sortable, filterable HTML catalog")]
struct Cli {
    /// Purchases CSV export to read
    #[arg(short, long, default_value = "itch_purchases.csv")]
    input: PathBuf,
    /// HTML file to write (overwritten if present)
    #[arg(short, long, default_value = "itch_catalog.html")]
    output: PathBuf,
    /// Page title; the heading reads "🎮 My <TITLE>"
    #[arg(short, long, default_value = template::DEFAULT_TITLE)]
    title: String,
    /// Quiet mode - suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CatalogConfig {
        input_path: cli.input,
        output_path: cli.output,
        title: cli.title,
        quiet: cli.quiet,
    };

    let summary = run_generate(&config)?;
    if !config.quiet {
        println!(
            "Rendered {} rows from {} records",
            summary.rows, summary.records
        );
    }
    println!("✅ Interactive catalog written to {}", summary.output.display());

    Ok(())
}
