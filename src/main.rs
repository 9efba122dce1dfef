// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use construction_top6::{chart_plan, config, export, render, Dataset, FigureBuilder};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "construction-top6")]
#[command(about = "Chart data for the European construction top 6 dashboard", long_about = None)]
struct Cli {
    /// Dataset CSV, overrides config.toml and CONSTRUCTION_DATA_PATH
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all figures as JSON to stdout
    Figures {
        #[arg(long)]
        pretty: bool,
    },
    /// Write all figures to a timestamped JSON file
    Export {
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Render an SVG preview of every figure
    Render {
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Show rows and year span per company
    Summary,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = config::load_config()?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }

    let dataset = Dataset::from_path(&config.data_path)
        .with_context(|| format!("Failed to load dataset: {}", config.data_path.display()))?;
    let builder = FigureBuilder::new(&dataset);

    match cli.command {
        Commands::Figures { pretty } => {
            let figures = builder.build_all();
            println!("{}", export::figures_to_json(&figures, pretty)?);
        }
        Commands::Export { output_dir } => {
            let output_dir = output_dir.unwrap_or(config.output_dir);
            let figures = builder.build_all();
            let path = export::export_figures_json(&figures, &output_dir)?;
            println!("✅ {} figures written to {}", figures.len(), path.display());
        }
        Commands::Render { output_dir } => {
            let output_dir = output_dir.unwrap_or(config.output_dir);
            let figures = builder.build_all();
            let paths = render::render_all(&figures, &chart_plan(), &output_dir)?;
            println!("✅ {} charts rendered to {}", paths.len(), output_dir.display());
        }
        Commands::Summary => {
            println!("\n=== Dataset Summary ===");
            println!("Total rows: {}", dataset.len());
            for summary in dataset.summary() {
                match (summary.first_year, summary.last_year) {
                    (Some(first), Some(last)) => println!(
                        "  {:<10} {:>3} rows  {}-{}",
                        summary.company.label(),
                        summary.rows,
                        first,
                        last
                    ),
                    _ => println!("  {:<10} ⚠️  no rows", summary.company.label()),
                }
            }
        }
    }

    Ok(())
}
