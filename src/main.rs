use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use civic_metrics::{logging, runner, scenario::ScenarioLoader};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Civic metrics runner")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/sochi.yaml")]
    scenario: PathBuf,

    /// How results are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;
    let summary = runner::run(&scenario)?;

    match cli.format {
        OutputFormat::Text => print!("{summary}"),
        OutputFormat::Json => println!("{}", summary.to_json()?),
    }
    Ok(())
}
