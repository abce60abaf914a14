use anyhow::Context;
use clap::Parser;
use polydecor::report;
use polydecor::{init_logging_with, DecorationConfig, LogFormat};
use polydecor_settings::default_config_path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "polydecor")]
#[command(about = "Decorate map paths with repeating symbols", long_about = None)]
#[command(version)]
struct Cli {
    /// Decoration config (.json or .toml). Defaults to the user config directory.
    #[arg(short, long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Print raw pixel-space placements instead of symbol layers
    #[arg(long)]
    placements: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging_with(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    })?;
    tracing::debug!("polydecor {} built {}", polydecor::VERSION, polydecor::BUILD_DATE);

    let path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = DecorationConfig::load_from_file(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let output = if cli.placements {
        report::to_json(&report::placements(&config)?, cli.pretty)?
    } else {
        report::to_json(&report::decorate(&config)?, cli.pretty)?
    };
    println!("{}", output);

    Ok(())
}
