use anyhow::Context;
use clap::Parser;
use flora_analyzer::config::{ConfigManager, ReportFormat};
use flora_analyzer::engines::reporting;
use flora_analyzer::{analyze_document, DocumentConnector};
use std::path::PathBuf;

/// Cluster a flora genome graph and evaluate its evolution and adaptation pairs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input document (.xml, .json or .toml)
    document: PathBuf,

    /// Configuration file (.toml or .json)
    #[arg(short('c'), long)]
    config: Option<PathBuf>,

    /// Override the configured report format
    #[arg(short('f'), long, value_parser = parse_format)]
    format: Option<ReportFormat>,
}

fn parse_format(raw: &str) -> Result<ReportFormat, String> {
    match raw.to_ascii_lowercase().as_str() {
        "text" => Ok(ReportFormat::Text),
        "json" => Ok(ReportFormat::Json),
        other => Err(format!("unknown report format '{}' (expected text or json)", other)),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut manager = ConfigManager::load(args.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(format) = args.format {
        manager.update(|c| c.report.format = format)?;
    }
    let config = manager.get().clone();

    env_logger::Builder::new()
        .filter_level(config.logging.level.to_level_filter())
        .parse_default_env()
        .init();

    if let Some(path) = &args.config {
        log::debug!("Loaded configuration from {}", path.display());
    }

    let document = DocumentConnector::load_and_validate(&args.document)
        .with_context(|| format!("Failed to read genomes from {}", args.document.display()))?;

    let report_config = config.report.clone();
    let report = analyze_document(document, config).context("Failed to analyze genomes")?;

    let stdout = std::io::stdout();
    let mut sink = reporting::sink_for(&report_config, stdout.lock());
    sink.write_report(&report)?;

    Ok(())
}
