//! Indicator Engine CLI - classify stock indicators from the command line.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use indicator_common::config::{config_path, Config, RejectedOverride};
use indicator_common::logging::init_logging;
use indicator_engine::classifier::ValueKind;
use indicator_engine::{
    read_records, Metric, NormalizationContext, RatioClassifier, RawIndicator, RecordReport,
};

#[derive(Parser, Debug)]
#[command(name = "indicator-engine")]
#[command(version)]
#[command(about = "Normalize and classify stock fundamentals indicators.", long_about = None)]
struct Cli {
    /// Config file (default: ~/.indicadores/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a single raw value
    Classify {
        /// Metric name, e.g. "P/L", "roe", "Margem Líquida"
        #[arg(long)]
        metric: String,
        /// Raw value as scraped, e.g. "R$ 12,10" or "-55,04%"
        #[arg(long, allow_hyphen_values = true)]
        value: String,
        /// Instrument the value belongs to, for diagnostics
        #[arg(long)]
        instrument: Option<String>,
    },
    /// Evaluate a JSON file holding one record or an array of records
    Evaluate {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the threshold tables in effect
    Thresholds {
        /// Only this metric
        #[arg(long)]
        metric: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Full reports as JSON
    Json,
    /// Flat "column: value" rows
    Rows,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, rejected) = Config::load_with_env(cli.config.as_deref())?;
    config.validate().context("Invalid configuration")?;

    init_logging(
        &config.observability.log_level,
        &config.observability.log_format,
    );

    let source = cli.config.clone().unwrap_or_else(config_path);
    if source.exists() {
        tracing::debug!(path = %source.display(), "Configuration loaded");
    } else {
        tracing::debug!(path = %source.display(), "Config file not found, using defaults");
    }
    for RejectedOverride { key, value } in &rejected {
        tracing::warn!(key = %key, value = %value, "Ignoring unparseable environment override");
    }

    let classifier =
        RatioClassifier::with_config(&config).context("Invalid threshold configuration")?;

    match cli.command {
        Commands::Classify {
            metric,
            value,
            instrument,
        } => {
            let metric = parse_metric(&metric)?;
            let context = instrument
                .map(NormalizationContext::for_instrument)
                .unwrap_or_default();
            let result = classifier.classify_raw(metric, &RawIndicator::Text(value), &context);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Evaluate { file, format } => {
            let records = read_records(&file)?;
            tracing::info!(file = %file.display(), records = records.len(), "Evaluating records");
            let reports = classifier.evaluate_batch(&records);
            print_reports(&reports, format)?;
        }
        Commands::Thresholds { metric } => {
            let metrics = match metric {
                Some(name) => vec![parse_metric(&name)?],
                None => Metric::ALL.to_vec(),
            };
            for metric in metrics {
                print_thresholds(&classifier, metric);
            }
        }
    }

    Ok(())
}

fn parse_metric(name: &str) -> Result<Metric> {
    match Metric::from_field(name) {
        Some(metric) => Ok(metric),
        None => bail!(
            "unknown metric '{name}', expected one of: {}",
            Metric::ALL.map(|m| m.name()).join(", ")
        ),
    }
}

fn print_reports(reports: &[RecordReport], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(reports)?),
        OutputFormat::Rows => {
            for report in reports {
                for (column, value) in report.to_row() {
                    println!("{column}: {value}");
                }
                if !report.unrecognized_fields.is_empty() {
                    println!("Campos ignorados: {}", report.unrecognized_fields.join(", "));
                }
                println!();
            }
        }
    }
    Ok(())
}

fn print_thresholds(classifier: &RatioClassifier, metric: Metric) {
    let unit = match metric.kind() {
        ValueKind::Multiple => "múltiplo",
        ValueKind::Percentage => "percentual",
    };
    println!("{} ({}, {unit})", metric.name(), metric.group());
    for band in classifier.bands(metric) {
        println!("  {:<24} {}", band.describe(metric.kind()), band.label);
    }
    println!();
}
