//! influx-naming - Dotted metric name transformer
//!
//! Prints the measurement name and tags derived from each dotted metric
//! name given on the command line or on stdin.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use influx_naming::cli::{Cli, OutputFormat};
use influx_naming::config::TransformerConfig;
use influx_naming::output::{render, Rendered};

fn main() -> Result<()> {
    let cli = Cli::parse();

    influx_naming::init_logging(&cli.log_level.to_string(), cli.log_format)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting influx-naming"
    );

    let config = cli
        .load_transformer_config()
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    let transformer = config.build()?;

    debug!(
        strategy = transformer.strategy_name(),
        "Naming strategy resolved"
    );

    if cli.validate {
        print_validation(&config, cli.output_format)?;
        return Ok(());
    }

    let names = if cli.names.is_empty() {
        read_names(io::stdin().lock())?
    } else {
        cli.names.clone()
    };

    let mut records = Vec::with_capacity(names.len());
    let mut rejected = 0usize;
    for name in &names {
        match Rendered::from_name(name, &transformer) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(name = %name, error = %e, "Skipping metric name");
                rejected += 1;
            }
        }
    }

    let output = render(&records, cli.output_format)?;
    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("Failed to write output")?;

    if rejected > 0 {
        anyhow::bail!("{} metric name(s) rejected", rejected);
    }

    Ok(())
}

/// Read metric names from a reader, one per line, skipping blank lines
///
/// Names are kept as written; surrounding whitespace is not stripped.
fn read_names<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read metric names from stdin")?;
        if !line.trim().is_empty() {
            names.push(line);
        }
    }
    Ok(names)
}

fn print_validation(config: &TransformerConfig, format: OutputFormat) -> Result<()> {
    let output = match format {
        OutputFormat::Text => match config {
            TransformerConfig::KeyValue => "Configuration OK: strategy=key_value\n".to_string(),
            TransformerConfig::Categories { categories } => format!(
                "Configuration OK: strategy=categories categories=[{}]\n",
                categories.join(", ")
            ),
        },
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(config)?;
            s.push('\n');
            s
        }
        OutputFormat::Yaml => serde_yaml::to_string(config)?,
    };
    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}
