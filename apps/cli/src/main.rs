//! # Tally CLI
//!
//! Prints receipts for order text.
//!
//! ## Usage
//! ```text
//! tally                                   # the three sample orders
//! TALLY_INPUT=stdin tally < order.txt     # one order from stdin
//! TALLY_FORMAT=json tally                 # ReceiptSummary JSON
//! TALLY_LOG=tally_core=debug tally        # per-line parse/tax logs on stderr
//! ```

mod config;

use std::io::{self, Read};

use anyhow::Context;
use tally_core::{Receipt, ReceiptProcessor, ReceiptSummary, SAMPLE_ORDERS};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, InputSource, OutputFormat};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::load()?;
    init_tracing(&config.log_filter);

    info!(input = ?config.input, format = ?config.format, "Configuration loaded");

    let processor = ReceiptProcessor::new();
    let output = match config.input {
        InputSource::Samples => render_samples(&processor, config.format)?,
        InputSource::Stdin => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read order from stdin")?;

            let receipt = processor.process(&input).map_err(|err| {
                error!(%err, "Order rejected");
                err
            })?;
            render(&receipt, config.format)?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only receipts. An unparsable
/// `TALLY_LOG` falls back to `warn`.
fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Renders one receipt in the configured format.
fn render(receipt: &Receipt, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(receipt.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&ReceiptSummary::from(receipt))
            .context("Failed to serialize receipt"),
    }
}

/// Renders every sample order under an `Output N:` heading.
fn render_samples(processor: &ReceiptProcessor, format: OutputFormat) -> anyhow::Result<String> {
    let mut sections = Vec::with_capacity(SAMPLE_ORDERS.len());
    for (index, order) in SAMPLE_ORDERS.iter().enumerate() {
        let receipt = processor.process(order)?;
        sections.push(format!("Output {}:\n{}", index + 1, render(&receipt, format)?));
    }
    Ok(sections.join("\n\n"))
}
