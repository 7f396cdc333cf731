use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;
use colored::Colorize;
use smx_address::CoinbaseAddress;
use smx_export::{CsvFormat, RewardExporter};
use smx_store::{RewardQuery, RewardSource, SqliteRewardSource};
use smx_types::{LayerClock, LayerRange};
use tracing::info;

use crate::cli::*;
use crate::config::ExportConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = ExportConfig::resolve(cli.config.as_deref())?;
    match cli.command {
        Command::Export(args) => cmd_export(args, &config),
        Command::Decode(args) => cmd_decode(args, &cli.format),
        Command::Layer(args) => cmd_layer(args, &cli.format, &config),
    }
}

/// Query `source` for `address` and write the CSV to `out`.
pub fn export_rewards<W: Write>(
    source: &dyn RewardSource,
    address: &CoinbaseAddress,
    range: LayerRange,
    format: CsvFormat,
    clock: LayerClock,
    out: W,
) -> anyhow::Result<usize> {
    let records = source
        .rewards(&RewardQuery::for_address(address, range))
        .context("querying rewards")?;
    let written = RewardExporter::new(out, format, clock)
        .export(&records)
        .context("writing csv")?;
    Ok(written)
}

fn cmd_export(args: ExportArgs, config: &ExportConfig) -> anyhow::Result<()> {
    // Nothing is opened or created until the address has decoded.
    let address = CoinbaseAddress::parse(&args.coinbase)?;

    let clock = config.ledger;
    let range = clock.range_for_dates(args.start_date, args.end_date);
    let format = args.csv_format.unwrap_or(config.csv_format);
    let output_file = args.output_file.or_else(|| config.output_file.clone());
    let db_path = args
        .db_path
        .or_else(|| config.db_path.clone())
        .context("no database given: pass --db-path or set db_path in the config file")?;

    info!(coinbase = %address, %range, db = %db_path.display(), %format, "exporting rewards");
    let source = SqliteRewardSource::open(&db_path)
        .with_context(|| format!("opening {}", db_path.display()))?;

    match output_file {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("creating {}", path.display()))?;
            let rows = export_rewards(&source, &address, range, format, clock, BufWriter::new(file))?;
            info!(rows, "export complete");
            println!(
                "{} Export completed successfully. Data written to {}",
                "✓".green().bold(),
                path.display().to_string().bold()
            );
        }
        None => {
            let stdout = io::stdout();
            let rows = export_rewards(&source, &address, range, format, clock, stdout.lock())?;
            info!(rows, "export complete");
        }
    }
    Ok(())
}

fn cmd_decode(args: DecodeArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let address = CoinbaseAddress::parse(&args.address)?;
    match format {
        OutputFormat::Text => println!("{}", address.to_hex().cyan()),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "address": args.address,
                "hex": address.to_hex(),
                "bytes": address.as_bytes().len(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

fn cmd_layer(args: LayerArgs, format: &OutputFormat, config: &ExportConfig) -> anyhow::Result<()> {
    let clock = config.ledger;
    let layer = clock.layer_of_date(args.date);
    let start = clock
        .layer_start(layer)
        .context("layer start is out of range")?;
    match format {
        OutputFormat::Text => println!(
            "Layer {} (starts {} UTC)",
            layer.to_string().yellow().bold(),
            start.format(smx_export::DATE_FORMAT)
        ),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "date": args.date.to_string(),
                "layer": layer,
                "layer_start": start.to_rfc3339(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}
