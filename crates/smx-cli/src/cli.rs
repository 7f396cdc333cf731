use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use smx_export::CsvFormat;
use smx_types::{parse_date, TypeError};

#[derive(Parser)]
#[command(
    name = "smx",
    about = "Export Spacemesh coinbase rewards",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Export rewards paid to a coinbase address as CSV
    Export(ExportArgs),
    /// Decode a coinbase address to its payload hex
    Decode(DecodeArgs),
    /// Show the layer at midnight UTC of a date
    Layer(LayerArgs),
}

fn date_arg(s: &str) -> Result<NaiveDate, TypeError> {
    parse_date(s)
}

#[derive(Args)]
pub struct ExportArgs {
    /// Coinbase address in bech32 format
    pub coinbase: String,
    /// Start date (inclusive), YYYY-MM-DD
    #[arg(long, alias = "start_date", value_parser = date_arg)]
    pub start_date: Option<NaiveDate>,
    /// End date (inclusive), YYYY-MM-DD
    #[arg(long, alias = "end_date", value_parser = date_arg)]
    pub end_date: Option<NaiveDate>,
    /// Path to the node's SQLite state database
    #[arg(long, alias = "db_path")]
    pub db_path: Option<PathBuf>,
    /// Write CSV here instead of stdout
    #[arg(long, alias = "output_file")]
    pub output_file: Option<PathBuf>,
    /// Column schema: generic or tokentax
    #[arg(long, alias = "csv_format")]
    pub csv_format: Option<CsvFormat>,
}

#[derive(Args)]
pub struct DecodeArgs {
    pub address: String,
}

#[derive(Args)]
pub struct LayerArgs {
    #[arg(value_parser = date_arg)]
    pub date: NaiveDate,
}
