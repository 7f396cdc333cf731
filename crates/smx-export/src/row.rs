use smx_types::{LayerClock, RewardAmount, RewardRecord};

use crate::error::{ExportError, ExportResult};
use crate::format::CsvFormat;

/// Display format of reward dates (UTC).
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TRANSACTION_TYPE: &str = "Mining";
const CURRENCY: &str = "SMH";

/// A reward ready to be written: amount scaled and date resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportRow {
    pub layer_id: i64,
    pub amount: RewardAmount,
    pub date: String,
}

impl ExportRow {
    /// Resolve `record` against `clock`.
    ///
    /// The date is the start of `record.layer_id`.
    pub fn from_record(record: &RewardRecord, clock: &LayerClock) -> ExportResult<Self> {
        let start = clock
            .layer_start(record.layer_id)
            .ok_or(ExportError::TimestampOutOfRange {
                layer_id: record.layer_id,
            })?;
        Ok(Self {
            layer_id: record.layer_id,
            amount: record.amount(),
            date: start.format(DATE_FORMAT).to_string(),
        })
    }

    /// Field values in the column order of `format`.
    pub fn fields(&self, format: CsvFormat) -> Vec<String> {
        match format {
            CsvFormat::Generic => vec![
                self.layer_id.to_string(),
                self.amount.to_string(),
                self.date.clone(),
            ],
            CsvFormat::TokenTax => vec![
                TRANSACTION_TYPE.to_string(),
                self.amount.to_string(),
                CURRENCY.to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                format!("Layer Reward from Layer {}", self.layer_id),
                self.date.clone(),
            ],
        }
    }
}
