use std::io::Write;

use smx_types::{LayerClock, RewardRecord};
use tracing::debug;

use crate::error::ExportResult;
use crate::format::CsvFormat;
use crate::row::ExportRow;

/// Writes reward records as CSV.
///
/// Records use `\r\n` terminators and quote fields only where needed.
pub struct RewardExporter<W: Write> {
    writer: csv::Writer<W>,
    format: CsvFormat,
    clock: LayerClock,
}

impl<W: Write> RewardExporter<W> {
    pub fn new(inner: W, format: CsvFormat, clock: LayerClock) -> Self {
        let writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(inner);
        Self {
            writer,
            format,
            clock,
        }
    }

    pub fn format(&self) -> CsvFormat {
        self.format
    }

    /// Write the header followed by one row per record, then flush.
    ///
    /// Every record is resolved before anything is written, so a record
    /// with an unrepresentable date leaves the output untouched.
    /// Returns the number of data rows written.
    pub fn export(&mut self, records: &[RewardRecord]) -> ExportResult<usize> {
        let rows = records
            .iter()
            .map(|record| ExportRow::from_record(record, &self.clock))
            .collect::<ExportResult<Vec<_>>>()?;

        self.writer.write_record(self.format.headers())?;
        for row in &rows {
            self.writer.write_record(row.fields(self.format))?;
        }
        self.writer.flush()?;

        debug!(format = %self.format, rows = rows.len(), "rewards exported");
        Ok(rows.len())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> ExportResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;

    fn records() -> Vec<RewardRecord> {
        vec![
            RewardRecord::new(0, 1, 1_000_000_000, 0),
            RewardRecord::new(12_345, 3, 2_500_000_002, 12_345),
        ]
    }

    fn render(format: CsvFormat, records: &[RewardRecord]) -> String {
        let mut exporter = RewardExporter::new(Vec::new(), format, LayerClock::mainnet());
        exporter.export(records).unwrap();
        String::from_utf8(exporter.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn generic_output() {
        assert_eq!(
            render(CsvFormat::Generic, &records()),
            "Layer,RewardAmount,Date\r\n\
             0,1.0,2023-07-14 08:00:00\r\n\
             12345,2.500000002,2023-08-26 04:45:00\r\n"
        );
    }

    #[test]
    fn tokentax_output() {
        assert_eq!(
            render(CsvFormat::TokenTax, &records()[1..]),
            "Type,BuyAmount,BuyCurrency,SellAmount,SellCurrency,FeeAmount,FeeCurrency,Exchange,Group,Comment,Date\r\n\
             Mining,2.500000002,SMH,,,,,,,Layer Reward from Layer 12345,2023-08-26 04:45:00\r\n"
        );
    }

    #[test]
    fn empty_export_writes_header_only() {
        assert_eq!(
            render(CsvFormat::Generic, &[]),
            "Layer,RewardAmount,Date\r\n"
        );
    }

    #[test]
    fn export_reports_row_count() {
        let mut exporter =
            RewardExporter::new(Vec::new(), CsvFormat::TokenTax, LayerClock::mainnet());
        assert_eq!(exporter.format(), CsvFormat::TokenTax);
        assert_eq!(exporter.export(&records()).unwrap(), 2);
    }

    #[test]
    fn bad_record_writes_nothing() {
        let mut exporter =
            RewardExporter::new(Vec::new(), CsvFormat::Generic, LayerClock::mainnet());
        let mut bad = records();
        bad.push(RewardRecord::new(0, 0, 0, i64::MAX));
        assert!(matches!(
            exporter.export(&bad),
            Err(ExportError::TimestampOutOfRange { .. })
        ));
        assert!(exporter.into_inner().unwrap().is_empty());
    }

    #[test]
    fn custom_clock_shifts_dates() {
        let genesis = chrono::DateTime::from_timestamp(0, 0).unwrap();
        let clock = LayerClock::new(genesis, 60).unwrap();
        let mut exporter = RewardExporter::new(Vec::new(), CsvFormat::Generic, clock);
        exporter.export(&[RewardRecord::new(2, 0, 0, 2)]).unwrap();
        let out = String::from_utf8(exporter.into_inner().unwrap()).unwrap();
        assert!(out.ends_with("2,0.0,1970-01-01 00:02:00\r\n"));
    }

    #[test]
    fn writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewards.csv");
        let file = std::fs::File::create(&path).unwrap();
        let mut exporter = RewardExporter::new(file, CsvFormat::Generic, LayerClock::mainnet());
        exporter.export(&records()).unwrap();
        drop(exporter);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3);
    }
}
