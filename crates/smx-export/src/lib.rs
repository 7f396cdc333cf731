//! CSV rendering of SMX reward records.
//!
//! # Key Types
//!
//! - [`CsvFormat`] -- Column schema: `generic` (layer, amount, date) or
//!   `tokentax` (transaction-import layout)
//! - [`ExportRow`] -- A reward record with its amount and display date resolved
//! - [`RewardExporter`] -- Writes a header and rows to any `io::Write`

pub mod error;
pub mod format;
pub mod row;
pub mod writer;

pub use error::{ExportError, ExportResult};
pub use format::CsvFormat;
pub use row::{ExportRow, DATE_FORMAT};
pub use writer::RewardExporter;
