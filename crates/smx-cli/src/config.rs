use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use smx_export::CsvFormat;
use smx_types::LayerClock;

/// Settings read from the `--config` TOML file.
///
/// Every field is optional in the file. Command-line flags take precedence.
///
/// ```toml
/// db_path = "/var/lib/spacemesh/state.sql"
/// csv_format = "tokentax"
///
/// [ledger]
/// genesis = "2023-07-14T08:00:00Z"
/// layer_duration_secs = 300
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub db_path: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub csv_format: CsvFormat,
    pub ledger: LayerClock,
}

impl ExportConfig {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load `path` if given, otherwise use mainnet defaults.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ExportConfig::default();
        assert!(c.db_path.is_none());
        assert!(c.output_file.is_none());
        assert_eq!(c.csv_format, CsvFormat::Generic);
        assert_eq!(c.ledger, LayerClock::mainnet());
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(ExportConfig::from_toml("").unwrap(), ExportConfig::default());
    }

    #[test]
    fn full_file() {
        let c = ExportConfig::from_toml(
            r#"
            db_path = "/data/state.sql"
            output_file = "rewards.csv"
            csv_format = "tokentax"

            [ledger]
            genesis = "2024-01-01T00:00:00Z"
            layer_duration_secs = 60
            "#,
        )
        .unwrap();
        assert_eq!(c.db_path, Some(PathBuf::from("/data/state.sql")));
        assert_eq!(c.output_file, Some(PathBuf::from("rewards.csv")));
        assert_eq!(c.csv_format, CsvFormat::TokenTax);
        assert_eq!(c.ledger.genesis.timestamp(), 1_704_067_200);
        assert_eq!(c.ledger.layer_duration_secs.get(), 60);
    }

    #[test]
    fn partial_ledger_keeps_mainnet_genesis() {
        let c = ExportConfig::from_toml("[ledger]\nlayer_duration_secs = 10\n").unwrap();
        assert_eq!(c.ledger.genesis, LayerClock::mainnet().genesis);
        assert_eq!(c.ledger.layer_duration_secs.get(), 10);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(ExportConfig::from_toml("database = \"x\"").is_err());
    }

    #[test]
    fn zero_layer_duration_is_rejected() {
        assert!(ExportConfig::from_toml("[ledger]\nlayer_duration_secs = 0\n").is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smx.toml");
        std::fs::write(&path, "csv_format = \"tokentax\"\n").unwrap();
        let c = ExportConfig::resolve(Some(&path)).unwrap();
        assert_eq!(c.csv_format, CsvFormat::TokenTax);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ExportConfig::resolve(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn no_path_is_default() {
        assert_eq!(ExportConfig::resolve(None).unwrap(), ExportConfig::default());
    }
}
