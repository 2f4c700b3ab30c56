use super::{EnvLookup, parse_or};
use anyhow::Result;
use std::path::PathBuf;

/// Output environment configuration
#[derive(Debug, Clone)]
pub struct OutputEnvConfig {
    pub output_dir: PathBuf,
    pub csv_export_enabled: bool,
    pub symbols_file: Option<PathBuf>,
}

impl Default for OutputEnvConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            csv_export_enabled: true,
            symbols_file: None,
        }
    }
}

impl OutputEnvConfig {
    pub fn from_vars(vars: EnvLookup<'_>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            output_dir: vars("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            csv_export_enabled: parse_or(vars, "CSV_EXPORT_ENABLED", defaults.csv_export_enabled)?,
            symbols_file: vars("SYMBOLS_FILE").map(PathBuf::from),
        })
    }
}
