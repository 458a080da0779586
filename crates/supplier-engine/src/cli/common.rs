use crate::cli::traits::Exportable;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::de::DeserializeOwned;
use std::{
    fmt,
    fs::{self, File, create_dir_all},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::info;

/// Unified output format for all CLI commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    #[value(name = "json")]
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
    #[value(name = "table")]
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::JsonPretty => write!(f, "json-pretty"),
            Self::Table => write!(f, "table"),
        }
    }
}

/// Common output options for CLI commands
#[derive(Args, Debug, Clone)]
pub struct OutputOptions {
    /// Output format
    #[arg(short = 'f', long, default_value = "table")]
    pub output_format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,
}

impl OutputOptions {
    /// Write exportable data to file or stdout
    pub fn write<T: Exportable>(&self, data: &T) -> Result<()> {
        let content = data.export(self.output_format)?;

        if let Some(ref path) = self.output_file {
            if let Some(parent) = path.parent() {
                create_dir_all(parent)?;
            }
            let mut file = File::create(path)?;
            file.write_all(content.as_bytes())?;
            info!("Exported to: {}", path.display());
        } else {
            println!("{content}");
        }

        Ok(())
    }
}

/// Read and deserialize a JSON input file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", path.display()))
}
