use crate::cli::common::OutputFormat;
use anyhow::Result;
use serde::Serialize;

/// Trait for types that can be exported to various formats
pub trait Exportable {
    fn export(&self, format: OutputFormat) -> Result<String>;

    /// Default implementation for JSON export
    fn to_json(&self, pretty: bool) -> Result<String>
    where
        Self: Serialize,
    {
        if pretty {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(serde_json::to_string(self)?)
        }
    }
}
