use crate::cli::{
    common::{OutputFormat, OutputOptions, read_json},
    traits::Exportable,
};
use anyhow::{Result, bail};
use clap::Args;
use igniter_supplier_engine::{
    comparator::{ComparisonResult, compare},
    types::SupplierServiceConfig,
};
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};
use tracing::{info, warn};

#[derive(Args, Debug)]
pub struct CompareCommand {
    /// JSON file with the current (e.g. on-chain) service configs
    #[arg(long, value_name = "FILE")]
    pub current: PathBuf,

    /// JSON file with the desired service configs
    #[arg(long, value_name = "FILE")]
    pub desired: PathBuf,

    /// Exit with an error when the configs differ
    #[arg(long)]
    pub fail_on_drift: bool,

    #[command(flatten)]
    pub output: OutputOptions,
}

impl CompareCommand {
    pub fn execute(self) -> Result<()> {
        let current: Vec<SupplierServiceConfig> = read_json(&self.current)?;
        let desired: Vec<SupplierServiceConfig> = read_json(&self.desired)?;

        let result = compare(&current, &desired);
        if result.is_equal {
            info!("Service configs match");
        } else {
            warn!("Service configs differ in {} places", result.diff.len());
        }

        self.output.write(&result)?;

        if self.fail_on_drift && !result.is_equal {
            bail!("Service configs differ ({} differences)", result.diff.len());
        }

        Ok(())
    }
}

#[derive(Tabled)]
struct DiffRow {
    #[tabled(rename = "#")]
    index: usize,
    difference: String,
}

impl Exportable for ComparisonResult {
    fn export(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.to_json(false),
            OutputFormat::JsonPretty => self.to_json(true),
            OutputFormat::Table if self.is_equal => Ok("Service configs are equal".to_string()),
            OutputFormat::Table => {
                let rows = self.diff.iter().enumerate().map(|(i, entry)| DiffRow {
                    index: i + 1,
                    difference: entry.to_string(),
                });
                Ok(Table::new(rows).with(Style::modern()).to_string())
            }
        }
    }
}
