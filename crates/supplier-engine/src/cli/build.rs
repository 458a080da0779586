use crate::cli::{
    common::{OutputFormat, OutputOptions, read_json},
    traits::Exportable,
};
use anyhow::Result;
use clap::Args;
use igniter_supplier_engine::{builder::SupplierConfigRequest, types::SupplierServiceConfig};
use serde::Serialize;
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};
use tracing::info;

#[derive(Args, Debug)]
pub struct BuildCommand {
    /// JSON file holding the address group, services and requested shares
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub output: OutputOptions,
}

impl BuildCommand {
    pub fn execute(self) -> Result<()> {
        let request: SupplierConfigRequest = read_json(&self.input)?;
        info!(
            "Building configs for operator {} in address group {} ({} services)",
            request.operator_address,
            request.address_group.name,
            request.address_group.address_group_services.len()
        );

        let configs = request.build()?;
        self.output.write(&ServiceConfigs(configs))
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ServiceConfigs(pub Vec<SupplierServiceConfig>);

#[derive(Tabled)]
struct RevShareRow<'a> {
    service_id: &'a str,
    address: &'a str,
    percentage: String,
}

#[derive(Tabled)]
struct EndpointRow<'a> {
    service_id: &'a str,
    rpc_type: String,
    url: &'a str,
}

impl Exportable for ServiceConfigs {
    fn export(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.to_json(false),
            OutputFormat::JsonPretty => self.to_json(true),
            OutputFormat::Table => {
                let rev_share = self.0.iter().flat_map(|config| {
                    config.rev_share.iter().map(move |entry| RevShareRow {
                        service_id: &config.service_id,
                        address: &entry.address,
                        percentage: format!("{}%", entry.rev_share_percentage),
                    })
                });
                let endpoints = self.0.iter().flat_map(|config| {
                    config.endpoints.iter().map(move |endpoint| EndpointRow {
                        service_id: &config.service_id,
                        rpc_type: endpoint.rpc_type.to_string(),
                        url: &endpoint.url,
                    })
                });

                Ok(format!(
                    "Revenue share:\n{}\nEndpoints:\n{}",
                    Table::new(rev_share).with(Style::modern()),
                    Table::new(endpoints).with(Style::modern())
                ))
            }
        }
    }
}
