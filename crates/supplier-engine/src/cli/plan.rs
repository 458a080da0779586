use crate::cli::{
    common::{OutputFormat, OutputOptions},
    traits::Exportable,
};
use anyhow::Result;
use clap::Args;
use igniter_supplier_engine::{
    distribution::{StakeDistributionOffer, try_plan},
    settings::{Settings, StakingOverrides, validation::validate_staking},
};
use tabled::{Table, settings::Style};
use tracing::info;

#[derive(Args, Debug)]
pub struct PlanCommand {
    /// Total amount to stake
    #[arg(short, long, value_name = "AMOUNT")]
    pub amount: u64,

    /// Override the configured minimum stake per node
    #[arg(long, value_name = "AMOUNT")]
    pub min_stake: Option<u64>,

    /// Override the configured bin sizes (comma separated)
    #[arg(long, value_name = "BINS", value_delimiter = ',')]
    pub bins: Option<Vec<u64>>,

    #[command(flatten)]
    pub output: OutputOptions,
}

impl PlanCommand {
    pub fn execute(self, settings: &Settings) -> Result<()> {
        let staking = settings.staking.merged_with(&StakingOverrides {
            min_stake: self.min_stake,
            bin_sizes: self.bins,
        });
        validate_staking(&staking)?;

        info!(
            "Planning {} with bins {:?} (min stake {})",
            self.amount, staking.bin_sizes, staking.min_stake
        );

        let offer = try_plan(self.amount, &staking.bin_sizes, staking.min_stake)?;
        info!("Offer covers {} with {} nodes", offer.amount, offer.total_nodes);

        self.output.write(&offer)
    }
}

impl Exportable for StakeDistributionOffer {
    fn export(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.to_json(false),
            OutputFormat::JsonPretty => self.to_json(true),
            OutputFormat::Table => Ok(format!(
                "{}\nTotal: {} across {} nodes",
                Table::new(&self.items).with(Style::modern()),
                self.amount,
                self.total_nodes
            )),
        }
    }
}
