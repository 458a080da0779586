use crate::cli::{
    common::{OutputFormat, OutputOptions, read_json},
    traits::Exportable,
};
use anyhow::Result;
use clap::Args;
use igniter_supplier_engine::reconcile::{
    ReconciliationAction, SupplierAssessment, SupplierSnapshot, assess_all,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};
use tracing::info;

#[derive(Args, Debug)]
pub struct DriftCommand {
    /// JSON file with a list of `{"current": ..., "desired": ...}` supplier snapshots
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Debug, Deserialize)]
struct SnapshotPair {
    current: SupplierSnapshot,
    desired: SupplierSnapshot,
}

impl DriftCommand {
    pub fn execute(self) -> Result<()> {
        let pairs: Vec<SnapshotPair> = read_json(&self.input)?;
        let pairs: Vec<_> = pairs
            .into_iter()
            .map(|pair| (pair.current, pair.desired))
            .collect();

        let assessments = assess_all(&pairs);
        let drifted = assessments
            .iter()
            .filter(|assessment| !assessment.action.is_in_sync())
            .count();
        info!(
            "Assessed {} suppliers, {} need reconciliation",
            assessments.len(),
            drifted
        );

        self.output.write(&Assessments(assessments))
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct Assessments(pub Vec<SupplierAssessment>);

#[derive(Tabled)]
struct AssessmentRow<'a> {
    operator: &'a str,
    action: &'static str,
    detail: String,
}

fn detail(action: &ReconciliationAction) -> String {
    match action {
        ReconciliationAction::InSync => String::new(),
        ReconciliationAction::UpdateServices { diff } => format!("{} differences", diff.len()),
        ReconciliationAction::UpdateStake { current, desired } => {
            format!("stake {current} -> {desired}")
        }
        ReconciliationAction::UpdateStakeAndServices {
            current,
            desired,
            diff,
        } => format!("stake {current} -> {desired}, {} differences", diff.len()),
        ReconciliationAction::OperatorMismatch { desired, .. } => {
            format!("desired operator {desired}")
        }
    }
}

impl Exportable for Assessments {
    fn export(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.to_json(false),
            OutputFormat::JsonPretty => self.to_json(true),
            OutputFormat::Table => {
                let rows = self.0.iter().map(|assessment| AssessmentRow {
                    operator: &assessment.operator_address,
                    action: assessment.action.label(),
                    detail: detail(&assessment.action),
                });
                Ok(Table::new(rows).with(Style::modern()).to_string())
            }
        }
    }
}
