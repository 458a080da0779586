use crate::{
    comparator::{DiffEntry, compare},
    key_state::KeyState,
    types::SupplierServiceConfig,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stake and services of one supplier, either observed on chain or desired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierSnapshot {
    pub operator_address: String,
    pub stake_amount: u64,
    #[serde(default)]
    pub services: Vec<SupplierServiceConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ReconciliationAction {
    InSync,
    UpdateServices {
        diff: Vec<DiffEntry>,
    },
    UpdateStake {
        current: u64,
        desired: u64,
    },
    UpdateStakeAndServices {
        current: u64,
        desired: u64,
        diff: Vec<DiffEntry>,
    },
    /// Snapshots describe different suppliers and cannot be reconciled.
    OperatorMismatch {
        current: String,
        desired: String,
    },
}

impl ReconciliationAction {
    pub fn is_in_sync(&self) -> bool {
        matches!(self, ReconciliationAction::InSync)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::InSync => "in-sync",
            Self::UpdateServices { .. } => "update-services",
            Self::UpdateStake { .. } => "update-stake",
            Self::UpdateStakeAndServices { .. } => "update-stake-and-services",
            Self::OperatorMismatch { .. } => "operator-mismatch",
        }
    }

    /// Key state the remediation poller should move a key to, if any.
    ///
    /// Drift on a staked key flags it for attention; a key in remediation
    /// whose supplier is back in sync is reset to `Staked`.
    pub fn next_key_state(&self, state: KeyState) -> Option<KeyState> {
        let next = match (self.is_in_sync(), state) {
            (false, KeyState::Staked) => KeyState::AttentionNeeded,
            (true, state) if state.is_remediation() => KeyState::Staked,
            _ => return None,
        };

        state.can_transition_to(next).then_some(next)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierAssessment {
    pub operator_address: String,
    pub action: ReconciliationAction,
}

pub fn assess(current: &SupplierSnapshot, desired: &SupplierSnapshot) -> SupplierAssessment {
    if current.operator_address != desired.operator_address {
        return SupplierAssessment {
            operator_address: current.operator_address.clone(),
            action: ReconciliationAction::OperatorMismatch {
                current: current.operator_address.clone(),
                desired: desired.operator_address.clone(),
            },
        };
    }

    let comparison = compare(&current.services, &desired.services);
    let stake_changed = current.stake_amount != desired.stake_amount;

    let action = match (stake_changed, comparison.is_equal) {
        (false, true) => ReconciliationAction::InSync,
        (false, false) => ReconciliationAction::UpdateServices {
            diff: comparison.diff,
        },
        (true, true) => ReconciliationAction::UpdateStake {
            current: current.stake_amount,
            desired: desired.stake_amount,
        },
        (true, false) => ReconciliationAction::UpdateStakeAndServices {
            current: current.stake_amount,
            desired: desired.stake_amount,
            diff: comparison.diff,
        },
    };

    debug!(
        operator = %current.operator_address,
        action = action.label(),
        "assessed supplier"
    );

    SupplierAssessment {
        operator_address: current.operator_address.clone(),
        action,
    }
}

/// Assess many suppliers in parallel, keeping input order.
pub fn assess_all(pairs: &[(SupplierSnapshot, SupplierSnapshot)]) -> Vec<SupplierAssessment> {
    pairs
        .par_iter()
        .map(|(current, desired)| assess(current, desired))
        .collect()
}
