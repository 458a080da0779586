use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// `qty` nodes staked with `bin` each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct NodeStakeDistributionItem {
    pub bin: u64,
    pub qty: u64,
}

/// Concrete plan for staking a requested amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeDistributionOffer {
    pub amount: u64,
    pub items: Vec<NodeStakeDistributionItem>,
    pub total_nodes: u64,
}

impl StakeDistributionOffer {
    /// One stake amount per node, largest first.
    pub fn node_stakes(&self) -> impl Iterator<Item = u64> + '_ {
        self.items
            .iter()
            .flat_map(|item| (0..item.qty).map(move |_| item.bin))
    }
}

/// Bins usable for a given minimum stake, largest first.
pub fn eligible_bins(allowed_bins: &[u64], minimum_stake: u64) -> Vec<u64> {
    let mut bins: Vec<u64> = allowed_bins
        .iter()
        .copied()
        .filter(|bin| *bin > 0 && *bin >= minimum_stake)
        .collect();
    bins.sort_unstable_by(|a, b| b.cmp(a));
    bins.dedup();
    bins
}

/// Greedy largest-bin-first distribution of `total_amount`.
///
/// Returns an empty distribution when the amount cannot be expressed exactly
/// with the eligible bins; a partial plan is never returned. A zero amount
/// also yields an empty distribution, use [`try_plan`] to tell the two apart.
pub fn plan(
    total_amount: u64,
    allowed_bins: &[u64],
    minimum_stake: u64,
) -> Vec<NodeStakeDistributionItem> {
    let mut remaining = total_amount;
    let mut items = Vec::new();

    for bin in eligible_bins(allowed_bins, minimum_stake) {
        let qty = remaining / bin;
        if qty > 0 {
            remaining -= qty * bin;
            items.push(NodeStakeDistributionItem { bin, qty });
        }
    }

    if remaining != 0 {
        return Vec::new();
    }

    items
}

/// Typed variant of [`plan`] for request handlers.
pub fn try_plan(
    total_amount: u64,
    allowed_bins: &[u64],
    minimum_stake: u64,
) -> Result<StakeDistributionOffer> {
    if total_amount == 0 {
        return Err(Error::ZeroStakeAmount);
    }

    if eligible_bins(allowed_bins, minimum_stake).is_empty() {
        return Err(Error::NoEligibleBins { minimum_stake });
    }

    let items = plan(total_amount, allowed_bins, minimum_stake);
    if items.is_empty() {
        return Err(Error::UnresolvableDistribution {
            amount: total_amount,
        });
    }

    Ok(StakeDistributionOffer {
        amount: total_amount,
        total_nodes: items.iter().map(|item| item.qty).sum(),
        items,
    })
}
