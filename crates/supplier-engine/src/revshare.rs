use crate::types::{AddressGroupService, RevShareEntry};
use rust_decimal::Decimal;

/// Revenue share configured for one service of an address group.
///
/// Starts from the configured shares and appends the operator's own share
/// when `add_supplier_share` is set. The result is never empty: with nothing
/// configured the operator receives a single zero-percent entry so rewards
/// always have somewhere to land.
pub fn compute_rev_share(
    service: &AddressGroupService,
    operator_address: &str,
) -> Vec<RevShareEntry> {
    let mut shares = service.rev_share.clone();

    if service.add_supplier_share {
        shares.push(RevShareEntry::new(operator_address, service.supplier_share));
    }

    if shares.is_empty() {
        shares.push(RevShareEntry::new(operator_address, Decimal::ZERO));
    }

    shares
}

/// Sum of the percentages, `None` when it does not fit in a `Decimal`.
pub fn checked_total<'a>(entries: impl IntoIterator<Item = &'a RevShareEntry>) -> Option<Decimal> {
    entries
        .into_iter()
        .try_fold(Decimal::ZERO, |total, entry| {
            total.checked_add(entry.rev_share_percentage)
        })
}
