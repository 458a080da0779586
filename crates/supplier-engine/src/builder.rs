use crate::{
    constants::MAX_REV_SHARE_PERCENTAGE,
    error::{Error, Result},
    interpolate::{EndpointParams, interpolate},
    revshare::{checked_total, compute_rev_share},
    types::{
        AddressGroup, AddressGroupService, ResolvedEndpoint, RevShareEntry, Service,
        SupplierServiceConfig,
    },
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything needed to build the service configs of one supplier stake.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierConfigRequest {
    pub address_group: AddressGroup,
    pub services: Vec<Service>,
    /// Shares requested on top of the address group configuration
    #[serde(default)]
    pub rev_share: Vec<RevShareEntry>,
    pub operator_address: String,
    pub owner_address: String,
}

impl SupplierConfigRequest {
    pub fn build(&self) -> Result<Vec<SupplierServiceConfig>> {
        build_supplier_service_configs(
            &self.address_group,
            &self.services,
            &self.rev_share,
            &self.operator_address,
            &self.owner_address,
        )
    }
}

/// Builds the service configs of a supplier from an address group.
///
/// Services are looked up by id once; the builder can be reused for any
/// number of suppliers of the same group.
pub struct SupplierConfigBuilder<'a> {
    address_group: &'a AddressGroup,
    services: HashMap<&'a str, &'a Service>,
}

impl<'a> SupplierConfigBuilder<'a> {
    pub fn new(address_group: &'a AddressGroup, services: &'a [Service]) -> Self {
        Self {
            address_group,
            services: services
                .iter()
                .map(|service| (service.service_id.as_str(), service))
                .collect(),
        }
    }

    /// One config per address group service, in address group order.
    ///
    /// The first service whose revenue share overflows aborts the whole build.
    pub fn build(
        &self,
        request_rev_share: &[RevShareEntry],
        operator_address: &str,
        owner_address: &str,
    ) -> Result<Vec<SupplierServiceConfig>> {
        self.address_group
            .address_group_services
            .iter()
            .map(|group_service| {
                self.build_service(
                    group_service,
                    request_rev_share,
                    operator_address,
                    owner_address,
                )
            })
            .collect()
    }

    fn build_service(
        &self,
        group_service: &AddressGroupService,
        request_rev_share: &[RevShareEntry],
        operator_address: &str,
        owner_address: &str,
    ) -> Result<SupplierServiceConfig> {
        let service = self
            .services
            .get(group_service.service_id.as_str())
            .ok_or_else(|| Error::ServiceNotFound {
                service_id: group_service.service_id.clone(),
            })?;

        let rev_share = resolve_rev_share(
            group_service,
            request_rev_share,
            operator_address,
            owner_address,
        )?;

        let params =
            EndpointParams::for_relay_miner(&service.service_id, &self.address_group.relay_miner);

        // endpoint-level config options are not carried over from the template
        let endpoints = service
            .endpoints
            .iter()
            .map(|endpoint| ResolvedEndpoint {
                url: interpolate(&endpoint.url, &params),
                rpc_type: endpoint.rpc_type,
                configs: Vec::new(),
            })
            .collect();

        Ok(SupplierServiceConfig {
            service_id: service.service_id.clone(),
            rev_share,
            endpoints,
        })
    }
}

pub fn build_supplier_service_configs(
    address_group: &AddressGroup,
    services: &[Service],
    request_rev_share: &[RevShareEntry],
    operator_address: &str,
    owner_address: &str,
) -> Result<Vec<SupplierServiceConfig>> {
    SupplierConfigBuilder::new(address_group, services).build(
        request_rev_share,
        operator_address,
        owner_address,
    )
}

/// Final revenue share of one service, with the owner taking the remainder.
pub fn resolve_rev_share(
    group_service: &AddressGroupService,
    request_rev_share: &[RevShareEntry],
    operator_address: &str,
    owner_address: &str,
) -> Result<Vec<RevShareEntry>> {
    let calculated = compute_rev_share(group_service, operator_address);

    if let Some(entry) = calculated
        .iter()
        .chain(request_rev_share)
        .find(|entry| entry.rev_share_percentage < Decimal::ZERO)
    {
        return Err(Error::NegativeRevShare {
            service_id: group_service.service_id.clone(),
            address: entry.address.clone(),
            percentage: entry.rev_share_percentage,
        });
    }

    let mut shares: Vec<RevShareEntry> = calculated
        .into_iter()
        .chain(request_rev_share.iter().cloned())
        .filter(|entry| entry.rev_share_percentage > Decimal::ZERO)
        .collect();

    let overflow = |total| Error::RevenueShareOverflow {
        service_id: group_service.service_id.clone(),
        total,
    };

    // Decimal::MAX stands in for a total too large to represent
    let explicit_total = checked_total(&shares).ok_or_else(|| overflow(Decimal::MAX))?;
    if explicit_total > MAX_REV_SHARE_PERCENTAGE {
        return Err(overflow(explicit_total));
    }

    let owner_percentage = MAX_REV_SHARE_PERCENTAGE - explicit_total;
    if owner_percentage > Decimal::ZERO {
        shares.push(RevShareEntry::new(owner_address, owner_percentage));
    }

    Ok(shares)
}
