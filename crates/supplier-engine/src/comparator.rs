//! Order-independent comparison of supplier service configs.
//!
//! Both sides are first canonicalized: every collection is sorted by its key
//! with an explicit tie-break so duplicates line up deterministically:
//!
//! - services by `service_id`, then by their canonical contents
//! - revenue share by `address`, then by percentage
//! - endpoints by `(url, rpc_type)`, then by their sorted configs
//! - configs by `key`, then by value
//!
//! The sorted collections are then merge-joined on their key. Entries are
//! reported relative to the left side: `Missing*` exists only on the right,
//! `Extra*` only on the left. When two collections differ in length no
//! element-wise comparison is attempted for that collection.

use crate::types::{ConfigOption, ResolvedEndpoint, RpcType, SupplierServiceConfig};
use itertools::{EitherOrBoth, Itertools};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DiffEntry {
    ServiceCountMismatch {
        left: usize,
        right: usize,
    },
    MissingService {
        service_id: String,
    },
    ExtraService {
        service_id: String,
    },
    RevShareCountMismatch {
        service_id: String,
        left: usize,
        right: usize,
    },
    MissingRevShare {
        service_id: String,
        address: String,
    },
    ExtraRevShare {
        service_id: String,
        address: String,
    },
    RevSharePercentageMismatch {
        service_id: String,
        address: String,
        left: Decimal,
        right: Decimal,
    },
    EndpointCountMismatch {
        service_id: String,
        left: usize,
        right: usize,
    },
    MissingEndpoint {
        service_id: String,
        url: String,
        rpc_type: RpcType,
    },
    ExtraEndpoint {
        service_id: String,
        url: String,
        rpc_type: RpcType,
    },
    ConfigCountMismatch {
        service_id: String,
        url: String,
        rpc_type: RpcType,
        left: usize,
        right: usize,
    },
    MissingConfig {
        service_id: String,
        url: String,
        rpc_type: RpcType,
        key: String,
    },
    ExtraConfig {
        service_id: String,
        url: String,
        rpc_type: RpcType,
        key: String,
    },
    ConfigValueMismatch {
        service_id: String,
        url: String,
        rpc_type: RpcType,
        key: String,
        left: String,
        right: String,
    },
}

impl Display for DiffEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ServiceCountMismatch { left, right } => {
                write!(f, "service count differs: {left} vs {right}")
            }
            Self::MissingService { service_id } => write!(f, "service {service_id} is missing"),
            Self::ExtraService { service_id } => write!(f, "service {service_id} is unexpected"),
            Self::RevShareCountMismatch {
                service_id,
                left,
                right,
            } => write!(
                f,
                "{service_id}: revenue share entry count differs: {left} vs {right}"
            ),
            Self::MissingRevShare {
                service_id,
                address,
            } => write!(f, "{service_id}: revenue share for {address} is missing"),
            Self::ExtraRevShare {
                service_id,
                address,
            } => write!(f, "{service_id}: revenue share for {address} is unexpected"),
            Self::RevSharePercentageMismatch {
                service_id,
                address,
                left,
                right,
            } => write!(
                f,
                "{service_id}: revenue share for {address} differs: {left}% vs {right}%"
            ),
            Self::EndpointCountMismatch {
                service_id,
                left,
                right,
            } => write!(
                f,
                "{service_id}: endpoint count differs: {left} vs {right}"
            ),
            Self::MissingEndpoint {
                service_id,
                url,
                rpc_type,
            } => write!(f, "{service_id}: endpoint {rpc_type} {url} is missing"),
            Self::ExtraEndpoint {
                service_id,
                url,
                rpc_type,
            } => write!(f, "{service_id}: endpoint {rpc_type} {url} is unexpected"),
            Self::ConfigCountMismatch {
                service_id,
                url,
                rpc_type,
                left,
                right,
            } => write!(
                f,
                "{service_id}: config count of {rpc_type} {url} differs: {left} vs {right}"
            ),
            Self::MissingConfig {
                service_id,
                url,
                rpc_type,
                key,
            } => write!(f, "{service_id}: config {key} of {rpc_type} {url} is missing"),
            Self::ExtraConfig {
                service_id,
                url,
                rpc_type,
                key,
            } => write!(f, "{service_id}: config {key} of {rpc_type} {url} is unexpected"),
            Self::ConfigValueMismatch {
                service_id,
                url,
                rpc_type,
                key,
                left,
                right,
            } => write!(
                f,
                "{service_id}: config {key} of {rpc_type} {url} differs: {left} vs {right}"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub is_equal: bool,
    pub diff: Vec<DiffEntry>,
}

impl ComparisonResult {
    fn from_diff(diff: Vec<DiffEntry>) -> Self {
        Self {
            is_equal: diff.is_empty(),
            diff,
        }
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CanonicalEndpoint<'a> {
    url: &'a str,
    rpc_type: RpcType,
    configs: Vec<&'a ConfigOption>,
}

impl<'a> CanonicalEndpoint<'a> {
    fn new(endpoint: &'a ResolvedEndpoint) -> Self {
        Self {
            url: &endpoint.url,
            rpc_type: endpoint.rpc_type,
            configs: endpoint.configs.iter().sorted().collect(),
        }
    }

    fn key(&self) -> (&'a str, RpcType) {
        (self.url, self.rpc_type)
    }
}

// field order drives the derived ordering
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CanonicalConfig<'a> {
    service_id: &'a str,
    rev_share: Vec<(&'a str, Decimal)>,
    endpoints: Vec<CanonicalEndpoint<'a>>,
}

impl<'a> CanonicalConfig<'a> {
    fn new(config: &'a SupplierServiceConfig) -> Self {
        Self {
            service_id: &config.service_id,
            rev_share: config
                .rev_share
                .iter()
                .map(|entry| (entry.address.as_str(), entry.rev_share_percentage))
                .sorted()
                .collect(),
            endpoints: config
                .endpoints
                .iter()
                .map(CanonicalEndpoint::new)
                .sorted()
                .collect(),
        }
    }
}

fn canonicalize(configs: &[SupplierServiceConfig]) -> Vec<CanonicalConfig<'_>> {
    configs.iter().map(CanonicalConfig::new).sorted().collect()
}

/// Compares two config sets, ignoring the order of every collection.
pub fn compare(left: &[SupplierServiceConfig], right: &[SupplierServiceConfig]) -> ComparisonResult {
    if left.len() != right.len() {
        return ComparisonResult::from_diff(vec![DiffEntry::ServiceCountMismatch {
            left: left.len(),
            right: right.len(),
        }]);
    }

    let left = canonicalize(left);
    let right = canonicalize(right);
    let mut diff = Vec::new();

    for pair in left
        .iter()
        .merge_join_by(right.iter(), |l, r| l.service_id.cmp(r.service_id))
    {
        match pair {
            EitherOrBoth::Both(l, r) => compare_service(l, r, &mut diff),
            EitherOrBoth::Left(l) => diff.push(DiffEntry::ExtraService {
                service_id: l.service_id.to_string(),
            }),
            EitherOrBoth::Right(r) => diff.push(DiffEntry::MissingService {
                service_id: r.service_id.to_string(),
            }),
        }
    }

    ComparisonResult::from_diff(diff)
}

fn compare_service(left: &CanonicalConfig, right: &CanonicalConfig, diff: &mut Vec<DiffEntry>) {
    compare_rev_share(left, right, diff);
    compare_endpoints(left, right, diff);
}

fn compare_rev_share(left: &CanonicalConfig, right: &CanonicalConfig, diff: &mut Vec<DiffEntry>) {
    let service_id = left.service_id;

    if left.rev_share.len() != right.rev_share.len() {
        diff.push(DiffEntry::RevShareCountMismatch {
            service_id: service_id.to_string(),
            left: left.rev_share.len(),
            right: right.rev_share.len(),
        });
        return;
    }

    for pair in left
        .rev_share
        .iter()
        .merge_join_by(right.rev_share.iter(), |l, r| l.0.cmp(r.0))
    {
        match pair {
            EitherOrBoth::Both((address, l), (_, r)) if l != r => {
                diff.push(DiffEntry::RevSharePercentageMismatch {
                    service_id: service_id.to_string(),
                    address: address.to_string(),
                    left: *l,
                    right: *r,
                })
            }
            EitherOrBoth::Both(..) => {}
            EitherOrBoth::Left((address, _)) => diff.push(DiffEntry::ExtraRevShare {
                service_id: service_id.to_string(),
                address: address.to_string(),
            }),
            EitherOrBoth::Right((address, _)) => diff.push(DiffEntry::MissingRevShare {
                service_id: service_id.to_string(),
                address: address.to_string(),
            }),
        }
    }
}

fn compare_endpoints(left: &CanonicalConfig, right: &CanonicalConfig, diff: &mut Vec<DiffEntry>) {
    let service_id = left.service_id;

    if left.endpoints.len() != right.endpoints.len() {
        diff.push(DiffEntry::EndpointCountMismatch {
            service_id: service_id.to_string(),
            left: left.endpoints.len(),
            right: right.endpoints.len(),
        });
        return;
    }

    for pair in left
        .endpoints
        .iter()
        .merge_join_by(right.endpoints.iter(), |l, r| l.key().cmp(&r.key()))
    {
        match pair {
            EitherOrBoth::Both(l, r) => compare_configs(service_id, l, r, diff),
            EitherOrBoth::Left(l) => diff.push(DiffEntry::ExtraEndpoint {
                service_id: service_id.to_string(),
                url: l.url.to_string(),
                rpc_type: l.rpc_type,
            }),
            EitherOrBoth::Right(r) => diff.push(DiffEntry::MissingEndpoint {
                service_id: service_id.to_string(),
                url: r.url.to_string(),
                rpc_type: r.rpc_type,
            }),
        }
    }
}

fn compare_configs(
    service_id: &str,
    left: &CanonicalEndpoint,
    right: &CanonicalEndpoint,
    diff: &mut Vec<DiffEntry>,
) {
    if left.configs.len() != right.configs.len() {
        diff.push(DiffEntry::ConfigCountMismatch {
            service_id: service_id.to_string(),
            url: left.url.to_string(),
            rpc_type: left.rpc_type,
            left: left.configs.len(),
            right: right.configs.len(),
        });
        return;
    }

    for pair in left
        .configs
        .iter()
        .merge_join_by(right.configs.iter(), |l, r| l.key.cmp(&r.key))
    {
        match pair {
            EitherOrBoth::Both(l, r) if l.value != r.value => {
                diff.push(DiffEntry::ConfigValueMismatch {
                    service_id: service_id.to_string(),
                    url: left.url.to_string(),
                    rpc_type: left.rpc_type,
                    key: l.key.clone(),
                    left: l.value.clone(),
                    right: r.value.clone(),
                })
            }
            EitherOrBoth::Both(..) => {}
            EitherOrBoth::Left(l) => diff.push(DiffEntry::ExtraConfig {
                service_id: service_id.to_string(),
                url: left.url.to_string(),
                rpc_type: left.rpc_type,
                key: l.key.clone(),
            }),
            EitherOrBoth::Right(r) => diff.push(DiffEntry::MissingConfig {
                service_id: service_id.to_string(),
                url: left.url.to_string(),
                rpc_type: left.rpc_type,
                key: r.key.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RevShareEntry;
    use rust_decimal::dec;

    fn endpoint(url: &str, rpc_type: RpcType, configs: &[(&str, &str)]) -> ResolvedEndpoint {
        ResolvedEndpoint {
            url: url.to_string(),
            rpc_type,
            configs: configs
                .iter()
                .map(|(key, value)| ConfigOption {
                    key: key.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    fn config(service_id: &str) -> SupplierServiceConfig {
        SupplierServiceConfig {
            service_id: service_id.to_string(),
            rev_share: vec![
                RevShareEntry::new("pokt1delegator", dec!(20)),
                RevShareEntry::new("pokt1owner", dec!(80)),
            ],
            endpoints: vec![
                endpoint(
                    "https://rm-01.example.com",
                    RpcType::JsonRpc,
                    &[("timeout", "30s"), ("retries", "3")],
                ),
                endpoint("wss://rm-01.example.com", RpcType::Websocket, &[]),
            ],
        }
    }

    #[test]
    fn test_identical_sets_are_equal() {
        let left = vec![config("eth"), config("anvil")];
        let result = compare(&left, &left.clone());
        assert!(result.is_equal);
        assert!(result.diff.is_empty());
    }

    #[test]
    fn test_nested_reordering_is_equal() {
        let left = vec![config("eth"), config("anvil")];

        let mut right = left.clone();
        right.reverse();
        for service in right.iter_mut() {
            service.rev_share.reverse();
            service.endpoints.reverse();
            for endpoint in service.endpoints.iter_mut() {
                endpoint.configs.reverse();
            }
        }

        assert_eq!(
            compare(&left, &right),
            ComparisonResult {
                is_equal: true,
                diff: vec![]
            }
        );
    }

    #[test]
    fn test_equal_percentages_with_different_scale() {
        let left = vec![config("eth")];
        let mut right = left.clone();
        right[0].rev_share[0].rev_share_percentage = dec!(20.00);
        assert!(compare(&left, &right).is_equal);
    }

    #[test]
    fn test_service_count_short_circuits() {
        let left = vec![config("eth"), config("anvil")];
        let right = vec![config("solana")];

        let result = compare(&left, &right);
        assert!(!result.is_equal);
        assert_eq!(
            result.diff,
            vec![DiffEntry::ServiceCountMismatch { left: 2, right: 1 }]
        );
    }

    #[test]
    fn test_changed_service_id() {
        let left = vec![config("eth"), config("anvil")];
        let right = vec![config("eth"), config("base")];

        let result = compare(&left, &right);
        assert!(!result.is_equal);
        assert_eq!(
            result.diff,
            vec![
                DiffEntry::ExtraService {
                    service_id: "anvil".to_string()
                },
                DiffEntry::MissingService {
                    service_id: "base".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_percentage_difference() {
        let left = vec![config("eth")];
        let mut right = left.clone();
        right[0].rev_share[1].rev_share_percentage = dec!(79);

        assert_eq!(
            compare(&left, &right).diff,
            vec![DiffEntry::RevSharePercentageMismatch {
                service_id: "eth".to_string(),
                address: "pokt1owner".to_string(),
                left: dec!(80),
                right: dec!(79),
            }]
        );
    }

    #[test]
    fn test_rev_share_address_difference() {
        let left = vec![config("eth")];
        let mut right = left.clone();
        right[0].rev_share[0].address = "pokt1other".to_string();

        assert_eq!(
            compare(&left, &right).diff,
            vec![
                DiffEntry::ExtraRevShare {
                    service_id: "eth".to_string(),
                    address: "pokt1delegator".to_string(),
                },
                DiffEntry::MissingRevShare {
                    service_id: "eth".to_string(),
                    address: "pokt1other".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_rev_share_count_short_circuits() {
        let left = vec![config("eth")];
        let mut right = left.clone();
        right[0].rev_share.pop();
        right[0].rev_share[0].rev_share_percentage = dec!(1);

        assert_eq!(
            compare(&left, &right).diff,
            vec![DiffEntry::RevShareCountMismatch {
                service_id: "eth".to_string(),
                left: 2,
                right: 1,
            }]
        );
    }

    #[test]
    fn test_endpoint_rpc_type_difference() {
        let left = vec![config("eth")];
        let mut right = left.clone();
        right[0].endpoints[1].rpc_type = RpcType::Grpc;

        let result = compare(&left, &right);
        assert!(!result.is_equal);
        assert_eq!(
            result.diff,
            vec![
                DiffEntry::ExtraEndpoint {
                    service_id: "eth".to_string(),
                    url: "wss://rm-01.example.com".to_string(),
                    rpc_type: RpcType::Websocket,
                },
                DiffEntry::MissingEndpoint {
                    service_id: "eth".to_string(),
                    url: "wss://rm-01.example.com".to_string(),
                    rpc_type: RpcType::Grpc,
                },
            ]
        );
    }

    #[test]
    fn test_endpoint_count_short_circuits() {
        let left = vec![config("eth")];
        let mut right = left.clone();
        right[0].endpoints.truncate(1);

        assert_eq!(
            compare(&left, &right).diff,
            vec![DiffEntry::EndpointCountMismatch {
                service_id: "eth".to_string(),
                left: 2,
                right: 1,
            }]
        );
    }

    #[test]
    fn test_config_value_difference() {
        let left = vec![config("eth")];
        let mut right = left.clone();
        right[0].endpoints[0].configs[1].value = "5".to_string();

        assert_eq!(
            compare(&left, &right).diff,
            vec![DiffEntry::ConfigValueMismatch {
                service_id: "eth".to_string(),
                url: "https://rm-01.example.com".to_string(),
                rpc_type: RpcType::JsonRpc,
                key: "retries".to_string(),
                left: "3".to_string(),
                right: "5".to_string(),
            }]
        );
    }

    #[test]
    fn test_config_count_short_circuits() {
        let left = vec![config("eth")];
        let mut right = left.clone();
        right[0].endpoints[0].configs.clear();

        assert_eq!(
            compare(&left, &right).diff,
            vec![DiffEntry::ConfigCountMismatch {
                service_id: "eth".to_string(),
                url: "https://rm-01.example.com".to_string(),
                rpc_type: RpcType::JsonRpc,
                left: 2,
                right: 0,
            }]
        );
    }

    #[test]
    fn test_config_diff_names_endpoint_rpc_type() {
        let shared = "https://rm-01.example.com";
        let mut left = config("eth");
        left.endpoints = vec![
            endpoint(shared, RpcType::JsonRpc, &[("timeout", "30s")]),
            endpoint(shared, RpcType::Rest, &[("timeout", "30s")]),
        ];
        let mut right = left.clone();
        right.endpoints[1].configs[0].value = "60s".to_string();

        let diff = compare(&[left], &[right]).diff;
        assert_eq!(
            diff,
            vec![DiffEntry::ConfigValueMismatch {
                service_id: "eth".to_string(),
                url: shared.to_string(),
                rpc_type: RpcType::Rest,
                key: "timeout".to_string(),
                left: "30s".to_string(),
                right: "60s".to_string(),
            }]
        );
        assert_eq!(
            diff[0].to_string(),
            "eth: config timeout of REST https://rm-01.example.com differs: 30s vs 60s"
        );
    }

    #[test]
    fn test_duplicate_addresses_pair_up_deterministically() {
        let mut left = config("eth");
        left.rev_share = vec![
            RevShareEntry::new("pokt1operator", dec!(10)),
            RevShareEntry::new("pokt1operator", dec!(5)),
            RevShareEntry::new("pokt1owner", dec!(85)),
        ];
        let mut right = left.clone();
        right.rev_share.rotate_left(1);

        assert!(compare(&[left], &[right]).is_equal);
    }

    #[test]
    fn test_diff_serializes_with_kind_tag() {
        let entry = DiffEntry::MissingService {
            service_id: "eth".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "missingService", "serviceId": "eth"})
        );
        assert_eq!(entry.to_string(), "service eth is missing");
    }
}
