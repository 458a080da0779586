#![allow(dead_code)]

use igniter_supplier_engine::types::{
    AddressGroup, AddressGroupService, ConfigOption, Endpoint, Region, RelayMiner, RevShareEntry,
    RpcType, Service,
};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

pub const OPERATOR: &str = "pokt1operator9v3k2m";
pub const OWNER: &str = "pokt1owner4f8zq7";
pub const DELEGATOR: &str = "pokt1delegator2xw5c";
pub const PLATFORM: &str = "pokt1platform8hd0a";

pub fn data_path(file: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(file)
}

pub fn relay_miner() -> RelayMiner {
    RelayMiner {
        identity: "rm-fra-01".to_string(),
        region: Region {
            display_name: "Frankfurt".to_string(),
            url_value: "eu-central".to_string(),
        },
        domain: "relays.igniter.dev".to_string(),
    }
}

pub fn service(service_id: &str) -> Service {
    Service {
        service_id: service_id.to_string(),
        name: format!("{service_id} mainnet"),
        endpoints: vec![
            Endpoint {
                url: "https://{rm}-{sid}.{region}.{domain}".to_string(),
                rpc_type: RpcType::JsonRpc,
                configs: vec![ConfigOption {
                    key: "timeout".to_string(),
                    value: "30s".to_string(),
                }],
            },
            Endpoint {
                url: "wss://{rm}-{sid}.{region}.{domain}/ws".to_string(),
                rpc_type: RpcType::Websocket,
                configs: vec![],
            },
        ],
        rev_share: vec![],
    }
}

pub fn group_service(
    service_id: &str,
    rev_share: Vec<RevShareEntry>,
    supplier_share: Option<Decimal>,
) -> AddressGroupService {
    AddressGroupService {
        service_id: service_id.to_string(),
        rev_share,
        add_supplier_share: supplier_share.is_some(),
        supplier_share: supplier_share.unwrap_or_default(),
    }
}

pub fn address_group(services: Vec<AddressGroupService>) -> AddressGroup {
    AddressGroup {
        name: "fra-primary".to_string(),
        relay_miner: relay_miner(),
        address_group_services: services,
    }
}
