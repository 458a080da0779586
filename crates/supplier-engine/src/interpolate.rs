use crate::{
    constants::{
        DOMAIN_PLACEHOLDER, REGION_PLACEHOLDER, RELAY_MINER_PLACEHOLDER, SERVICE_ID_PLACEHOLDER,
    },
    types::RelayMiner,
};
use std::collections::BTreeMap;

/// Values available to endpoint URL templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointParams {
    pub sid: String,
    pub rm: String,
    pub region: String,
    pub domain: String,
    pub extra: BTreeMap<String, String>,
}

impl EndpointParams {
    pub fn for_relay_miner(service_id: &str, relay_miner: &RelayMiner) -> Self {
        Self {
            sid: service_id.to_string(),
            rm: relay_miner.identity.clone(),
            region: relay_miner.region.url_value.clone(),
            domain: relay_miner.domain.clone(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            SERVICE_ID_PLACEHOLDER => Some(&self.sid),
            RELAY_MINER_PLACEHOLDER => Some(&self.rm),
            REGION_PLACEHOLDER => Some(&self.region),
            DOMAIN_PLACEHOLDER => Some(&self.domain),
            _ => self.extra.get(key).map(String::as_str),
        }
    }
}

/// Best-effort substitution of `{key}` placeholders.
///
/// Placeholders without a matching param are left as they are, as are
/// unbalanced braces. Substituted values are not scanned again.
pub fn interpolate(template: &str, params: &EndpointParams) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match params.get(key) {
            Some(value) if !key.contains('{') => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Region;

    fn params() -> EndpointParams {
        EndpointParams::for_relay_miner(
            "eth",
            &RelayMiner {
                identity: "rm-01".to_string(),
                region: Region {
                    display_name: "US East".to_string(),
                    url_value: "us-east".to_string(),
                },
                domain: "nodes.example.com".to_string(),
            },
        )
    }

    #[test]
    fn test_all_placeholders() {
        let url = interpolate("https://{sid}.{rm}.{region}.{domain}/v1", &params());
        assert_eq!(url, "https://eth.rm-01.us-east.nodes.example.com/v1");
    }

    #[test]
    fn test_repeated_placeholder() {
        let url = interpolate("https://{sid}.{domain}/{sid}", &params());
        assert_eq!(url, "https://eth.nodes.example.com/eth");
    }

    #[test]
    fn test_unknown_placeholder_is_left_intact() {
        let url = interpolate("https://{sid}.{cluster}.{domain}", &params());
        assert_eq!(url, "https://eth.{cluster}.nodes.example.com");
    }

    #[test]
    fn test_extra_params() {
        let params = params().with_extra("cluster", "blue");
        let url = interpolate("https://{sid}.{cluster}.{domain}", &params);
        assert_eq!(url, "https://eth.blue.nodes.example.com");
    }

    #[test]
    fn test_template_without_placeholders_is_unchanged() {
        for template in ["", "https://static.example.com/rpc", "ws://10.0.0.1:8546"] {
            assert_eq!(interpolate(template, &params()), template);
            assert_eq!(interpolate(template, &EndpointParams::default()), template);
        }
    }

    #[test]
    fn test_unbalanced_braces() {
        assert_eq!(interpolate("https://{sid", &params()), "https://{sid");
        assert_eq!(interpolate("https://sid}", &params()), "https://sid}");
        assert_eq!(interpolate("{}{sid}", &params()), "{}eth");
    }

    #[test]
    fn test_nested_braces() {
        assert_eq!(interpolate("{{sid}}", &params()), "{eth}");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let mut params = params();
        params.domain = "{sid}".to_string();
        assert_eq!(interpolate("{domain}", &params), "{sid}");
    }
}
