use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ProxyResource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEnvelopeProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoke_url_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_root_path_href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets_file_href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_data_href: Option<String>,
}

/// A function of a function app.
pub type FunctionEnvelope = ProxyResource<FunctionEnvelopeProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSecrets {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub trigger_url: Option<String>,
}

/// A named function or host key. Omitting `value` asks the service to generate one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

pub type KeyInfoResource = ProxyResource<KeyInfo>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostKeys {
    #[serde(default)]
    pub function_keys: Option<HashMap<String, String>>,
    #[serde(default)]
    pub master_key: Option<String>,
    #[serde(default)]
    pub system_keys: Option<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_keys_deserialize() {
        let keys: HostKeys = serde_json::from_str(
            r#"{"masterKey":"m","functionKeys":{"default":"f"},"systemKeys":{}}"#,
        )
        .unwrap();
        assert_eq!(keys.master_key.as_deref(), Some("m"));
        assert_eq!(keys.function_keys.unwrap()["default"], "f");
    }

    #[test]
    fn key_info_body_without_value() {
        let body = KeyInfoResource::with_properties(KeyInfo {
            name: Some("ci".into()),
            value: None,
        });
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"properties": {"name": "ci"}})
        );
    }
}
