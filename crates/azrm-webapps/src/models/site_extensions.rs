use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProxyResource;
use crate::constants::SiteExtensionType;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteExtensionInfoProperties {
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub download_count: Option<i64>,
    #[serde(default)]
    pub extension_id: Option<String>,
    #[serde(default)]
    pub extension_type: Option<SiteExtensionType>,
    #[serde(default)]
    pub extension_url: Option<String>,
    #[serde(default)]
    pub feed_url: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub installed_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub installer_command_line_params: Option<String>,
    #[serde(default)]
    pub license_url: Option<String>,
    #[serde(default)]
    pub local_is_latest_version: Option<bool>,
    #[serde(default)]
    pub local_path: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub provisioning_state: Option<String>,
    #[serde(default)]
    pub published_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

pub type SiteExtensionInfo = ProxyResource<SiteExtensionInfoProperties>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_info() {
        let ext: SiteExtensionInfo = serde_json::from_str(
            r#"{"name":"app1/AspNetCoreRuntime","properties":{"extensionId":"AspNetCoreRuntime","extensionType":"Gallery","version":"6.0.1","localIsLatestVersion":true}}"#,
        )
        .unwrap();
        let props = ext.properties.unwrap();
        assert_eq!(props.extension_id.as_deref(), Some("AspNetCoreRuntime"));
        assert_eq!(props.extension_type, Some(SiteExtensionType::Gallery));
        assert_eq!(props.local_is_latest_version, Some(true));
    }
}
