use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProxyResource;
use crate::constants::SiteRuntimeState;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInfoProperties {
    #[serde(default)]
    pub children: Option<Vec<String>>,
    #[serde(default)]
    pub command_line: Option<String>,
    #[serde(default)]
    pub deployment_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub environment_variables: Option<HashMap<String, String>>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub handle_count: Option<i64>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub identifier: Option<i64>,
    #[serde(default)]
    pub iis_profile_timeout_in_seconds: Option<f64>,
    #[serde(default)]
    pub is_iis_profile_running: Option<bool>,
    #[serde(default)]
    pub is_profile_running: Option<bool>,
    #[serde(default)]
    pub is_scm_site: Option<bool>,
    #[serde(default)]
    pub is_webjob: Option<bool>,
    #[serde(default)]
    pub minidump: Option<String>,
    #[serde(default)]
    pub module_count: Option<i64>,
    #[serde(default)]
    pub modules: Option<Vec<ProcessModuleInfo>>,
    #[serde(default)]
    pub open_file_handles: Option<Vec<String>>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub private_memory: Option<i64>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub thread_count: Option<i64>,
    #[serde(default)]
    pub threads: Option<Vec<ProcessThreadInfo>>,
    #[serde(default)]
    pub time_stamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_cpu_time: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub working_set: Option<i64>,
}

/// A process running on one instance of the site.
pub type ProcessInfo = ProxyResource<ProcessInfoProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessModuleInfoProperties {
    #[serde(default)]
    pub base_address: Option<String>,
    #[serde(default)]
    pub file_description: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub file_version: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub is_debug: Option<bool>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub module_memory_size: Option<i64>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub product_version: Option<String>,
}

pub type ProcessModuleInfo = ProxyResource<ProcessModuleInfoProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessThreadInfoProperties {
    #[serde(default)]
    pub base_priority: Option<i64>,
    #[serde(default)]
    pub current_priority: Option<i64>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub identifier: Option<i64>,
    #[serde(default)]
    pub priority_level: Option<String>,
    #[serde(default)]
    pub process: Option<String>,
    #[serde(default)]
    pub start_address: Option<String>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub total_processor_time: Option<String>,
    #[serde(default)]
    pub user_processor_time: Option<String>,
    #[serde(default)]
    pub wait_reason: Option<String>,
}

pub type ProcessThreadInfo = ProxyResource<ProcessThreadInfoProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSiteInstanceStatusProperties {
    #[serde(default)]
    pub console_url: Option<String>,
    #[serde(default)]
    pub detector_url: Option<String>,
    #[serde(default)]
    pub health_check_url: Option<String>,
    #[serde(default)]
    pub state: Option<SiteRuntimeState>,
    #[serde(default)]
    pub status_url: Option<String>,
}

/// Runtime status of one scaled-out instance.
pub type WebSiteInstanceStatus = ProxyResource<WebSiteInstanceStatusProperties>;
