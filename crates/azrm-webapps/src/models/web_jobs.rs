use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProxyResource;
use crate::constants::{ContinuousWebJobStatus, TriggeredWebJobStatus, WebJobType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuousWebJobProperties {
    #[serde(default)]
    pub detailed_status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub extra_info_url: Option<String>,
    #[serde(default)]
    pub log_url: Option<String>,
    #[serde(default)]
    pub run_command: Option<String>,
    #[serde(default)]
    pub settings: Option<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    pub status: Option<ContinuousWebJobStatus>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub using_sdk: Option<bool>,
    #[serde(default)]
    pub web_job_type: Option<WebJobType>,
}

pub type ContinuousWebJob = ProxyResource<ContinuousWebJobProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggeredJobRun {
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error_url: Option<String>,
    #[serde(default)]
    pub job_name: Option<String>,
    #[serde(default)]
    pub output_url: Option<String>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<TriggeredWebJobStatus>,
    #[serde(default)]
    pub trigger: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub web_job_id: Option<String>,
    #[serde(default)]
    pub web_job_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggeredWebJobProperties {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub extra_info_url: Option<String>,
    #[serde(default)]
    pub history_url: Option<String>,
    #[serde(default)]
    pub latest_run: Option<TriggeredJobRun>,
    #[serde(default)]
    pub public_network_access: Option<String>,
    #[serde(default)]
    pub run_command: Option<String>,
    #[serde(default)]
    pub scheduler_logs_url: Option<String>,
    #[serde(default)]
    pub settings: Option<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    pub storage_account_required: Option<bool>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub using_sdk: Option<bool>,
    #[serde(default)]
    pub web_job_type: Option<WebJobType>,
}

pub type TriggeredWebJob = ProxyResource<TriggeredWebJobProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggeredJobHistoryProperties {
    #[serde(default)]
    pub runs: Option<Vec<TriggeredJobRun>>,
}

pub type TriggeredJobHistory = ProxyResource<TriggeredJobHistoryProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebJobProperties {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub extra_info_url: Option<String>,
    #[serde(default)]
    pub run_command: Option<String>,
    #[serde(default)]
    pub settings: Option<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub using_sdk: Option<bool>,
    #[serde(default)]
    pub web_job_type: Option<WebJobType>,
}

pub type WebJob = ProxyResource<WebJobProperties>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggered_job_latest_run() {
        let job: TriggeredWebJob = serde_json::from_str(
            r#"{
                "name": "app1/cleanup",
                "properties": {
                    "webJobType": "Triggered",
                    "latestRun": {"status": "Success", "startTime": "2024-05-01T00:00:00Z", "duration": "00:00:10"}
                }
            }"#,
        )
        .unwrap();
        let props = job.properties.unwrap();
        assert_eq!(props.web_job_type, Some(WebJobType::Triggered));
        let run = props.latest_run.unwrap();
        assert_eq!(run.status, Some(TriggeredWebJobStatus::Success));
        assert_eq!(run.duration.as_deref(), Some("00:00:10"));
    }

    #[test]
    fn continuous_job_unknown_status() {
        let job: ContinuousWebJob =
            serde_json::from_str(r#"{"properties":{"status":"Recycling"}}"#).unwrap();
        assert_eq!(
            job.properties.unwrap().status,
            Some(ContinuousWebJobStatus::Other("Recycling".into()))
        );
    }
}
