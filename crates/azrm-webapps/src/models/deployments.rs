use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ErrorEntity, ProxyResource};
use crate::constants::DeploymentBuildStatus;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
}

/// A deployment recorded by the Kudu deployment service.
pub type Deployment = ProxyResource<DeploymentProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsmDeploymentStatusProperties {
    #[serde(default)]
    pub deployment_id: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<ErrorEntity>>,
    #[serde(default)]
    pub failed_instances_logs: Option<Vec<String>>,
    #[serde(default)]
    pub number_of_instances_failed: Option<i64>,
    #[serde(default)]
    pub number_of_instances_in_progress: Option<i64>,
    #[serde(default)]
    pub number_of_instances_successful: Option<i64>,
    #[serde(default)]
    pub status: Option<DeploymentBuildStatus>,
}

/// Progress of a zip/OneDeploy deployment across instances.
pub type CsmDeploymentStatus = ProxyResource<CsmDeploymentStatusProperties>;
