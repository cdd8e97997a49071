use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProxyResource;
use crate::constants::{BackupItemStatus, BackupRestoreOperationType, DatabaseType, FrequencyUnit};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRequestProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_schedule: Option<BackupSchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub databases: Option<Vec<DatabaseBackupSetting>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// SAS URL of the target blob container.
    pub storage_account_url: String,
}

/// A one-off backup request, or the site's scheduled backup configuration.
pub type BackupRequest = ProxyResource<BackupRequestProperties>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupSchedule {
    pub frequency_interval: i64,
    pub frequency_unit: FrequencyUnit,
    pub keep_at_least_one_backup: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_execution_time: Option<DateTime<Utc>>,
    pub retention_period_in_days: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseBackupSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_string_name: Option<String>,
    pub database_type: DatabaseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupItemProperties {
    #[serde(default, rename = "id")]
    pub backup_id: Option<i64>,
    #[serde(default)]
    pub blob_name: Option<String>,
    #[serde(default)]
    pub correlation_id: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub databases: Option<Vec<DatabaseBackupSetting>>,
    #[serde(default)]
    pub finished_time_stamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_restore_time_stamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub log: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scheduled: Option<bool>,
    #[serde(default)]
    pub size_in_bytes: Option<i64>,
    #[serde(default)]
    pub status: Option<BackupItemStatus>,
    #[serde(default)]
    pub storage_account_url: Option<String>,
    #[serde(default)]
    pub website_size_in_bytes: Option<i64>,
}

pub type BackupItem = ProxyResource<BackupItemProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreRequestProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjust_connection_strings: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_service_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub databases: Option<Vec<DatabaseBackupSetting>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosting_environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_conflicting_host_names: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_databases: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<BackupRestoreOperationType>,
    pub overwrite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    pub storage_account_url: String,
}

pub type RestoreRequest = ProxyResource<RestoreRequestProperties>;
