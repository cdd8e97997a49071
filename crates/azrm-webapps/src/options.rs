//! Optional query parameters of individual operations.

use azrm_core::OperationOptions;

fn push<T: ToString>(query: &mut Vec<(String, String)>, key: &str, value: &Option<T>) {
    if let Some(value) = value {
        query.push((key.to_string(), value.to_string()));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteOperationOptions {
    /// Also delete the App Service plan when this was its last app.
    pub delete_empty_server_farm: Option<bool>,
    pub delete_metrics: Option<bool>,
}

impl OperationOptions for DeleteOperationOptions {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        push(&mut query, "deleteEmptyServerFarm", &self.delete_empty_server_farm);
        push(&mut query, "deleteMetrics", &self.delete_metrics);
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListByResourceGroupOperationOptions {
    pub include_slots: Option<bool>,
}

impl OperationOptions for ListByResourceGroupOperationOptions {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        push(&mut query, "includeSlots", &self.include_slots);
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrateStorageOperationOptions {
    pub subscription_name: Option<String>,
}

impl OperationOptions for MigrateStorageOperationOptions {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        push(&mut query, "subscriptionName", &self.subscription_name);
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestartOperationOptions {
    /// Restart without re-applying configuration.
    pub soft_restart: Option<bool>,
    /// Block until the app has restarted.
    pub synchronous: Option<bool>,
}

impl OperationOptions for RestartOperationOptions {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        push(&mut query, "softRestart", &self.soft_restart);
        push(&mut query, "synchronous", &self.synchronous);
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartWebSiteNetworkTraceOperationOperationOptions {
    pub duration_in_seconds: Option<i64>,
    pub max_frame_length: Option<i64>,
    /// Blob container SAS URL the capture is written to.
    pub sas_url: Option<String>,
}

impl OperationOptions for StartWebSiteNetworkTraceOperationOperationOptions {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        push(&mut query, "durationInSeconds", &self.duration_in_seconds);
        push(&mut query, "maxFrameLength", &self.max_frame_length);
        push(&mut query, "sasUrl", &self.sas_url);
        query
    }
}
