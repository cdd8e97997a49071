//! Azure App Service – Functions, function keys and host keys.

use azrm_core::{
    AzureResult, HttpMethod, ListOperationResponse, LongRunningResponse, OperationResponse,
    RequestOptions,
};
use azrm_resourceids::ResourceId;

use crate::ids::{
    AppServiceId, FunctionId, FunctionKeyId, HostKeyId, SlotFunctionId, SlotFunctionKeyId,
    SlotHostKeyId, SlotId,
};
use crate::models::{FunctionEnvelope, FunctionSecrets, HostKeys, KeyInfo, KeyInfoResource, StringDictionary};
use crate::{WebAppsClient, NO_BODY};

impl WebAppsClient {
    // ─── Functions ──────────────────────────────────────────────────

    pub async fn list_functions(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<ListOperationResponse<FunctionEnvelope>> {
        self.list_functions_at(id.id()).await
    }

    pub async fn list_instance_functions_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<ListOperationResponse<FunctionEnvelope>> {
        self.list_functions_at(id.id()).await
    }

    complete_variants!(
        list_functions,
        list_functions_complete,
        list_functions_complete_matching_predicate,
        AppServiceId,
        FunctionEnvelope
    );
    complete_variants!(
        list_instance_functions_slot,
        list_instance_functions_slot_complete,
        list_instance_functions_slot_complete_matching_predicate,
        SlotId,
        FunctionEnvelope
    );

    async fn list_functions_at(
        &self,
        path: String,
    ) -> AzureResult<ListOperationResponse<FunctionEnvelope>> {
        let options = RequestOptions::new(HttpMethod::Get, format!("{path}/functions"), &[200]);
        self.execute_paged("list_functions", options).await
    }

    pub async fn get_function(
        &self,
        id: &FunctionId,
    ) -> AzureResult<OperationResponse<FunctionEnvelope>> {
        self.get_function_at(id.id()).await
    }

    pub async fn get_instance_function_slot(
        &self,
        id: &SlotFunctionId,
    ) -> AzureResult<OperationResponse<FunctionEnvelope>> {
        self.get_function_at(id.id()).await
    }

    async fn get_function_at(&self, path: String) -> AzureResult<OperationResponse<FunctionEnvelope>> {
        let options = RequestOptions::new(HttpMethod::Get, path, &[200]);
        self.execute("get_function", options, NO_BODY).await
    }

    pub async fn create_function(
        &self,
        id: &FunctionId,
        envelope: &FunctionEnvelope,
    ) -> AzureResult<LongRunningResponse<FunctionEnvelope>> {
        self.create_function_at(id.id(), envelope).await
    }

    pub async fn create_instance_function_slot(
        &self,
        id: &SlotFunctionId,
        envelope: &FunctionEnvelope,
    ) -> AzureResult<LongRunningResponse<FunctionEnvelope>> {
        self.create_function_at(id.id(), envelope).await
    }

    then_poll!(create_function, create_function_then_poll(id: &FunctionId, envelope: &FunctionEnvelope));
    then_poll!(
        create_instance_function_slot,
        create_instance_function_slot_then_poll(id: &SlotFunctionId, envelope: &FunctionEnvelope)
    );

    async fn create_function_at(
        &self,
        path: String,
        envelope: &FunctionEnvelope,
    ) -> AzureResult<LongRunningResponse<FunctionEnvelope>> {
        let options = RequestOptions::new(HttpMethod::Put, path, &[201]);
        self.execute_lro("create_function", options, Some(envelope))
            .await
    }

    pub async fn delete_function(&self, id: &FunctionId) -> AzureResult<OperationResponse<()>> {
        self.delete_functions_at("delete_function", id.id()).await
    }

    pub async fn delete_instance_function_slot(
        &self,
        id: &SlotFunctionId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_functions_at("delete_function", id.id()).await
    }

    // ─── Function keys ──────────────────────────────────────────────

    pub async fn list_function_keys(
        &self,
        id: &FunctionId,
    ) -> AzureResult<OperationResponse<StringDictionary>> {
        self.post_functions_at("list_function_keys", format!("{}/listkeys", id.id()))
            .await
    }

    pub async fn list_function_keys_slot(
        &self,
        id: &SlotFunctionId,
    ) -> AzureResult<OperationResponse<StringDictionary>> {
        self.post_functions_at("list_function_keys", format!("{}/listkeys", id.id()))
            .await
    }

    /// The default key and trigger URL of the function.
    pub async fn list_function_secrets(
        &self,
        id: &FunctionId,
    ) -> AzureResult<OperationResponse<FunctionSecrets>> {
        self.post_functions_at("list_function_secrets", format!("{}/listsecrets", id.id()))
            .await
    }

    pub async fn list_function_secrets_slot(
        &self,
        id: &SlotFunctionId,
    ) -> AzureResult<OperationResponse<FunctionSecrets>> {
        self.post_functions_at("list_function_secrets", format!("{}/listsecrets", id.id()))
            .await
    }

    pub async fn create_or_update_function_secret(
        &self,
        id: &FunctionKeyId,
        key: &KeyInfoResource,
    ) -> AzureResult<OperationResponse<KeyInfo>> {
        self.put_key_at("create_or_update_function_secret", id.id(), key)
            .await
    }

    pub async fn create_or_update_function_secret_slot(
        &self,
        id: &SlotFunctionKeyId,
        key: &KeyInfoResource,
    ) -> AzureResult<OperationResponse<KeyInfo>> {
        self.put_key_at("create_or_update_function_secret", id.id(), key)
            .await
    }

    pub async fn delete_function_secret(
        &self,
        id: &FunctionKeyId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_functions_at("delete_function_secret", id.id()).await
    }

    pub async fn delete_function_secret_slot(
        &self,
        id: &SlotFunctionKeyId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_functions_at("delete_function_secret", id.id()).await
    }

    // ─── Host keys ──────────────────────────────────────────────────

    pub async fn list_host_keys(&self, id: &AppServiceId) -> AzureResult<OperationResponse<HostKeys>> {
        self.post_functions_at("list_host_keys", format!("{}/host/default/listkeys", id.id()))
            .await
    }

    pub async fn list_host_keys_slot(&self, id: &SlotId) -> AzureResult<OperationResponse<HostKeys>> {
        self.post_functions_at("list_host_keys", format!("{}/host/default/listkeys", id.id()))
            .await
    }

    pub async fn create_or_update_host_secret(
        &self,
        id: &HostKeyId,
        key: &KeyInfoResource,
    ) -> AzureResult<OperationResponse<KeyInfo>> {
        self.put_key_at("create_or_update_host_secret", id.id(), key)
            .await
    }

    pub async fn create_or_update_host_secret_slot(
        &self,
        id: &SlotHostKeyId,
        key: &KeyInfoResource,
    ) -> AzureResult<OperationResponse<KeyInfo>> {
        self.put_key_at("create_or_update_host_secret", id.id(), key)
            .await
    }

    pub async fn delete_host_secret(&self, id: &HostKeyId) -> AzureResult<OperationResponse<()>> {
        self.delete_functions_at("delete_host_secret", id.id()).await
    }

    pub async fn delete_host_secret_slot(
        &self,
        id: &SlotHostKeyId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_functions_at("delete_host_secret", id.id()).await
    }

    /// Ask the Functions host to re-read its triggers.
    pub async fn sync_functions(&self, id: &AppServiceId) -> AzureResult<OperationResponse<()>> {
        self.sync_functions_at(id.id()).await
    }

    pub async fn sync_functions_slot(&self, id: &SlotId) -> AzureResult<OperationResponse<()>> {
        self.sync_functions_at(id.id()).await
    }

    async fn sync_functions_at(&self, path: String) -> AzureResult<OperationResponse<()>> {
        let options =
            RequestOptions::new(HttpMethod::Post, format!("{path}/host/default/sync"), &[204]);
        self.execute_no_model("sync_functions", options, NO_BODY).await
    }

    // ─── Shared ─────────────────────────────────────────────────────

    async fn post_functions_at<T: serde::de::DeserializeOwned>(
        &self,
        operation: &'static str,
        path: String,
    ) -> AzureResult<OperationResponse<T>> {
        let options = RequestOptions::new(HttpMethod::Post, path, &[200]);
        self.execute(operation, options, NO_BODY).await
    }

    async fn put_key_at(
        &self,
        operation: &'static str,
        path: String,
        key: &KeyInfoResource,
    ) -> AzureResult<OperationResponse<KeyInfo>> {
        let options = RequestOptions::new(HttpMethod::Put, path, &[200, 201]);
        self.execute(operation, options, Some(key)).await
    }

    /// Deleting a key or function that is already gone reports 404.
    async fn delete_functions_at(
        &self,
        operation: &'static str,
        path: String,
    ) -> AzureResult<OperationResponse<()>> {
        let options = RequestOptions::new(HttpMethod::Delete, path, &[204, 404]);
        self.execute_no_model(operation, options, NO_BODY).await
    }
}
