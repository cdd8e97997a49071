//! Azure App Service – app settings, connection strings and site config.

use azrm_core::{AzureResult, HttpMethod, ListOperationResponse, OperationResponse, RequestOptions};
use azrm_resourceids::ResourceId;

use crate::ids::{
    AppServiceId, AppSettingId, ConnectionStringId, SlotAppSettingId, SlotConnectionStringId, SlotId,
};
use crate::models::{
    ApiKvReference, AzureStoragePropertyDictionaryResource, ConnectionStringDictionary,
    CsmPublishingCredentialsPoliciesEntity, SiteAuthSettings, SiteConfigResource, SiteLogsConfig,
    SlotConfigNamesResource, StringDictionary,
};
use crate::{WebAppsClient, NO_BODY};

const FTP_POLICY: &str = "basicPublishingCredentialsPolicies/ftp";
const SCM_POLICY: &str = "basicPublishingCredentialsPolicies/scm";

impl WebAppsClient {
    // ─── App settings ───────────────────────────────────────────────

    pub async fn list_application_settings(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<OperationResponse<StringDictionary>> {
        self.list_config_at("list_application_settings", id.id(), "appsettings")
            .await
    }

    pub async fn list_application_settings_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<OperationResponse<StringDictionary>> {
        self.list_config_at("list_application_settings", id.id(), "appsettings")
            .await
    }

    /// Replace every app setting of the site.
    pub async fn update_application_settings(
        &self,
        id: &AppServiceId,
        settings: &StringDictionary,
    ) -> AzureResult<OperationResponse<StringDictionary>> {
        self.put_config_at("update_application_settings", id.id(), "appsettings", settings)
            .await
    }

    pub async fn update_application_settings_slot(
        &self,
        id: &SlotId,
        settings: &StringDictionary,
    ) -> AzureResult<OperationResponse<StringDictionary>> {
        self.put_config_at("update_application_settings", id.id(), "appsettings", settings)
            .await
    }

    // ─── Connection strings ─────────────────────────────────────────

    pub async fn list_connection_strings(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<OperationResponse<ConnectionStringDictionary>> {
        self.list_config_at("list_connection_strings", id.id(), "connectionstrings")
            .await
    }

    pub async fn list_connection_strings_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<OperationResponse<ConnectionStringDictionary>> {
        self.list_config_at("list_connection_strings", id.id(), "connectionstrings")
            .await
    }

    pub async fn update_connection_strings(
        &self,
        id: &AppServiceId,
        strings: &ConnectionStringDictionary,
    ) -> AzureResult<OperationResponse<ConnectionStringDictionary>> {
        self.put_config_at("update_connection_strings", id.id(), "connectionstrings", strings)
            .await
    }

    pub async fn update_connection_strings_slot(
        &self,
        id: &SlotId,
        strings: &ConnectionStringDictionary,
    ) -> AzureResult<OperationResponse<ConnectionStringDictionary>> {
        self.put_config_at("update_connection_strings", id.id(), "connectionstrings", strings)
            .await
    }

    // ─── Site config (`config/web`) ─────────────────────────────────

    pub async fn get_configuration(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<OperationResponse<SiteConfigResource>> {
        self.get_config_at("get_configuration", id.id(), "web").await
    }

    pub async fn get_configuration_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<OperationResponse<SiteConfigResource>> {
        self.get_config_at("get_configuration", id.id(), "web").await
    }

    pub async fn create_or_update_configuration(
        &self,
        id: &AppServiceId,
        config: &SiteConfigResource,
    ) -> AzureResult<OperationResponse<SiteConfigResource>> {
        self.put_config_at("create_or_update_configuration", id.id(), "web", config)
            .await
    }

    pub async fn create_or_update_configuration_slot(
        &self,
        id: &SlotId,
        config: &SiteConfigResource,
    ) -> AzureResult<OperationResponse<SiteConfigResource>> {
        self.put_config_at("create_or_update_configuration", id.id(), "web", config)
            .await
    }

    /// Patch only the fields set on `config`.
    pub async fn update_configuration(
        &self,
        id: &AppServiceId,
        config: &SiteConfigResource,
    ) -> AzureResult<OperationResponse<SiteConfigResource>> {
        self.patch_config_at(id.id(), config).await
    }

    pub async fn update_configuration_slot(
        &self,
        id: &SlotId,
        config: &SiteConfigResource,
    ) -> AzureResult<OperationResponse<SiteConfigResource>> {
        self.patch_config_at(id.id(), config).await
    }

    async fn patch_config_at(
        &self,
        path: String,
        config: &SiteConfigResource,
    ) -> AzureResult<OperationResponse<SiteConfigResource>> {
        let options =
            RequestOptions::new(HttpMethod::Patch, format!("{path}/config/web"), &[200]);
        self.execute("update_configuration", options, Some(config))
            .await
    }

    // ─── Authentication ─────────────────────────────────────────────

    pub async fn get_auth_settings(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<OperationResponse<SiteAuthSettings>> {
        self.list_config_at("get_auth_settings", id.id(), "authsettings")
            .await
    }

    pub async fn get_auth_settings_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<OperationResponse<SiteAuthSettings>> {
        self.list_config_at("get_auth_settings", id.id(), "authsettings")
            .await
    }

    pub async fn update_auth_settings(
        &self,
        id: &AppServiceId,
        settings: &SiteAuthSettings,
    ) -> AzureResult<OperationResponse<SiteAuthSettings>> {
        self.put_config_at("update_auth_settings", id.id(), "authsettings", settings)
            .await
    }

    pub async fn update_auth_settings_slot(
        &self,
        id: &SlotId,
        settings: &SiteAuthSettings,
    ) -> AzureResult<OperationResponse<SiteAuthSettings>> {
        self.put_config_at("update_auth_settings", id.id(), "authsettings", settings)
            .await
    }

    // ─── Publishing credential policies ─────────────────────────────

    pub async fn get_scm_allowed(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<OperationResponse<CsmPublishingCredentialsPoliciesEntity>> {
        self.get_policy_at("get_scm_allowed", id.id(), SCM_POLICY).await
    }

    pub async fn get_scm_allowed_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<OperationResponse<CsmPublishingCredentialsPoliciesEntity>> {
        self.get_policy_at("get_scm_allowed", id.id(), SCM_POLICY).await
    }

    pub async fn update_scm_allowed(
        &self,
        id: &AppServiceId,
        policy: &CsmPublishingCredentialsPoliciesEntity,
    ) -> AzureResult<OperationResponse<CsmPublishingCredentialsPoliciesEntity>> {
        self.put_policy_at("update_scm_allowed", id.id(), SCM_POLICY, policy)
            .await
    }

    pub async fn update_scm_allowed_slot(
        &self,
        id: &SlotId,
        policy: &CsmPublishingCredentialsPoliciesEntity,
    ) -> AzureResult<OperationResponse<CsmPublishingCredentialsPoliciesEntity>> {
        self.put_policy_at("update_scm_allowed", id.id(), SCM_POLICY, policy)
            .await
    }

    pub async fn get_ftp_allowed(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<OperationResponse<CsmPublishingCredentialsPoliciesEntity>> {
        self.get_policy_at("get_ftp_allowed", id.id(), FTP_POLICY).await
    }

    pub async fn get_ftp_allowed_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<OperationResponse<CsmPublishingCredentialsPoliciesEntity>> {
        self.get_policy_at("get_ftp_allowed", id.id(), FTP_POLICY).await
    }

    pub async fn update_ftp_allowed(
        &self,
        id: &AppServiceId,
        policy: &CsmPublishingCredentialsPoliciesEntity,
    ) -> AzureResult<OperationResponse<CsmPublishingCredentialsPoliciesEntity>> {
        self.put_policy_at("update_ftp_allowed", id.id(), FTP_POLICY, policy)
            .await
    }

    pub async fn update_ftp_allowed_slot(
        &self,
        id: &SlotId,
        policy: &CsmPublishingCredentialsPoliciesEntity,
    ) -> AzureResult<OperationResponse<CsmPublishingCredentialsPoliciesEntity>> {
        self.put_policy_at("update_ftp_allowed", id.id(), FTP_POLICY, policy)
            .await
    }

    async fn get_policy_at(
        &self,
        operation: &'static str,
        path: String,
        policy: &str,
    ) -> AzureResult<OperationResponse<CsmPublishingCredentialsPoliciesEntity>> {
        let options = RequestOptions::new(HttpMethod::Get, format!("{path}/{policy}"), &[200]);
        self.execute(operation, options, NO_BODY).await
    }

    async fn put_policy_at(
        &self,
        operation: &'static str,
        path: String,
        policy: &str,
        body: &CsmPublishingCredentialsPoliciesEntity,
    ) -> AzureResult<OperationResponse<CsmPublishingCredentialsPoliciesEntity>> {
        let options = RequestOptions::new(HttpMethod::Put, format!("{path}/{policy}"), &[200]);
        self.execute(operation, options, Some(body)).await
    }

    // ─── Diagnostic logs ────────────────────────────────────────────

    pub async fn get_diagnostic_logs_configuration(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<OperationResponse<SiteLogsConfig>> {
        self.get_config_at("get_diagnostic_logs_configuration", id.id(), "logs")
            .await
    }

    pub async fn get_diagnostic_logs_configuration_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<OperationResponse<SiteLogsConfig>> {
        self.get_config_at("get_diagnostic_logs_configuration", id.id(), "logs")
            .await
    }

    pub async fn update_diagnostic_logs_config(
        &self,
        id: &AppServiceId,
        config: &SiteLogsConfig,
    ) -> AzureResult<OperationResponse<SiteLogsConfig>> {
        self.put_config_at("update_diagnostic_logs_config", id.id(), "logs", config)
            .await
    }

    pub async fn update_diagnostic_logs_config_slot(
        &self,
        id: &SlotId,
        config: &SiteLogsConfig,
    ) -> AzureResult<OperationResponse<SiteLogsConfig>> {
        self.put_config_at("update_diagnostic_logs_config", id.id(), "logs", config)
            .await
    }

    // ─── Azure storage mounts ───────────────────────────────────────

    pub async fn list_azure_storage_accounts(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<OperationResponse<AzureStoragePropertyDictionaryResource>> {
        self.list_config_at("list_azure_storage_accounts", id.id(), "azurestorageaccounts")
            .await
    }

    pub async fn list_azure_storage_accounts_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<OperationResponse<AzureStoragePropertyDictionaryResource>> {
        self.list_config_at("list_azure_storage_accounts", id.id(), "azurestorageaccounts")
            .await
    }

    pub async fn update_azure_storage_accounts(
        &self,
        id: &AppServiceId,
        accounts: &AzureStoragePropertyDictionaryResource,
    ) -> AzureResult<OperationResponse<AzureStoragePropertyDictionaryResource>> {
        self.put_config_at(
            "update_azure_storage_accounts",
            id.id(),
            "azurestorageaccounts",
            accounts,
        )
        .await
    }

    pub async fn update_azure_storage_accounts_slot(
        &self,
        id: &SlotId,
        accounts: &AzureStoragePropertyDictionaryResource,
    ) -> AzureResult<OperationResponse<AzureStoragePropertyDictionaryResource>> {
        self.put_config_at(
            "update_azure_storage_accounts",
            id.id(),
            "azurestorageaccounts",
            accounts,
        )
        .await
    }

    // ─── Slot-sticky setting names ──────────────────────────────────

    /// Names of settings that stay with a slot during swaps. Site-level only.
    pub async fn list_slot_configuration_names(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<OperationResponse<SlotConfigNamesResource>> {
        self.get_config_at("list_slot_configuration_names", id.id(), "slotConfigNames")
            .await
    }

    pub async fn update_slot_configuration_names(
        &self,
        id: &AppServiceId,
        names: &SlotConfigNamesResource,
    ) -> AzureResult<OperationResponse<SlotConfigNamesResource>> {
        self.put_config_at(
            "update_slot_configuration_names",
            id.id(),
            "slotConfigNames",
            names,
        )
        .await
    }

    // ─── Regional VNet integration ──────────────────────────────────

    pub async fn delete_swift_virtual_network(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_swift_at(id.id()).await
    }

    pub async fn delete_swift_virtual_network_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_swift_at(id.id()).await
    }

    async fn delete_swift_at(&self, path: String) -> AzureResult<OperationResponse<()>> {
        let options = RequestOptions::new(
            HttpMethod::Delete,
            format!("{path}/networkConfig/virtualNetwork"),
            &[200, 404],
        );
        self.execute_no_model("delete_swift_virtual_network", options, NO_BODY)
            .await
    }

    // ─── Key Vault references ───────────────────────────────────────

    pub async fn get_app_setting_key_vault_reference(
        &self,
        id: &AppSettingId,
    ) -> AzureResult<OperationResponse<ApiKvReference>> {
        self.get_reference_at("get_app_setting_key_vault_reference", id.id())
            .await
    }

    pub async fn get_app_setting_key_vault_reference_slot(
        &self,
        id: &SlotAppSettingId,
    ) -> AzureResult<OperationResponse<ApiKvReference>> {
        self.get_reference_at("get_app_setting_key_vault_reference", id.id())
            .await
    }

    pub async fn get_site_connection_string_key_vault_reference(
        &self,
        id: &ConnectionStringId,
    ) -> AzureResult<OperationResponse<ApiKvReference>> {
        self.get_reference_at("get_site_connection_string_key_vault_reference", id.id())
            .await
    }

    pub async fn get_site_connection_string_key_vault_reference_slot(
        &self,
        id: &SlotConnectionStringId,
    ) -> AzureResult<OperationResponse<ApiKvReference>> {
        self.get_reference_at("get_site_connection_string_key_vault_reference", id.id())
            .await
    }

    async fn get_reference_at(
        &self,
        operation: &'static str,
        path: String,
    ) -> AzureResult<OperationResponse<ApiKvReference>> {
        let options = RequestOptions::new(HttpMethod::Get, path, &[200]);
        self.execute(operation, options, NO_BODY).await
    }

    pub async fn get_app_settings_key_vault_references(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<ListOperationResponse<ApiKvReference>> {
        self.list_references_at(id.id()).await
    }

    pub async fn get_app_settings_key_vault_references_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<ListOperationResponse<ApiKvReference>> {
        self.list_references_at(id.id()).await
    }

    complete_variants!(
        get_app_settings_key_vault_references,
        get_app_settings_key_vault_references_complete,
        get_app_settings_key_vault_references_complete_matching_predicate,
        AppServiceId,
        ApiKvReference
    );
    complete_variants!(
        get_app_settings_key_vault_references_slot,
        get_app_settings_key_vault_references_slot_complete,
        get_app_settings_key_vault_references_slot_complete_matching_predicate,
        SlotId,
        ApiKvReference
    );

    async fn list_references_at(
        &self,
        path: String,
    ) -> AzureResult<ListOperationResponse<ApiKvReference>> {
        let options = RequestOptions::new(
            HttpMethod::Get,
            format!("{path}/config/configreferences/appsettings"),
            &[200],
        );
        self.execute_paged("get_app_settings_key_vault_references", options)
            .await
    }

    // ─── Shared `config/{name}` helpers ─────────────────────────────

    /// `POST config/{name}/list` – used for settings that carry secrets.
    async fn list_config_at<T: serde::de::DeserializeOwned>(
        &self,
        operation: &'static str,
        path: String,
        name: &str,
    ) -> AzureResult<OperationResponse<T>> {
        let options = RequestOptions::new(
            HttpMethod::Post,
            format!("{path}/config/{name}/list"),
            &[200],
        );
        self.execute(operation, options, NO_BODY).await
    }

    async fn get_config_at<T: serde::de::DeserializeOwned>(
        &self,
        operation: &'static str,
        path: String,
        name: &str,
    ) -> AzureResult<OperationResponse<T>> {
        let options = RequestOptions::new(HttpMethod::Get, format!("{path}/config/{name}"), &[200]);
        self.execute(operation, options, NO_BODY).await
    }

    async fn put_config_at<B, T>(
        &self,
        operation: &'static str,
        path: String,
        name: &str,
        body: &B,
    ) -> AzureResult<OperationResponse<T>>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let options = RequestOptions::new(HttpMethod::Put, format!("{path}/config/{name}"), &[200]);
        self.execute(operation, options, Some(body)).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use azrm_core::testing::FakeBackend;
    use azrm_core::HttpMethod;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::models::{CsmPublishingCredentialsPoliciesEntityProperties, SiteConfig};
    use crate::predicates::ResourcePredicate;
    use crate::test_support::{client, last_path, SITE};

    fn site() -> AppServiceId {
        AppServiceId::new("sub1", "rg1", "site1")
    }

    #[tokio::test]
    async fn list_application_settings_is_a_post() {
        let backend = FakeBackend::new().with_json(
            200,
            json!({"name": "appsettings", "properties": {"FOO": "bar"}}),
        );
        let c = client(&backend).await;
        let resp = c.list_application_settings(&site()).await.unwrap();
        assert_eq!(resp.model.unwrap().properties.unwrap()["FOO"], "bar");
        assert_eq!(backend.last_request().unwrap().method, HttpMethod::Post);
        assert_eq!(
            last_path(&backend),
            format!("{SITE}/config/appsettings/list?api-version=2023-12-01")
        );
    }

    #[tokio::test]
    async fn update_application_settings_slot_body() {
        let backend = FakeBackend::new().with_json(200, json!({"properties": {"A": "1"}}));
        let c = client(&backend).await;
        let body = StringDictionary::with_properties(HashMap::from([("A".to_string(), "1".to_string())]));
        c.update_application_settings_slot(&SlotId::new("sub1", "rg1", "site1", "dev"), &body)
            .await
            .unwrap();
        let req = backend.last_request().unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.json_body().unwrap(), json!({"properties": {"A": "1"}}));
        assert_eq!(
            last_path(&backend),
            format!("{SITE}/slots/dev/config/appsettings?api-version=2023-12-01")
        );
    }

    #[tokio::test]
    async fn update_configuration_is_a_patch() {
        let backend = FakeBackend::new().with_json(200, json!({"properties": {"alwaysOn": true}}));
        let c = client(&backend).await;
        let body = SiteConfigResource::with_properties(SiteConfig {
            always_on: Some(true),
            ..Default::default()
        });
        let resp = c.update_configuration(&site(), &body).await.unwrap();
        assert_eq!(resp.model.unwrap().properties.unwrap().always_on, Some(true));
        let req = backend.last_request().unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.json_body().unwrap(), json!({"properties": {"alwaysOn": true}}));
    }

    #[tokio::test]
    async fn ftp_policy_path() {
        let backend = FakeBackend::new().with_json(200, json!({"properties": {"allow": false}}));
        let c = client(&backend).await;
        let body = CsmPublishingCredentialsPoliciesEntity::with_properties(
            CsmPublishingCredentialsPoliciesEntityProperties { allow: false },
        );
        let resp = c.update_ftp_allowed(&site(), &body).await.unwrap();
        assert!(!resp.model.unwrap().properties.unwrap().allow);
        assert_eq!(
            last_path(&backend),
            format!("{SITE}/basicPublishingCredentialsPolicies/ftp?api-version=2023-12-01")
        );
    }

    #[tokio::test]
    async fn delete_swift_accepts_not_found() {
        let backend = FakeBackend::new().with_status(404, &[]);
        let c = client(&backend).await;
        let resp = c.delete_swift_virtual_network(&site()).await.unwrap();
        assert_eq!(resp.status, 404);
    }

    #[tokio::test]
    async fn key_vault_reference_by_id() {
        let backend = FakeBackend::new().with_json(
            200,
            json!({"name": "DB_PASSWORD", "properties": {"status": "Resolved"}}),
        );
        let c = client(&backend).await;
        let id = AppSettingId::new("sub1", "rg1", "site1", "DB_PASSWORD");
        c.get_app_setting_key_vault_reference(&id).await.unwrap();
        assert_eq!(
            last_path(&backend),
            format!("{SITE}/config/configReferences/appSettings/DB_PASSWORD?api-version=2023-12-01")
        );
    }

    #[tokio::test]
    async fn key_vault_references_filtered_by_name() {
        let backend = FakeBackend::new().with_json(
            200,
            json!({"value": [{"name": "A"}, {"name": "B"}]}),
        );
        let c = client(&backend).await;
        let refs = c
            .get_app_settings_key_vault_references_complete_matching_predicate(
                &site(),
                ResourcePredicate::by_name("B"),
            )
            .await
            .unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name.as_deref(), Some("B"));
    }
}
