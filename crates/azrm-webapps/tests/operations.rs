use std::sync::Arc;

use azrm_core::testing::FakeBackend;
use azrm_core::{
    ArmConfig, AzureClient, AzureCredentials, AzureErrorKind, AzureToken, HttpMethod,
};
use azrm_resourceids::ResourceId;
use azrm_webapps::ids::*;
use azrm_webapps::models::CsmSlotEntity;
use azrm_webapps::{ListByResourceGroupOperationOptions, ResourcePredicate, WebAppsClient};
use pretty_assertions::assert_eq;
use serde_json::json;

const ARM: &str = "https://management.azure.com";

fn config() -> ArmConfig {
    ArmConfig {
        endpoint: ARM.into(),
        retry_base_delay_ms: 1,
        poll_interval_secs: 0,
        ..Default::default()
    }
}

async fn web_apps(backend: &FakeBackend) -> WebAppsClient {
    let arm = AzureClient::with_backend(config(), Arc::new(backend.clone()));
    arm.set_token(AzureToken {
        access_token: "tok".into(),
        token_type: "Bearer".into(),
        expires_at: None,
    })
    .await;
    WebAppsClient::new(arm)
}

#[tokio::test]
async fn test_list_by_resource_group_follows_next_link() {
    let next = format!("{ARM}/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Web/sites?api-version=2023-12-01&$skiptoken=2");
    let backend = FakeBackend::new()
        .with_json(
            200,
            json!({
                "value": [
                    {"name": "api", "kind": "app,linux", "location": "westeurope"},
                    {"name": "jobs", "kind": "functionapp", "location": "westeurope"}
                ],
                "nextLink": next
            }),
        )
        .with_json(
            200,
            json!({"value": [{"name": "portal", "kind": "app,linux", "location": "northeurope"}]}),
        );
    let c = web_apps(&backend).await;

    let linux = c
        .list_by_resource_group_complete_matching_predicate(
            &ResourceGroupId::new("sub1", "rg1"),
            &ListByResourceGroupOperationOptions {
                include_slots: Some(true),
            },
            ResourcePredicate::by_kind("app,linux"),
        )
        .await
        .unwrap();
    let names: Vec<_> = linux.iter().filter_map(|s| s.name.as_deref()).collect();
    assert_eq!(names, vec!["api", "portal"]);

    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].url,
        format!("{ARM}/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Web/sites?api-version=2023-12-01&includeSlots=true")
    );
    assert_eq!(requests[1].url, next);
    assert_eq!(requests[1].header_value("Authorization"), Some("Bearer tok"));
}

#[tokio::test]
async fn test_parsed_id_drives_request() {
    let raw = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Web/sites/site1/slots/stage";
    let backend = FakeBackend::new().with_json(
        200,
        json!({"id": raw, "name": "site1/stage", "location": "westus", "kind": "app"}),
    );
    let c = web_apps(&backend).await;

    let slot = SlotId::parse_insensitively(&raw.to_lowercase()).unwrap();
    let site = c.get_slot(&slot).await.unwrap().model.unwrap();
    assert_eq!(site.location, "westus");
    assert_eq!(site.name.as_deref(), Some("site1/stage"));

    let req = backend.last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.url, format!("{ARM}{raw}?api-version=2023-12-01"));
}

#[tokio::test]
async fn test_missing_site_is_not_found() {
    let backend = FakeBackend::new().with_json(
        404,
        json!({"error": {"code": "ResourceNotFound", "message": "site1 was not found"}}),
    );
    let c = web_apps(&backend).await;

    let err = c
        .get(&AppServiceId::new("sub1", "rg1", "site1"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AzureErrorKind::NotFound);
    assert_eq!(err.status_code, Some(404));
    assert_eq!(err.error_code.as_deref(), Some("ResourceNotFound"));
}

#[tokio::test]
async fn test_throttled_request_is_retried() {
    let backend = FakeBackend::new()
        .with_status(429, &[])
        .with_status(503, &[])
        .with_status(200, &[]);
    let c = web_apps(&backend).await;

    let resp = c
        .start(&AppServiceId::new("sub1", "rg1", "site1"))
        .await
        .unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(backend.requests().len(), 3);
    assert_eq!(backend.remaining(), 0);
}

#[tokio::test]
async fn test_swap_then_poll_follows_async_operation() {
    let status_url = format!("{ARM}/subscriptions/sub1/providers/Microsoft.Web/locations/westus/operations/op1?api-version=2023-12-01");
    let result_url = format!("{ARM}/subscriptions/sub1/providers/Microsoft.Web/locations/westus/operationResults/op1?api-version=2023-12-01");
    let backend = FakeBackend::new()
        .with_status(
            202,
            &[
                ("Azure-AsyncOperation", status_url.as_str()),
                ("Location", result_url.as_str()),
            ],
        )
        .with_json(200, json!({"status": "InProgress"}))
        .with_json(200, json!({"status": "Succeeded"}))
        .with_status(200, &[]);
    let c = web_apps(&backend).await;

    c.swap_slot_with_production_then_poll(
        &AppServiceId::new("sub1", "rg1", "site1"),
        &CsmSlotEntity {
            preserve_vnet: true,
            target_slot: "stage".into(),
        },
    )
    .await
    .unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(
        requests[0].json_body().unwrap(),
        json!({"preserveVnet": true, "targetSlot": "stage"})
    );
    assert_eq!(requests[1].url, status_url);
    assert_eq!(requests[3].url, result_url);
}

#[tokio::test]
async fn test_failed_swap_is_reported() {
    let status_url = format!("{ARM}/subscriptions/sub1/providers/Microsoft.Web/locations/westus/operations/op2?api-version=2023-12-01");
    let backend = FakeBackend::new()
        .with_status(202, &[("Azure-AsyncOperation", status_url.as_str())])
        .with_json(
            200,
            json!({"status": "Failed", "error": {"code": "SwapFailed", "message": "warm-up timed out"}}),
        );
    let c = web_apps(&backend).await;

    let err = c
        .swap_slot_then_poll(
            &SlotId::new("sub1", "rg1", "site1", "stage"),
            &CsmSlotEntity {
                preserve_vnet: false,
                target_slot: "production".into(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, AzureErrorKind::OperationFailed);
    assert!(err.message.contains("warm-up timed out"), "{}", err.message);
}

#[tokio::test]
async fn test_credentials_acquire_token_once() {
    let backend = FakeBackend::new()
        .with_json(
            200,
            json!({"access_token": "fresh", "token_type": "Bearer", "expires_in": 3600}),
        )
        .with_status(200, &[])
        .with_status(200, &[]);
    let arm = AzureClient::with_backend(config(), Arc::new(backend.clone())).with_credentials(
        AzureCredentials {
            client_id: "app".into(),
            client_secret: "secret".into(),
            tenant_id: "tenant".into(),
            subscription_id: "sub1".into(),
            authority_host: None,
        },
    );
    let c = WebAppsClient::new(arm);
    let site = AppServiceId::new("sub1", "rg1", "site1");

    c.stop(&site).await.unwrap();
    c.start(&site).await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(
        requests[0].url,
        "https://login.microsoftonline.com/tenant/oauth2/v2.0/token"
    );
    assert_eq!(requests[1].header_value("Authorization"), Some("Bearer fresh"));
    assert_eq!(requests[2].header_value("Authorization"), Some("Bearer fresh"));
    assert!(requests[2].url.contains("/sites/site1/start?"));
}

#[tokio::test]
async fn test_no_token_and_no_credentials() {
    let backend = FakeBackend::new();
    let c = WebAppsClient::new(AzureClient::with_backend(
        config(),
        Arc::new(backend.clone()),
    ));

    let err = c
        .get(&AppServiceId::new("sub1", "rg1", "site1"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AzureErrorKind::NotAuthenticated);
    assert!(backend.requests().is_empty());
}
