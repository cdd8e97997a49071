//! # azrm-webapps
//!
//! Azure App Service – web apps, function apps and their deployment slots
//! (`Microsoft.Web/sites`, API version 2023-12-01).
//!
//! ## Modules
//!
//! - **ids** – typed resource IDs for sites, slots and their children
//! - **constants** – open string enums of the API
//! - **models** – request and response bodies
//! - **options** – optional query parameters of individual operations
//! - **predicates** – client-side filters for list results
//! - **operations** – the [`WebAppsClient`] methods, one file per area
//!
//! Every operation exists in a site form taking a site-level ID and a
//! `_slot` form taking the matching slot ID. Paged operations also come
//! as `*_complete` (all items) and `*_complete_matching_predicate`.
//! Long-running operations return a [`LongRunningResponse`] to drive, and
//! have a `*_then_poll` form that waits for completion.

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use azrm_core::{
    AzureClient, AzureResult, HttpResponse, ListOperationResponse, LongRunningResponse,
    OperationResponse, RequestOptions,
};

/// Generates `$complete` and `$matching` on top of the paged `$list`
/// operation taking `&$id`.
macro_rules! complete_variants {
    ($list:ident, $complete:ident, $matching:ident, $id:ty, $item:ty) => {
        #[doc = concat!("All items of [`Self::", stringify!($list), "`].")]
        pub async fn $complete(&self, id: &$id) -> azrm_core::AzureResult<Vec<$item>> {
            self.$matching(id, crate::predicates::ResourcePredicate::default())
                .await
        }

        #[doc = concat!("Items of [`Self::", stringify!($list), "`] accepted by `predicate`.")]
        pub async fn $matching(
            &self,
            id: &$id,
            predicate: crate::predicates::ResourcePredicate,
        ) -> azrm_core::AzureResult<Vec<$item>> {
            let resp = self.$list(id).await?;
            Ok(resp
                .items
                .into_iter()
                .filter(|item| predicate.matches(item))
                .collect())
        }
    };
}

/// Generates `$then_poll`, which starts the long-running `$op` and waits
/// for it to finish.
macro_rules! then_poll {
    ($op:ident, $then_poll:ident ( $( $arg:ident : $ty:ty ),* )) => {
        #[doc = concat!("[`Self::", stringify!($op), "`], polled until done.")]
        pub async fn $then_poll(&self, $( $arg: $ty ),*) -> azrm_core::AzureResult<()> {
            let mut result = self.$op($( $arg ),*).await?;
            result.poll_until_done().await?;
            Ok(())
        }
    };
}

pub mod constants;
pub mod ids;
pub mod models;
pub mod operations;
pub mod options;
pub mod predicates;

pub use options::{
    DeleteOperationOptions, ListByResourceGroupOperationOptions, MigrateStorageOperationOptions,
    RestartOperationOptions, StartWebSiteNetworkTraceOperationOperationOptions,
};
pub use predicates::ResourcePredicate;

pub const API_VERSION: &str = "2023-12-01";

const NO_BODY: Option<&()> = None;

/// Client for the `Microsoft.Web/sites` operations.
#[derive(Clone)]
pub struct WebAppsClient {
    client: AzureClient,
}

impl WebAppsClient {
    pub fn new(client: AzureClient) -> Self {
        Self { client }
    }

    /// The underlying ARM client, e.g. for page-by-page iteration.
    pub fn client(&self) -> &AzureClient {
        &self.client
    }

    async fn raw<B: Serialize + ?Sized>(
        &self,
        operation: &'static str,
        options: &RequestOptions,
        body: Option<&B>,
    ) -> AzureResult<HttpResponse> {
        debug!("{operation} → {} {}", options.method, options.path);
        match body {
            Some(body) => {
                self.client
                    .execute_with_body(API_VERSION, options, body)
                    .await
            }
            None => self.client.execute(API_VERSION, options).await,
        }
    }

    pub(crate) async fn execute<B, T>(
        &self,
        operation: &'static str,
        options: RequestOptions,
        body: Option<&B>,
    ) -> AzureResult<OperationResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.raw(operation, &options, body).await?;
        OperationResponse::from_http(resp)
    }

    pub(crate) async fn execute_no_model<B: Serialize + ?Sized>(
        &self,
        operation: &'static str,
        options: RequestOptions,
        body: Option<&B>,
    ) -> AzureResult<OperationResponse<()>> {
        let resp = self.raw(operation, &options, body).await?;
        Ok(OperationResponse::without_model(resp))
    }

    pub(crate) async fn execute_paged<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        options: RequestOptions,
    ) -> AzureResult<ListOperationResponse<T>> {
        debug!("{operation} → {} {} (paged)", options.method, options.path);
        self.client.execute_paged(API_VERSION, options).await
    }

    pub(crate) async fn execute_lro<B, T>(
        &self,
        operation: &'static str,
        options: RequestOptions,
        body: Option<&B>,
    ) -> AzureResult<LongRunningResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.raw(operation, &options, body).await?;
        let url = self.client.url_for(&options.path, API_VERSION, &options.query)?;
        LongRunningResponse::with_model(&self.client, options.method, url, resp)
    }

    pub(crate) async fn execute_lro_no_model<B: Serialize + ?Sized>(
        &self,
        operation: &'static str,
        options: RequestOptions,
        body: Option<&B>,
    ) -> AzureResult<LongRunningResponse<()>> {
        let resp = self.raw(operation, &options, body).await?;
        let url = self.client.url_for(&options.path, API_VERSION, &options.query)?;
        Ok(LongRunningResponse::without_model(
            &self.client,
            options.method,
            url,
            resp,
        ))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use azrm_core::testing::FakeBackend;
    use azrm_core::{ArmConfig, AzureClient, AzureToken};

    pub const SITE: &str =
        "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Web/sites/site1";

    /// A client over `backend` with a cached token and no waiting.
    pub async fn client(backend: &FakeBackend) -> super::WebAppsClient {
        let config = ArmConfig {
            endpoint: "https://management.azure.com".into(),
            retry_base_delay_ms: 1,
            poll_interval_secs: 0,
            ..Default::default()
        };
        let arm = AzureClient::with_backend(config, Arc::new(backend.clone()));
        arm.set_token(AzureToken {
            access_token: "tok".into(),
            token_type: "Bearer".into(),
            expires_at: None,
        })
        .await;
        super::WebAppsClient::new(arm)
    }

    /// Path and query of the last request, without the endpoint.
    pub fn last_path(backend: &FakeBackend) -> String {
        backend
            .last_request()
            .map(|r| r.url.trim_start_matches("https://management.azure.com").to_string())
            .unwrap_or_default()
    }
}
