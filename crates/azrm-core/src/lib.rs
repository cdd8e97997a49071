//! # azrm-core
//!
//! Shared runtime for Azure Resource Manager clients.
//!
//! ## Modules
//!
//! - **config** – endpoint, retry and polling settings; credentials and tokens
//! - **auth** – OAuth2 client-credentials token acquisition
//! - **http** – transport abstraction with a reqwest backend
//! - **client** – authenticated request execution with retries
//! - **options** – per-operation request description and typed responses
//! - **pager** – `nextLink` pagination
//! - **poller** – long-running operation polling
//! - **error** – error type shared by every operation

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod options;
pub mod pager;
pub mod poller;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::AzureClient;
pub use config::{ArmConfig, AzureCredentials, AzureToken};
pub use error::{AzureError, AzureErrorKind, AzureResult};
pub use http::{HttpBackend, HttpMethod, HttpRequest, HttpResponse, ReqwestBackend};
pub use options::{ListOperationResponse, OperationOptions, OperationResponse, RequestOptions};
pub use pager::{ArmList, Page, Pager};
pub use poller::{LongRunningResponse, Poller, PollingStatus};
