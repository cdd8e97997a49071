//! `nextLink` pagination for ARM list operations.

use futures::stream::{self, Stream};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::client::{ensure_status, AzureClient};
use crate::error::AzureResult;
use crate::options::{ListOperationResponse, RequestOptions};

/// ARM paginated list wrapper.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmList<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    #[serde(default, alias = "@odata.nextLink")]
    pub next_link: Option<String>,
}

/// One page of a list operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub status: u16,
    pub items: Vec<T>,
    pub next_link: Option<String>,
}

enum Cursor {
    First(RequestOptions),
    Next(String),
    Done,
}

/// Lazily walks the pages of a list operation.
pub struct Pager<T> {
    client: AzureClient,
    api_version: String,
    cursor: Cursor,
    last_status: u16,
    _marker: std::marker::PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Pager<T> {
    pub fn new(client: AzureClient, api_version: &str, options: RequestOptions) -> Self {
        Self {
            client,
            api_version: api_version.to_string(),
            cursor: Cursor::First(options),
            last_status: 0,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.cursor, Cursor::Done)
    }

    /// Fetch the next page, or `None` once `nextLink` runs out.
    pub async fn next_page(&mut self) -> AzureResult<Option<Page<T>>> {
        let resp = match std::mem::replace(&mut self.cursor, Cursor::Done) {
            Cursor::Done => return Ok(None),
            Cursor::First(options) => {
                self.client.execute(&self.api_version, &options).await?
            }
            Cursor::Next(url) => {
                debug!("Azure following nextLink → {}", url);
                let resp = self.client.get_absolute(&url).await?;
                let next_options = RequestOptions::new(crate::http::HttpMethod::Get, url, &[200]);
                ensure_status(&next_options, resp)?
            }
        };

        let list: ArmList<T> = if resp.is_empty() {
            ArmList {
                value: Vec::new(),
                next_link: None,
            }
        } else {
            resp.json()?
        };
        let next_link = list.next_link.filter(|l| !l.is_empty());
        if let Some(link) = &next_link {
            self.cursor = Cursor::Next(link.clone());
        }
        self.last_status = resp.status;

        Ok(Some(Page {
            status: resp.status,
            items: list.value,
            next_link,
        }))
    }

    /// Drain every remaining page into one response.
    pub async fn collect_all(mut self) -> AzureResult<ListOperationResponse<T>> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page.items);
        }
        Ok(ListOperationResponse {
            status: self.last_status,
            items,
        })
    }

    /// Pages as a stream; iteration stops at the first error.
    pub fn into_stream(self) -> impl Stream<Item = AzureResult<Page<T>>> {
        stream::try_unfold(self, |mut pager| async move {
            Ok(pager.next_page().await?.map(|page| (page, pager)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ArmConfig, AzureToken};
    use crate::http::HttpMethod;
    use crate::testing::FakeBackend;
    use futures::TryStreamExt;
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    async fn client(backend: &FakeBackend) -> AzureClient {
        let c = AzureClient::with_backend(ArmConfig::default(), Arc::new(backend.clone()));
        c.set_token(AzureToken {
            access_token: "t".into(),
            token_type: "Bearer".into(),
            expires_at: None,
        })
        .await;
        c
    }

    fn list_options() -> RequestOptions {
        RequestOptions::new(HttpMethod::Get, "/subscriptions/s/providers/Microsoft.Web/sites", &[200])
    }

    #[test]
    fn arm_list_deserialize() {
        let l: ArmList<Item> =
            serde_json::from_str(r#"{"value":[{"name":"a"}],"nextLink":"https://x/2"}"#).unwrap();
        assert_eq!(l.value.len(), 1);
        assert_eq!(l.next_link.as_deref(), Some("https://x/2"));

        let odata: ArmList<Item> =
            serde_json::from_str(r#"{"value":[],"@odata.nextLink":"https://x/3"}"#).unwrap();
        assert_eq!(odata.next_link.as_deref(), Some("https://x/3"));

        let bare: ArmList<Item> = serde_json::from_str("{}").unwrap();
        assert!(bare.value.is_empty());
        assert!(bare.next_link.is_none());
    }

    #[tokio::test]
    async fn follows_next_link_to_the_end() {
        let backend = FakeBackend::new()
            .with_json(200, json!({"value": [{"name": "a"}, {"name": "b"}], "nextLink": "https://management.azure.com/page2?api-version=x"}))
            .with_json(200, json!({"value": [{"name": "c"}], "nextLink": ""}));
        let c = client(&backend).await;

        let all: ListOperationResponse<Item> = c.execute_paged("2023-12-01", list_options()).await.unwrap();
        let names: Vec<_> = all.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(all.status, 200);

        let sent = backend.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].url, "https://management.azure.com/page2?api-version=x");
    }

    #[tokio::test]
    async fn failing_page_is_an_error() {
        let backend = FakeBackend::new()
            .with_json(200, json!({"value": [{"name": "a"}], "nextLink": "https://x/next"}))
            .with_json(403, json!({"error": {"code": "AuthorizationFailed", "message": "no"}}));
        let c = client(&backend).await;
        let err = c
            .execute_paged::<Item>("2023-12-01", list_options())
            .await
            .unwrap_err();
        assert_eq!(err.status_code, Some(403));
    }

    #[tokio::test]
    async fn stream_yields_each_page() {
        let backend = FakeBackend::new()
            .with_json(200, json!({"value": [{"name": "a"}], "nextLink": "https://x/next"}))
            .with_json(200, json!({"value": [{"name": "b"}]}));
        let c = client(&backend).await;
        let pages: Vec<Page<Item>> = c
            .pager("2023-12-01", list_options())
            .into_stream()
            .try_collect()
            .await
            .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].items, vec![Item { name: "b".into() }]);
    }
}
