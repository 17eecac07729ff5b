//! HTTP plumbing shared by every endpoint family
//!
//! `get`/`post`/`patch` return the parsed JSON body, or `None` when the body
//! is empty or not JSON, and fail on non-2xx statuses. `delete`/`put` report
//! whether the platform answered `204 No Content` and never fail on status.

use std::sync::Arc;

use guild_common::BotConfig;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::{RestError, RestResult};

/// Client for the platform REST API
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    authorization: Arc<str>,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl RestClient {
    /// Create a client against `base_url` sending `authorization` verbatim
    pub fn new(
        base_url: impl Into<String>,
        authorization: impl Into<String>,
        timeout: Duration,
    ) -> RestResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url: base_url.into(),
            authorization: authorization.into().into(),
        })
    }

    /// Create a client from bot configuration
    pub fn from_config(config: &BotConfig) -> RestResult<Self> {
        Self::new(&config.api_base_url, config.bot_token(), config.rest_timeout)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `Bot <app_id>.<token>`, also used as the gateway token
    #[must_use]
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    fn request(&self, method: Method, endpoint: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{endpoint}", self.base_url))
            .header(AUTHORIZATION, self.authorization.as_ref())
            .header(CONTENT_TYPE, "application/json")
    }

    async fn send_json(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> RestResult<Option<Value>> {
        let mut request = self.request(method.clone(), endpoint);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(method = %method, endpoint, status = status.as_u16(), body = %text, "REST response");

        if !status.is_success() {
            return Err(RestError::Status {
                method: method.to_string(),
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text).ok())
    }

    async fn send_for_status(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> RestResult<bool> {
        let mut request = self.request(method.clone(), endpoint);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let status = request.send().await?.status();
        debug!(method = %method, endpoint, status = status.as_u16(), "REST response");

        Ok(status == StatusCode::NO_CONTENT)
    }

    pub(crate) async fn get(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> RestResult<Option<Value>> {
        self.send_json(Method::GET, endpoint, query, None).await
    }

    pub(crate) async fn post<B>(&self, endpoint: &str, body: &B) -> RestResult<Option<Value>>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.send_json(Method::POST, endpoint, &[], Some(body)).await
    }

    pub(crate) async fn patch<B>(&self, endpoint: &str, body: &B) -> RestResult<Option<Value>>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.send_json(Method::PATCH, endpoint, &[], Some(body)).await
    }

    pub(crate) async fn delete(&self, endpoint: &str, body: Option<Value>) -> RestResult<bool> {
        self.send_for_status(Method::DELETE, endpoint, body).await
    }

    pub(crate) async fn put(&self, endpoint: &str, body: Option<Value>) -> RestResult<bool> {
        self.send_for_status(Method::PUT, endpoint, body).await
    }
}

/// Decode a typed body, failing on the empty sentinel
pub(crate) fn decode<T>(endpoint: &str, value: Option<Value>) -> RestResult<T>
where
    T: DeserializeOwned,
{
    let value = value.ok_or_else(|| RestError::EmptyBody {
        endpoint: endpoint.to_string(),
    })?;
    serde_json::from_value(value).map_err(|source| RestError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}
