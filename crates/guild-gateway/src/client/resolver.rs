//! Gateway URL resolution

use async_trait::async_trait;
use guild_rest::{RestClient, RestResult};

/// Finds the WebSocket URL to connect to
///
/// Called before every connection attempt, so a reconnect always follows the
/// platform's current gateway.
#[async_trait]
pub trait GatewayResolver: Send + Sync + 'static {
    async fn resolve(&self) -> RestResult<String>;
}

#[async_trait]
impl GatewayResolver for RestClient {
    async fn resolve(&self) -> RestResult<String> {
        self.gateway_url().await
    }
}

/// Always resolves to the same URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticResolver(String);

impl StaticResolver {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}

#[async_trait]
impl GatewayResolver for StaticResolver {
    async fn resolve(&self) -> RestResult<String> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_rest_client_resolves_via_gateway_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gateway"))
            .and(header("Authorization", "Bot 1.t"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"url": "wss://gw.example/ws"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = RestClient::new(server.uri(), "Bot 1.t", Duration::from_secs(5)).unwrap();
        assert_eq!(client.resolve().await.unwrap(), "wss://gw.example/ws");
    }

    #[tokio::test]
    async fn test_resolve_failure_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gateway"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let client = RestClient::new(server.uri(), "Bot 1.t", Duration::from_secs(5)).unwrap();
        let err = client.resolve().await.unwrap_err();
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_static_resolver() {
        let resolver = StaticResolver::new("ws://127.0.0.1:9/ws");
        assert_eq!(resolver.resolve().await.unwrap(), "ws://127.0.0.1:9/ws");
    }
}
