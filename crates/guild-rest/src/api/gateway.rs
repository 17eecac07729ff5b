//! Gateway discovery

use guild_core::{GatewayUrl, Shards};

use crate::client::{decode, RestClient};
use crate::error::RestResult;

impl RestClient {
    /// `GET /gateway`: WebSocket URL to connect to
    pub async fn gateway_url(&self) -> RestResult<String> {
        let endpoint = "/gateway";
        let gateway: GatewayUrl = decode(endpoint, self.get(endpoint, &[]).await?)?;
        Ok(gateway.url)
    }

    /// `GET /gateway/bot`: WebSocket URL with recommended shard count
    pub async fn gateway_bot(&self) -> RestResult<Shards> {
        let endpoint = "/gateway/bot";
        decode(endpoint, self.get(endpoint, &[]).await?)
    }
}
