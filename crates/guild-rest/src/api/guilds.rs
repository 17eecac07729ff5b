//! Guild endpoints

use guild_core::Guild;

use crate::client::{decode, RestClient};
use crate::error::RestResult;

impl RestClient {
    /// `GET /guilds/{guild_id}`
    pub async fn guild(&self, guild_id: &str) -> RestResult<Guild> {
        let endpoint = format!("/guilds/{guild_id}");
        decode(&endpoint, self.get(&endpoint, &[]).await?)
    }
}
