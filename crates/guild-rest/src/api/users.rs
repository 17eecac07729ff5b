//! Current-user endpoints

use guild_core::{Guild, User};

use crate::client::{decode, RestClient};
use crate::error::RestResult;

impl RestClient {
    /// `GET /users/@me`
    pub async fn me(&self) -> RestResult<User> {
        let endpoint = "/users/@me";
        decode(endpoint, self.get(endpoint, &[]).await?)
    }

    /// `GET /users/@me/guilds`: guilds the bot has joined
    pub async fn my_guilds(&self) -> RestResult<Vec<Guild>> {
        let endpoint = "/users/@me/guilds";
        decode(endpoint, self.get(endpoint, &[]).await?)
    }
}
