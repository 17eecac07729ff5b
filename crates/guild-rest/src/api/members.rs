//! Guild member endpoints

use guild_core::Member;

use crate::client::{decode, RestClient};
use crate::error::RestResult;

impl RestClient {
    /// `GET /guilds/{guild_id}/members?after&limit`
    ///
    /// Pages by user id; pass `"0"` as `after` for the first page.
    pub async fn members(
        &self,
        guild_id: &str,
        after: &str,
        limit: u32,
    ) -> RestResult<Vec<Member>> {
        let endpoint = format!("/guilds/{guild_id}/members");
        let query = [("after", after.to_string()), ("limit", limit.to_string())];
        decode(&endpoint, self.get(&endpoint, &query).await?)
    }

    /// `GET /guilds/{guild_id}/members/{user_id}`
    pub async fn member(&self, guild_id: &str, user_id: &str) -> RestResult<Member> {
        let endpoint = format!("/guilds/{guild_id}/members/{user_id}");
        decode(&endpoint, self.get(&endpoint, &[]).await?)
    }

    /// `DELETE /guilds/{guild_id}/members/{user_id}`: kick a member
    pub async fn delete_member(&self, guild_id: &str, user_id: &str) -> RestResult<bool> {
        self.delete(&format!("/guilds/{guild_id}/members/{user_id}"), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::client_for;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_members_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/guilds/g1/members"))
            .and(query_param("after", "0"))
            .and(query_param("limit", "400"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "user": {"id": "1", "username": "a"},
                    "roles": ["1"],
                    "joined_at": "2021-01-01T00:00:00+08:00"
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let members = client.members("g1", "0", 400).await.unwrap();
        assert_eq!(members.len(), 1);
        assert!(members[0].has_role("1"));
    }
}
