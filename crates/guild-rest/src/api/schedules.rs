//! Schedule endpoints

use chrono::{DateTime, Utc};
use guild_core::{ModelError, Schedule};
use serde_json::json;

use crate::client::{decode, RestClient};
use crate::error::RestResult;

impl RestClient {
    /// `GET /guilds/{guild_id}/schedules?since`
    ///
    /// Without `since`, the platform returns schedules starting today.
    pub async fn schedules(
        &self,
        guild_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> RestResult<Vec<Schedule>> {
        let endpoint = format!("/guilds/{guild_id}/schedules");
        let query: Vec<(&str, String)> = since
            .map(|t| ("since", t.timestamp_millis().to_string()))
            .into_iter()
            .collect();
        // No schedules comes back as an empty body
        match self.get(&endpoint, &query).await? {
            None => Ok(Vec::new()),
            value => decode(&endpoint, value),
        }
    }

    /// `GET /channels/{channel_id}/schedules/{schedule_id}`
    pub async fn schedule(&self, channel_id: &str, schedule_id: &str) -> RestResult<Schedule> {
        let endpoint = format!("/channels/{channel_id}/schedules/{schedule_id}");
        decode(&endpoint, self.get(&endpoint, &[]).await?)
    }

    /// `POST /channels/{channel_id}/schedules`
    pub async fn create_schedule(
        &self,
        channel_id: &str,
        schedule: &Schedule,
    ) -> RestResult<Schedule> {
        if !schedule.is_valid_window() {
            return Err(ModelError::InvalidScheduleWindow.into());
        }
        let endpoint = format!("/channels/{channel_id}/schedules");
        let body = json!({ "schedule": schedule });
        decode(&endpoint, self.post(&endpoint, &body).await?)
    }

    /// `PATCH /channels/{channel_id}/schedules/{schedule_id}`
    pub async fn update_schedule(
        &self,
        channel_id: &str,
        schedule_id: &str,
        schedule: &Schedule,
    ) -> RestResult<Schedule> {
        if !schedule.is_valid_window() {
            return Err(ModelError::InvalidScheduleWindow.into());
        }
        let endpoint = format!("/channels/{channel_id}/schedules/{schedule_id}");
        let body = json!({ "schedule": schedule });
        decode(&endpoint, self.patch(&endpoint, &body).await?)
    }

    /// `DELETE /channels/{channel_id}/schedules/{schedule_id}`
    pub async fn delete_schedule(&self, channel_id: &str, schedule_id: &str) -> RestResult<bool> {
        self.delete(&format!("/channels/{channel_id}/schedules/{schedule_id}"), None)
            .await
    }
}
