//! Audio channel endpoints

use guild_core::AudioControl;

use crate::client::RestClient;
use crate::error::RestResult;

impl RestClient {
    /// `POST /channels/{channel_id}/audio`: control playback in an audio channel
    pub async fn control_audio(&self, channel_id: &str, control: &AudioControl) -> RestResult<()> {
        self.post(&format!("/channels/{channel_id}/audio"), control).await?;
        Ok(())
    }
}
