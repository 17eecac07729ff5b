//! Dispatched event

use guild_core::{
    AudioAction, Channel, Guild, MemberWithGuildId, Message, MessageAudit, MessageReaction,
};
use serde_json::Value;

use super::GatewayEventType;
use crate::protocol::{Frame, Payload, ReadyPayload};

/// A dispatch frame as delivered to handlers
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Raw `t` value, kept even for event types this crate does not know
    pub event_type: String,
    pub sequence: Option<u64>,
    pub payload: Option<Payload>,
}

impl Event {
    pub fn new(
        event_type: impl Into<String>,
        sequence: Option<u64>,
        payload: Option<Payload>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            sequence,
            payload,
        }
    }

    /// Build from a dispatch frame; `None` when the frame has no event type
    pub fn from_frame(frame: Frame) -> Option<Self> {
        let event_type = frame.t?;
        Some(Self::new(event_type, frame.s, frame.d))
    }

    /// Known event type, if any
    pub fn kind(&self) -> Option<GatewayEventType> {
        GatewayEventType::from_str(&self.event_type)
    }

    pub fn as_message(&self) -> Option<&Message> {
        match &self.payload {
            Some(Payload::Message(message)) => Some(message),
            _ => None,
        }
    }

    pub fn as_ready(&self) -> Option<&ReadyPayload> {
        match &self.payload {
            Some(Payload::Ready(ready)) => Some(ready),
            _ => None,
        }
    }

    pub fn as_guild(&self) -> Option<&Guild> {
        match &self.payload {
            Some(Payload::Guild(guild)) => Some(guild),
            _ => None,
        }
    }

    pub fn as_channel(&self) -> Option<&Channel> {
        match &self.payload {
            Some(Payload::Channel(channel)) => Some(channel),
            _ => None,
        }
    }

    pub fn as_member(&self) -> Option<&MemberWithGuildId> {
        match &self.payload {
            Some(Payload::Member(member)) => Some(member),
            _ => None,
        }
    }

    pub fn as_audio_action(&self) -> Option<&AudioAction> {
        match &self.payload {
            Some(Payload::AudioAction(action)) => Some(action),
            _ => None,
        }
    }

    pub fn as_message_audit(&self) -> Option<&MessageAudit> {
        match &self.payload {
            Some(Payload::MessageAudit(audit)) => Some(audit),
            _ => None,
        }
    }

    pub fn as_reaction(&self) -> Option<&MessageReaction> {
        match &self.payload {
            Some(Payload::MessageReaction(reaction)) => Some(reaction),
            _ => None,
        }
    }

    /// Untyped payload of events without a model
    pub fn as_raw(&self) -> Option<&Value> {
        match &self.payload {
            Some(Payload::Raw(value)) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{decode, Decoded};

    fn event(raw: &str) -> Event {
        match decode(raw.as_bytes()).unwrap() {
            Decoded::Frame(frame) => Event::from_frame(frame).unwrap(),
            Decoded::Close(_) => unreachable!(),
        }
    }

    #[test]
    fn test_message_accessor() {
        let event = event(
            r#"{"op":0,"s":3,"t":"DIRECT_MESSAGE_CREATE","d":{"id":"m","channel_id":"c","guild_id":"g","content":"hey","author":{"id":"7","username":"bob"}}}"#,
        );
        assert_eq!(event.kind(), Some(GatewayEventType::DirectMessageCreate));
        assert_eq!(event.sequence, Some(3));
        assert_eq!(event.as_message().map(Message::content), Some("hey"));
        assert!(event.as_guild().is_none());
    }

    #[test]
    fn test_unknown_event_keeps_name() {
        let event = event(r#"{"op":0,"s":1,"t":"NEW_THING","d":{"a":1}}"#);
        assert_eq!(event.event_type, "NEW_THING");
        assert_eq!(event.kind(), None);
        assert_eq!(event.as_raw().and_then(|v| v.get("a")), Some(&Value::from(1)));
    }

    #[test]
    fn test_from_frame_without_type() {
        let frame = Frame::heartbeat(1);
        assert!(Event::from_frame(frame).is_none());
    }
}
