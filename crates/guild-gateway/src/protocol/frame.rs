//! Gateway frame envelope
//!
//! Every message on the socket is `{op, d?, s?, t?}`.

use guild_core::{
    AudioAction, Channel, Guild, MemberWithGuildId, Message, MessageAudit, MessageReaction,
};
use serde::Serialize;
use serde_json::Value;

use super::{HelloPayload, IdentifyPayload, OpCode, ReadyPayload, ResumePayload};

/// A decoded or outbound gateway frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Operation code
    pub op: OpCode,

    /// Sequence number (dispatch frames only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<u64>,

    /// Event type name (dispatch frames only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,

    /// Event data payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<Payload>,
}

/// Frame payload
///
/// The variant is chosen from the frame's `(op, t)` pair by the codec; the
/// union is never decoded by trial.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Int(i64),
    Str(String),
    Hello(HelloPayload),
    Ready(ReadyPayload),
    Identify(IdentifyPayload),
    Resume(ResumePayload),
    Guild(Guild),
    Message(Message),
    Channel(Channel),
    Member(MemberWithGuildId),
    AudioAction(AudioAction),
    MessageAudit(MessageAudit),
    MessageReaction(MessageReaction),
    /// Event types without a typed model
    Raw(Value),
}

impl Payload {
    /// Variant name, for logging
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Str(_) => "str",
            Self::Hello(_) => "hello",
            Self::Ready(_) => "ready",
            Self::Identify(_) => "identify",
            Self::Resume(_) => "resume",
            Self::Guild(_) => "guild",
            Self::Message(_) => "message",
            Self::Channel(_) => "channel",
            Self::Member(_) => "member",
            Self::AudioAction(_) => "audio_action",
            Self::MessageAudit(_) => "message_audit",
            Self::MessageReaction(_) => "message_reaction",
            Self::Raw(_) => "raw",
        }
    }
}

impl Frame {
    /// Create a frame with no sequence or event type
    #[must_use]
    pub fn new(op: OpCode, d: Option<Payload>) -> Self {
        Self { op, s: None, t: None, d }
    }

    /// Create a Heartbeat frame (op=1) carrying the last seen sequence
    #[must_use]
    pub fn heartbeat(last_sequence: u64) -> Self {
        let d = i64::try_from(last_sequence)
            .map_or(Payload::Raw(Value::from(last_sequence)), Payload::Int);
        Self::new(OpCode::Heartbeat, Some(d))
    }

    /// Create an Identify frame (op=2)
    #[must_use]
    pub fn identify(payload: IdentifyPayload) -> Self {
        Self::new(OpCode::Identify, Some(Payload::Identify(payload)))
    }

    /// Create a Resume frame (op=6)
    #[must_use]
    pub fn resume(payload: ResumePayload) -> Self {
        Self::new(OpCode::Resume, Some(Payload::Resume(payload)))
    }

    /// Create a Dispatch frame (op=0)
    #[must_use]
    pub fn dispatch(event_type: impl Into<String>, sequence: u64, d: Payload) -> Self {
        Self {
            op: OpCode::Dispatch,
            s: Some(sequence),
            t: Some(event_type.into()),
            d: Some(d),
        }
    }

    /// Sequence carried in a heartbeat `d`, if any
    pub fn heartbeat_seq(&self) -> Option<u64> {
        if self.op != OpCode::Heartbeat {
            return None;
        }
        match &self.d {
            Some(Payload::Int(n)) => u64::try_from(*n).ok(),
            Some(Payload::Raw(v)) => v.as_u64(),
            _ => None,
        }
    }

    /// Event type name, if present
    pub fn event_type(&self) -> Option<&str> {
        self.t.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guild_core::Intents;

    #[test]
    fn test_heartbeat_frame_shape() {
        let json = serde_json::to_value(Frame::heartbeat(42)).unwrap();
        assert_eq!(json, serde_json::json!({"op": 1, "d": 42}));
    }

    #[test]
    fn test_outbound_frames_omit_s_and_t() {
        let frame = Frame::identify(IdentifyPayload::new("Bot 1.t", Intents::GUILDS, [0, 1]));
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["op"], 2);
        assert!(json.get("s").is_none());
        assert!(json.get("t").is_none());
        assert_eq!(json["d"]["intents"], 1);
    }

    #[test]
    fn test_resume_frame_shape() {
        let frame = Frame::resume(ResumePayload {
            token: "Bot 1.t".to_string(),
            session_id: "abc".to_string(),
            seq: 7,
        });
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"op": 6, "d": {"token": "Bot 1.t", "session_id": "abc", "seq": 7}})
        );
    }

    #[test]
    fn test_heartbeat_seq() {
        assert_eq!(Frame::heartbeat(9).heartbeat_seq(), Some(9));
        assert_eq!(Frame::new(OpCode::Heartbeat, None).heartbeat_seq(), None);
        assert_eq!(Frame::new(OpCode::HeartbeatAck, None).heartbeat_seq(), None);
    }
}
