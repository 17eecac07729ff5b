//! Frame codec
//!
//! `decode` is total over its input: an envelope becomes a [`Frame`], a bare
//! integer becomes a control close, anything else is a [`DecodeError`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::{Frame, OpCode, Payload};
use crate::events::GatewayEventType;

/// Result of decoding one inbound text message
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// A regular gateway frame
    Frame(Frame),
    /// A control close carrying the raw platform close code
    Close(i64),
}

/// Codec failure
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not JSON, or JSON that is neither an envelope nor a close code
    #[error("malformed frame: {0}")]
    Malformed(String),

    /// Envelope with an op code outside the known table
    #[error("unknown op code: {0}")]
    UnknownOpcode(u64),

    /// Envelope was valid but `d` did not match the expected shape
    #[error("invalid {kind:?} payload for op {op} (t={event_type:?}): {source}")]
    Payload {
        op: OpCode,
        event_type: Option<String>,
        seq: Option<u64>,
        kind: PayloadKind,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    /// Sequence number of the frame that failed, when the envelope itself parsed
    pub fn sequence(&self) -> Option<u64> {
        match self {
            Self::Payload { seq, .. } => *seq,
            _ => None,
        }
    }
}

/// Expected shape of `d` for a given `(op, t)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// Integer, string, or anything else kept raw
    Scalar,
    Hello,
    Ready,
    Identify,
    Resume,
    Guild,
    Message,
    Channel,
    Member,
    AudioAction,
    MessageAudit,
    MessageReaction,
    Raw,
}

impl PayloadKind {
    /// Look up the payload kind for a frame
    pub fn for_frame(op: OpCode, event_type: Option<&str>) -> Self {
        match op {
            OpCode::Hello => Self::Hello,
            OpCode::Identify => Self::Identify,
            OpCode::Resume => Self::Resume,
            OpCode::Dispatch => event_type
                .and_then(GatewayEventType::from_str)
                .map_or(Self::Raw, GatewayEventType::payload_kind),
            OpCode::Heartbeat
            | OpCode::HeartbeatAck
            | OpCode::Reconnect
            | OpCode::InvalidSession => Self::Scalar,
        }
    }
}

#[derive(Deserialize)]
struct RawFrame {
    op: u64,
    #[serde(default)]
    s: Option<u64>,
    #[serde(default)]
    t: Option<String>,
    #[serde(default)]
    d: Option<Value>,
}

/// Decode one inbound text or binary message
pub fn decode(bytes: &[u8]) -> Result<Decoded, DecodeError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    match value {
        Value::Number(n) => n
            .as_i64()
            // Integers past i64::MAX are still far above the internal-error range
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .map(Decoded::Close)
            .ok_or_else(|| DecodeError::Malformed(format!("non-integer number {n}"))),
        Value::Object(_) => decode_envelope(value).map(Decoded::Frame),
        other => Err(DecodeError::Malformed(format!(
            "expected envelope or close code, got {}",
            json_type(&other)
        ))),
    }
}

fn decode_envelope(value: Value) -> Result<Frame, DecodeError> {
    let raw: RawFrame =
        serde_json::from_value(value).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    let op = u8::try_from(raw.op)
        .ok()
        .and_then(OpCode::from_u8)
        .ok_or(DecodeError::UnknownOpcode(raw.op))?;

    let kind = PayloadKind::for_frame(op, raw.t.as_deref());
    let d = match raw.d {
        None | Some(Value::Null) => None,
        Some(d) => Some(decode_payload(kind, d).map_err(|source| DecodeError::Payload {
            op,
            event_type: raw.t.clone(),
            seq: raw.s,
            kind,
            source,
        })?),
    };

    Ok(Frame {
        op,
        s: raw.s,
        t: raw.t,
        d,
    })
}

fn decode_payload(kind: PayloadKind, d: Value) -> Result<Payload, serde_json::Error> {
    fn typed<T, F>(d: Value, wrap: F) -> Result<Payload, serde_json::Error>
    where
        T: DeserializeOwned,
        F: FnOnce(T) -> Payload,
    {
        serde_json::from_value(d).map(wrap)
    }

    match kind {
        PayloadKind::Scalar => Ok(match d {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Payload::Int(i),
                None => Payload::Raw(Value::Number(n)),
            },
            Value::String(s) => Payload::Str(s),
            other => Payload::Raw(other),
        }),
        PayloadKind::Hello => typed(d, Payload::Hello),
        PayloadKind::Ready => typed(d, Payload::Ready),
        PayloadKind::Identify => typed(d, Payload::Identify),
        PayloadKind::Resume => typed(d, Payload::Resume),
        PayloadKind::Guild => typed(d, Payload::Guild),
        PayloadKind::Message => typed(d, Payload::Message),
        PayloadKind::Channel => typed(d, Payload::Channel),
        PayloadKind::Member => typed(d, Payload::Member),
        PayloadKind::AudioAction => typed(d, Payload::AudioAction),
        PayloadKind::MessageAudit => typed(d, Payload::MessageAudit),
        PayloadKind::MessageReaction => typed(d, Payload::MessageReaction),
        PayloadKind::Raw => Ok(Payload::Raw(d)),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Encode an outbound frame as JSON text
pub fn encode(frame: &Frame) -> Result<String, serde_json::Error> {
    serde_json::to_string(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::HelloPayload;

    fn frame(raw: &str) -> Frame {
        match decode(raw.as_bytes()).unwrap() {
            Decoded::Frame(frame) => frame,
            Decoded::Close(code) => panic!("expected frame, got close {code}"),
        }
    }

    #[test]
    fn test_decode_hello() {
        let frame = frame(r#"{"op":10,"d":{"heartbeat_interval":41250}}"#);
        assert_eq!(frame.op, OpCode::Hello);
        assert_eq!(frame.d, Some(Payload::Hello(HelloPayload::with_interval(41250))));
    }

    #[test]
    fn test_decode_bare_integer_is_close() {
        assert_eq!(decode(b"4009").unwrap(), Decoded::Close(4009));
        assert_eq!(decode(b"4913").unwrap(), Decoded::Close(4913));
        assert_eq!(decode(b"70000").unwrap(), Decoded::Close(70_000));
        assert_eq!(decode(b"-1").unwrap(), Decoded::Close(-1));
        assert_eq!(decode(b"18446744073709551615").unwrap(), Decoded::Close(i64::MAX));
        assert!(matches!(decode(b"4009.5"), Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(decode(b"not json"), Err(DecodeError::Malformed(_))));
        assert!(matches!(decode(b"[1,2]"), Err(DecodeError::Malformed(_))));
        assert!(matches!(decode(b"\"hi\""), Err(DecodeError::Malformed(_))));
        assert!(matches!(decode(br#"{"d":1}"#), Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_decode_unknown_opcode() {
        assert!(matches!(decode(br#"{"op":3}"#), Err(DecodeError::UnknownOpcode(3))));
        assert!(matches!(decode(br#"{"op":4000}"#), Err(DecodeError::UnknownOpcode(4000))));
    }

    #[test]
    fn test_decode_ready_dispatch() {
        let frame = frame(
            r#"{"op":0,"s":1,"t":"READY","d":{"version":1,"session_id":"xyz","user":{"id":"42","username":"bot","bot":true},"shard":[0,1]}}"#,
        );
        assert_eq!(frame.s, Some(1));
        assert_eq!(frame.event_type(), Some("READY"));
        match frame.d {
            Some(Payload::Ready(ready)) => assert_eq!(ready.session_id, "xyz"),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_decode_at_message() {
        let frame = frame(
            r#"{"op":0,"s":5,"t":"AT_MESSAGE_CREATE","d":{"id":"m1","channel_id":"c1","guild_id":"g1","content":"<@!42> hi","author":{"id":"7","username":"alice"}}}"#,
        );
        assert!(matches!(frame.d, Some(Payload::Message(_))));
    }

    #[test]
    fn test_decode_unknown_event_is_raw() {
        let forum = frame(
            r#"{"op":0,"s":2,"t":"FORUM_THREAD_CREATE","d":{"thread_info":{}}}"#,
        );
        assert!(matches!(forum.d, Some(Payload::Raw(_))));

        let unknown = frame(r#"{"op":0,"s":3,"t":"SOMETHING_NEW","d":{"x":1}}"#);
        assert!(matches!(unknown.d, Some(Payload::Raw(_))));
    }

    #[test]
    fn test_decode_resumed_scalar() {
        let frame = frame(r#"{"op":0,"s":4,"t":"RESUMED","d":""}"#);
        assert_eq!(frame.d, Some(Payload::Str(String::new())));
    }

    #[test]
    fn test_decode_scalar_ops() {
        let ack = frame(r#"{"op":11}"#);
        assert_eq!(ack.op, OpCode::HeartbeatAck);
        assert!(ack.d.is_none());

        let invalid = frame(r#"{"op":9,"d":false}"#);
        assert_eq!(invalid.d, Some(Payload::Raw(Value::Bool(false))));

        let hb = frame(r#"{"op":1,"d":12}"#);
        assert_eq!(hb.d, Some(Payload::Int(12)));
    }

    #[test]
    fn test_payload_error_keeps_sequence() {
        let err = decode(br#"{"op":0,"s":8,"t":"GUILD_CREATE","d":{"id":5}}"#).unwrap_err();
        assert_eq!(err.sequence(), Some(8));
        assert!(matches!(err, DecodeError::Payload { kind: PayloadKind::Guild, .. }));
    }

    #[test]
    fn test_payload_kind_table() {
        let dispatch = |t| PayloadKind::for_frame(OpCode::Dispatch, Some(t));

        assert_eq!(PayloadKind::for_frame(OpCode::Hello, None), PayloadKind::Hello);
        assert_eq!(dispatch("READY"), PayloadKind::Ready);
        assert_eq!(dispatch("GUILD_MEMBER_ADD"), PayloadKind::Member);
        assert_eq!(dispatch("AUDIO_START"), PayloadKind::AudioAction);
        assert_eq!(dispatch("MESSAGE_AUDIT_PASS"), PayloadKind::MessageAudit);
        assert_eq!(PayloadKind::for_frame(OpCode::Dispatch, None), PayloadKind::Raw);
        assert_eq!(
            PayloadKind::for_frame(OpCode::InvalidSession, None),
            PayloadKind::Scalar
        );
    }

    #[test]
    fn test_encode_roundtrip_shape() {
        let text = encode(&Frame::heartbeat(3)).unwrap();
        assert_eq!(text, r#"{"op":1,"d":3}"#);
    }
}
