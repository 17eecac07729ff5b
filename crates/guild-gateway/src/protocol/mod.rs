//! Gateway protocol definitions
//!
//! Op codes, close codes, payload shapes, the frame envelope and its codec.

mod close_codes;
mod codec;
mod frame;
mod opcodes;
mod payloads;

pub use close_codes::{CloseCode, INTERNAL_ERROR_MIN};
pub use codec::{decode, encode, DecodeError, Decoded, PayloadKind};
pub use frame::{Frame, Payload};
pub use opcodes::OpCode;
pub use payloads::{HelloPayload, IdentifyPayload, IdentifyProperties, ReadyPayload, ResumePayload};
