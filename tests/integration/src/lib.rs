//! Integration test utilities for the guild bot
//!
//! This crate provides an in-process fake platform (REST + WebSocket
//! gateway) that a real [`guild_gateway::GuildBot`] can connect to.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
