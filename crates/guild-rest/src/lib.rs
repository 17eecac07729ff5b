//! # guild-rest
//!
//! Typed client for the platform's REST API.
//!
//! Every endpoint family lives in its own module under [`api`] as an
//! `impl RestClient` block; request bodies that need validation have
//! dedicated builder types.

pub mod api;
mod client;
mod error;

pub use api::{CreateChannel, Mute, PermissionChange, SendMessage, UpdateChannel};
pub use client::RestClient;
pub use error::{RestError, RestResult};
