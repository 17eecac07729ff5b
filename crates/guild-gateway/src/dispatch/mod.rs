//! Event dispatch
//!
//! Routes dispatched events to user handlers without blocking the frame loop.

mod registry;

pub use registry::{EventHandler, EventRegistry};
