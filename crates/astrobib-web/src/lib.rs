//! astrobib-web — HTTP surface for the classification and insight pipeline.
//!
//! The presentation layer (charts, tabs, styling) lives elsewhere; this
//! crate exposes the aggregate, filter, import, and query operations as
//! JSON endpoints and owns process configuration and startup.

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
