//! HTTP transport layer.
//!
//! Provides the external API routing, including the `/calculate` endpoint
//! and the health probe.

pub mod handlers;
