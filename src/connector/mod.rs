//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat-completion providers (OpenAI-compatible, Anthropic, mock)
//! - Remote client for a running verification server
//! - HTTP server exposing the verification endpoint and the UI
//! - CLI composition root and controllers

pub mod adapter;
pub mod api;
pub mod http;

pub use adapter::*;
