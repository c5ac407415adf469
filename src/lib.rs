//! Mailsift — hybrid productive/unproductive email classifier.
//!
//! A remote LLM classification arbitrated against a deterministic keyword
//! fallback, behind a small HTTP surface.

pub mod config;
pub mod engine;
pub mod error;
pub mod llm;
pub mod sanitize;
pub mod server;
