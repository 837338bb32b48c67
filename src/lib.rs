//! Particle Presentations Library
//!
//! This library serves a catalog of canned particle animation scenes over the
//! Model Context Protocol, so a chat client can ask for an animated widget by
//! prompt or by preset name.

// Domain modules
pub mod mcp;
pub mod particles;

// Infrastructure
pub mod config;
pub mod router;
pub mod server;
