//! Particle Presentation Domain Module
//!
//! This module contains the particle scene business logic, including:
//! - Domain models (SceneDescriptor, ParticleConfig, Mood, tool inputs)
//! - The preset catalog
//! - Business logic helpers (prompt matching, mood adjustment, formatting)
//! - Widget HTML rendering
//! - Application state management
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod presets;
pub mod state;
pub mod widget;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
