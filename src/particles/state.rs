//! Particle Presentation State Management
//!
//! This module holds the process-wide application state: the immutable preset
//! catalog, the transport session registry and the widget asset location.

use super::presets::Catalog;
use super::widget::BUILTIN_WIDGET_HTML;
use crate::config::ServerConfig;
use crate::mcp::session::SessionRegistry;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// File name of the widget template inside the assets directory
pub const WIDGET_FILE_NAME: &str = "particles.html";

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state. Only the session registry is ever written.
pub struct AppState {
    /// Preset catalog, built once at startup
    pub catalog: Catalog,

    /// Known transport sessions
    pub sessions: SessionRegistry,

    /// Path to the directory containing HTML assets.
    pub assets_dir: PathBuf,

    /// Whether tool results also embed the rendered widget HTML
    pub inline_widget: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates an AppState from the default configuration
    pub fn new() -> Self {
        Self::from_config(&ServerConfig::default())
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        let assets_dir = match &config.assets_dir {
            Some(dir) => dir.clone(),
            None => {
                let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                Self::locate_assets_directory(&current_dir)
            }
        };

        tracing::info!("Using assets directory: {}", assets_dir.display());

        Self {
            catalog: Catalog::new(),
            sessions: SessionRegistry::new(config.max_sessions),
            assets_dir,
            inline_widget: config.inline_widget,
        }
    }

    /// Attempts to locate the assets directory using a multi-step strategy
    fn locate_assets_directory(current_dir: &Path) -> PathBuf {
        // 1. ./assets
        // 2. ../assets (if running from a subdir)
        // 3. Fallback to "assets" relative path

        if current_dir.join("assets").exists() {
            return current_dir.join("assets");
        }

        if let Some(parent) = current_dir.parent() {
            if parent.join("assets").exists() {
                return parent.join("assets");
            }
        }

        PathBuf::from("assets")
    }

    /// Reads the widget template from disk, falling back to the built-in copy
    pub async fn load_widget_html(&self) -> String {
        let primary = self.assets_dir.join(WIDGET_FILE_NAME);
        if primary.exists() {
            match tokio::fs::read_to_string(&primary).await {
                Ok(html) => return html,
                Err(e) => tracing::warn!("Failed to read {}: {}", primary.display(), e),
            }
        }

        if let Some(fallback) = self.find_fallback_html_file().await {
            match tokio::fs::read_to_string(&fallback).await {
                Ok(html) => return html,
                Err(e) => tracing::warn!("Failed to read {}: {}", fallback.display(), e),
            }
        }

        tracing::debug!("Serving built-in widget template");
        BUILTIN_WIDGET_HTML.to_string()
    }

    /// Finds a versioned build of the widget (e.g. `particles-1a2b.html`)
    async fn find_fallback_html_file(&self) -> Option<PathBuf> {
        let mut entries = tokio::fs::read_dir(&self.assets_dir).await.ok()?;

        let mut fallbacks = Vec::new();
        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with("particles-") && name.ends_with(".html") {
                    fallbacks.push(path);
                }
            }
        }

        // The lexicographically last build is assumed to be the newest
        fallbacks.sort();
        fallbacks.pop()
    }
}
