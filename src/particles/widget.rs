//! Widget HTML Rendering
//!
//! The widget is a single self-contained HTML document. Served as-is it reads
//! the scene from the host's structured tool output; rendered inline it
//! carries the scene JSON in a `<script type="application/json">` element.

use super::models::SceneDescriptor;
use thiserror::Error;

/// The widget template compiled into the binary.
pub const BUILTIN_WIDGET_HTML: &str = include_str!("../../assets/particles.html");

/// Marker in the template replaced by the inlined scene.
const CONFIG_PLACEHOLDER: &str = "<!-- particle-config -->";

/// `id` attribute of the script element holding the inlined scene.
const CONFIG_ELEMENT_ID: &str = "particle-config";

/// Errors raised while reading a scene back out of rendered widget HTML.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("widget html has no embedded particle config")]
    MissingConfig,

    #[error("embedded particle config is not terminated")]
    Unterminated,

    #[error("embedded particle config is invalid: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Serializes `scene` so it can sit inside a `<script>` element.
///
/// `<`, `>` and `&` only ever occur inside JSON strings, so replacing them
/// with `\u` escapes keeps the JSON equivalent while making `</script>`
/// impossible inside the payload.
fn script_safe_json(scene: &SceneDescriptor) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(scene)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

/// Renders the built-in widget with `scene` inlined.
pub fn render_widget_html(scene: &SceneDescriptor) -> Result<String, WidgetError> {
    let script = format!(
        "<script type=\"application/json\" id=\"{}\">{}</script>",
        CONFIG_ELEMENT_ID,
        script_safe_json(scene)?
    );
    Ok(BUILTIN_WIDGET_HTML.replacen(CONFIG_PLACEHOLDER, &script, 1))
}

/// Parses the scene inlined by [`render_widget_html`] back out of `html`.
pub fn extract_embedded_scene(html: &str) -> Result<SceneDescriptor, WidgetError> {
    let marker = format!("id=\"{}\">", CONFIG_ELEMENT_ID);
    let start = html.find(&marker).ok_or(WidgetError::MissingConfig)? + marker.len();
    let len = html[start..]
        .find("</script>")
        .ok_or(WidgetError::Unterminated)?;
    Ok(serde_json::from_str(&html[start..start + len])?)
}
