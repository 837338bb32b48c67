//! Particle Scene Business Logic Helpers
//!
//! Prompt matching, mood adjustment and formatting. Everything here is pure:
//! inputs are borrowed or consumed and a fresh descriptor is returned.

use super::models::{Mood, ParticleColor, SceneDescriptor};
use super::presets::{custom_scene, Catalog, MAX_PARTICLES};

/// Keyword rules for the prompt matcher, tried top to bottom.
///
/// The first rule with any keyword contained in the lower-cased prompt wins,
/// so a keyword shared with a later rule (e.g. "wave" in an ocean prompt
/// after "sea") never reaches that later rule. Keywords are plain substrings.
pub const PROMPT_RULES: &[(&[&str], &str)] = &[
    (&["star", "night sky"], "starryNight"),
    (&["ocean", "sea"], "ocean"),
    (&["firefl", "glow"], "fireflies"),
    (&["cherry", "sakura", "blossom", "petal"], "sakura"),
    (&["snow"], "snow"),
    (&["aurora", "northern light"], "aurora"),
    (&["rain"], "rain"),
    (&["bubble"], "bubbles"),
    (&["galaxy", "space", "cosmos"], "galaxy"),
    (&["spiral"], "spiral"),
    (&["ring", "halo"], "ring"),
    (&["heart"], "heart"),
    (&["wave"], "wave"),
    (&["mandala", "rose", "flower"], "mandala"),
    (&["zen", "sand", "garden"], "zen"),
];

/// Returns the catalog key of the first rule matching `prompt`, if any.
pub fn match_preset_key(prompt: &str) -> Option<&'static str> {
    let prompt = prompt.to_lowercase();
    PROMPT_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| prompt.contains(k)))
        .map(|(_, key)| *key)
}

/// Resolves a free-form prompt to a scene.
///
/// Falls back to the "Custom Scene" descriptor when no rule matches.
pub fn match_prompt(catalog: &Catalog, prompt: &str) -> SceneDescriptor {
    match_preset_key(prompt)
        .and_then(|key| catalog.lookup(key))
        .unwrap_or_else(custom_scene)
}

/// Applies a mood to a scene and returns the adjusted copy.
///
/// `None` means the caller passed a mood we do not recognize; the scene is
/// returned untouched in that case.
pub fn adjust_mood(mut scene: SceneDescriptor, mood: Option<Mood>) -> SceneDescriptor {
    let particles = &mut scene.particles;
    match mood {
        Some(Mood::Energetic) => {
            particles.speed *= 2.0;
            particles.count = (particles.count * 3 / 2).min(MAX_PARTICLES);
        }
        Some(Mood::Calm) | Some(Mood::Peaceful) => {
            particles.speed *= 0.7;
        }
        Some(Mood::Dreamy) => {
            particles.glow = true;
            particles.blur = true;
        }
        Some(Mood::Mystical) => {
            particles.color = ParticleColor::Rainbow;
            particles.glow = true;
        }
        None => {}
    }
    scene
}

/// Produces the human-readable preset listing returned by `list_presets`.
///
/// Example line: `"• Starry Night (star)"`.
pub fn format_preset_listing(catalog: &Catalog) -> String {
    let lines = catalog
        .iter()
        .map(|p| format!("• {} ({})", p.scene.name, p.scene.particles.kind))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "✨ Available Particle Presets:\n\n{}\n\nUse create_particles with any of these themes!",
        lines
    )
}
