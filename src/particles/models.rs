//! Particle Scene Domain Models
//!
//! This module contains the data structures describing one particle
//! animation: the scene descriptor, its particle parameters, and the
//! optional geometric pattern used by the shape presets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Particle Parameters
// =============================================================================

/// Color of the particles.
///
/// `rainbow` and `multi` are sentinels resolved per particle by the widget at
/// render time. Anything else is passed through as a literal CSS color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParticleColor {
    Rainbow,
    Multi,
    Literal(String),
}

impl From<String> for ParticleColor {
    fn from(value: String) -> Self {
        match value.as_str() {
            "rainbow" => Self::Rainbow,
            "multi" => Self::Multi,
            _ => Self::Literal(value),
        }
    }
}

impl From<ParticleColor> for String {
    fn from(value: ParticleColor) -> Self {
        match value {
            ParticleColor::Rainbow => "rainbow".to_string(),
            ParticleColor::Multi => "multi".to_string(),
            ParticleColor::Literal(color) => color,
        }
    }
}

impl From<&str> for ParticleColor {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

/// Motion model used by the widget's update loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleKind {
    Star,
    Wave,
    Glow,
    Petal,
    Snow,
    Aurora,
    Rain,
    Bubble,
    Galaxy,
    Fire,
    Sand,
    Float,
}

impl ParticleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Star => "star",
            Self::Wave => "wave",
            Self::Glow => "glow",
            Self::Petal => "petal",
            Self::Snow => "snow",
            Self::Aurora => "aurora",
            Self::Rain => "rain",
            Self::Bubble => "bubble",
            Self::Galaxy => "galaxy",
            Self::Fire => "fire",
            Self::Sand => "sand",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for ParticleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Particle parameters of a scene.
///
/// The boolean flags are only read by the rendering snippet; unset flags are
/// omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleConfig {
    /// Number of particles to spawn
    pub count: u32,

    pub color: ParticleColor,

    /// Ascending `[min, max]` radius range
    pub size: [f64; 2],

    /// Base speed; its meaning depends on `kind`
    pub speed: f64,

    #[serde(rename = "type")]
    pub kind: ParticleKind,

    /// Flow direction hint (only the ocean preset sets it)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub twinkle: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub pulse: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub rotate: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub drift: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub glow: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub blur: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub streak: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub float: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub spiral: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub ripple: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub wave: bool,
}

impl ParticleConfig {
    /// Creates a particle configuration with every flag cleared.
    pub fn new(
        count: u32,
        color: impl Into<ParticleColor>,
        size: [f64; 2],
        speed: f64,
        kind: ParticleKind,
    ) -> Self {
        Self {
            count,
            color: color.into(),
            size,
            speed,
            kind,
            flow: None,
            twinkle: false,
            pulse: false,
            rotate: false,
            drift: false,
            glow: false,
            blur: false,
            streak: false,
            float: false,
            spiral: false,
            ripple: false,
            wave: false,
        }
    }
}

// =============================================================================
// Geometric Patterns
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Spiral,
    Ring,
    Heart,
    Wave,
    Mandala,
}

/// Shape the particles are arranged into by the shape presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    #[serde(rename = "type")]
    pub kind: PatternKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turns: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petals: Option<u32>,
}

impl Pattern {
    pub fn new(kind: PatternKind) -> Self {
        Self {
            kind,
            turns: None,
            amplitude: None,
            frequency: None,
            petals: None,
        }
    }
}

// =============================================================================
// Scene Descriptor
// =============================================================================

/// Everything the widget needs to render one particle scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescriptor {
    /// Display name
    pub name: String,

    /// CSS gradient, passed through unmodified
    pub background: String,

    pub particles: ParticleConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,

    /// Prompt (or preset name) the scene was created for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Mood as requested by the caller, recognized or not
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

// =============================================================================
// Moods
// =============================================================================

/// Moods understood by the mood adjuster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Calm,
    Dreamy,
    Energetic,
    Peaceful,
    Mystical,
}

impl Mood {
    /// All moods, in the order advertised by `tools/list`.
    pub const ALL: [Mood; 5] = [
        Mood::Calm,
        Mood::Dreamy,
        Mood::Energetic,
        Mood::Peaceful,
        Mood::Mystical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Dreamy => "dreamy",
            Self::Energetic => "energetic",
            Self::Peaceful => "peaceful",
            Self::Mystical => "mystical",
        }
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| format!("unrecognized mood: {}", s))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Tool Inputs
// =============================================================================

/// Input for the create_particles tool
#[derive(Debug, Deserialize)]
pub struct CreateParticlesInput {
    /// Natural-language description of the scene
    pub prompt: Option<String>,

    /// Optional mood; defaults to calm
    pub mood: Option<String>,
}

/// Input for the quick_preset tool
#[derive(Debug, Deserialize)]
pub struct QuickPresetInput {
    /// Catalog key of the preset
    pub preset: Option<String>,
}
