//! Preset Catalog
//!
//! The fixed set of named scenes. The catalog is built once at startup and
//! never written afterwards; lookups hand out clones so callers are free to
//! adjust the result.

use super::models::{
    ParticleConfig, ParticleKind, Pattern, PatternKind, SceneDescriptor,
};

/// Key of the preset used when `quick_preset` is asked for an unknown key.
pub const DEFAULT_PRESET: &str = "starryNight";

/// Upper bound on the particle count of any scene.
pub const MAX_PARTICLES: u32 = 300;

/// A catalog entry: the lookup key and its scene.
#[derive(Debug, Clone)]
pub struct Preset {
    pub key: &'static str,
    pub scene: SceneDescriptor,
}

/// Immutable, ordered preset catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    presets: Vec<Preset>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Builds the built-in catalog.
    pub fn new() -> Self {
        Self {
            presets: builtin_presets(),
        }
    }

    /// Exact, case-sensitive lookup. Returns a copy of the scene.
    pub fn lookup(&self, key: &str) -> Option<SceneDescriptor> {
        self.presets
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.scene.clone())
    }

    /// Looks up `key`, falling back to [`DEFAULT_PRESET`] on a miss.
    pub fn lookup_or_default(&self, key: &str) -> SceneDescriptor {
        self.lookup(key).unwrap_or_else(|| self.default_scene())
    }

    /// The scene served when a preset key is unknown.
    pub fn default_scene(&self) -> SceneDescriptor {
        self.presets
            .iter()
            .find(|p| p.key == DEFAULT_PRESET)
            .or_else(|| self.presets.first())
            .map(|p| p.scene.clone())
            .unwrap_or_else(custom_scene)
    }

    /// Catalog keys in declaration order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.presets.iter().map(|p| p.key).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// The scene returned by the prompt matcher when no keyword rule matches.
pub fn custom_scene() -> SceneDescriptor {
    let mut particles = ParticleConfig::new(100, "#ffffff", [2.0, 4.0], 0.5, ParticleKind::Float);
    particles.glow = true;
    scene(
        "Custom Scene",
        "linear-gradient(to bottom, #1a1a2e, #16213e, #0f3460)",
        particles,
    )
}

fn scene(name: &str, background: &str, particles: ParticleConfig) -> SceneDescriptor {
    SceneDescriptor {
        name: name.to_string(),
        background: background.to_string(),
        particles,
        pattern: None,
        prompt: None,
        mood: None,
    }
}

fn with_pattern(mut scene: SceneDescriptor, pattern: Pattern) -> SceneDescriptor {
    scene.pattern = Some(pattern);
    scene
}

fn builtin_presets() -> Vec<Preset> {
    use ParticleKind::*;

    let starry_night = {
        let mut p = ParticleConfig::new(200, "#ffffff", [1.0, 3.0], 0.3, Star);
        p.twinkle = true;
        scene(
            "Starry Night",
            "linear-gradient(to bottom, #0f0c29, #302b63, #24243e)",
            p,
        )
    };

    let ocean = {
        let mut p = ParticleConfig::new(80, "#87ceeb", [2.0, 6.0], 0.8, Wave);
        p.flow = Some("horizontal".to_string());
        scene(
            "Calm Ocean",
            "linear-gradient(to bottom, #1a3a52, #2d5a7b, #1e4d6b)",
            p,
        )
    };

    let fireflies = {
        let mut p = ParticleConfig::new(50, "#ffeb3b", [2.0, 5.0], 0.5, Glow);
        p.pulse = true;
        scene(
            "Fireflies",
            "linear-gradient(to bottom, #1a1a2e, #16213e, #0f0f23)",
            p,
        )
    };

    let sakura = {
        let mut p = ParticleConfig::new(60, "#ff69b4", [8.0, 15.0], 1.2, Petal);
        p.rotate = true;
        scene(
            "Cherry Blossoms",
            "linear-gradient(to bottom, #fce4ec, #f8bbd9, #f48fb1)",
            p,
        )
    };

    let snow = {
        let mut p = ParticleConfig::new(150, "#ffffff", [2.0, 5.0], 1.0, Snow);
        p.drift = true;
        scene(
            "Gentle Snow",
            "linear-gradient(to bottom, #2c3e50, #4a6572, #232526)",
            p,
        )
    };

    let aurora = {
        let mut p = ParticleConfig::new(100, "rainbow", [2.0, 4.0], 0.4, Aurora);
        p.wave = true;
        scene(
            "Northern Lights",
            "linear-gradient(to bottom, #0a0a1a, #1a1a3a, #0f0f2f)",
            p,
        )
    };

    let rain = {
        let mut p = ParticleConfig::new(200, "#a8d8ea", [1.0, 3.0], 8.0, Rain);
        p.streak = true;
        scene(
            "Peaceful Rain",
            "linear-gradient(to bottom, #373b44, #4286f4, #373b44)",
            p,
        )
    };

    let bubbles = {
        let mut p = ParticleConfig::new(40, "#ffffff", [10.0, 30.0], 0.6, Bubble);
        p.float = true;
        scene(
            "Floating Bubbles",
            "linear-gradient(to bottom, #e0f7fa, #b2ebf2, #80deea)",
            p,
        )
    };

    let galaxy = {
        let mut p = ParticleConfig::new(300, "multi", [1.0, 3.0], 0.2, Galaxy);
        p.spiral = true;
        scene(
            "Galaxy Spiral",
            "radial-gradient(ellipse at center, #1a0a2e, #0d0015, #000000)",
            p,
        )
    };

    let spiral = {
        let mut p = ParticleConfig::new(220, "#f6d365", [1.0, 3.0], 0.2, Glow);
        p.pulse = true;
        let mut pattern = Pattern::new(PatternKind::Spiral);
        pattern.turns = Some(3);
        with_pattern(
            scene(
                "Spiral Bloom",
                "radial-gradient(circle at center, #1b1f3b, #0f1226)",
                p,
            ),
            pattern,
        )
    };

    let ring = {
        let mut p = ParticleConfig::new(200, "#a1c4fd", [1.0, 3.0], 0.2, Star);
        p.twinkle = true;
        with_pattern(
            scene(
                "Halo Ring",
                "radial-gradient(circle at center, #0b132b, #1c2541)",
                p,
            ),
            Pattern::new(PatternKind::Ring),
        )
    };

    let heart = {
        let mut p = ParticleConfig::new(180, "#ff6b6b", [2.0, 4.0], 0.2, Glow);
        p.pulse = true;
        with_pattern(
            scene(
                "Heart Bloom",
                "linear-gradient(to bottom, #2b0f1f, #1a0b14)",
                p,
            ),
            Pattern::new(PatternKind::Heart),
        )
    };

    let wave = {
        let p = ParticleConfig::new(160, "#7de2fc", [2.0, 4.0], 0.2, Wave);
        let mut pattern = Pattern::new(PatternKind::Wave);
        pattern.amplitude = Some(0.25);
        pattern.frequency = Some(2.0);
        with_pattern(
            scene(
                "Sine Wave",
                "linear-gradient(to bottom, #0c2d48, #145374)",
                p,
            ),
            pattern,
        )
    };

    let mandala = {
        let mut p = ParticleConfig::new(240, "#ffd86f", [1.0, 3.0], 0.2, Glow);
        p.pulse = true;
        let mut pattern = Pattern::new(PatternKind::Mandala);
        pattern.petals = Some(8);
        with_pattern(
            scene(
                "Mandala Rose",
                "radial-gradient(circle at center, #2d1b3f, #120a1a)",
                p,
            ),
            pattern,
        )
    };

    let zen = {
        let mut p = ParticleConfig::new(30, "#8b7355", [3.0, 6.0], 0.3, Sand);
        p.ripple = true;
        scene(
            "Zen Garden",
            "linear-gradient(to bottom, #f5f5dc, #e8e4c9, #d4cfb4)",
            p,
        )
    };

    vec![
        Preset { key: "starryNight", scene: starry_night },
        Preset { key: "ocean", scene: ocean },
        Preset { key: "fireflies", scene: fireflies },
        Preset { key: "sakura", scene: sakura },
        Preset { key: "snow", scene: snow },
        Preset { key: "aurora", scene: aurora },
        Preset { key: "rain", scene: rain },
        Preset { key: "bubbles", scene: bubbles },
        Preset { key: "galaxy", scene: galaxy },
        Preset { key: "spiral", scene: spiral },
        Preset { key: "ring", scene: ring },
        Preset { key: "heart", scene: heart },
        Preset { key: "wave", scene: wave },
        Preset { key: "mandala", scene: mandala },
        Preset { key: "zen", scene: zen },
    ]
}
