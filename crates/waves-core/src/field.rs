use crate::color::{parse_color, Rgba};
use crate::constants::{SPHERE_GLOW, SPHERE_GLOW_EXTRA};

/// Static per-wave configuration as authored.
#[derive(Clone, Debug)]
pub struct WaveConfig {
    pub color: &'static str,
    pub amplitude: f64,
    pub frequency: f64,
    pub speed: f64,
    pub offset: f64,
    pub width: f64,
    pub shadow_blur: Option<f64>,
    pub extra_glow: bool,
}

impl WaveConfig {
    const fn plain(
        color: &'static str,
        amplitude: f64,
        frequency: f64,
        speed: f64,
        offset: f64,
        width: f64,
    ) -> Self {
        Self {
            color,
            amplitude,
            frequency,
            speed,
            offset,
            width,
            shadow_blur: None,
            extra_glow: false,
        }
    }
}

// Default wave set, listed front to back.
pub const DEFAULT_WAVES: [WaveConfig; 5] = [
    WaveConfig::plain("rgba(255, 255, 255, 0.9)", 20.0, 0.03, 0.2, 0.0, 2.5),
    WaveConfig::plain("rgba(180, 220, 255, 0.8)", 22.0, 0.025, 0.18, 2.0, 2.0),
    WaveConfig {
        color: "rgba(57, 197, 187, 0.9)",
        amplitude: 25.0,
        frequency: 0.02,
        speed: 0.25,
        offset: 4.0,
        width: 2.8,
        shadow_blur: Some(25.0),
        extra_glow: true,
    },
    WaveConfig::plain("rgba(200, 200, 255, 0.85)", 23.0, 0.022, 0.22, 6.0, 2.2),
    WaveConfig::plain("rgba(255, 240, 180, 0.9)", 24.0, 0.024, 0.21, 8.0, 2.5),
];

/// A wave ready for drawing: parsed colour plus the layout values derived from its position.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveSpec {
    pub color: Rgba,
    pub amplitude: f64,
    pub frequency: f64,
    pub speed: f64,
    pub offset: f64,
    pub width: f64,
    pub shadow_blur: Option<f64>,
    pub extra_glow: bool,
    /// Vertical nudge of the wave end so neighbouring endpoints don't line up.
    pub bottom_offset: f64,
    pub sphere_radius: f64,
    pub sphere_glow: f64,
}

impl WaveSpec {
    fn derive(index: usize, config: &WaveConfig) -> Self {
        Self {
            color: parse_color(config.color),
            amplitude: config.amplitude,
            frequency: config.frequency,
            speed: config.speed,
            offset: config.offset,
            width: config.width,
            shadow_blur: config.shadow_blur,
            extra_glow: config.extra_glow,
            bottom_offset: (index as f64 * 1.5).sin() * 8.0,
            sphere_radius: config.width * 3.0,
            sphere_glow: if config.extra_glow {
                SPHERE_GLOW_EXTRA
            } else {
                SPHERE_GLOW
            },
        }
    }
}

/// Ordered, immutable set of waves. Entry 0 is the front-most wave.
#[derive(Clone, Debug)]
pub struct WaveField {
    waves: Vec<WaveSpec>,
}

impl WaveField {
    pub fn new(configs: &[WaveConfig]) -> Self {
        let waves = configs
            .iter()
            .enumerate()
            .map(|(i, c)| WaveSpec::derive(i, c))
            .collect::<Vec<_>>();
        log::debug!("[field] {} waves prepared", waves.len());
        Self { waves }
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub fn waves(&self) -> &[WaveSpec] {
        &self.waves
    }

    pub fn get(&self, index: usize) -> Option<&WaveSpec> {
        self.waves.get(index)
    }

    /// Waves in paint order: last entry first so entry 0 ends up on top.
    pub fn back_to_front(&self) -> impl Iterator<Item = (usize, &WaveSpec)> + '_ {
        self.waves.iter().enumerate().rev()
    }
}

impl Default for WaveField {
    fn default() -> Self {
        Self::new(&DEFAULT_WAVES)
    }
}
