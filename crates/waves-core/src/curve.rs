//! Horizontal displacement of a wave as a function of height and simulated time.
//!
//! Every wave is a sum of three harmonics sharing the wave's frequency, speed
//! and phase offset. Two optional refinements layer more motion on top: a slow
//! fourth harmonic and a small position-dependent wobble common to all waves.

use crate::constants::{SAFE_AMPLITUDE_RATIO, SAFE_WIDTH_RATIO, WAVE_SPREAD};
use crate::field::WaveSpec;

/// Optional terms on top of the three base harmonics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Refinements {
    pub fourth_harmonic: bool,
    pub micro_oscillation: bool,
}

impl Default for Refinements {
    fn default() -> Self {
        Self {
            fourth_harmonic: true,
            micro_oscillation: true,
        }
    }
}

impl Refinements {
    pub const NONE: Self = Self {
        fourth_harmonic: false,
        micro_oscillation: false,
    };
}

/// Largest amplitude that keeps a wave inside a canvas of the given width.
#[inline]
pub fn safe_amplitude(canvas_width: f64) -> f64 {
    (canvas_width * SAFE_WIDTH_RATIO / 2.0 * SAFE_AMPLITUDE_RATIO).max(0.0)
}

/// Harmonic sum scaled by `amplitude` (already clamped by the caller).
#[inline]
pub fn harmonics(wave: &WaveSpec, amplitude: f64, y: f64, t: f64, refine: Refinements) -> f64 {
    let phase = y * wave.frequency;
    let ts = t * wave.speed;
    let mut sum = (phase + ts + wave.offset).sin()
        + 0.4 * (2.0 * phase + 1.5 * ts + wave.offset).sin()
        + 0.2 * (1.8 * phase + 0.7 * ts + wave.offset).cos();
    if refine.fourth_harmonic {
        sum += 0.1 * (3.2 * phase + 0.15 * t).sin();
    }
    amplitude * sum
}

/// Small side-to-side wobble shared by every wave.
#[inline]
pub fn micro_oscillation(y: f64, t: f64) -> f64 {
    (y * 0.1 + t * 0.3).sin() * 2.0
}

/// Offset that fans waves out around the centre line.
#[inline]
pub fn horizontal_offset(index: usize, wave_count: usize) -> f64 {
    (index as f64 - wave_count as f64 / 2.0) * WAVE_SPREAD
}

/// Samples wave paths for one canvas width and wave count.
#[derive(Clone, Copy, Debug)]
pub struct CurveSampler {
    amplitude_limit: f64,
    wave_count: usize,
    refine: Refinements,
}

impl CurveSampler {
    pub fn new(canvas_width: f64, wave_count: usize, refine: Refinements) -> Self {
        Self {
            amplitude_limit: safe_amplitude(canvas_width),
            wave_count,
            refine,
        }
    }

    pub fn amplitude_for(&self, wave: &WaveSpec) -> f64 {
        wave.amplitude.min(self.amplitude_limit)
    }

    /// Displacement from the canvas centre line of wave `index` at height `y`, time `t`.
    pub fn sample(&self, wave: &WaveSpec, index: usize, y: f64, t: f64) -> f64 {
        let mut x = harmonics(wave, self.amplitude_for(wave), y, t, self.refine)
            + horizontal_offset(index, self.wave_count);
        if self.refine.micro_oscillation {
            x += micro_oscillation(y, t);
        }
        x
    }
}
