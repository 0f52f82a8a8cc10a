//! Draws one frame of the wave field onto a 2D [`Surface`].

use std::f64::consts::TAU;
use std::fmt;

use glam::DVec2;
use smallvec::{smallvec, SmallVec};

use crate::color::Rgba;
use crate::constants::*;
use crate::curve::{CurveSampler, Refinements};
use crate::field::{WaveField, WaveSpec};
use crate::state::FrameParams;

const HIGHLIGHT_COLOR: Rgba = Rgba::new(255, 255, 255, 0.4);

/// CSS-style `blur(..) brightness(..)` filter applied while a wave is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowFilter {
    pub blur_px: f64,
    pub brightness: f64,
}

impl GlowFilter {
    pub const SOFT: Self = Self {
        blur_px: 0.5,
        brightness: 1.2,
    };
    pub const EXTRA: Self = Self {
        blur_px: 0.8,
        brightness: 1.3,
    };
}

impl fmt::Display for GlowFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blur({}px) brightness({})", self.blur_px, self.brightness)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

/// The subset of a 2D drawing context the renderer relies on.
pub trait Surface {
    /// Backing size in pixels as (width, height).
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);
    fn set_filter(&mut self, filter: GlowFilter);
    fn set_shadow(&mut self, blur: f64, color: Rgba);
    fn set_fill_color(&mut self, color: Rgba);
    /// Fill with a radial gradient from `center` (radius 0) out to `radius`.
    fn set_fill_radial_gradient(&mut self, center: DVec2, radius: f64, stops: &[GradientStop]);
    fn begin_path(&mut self);
    fn move_to(&mut self, point: DVec2);
    fn arc(&mut self, center: DVec2, radius: f64, start_angle: f64, end_angle: f64);
    fn fill(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub refinements: Refinements,
    /// Shadow and blur/brightness filter around each wave.
    pub glow: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            refinements: Refinements::default(),
            glow: true,
        }
    }
}

/// What a frame ended up drawing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Sphere centre per wave, indexed like the field. Empty when nothing was drawn.
    pub spheres: Vec<DVec2>,
    pub dots: usize,
}

#[derive(Clone, Debug, Default)]
pub struct FrameRenderer {
    options: RenderOptions,
}

/// Vertical span a wave occupies in the current frame.
struct Span {
    start: f64,
    visible_end: f64,
}

impl FrameRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        field: &WaveField,
        frame: &FrameParams,
    ) -> FrameReport {
        surface.clear();
        let (width, height) = surface.size();
        if !(height > 0.0 && height.is_finite() && width.is_finite()) {
            return FrameReport::default();
        }

        let sampler = CurveSampler::new(width, field.len(), self.options.refinements);
        let mut report = FrameReport {
            spheres: vec![DVec2::ZERO; field.len()],
            dots: 0,
        };
        for (index, wave) in field.back_to_front() {
            let (sphere, dots) =
                self.draw_wave(surface, &sampler, wave, index, width, height, frame);
            report.spheres[index] = sphere;
            report.dots += dots;
        }
        log::trace!(
            "[render] t={:.3} gap={:.2} dots={}",
            frame.time,
            frame.bottom_gap,
            report.dots
        );
        report
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_wave<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        sampler: &CurveSampler,
        wave: &WaveSpec,
        index: usize,
        width: f64,
        height: f64,
        frame: &FrameParams,
    ) -> (DVec2, usize) {
        if self.options.glow {
            let (blur, filter) = if wave.extra_glow {
                (wave.shadow_blur.unwrap_or(SHADOW_BLUR_EXTRA), GlowFilter::EXTRA)
            } else {
                (SHADOW_BLUR, GlowFilter::SOFT)
            };
            surface.set_shadow(blur, wave.color);
            surface.set_filter(filter);
        }

        let t = frame.time;
        let base_x = width / 2.0;
        let span = wave_span(wave, index, height, frame);

        surface.set_fill_color(wave.color);
        surface.begin_path();
        let spacing = (height / DOT_SPACING_DIVISOR).clamp(MIN_DOT_SPACING, MAX_DOT_SPACING);
        let dot_radius = wave.width / 1.5;
        let mut dots = 0;
        let mut y = span.start;
        while y < span.visible_end - TAIL_CLEARANCE {
            let x = base_x + sampler.sample(wave, index, y, t);
            surface.move_to(DVec2::new(x + dot_radius, y));
            surface.arc(DVec2::new(x, y), dot_radius, 0.0, TAU);
            dots += 1;
            y += spacing;
        }
        surface.fill();

        let sphere_y =
            (span.visible_end - SPHERE_LIFT).min(height - wave.sphere_radius - SPHERE_FLOOR_MARGIN);
        let center = DVec2::new(base_x + sampler.sample(wave, index, sphere_y, t), sphere_y);
        self.draw_sphere(surface, wave, center);
        (center, dots)
    }

    fn draw_sphere<S: Surface + ?Sized>(&self, surface: &mut S, wave: &WaveSpec, center: DVec2) {
        if self.options.glow {
            surface.set_shadow(wave.sphere_glow, wave.color);
        }
        let stops: SmallVec<[GradientStop; 3]> = smallvec![
            GradientStop {
                offset: 0.0,
                color: wave.color.shifted(SPHERE_LIGHTEN),
            },
            GradientStop {
                offset: 0.7,
                color: wave.color,
            },
            GradientStop {
                offset: 1.0,
                color: wave.color.shifted(SPHERE_DARKEN),
            },
        ];
        surface.begin_path();
        surface.set_fill_radial_gradient(center, SPHERE_RADIUS, &stops);
        surface.arc(center, SPHERE_RADIUS, 0.0, TAU);
        surface.fill();

        let highlight = center - DVec2::splat(SPHERE_RADIUS * HIGHLIGHT_OFFSET_RATIO);
        surface.begin_path();
        surface.set_fill_color(HIGHLIGHT_COLOR);
        surface.arc(highlight, SPHERE_RADIUS * HIGHLIGHT_RADIUS_RATIO, 0.0, TAU);
        surface.fill();
    }
}

fn wave_span(wave: &WaveSpec, index: usize, height: f64, frame: &FrameParams) -> Span {
    let i = index as f64;
    let start = DRAW_START_Y;
    // gentle vertical bobbing of the wave end
    let variation = (frame.time * 0.2 + i * 1.1).sin() * 5.0;
    let end = height - frame.bottom_gap + wave.bottom_offset + variation;
    let end_margin = 20.0 + (i * 1.3).cos() * 10.0;
    let visible_end = match frame.reveal {
        Some(progress) => start + (end - start) * progress,
        None => end - end_margin,
    };
    Span { start, visible_end }
}
