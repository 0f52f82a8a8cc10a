// Host-side tests for frame rendering against a recording surface.

use glam::DVec2;
use waves_core::{
    FrameParams, FrameRenderer, GlowFilter, GradientStop, RenderOptions, Rgba, Surface, WaveField,
};

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Clear,
    Filter(GlowFilter),
    Shadow(f64, Rgba),
    FillColor(Rgba),
    Gradient(DVec2, f64, Vec<GradientStop>),
    BeginPath,
    MoveTo(DVec2),
    Arc(DVec2, f64),
    Fill,
}

struct RecordingSurface {
    width: f64,
    height: f64,
    ops: Vec<Op>,
}

impl RecordingSurface {
    fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    fn arcs(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Arc(..))).count()
    }

    fn gradients(&self) -> Vec<&Vec<GradientStop>> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Gradient(_, _, stops) => Some(stops),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn set_filter(&mut self, filter: GlowFilter) {
        self.ops.push(Op::Filter(filter));
    }
    fn set_shadow(&mut self, blur: f64, color: Rgba) {
        self.ops.push(Op::Shadow(blur, color));
    }
    fn set_fill_color(&mut self, color: Rgba) {
        self.ops.push(Op::FillColor(color));
    }
    fn set_fill_radial_gradient(&mut self, center: DVec2, radius: f64, stops: &[GradientStop]) {
        self.ops.push(Op::Gradient(center, radius, stops.to_vec()));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, point: DVec2) {
        self.ops.push(Op::MoveTo(point));
    }
    fn arc(&mut self, center: DVec2, radius: f64, _start: f64, _end: f64) {
        self.ops.push(Op::Arc(center, radius));
    }
    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }
}

fn settled(time: f64) -> FrameParams {
    FrameParams {
        time,
        bottom_gap: 20.0,
        reveal: None,
    }
}

#[test]
fn frame_starts_with_clear_and_draws_every_wave() {
    let field = WaveField::default();
    let mut surface = RecordingSurface::new(100.0, 800.0);
    let report = FrameRenderer::default().render(&mut surface, &field, &settled(1.0));
    assert_eq!(surface.ops[0], Op::Clear);
    assert_eq!(report.spheres.len(), field.len());
    assert!(report.dots > 0);
    // one arc per dot plus sphere and highlight per wave
    assert_eq!(surface.arcs(), report.dots + 2 * field.len());
}

#[test]
fn waves_are_painted_back_to_front() {
    let field = WaveField::default();
    let mut surface = RecordingSurface::new(100.0, 800.0);
    FrameRenderer::default().render(&mut surface, &field, &settled(0.0));
    let wave_colors: Vec<Rgba> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::FillColor(c) if *c != Rgba::new(255, 255, 255, 0.4) => Some(*c),
            _ => None,
        })
        .collect();
    let expected: Vec<Rgba> = field.waves().iter().rev().map(|w| w.color).collect();
    assert_eq!(wave_colors, expected);
}

#[test]
fn sphere_gradient_lightens_core_and_darkens_rim() {
    let field = WaveField::default();
    let mut surface = RecordingSurface::new(100.0, 600.0);
    FrameRenderer::default().render(&mut surface, &field, &settled(2.0));
    let gradients = surface.gradients();
    assert_eq!(gradients.len(), field.len());
    // first painted sphere belongs to the last wave
    let wave = &field.waves()[4];
    let stops = gradients[0];
    assert_eq!(stops.len(), 3);
    assert_eq!(stops[0].offset, 0.0);
    assert_eq!(stops[0].color, Rgba::new(255, 255, 230, 0.9));
    assert_eq!(stops[1].offset, 0.7);
    assert_eq!(stops[1].color, wave.color);
    assert_eq!(stops[2].offset, 1.0);
    assert_eq!(stops[2].color, Rgba::new(235, 220, 160, 0.9));
}

#[test]
fn dots_follow_the_sampled_curve() {
    let field = WaveField::default();
    let mut surface = RecordingSurface::new(100.0, 800.0);
    let renderer = FrameRenderer::new(RenderOptions::default());
    renderer.render(&mut surface, &field, &settled(3.0));
    let sampler = waves_core::CurveSampler::new(100.0, field.len(), renderer.options().refinements);
    let wave = &field.waves()[4];
    // the first dot of the first painted wave sits at the top of the span
    let first = surface
        .ops
        .iter()
        .find_map(|op| match op {
            Op::Arc(c, r) if (*r - wave.width / 1.5).abs() < 1e-12 => Some(*c),
            _ => None,
        })
        .unwrap();
    assert_eq!(first.y, -100.0);
    let want = 50.0 + sampler.sample(wave, 4, -100.0, 3.0);
    assert!((first.x - want).abs() < 1e-9);
}

#[test]
fn extra_glow_wave_uses_stronger_filter() {
    let field = WaveField::default();
    let mut surface = RecordingSurface::new(100.0, 800.0);
    FrameRenderer::default().render(&mut surface, &field, &settled(0.0));
    let filters: Vec<GlowFilter> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Filter(f) => Some(*f),
            _ => None,
        })
        .collect();
    // painted order is 4, 3, 2, 1, 0 and wave 2 glows extra
    assert_eq!(
        filters,
        vec![
            GlowFilter::SOFT,
            GlowFilter::SOFT,
            GlowFilter::EXTRA,
            GlowFilter::SOFT,
            GlowFilter::SOFT
        ]
    );
    assert!(surface.ops.contains(&Op::Shadow(25.0, field.waves()[2].color)));
    assert!(surface.ops.contains(&Op::Shadow(30.0, field.waves()[2].color)));
    assert_eq!(GlowFilter::EXTRA.to_string(), "blur(0.8px) brightness(1.3)");
}

#[test]
fn glow_can_be_disabled() {
    let field = WaveField::default();
    let mut surface = RecordingSurface::new(100.0, 800.0);
    let options = RenderOptions {
        glow: false,
        ..RenderOptions::default()
    };
    FrameRenderer::new(options).render(&mut surface, &field, &settled(0.0));
    assert!(!surface
        .ops
        .iter()
        .any(|op| matches!(op, Op::Filter(_) | Op::Shadow(..))));
}

#[test]
fn intro_reveal_grows_with_progress() {
    let field = WaveField::default();
    let renderer = FrameRenderer::default();
    let mut counts = Vec::new();
    for progress in [0.0, 0.25, 0.5, 1.0] {
        let mut surface = RecordingSurface::new(100.0, 800.0);
        let frame = FrameParams {
            time: 0.0,
            bottom_gap: 20.0,
            reveal: Some(progress),
        };
        counts.push(renderer.render(&mut surface, &field, &frame).dots);
    }
    assert_eq!(counts[0], 0);
    assert!(counts.windows(2).all(|w| w[0] < w[1]), "{counts:?}");
}

#[test]
fn sphere_stays_above_canvas_floor() {
    let field = WaveField::default();
    let mut surface = RecordingSurface::new(100.0, 800.0);
    let frame = FrameParams {
        time: 0.0,
        bottom_gap: 0.0,
        reveal: Some(1.0),
    };
    let report = FrameRenderer::default().render(&mut surface, &field, &frame);
    for (wave, sphere) in field.waves().iter().zip(&report.spheres) {
        assert!(sphere.y <= 800.0 - wave.sphere_radius - 5.0 + 1e-9);
    }
}

#[test]
fn zero_height_surface_draws_nothing() {
    let field = WaveField::default();
    for height in [0.0, -5.0, f64::NAN] {
        let mut surface = RecordingSurface::new(100.0, height);
        let report = FrameRenderer::default().render(&mut surface, &field, &settled(1.0));
        assert_eq!(report.dots, 0);
        assert!(report.spheres.is_empty());
        assert_eq!(surface.ops, vec![Op::Clear]);
    }
}

#[test]
fn tiny_surface_does_not_panic() {
    let field = WaveField::default();
    let mut surface = RecordingSurface::new(1.0, 1.0);
    let report = FrameRenderer::default().render(&mut surface, &field, &settled(5.0));
    assert_eq!(report.spheres.len(), field.len());
}
