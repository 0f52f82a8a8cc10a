// Shared animation and layout tuning constants.

// Scroll-driven motion
pub const MAX_SCROLL_SPEED: f64 = 0.2; // time units per frame at full scroll speed
pub const SCROLL_DECAY: f64 = 0.95; // per-frame velocity multiplier once input stops
pub const VELOCITY_EPSILON: f64 = 0.001; // below this the scroll animation is considered spent
pub const SCROLL_DELTA_DIVISOR: f64 = 20.0; // pixels of scroll for full speed
pub const WHEEL_DELTA_DIVISOR: f64 = 100.0; // wheel delta units for full speed
pub const SETTLE_DELAY_MS: u32 = 150; // quiet period that ends a scroll gesture

// Autonomous motion
pub const AUTO_ANIMATION_SPEED: f64 = 0.03; // time per frame while parked at the page bottom
pub const FIRST_LOAD_SPEED: f64 = 0.005; // intro reveal progress per frame
pub const INTRO_TIME_FACTOR: f64 = 0.05; // intro runs time at this fraction of the auto speed

// Bottom gap easing
pub const NORMAL_BOTTOM_GAP: f64 = 20.0;
pub const BOTTOM_GAP_AT_BOTTOM: f64 = 5.0;
pub const GAP_TRANSITION_SPEED: f64 = 0.1; // fraction of the remaining distance per frame
pub const GAP_EPSILON: f64 = 0.1;
pub const BOTTOM_THRESHOLD: f64 = 50.0; // distance from the document end that counts as bottom

// Canvas geometry
pub const CANVAS_WIDTH: u32 = 100;
pub const SAFE_WIDTH_RATIO: f64 = 0.9;
pub const SAFE_AMPLITUDE_RATIO: f64 = 0.8;
pub const DRAW_START_Y: f64 = -100.0; // waves start above the viewport
pub const WAVE_SPREAD: f64 = 3.0; // horizontal distance between neighbouring waves
pub const MIN_DOT_SPACING: f64 = 2.0;
pub const MAX_DOT_SPACING: f64 = 5.0;
pub const DOT_SPACING_DIVISOR: f64 = 400.0;
pub const TAIL_CLEARANCE: f64 = 15.0; // gap between the last dot and the sphere

// Sphere marker
pub const SPHERE_RADIUS: f64 = 6.0;
pub const SPHERE_LIFT: f64 = 10.0;
pub const SPHERE_FLOOR_MARGIN: f64 = 5.0;
pub const SPHERE_LIGHTEN: i16 = 50;
pub const SPHERE_DARKEN: i16 = -20;
pub const SPHERE_GLOW: f64 = 20.0;
pub const SPHERE_GLOW_EXTRA: f64 = 30.0;
pub const HIGHLIGHT_OFFSET_RATIO: f64 = 0.3;
pub const HIGHLIGHT_RADIUS_RATIO: f64 = 0.4;

// Glow
pub const SHADOW_BLUR: f64 = 15.0;
pub const SHADOW_BLUR_EXTRA: f64 = 20.0; // used when an extra-glow wave has no blur of its own
