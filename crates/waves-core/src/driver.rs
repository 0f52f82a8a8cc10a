//! Frame scheduling for the wave rail.
//!
//! The driver owns simulated time and every input-derived signal (scroll
//! velocity, the at-bottom flag, intro progress, the eased bottom gap). It never
//! talks to the host directly: each input or frame returns a [`Transition`]
//! listing the [`Command`]s the host must carry out. The driver mirrors the
//! host's pending animation frame with a single flag and only ever asks for a
//! frame while that flag is clear, so at most one frame is outstanding.
//!
//! When several reasons to animate overlap, the highest-priority [`Phase`]
//! decides how time advances on the next frame.

use smallvec::SmallVec;

use crate::constants::*;
use crate::state::{FrameParams, PageMetrics};

#[derive(Clone, Debug, PartialEq)]
pub struct DriverParams {
    pub max_scroll_speed: f64,
    pub scroll_decay: f64,
    pub velocity_epsilon: f64,
    pub scroll_delta_divisor: f64,
    pub wheel_delta_divisor: f64,
    pub settle_delay_ms: u32,
    pub auto_speed: f64,
    pub intro_speed: f64,
    pub intro_time_factor: f64,
    pub normal_gap: f64,
    pub bottom_gap: f64,
    pub gap_transition_speed: f64,
    pub gap_epsilon: f64,
    pub bottom_threshold: f64,
    /// Run the reveal animation before anything else.
    pub play_intro: bool,
    /// Let upward scrolling run time backwards instead of advancing by the speed.
    pub reversible_time: bool,
}

impl Default for DriverParams {
    fn default() -> Self {
        Self {
            max_scroll_speed: MAX_SCROLL_SPEED,
            scroll_decay: SCROLL_DECAY,
            velocity_epsilon: VELOCITY_EPSILON,
            scroll_delta_divisor: SCROLL_DELTA_DIVISOR,
            wheel_delta_divisor: WHEEL_DELTA_DIVISOR,
            settle_delay_ms: SETTLE_DELAY_MS,
            auto_speed: AUTO_ANIMATION_SPEED,
            intro_speed: FIRST_LOAD_SPEED,
            intro_time_factor: INTRO_TIME_FACTOR,
            normal_gap: NORMAL_BOTTOM_GAP,
            bottom_gap: BOTTOM_GAP_AT_BOTTOM,
            gap_transition_speed: GAP_TRANSITION_SPEED,
            gap_epsilon: GAP_EPSILON,
            bottom_threshold: BOTTOM_THRESHOLD,
            play_intro: true,
            reversible_time: false,
        }
    }
}

/// Identifies one arming of the settle timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SettleToken(u64);

/// Debounce bookkeeping: only the most recently armed token may fire.
#[derive(Clone, Debug, Default)]
pub struct SettleTimer {
    generation: u64,
    armed: Option<SettleToken>,
}

impl SettleTimer {
    pub fn arm(&mut self) -> SettleToken {
        self.generation += 1;
        let token = SettleToken(self.generation);
        self.armed = Some(token);
        token
    }

    /// Consume `token` if it is the live one. Stale tokens return false.
    pub fn fire(&mut self, token: SettleToken) -> bool {
        if self.armed == Some(token) {
            self.armed = None;
            true
        } else {
            false
        }
    }

    pub fn disarm(&mut self) -> Option<SettleToken> {
        self.armed.take()
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

/// Side effects the host performs on the driver's behalf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    RequestFrame,
    CancelFrame,
    /// Replace any running settle timer with one that reports `token` after `delay_ms`.
    ArmSettleTimer { token: SettleToken, delay_ms: u32 },
    CancelSettleTimer,
}

pub type Commands = SmallVec<[Command; 2]>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transition {
    pub commands: Commands,
    /// Present for frame ticks: the state to draw this frame with.
    pub frame: Option<FrameParams>,
}

impl Transition {
    pub fn requests_frame(&self) -> bool {
        self.commands.contains(&Command::RequestFrame)
    }

    pub fn cancels_frame(&self) -> bool {
        self.commands.contains(&Command::CancelFrame)
    }
}

/// Inputs understood by [`AnimationDriver::handle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    Start,
    Resize(PageMetrics),
    Scroll(PageMetrics),
    Wheel { delta_x: f64, delta_y: f64 },
    ScrollSettled(SettleToken),
    Frame,
    Teardown,
}

/// Reason for the next frame, highest priority first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Scrolling,
    AtBottom,
    GapTransitioning,
    Idle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    pub time: f64,
    pub scrolling: bool,
    pub velocity: f64,
    pub at_bottom: bool,
    pub intro: bool,
    pub intro_progress: f64,
    pub bottom_gap: f64,
    pub frame_pending: bool,
}

#[derive(Debug)]
pub struct AnimationDriver {
    params: DriverParams,
    state: AnimationState,
    page: PageMetrics,
    last_scroll_offset: f64,
    intro_frames: u32,
    settle: SettleTimer,
}

impl AnimationDriver {
    pub fn new(params: DriverParams, page: PageMetrics) -> Self {
        let state = AnimationState {
            time: 0.0,
            scrolling: false,
            velocity: 0.0,
            at_bottom: page.is_at_bottom(params.bottom_threshold),
            intro: params.play_intro,
            intro_progress: if params.play_intro { 0.0 } else { 1.0 },
            bottom_gap: params.normal_gap,
            frame_pending: false,
        };
        log::debug!(
            "[driver] init at_bottom={} intro={}",
            state.at_bottom,
            state.intro
        );
        Self {
            params,
            state,
            page,
            last_scroll_offset: page.scroll_offset,
            intro_frames: 0,
            settle: SettleTimer::default(),
        }
    }

    pub fn params(&self) -> &DriverParams {
        &self.params
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn page(&self) -> &PageMetrics {
        &self.page
    }

    pub fn target_gap(&self) -> f64 {
        if self.state.at_bottom {
            self.params.bottom_gap
        } else {
            self.params.normal_gap
        }
    }

    pub fn phase(&self) -> Phase {
        let s = &self.state;
        if s.intro {
            Phase::Intro
        } else if s.scrolling || s.velocity.abs() > self.params.velocity_epsilon {
            Phase::Scrolling
        } else if s.at_bottom {
            Phase::AtBottom
        } else if (s.bottom_gap - self.target_gap()).abs() > self.params.gap_epsilon {
            Phase::GapTransitioning
        } else {
            Phase::Idle
        }
    }

    pub fn handle(&mut self, event: Event) -> Transition {
        match event {
            Event::Start => self.start(),
            Event::Resize(page) => self.on_resize(page),
            Event::Scroll(page) => self.on_scroll(page),
            Event::Wheel { delta_x, delta_y } => self.on_wheel(delta_x, delta_y),
            Event::ScrollSettled(token) => self.on_scroll_settled(token),
            Event::Frame => self.tick(),
            Event::Teardown => self.teardown(),
        }
    }

    /// Ask for the first frame. Harmless if one is already pending.
    pub fn start(&mut self) -> Transition {
        let mut out = Transition::default();
        self.request_frame(&mut out);
        out
    }

    pub fn on_resize(&mut self, page: PageMetrics) -> Transition {
        let mut out = Transition::default();
        self.page = page;
        self.refresh_at_bottom(&mut out);
        // resizing the canvas wipes it, so redraw even when idle
        self.request_frame(&mut out);
        out
    }

    pub fn on_scroll(&mut self, page: PageMetrics) -> Transition {
        let mut out = Transition::default();
        let delta = page.scroll_offset - self.last_scroll_offset;
        self.page = page;
        if delta != 0.0 && delta.is_finite() {
            self.state.scrolling = true;
            self.state.velocity = self.scaled_velocity(delta, self.params.scroll_delta_divisor);
            self.request_frame(&mut out);
            self.arm_settle(&mut out);
        }
        self.refresh_at_bottom(&mut out);
        self.last_scroll_offset = page.scroll_offset;
        self.sync(&mut out);
        out
    }

    pub fn on_wheel(&mut self, delta_x: f64, delta_y: f64) -> Transition {
        let mut out = Transition::default();
        let delta = if delta_y.abs() > delta_x.abs() {
            delta_y
        } else {
            delta_x
        };
        self.state.scrolling = true;
        self.state.velocity = self.scaled_velocity(delta, self.params.wheel_delta_divisor);
        self.arm_settle(&mut out);
        self.request_frame(&mut out);
        out
    }

    pub fn on_scroll_settled(&mut self, token: SettleToken) -> Transition {
        let mut out = Transition::default();
        if !self.settle.fire(token) {
            log::trace!("[driver] stale settle token {:?}", token);
            return out;
        }
        log::debug!(
            "[driver] scroll settled, velocity={:.4}",
            self.state.velocity
        );
        self.state.scrolling = false;
        self.refresh_at_bottom(&mut out);
        self.sync(&mut out);
        out
    }

    /// Run one frame: ease the gap, hand back what to draw, advance time and
    /// decide whether another frame follows.
    pub fn tick(&mut self) -> Transition {
        self.state.frame_pending = false;
        self.ease_gap();

        let mut out = Transition {
            frame: Some(FrameParams {
                time: self.state.time,
                bottom_gap: self.state.bottom_gap,
                reveal: self.state.intro.then_some(self.state.intro_progress),
            }),
            ..Transition::default()
        };

        match self.phase() {
            Phase::Intro => {
                self.intro_frames += 1;
                self.state.intro_progress =
                    (self.intro_frames as f64 * self.params.intro_speed).min(1.0);
                self.state.time += self.params.auto_speed * self.params.intro_time_factor;
                if self.state.intro_progress >= 1.0 {
                    self.state.intro = false;
                    self.state.intro_progress = 1.0;
                    log::debug!("[driver] intro finished after {} frames", self.intro_frames);
                    self.refresh_at_bottom(&mut out);
                }
                self.request_frame(&mut out);
            }
            Phase::Scrolling => {
                self.state.time += if self.params.reversible_time {
                    self.state.velocity
                } else {
                    self.state.velocity.abs()
                };
                self.state.velocity *= self.params.scroll_decay;
                self.request_frame(&mut out);
            }
            Phase::AtBottom => {
                self.state.time += self.params.auto_speed;
                self.request_frame(&mut out);
            }
            Phase::GapTransitioning => self.request_frame(&mut out),
            Phase::Idle => log::debug!("[driver] idle at t={:.3}", self.state.time),
        }
        out
    }

    /// Withdraw the pending frame and settle timer.
    pub fn teardown(&mut self) -> Transition {
        let mut out = Transition::default();
        self.cancel_frame(&mut out);
        if self.settle.disarm().is_some() {
            out.commands.push(Command::CancelSettleTimer);
        }
        // the settle timer was the only thing that ends a gesture
        self.state.scrolling = false;
        self.state.velocity = 0.0;
        out
    }

    /// The host could not schedule the requested frame; let the next input try again.
    pub fn frame_lost(&mut self) {
        if self.state.frame_pending {
            log::warn!("[driver] requested frame was never scheduled");
            self.state.frame_pending = false;
        }
    }

    fn scaled_velocity(&self, delta: f64, divisor: f64) -> f64 {
        if delta == 0.0 || !delta.is_finite() {
            return 0.0;
        }
        delta.signum() * (delta.abs() / divisor).min(1.0) * self.params.max_scroll_speed
    }

    fn ease_gap(&mut self) {
        let target = self.target_gap();
        let eps = self.params.gap_epsilon;
        let gap = &mut self.state.bottom_gap;
        if (target - *gap).abs() > eps {
            *gap += (target - *gap) * self.params.gap_transition_speed;
            if (target - *gap).abs() <= eps {
                *gap = target;
            }
        } else {
            *gap = target;
        }
    }

    fn refresh_at_bottom(&mut self, out: &mut Transition) {
        let was = self.state.at_bottom;
        self.state.at_bottom = self.page.is_at_bottom(self.params.bottom_threshold);
        if self.state.at_bottom != was {
            log::debug!("[driver] at_bottom -> {}", self.state.at_bottom);
        }
        if self.state.at_bottom {
            self.request_frame(out);
        } else if was
            && !self.state.scrolling
            && self.state.velocity.abs() <= self.params.velocity_epsilon
            && self.phase() == Phase::Idle
        {
            self.cancel_frame(out);
        }
    }

    /// Make sure a frame is coming whenever there is still something to animate.
    fn sync(&mut self, out: &mut Transition) {
        if self.phase() != Phase::Idle {
            self.request_frame(out);
        }
    }

    fn request_frame(&mut self, out: &mut Transition) {
        if !self.state.frame_pending {
            self.state.frame_pending = true;
            out.commands.push(Command::RequestFrame);
        }
    }

    fn cancel_frame(&mut self, out: &mut Transition) {
        if self.state.frame_pending {
            self.state.frame_pending = false;
            out.commands.push(Command::CancelFrame);
        }
    }

    fn arm_settle(&mut self, out: &mut Transition) {
        let token = self.settle.arm();
        out.commands.push(Command::ArmSettleTimer {
            token,
            delay_ms: self.params.settle_delay_ms,
        });
    }
}
