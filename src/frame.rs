use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use waves_core::{
    AnimationDriver, Command, Event, FrameParams, FrameRenderer, FrameReport, SettleToken,
    WaveField,
};
use web_sys as web;

use crate::dom;
use crate::surface::CanvasSurface;

/// Everything the page-level callbacks mutate, plus the ids of the browser
/// frame and timer currently scheduled on the driver's behalf.
#[derive(Debug)]
pub struct Host {
    driver: AnimationDriver,
    field: WaveField,
    renderer: FrameRenderer,
    surface: CanvasSurface,
    frame_id: Option<i32>,
    timeout_id: Option<i32>,
    armed: Option<SettleToken>,
    frames_drawn: u64,
    last_report: FrameReport,
}

impl Host {
    pub fn new(
        driver: AnimationDriver,
        field: WaveField,
        renderer: FrameRenderer,
        surface: CanvasSurface,
    ) -> Self {
        Self {
            driver,
            field,
            renderer,
            surface,
            frame_id: None,
            timeout_id: None,
            armed: None,
            frames_drawn: 0,
            last_report: FrameReport::default(),
        }
    }

    fn draw(&mut self, params: &FrameParams) {
        self.last_report = self.renderer.render(&mut self.surface, &self.field, params);
        if self.frames_drawn == 0 {
            log::info!(
                "[frame] first frame: {} waves, {} dots",
                self.field.len(),
                self.last_report.dots
            );
        }
        self.frames_drawn += 1;
    }
}

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Connects the driver's commands to requestAnimationFrame and setTimeout.
#[derive(Clone)]
pub struct FrameLoop {
    host: Rc<RefCell<Host>>,
    on_frame: Callback,
    on_settle: Callback,
}

impl FrameLoop {
    pub fn new(host: Host) -> Self {
        let frame_loop = Self {
            host: Rc::new(RefCell::new(host)),
            on_frame: Rc::new(RefCell::new(None)),
            on_settle: Rc::new(RefCell::new(None)),
        };
        let tick_loop = frame_loop.clone();
        *frame_loop.on_frame.borrow_mut() = Some(Closure::wrap(
            Box::new(move || tick_loop.run_frame()) as Box<dyn FnMut()>
        ));
        let settle_loop = frame_loop.clone();
        *frame_loop.on_settle.borrow_mut() = Some(Closure::wrap(
            Box::new(move || settle_loop.run_settle()) as Box<dyn FnMut()>
        ));
        frame_loop
    }

    pub fn dispatch(&self, event: Event) {
        let transition = self.host.borrow_mut().driver.handle(event);
        self.apply(&transition.commands);
    }

    pub fn resize(&self, window: &web::Window) {
        dom::fit_canvas(self.host.borrow().surface.canvas(), window);
        self.dispatch(Event::Resize(dom::page_metrics(window)));
    }

    /// Sphere centres of the last drawn frame as `[x0, y0, x1, y1, ...]`.
    pub fn sphere_positions(&self) -> Vec<f64> {
        self.host
            .borrow()
            .last_report
            .spheres
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect()
    }

    fn run_frame(&self) {
        let transition = {
            let mut host = self.host.borrow_mut();
            host.frame_id = None;
            let transition = host.driver.tick();
            if let Some(params) = transition.frame {
                host.draw(&params);
            }
            transition
        };
        self.apply(&transition.commands);
    }

    fn run_settle(&self) {
        let token = {
            let mut host = self.host.borrow_mut();
            host.timeout_id = None;
            host.armed.take()
        };
        if let Some(token) = token {
            self.dispatch(Event::ScrollSettled(token));
        }
    }

    fn apply(&self, commands: &[Command]) {
        let Some(window) = web::window() else {
            if commands.contains(&Command::RequestFrame) {
                self.host.borrow_mut().driver.frame_lost();
            }
            return;
        };
        for command in commands {
            match *command {
                Command::RequestFrame => self.request_frame(&window),
                Command::CancelFrame => {
                    if let Some(id) = self.host.borrow_mut().frame_id.take() {
                        _ = window.cancel_animation_frame(id);
                    }
                }
                Command::ArmSettleTimer { token, delay_ms } => {
                    self.clear_settle_timer(&window);
                    self.arm_settle_timer(&window, token, delay_ms);
                }
                Command::CancelSettleTimer => self.clear_settle_timer(&window),
            }
        }
    }

    fn request_frame(&self, window: &web::Window) {
        let callback = self.on_frame.borrow();
        let Some(cb) = callback.as_ref() else {
            self.host.borrow_mut().driver.frame_lost();
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.host.borrow_mut().frame_id = Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                self.host.borrow_mut().driver.frame_lost();
            }
        }
    }

    fn arm_settle_timer(&self, window: &web::Window, token: SettleToken, delay_ms: u32) {
        let callback = self.on_settle.borrow();
        let Some(cb) = callback.as_ref() else {
            return;
        };
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms as i32,
        ) {
            Ok(id) => {
                let mut host = self.host.borrow_mut();
                host.timeout_id = Some(id);
                host.armed = Some(token);
            }
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    }

    fn clear_settle_timer(&self, window: &web::Window) {
        let mut host = self.host.borrow_mut();
        if let Some(id) = host.timeout_id.take() {
            window.clear_timeout_with_handle(id);
        }
        host.armed = None;
    }
}
