use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::SpectrumSampler;
use crate::canvas::CanvasSurface;
use crate::pacing::SpawnPacer;
use moonrise_core::{DrawParams, Scene};

/// Everything one animation tick touches.
pub struct FrameContext {
    pub sampler: SpectrumSampler,
    pub scene: Scene,
    pub surface: CanvasSurface,
    pub pacer: SpawnPacer,
    pub params: Rc<RefCell<DrawParams>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        let params = *self.params.borrow();

        self.sampler.sample();

        // Spawning pauses while the particle layer is hidden.
        if params.show_particles {
            let burst = self
                .pacer
                .tick(dt_sec, params.spawn_interval_sec, params.spawn_burst);
            if burst > 0 {
                self.scene.spawn_particles(burst);
            }
        }

        self.scene
            .render(&mut self.surface, self.sampler.bins(), &params);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
