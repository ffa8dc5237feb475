#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use moonrise_core::{DrawParams, Scene};

pub mod audio;
pub mod canvas;
pub mod constants;
pub mod dom;
pub mod dsp;
pub mod frame;
pub mod pacing;
pub mod ui;

use audio::{AudioGraph, SpectrumSampler};
use canvas::CanvasSurface;
use constants::{CANVAS_HEIGHT, CANVAS_ID, CANVAS_WIDTH, DEFAULT_TRACK};
use frame::FrameContext;
use pacing::SpawnPacer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("moonrise-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // The context starts suspended under autoplay policy; the play button
    // resumes it on the first gesture.
    let audio = Rc::new(
        AudioGraph::new(DEFAULT_TRACK).map_err(|_| anyhow::anyhow!("audio graph init failed"))?,
    );
    let sampler = SpectrumSampler::new(audio.analyser());
    let params = Rc::new(RefCell::new(DrawParams::default()));

    ui::wire_controls(ui::ControlWiring {
        document,
        canvas: canvas.clone(),
        audio: audio.clone(),
        params: params.clone(),
    });

    let scene = Scene::new(CANVAS_WIDTH, CANVAS_HEIGHT, js_sys::Date::now() as u64);
    let surface = CanvasSurface::new(ctx, CANVAS_WIDTH, CANVAS_HEIGHT);

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        sampler,
        scene,
        surface,
        pacer: SpawnPacer::new(),
        params,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    log::info!("[init] visualizer running at {}x{}", CANVAS_WIDTH, CANVAS_HEIGHT);
    Ok(())
}
