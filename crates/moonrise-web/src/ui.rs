use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::audio::AudioGraph;
use crate::constants::{
    BARS_TOGGLE_ID, BAR_SPACING_SLIDER_ID, DISC_TOGGLE_ID, DISTORTION_TOGGLE_ID, EMBOSS_TOGGLE_ID,
    FULLSCREEN_BUTTON_ID, INVERT_TOGGLE_ID, NIGHT_TOGGLE_ID, NOISE_TOGGLE_ID, PARTICLES_TOGGLE_ID,
    PLAY_BUTTON_ID, SPAWN_BURST_SLIDER_ID, SPAWN_INTERVAL_SLIDER_ID, TRACK_SELECT_ID,
    VOLUME_LABEL_ID, VOLUME_SLIDER_ID,
};
use crate::dom;
use moonrise_core::DrawParams;

/// Everything the control panel needs. Shared pieces arrive as Rc so the
/// closures and the frame loop see the same state.
pub struct ControlWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub audio: Rc<AudioGraph>,
    pub params: Rc<RefCell<DrawParams>>,
}

pub fn wire_controls(w: ControlWiring) {
    // Transport state lives on this side; the element has no reliable
    // synchronous playing flag.
    let playing = Rc::new(RefCell::new(false));

    // play / pause
    {
        let audio_play = w.audio.clone();
        let playing_play = playing.clone();
        let button = w.document.get_element_by_id(PLAY_BUTTON_ID);
        dom::add_click_listener(&w.document, PLAY_BUTTON_ID, move || {
            audio_play.resume_if_suspended();
            let mut playing = playing_play.borrow_mut();
            if *playing {
                audio_play.pause();
            } else {
                audio_play.play();
            }
            *playing = !*playing;
            if let Some(el) = &button {
                el.set_text_content(Some(if *playing { "Pause" } else { "Play" }));
            }
            log::info!(
                "[ui] playback {}",
                if *playing { "started" } else { "paused" }
            );
        });
    }

    // fullscreen
    {
        let canvas_fs = w.canvas.clone();
        dom::add_click_listener(&w.document, FULLSCREEN_BUTTON_ID, move || {
            let _ = canvas_fs.request_fullscreen();
        });
    }

    // volume slider with a percentage label
    if let Some(slider) = dom::input_by_id(&w.document, VOLUME_SLIDER_ID) {
        let label = w.document.get_element_by_id(VOLUME_LABEL_ID);
        apply_volume(&w.audio, &slider, label.as_ref());
        let audio_vol = w.audio.clone();
        let slider_vol = slider.clone();
        dom::add_input_listener(&w.document, VOLUME_SLIDER_ID, move || {
            apply_volume(&audio_vol, &slider_vol, label.as_ref());
        });
    }

    // track selector; swapping the source stops the element, so playback
    // state falls back to stopped until play is pressed again
    if let Some(select) = dom::select_by_id(&w.document, TRACK_SELECT_ID) {
        let audio_track = w.audio.clone();
        let playing_track = playing.clone();
        let select_track = select.clone();
        let button = w.document.get_element_by_id(PLAY_BUTTON_ID);
        dom::add_change_listener(&w.document, TRACK_SELECT_ID, move || {
            audio_track.load_track(&select_track.value());
            let mut playing = playing_track.borrow_mut();
            if *playing {
                *playing = false;
                if let Some(el) = &button {
                    el.set_text_content(Some("Play"));
                }
            }
        });
    }

    // distortion feeds the audio graph rather than the draw params
    if let Some(checkbox) = dom::input_by_id(&w.document, DISTORTION_TOGGLE_ID) {
        checkbox.set_checked(false);
        let audio_dist = w.audio.clone();
        let checkbox_dist = checkbox.clone();
        dom::add_change_listener(&w.document, DISTORTION_TOGGLE_ID, move || {
            audio_dist.set_distortion(checkbox_dist.checked());
        });
    }

    // draw toggles
    wire_toggle(&w.document, BARS_TOGGLE_ID, &w.params, |p| p.show_bars, |p, on| {
        p.show_bars = on
    });
    wire_toggle(&w.document, DISC_TOGGLE_ID, &w.params, |p| p.show_disc, |p, on| {
        p.show_disc = on
    });
    wire_toggle(
        &w.document,
        PARTICLES_TOGGLE_ID,
        &w.params,
        |p| p.show_particles,
        |p, on| p.show_particles = on,
    );
    wire_toggle(&w.document, NOISE_TOGGLE_ID, &w.params, |p| p.show_noise, |p, on| {
        p.show_noise = on
    });
    wire_toggle(
        &w.document,
        INVERT_TOGGLE_ID,
        &w.params,
        |p| p.show_invert,
        |p, on| p.show_invert = on,
    );
    wire_toggle(
        &w.document,
        EMBOSS_TOGGLE_ID,
        &w.params,
        |p| p.show_emboss,
        |p, on| p.show_emboss = on,
    );
    wire_toggle(&w.document, NIGHT_TOGGLE_ID, &w.params, |p| p.night, |p, on| {
        p.night = on
    });

    // numeric tunables
    wire_slider(
        &w.document,
        SPAWN_BURST_SLIDER_ID,
        &w.params,
        |p| p.spawn_burst as f64,
        |p, v| p.spawn_burst = v.max(0.0) as u32,
    );
    wire_slider(
        &w.document,
        SPAWN_INTERVAL_SLIDER_ID,
        &w.params,
        |p| p.spawn_interval_sec as f64,
        |p, v| p.spawn_interval_sec = v.max(0.0) as f32,
    );
    wire_slider(
        &w.document,
        BAR_SPACING_SLIDER_ID,
        &w.params,
        |p| p.bar_spacing as f64,
        |p, v| p.bar_spacing = v.max(0.0) as f32,
    );

    log::info!("[ui] controls wired");
}

fn apply_volume(audio: &AudioGraph, slider: &web::HtmlInputElement, label: Option<&web::Element>) {
    let value = slider.value_as_number() as f32;
    audio.set_volume(value);
    if let Some(el) = label {
        // slider runs 0..2 around the 0.5 default, label shows 0..100
        let percent = (value / 2.0 * 100.0).round() as i32;
        el.set_text_content(Some(&format!("{}%", percent)));
    }
}

fn wire_toggle(
    document: &web::Document,
    id: &str,
    params: &Rc<RefCell<DrawParams>>,
    read: fn(&DrawParams) -> bool,
    write: fn(&mut DrawParams, bool),
) {
    if let Some(checkbox) = dom::input_by_id(document, id) {
        checkbox.set_checked(read(&params.borrow()));
        let params_t = params.clone();
        let checkbox_t = checkbox.clone();
        dom::add_change_listener(document, id, move || {
            write(&mut params_t.borrow_mut(), checkbox_t.checked());
        });
    }
}

fn wire_slider(
    document: &web::Document,
    id: &str,
    params: &Rc<RefCell<DrawParams>>,
    read: fn(&DrawParams) -> f64,
    write: fn(&mut DrawParams, f64),
) {
    if let Some(slider) = dom::input_by_id(document, id) {
        slider.set_value_as_number(read(&params.borrow()));
        let params_s = params.clone();
        let slider_s = slider.clone();
        dom::add_input_listener(document, id, move || {
            write(&mut params_s.borrow_mut(), slider_s.value_as_number());
        });
    }
}
