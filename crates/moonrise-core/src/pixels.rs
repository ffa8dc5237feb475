//! Full-frame pixel passes over an RGBA byte buffer.
//!
//! Each pass walks the buffer in place, one pass per enabled effect, in
//! noise -> invert -> emboss order. Alpha bytes are never touched.

use crate::config::DrawParams;
use crate::constants::NOISE_PIXEL_PROBABILITY;
use rand::Rng;

/// Run the enabled passes. Callers should skip the surface read/write
/// entirely when [`DrawParams::any_pixel_pass`] is false.
pub fn apply<R: Rng + ?Sized>(data: &mut [u8], width: u32, params: &DrawParams, rng: &mut R) {
    if params.show_noise {
        noise(data, rng);
    }
    if params.show_invert {
        invert(data);
    }
    if params.show_emboss {
        emboss(data, width);
    }
}

/// Force a small random fraction of pixels to pure red.
pub fn noise<R: Rng + ?Sized>(data: &mut [u8], rng: &mut R) {
    for px in data.chunks_exact_mut(4) {
        if rng.gen_bool(NOISE_PIXEL_PROBABILITY) {
            px[0] = 255;
            px[1] = 0;
            px[2] = 0;
        }
    }
}

/// Photographic negative of the color channels. Involutive.
pub fn invert(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        px[0] = 255 - px[0];
        px[1] = 255 - px[1];
        px[2] = 255 - px[2];
    }
}

/// Relief effect: every color byte becomes `127 + 2*current - right - below`,
/// clamped to a byte, mutating the buffer as it goes rather than convolving
/// a copy. A missing neighbor (bottom row, final pixel) forces the byte to 0.
pub fn emboss(data: &mut [u8], width: u32) {
    let row = width as usize * 4;
    for i in 0..data.len() {
        if i % 4 == 3 {
            continue;
        }
        data[i] = match (data.get(i + 4).copied(), data.get(i + row).copied()) {
            (Some(right), Some(below)) => {
                (127 + 2 * data[i] as i32 - right as i32 - below as i32).clamp(0, 255) as u8
            }
            _ => 0,
        };
    }
}
