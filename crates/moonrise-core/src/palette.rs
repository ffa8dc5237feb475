//! Colors for both display modes.
//!
//! Night is the default look: a deep blue gradient sky, dark hills, a pale
//! moon. Day swaps in sky blues, the brighter greens, and a warm sun.

use smallvec::SmallVec;

/// RGB bytes plus a 0..=1 alpha, the shape every fill style needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with channels scaled by `factor` (clamped to 0..=1).
    pub fn scaled(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * f) as u8,
            g: (self.g as f32 * f) as u8,
            b: (self.b as f32 * f) as u8,
            a: self.a,
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// One stop of a vertical gradient; offset runs 0 (top) to 1 (bottom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

const fn stop(offset: f32, color: Rgba) -> GradientStop {
    GradientStop { offset, color }
}

pub type GradientStops = SmallVec<[GradientStop; 5]>;

/// Sky gradient stops for the given mode.
pub fn background_stops(night: bool) -> GradientStops {
    if night {
        SmallVec::from_slice(&[
            stop(0.0, Rgba::rgb(0, 0, 0)),
            stop(0.25, Rgba::rgb(0, 27, 209)),
            stop(0.5, Rgba::rgb(107, 126, 255)),
            stop(0.75, Rgba::rgb(0, 27, 209)),
            stop(1.0, Rgba::rgb(0, 0, 0)),
        ])
    } else {
        SmallVec::from_slice(&[
            stop(0.0, Rgba::rgb(64, 130, 220)),
            stop(0.25, Rgba::rgb(120, 180, 255)),
            stop(0.5, Rgba::rgb(215, 236, 255)),
            stop(0.75, Rgba::rgb(120, 180, 255)),
            stop(1.0, Rgba::rgb(64, 130, 220)),
        ])
    }
}

pub fn rear_hill_color(night: bool) -> Rgba {
    if night {
        Rgba::rgb(18, 52, 40)
    } else {
        Rgba::rgb(32, 90, 69)
    }
}

pub fn front_hill_color(night: bool) -> Rgba {
    if night {
        Rgba::rgb(26, 73, 56)
    } else {
        Rgba::rgb(45, 126, 96)
    }
}

/// Moon by night, sun by day.
pub fn disc_color(night: bool) -> Rgba {
    if night {
        Rgba::rgb(214, 228, 255)
    } else {
        Rgba::rgb(253, 254, 200)
    }
}

pub fn particle_color(night: bool) -> Rgba {
    if night {
        Rgba::rgb(237, 235, 255)
    } else {
        Rgba::rgb(255, 249, 189)
    }
}

/// Rear bars sit behind a hill and draw at half alpha; front bars are solid.
pub const REAR_BAR_COLOR: Rgba = Rgba::rgba(147, 192, 163, 0.5);
pub const FRONT_BAR_COLOR: Rgba = Rgba::rgb(147, 192, 163);

/// Brightness multiplier for particle fills: louder audio pushes toward
/// full intensity, silence keeps a visible floor.
#[inline]
pub fn particle_intensity(energy: f32) -> f32 {
    (0.35 + energy / 20.0).clamp(0.35, 1.0)
}
