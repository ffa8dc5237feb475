//! Hill curves and bar placement.
//!
//! Both hills are cubic Bezier curves whose control points are fixed
//! fractions of the canvas size, so a session at any resolution derives its
//! own set. Bars ride the curves: each bin index maps to a parameter t and
//! the bar rect hangs from the evaluated curve point, lifted by the bin's
//! magnitude.

use crate::constants::{BAR_HEIGHT, BAR_MAGNITUDE_SCALE, BAR_RAISE, BAR_TOP_OFFSET};
use glam::Vec2;

/// Cubic Bezier segment evaluated with the standard Bernstein form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub start: Vec2,
    pub c1: Vec2,
    pub c2: Vec2,
    pub end: Vec2,
}

impl CubicBezier {
    pub fn new(start: Vec2, c1: Vec2, c2: Vec2, end: Vec2) -> Self {
        Self { start, c1, c2, end }
    }

    /// Point at parameter `t` (0 = start, 1 = end). Callers pass values
    /// derived from bin index / bin count; out-of-range t extrapolates.
    pub fn point(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        self.start * (u * u * u)
            + self.c1 * (3.0 * t * u * u)
            + self.c2 * (3.0 * t * t * u)
            + self.end * (t * t * t)
    }
}

/// The two hill silhouettes, derived from canvas dimensions.
#[derive(Debug, Clone, Copy)]
pub struct HillCurves {
    pub rear: CubicBezier,
    pub front: CubicBezier,
}

impl HillCurves {
    /// Control points are thirds of the canvas width; both curves sit on the
    /// bottom edge and dip to half height at the control points. The rear
    /// hill runs right-to-left past the right edge, the front one starts
    /// well left of the canvas.
    pub fn for_canvas(width: f32, height: f32) -> Self {
        let third = width / 3.0;
        let rear = CubicBezier::new(
            Vec2::new(third * 5.0, height),
            Vec2::new(third * 4.0, height / 2.0),
            Vec2::new(third * 2.0, height / 2.0),
            Vec2::new(third, height),
        );
        let front = CubicBezier::new(
            Vec2::new(-third * 2.0, height),
            Vec2::new(-third, height / 2.0),
            Vec2::new(third, height / 2.0),
            Vec2::new(third * 2.0, height),
        );
        Self { rear, front }
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Shared bar sizing for one frame.
#[derive(Debug, Clone, Copy)]
pub struct BarLayout {
    pub bar_width: f32,
    pub top_spacing: f32,
}

impl BarLayout {
    /// Bars tile the width left over after per-bin spacing; each half of the
    /// spectrum covers one hill, so the divisor is the midpoint.
    pub fn for_canvas(width: f32, height: f32, bin_count: usize, spacing: f32) -> Self {
        let midpoint = (bin_count / 2).max(1) as f32;
        let usable = width - bin_count as f32 * spacing;
        Self {
            bar_width: usable / midpoint,
            top_spacing: height / 2.0 + BAR_TOP_OFFSET,
        }
    }
}

/// Vertical lift applied to a bar rect for one bin magnitude. Constant
/// across bins when the snapshot is uniform.
#[inline]
pub fn bar_lift(layout: &BarLayout, magnitude: u8) -> f32 {
    layout.top_spacing - BAR_RAISE - magnitude as f32 * BAR_MAGNITUDE_SCALE
}

/// Rect for bin `i` over the rear hill (low half of the spectrum). The x
/// coordinate mirrors the curve point around the control-point midline so
/// the bars march left-to-right while t runs 0.5 -> 0.
pub fn rear_bar_rect(hills: &HillCurves, layout: &BarLayout, bins: &[u8], i: usize) -> Rect {
    let len = bins.len() as f32;
    let tx = 0.5 - i as f32 / len;
    let ty = 0.5 + i as f32 / len;
    let x = hills.rear.c1.x + hills.rear.c2.x - hills.rear.point(tx).x;
    let y = hills.rear.point(ty).y + bar_lift(layout, bins[i]);
    Rect {
        x,
        y,
        w: layout.bar_width,
        h: BAR_HEIGHT,
    }
}

/// Rect for bin `i` over the front hill (high half of the spectrum); both
/// coordinates use the same parameter.
pub fn front_bar_rect(hills: &HillCurves, layout: &BarLayout, bins: &[u8], i: usize) -> Rect {
    let len = bins.len() as f32;
    let t = i as f32 / len;
    let p = hills.front.point(t);
    Rect {
        x: p.x,
        y: p.y + bar_lift(layout, bins[i]),
        w: layout.bar_width,
        h: BAR_HEIGHT,
    }
}
