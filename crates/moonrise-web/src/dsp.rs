// Transfer-curve maths for the distortion stage.
//
// Kept free of web types so the host-side test suite can exercise it
// directly.

/// Samples in the wave-shaper transfer curve.
pub const DISTORTION_SAMPLES: usize = 256;

/// Drive constant. Larger values bend the curve harder around zero.
pub const DISTORTION_K: f32 = 20.0;

/// Build the odd-symmetric transfer curve handed to the wave shaper.
///
/// Input positions span [-1, 1] across `n_samples` evenly spaced points
/// and each output is `(3 + k) * x * 20deg / (PI + k * |x|)`.
pub fn distortion_curve(n_samples: usize, k: f32) -> Vec<f32> {
    let deg = std::f32::consts::PI / 180.0;
    let mut curve = Vec::with_capacity(n_samples);
    for i in 0..n_samples {
        let x = i as f32 * 2.0 / n_samples as f32 - 1.0;
        curve.push((3.0 + k) * x * 20.0 * deg / (std::f32::consts::PI + k * x.abs()));
    }
    curve
}
