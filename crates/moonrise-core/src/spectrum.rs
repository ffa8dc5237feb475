//! Aggregate measures over a spectrum snapshot.
//!
//! A snapshot is a borrowed `&[u8]` of per-bin magnitudes (0-255), refreshed
//! in place once per tick by the sampler that owns it.

/// Sum of all bin magnitudes divided by `divisor`.
///
/// An all-zero snapshot (silence, or an analyser that has not produced data
/// yet) yields exactly 0.0.
#[inline]
pub fn energy(bins: &[u8], divisor: f32) -> f32 {
    let sum: f32 = bins.iter().map(|&b| b as f32).sum();
    sum / divisor
}
