// Tests for spectrum energy, the palette helpers, and the relationships
// between the tuning constants.

use moonrise_core::constants::{
    BIN_COUNT, DISC_ENERGY_DIVISOR, FFT_SIZE, NOISE_PIXEL_PROBABILITY, PARTICLE_ALPHA_MAX,
    PARTICLE_ALPHA_MIN, PARTICLE_ENERGY_DIVISOR, PARTICLE_RADIUS_MAX, PARTICLE_RADIUS_MIN,
    PARTICLE_SPEED_MAX, PARTICLE_SPEED_MIN,
};
use moonrise_core::palette::{background_stops, particle_intensity};
use moonrise_core::spectrum::energy;
use moonrise_core::Rgba;

#[test]
fn energy_of_silence_is_exactly_zero() {
    assert_eq!(energy(&[], DISC_ENERGY_DIVISOR), 0.0);
    assert_eq!(energy(&[0u8; 128], DISC_ENERGY_DIVISOR), 0.0);
}

#[test]
fn energy_of_a_saturated_spectrum_hits_the_ceiling() {
    let bins = [255u8; 128];
    let e = energy(&bins, DISC_ENERGY_DIVISOR);
    assert!((e - 32.64).abs() < 1e-3, "saturated energy was {e}");
}

#[test]
fn energy_scales_inversely_with_the_divisor() {
    let bins = [100u8; 64];
    let half = energy(&bins, 2000.0);
    let full = energy(&bins, 1000.0);
    assert!((full - half * 2.0).abs() < 1e-4);
}

#[test]
fn particle_intensity_has_a_floor_and_a_ceiling() {
    assert_eq!(particle_intensity(0.0), 0.35);
    assert_eq!(particle_intensity(20.0), 1.0);
    assert_eq!(particle_intensity(1000.0), 1.0);

    let mut prev = particle_intensity(0.0);
    for step in 1..=13 {
        let v = particle_intensity(step as f32);
        assert!(v >= prev, "intensity dipped at energy {step}");
        prev = v;
    }
}

#[test]
fn background_stops_cover_the_full_gradient_in_both_modes() {
    for night in [true, false] {
        let stops = background_stops(night);
        assert_eq!(stops.len(), 5);
        assert_eq!(stops[0].offset, 0.0);
        assert_eq!(stops[4].offset, 1.0);
        for pair in stops.windows(2) {
            assert!(pair[0].offset < pair[1].offset);
        }
    }
}

#[test]
fn night_sky_fades_to_black_at_both_edges() {
    let stops = background_stops(true);
    assert_eq!(stops[0].color, Rgba::rgb(0, 0, 0));
    assert_eq!(stops[4].color, Rgba::rgb(0, 0, 0));
    assert_eq!(stops[2].color, Rgba::rgb(107, 126, 255));
}

#[test]
fn scaled_darkens_without_touching_alpha() {
    let c = Rgba::rgba(200, 100, 50, 0.7);
    let half = c.scaled(0.5);
    assert_eq!(half.r, 100);
    assert_eq!(half.g, 50);
    assert_eq!(half.b, 25);
    assert_eq!(half.a, 0.7);

    // factors outside 0..=1 clamp instead of brightening or negating
    assert_eq!(c.scaled(2.0).r, 200);
    assert_eq!(c.scaled(-1.0).r, 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_hold_their_relationships() {
    assert_eq!(BIN_COUNT, (FFT_SIZE / 2) as usize);
    assert!(FFT_SIZE.is_power_of_two());

    assert!(NOISE_PIXEL_PROBABILITY > 0.0 && NOISE_PIXEL_PROBABILITY < 1.0);
    assert!(PARTICLE_RADIUS_MIN < PARTICLE_RADIUS_MAX);
    assert!(PARTICLE_SPEED_MIN < PARTICLE_SPEED_MAX);
    assert!(PARTICLE_ALPHA_MIN < PARTICLE_ALPHA_MAX);
    assert!(PARTICLE_ALPHA_MIN >= 0.0 && PARTICLE_ALPHA_MAX <= 1.0);

    // both consumers divide the same raw magnitude sum
    assert_eq!(DISC_ENERGY_DIVISOR, PARTICLE_ENERGY_DIVISOR);
}
