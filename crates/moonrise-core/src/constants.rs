use glam::Vec2;

// Scene tuning constants shared by the renderer and the web front end.

// Spectrum analysis
pub const FFT_SIZE: u32 = 256; // analyser window; bins = half of this
pub const BIN_COUNT: usize = (FFT_SIZE / 2) as usize;

// Frequency bars
pub const BAR_HEIGHT: f32 = 200.0; // fixed rect height; hills cover the base
pub const BAR_MAGNITUDE_SCALE: f32 = 0.25; // px of lift per magnitude unit
pub const BAR_RAISE: f32 = 256.0; // lifts bars from the hill baseline to the crest
pub const BAR_TOP_OFFSET: f32 = 40.0; // top spacing = height/2 + this
pub const DEFAULT_BAR_SPACING: f32 = 3.0;

// Reactive disc
pub const DISC_BASE_RADIUS: f32 = 60.0;
pub const DISC_ENERGY_DIVISOR: f32 = 1000.0;
pub const DISC_GLOW_BLUR: f64 = 50.0;
pub const DISC_CENTER_X_FRAC: f32 = 0.75; // (600, 100) on the 800x600 canvas
pub const DISC_CENTER_Y_FRAC: f32 = 1.0 / 6.0;

// Particles
pub const PARTICLE_ENERGY_DIVISOR: f32 = 1000.0;
pub const PARTICLE_RADIUS_MIN: f32 = 1.5;
pub const PARTICLE_RADIUS_MAX: f32 = 4.0;
pub const PARTICLE_SPEED_MIN: f32 = 0.5;
pub const PARTICLE_SPEED_MAX: f32 = 2.5;
pub const PARTICLE_ALPHA_MIN: f32 = 0.25;
pub const PARTICLE_ALPHA_MAX: f32 = 0.85;
pub const PARTICLE_GLOW_BLUR: f64 = 12.0;
pub const PARTICLE_FALLBACK_DIRECTION: Vec2 = Vec2::new(-1.0, 0.0);

// Pixel passes
pub const NOISE_PIXEL_PROBABILITY: f64 = 0.05;

// Spawn pacing defaults
pub const DEFAULT_SPAWN_BURST: u32 = 3;
pub const DEFAULT_SPAWN_INTERVAL_SEC: f32 = 0.25;

#[inline]
pub fn disc_center(width: f32, height: f32) -> Vec2 {
    Vec2::new(width * DISC_CENTER_X_FRAC, height * DISC_CENTER_Y_FRAC)
}
