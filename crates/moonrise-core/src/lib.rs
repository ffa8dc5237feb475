pub mod config;
pub mod constants;
pub mod geometry;
pub mod palette;
pub mod particles;
pub mod pixels;
pub mod scene;
pub mod spectrum;

pub use config::DrawParams;
pub use constants::*;
pub use geometry::{BarLayout, CubicBezier, HillCurves, Rect};
pub use palette::{GradientStop, Rgba};
pub use particles::{Particle, ParticleSet};
pub use scene::{Scene, Surface};
