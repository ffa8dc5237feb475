//! Scene renderer: one object per session, one `render` per tick.

use crate::config::DrawParams;
use crate::constants::{
    disc_center, DISC_BASE_RADIUS, DISC_ENERGY_DIVISOR, DISC_GLOW_BLUR, PARTICLE_ENERGY_DIVISOR,
    PARTICLE_GLOW_BLUR,
};
use crate::geometry::{front_bar_rect, rear_bar_rect, BarLayout, CubicBezier, HillCurves, Rect};
use crate::palette::{self, GradientStop, Rgba};
use crate::particles::{motion_drive, ParticleSet};
use crate::pixels;
use crate::spectrum;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Drawing operations the renderer needs from a pixel surface. The web
/// front end implements this over `CanvasRenderingContext2d`; tests use a
/// recording implementation backed by a plain byte buffer.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill the whole surface with a top-to-bottom linear gradient.
    fn fill_vertical_gradient(&mut self, stops: &[GradientStop]);

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Fill the shape bounded by the curve and the implicit straight edge
    /// back from its end point to its start point.
    fn fill_hill(&mut self, curve: &CubicBezier, color: Rgba);

    /// Filled circle with a soft glow of `blur` pixels; the color's alpha
    /// applies to the whole shape.
    fn fill_glow_circle(&mut self, center: Vec2, radius: f32, color: Rgba, blur: f64);

    /// Hand the full RGBA frame to `edit` and write the result back.
    fn edit_pixels(&mut self, edit: &mut dyn FnMut(&mut [u8], u32));
}

/// Per-session rendering state: canvas dimensions, the hill curves and disc
/// center derived from them, the particle swarm, and the rng feeding spawns
/// and the noise pass.
pub struct Scene {
    width: f32,
    height: f32,
    hills: HillCurves,
    disc_center: Vec2,
    particles: ParticleSet,
    rng: StdRng,
}

impl Scene {
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        let (w, h) = (width as f32, height as f32);
        log::info!("[scene] {}x{} session, seed {}", width, height, seed);
        Self {
            width: w,
            height: h,
            hills: HillCurves::for_canvas(w, h),
            disc_center: disc_center(w, h),
            particles: ParticleSet::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn hills(&self) -> &HillCurves {
        &self.hills
    }

    pub fn disc_center(&self) -> Vec2 {
        self.disc_center
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    /// Append a burst of particles at the disc center. The frame loop paces
    /// how often and how many.
    pub fn spawn_particles(&mut self, count: u32) {
        self.particles
            .spawn(count, self.disc_center, &mut self.rng);
    }

    /// Compose one frame from the spectrum snapshot and the current config.
    ///
    /// Painter's order: sky, rear bars, rear hill, front bars, front hill,
    /// particles, disc, then any enabled pixel passes over the whole frame,
    /// then pruning. Hills and sky always draw; everything else is gated.
    pub fn render<S: Surface>(&mut self, surface: &mut S, bins: &[u8], params: &DrawParams) {
        surface.fill_vertical_gradient(&palette::background_stops(params.night));

        let layout = BarLayout::for_canvas(self.width, self.height, bins.len(), params.bar_spacing);
        let midpoint = bins.len() / 2;
        let draw_bars = params.show_bars && !bins.is_empty();

        if draw_bars {
            // low bins ride the rear hill, walked from the midpoint down
            for i in (0..=midpoint).rev() {
                surface.fill_rect(
                    rear_bar_rect(&self.hills, &layout, bins, i),
                    palette::REAR_BAR_COLOR,
                );
            }
        }
        surface.fill_hill(&self.hills.rear, palette::rear_hill_color(params.night));

        if draw_bars {
            // high bins ride the front hill
            for i in midpoint.saturating_sub(1)..bins.len() {
                surface.fill_rect(
                    front_bar_rect(&self.hills, &layout, bins, i),
                    palette::FRONT_BAR_COLOR,
                );
            }
        }
        surface.fill_hill(&self.hills.front, palette::front_hill_color(params.night));

        if params.show_particles {
            let energy = spectrum::energy(bins, PARTICLE_ENERGY_DIVISOR);
            let drive = motion_drive(energy);
            self.particles.advance_all(drive, self.width, self.height);
            let color = palette::particle_color(params.night)
                .scaled(palette::particle_intensity(energy));
            for p in self.particles.iter().filter(|p| p.live) {
                surface.fill_glow_circle(
                    p.position,
                    p.radius,
                    color.with_alpha(p.alpha),
                    PARTICLE_GLOW_BLUR,
                );
            }
        }

        if params.show_disc {
            let radius = DISC_BASE_RADIUS + spectrum::energy(bins, DISC_ENERGY_DIVISOR);
            surface.fill_glow_circle(
                self.disc_center,
                radius,
                palette::disc_color(params.night),
                DISC_GLOW_BLUR,
            );
        }

        if params.any_pixel_pass() {
            let rng = &mut self.rng;
            surface.edit_pixels(&mut |data, width| pixels::apply(data, width, params, rng));
        }

        self.particles.prune();
    }
}
