//! Particle swarm: spawn, per-tick motion, expiry, pruning.

use crate::constants::{
    PARTICLE_ALPHA_MAX, PARTICLE_ALPHA_MIN, PARTICLE_FALLBACK_DIRECTION, PARTICLE_RADIUS_MAX,
    PARTICLE_RADIUS_MIN, PARTICLE_SPEED_MAX, PARTICLE_SPEED_MIN,
};
use glam::Vec2;
use rand::Rng;

/// One swarm member. Radius, direction, speed, and alpha are fixed at spawn;
/// only position and liveness change afterwards, through [`Particle::advance`].
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Vec2,
    pub radius: f32,
    pub direction: Vec2,
    pub speed: f32,
    pub alpha: f32,
    pub live: bool,
}

impl Particle {
    /// Integrate one tick of motion and update liveness. `drive` is the
    /// spectrum-energy multiplier (see [`motion_drive`]); a particle dies
    /// once it has left the canvas by more than its own radius on any side.
    pub fn advance(&mut self, drive: f32, width: f32, height: f32) {
        self.position += self.direction * self.speed * drive;
        let r = self.radius;
        let out = self.position.x < -r
            || self.position.x > width + r
            || self.position.y < -r
            || self.position.y > height + r;
        if out {
            self.live = false;
        }
    }
}

/// Speed multiplier for a tick: the aggregate energy, floored to 1.0 under
/// exact silence so the swarm keeps drifting at base speed.
#[inline]
pub fn motion_drive(energy: f32) -> f32 {
    if energy == 0.0 {
        1.0
    } else {
        energy
    }
}

/// Unit direction from two samples in [-1, 1]. Only the degenerate case
/// where both samples are exactly 0 falls back to the fixed leftward
/// direction; everything else normalizes.
#[inline]
pub fn direction_from_samples(x: f32, y: f32) -> Vec2 {
    if x == 0.0 && y == 0.0 {
        PARTICLE_FALLBACK_DIRECTION
    } else {
        Vec2::new(x, y).normalize()
    }
}

/// Uniform random unit direction.
pub fn random_unit_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let x: f32 = rng.gen_range(-1.0..=1.0);
    let y: f32 = rng.gen_range(-1.0..=1.0);
    direction_from_samples(x, y)
}

/// Insertion-ordered set of particles. Order never matters for rendering,
/// but every live particle is visited each tick.
#[derive(Debug, Default)]
pub struct ParticleSet {
    particles: Vec<Particle>,
}

impl ParticleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `count` fresh particles at `origin` with randomized attributes.
    /// No cap: callers pace spawn volume.
    pub fn spawn<R: Rng + ?Sized>(&mut self, count: u32, origin: Vec2, rng: &mut R) {
        self.particles.reserve(count as usize);
        for _ in 0..count {
            self.particles.push(Particle {
                position: origin,
                radius: rng.gen_range(PARTICLE_RADIUS_MIN..=PARTICLE_RADIUS_MAX),
                direction: random_unit_direction(rng),
                speed: rng.gen_range(PARTICLE_SPEED_MIN..=PARTICLE_SPEED_MAX),
                alpha: rng.gen_range(PARTICLE_ALPHA_MIN..=PARTICLE_ALPHA_MAX),
                live: true,
            });
        }
    }

    /// Advance every live particle by one tick.
    pub fn advance_all(&mut self, drive: f32, width: f32, height: f32) {
        for p in self.particles.iter_mut().filter(|p| p.live) {
            p.advance(drive, width, height);
        }
    }

    /// Drop everything marked dead; runs after drawing, once per tick.
    pub fn prune(&mut self) {
        self.particles.retain(|p| p.live);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
