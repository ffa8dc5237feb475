// Tests for the frame renderer: painter's order, layer gating, and the
// disc's reaction to spectrum energy, observed through a recording surface.

use glam::Vec2;
use moonrise_core::constants::{DISC_BASE_RADIUS, DISC_GLOW_BLUR};
use moonrise_core::{DrawParams, GradientStop, Rect, Rgba, Scene, Surface};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Gradient { stops: usize },
    Rect { rect: Rect, color: Rgba },
    Hill,
    Glow { center: Vec2, radius: f32, blur: f64 },
    Pixels,
}

/// Surface that records the draw calls instead of rasterizing them.
#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Recorder {
    fn glow_ops(&self) -> Vec<(Vec2, f32, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Glow {
                    center,
                    radius,
                    blur,
                } => Some((*center, *radius, *blur)),
                _ => None,
            })
            .collect()
    }

    fn rect_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Rect { .. }))
            .count()
    }
}

impl Surface for Recorder {
    fn width(&self) -> u32 {
        WIDTH
    }

    fn height(&self) -> u32 {
        HEIGHT
    }

    fn fill_vertical_gradient(&mut self, stops: &[GradientStop]) {
        self.ops.push(Op::Gradient { stops: stops.len() });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(Op::Rect { rect, color });
    }

    fn fill_hill(&mut self, _curve: &moonrise_core::CubicBezier, _color: Rgba) {
        self.ops.push(Op::Hill);
    }

    fn fill_glow_circle(&mut self, center: Vec2, radius: f32, _color: Rgba, blur: f64) {
        self.ops.push(Op::Glow {
            center,
            radius,
            blur,
        });
    }

    fn edit_pixels(&mut self, edit: &mut dyn FnMut(&mut [u8], u32)) {
        let mut data = vec![0u8; (WIDTH * HEIGHT * 4) as usize];
        edit(&mut data, WIDTH);
        self.ops.push(Op::Pixels);
    }
}

fn make_scene() -> Scene {
    Scene::new(WIDTH, HEIGHT, 42)
}

#[test]
fn painters_order_is_sky_bars_hills_particles_disc() {
    let mut scene = make_scene();
    scene.spawn_particles(4);
    let mut surface = Recorder::default();
    let bins = [128u8; 128];
    scene.render(&mut surface, &bins, &DrawParams::default());

    assert_eq!(surface.ops[0], Op::Gradient { stops: 5 });

    // 65 rear bars, hill, 65 front bars, hill
    let rear = &surface.ops[1..66];
    assert!(rear.iter().all(|op| matches!(op, Op::Rect { .. })));
    assert_eq!(surface.ops[66], Op::Hill);
    let front = &surface.ops[67..132];
    assert!(front.iter().all(|op| matches!(op, Op::Rect { .. })));
    assert_eq!(surface.ops[132], Op::Hill);

    // 4 particles then the disc, nothing after
    let glows = surface.glow_ops();
    assert_eq!(glows.len(), 5);
    assert!(matches!(surface.ops.last(), Some(Op::Glow { .. })));
    assert_eq!(glows[4].2, DISC_GLOW_BLUR);
}

#[test]
fn rear_bars_draw_at_half_alpha_front_bars_solid() {
    let mut scene = make_scene();
    let mut surface = Recorder::default();
    let bins = [64u8; 128];
    scene.render(&mut surface, &bins, &DrawParams::default());

    let colors: Vec<Rgba> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Rect { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(colors.len(), 130);
    for c in &colors[..65] {
        assert_eq!(c.a, 0.5, "rear bars must draw at half alpha");
    }
    for c in &colors[65..] {
        assert_eq!(c.a, 1.0, "front bars must draw solid");
    }
}

#[test]
fn disc_radius_follows_aggregate_energy() {
    let mut scene = make_scene();
    let mut surface = Recorder::default();
    let bins = [128u8; 128];
    let params = DrawParams {
        show_particles: false,
        ..DrawParams::default()
    };
    scene.render(&mut surface, &bins, &params);

    let glows = surface.glow_ops();
    assert_eq!(glows.len(), 1);
    let (center, radius, _) = glows[0];
    // 128 bins * 128 / 1000 on top of the base radius
    assert!((radius - 76.384).abs() < 1e-3, "disc radius was {radius}");
    assert!((center - Vec2::new(600.0, 100.0)).length() < 1e-3);
}

#[test]
fn silence_leaves_the_disc_at_base_radius() {
    let mut scene = make_scene();
    let mut surface = Recorder::default();
    let bins = [0u8; 128];
    let params = DrawParams {
        show_particles: false,
        ..DrawParams::default()
    };
    scene.render(&mut surface, &bins, &params);

    let glows = surface.glow_ops();
    assert_eq!(glows[0].1, DISC_BASE_RADIUS);
}

#[test]
fn disabled_layers_never_reach_the_surface() {
    let mut scene = make_scene();
    scene.spawn_particles(3);
    let mut surface = Recorder::default();
    let bins = [100u8; 128];
    let params = DrawParams {
        show_bars: false,
        show_disc: false,
        show_particles: false,
        ..DrawParams::default()
    };
    scene.render(&mut surface, &bins, &params);

    // sky and the two hills always draw
    assert_eq!(
        surface.ops,
        vec![Op::Gradient { stops: 5 }, Op::Hill, Op::Hill]
    );
}

#[test]
fn pixel_passes_run_after_every_shape() {
    let mut scene = make_scene();
    let mut surface = Recorder::default();
    let bins = [100u8; 128];
    let params = DrawParams {
        show_noise: true,
        ..DrawParams::default()
    };
    scene.render(&mut surface, &bins, &params);

    assert_eq!(surface.ops.last(), Some(&Op::Pixels));
    // exactly one read-modify-write regardless of how many passes are on
    let pixel_ops = surface
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Pixels))
        .count();
    assert_eq!(pixel_ops, 1);
}

#[test]
fn pixel_passes_are_skipped_entirely_when_disabled() {
    let mut scene = make_scene();
    let mut surface = Recorder::default();
    let bins = [100u8; 128];
    scene.render(&mut surface, &bins, &DrawParams::default());
    assert!(surface.ops.iter().all(|op| !matches!(op, Op::Pixels)));
}

#[test]
fn hidden_particles_do_not_move() {
    let mut scene = make_scene();
    scene.spawn_particles(5);
    let before: Vec<Vec2> = scene.particles().iter().map(|p| p.position).collect();

    let mut surface = Recorder::default();
    let params = DrawParams {
        show_particles: false,
        ..DrawParams::default()
    };
    scene.render(&mut surface, &[0u8; 128], &params);
    let after: Vec<Vec2> = scene.particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);

    // showing the layer again advances them at the silence floor
    scene.render(&mut surface, &[0u8; 128], &DrawParams::default());
    let moved: Vec<Vec2> = scene.particles().iter().map(|p| p.position).collect();
    assert_ne!(before, moved);
}

#[test]
fn render_prunes_expired_particles() {
    let mut scene = Scene::new(4, 4, 7);
    scene.spawn_particles(6);
    assert_eq!(scene.particles().len(), 6);

    let mut surface = Recorder::default();
    // loud bins scale motion far past the tiny canvas bounds
    let bins = [255u8; 128];
    let params = DrawParams {
        show_disc: false,
        show_bars: false,
        ..DrawParams::default()
    };
    scene.render(&mut surface, &bins, &params);
    assert!(
        scene.particles().is_empty(),
        "all particles should expire and prune on a 4x4 canvas"
    );
}

#[test]
fn empty_spectrum_draws_no_bars() {
    let mut scene = make_scene();
    let mut surface = Recorder::default();
    scene.render(&mut surface, &[], &DrawParams::default());
    assert_eq!(surface.rect_count(), 0);
    // disc still draws, at base radius
    assert_eq!(surface.glow_ops().last().map(|g| g.1), Some(DISC_BASE_RADIUS));
}
