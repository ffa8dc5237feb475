use crate::constants::{DEFAULT_BAR_SPACING, DEFAULT_SPAWN_BURST, DEFAULT_SPAWN_INTERVAL_SEC};

/// Everything the UI can toggle or tune, refreshed by control wiring and
/// read by the renderer each tick. Background and hills are always drawn
/// and have no flags here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    pub show_bars: bool,
    pub show_disc: bool,
    pub show_particles: bool,
    pub show_noise: bool,
    pub show_invert: bool,
    pub show_emboss: bool,
    pub night: bool,
    /// Particles appended per elapsed spawn interval.
    pub spawn_burst: u32,
    pub spawn_interval_sec: f32,
    pub bar_spacing: f32,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            show_bars: true,
            show_disc: true,
            show_particles: true,
            show_noise: false,
            show_invert: false,
            show_emboss: false,
            night: true,
            spawn_burst: DEFAULT_SPAWN_BURST,
            spawn_interval_sec: DEFAULT_SPAWN_INTERVAL_SEC,
            bar_spacing: DEFAULT_BAR_SPACING,
        }
    }
}

impl DrawParams {
    /// True when at least one full-frame pixel pass is enabled; the
    /// renderer skips the read-modify-write entirely otherwise.
    #[inline]
    pub fn any_pixel_pass(&self) -> bool {
        self.show_noise || self.show_invert || self.show_emboss
    }
}
