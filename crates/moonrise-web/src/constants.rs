// Page wiring and audio-chain constants

// Canvas backing size; the scene derives all geometry from it
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;

// Gain applied between the analyser and the speakers
pub const DEFAULT_GAIN: f32 = 0.5;

// Track loaded before the user touches the selector
pub const DEFAULT_TRACK: &str = "media/hauoli-city.mp3";

// Element ids on the host page
pub const CANVAS_ID: &str = "app-canvas";
pub const PLAY_BUTTON_ID: &str = "play-button";
pub const FULLSCREEN_BUTTON_ID: &str = "fs-button";
pub const VOLUME_SLIDER_ID: &str = "volume-slider";
pub const VOLUME_LABEL_ID: &str = "volume-label";
pub const TRACK_SELECT_ID: &str = "track-select";

// Checkbox ids, one per draw/audio toggle
pub const BARS_TOGGLE_ID: &str = "bars-toggle";
pub const DISC_TOGGLE_ID: &str = "disc-toggle";
pub const PARTICLES_TOGGLE_ID: &str = "particles-toggle";
pub const NOISE_TOGGLE_ID: &str = "noise-toggle";
pub const INVERT_TOGGLE_ID: &str = "invert-toggle";
pub const EMBOSS_TOGGLE_ID: &str = "emboss-toggle";
pub const NIGHT_TOGGLE_ID: &str = "night-toggle";
pub const DISTORTION_TOGGLE_ID: &str = "distortion-toggle";

// Slider ids for the numeric tunables
pub const SPAWN_BURST_SLIDER_ID: &str = "spawn-burst";
pub const SPAWN_INTERVAL_SLIDER_ID: &str = "spawn-interval";
pub const BAR_SPACING_SLIDER_ID: &str = "bar-spacing";
