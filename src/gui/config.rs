use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 320.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const DEAD_COLOR: Color32 = Color32::WHITE;
    pub const ALIVE_COLOR: Color32 = Color32::BLACK;

    pub const DEFAULT_SIDE: usize = 24;
    pub const MIN_SIDE: usize = 24;
    pub const MAX_SIDE: usize = 100;

    // milliseconds per generation while the simulation is running
    pub const DEFAULT_STEP_INTERVAL_MS: u64 = 200;
    pub const MIN_STEP_INTERVAL_MS: u64 = 20;
    pub const MAX_STEP_INTERVAL_MS: u64 = 2000;

    pub const SOUP_FILL_RATE: f64 = 0.3;
    pub const MAX_FPS: f64 = 60.;
}
