use super::{CellImage, Config, FpsLimiter};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, TextureHandle, TextureOptions,
};
use life_board::{Board, Preset};
use std::time::{Duration, Instant};

pub struct App {
    pub(super) board: Board<CellImage>,    // authoritative simulation state
    pub(super) is_paused: bool,            // whether the interval timer is stopped
    pub(super) do_one_step: bool,          // advance one generation and stay paused
    pub(super) step_interval_ms: u64,      // milliseconds between generations
    pub(super) last_step: Instant,         // when the previous generation was applied
    pub(super) generation: u64,            // current generation number
    pub(super) selected_preset: Option<Preset>, // None means a custom configuration
    pub(super) side_input: usize,          // side length for the next rebuild
    pub(super) texture: TextureHandle,     // texture mirroring the board
    pub(super) fps_limiter: FpsLimiter,
    pub(super) max_fps: f64,
}

impl App {
    pub fn new(ctx: &Context) -> Self {
        Self {
            board: Board::new(Config::DEFAULT_SIDE, CellImage::new(Config::DEFAULT_SIDE)),
            is_paused: true,
            do_one_step: false,
            step_interval_ms: Config::DEFAULT_STEP_INTERVAL_MS,
            last_step: Instant::now(),
            generation: 0,
            selected_preset: None,
            side_input: Config::DEFAULT_SIDE,
            texture: ctx.load_texture(
                "life board",
                ColorImage::default(),
                TextureOptions::NEAREST,
            ),
            fps_limiter: FpsLimiter::default(),
            max_fps: Config::MAX_FPS,
        }
    }

    /// Replaces the board with a fresh all-dead one of the requested side.
    /// The side length is fixed per board, so resizing means a new board.
    pub(super) fn rebuild_board(&mut self, side: usize) {
        self.board = Board::new(side, CellImage::new(side));
        self.generation = 0;
        self.is_paused = true;
        self.do_one_step = false;
        self.selected_preset = None;
    }

    pub(super) fn clear_board(&mut self) {
        self.board.clear();
        self.generation = 0;
        self.selected_preset = None;
    }

    pub(super) fn apply_preset(&mut self, preset: Preset) {
        if let Err(err) = preset.apply(&mut self.board) {
            // the catalog fits every allowed side, so this is a bug upstream
            eprintln!("preset {} rejected: {err}", preset.name());
            return;
        }
        self.selected_preset = Some(preset);
        self.generation = 0;
    }

    pub(super) fn random_soup(&mut self) {
        self.board.randomize(None, Config::SOUP_FILL_RATE);
        self.generation = 0;
        self.selected_preset = None;
    }

    fn update_board(&mut self) {
        if self.is_paused && !self.do_one_step {
            return;
        }
        let interval = Duration::from_millis(self.step_interval_ms);
        if !self.do_one_step && self.last_step.elapsed() < interval {
            return;
        }

        self.board.step();
        self.generation += 1;
        self.last_step = Instant::now();
        self.do_one_step = false;
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) && self.is_paused {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.is_paused = !self.is_paused;
                self.last_step = Instant::now();
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_keys(ctx);

                self.draw(ui);

                self.update_board();
            });

        self.fps_limiter.sleep(self.max_fps);
    }
}
