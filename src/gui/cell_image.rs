use super::Config;
use eframe::egui::{Color32, ColorImage};
use life_board::BoardObserver;

/// Pixel-per-cell image of the board, kept in sync through the observer
/// notifications so drawing never re-reads the grid.
pub struct CellImage {
    side: usize,
    image: ColorImage,
    dirty: bool,
}

impl CellImage {
    pub fn new(side: usize) -> Self {
        Self {
            side,
            image: ColorImage::new([side; 2], Config::DEAD_COLOR),
            dirty: true,
        }
    }

    pub fn image(&self) -> &ColorImage {
        &self.image
    }

    /// Whether the image changed since the last call; clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // board x is the screen row, board y the screen column
    fn pixel(&mut self, x: usize, y: usize) -> &mut Color32 {
        &mut self.image.pixels[x * self.side + y]
    }
}

impl BoardObserver for CellImage {
    fn on_toggle(&mut self, x: usize, y: usize) {
        let pixel = self.pixel(x, y);
        *pixel = if *pixel == Config::ALIVE_COLOR {
            Config::DEAD_COLOR
        } else {
            Config::ALIVE_COLOR
        };
        self.dirty = true;
    }

    fn on_set(&mut self, x: usize, y: usize, alive: bool) {
        *self.pixel(x, y) = if alive {
            Config::ALIVE_COLOR
        } else {
            Config::DEAD_COLOR
        };
        self.dirty = true;
    }
}
