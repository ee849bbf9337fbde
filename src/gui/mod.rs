mod app;
mod cell_image;
mod config;
mod draw;
mod fps_limit;

pub use app::App;
pub use config::Config;
use cell_image::CellImage;
use fps_limit::FpsLimiter;
