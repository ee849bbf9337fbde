#![warn(clippy::all, clippy::cargo)]

mod board;
mod error;
mod observer;
mod preset;

pub use board::Board;
pub use error::BoardError;
pub use observer::{BoardObserver, NullObserver};
pub use preset::Preset;
