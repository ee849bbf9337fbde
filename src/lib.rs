#![warn(clippy::all)]

mod gui;

pub use gui::{App, Config};
