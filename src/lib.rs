pub mod canvas;
pub mod cardioid;
pub mod colors;
pub mod config;
pub mod error;
pub mod game;
pub mod graphics;
pub mod window;

pub use error::{Error, Result};
