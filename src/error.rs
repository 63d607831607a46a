use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot make a {0}x{1} canvas")]
    InvalidCanvasSize(usize, usize),

    #[error("a palette needs at least one color")]
    EmptyPalette,
}

pub type Result<T> = std::result::Result<T, Error>;
