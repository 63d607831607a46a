use log::{debug, info};
use minifb::{ScaleMode, Window, WindowOptions};

use crate::canvas::Canvas;
use crate::config::WindowSettings;
use crate::error::Result;
use crate::game::Game;

/// Open a window and drive `game` until the window is closed.
pub fn run<G: Game>(mut game: G, settings: &WindowSettings) -> Result<()> {
    debug!("Opening {}x{} window...", settings.width, settings.height);
    let mut window = Window::new(
        &settings.title,
        settings.width,
        settings.height,
        WindowOptions {
            resize: true,
            scale_mode: ScaleMode::AspectRatioStretch,
            ..WindowOptions::default()
        },
    )?;
    window.set_target_fps(settings.target_fps);

    let (width, height) = game.layout(settings.width, settings.height);
    let mut canvas = Canvas::new(width, height)?;
    info!("Running with a {}x{} canvas", width, height);

    while window.is_open() {
        let (outside_width, outside_height) = window.get_size();
        let logical = game.layout(outside_width, outside_height);
        if logical != canvas.size() {
            debug!("Canvas resized to {:?}", logical);
            canvas = Canvas::new(logical.0, logical.1)?;
        }

        game.update()?;
        canvas.clear(settings.background);
        game.draw(&mut canvas);

        let (width, height) = canvas.size();
        window.update_with_buffer(canvas.frame(), width, height)?;
    }

    info!("Window closed");
    Ok(())
}
