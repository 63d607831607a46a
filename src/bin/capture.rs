use log::*;
use std::path::PathBuf;

use cardioid::canvas::Canvas;
use cardioid::config::Settings;
use cardioid::game::{CardioidGame, Game};

const FRAMES: usize = 12;
/// At a 50ms cadence this is one captured frame per second of animation
const ADVANCES_PER_FRAME: usize = 20;

fn capture(out_dir: PathBuf) -> cardioid::Result<()> {
    let settings = Settings::default();
    let background = settings.window.background;
    let (width, height) = (settings.window.width, settings.window.height);
    let mut game = CardioidGame::new(settings);
    let (width, height) = game.layout(width, height);

    std::fs::create_dir_all(&out_dir)?;
    let mut canvas = Canvas::new(width, height)?;
    for frame in 0..FRAMES {
        canvas.clear(background);
        game.draw(&mut canvas);
        canvas.save_png(&out_dir.join(format!("cardioid_{:03}.png", frame)))?;

        for _ in 0..ADVANCES_PER_FRAME {
            game.advance();
        }
    }

    info!("Captured {} frames into {}", FRAMES, out_dir.display());
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = capture(PathBuf::from("output")) {
        error!("{}", err);
        std::process::exit(1);
    }
}
