use log::*;

use cardioid::config::Settings;
use cardioid::game::CardioidGame;
use cardioid::window;

fn main() {
    env_logger::init();

    info!("Starting...");
    let settings = Settings::default();
    let window_settings = settings.window.clone();

    if let Err(err) = window::run(CardioidGame::new(settings), &window_settings) {
        error!("{}", err);
        std::process::exit(1);
    }
}
