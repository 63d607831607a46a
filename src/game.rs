use std::time::{Duration, Instant};

use log::debug;

use crate::cardioid::Cardioid;
use crate::colors::Colors;
use crate::config::Settings;
use crate::error::Result;
use crate::graphics::{Render, Surface};

/// What a frame loop drives. `update` is always called before `draw` within a frame.
pub trait Game {
    fn update(&mut self) -> Result<()>;

    fn draw(&self, surface: &mut dyn Surface);

    /// The logical canvas size to use for a window of the given size
    fn layout(&self, outside_width: usize, outside_height: usize) -> (usize, usize);
}

pub struct CardioidGame {
    cardioid: Cardioid,
    canvas_size: (usize, usize),
    update_interval: Duration,
    last_advance: Instant,
}

impl CardioidGame {
    pub fn new(settings: Settings) -> Self {
        Self::with_clock(settings, Colors::default(), Instant::now())
    }

    /// Build a game as if it were started at `now`. The pattern is advanced once right away so
    /// the first frame already has something on it.
    pub fn with_clock(settings: Settings, colors: Colors, now: Instant) -> Self {
        let Settings { window, animation } = settings;
        debug!(
            "{} lines in {} colors on a {}x{} canvas, advancing every {:?}",
            animation.line_count,
            colors.color_count(),
            window.width,
            window.height,
            animation.update_interval
        );

        let update_interval = animation.update_interval;
        let mut cardioid = Cardioid::new(animation, colors, window.center());
        cardioid.advance();

        CardioidGame {
            cardioid,
            canvas_size: (window.width, window.height),
            update_interval,
            last_advance: now,
        }
    }

    pub fn cardioid(&self) -> &Cardioid {
        &self.cardioid
    }

    /// Advance if more than the update interval has passed since the last advance. Returns
    /// whether anything changed.
    pub fn update_at(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_advance) > self.update_interval {
            self.advance();
            self.last_advance = now;
            true
        } else {
            false
        }
    }

    /// Advance unconditionally, without looking at the clock
    pub fn advance(&mut self) {
        self.cardioid.advance();
    }
}

impl Game for CardioidGame {
    fn update(&mut self) -> Result<()> {
        self.update_at(Instant::now());
        Ok(())
    }

    fn draw(&self, surface: &mut dyn Surface) {
        for line in self.cardioid.styled_lines() {
            surface.stroke(&line);
        }
    }

    fn layout(&self, _outside_width: usize, _outside_height: usize) -> (usize, usize) {
        self.canvas_size
    }
}
