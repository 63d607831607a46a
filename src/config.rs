use std::time::Duration;

use crate::graphics::{Color, Point2DData};

#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub window: WindowSettings,
    pub animation: AnimationSettings,
}

#[derive(Clone, Debug)]
pub struct WindowSettings {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub target_fps: usize,
    /// The frame is cleared to this before every draw
    pub background: Color,
}

impl WindowSettings {
    /// The middle of the logical canvas, which is where the pattern is centered
    pub fn center(&self) -> Point2DData {
        Point2DData::new(self.width as f32 * 0.5, self.height as f32 * 0.5)
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        WindowSettings {
            title: String::from("Cardioid"),
            width: 900,
            height: 900,
            target_fps: 60,
            background: Color::new(0, 0, 0, 255),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AnimationSettings {
    pub line_count: usize,
    /// How much the tick grows on every advance
    pub tick_step: f64,
    /// Minimum wall-clock time between two advances
    pub update_interval: Duration,
    pub stroke_width: f32,
    pub shape: Shape,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        AnimationSettings {
            line_count: 200,
            tick_step: 16.0,
            update_interval: Duration::from_millis(50),
            stroke_width: 1.0,
            shape: Shape::default(),
        }
    }
}

/// Constants of the closed-form radius and twist formulas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    pub base_radius: f64,
    pub amplitude: f64,
    pub twist_rate: f64,
    pub radius_frequency: f64,
}

impl Default for Shape {
    fn default() -> Self {
        Shape {
            base_radius: 350.0,
            amplitude: 50.0,
            twist_rate: 0.0001,
            radius_frequency: 0.004,
        }
    }
}
