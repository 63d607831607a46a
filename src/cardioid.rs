//! The animated pattern: a ring of chords whose far ends slowly twist away from their starting
//! angle while the ring breathes in and out.
use std::f64::consts::PI;

use log::trace;

use crate::colors::Colors;
use crate::config::{AnimationSettings, Shape};
use crate::graphics::{Color, Point2DData, Render, StyledLine};

/// Multiplier applied to the angle of each line's second endpoint. Exactly 1 at tick 0.
pub fn twist_factor(tick: f64, shape: &Shape) -> f64 {
    1.0 + shape.twist_rate * tick
}

/// Always within `[base_radius, base_radius + 1.5 * amplitude]`
pub fn radius(tick: f64, shape: &Shape) -> f64 {
    shape.base_radius + shape.amplitude * ((tick * shape.radius_frequency).sin() - 0.5).abs()
}

/// Endpoints of line `index` out of `line_count`, for an already computed twist factor and
/// radius.
pub fn line_endpoints(
    index: usize,
    line_count: usize,
    factor: f64,
    radius: f64,
    center: Point2DData,
) -> (Point2DData, Point2DData) {
    let theta = (2.0 * PI / line_count as f64) * index as f64;
    let (cx, cy) = (center.x as f64, center.y as f64);
    (
        Point2DData::new(
            (radius * theta.cos() + cx) as f32,
            (radius * theta.sin() + cy) as f32,
        ),
        Point2DData::new(
            (radius * (factor * theta).cos() + cx) as f32,
            (radius * (factor * theta).sin() + cy) as f32,
        ),
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub from: Point2DData,
    pub to: Point2DData,
    pub color: Color,
}

impl Line {
    fn new(center: Point2DData) -> Self {
        Line {
            from: center,
            to: center,
            color: Color::new(0, 0, 0, 0),
        }
    }
}

pub struct Cardioid {
    tick: f64,
    lines: Vec<Line>,
    colors: Colors,
    center: Point2DData,
    settings: AnimationSettings,
}

impl Cardioid {
    /// All lines start collapsed on the center with a transparent color until the first advance.
    pub fn new(settings: AnimationSettings, colors: Colors, center: Point2DData) -> Self {
        Cardioid {
            tick: 0.0,
            lines: vec![Line::new(center); settings.line_count],
            colors,
            center,
            settings,
        }
    }

    pub fn tick(&self) -> f64 {
        self.tick
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Step the tick forward and recompute every line, handing out colors in index order.
    pub fn advance(&mut self) {
        self.tick += self.settings.tick_step;
        let shape = &self.settings.shape;
        let factor = twist_factor(self.tick, shape);
        let radius = radius(self.tick, shape);
        trace!("tick {} -> factor {:.4}, radius {:.2}", self.tick, factor, radius);

        let line_count = self.lines.len();
        for (index, line) in self.lines.iter_mut().enumerate() {
            let (from, to) = line_endpoints(index, line_count, factor, radius, self.center);
            line.from = from;
            line.to = to;
            line.color = self.colors.next_color();
        }
    }
}

impl Render for Cardioid {
    fn styled_lines(&self) -> Vec<StyledLine> {
        self.lines
            .iter()
            .map(|line| {
                StyledLine::segment(line.from, line.to, self.settings.stroke_width, line.color)
            })
            .collect()
    }
}
