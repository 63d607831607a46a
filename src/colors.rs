use crate::error::{Error, Result};
use crate::graphics::Color;

/// A fixed sequence of colors handed out round-robin.
#[derive(Clone, Debug)]
pub struct Colors {
    colors: Vec<Color>,
    cursor: usize,
}

impl Colors {
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Colors { colors, cursor: 0 })
    }

    /// Return the color under the cursor and move the cursor on, wrapping at the end.
    pub fn next_color(&mut self) -> Color {
        let color = self.colors[self.cursor];
        self.cursor += 1;
        if self.cursor == self.colors.len() {
            self.cursor = 0;
        }
        color
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn color_count(&self) -> usize {
        self.colors.len()
    }
}

impl Default for Colors {
    /// Greens fading into reds, all translucent
    fn default() -> Self {
        Colors {
            colors: vec![
                Color::new(0, 255, 0, 150),
                Color::new(30, 250, 10, 150),
                Color::new(60, 240, 35, 150),
                Color::new(90, 230, 50, 150),
                Color::new(120, 210, 70, 150),
                Color::new(150, 100, 55, 150),
                Color::new(180, 80, 65, 150),
                Color::new(210, 30, 75, 150),
            ],
            cursor: 0,
        }
    }
}
