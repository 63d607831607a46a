//! A software frame buffer that strokes are rasterized into.
//!
//! Strokes are tessellated with lyon and the resulting triangles are filled by tiny-skia as a
//! single anti-aliased path, so the seams between a stroke's own triangles are never blended twice.
use std::path::Path;

use image::{Rgb, RgbImage};
use log::{debug, warn};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::error::{Error, Result};
use crate::graphics::{tessellate, Color, StyledLine, Surface};

pub struct Canvas {
    pixmap: Pixmap,
    /// `0RGB` words, the layout minifb presents
    frame: Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let pixmap = Pixmap::new(width as u32, height as u32)
            .ok_or(Error::InvalidCanvasSize(width, height))?;
        Ok(Canvas {
            pixmap,
            frame: vec![0; width * height],
        })
    }

    pub fn size(&self) -> (usize, usize) {
        (self.pixmap.width() as usize, self.pixmap.height() as usize)
    }

    pub fn pixel(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let color = self.pixmap.pixels()[y * self.pixmap.width() as usize + x].demultiply();
        (color.red(), color.green(), color.blue())
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(tiny_skia::Color::from_rgba8(
            color.red,
            color.green,
            color.blue,
            color.alpha,
        ));
    }

    /// The current contents packed for presenting in a window
    pub fn frame(&mut self) -> &[u32] {
        for (word, pixel) in self.frame.iter_mut().zip(self.pixmap.pixels()) {
            let color = pixel.demultiply();
            *word = (color.red() as u32) << 16 | (color.green() as u32) << 8 | color.blue() as u32;
        }
        &self.frame
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        let (width, height) = self.size();
        let image = RgbImage::from_fn(width as u32, height as u32, |x, y| {
            let (r, g, b) = self.pixel(x as usize, y as usize);
            Rgb([r, g, b])
        });
        image.save(path)?;
        debug!("Wrote {}x{} frame to {}", width, height, path.display());
        Ok(())
    }
}

impl Surface for Canvas {
    fn stroke(&mut self, line: &StyledLine) {
        if line.length() == 0.0 {
            return;
        }
        let geometry = match tessellate(line) {
            Ok(geometry) => geometry,
            Err(err) => {
                warn!("Skipping stroke that failed to tessellate: {:?}", err);
                return;
            }
        };

        let mut builder = PathBuilder::new();
        for triangle in geometry.indices.chunks_exact(3) {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]]
                .map(|i| geometry.vertices[i as usize].pos);
            builder.move_to(a[0], a[1]);
            builder.line_to(b[0], b[1]);
            builder.line_to(c[0], c[1]);
            builder.close();
        }
        let path = match builder.finish() {
            Some(path) => path,
            None => return,
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(line.color.red, line.color.green, line.color.blue, line.color.alpha);
        paint.anti_alias = true;
        self.pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::Point2DData;

    fn black() -> Color {
        Color::new(0, 0, 0, 255)
    }

    fn magenta() -> Color {
        Color::new(255, 0, 255, 255)
    }

    fn assert_close(actual: (u8, u8, u8), expected: (u8, u8, u8)) {
        let near = |a: u8, b: u8| (a as i32 - b as i32).abs() <= 2;
        assert!(
            near(actual.0, expected.0) && near(actual.1, expected.1) && near(actual.2, expected.2),
            "{:?} is not close to {:?}",
            actual,
            expected
        );
    }

    fn lit_pixels(canvas: &mut Canvas) -> usize {
        canvas.frame().iter().filter(|&&word| word != 0).count()
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(Canvas::new(0, 10), Err(Error::InvalidCanvasSize(0, 10))));
    }

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut canvas = Canvas::new(4, 3).unwrap();
        canvas.clear(Color::new(1, 2, 3, 255));
        assert!(canvas.frame().iter().all(|&word| word == 0x010203));
    }

    #[test]
    fn test_horizontal_stroke_covers_its_row() {
        let mut canvas = Canvas::new(16, 16).unwrap();
        canvas.clear(black());
        canvas.stroke(&StyledLine::segment(
            Point2DData::new(2.0, 10.5),
            Point2DData::new(8.0, 10.5),
            1.0,
            magenta(),
        ));

        for x in 3..7 {
            assert_close(canvas.pixel(x, 10), (255, 0, 255));
        }
        for x in 0..16 {
            assert_eq!(canvas.pixel(x, 8), (0, 0, 0));
            assert_eq!(canvas.pixel(x, 12), (0, 0, 0));
        }
        assert_eq!(canvas.pixel(0, 10), (0, 0, 0));
        assert_eq!(canvas.pixel(12, 10), (0, 0, 0));
    }

    #[test]
    fn test_translucent_stroke_blends() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.clear(black());
        canvas.stroke(&StyledLine::segment(
            Point2DData::new(0.0, 4.5),
            Point2DData::new(8.0, 4.5),
            1.0,
            Color::new(200, 100, 0, 128),
        ));
        assert_close(canvas.pixel(3, 4), (100, 50, 0));
    }

    #[test]
    fn test_off_canvas_and_degenerate_strokes_draw_nothing() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.clear(black());
        canvas.stroke(&StyledLine::segment(
            Point2DData::new(-50.0, -20.0),
            Point2DData::new(-10.0, -30.0),
            1.0,
            magenta(),
        ));
        canvas.stroke(&StyledLine::segment(
            Point2DData::new(100.0, 100.0),
            Point2DData::new(200.0, 120.0),
            1.0,
            magenta(),
        ));
        canvas.stroke(&StyledLine::segment(
            Point2DData::new(4.0, 4.0),
            Point2DData::new(4.0, 4.0),
            1.0,
            magenta(),
        ));
        assert_eq!(lit_pixels(&mut canvas), 0);
    }

    #[test]
    fn test_diagonal_stroke_is_continuous() {
        let mut canvas = Canvas::new(64, 64).unwrap();
        canvas.clear(black());
        canvas.stroke(&StyledLine::segment(
            Point2DData::new(4.0, 4.0),
            Point2DData::new(60.0, 60.0),
            1.0,
            magenta(),
        ));
        // Every column the line crosses gets at least one lit pixel
        for x in 5..59 {
            assert!((0..64).any(|y| canvas.pixel(x, y) != (0, 0, 0)), "column {}", x);
        }
        assert!(lit_pixels(&mut canvas) >= 56);
    }

    #[test]
    fn test_stroke_crossing_the_edge_is_clipped() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.clear(black());
        canvas.stroke(&StyledLine::segment(
            Point2DData::new(-4.0, 2.5),
            Point2DData::new(20.0, 2.5),
            1.0,
            magenta(),
        ));
        for x in 0..8 {
            assert_close(canvas.pixel(x, 2), (255, 0, 255));
        }
    }

    #[test]
    fn test_save_png() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.clear(magenta());
        let path =
            std::env::temp_dir().join(format!("cardioid_save_png_{}.png", std::process::id()));
        canvas.save_png(&path).unwrap();

        let image = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(image.dimensions(), (8, 8));
        assert_eq!(image.get_pixel(3, 5), &Rgb([255, 0, 255]));
    }
}
