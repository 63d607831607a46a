use euclid::Point2D;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, StrokeOptions, StrokeTessellator, StrokeVertex, TessellationError,
    VertexBuffers,
};

/// This unit refers to "data space," i.e. pixels of the logical canvas with y pointing down
pub enum DataUnit {}

pub type Point2DData = Point2D<f32, DataUnit>;

pub type Color = palette::Srgba<u8>;

const STROKE_TOLERANCE: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub pos: [f32; 2],
}

/// A polyline stroked with a constant width and a single color
#[derive(Clone, Debug, PartialEq)]
pub struct StyledLine {
    pub points: Vec<Point2DData>,
    pub width: f32,
    pub color: Color,
}

impl StyledLine {
    pub fn segment(from: Point2DData, to: Point2DData, width: f32, color: Color) -> Self {
        StyledLine {
            points: vec![from, to],
            width,
            color,
        }
    }

    pub fn length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).length())
            .sum()
    }
}

/// Anything that can be drawn as a set of strokes
pub trait Render {
    fn styled_lines(&self) -> Vec<StyledLine>;
}

/// Something strokes can be issued on, e.g. a frame buffer
pub trait Surface {
    fn stroke(&mut self, line: &StyledLine);
}

fn line_to_path(line: &StyledLine) -> Path {
    let mut builder = Path::builder();
    builder.begin(point(line.points[0].x, line.points[0].y));
    for p in &line.points[1..] {
        builder.line_to(point(p.x, p.y));
    }
    builder.end(false);
    builder.build()
}

/// Turn a stroke into triangles. Lines with fewer than two points produce no geometry.
pub fn tessellate(line: &StyledLine) -> Result<VertexBuffers<Vertex, u32>, TessellationError> {
    let mut geometry: VertexBuffers<Vertex, u32> = VertexBuffers::new();
    if line.points.len() < 2 {
        return Ok(geometry);
    }

    let options = StrokeOptions::DEFAULT
        .with_tolerance(STROKE_TOLERANCE)
        .with_line_width(line.width);

    let mut tessellator = StrokeTessellator::new();
    tessellator.tessellate_path(
        &line_to_path(line),
        &options,
        &mut BuffersBuilder::new(&mut geometry, |vertex: StrokeVertex| Vertex {
            pos: vertex.position().to_array(),
        }),
    )?;

    Ok(geometry)
}
