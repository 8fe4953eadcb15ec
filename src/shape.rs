use clap::ValueEnum;

use crate::point2d::Point2D;

/// Fill color shared by the flat-shaded rasterizer variants.
pub const FLAT_COLOR: [u8; 3] = [220, 60, 60];

/// Per-vertex colors for the depth-tested interpolating path, cycled per triangle corner.
pub const VERTEX_COLORS: [[u8; 3]; 3] = [[255, 0, 0], [0, 255, 0], [0, 0, 255]];

/// One of the three benchmark shapes, pre-triangulated by `vertices`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    Triangle,
    Square,
    Rectangle,
}

impl Shape {
    /// Object-space vertex list, centered at the origin, three vertices per
    /// triangle with no shared indexing.
    pub fn vertices(self) -> Vec<Point2D> {
        let coords: &[[f32; 2]] = match self {
            Shape::Triangle => &[[-50.0, -50.0], [50.0, -50.0], [0.0, 50.0]],
            Shape::Square => &[
                [-50.0, -50.0], [50.0, -50.0], [50.0, 50.0],
                [-50.0, -50.0], [50.0, 50.0], [-50.0, 50.0],
            ],
            Shape::Rectangle => &[
                [-70.0, -40.0], [70.0, -40.0], [70.0, 40.0],
                [-70.0, -40.0], [70.0, 40.0], [-70.0, 40.0],
            ],
        };
        coords.iter().map(|&[x, y]| Point2D { x, y }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_decompose_into_whole_triangles() {
        for shape in [Shape::Triangle, Shape::Square, Shape::Rectangle] {
            assert_eq!(shape.vertices().len() % 3, 0);
        }
        assert_eq!(Shape::Triangle.vertices().len(), 3);
        assert_eq!(Shape::Square.vertices().len(), 6);
        assert_eq!(Shape::Rectangle.vertices().len(), 6);
    }

    #[test]
    fn shapes_are_centered_at_origin() {
        for shape in [Shape::Triangle, Shape::Square, Shape::Rectangle] {
            let verts = shape.vertices();
            let min_x = verts.iter().map(|v| v.x).fold(f32::INFINITY, f32::min);
            let max_x = verts.iter().map(|v| v.x).fold(f32::NEG_INFINITY, f32::max);
            assert_eq!(min_x, -max_x, "{shape:?} not centered in x");
        }
    }

    #[test]
    fn provider_is_deterministic() {
        assert_eq!(Shape::Square.vertices(), Shape::Square.vertices());
    }
}
