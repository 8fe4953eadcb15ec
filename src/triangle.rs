use crate::point2d::Point2D;
use crate::shape::VERTEX_COLORS;

/// A screen-space vertex carrying the depth and color used by the
/// interpolating filled path. `z` is ignored by the flat-shaded variants.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenVertex {
    pub pos: Point2D,
    pub z: f32,
    pub color: [u8; 3],
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle2D {
    pub a: ScreenVertex,
    pub b: ScreenVertex,
    pub c: ScreenVertex,
}

impl Triangle2D {
    pub fn flat(a: Point2D, b: Point2D, c: Point2D, color: [u8; 3]) -> Self {
        Triangle2D {
            a: ScreenVertex { pos: a, z: 0.0, color },
            b: ScreenVertex { pos: b, z: 0.0, color },
            c: ScreenVertex { pos: c, z: 0.0, color },
        }
    }

    /// Group a transformed vertex list into triangles, assigning the cycling
    /// per-corner colors and a constant depth.
    pub fn assemble(screen_verts: &[Point2D]) -> Vec<Triangle2D> {
        screen_verts
            .chunks_exact(3)
            .map(|v| Triangle2D {
                a: ScreenVertex { pos: v[0], z: 0.0, color: VERTEX_COLORS[0] },
                b: ScreenVertex { pos: v[1], z: 0.0, color: VERTEX_COLORS[1] },
                c: ScreenVertex { pos: v[2], z: 0.0, color: VERTEX_COLORS[2] },
            })
            .collect()
    }

    /// Integer pixel rectangle covering the triangle, clamped to the buffer.
    /// Returns `None` when the triangle lies fully outside the viewport.
    pub fn bounding_box(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let min_x = self.a.pos.x.min(self.b.pos.x).min(self.c.pos.x);
        let max_x = self.a.pos.x.max(self.b.pos.x).max(self.c.pos.x);
        let min_y = self.a.pos.y.min(self.b.pos.y).min(self.c.pos.y);
        let max_y = self.a.pos.y.max(self.b.pos.y).max(self.c.pos.y);

        if max_x < 0.0 || max_y < 0.0 || min_x > (width - 1) as f32 || min_y > (height - 1) as f32 {
            return None;
        }

        let x0 = (min_x.floor().max(0.0)) as u32;
        let y0 = (min_y.floor().max(0.0)) as u32;
        let x1 = (max_x.ceil() as u32).min(width - 1);
        let y1 = (max_y.ceil() as u32).min(height - 1);
        Some((x0, y0, x1, y1))
    }
}
