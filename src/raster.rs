use crate::geometry::{barycentric, double_area, point_in_triangle};
use crate::line::draw_line;
use crate::point2d::Point2D;
use crate::screen::ScreenSpace;
use crate::triangle::Triangle2D;

/// Wireframe edge color.
pub const WIRE_COLOR: [u8; 3] = [255, 255, 255];

/// Per-frame draw mode for the scalar stage. A third slot is reserved for a
/// future textured mode; the toggle currently cycles the two live modes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderMode {
    Filled,
    Wireframe,
}

impl RenderMode {
    pub fn next(self) -> Self {
        match self {
            RenderMode::Filled => RenderMode::Wireframe,
            RenderMode::Wireframe => RenderMode::Filled,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RenderMode::Filled => "filled",
            RenderMode::Wireframe => "wireframe",
        }
    }
}

/// Rasterize the frame's triangle list in the selected mode.
pub fn rasterize(screen: &mut ScreenSpace, triangles: &[Triangle2D], mode: RenderMode) {
    for tri in triangles {
        match mode {
            RenderMode::Filled => fill_triangle(screen, tri),
            RenderMode::Wireframe => wire_triangle(screen, tri, WIRE_COLOR),
        }
    }
}

/// Depth-tested fill with barycentric color interpolation. Pixels are written
/// only when the interpolated depth is strictly nearer than the stored one,
/// so overlap resolution is independent of draw order.
pub fn fill_triangle(screen: &mut ScreenSpace, tri: &Triangle2D) {
    let Some((x0, y0, x1, y1)) = tri.bounding_box(screen.width, screen.height) else {
        return;
    };

    let (va, vb, vc) = (tri.a.pos, tri.b.pos, tri.c.pos);
    let area = double_area(va, vb, vc);
    if area == 0.0 {
        // degenerate: no coverage
        return;
    }
    let inv_area = 1.0 / area;

    let mut weights = [0.0f32; 3];
    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = Point2D { x: x as f32, y: y as f32 };
            if !barycentric(va, vb, vc, p, inv_area, &mut weights) {
                continue;
            }
            let z = weights[0] * tri.a.z + weights[1] * tri.b.z + weights[2] * tri.c.z;
            if z >= screen.get_depth(x, y) {
                continue;
            }
            let mut color = [0u8; 3];
            for ch in 0..3 {
                color[ch] = (weights[0] * tri.a.color[ch] as f32
                    + weights[1] * tri.b.color[ch] as f32
                    + weights[2] * tri.c.color[ch] as f32) as u8;
            }
            screen.set_depth(x, y, z);
            screen.set_pixel(x, y, color);
        }
    }
}

/// Flat fill with no depth test: the scalar reference for the tile-parallel
/// and vectorized variants, which share its last-write-wins policy.
pub fn fill_triangle_flat(screen: &mut ScreenSpace, tri: &Triangle2D, color: [u8; 3]) {
    let Some((x0, y0, x1, y1)) = tri.bounding_box(screen.width, screen.height) else {
        return;
    };
    let (va, vb, vc) = (tri.a.pos, tri.b.pos, tri.c.pos);
    if double_area(va, vb, vc) == 0.0 {
        return;
    }
    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = Point2D { x: x as f32, y: y as f32 };
            if point_in_triangle(va, vb, vc, p) {
                screen.set_pixel(x, y, color);
            }
        }
    }
}

/// Outline-only mode: three Bresenham edges, no depth, no fill.
pub fn wire_triangle(screen: &mut ScreenSpace, tri: &Triangle2D, color: [u8; 3]) {
    let (ax, ay) = (tri.a.pos.x.round() as i32, tri.a.pos.y.round() as i32);
    let (bx, by) = (tri.b.pos.x.round() as i32, tri.b.pos.y.round() as i32);
    let (cx, cy) = (tri.c.pos.x.round() as i32, tri.c.pos.y.round() as i32);
    draw_line(screen, ax, ay, bx, by, color);
    draw_line(screen, bx, by, cx, cy, color);
    draw_line(screen, cx, cy, ax, ay, color);
}
