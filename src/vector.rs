use std::simd::{f32x4, Mask};

use crate::geometry::{double_area, inside_mask};
use crate::point2d::Point2Dx4;
use crate::screen::ScreenSpace;
use crate::triangle::Triangle2D;

/// Rasterize the frame's triangle list with the 4-wide mask fill.
pub fn rasterize(screen: &mut ScreenSpace, triangles: &[Triangle2D], color: [u8; 3]) {
    for tri in triangles {
        fill_triangle_simd(screen, tri, color);
    }
}

/// Same inside predicate as the scalar path, evaluated four pixels per step
/// across each bounding-box row and resolved as a lane mask. Flat color,
/// no interpolation, no depth test.
pub fn fill_triangle_simd(screen: &mut ScreenSpace, tri: &Triangle2D, color: [u8; 3]) {
    let Some((x0, y0, x1, y1)) = tri.bounding_box(screen.width, screen.height) else {
        return;
    };
    let (va, vb, vc) = (tri.a.pos, tri.b.pos, tri.c.pos);
    if double_area(va, vb, vc) == 0.0 {
        return;
    }

    let step = f32x4::from_array([0.0, 1.0, 2.0, 3.0]);
    for y in y0..=y1 {
        let py = f32x4::splat(y as f32);
        let mut x = x0;
        while x <= x1 {
            let px = f32x4::splat(x as f32) + step;
            let mut mask = inside_mask(va, vb, vc, Point2Dx4 { x: px, y: py });
            // trim lanes hanging past the bounding box
            let lanes_left = (x1 - x + 1) as usize;
            if lanes_left < 4 {
                mask &= Mask::from_array([
                    true,
                    lanes_left > 1,
                    lanes_left > 2,
                    lanes_left > 3,
                ]);
            }
            screen.set_pixel_row_quad(x, y, color, mask);
            x += 4;
        }
    }
}
