use crate::screen::ScreenSpace;

/// Bresenham line from (x0, y0) to (x1, y1). 8-connected with no gaps;
/// pixels outside the buffer are clipped silently. Endpoints are put in a
/// canonical order first so A->B and B->A rasterize the same pixel set.
pub fn draw_line(screen: &mut ScreenSpace, x0: i32, y0: i32, x1: i32, y1: i32, color: [u8; 3]) {
    let (mut x, mut y, x1, y1) = if (x0, y0) <= (x1, y1) {
        (x0, y0, x1, y1)
    } else {
        (x1, y1, x0, y0)
    };

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if x >= 0 && y >= 0 {
            screen.set_pixel(x as u32, y as u32, color);
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_pixels(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(u32, u32)> {
        let mut screen = ScreenSpace::new(32, 32);
        draw_line(&mut screen, x0, y0, x1, y1, [255, 255, 255]);
        let mut pixels = Vec::new();
        for y in 0..32 {
            for x in 0..32 {
                if screen.get_pixel(x, y) != Some([0, 0, 0]) {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }

    #[test]
    fn line_is_swap_invariant() {
        for (x0, y0, x1, y1) in [(0, 0, 10, 3), (2, 9, 9, 2), (0, 0, 3, 10), (5, 5, 5, 12), (1, 7, 12, 7)] {
            assert_eq!(
                line_pixels(x0, y0, x1, y1),
                line_pixels(x1, y1, x0, y0),
                "asymmetric line ({x0},{y0})-({x1},{y1})"
            );
        }
    }

    #[test]
    fn line_includes_both_endpoints() {
        let pixels = line_pixels(2, 3, 11, 7);
        assert!(pixels.contains(&(2, 3)));
        assert!(pixels.contains(&(11, 7)));
    }

    #[test]
    fn line_is_8_connected_without_gaps() {
        let mut screen = ScreenSpace::new(32, 32);
        draw_line(&mut screen, 1, 1, 13, 6, [255, 255, 255]);
        // walk columns: a shallow line must hit every x exactly once or more
        for x in 1..=13u32 {
            let hits = (0..32u32).filter(|&y| screen.get_pixel(x, y) != Some([0, 0, 0])).count();
            assert!(hits >= 1, "gap at column {x}");
        }
    }

    #[test]
    fn out_of_bounds_coordinates_clip_silently() {
        let mut screen = ScreenSpace::new(8, 8);
        draw_line(&mut screen, -5, -5, 20, 20, [255, 0, 0]);
        draw_line(&mut screen, -10, 4, -2, 4, [255, 0, 0]);
        // the fully offscreen line wrote nothing; the diagonal stayed in bounds
        assert_eq!(screen.get_pixel(0, 0), Some([255, 0, 0]));
        assert_eq!(screen.get_pixel(7, 7), Some([255, 0, 0]));
        assert_eq!(screen.get_pixel(0, 4), Some([0, 0, 0]));
    }
}
