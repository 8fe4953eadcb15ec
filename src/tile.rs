use rayon::prelude::*;

use crate::band::{split_bands, Band};
use crate::geometry::{double_area, point_in_triangle};
use crate::point2d::Point2D;
use crate::screen::ScreenSpace;
use crate::triangle::Triangle2D;

/// Rasterize the full triangle list once per horizontal band, one rayon
/// worker per band. Every worker owns a disjoint row-range slice of the flat
/// buffer (`par_chunks_mut`), which is the entire synchronization argument:
/// no locks, no atomics, no communication. A panicking worker propagates
/// through the join and fails the whole frame.
///
/// Bands deliberately fill flat-color with last-write-wins overlap
/// resolution instead of the scalar path's depth test; the variant exists to
/// demonstrate band parallelism over the same inside-test, and the cruder
/// compositing is part of its contract.
pub fn rasterize(screen: &mut ScreenSpace, triangles: &[Triangle2D], color: [u8; 3], workers: u32) {
    let width = screen.width;
    let bands = split_bands(screen.height, workers);
    let band_rows = screen.height.div_ceil(workers) as usize;
    let row_bytes = (width * 4) as usize;

    screen
        .rgba
        .par_chunks_mut(band_rows * row_bytes)
        .zip(bands.par_iter())
        .for_each(|(rows, band)| raster_band(rows, width, *band, triangles, color));
}

/// Fill every triangle within one band. `rows` is the band's slice of the
/// flat RGBA buffer; all indexing is band-local, so the worker physically
/// cannot write another band's rows.
fn raster_band(rows: &mut [u8], width: u32, band: Band, triangles: &[Triangle2D], color: [u8; 3]) {
    for tri in triangles {
        let (va, vb, vc) = (tri.a.pos, tri.b.pos, tri.c.pos);
        if double_area(va, vb, vc) == 0.0 {
            continue;
        }

        let min_x = va.x.min(vb.x).min(vc.x);
        let max_x = va.x.max(vb.x).max(vc.x);
        let min_y = va.y.min(vb.y).min(vc.y);
        let max_y = va.y.max(vb.y).max(vc.y);
        if max_x < 0.0 || min_x > (width - 1) as f32 {
            continue;
        }

        // bounding box clamped to the viewport in x and to this band in y
        let x0 = min_x.floor().max(0.0) as u32;
        let x1 = (max_x.ceil() as u32).min(width - 1);
        let y0 = (min_y.floor().max(0.0) as u32).max(band.y0);
        let y1 = (max_y.ceil().max(0.0) as u32).min(band.y1 - 1) + 1;

        for y in y0..y1 {
            for x in x0..=x1 {
                let p = Point2D { x: x as f32, y: y as f32 };
                if point_in_triangle(va, vb, vc, p) {
                    let i = (((y - band.y0) * width + x) * 4) as usize;
                    rows[i] = color[0];
                    rows[i + 1] = color[1];
                    rows[i + 2] = color[2];
                    rows[i + 3] = 255;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::fill_triangle_flat;
    use crate::screen::BACKGROUND;

    fn p(x: f32, y: f32) -> Point2D {
        Point2D { x, y }
    }

    const RED: [u8; 3] = [220, 60, 60];

    #[test]
    fn banded_output_matches_scalar_flat_fill() {
        let tris = vec![
            Triangle2D::flat(p(2.0, 2.0), p(30.0, 5.0), p(6.0, 44.0), RED),
            Triangle2D::flat(p(20.0, 10.0), p(38.0, 28.0), p(24.0, 46.0), RED),
        ];

        let mut reference = ScreenSpace::new(40, 48);
        reference.clear(BACKGROUND);
        for tri in &tris {
            fill_triangle_flat(&mut reference, tri, RED);
        }

        for workers in [1, 2, 3, 4] {
            let mut banded = ScreenSpace::new(40, 48);
            banded.clear(BACKGROUND);
            rasterize(&mut banded, &tris, RED, workers);
            assert_eq!(banded.rgba, reference.rgba, "mismatch with {workers} workers");
        }
    }

    #[test]
    fn band_worker_stays_inside_its_rows() {
        // 2 workers over 600 rows: bands [0,300) and [300,600)
        let width = 16u32;
        let bands = split_bands(600, 2);
        assert_eq!(bands[1], Band { y0: 300, y1: 600 });

        // triangle spanning both bands
        let tri = Triangle2D::flat(p(2.0, 250.0), p(14.0, 250.0), p(8.0, 350.0), RED);
        let mut rows = vec![0u8; (300 * width * 4) as usize];
        raster_band(&mut rows, width, bands[1], &[tri], RED);

        // rows past the triangle's extent (y >= 350 -> local row >= 50) stay clean
        for local_y in 51..300u32 {
            let start = (local_y * width * 4) as usize;
            assert!(
                rows[start..start + (width * 4) as usize].iter().all(|&b| b == 0),
                "worker wrote outside the triangle at local row {local_y}"
            );
        }
        // and the triangle's own rows inside this band did get filled
        let covered = (0..50u32)
            .any(|local_y| rows[((local_y * width + 8) * 4) as usize] == RED[0]);
        assert!(covered, "band missed the triangle rows it owns");
    }

    #[test]
    fn overlap_resolves_last_write_wins() {
        let first = Triangle2D::flat(p(0.0, 0.0), p(20.0, 0.0), p(0.0, 20.0), RED);
        let second = Triangle2D::flat(p(0.0, 0.0), p(20.0, 0.0), p(0.0, 20.0), RED);
        let mut screen = ScreenSpace::new(24, 24);
        screen.clear(BACKGROUND);
        rasterize(&mut screen, &[first, second], [10, 200, 10], 2);
        // both triangles cover (4,4); the list is drawn in order, so the
        // final color is simply the fill color of the last write
        assert_eq!(screen.get_pixel(4, 4), Some([10, 200, 10]));
    }

    #[test]
    fn degenerate_triangles_are_skipped_per_band() {
        let tri = Triangle2D::flat(p(1.0, 1.0), p(4.0, 4.0), p(8.0, 8.0), RED);
        let mut screen = ScreenSpace::new(16, 16);
        screen.clear(BACKGROUND);
        rasterize(&mut screen, &[tri], RED, 2);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(screen.get_pixel(x, y), Some(BACKGROUND));
            }
        }
    }
}
