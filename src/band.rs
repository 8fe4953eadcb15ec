use image::{Rgb, RgbImage};
use rand::Rng;

/// A contiguous run of image rows `[y0, y1)` owned by exactly one tile worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub y0: u32,
    pub y1: u32,
}

impl Band {
    pub fn rows(&self) -> u32 {
        self.y1 - self.y0
    }
}

/// Split `height` rows into `k` contiguous bands of `ceil(height / k)` rows;
/// the last band absorbs the remainder.
pub fn split_bands(height: u32, k: u32) -> Vec<Band> {
    let band_rows = height.div_ceil(k);
    (0..k)
        .map(|i| Band {
            y0: (i * band_rows).min(height),
            y1: ((i + 1) * band_rows).min(height),
        })
        .filter(|b| b.y0 < b.y1)
        .collect()
}

/// Worker count for the tile-parallel stage: one per logical core, capped.
pub fn worker_count(cap: u32) -> u32 {
    (num_cpus::get() as u32).min(cap).max(1)
}

/// Save the band layout to an image file to show which rows each worker owns
/// (NOT USED IN RENDERING PIPELINE).
pub fn save_band_layout(bands: &[Band], width: u32, height: u32, filename: &str) {
    let mut img = RgbImage::new(width, height);
    let mut rng = rand::thread_rng();

    for band in bands {
        let color = Rgb([
            rng.gen_range(0..=255),
            rng.gen_range(0..=255),
            rng.gen_range(0..=255),
        ]);
        for y in band.y0..band.y1 {
            for x in 0..width {
                img.put_pixel(x, y, color);
            }
        }
    }

    img.save(filename).expect("Failed to save image");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_workers_split_600_rows_evenly() {
        let bands = split_bands(600, 2);
        assert_eq!(bands, vec![Band { y0: 0, y1: 300 }, Band { y0: 300, y1: 600 }]);
    }

    #[test]
    fn bands_are_disjoint_and_cover_all_rows() {
        for (height, k) in [(600, 4), (601, 4), (599, 3), (10, 3), (7, 8)] {
            let bands = split_bands(height, k);
            let mut covered = 0;
            for pair in bands.windows(2) {
                assert_eq!(pair[0].y1, pair[1].y0, "gap or overlap at {pair:?}");
            }
            for band in &bands {
                assert!(band.rows() > 0);
                covered += band.rows();
            }
            assert_eq!(covered, height, "H={height} K={k}");
            assert_eq!(bands[0].y0, 0);
            assert_eq!(bands.last().unwrap().y1, height);
        }
    }

    #[test]
    fn band_rows_are_ceil_of_even_split() {
        let bands = split_bands(601, 4);
        assert_eq!(bands[0].rows(), 151);
        assert_eq!(bands.last().unwrap().rows(), 601 - 3 * 151);
    }
}
