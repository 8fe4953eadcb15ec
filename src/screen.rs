use bytemuck::cast_slice_mut;
use std::simd::Mask;

/// Background clear color shared by every stage.
pub const BACKGROUND: [u8; 3] = [30, 30, 30];

/// RGBA pixel buffer plus a parallel f32 depth buffer, both flat,
/// indexed `(y * width + x)`. Dimensions are fixed for the session.
pub struct ScreenSpace {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    pub depth: Vec<f32>,
}

impl ScreenSpace {
    pub fn new(width: u32, height: u32) -> Self {
        let size_calc = (width * height) as usize;
        Self {
            width,
            height,
            rgba: vec![0; size_calc * 4],
            depth: vec![f32::INFINITY; size_calc],
        }
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.rgba[i] = color[0];
        self.rgba[i + 1] = color[1];
        self.rgba[i + 2] = color[2];
        self.rgba[i + 3] = 255;
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([self.rgba[i], self.rgba[i + 1], self.rgba[i + 2]])
    }

    /// Store up to four consecutive pixels of one row under a lane mask.
    /// Lanes that would land past the row end are dropped.
    pub fn set_pixel_row_quad(&mut self, x: u32, y: u32, color: [u8; 3], mask: Mask<i32, 4>) {
        if y >= self.height {
            return;
        }
        let base = (y * self.width + x) as usize;
        for lane in 0..4 {
            if mask.test(lane) && x + (lane as u32) < self.width {
                let idx = (base + lane) * 4;
                self.rgba[idx] = color[0];
                self.rgba[idx + 1] = color[1];
                self.rgba[idx + 2] = color[2];
                self.rgba[idx + 3] = 255;
            }
        }
    }

    pub fn set_depth(&mut self, x: u32, y: u32, value: f32) {
        let i = (y * self.width + x) as usize;
        self.depth[i] = value;
    }

    pub fn get_depth(&self, x: u32, y: u32) -> f32 {
        let i = (y * self.width + x) as usize;
        self.depth[i]
    }

    /// Single-threaded whole-buffer clear; the tile workers rely on this
    /// having run before dispatch.
    pub fn clear(&mut self, color: [u8; 3]) {
        let packed: u32 = u32::from_le_bytes([color[0], color[1], color[2], 255]);
        let buf_as_u32: &mut [u32] = cast_slice_mut(&mut self.rgba);
        buf_as_u32.fill(packed);
        self.depth.fill(f32::INFINITY);
    }
}
