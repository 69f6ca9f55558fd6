//! RGBA pixel buffer with a fixed capacity and a smaller active region.
//!
//! The canvas byte buffer is allocated once at the maximum size
//! ([`MAX_WIDTH`] x [`MAX_HEIGHT`]) and never reallocates; a draw call picks
//! the active width/height it actually paints. Pixels are row-major with
//! stride = active width * 4 bytes, so the host reads a densely packed image
//! regardless of the active size.

use serde::{Deserialize, Serialize};

/// Maximum canvas width in pixels.
pub const MAX_WIDTH: usize = 512;

/// Maximum canvas height in pixels.
pub const MAX_HEIGHT: usize = 512;

/// Default active width/height before any draw call.
pub const DEFAULT_SIZE: usize = 256;

/// An RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black, the cleared-canvas background.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    /// Opaque red, used for point samples.
    pub const RED: Rgba = Rgba::new(255, 0, 0, 255);
    /// Opaque white, used for pose markers.
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    /// Create a color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack into the host interchange format: `(A<<24)|(B<<16)|(G<<8)|R`.
    ///
    /// Red lands in the least-significant byte, alpha in the most
    /// significant. This byte ordering is a wire contract with the host and
    /// must stay bit-exact.
    #[inline]
    pub const fn pack(self) -> u32 {
        ((self.a as u32) << 24) | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }
}

/// Fixed-capacity RGBA8 pixel buffer with an active sub-region.
///
/// Invariant: `1 <= width <= MAX_WIDTH`, `1 <= height <= MAX_HEIGHT`.
/// [`set_active_size`](Canvas::set_active_size) expects dimensions the
/// caller has already normalized into that range.
#[derive(Clone, Debug)]
pub struct Canvas {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl Canvas {
    /// Create a canvas at full capacity with the default 256x256 active
    /// region. The whole buffer starts zeroed (transparent black).
    pub fn new() -> Self {
        Self {
            pixels: vec![0; MAX_WIDTH * MAX_HEIGHT * 4],
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
        }
    }

    /// Active width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Active height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Set the active region. `width`/`height` must already be in
    /// `1..=MAX_WIDTH` / `1..=MAX_HEIGHT`; values are clamped as a last
    /// resort so the invariant can never break.
    pub fn set_active_size(&mut self, width: usize, height: usize) {
        self.width = width.clamp(1, MAX_WIDTH);
        self.height = height.clamp(1, MAX_HEIGHT);
    }

    /// Fill every pixel of the active region with `color`.
    pub fn clear(&mut self, color: Rgba) {
        let stride = self.width * 4;
        for y in 0..self.height {
            let row = y * stride;
            for x in 0..self.width {
                let o = row + x * 4;
                self.pixels[o] = color.r;
                self.pixels[o + 1] = color.g;
                self.pixels[o + 2] = color.b;
                self.pixels[o + 3] = color.a;
            }
        }
    }

    /// Write one pixel. `x`/`y` must be inside the active region.
    #[inline]
    pub fn put(&mut self, x: usize, y: usize, color: Rgba) {
        debug_assert!(x < self.width && y < self.height);
        let o = (y * self.width + x) * 4;
        self.pixels[o] = color.r;
        self.pixels[o + 1] = color.g;
        self.pixels[o + 2] = color.b;
        self.pixels[o + 3] = color.a;
    }

    /// Read the pixel at `index = row * width + col`, packed as
    /// `0xAABBGGRR` (see [`Rgba::pack`]). Indices outside
    /// `0..width*height` return 0 (transparent black) rather than
    /// signaling.
    #[inline]
    pub fn pixel(&self, index: usize) -> u32 {
        if index >= self.width * self.height {
            return 0;
        }
        let o = index * 4;
        Rgba::new(
            self.pixels[o],
            self.pixels[o + 1],
            self.pixels[o + 2],
            self.pixels[o + 3],
        )
        .pack()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_byte_order() {
        // R in the LSB, A in the MSB.
        assert_eq!(Rgba::new(0x11, 0x22, 0x33, 0x44).pack(), 0x44332211);
        assert_eq!(Rgba::RED.pack(), 0xFF0000FF);
        assert_eq!(Rgba::BLACK.pack(), 0xFF000000);
        assert_eq!(Rgba::WHITE.pack(), 0xFFFFFFFF);
    }

    #[test]
    fn test_default_active_size() {
        let canvas = Canvas::new();
        assert_eq!(canvas.width(), DEFAULT_SIZE);
        assert_eq!(canvas.height(), DEFAULT_SIZE);
    }

    #[test]
    fn test_clear_fills_active_region() {
        let mut canvas = Canvas::new();
        canvas.set_active_size(4, 3);
        canvas.clear(Rgba::BLACK);

        for i in 0..4 * 3 {
            assert_eq!(canvas.pixel(i), 0xFF000000);
        }
    }

    #[test]
    fn test_put_then_pixel_round_trip() {
        let mut canvas = Canvas::new();
        canvas.set_active_size(8, 8);
        canvas.clear(Rgba::BLACK);
        canvas.put(3, 2, Rgba::new(10, 20, 30, 40));

        let packed = canvas.pixel(2 * 8 + 3);
        assert_eq!(packed, (40 << 24) | (30 << 16) | (20 << 8) | 10);
    }

    #[test]
    fn test_out_of_range_pixel_reads_zero() {
        let mut canvas = Canvas::new();
        canvas.set_active_size(4, 4);
        canvas.clear(Rgba::WHITE);

        assert_eq!(canvas.pixel(16), 0);
        assert_eq!(canvas.pixel(usize::MAX / 8), 0);
    }

    #[test]
    fn test_set_active_size_clamps() {
        let mut canvas = Canvas::new();
        canvas.set_active_size(0, MAX_HEIGHT + 1);
        assert_eq!(canvas.width(), 1);
        assert_eq!(canvas.height(), MAX_HEIGHT);
    }
}
