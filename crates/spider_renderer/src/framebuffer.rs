//! RGBA float framebuffer.
//!
//! Rows are stored bottom-up: pixel `(i, j)` lives at `j * width + i` and
//! `j = 0` is the bottom row, the same convention the camera uses.

use crate::renderer::color_to_rgba;
use crate::Color;
use std::path::Path;

/// Per-pixel color output of a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, i: u32, j: u32) -> usize {
        j as usize * self.width as usize + i as usize
    }

    /// Get the pixel at (i, j).
    pub fn get(&self, i: u32, j: u32) -> Color {
        self.pixels[self.index(i, j)]
    }

    /// Set the pixel at (i, j).
    pub fn set(&mut self, i: u32, j: u32, color: Color) {
        let index = self.index(i, j);
        self.pixels[index] = color;
    }

    /// Fill every pixel with one color.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Flat RGBA floats, bottom row first, for float presentation layers.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// 8-bit RGBA bytes with the top row first, as image files expect.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for j in (0..self.height).rev() {
            for i in 0..self.width {
                bytes.extend_from_slice(&color_to_rgba(self.get(i, j)));
            }
        }
        bytes
    }

    /// Save as an 8-bit RGBA PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.to_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent_black() {
        let fb = Framebuffer::new(3, 2);
        assert_eq!(fb.pixels().len(), 6);
        assert!(fb.pixels().iter().all(|&c| c == Color::ZERO));
    }

    #[test]
    fn test_set_get_and_layout() {
        let mut fb = Framebuffer::new(3, 2);
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        fb.set(2, 1, red);

        assert_eq!(fb.get(2, 1), red);
        assert_eq!(fb.pixels()[5], red);
    }

    #[test]
    fn test_as_floats() {
        let mut fb = Framebuffer::new(2, 1);
        fb.set(1, 0, Color::new(0.1, 0.2, 0.3, 0.4));

        let floats = fb.as_floats();
        assert_eq!(floats.len(), 8);
        assert_eq!(&floats[4..], &[0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_to_rgba8_flips_rows() {
        let mut fb = Framebuffer::new(1, 2);
        fb.set(0, 0, Color::new(1.0, 0.0, 0.0, 1.0)); // bottom
        fb.set(0, 1, Color::new(0.0, 0.0, 1.0, 1.0)); // top

        let bytes = fb.to_rgba8();
        assert_eq!(&bytes[..4], &[0, 0, 255, 255]);
        assert_eq!(&bytes[4..], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(2, 2);
        fb.clear(Color::ONE);
        assert!(fb.pixels().iter().all(|&c| c == Color::ONE));
    }
}
