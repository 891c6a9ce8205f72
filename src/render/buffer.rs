//! Color and the destination pixel buffer
//!
//! The buffer is plain RGBA bytes, written in place by the drawing
//! functions. Out-of-bounds writes are skipped silently so the
//! per-pixel loops never have to branch on errors.

use crate::math3d::{Float, Tuple};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0, a: 255 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255, a: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Barycentric gradient: the three weights become the red, green,
    /// and blue channels.
    pub fn from_weights(alfa: Float, beta: Float, gamma: Float) -> Self {
        Self::new(
            (alfa * 255.0) as u8,
            (beta * 255.0) as u8,
            (gamma * 255.0) as u8,
        )
    }

    /// From a color-lens tuple with channels in [0, 1].
    pub fn from_tuple(t: Tuple) -> Self {
        Self::new(
            (t.r().clamp(0.0, 1.0) * 255.0) as u8,
            (t.g().clamp(0.0, 1.0) * 255.0) as u8,
            (t.b().clamp(0.0, 1.0) * 255.0) as u8,
        )
    }

    /// Linear blend between two colors; t in [0, 1].
    pub fn lerp(from: Color, to: Color, t: Float) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as Float + (b as Float - a as Float) * t) as u8;
        Self {
            r: mix(from.r, to.r),
            g: mix(from.g, to.g),
            b: mix(from.b, to.b),
            a: mix(from.a, to.a),
        }
    }

    /// Convert to [u8; 4] for the framebuffer
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("pixel storage does not match buffer dimensions")]
    SizeMismatch,
    #[error("image write failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Destination surface for software rendering
pub struct PixelBuffer {
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
    pub width: usize,
    pub height: usize,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }

    /// Pixel at (x, y); black outside the buffer.
    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            Color::with_alpha(
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            )
        } else {
            Color::BLACK
        }
    }

    /// Write the buffer as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), BufferError> {
        let img = image::RgbaImage::from_raw(
            self.width as u32,
            self.height as u32,
            self.pixels.clone(),
        )
        .ok_or(BufferError::SizeMismatch)?;
        img.save(path)?;
        Ok(())
    }
}
