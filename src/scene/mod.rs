//! Scene description files
//!
//! RON (Rusty Object Notation) descriptions of what the demo binaries
//! draw: a canvas, filled triangles, and spline paths. Loading and
//! saving mirror each other; `render` runs the whole pipeline into a
//! fresh pixel buffer.

use crate::math3d::{Float, Tuple};
use crate::render::{draw_line, fill_triangle, Color, PixelBuffer, Vertex2};
use crate::spline::CatmullRom;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

/// One filled triangle in screen space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneTriangle {
    pub v0: Vertex2,
    pub v1: Vertex2,
    pub v2: Vertex2,
    pub color: Color,
    pub gradient: bool,
}

/// One spline path in screen space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSpline {
    pub ctrl_points: Vec<Tuple>,
    pub color: Color,
    /// How many evaluation steps to draw.
    pub samples: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub width: usize,
    pub height: usize,
    pub background: Color,
    pub triangles: Vec<SceneTriangle>,
    pub splines: Vec<SceneSpline>,
}

impl Scene {
    /// Load a scene from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Scene, SceneError> {
        let contents = fs::read_to_string(path)?;
        let scene = Self::from_ron(&contents)?;
        log::debug!(
            "scene loaded: {} triangles, {} splines",
            scene.triangles.len(),
            scene.splines.len()
        );
        Ok(scene)
    }

    /// Parse a scene from a RON string (for embedded scenes or testing).
    pub fn from_ron(s: &str) -> Result<Scene, SceneError> {
        Ok(ron::from_str(s)?)
    }

    /// Save the scene to a RON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneError> {
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .indentor("  ".to_string());
        let contents = ron::ser::to_string_pretty(self, config)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Rasterize the scene into a fresh buffer: triangles filled first,
    /// spline curves drawn over them sample to sample.
    pub fn render(&self) -> PixelBuffer {
        let mut buf = PixelBuffer::new(self.width, self.height);
        buf.clear(self.background);

        for tri in &self.triangles {
            fill_triangle(&mut buf, tri.v0, tri.v1, tri.v2, tri.color, tri.gradient);
        }

        for spline_desc in &self.splines {
            let spline = CatmullRom::new(&spline_desc.ctrl_points);
            if spline_desc.samples < 2 || spline.segments.is_empty() {
                continue;
            }
            let mut previous: Option<Vertex2> = None;
            for step in 0..=spline_desc.samples {
                let t = step as Float / spline_desc.samples as Float;
                let sample = spline.value_at(t);
                let current = Vertex2::new(sample.p.x, sample.p.y);
                if let Some(prev) = previous {
                    draw_line(&mut buf, prev, current, spline_desc.color, false);
                    if current.x >= 0.0 && current.y >= 0.0 {
                        buf.set_pixel(current.x as usize, current.y as usize, spline_desc.color);
                    }
                }
                previous = Some(current);
            }
        }

        buf
    }
}
