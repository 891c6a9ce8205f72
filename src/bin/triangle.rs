//! Triangle fill demo
//!
//! Renders two triangles (one with a barycentric gradient, one flat)
//! with outlines and corner markers into a PNG. Pass an output path
//! and optionally a scene RON file:
//!
//!   triangle [output.png] [scene.ron]

use glint::render::{draw_circle, draw_line, Color, Vertex2};
use glint::scene::{Scene, SceneTriangle};

const SCREEN_WIDTH: usize = 800;
const SCREEN_HEIGHT: usize = 600;

fn default_scene() -> Scene {
    let w = SCREEN_WIDTH as f64;
    let h = SCREEN_HEIGHT as f64;

    let v0 = Vertex2::new(w / 2.0, h / 4.0);
    let v1 = Vertex2::new(w / 2.0 + 100.0, h / 2.0);
    let v2 = Vertex2::new(w / 2.0 - 100.0, h / 2.0 - 100.0);
    let v3 = Vertex2::new(v1.x, v0.y);

    Scene {
        width: SCREEN_WIDTH,
        height: SCREEN_HEIGHT,
        background: Color::BLACK,
        triangles: vec![
            SceneTriangle {
                v0,
                v1,
                v2,
                color: Color::RED,
                gradient: true,
            },
            SceneTriangle {
                v0,
                v1: v3,
                v2: v1,
                color: Color::GREEN,
                gradient: false,
            },
        ],
        splines: Vec::new(),
    }
}

fn main() {
    env_logger::init();
    log::debug!("glint v{}", glint::VERSION);

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "triangle.png".to_string());

    let scene = match args.next() {
        Some(path) => match Scene::load(&path) {
            Ok(scene) => scene,
            Err(e) => {
                log::error!("failed to load scene {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => default_scene(),
    };

    let mut buf = scene.render();

    // Outline each triangle and mark its corners, like the windowed demo.
    for tri in &scene.triangles {
        draw_line(&mut buf, tri.v0, tri.v1, tri.color, tri.gradient);
        draw_line(&mut buf, tri.v0, tri.v2, tri.color, tri.gradient);
        draw_line(&mut buf, tri.v1, tri.v2, tri.color, tri.gradient);
        for corner in [tri.v0, tri.v1, tri.v2] {
            draw_circle(&mut buf, corner, 10.0, tri.color, tri.gradient);
        }
    }

    match buf.save_png(&output) {
        Ok(()) => log::info!("wrote {}", output),
        Err(e) => {
            log::error!("failed to write {}: {}", output, e);
            std::process::exit(1);
        }
    }
}
