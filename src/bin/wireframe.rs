//! Wireframe cube + spline demo
//!
//! Projects a cube and a square-wave Catmull-Rom spline through the
//! combined projection/screen conversion matrix and renders one frame
//! into a PNG:
//!
//!   wireframe [output.png]

use glint::math3d::{deg2rad, Matrix, Tuple};
use glint::render::{draw_circle, draw_line, Color, PixelBuffer, Projection, Vertex2};
use glint::spline::CatmullRom;

const SCREEN_WIDTH: usize = 800;
const SCREEN_HEIGHT: usize = 600;

/// Cube corners in model space, front face first.
fn cube_corners() -> [Tuple; 8] {
    let (near, far) = (16.0, 26.0);
    let r = 5.0;
    [
        Tuple::point(-r, -r, near),
        Tuple::point(r, -r, near),
        Tuple::point(r, r, near),
        Tuple::point(-r, r, near),
        Tuple::point(-r, -r, far),
        Tuple::point(r, -r, far),
        Tuple::point(r, r, far),
        Tuple::point(-r, r, far),
    ]
}

/// The 12 cube edges as corner index pairs.
const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

fn to_pixel(conversion: Matrix, p: Tuple) -> Vertex2 {
    let projected = conversion * p;
    Vertex2::new(projected.x, projected.y)
}

fn main() {
    env_logger::init();
    log::debug!("glint v{}", glint::VERSION);

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "wireframe.png".to_string());

    let projection = match Projection::new(
        SCREEN_WIDTH as f64,
        SCREEN_HEIGHT as f64,
        deg2rad(90.0),
        10.0,
        100.0,
    ) {
        Ok(p) => p,
        Err(e) => {
            log::error!("bad projection config: {}", e);
            std::process::exit(1);
        }
    };
    let conversion = projection.conversion_matrix();

    let mut buf = PixelBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    buf.clear(Color::BLACK);

    // Cube wireframe.
    let corners = cube_corners();
    let pixels: Vec<Vertex2> = corners.iter().map(|&p| to_pixel(conversion, p)).collect();
    for (a, b) in CUBE_EDGES {
        draw_line(&mut buf, pixels[a], pixels[b], Color::WHITE, false);
    }

    // Square-wave spline, faded from blue to white along its length.
    let spline = CatmullRom::square_wave(-0.5, 0.5, 14.0);
    let fade_from = Color::new(0x00, 0x0F, 0xFF);
    let fade_to = Color::WHITE;
    for sample in &spline.points {
        let v = to_pixel(conversion, sample.p);
        if v.x >= 0.0 && v.y >= 0.0 {
            let color = Color::lerp(fade_from, fade_to, sample.t);
            buf.set_pixel(v.x as usize, v.y as usize, color);
        }
    }
    for &cp in &spline.ctrl_points {
        draw_circle(&mut buf, to_pixel(conversion, cp), 5.0, Color::GREEN, false);
    }

    log::info!(
        "rendered cube ({} edges) and spline ({} samples, {} segments)",
        CUBE_EDGES.len(),
        spline.points.len(),
        spline.segments.len()
    );

    match buf.save_png(&output) {
        Ok(()) => log::info!("wrote {}", output),
        Err(e) => {
            log::error!("failed to write {}: {}", output, e);
            std::process::exit(1);
        }
    }
}
