//! Triangle fill, line, and circle drawing
//!
//! The fill walks the triangle's bounding box and tests each pixel with
//! the three edge functions; the weights double as barycentric
//! coordinates for the color gradient. Lines and circles are stepped
//! parametrically, one pixel per step.

use super::{
    bounding_box, edge_cross, length, rotate_about, vector, Color, PixelBuffer, Vertex2,
};
use crate::math3d::{Float, EPSILON};

/// Fill a triangle with a solid color or a barycentric gradient.
///
/// Vertices must wind counter-clockwise: a zero, negative, or
/// epsilon-small signed area draws nothing. Each row's scan stops at
/// the first outside pixel after the inside span was entered; that
/// shortcut holds for convex input only, so this is strictly a
/// triangle filler.
pub fn fill_triangle(
    buf: &mut PixelBuffer,
    v0: Vertex2,
    v1: Vertex2,
    v2: Vertex2,
    color: Color,
    gradient: bool,
) {
    let area = edge_cross(v0, v1, v2);
    if area <= EPSILON {
        log::debug!("triangle skipped: signed area {} not positive", area);
        return;
    }

    let bb = bounding_box(v0, v1, v2);
    let x_start = bb.min.x.max(0.0) as i32;
    let x_end = bb.max.x.min(buf.width as Float) as i32;
    let y_start = bb.min.y.max(0.0) as i32;
    let y_end = bb.max.y.min(buf.height as Float) as i32;

    for y in y_start..y_end {
        let mut inside_detected = false;

        for x in x_start..x_end {
            let p = Vertex2::new(x as Float, y as Float);

            // Edge crosses against the point double as the (unscaled)
            // barycentric weights.
            let w0 = edge_cross(v1, v2, p);
            let w1 = edge_cross(v0, v1, p);
            let w2 = edge_cross(v2, v0, p);

            if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                inside_detected = true;
                let px = if gradient {
                    Color::from_weights(w0 / area, w1 / area, w2 / area)
                } else {
                    color
                };
                buf.set_pixel(x as usize, y as usize, px);
            } else if inside_detected {
                // Past the far edge of the span; the rest of the row is
                // outside too.
                break;
            }
        }
    }
}

/// Draw a line by stepping one pixel per unit of line length.
/// Drawing stops at the first pixel outside the buffer.
pub fn draw_line(buf: &mut PixelBuffer, v0: Vertex2, v1: Vertex2, color: Color, gradient: bool) {
    let num_pixels = length(v0, v1);
    if num_pixels < 1.0 {
        return;
    }

    let direction = vector(v0, v1);
    let mut idx: Float = 0.0;

    while idx < num_pixels {
        let p = v0 + direction * (idx / num_pixels);
        let x = p.x as i32;
        let y = p.y as i32;
        if x < 0 || y < 0 || x >= buf.width as i32 || y >= buf.height as i32 {
            break;
        }

        let px = if gradient {
            let alfa = idx / num_pixels;
            let gamma = 1.0 - alfa;
            let beta = (alfa - gamma).abs();
            Color::from_weights(alfa, beta, gamma)
        } else {
            color
        };
        buf.set_pixel(x as usize, y as usize, px);

        idx += 1.0;
    }
}

/// Draw a circle outline by rotating a radius vector one pixel of arc
/// at a time. In gradient mode each step also draws a spoke from the
/// center. Drawing stops at the first pixel outside the buffer.
pub fn draw_circle(
    buf: &mut PixelBuffer,
    center: Vertex2,
    radius: Float,
    color: Color,
    gradient: bool,
) {
    let num_pixels = radius * 2.0 * std::f64::consts::PI;
    if num_pixels < 1.0 {
        return;
    }

    let angle_delta = 1.0 / num_pixels;
    let stop_angle = 2.0 * std::f64::consts::PI;
    let mut v = center + Vertex2::new(radius, 0.0);
    let mut angle: Float = 0.0;

    while angle < stop_angle {
        v = rotate_about(center, v, angle_delta);

        let x = v.x as i32;
        let y = v.y as i32;
        if x < 0 || y < 0 || x >= buf.width as i32 || y >= buf.height as i32 {
            break;
        }

        if gradient {
            draw_line(buf, center, v, color, gradient);
        }
        buf.set_pixel(x as usize, y as usize, color);

        angle += angle_delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_covers_interior() {
        let mut buf = PixelBuffer::new(20, 20);
        // Winding order with positive signed area in screen coordinates.
        let v0 = Vertex2::new(2.0, 2.0);
        let v1 = Vertex2::new(18.0, 18.0);
        let v2 = Vertex2::new(2.0, 18.0);
        fill_triangle(&mut buf, v0, v1, v2, Color::RED, false);

        assert_eq!(buf.get_pixel(5, 12), Color::RED);
        assert_eq!(buf.get_pixel(3, 16), Color::RED);
        // Far corner outside the hypotenuse stays untouched.
        assert_eq!(buf.get_pixel(17, 3), Color::with_alpha(0, 0, 0, 0));
    }

    #[test]
    fn test_fill_rejects_clockwise_winding() {
        let mut buf = PixelBuffer::new(20, 20);
        let v0 = Vertex2::new(2.0, 2.0);
        let v1 = Vertex2::new(2.0, 18.0);
        let v2 = Vertex2::new(18.0, 18.0);
        fill_triangle(&mut buf, v0, v1, v2, Color::RED, false);
        assert!(buf.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_rejects_degenerate_triangle() {
        let mut buf = PixelBuffer::new(20, 20);
        let v = Vertex2::new(5.0, 5.0);
        fill_triangle(&mut buf, v, v, v, Color::RED, false);
        fill_triangle(
            &mut buf,
            Vertex2::new(1.0, 1.0),
            Vertex2::new(5.0, 5.0),
            Vertex2::new(9.0, 9.0),
            Color::RED,
            false,
        );
        assert!(buf.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_gradient_weights_sum_to_full_intensity() {
        let mut buf = PixelBuffer::new(20, 20);
        let v0 = Vertex2::new(0.0, 0.0);
        let v1 = Vertex2::new(19.0, 19.0);
        let v2 = Vertex2::new(0.0, 19.0);
        fill_triangle(&mut buf, v0, v1, v2, Color::WHITE, true);

        // The channels carry the barycentric weights, so they add up to
        // (nearly) full intensity everywhere inside.
        let c = buf.get_pixel(4, 12);
        let sum = c.r as u32 + c.g as u32 + c.b as u32;
        assert!(sum >= 253 && sum <= 255, "weight sum was {}", sum);
    }

    #[test]
    fn test_fill_clamps_to_buffer() {
        let mut buf = PixelBuffer::new(10, 10);
        fill_triangle(
            &mut buf,
            Vertex2::new(-20.0, -20.0),
            Vertex2::new(40.0, 40.0),
            Vertex2::new(-20.0, 40.0),
            Color::BLUE,
            false,
        );
        assert_eq!(buf.get_pixel(5, 7), Color::BLUE);
    }

    #[test]
    fn test_line_endpoints_and_direction() {
        let mut buf = PixelBuffer::new(20, 20);
        draw_line(
            &mut buf,
            Vertex2::new(2.0, 3.0),
            Vertex2::new(12.0, 3.0),
            Color::GREEN,
            false,
        );
        assert_eq!(buf.get_pixel(2, 3), Color::GREEN);
        assert_eq!(buf.get_pixel(11, 3), Color::GREEN);
        assert_eq!(buf.get_pixel(13, 3), Color::with_alpha(0, 0, 0, 0));
    }

    #[test]
    fn test_line_shorter_than_a_pixel_draws_nothing() {
        let mut buf = PixelBuffer::new(20, 20);
        draw_line(
            &mut buf,
            Vertex2::new(5.0, 5.0),
            Vertex2::new(5.2, 5.2),
            Color::GREEN,
            false,
        );
        assert!(buf.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_line_stops_at_buffer_edge() {
        let mut buf = PixelBuffer::new(10, 10);
        draw_line(
            &mut buf,
            Vertex2::new(5.0, 5.0),
            Vertex2::new(25.0, 5.0),
            Color::GREEN,
            false,
        );
        assert_eq!(buf.get_pixel(9, 5), Color::GREEN);
    }

    #[test]
    fn test_circle_lands_on_cardinal_points() {
        let mut buf = PixelBuffer::new(40, 40);
        let center = Vertex2::new(20.0, 20.0);
        draw_circle(&mut buf, center, 10.0, Color::WHITE, false);

        // The stepped outline passes within a pixel of the cardinal
        // points of the circle.
        let hit_near = |cx: usize, cy: usize, buf: &PixelBuffer| {
            (cx.saturating_sub(1)..=cx + 1).any(|x| {
                (cy.saturating_sub(1)..=cy + 1).any(|y| buf.get_pixel(x, y) == Color::WHITE)
            })
        };
        assert!(hit_near(30, 20, &buf));
        assert!(hit_near(10, 20, &buf));
        assert!(hit_near(20, 30, &buf));
        assert!(hit_near(20, 10, &buf));
        // Center stays empty without the gradient spokes.
        assert_eq!(buf.get_pixel(20, 20), Color::with_alpha(0, 0, 0, 0));
    }

    #[test]
    fn test_circle_smaller_than_a_pixel_draws_nothing() {
        let mut buf = PixelBuffer::new(10, 10);
        draw_circle(&mut buf, Vertex2::new(5.0, 5.0), 0.1, Color::WHITE, false);
        assert!(buf.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_circle_gradient_fills_spokes() {
        let mut buf = PixelBuffer::new(40, 40);
        draw_circle(&mut buf, Vertex2::new(20.0, 20.0), 8.0, Color::WHITE, true);
        // A spoke from the center crosses the midpoint of the radius.
        let c = buf.get_pixel(24, 20);
        assert_ne!(c, Color::with_alpha(0, 0, 0, 0));
    }
}
