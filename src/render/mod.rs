//! Software backend: replays a retained [`Scene`] into an RGBA8
//! framebuffer.
//!
//! Scene geometry is widget-local with y up and dial angles clockwise from
//! 12 o'clock; this module owns the flip to y-down pixel rows. A pixel's
//! dial angle is `atan2(dx, dy_up)`, which keeps the angular tests in the
//! same frame the widget emits.

mod primitives;
mod text;

pub use primitives::needle_sprite;
pub use text::FontBook;

use crate::config::Color;
use crate::geometry::Point;
use crate::scene::{Primitive, RgbaTexture, Scene, TextTexture};

use primitives::{set_pixel, thick_line};

/// Fill the whole framebuffer with an opaque color.
pub fn clear(frame: &mut [u8], color: Color) {
    for chunk in frame.chunks_exact_mut(4) {
        chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
    }
}

/// Replay every group back-to-front.
pub fn rasterize(scene: &Scene, frame: &mut [u8], width: usize, height: usize) {
    if width == 0 || height == 0 || frame.len() < width * height * 4 {
        return;
    }
    for prim in scene.iter() {
        match prim {
            Primitive::Wedge {
                center,
                radius,
                a0,
                a1,
                color,
            } => radial_band(
                frame,
                width,
                height,
                *center,
                0.0,
                *radius,
                Some((*a0, *a1)),
                *color,
            ),
            Primitive::Ring {
                center,
                radius,
                width: band,
                a0,
                a1,
                color,
            } => radial_band(
                frame,
                width,
                height,
                *center,
                (radius - band).max(0.0),
                *radius,
                Some((*a0, *a1)),
                *color,
            ),
            Primitive::Arc {
                center,
                radius,
                width: stroke,
                a0,
                a1,
                color,
            } => radial_band(
                frame,
                width,
                height,
                *center,
                (radius - stroke / 2.0).max(0.0),
                radius + stroke / 2.0,
                Some((*a0, *a1)),
                *color,
            ),
            Primitive::Circle {
                center,
                radius,
                width: stroke,
                color,
            } => radial_band(
                frame,
                width,
                height,
                *center,
                (radius - stroke / 2.0).max(0.0),
                radius + stroke / 2.0,
                None,
                *color,
            ),
            Primitive::Polyline {
                points,
                width: stroke,
                color,
            } => {
                let (r, g, b) = color.as_tuple();
                for pair in points.windows(2) {
                    let (x0, y0) = to_screen(pair[0], height);
                    let (x1, y1) = to_screen(pair[1], height);
                    thick_line(
                        &mut |x, y, aa| {
                            if x >= 0 && y >= 0 {
                                set_pixel(frame, width, x as usize, y as usize, r, g, b, aa);
                            }
                        },
                        x0,
                        y0,
                        x1,
                        y1,
                        *stroke as f32,
                        false,
                    );
                }
            }
            Primitive::Text {
                pos,
                color,
                texture,
            } => blit_text(frame, width, height, *pos, *color, texture),
            Primitive::Image {
                pos,
                width: w,
                height: h,
                texture,
            } => blit_image(frame, width, height, *pos, *w, *h, texture),
            Primitive::Sprite {
                origin,
                half,
                angle,
                texture,
            } => blit_sprite(frame, width, height, *origin, *half, *angle, texture),
        }
    }
}

fn to_screen(p: Point, height: usize) -> (i32, i32) {
    (
        p.x.round() as i32,
        ((height as f64 - 1.0) - p.y).round() as i32,
    )
}

/// Fill the radial band `[r_in, r_out]` around `center`, optionally limited
/// to the dial-angle range `(a0, a1)` (order-insensitive, span <= 360).
#[allow(clippy::too_many_arguments)]
fn radial_band(
    frame: &mut [u8],
    width: usize,
    height: usize,
    center: Point,
    r_in: f64,
    r_out: f64,
    angular: Option<(f64, f64)>,
    color: Color,
) {
    let (cr, cg, cb) = color.as_tuple();
    let top = height as f64 - 1.0;
    let x_lo = ((center.x - r_out - 1.0).floor().max(0.0)) as usize;
    let x_hi = ((center.x + r_out + 1.0).ceil().min(width as f64 - 1.0)) as usize;
    let y_lo = ((top - center.y - r_out - 1.0).floor().max(0.0)) as usize;
    let y_hi = ((top - center.y + r_out + 1.0).ceil().min(top)) as usize;
    if x_lo > x_hi || y_lo > y_hi {
        return;
    }
    let (lo, span) = match angular {
        Some((a0, a1)) => (a0.min(a1), (a1 - a0).abs()),
        None => (0.0, 360.0),
    };
    for py in y_lo..=y_hi {
        for px in x_lo..=x_hi {
            let dx = px as f64 - center.x;
            let dy = (top - py as f64) - center.y;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > r_out + 1.0 || dist < r_in - 1.0 {
                continue;
            }
            if span < 360.0 {
                let deg = dx.atan2(dy).to_degrees();
                let d = (deg - lo).rem_euclid(360.0);
                if d > span {
                    continue;
                }
            }
            let aa = if dist > r_out {
                1.0 - (dist - r_out).min(1.0)
            } else if dist < r_in {
                1.0 - (r_in - dist).min(1.0)
            } else {
                1.0
            };
            if aa > 0.0 {
                set_pixel(frame, width, px, py, cr, cg, cb, aa as f32);
            }
        }
    }
}

fn blit_text(
    frame: &mut [u8],
    width: usize,
    height: usize,
    pos: Point,
    color: Color,
    texture: &TextTexture,
) {
    let (r, g, b) = color.as_tuple();
    let top = height as f64 - 1.0;
    let left = (pos.x - f64::from(texture.width) / 2.0).round() as i32;
    let sy_top = ((top - pos.y) - f64::from(texture.height) / 2.0).round() as i32;
    for row in 0..texture.height as i32 {
        for col in 0..texture.width as i32 {
            let cov = texture.coverage[(row * texture.width as i32 + col) as usize];
            if cov == 0 {
                continue;
            }
            let x = left + col;
            let y = sy_top + row;
            if x >= 0 && y >= 0 {
                set_pixel(
                    frame,
                    width,
                    x as usize,
                    y as usize,
                    r,
                    g,
                    b,
                    f32::from(cov) / 255.0,
                );
            }
        }
    }
}

fn blit_image(
    frame: &mut [u8],
    width: usize,
    height: usize,
    pos: Point,
    dest_w: f64,
    dest_h: f64,
    texture: &RgbaTexture,
) {
    let dw = dest_w.round() as i32;
    let dh = dest_h.round() as i32;
    if dw <= 0 || dh <= 0 || texture.width == 0 || texture.height == 0 {
        return;
    }
    let top = height as f64 - 1.0;
    let left = (pos.x - dest_w / 2.0).round() as i32;
    let sy_top = ((top - pos.y) - dest_h / 2.0).round() as i32;
    for row in 0..dh {
        for col in 0..dw {
            // Nearest-neighbor sample.
            let sx = (col * texture.width as i32 / dw).min(texture.width as i32 - 1);
            let sy = (row * texture.height as i32 / dh).min(texture.height as i32 - 1);
            let idx = (sy as usize * texture.width as usize + sx as usize) * 4;
            let a = texture.pixels[idx + 3];
            if a == 0 {
                continue;
            }
            let x = left + col;
            let y = sy_top + row;
            if x >= 0 && y >= 0 {
                set_pixel(
                    frame,
                    width,
                    x as usize,
                    y as usize,
                    texture.pixels[idx],
                    texture.pixels[idx + 1],
                    texture.pixels[idx + 2],
                    f32::from(a) / 255.0,
                );
            }
        }
    }
}

/// Draw a square sprite rotated about its origin by `angle` dial degrees.
/// Pixels are inverse-rotated into texture space, so only the transform
/// parameter differs between frames.
fn blit_sprite(
    frame: &mut [u8],
    width: usize,
    height: usize,
    origin: Point,
    half: f64,
    angle: f64,
    texture: &RgbaTexture,
) {
    if texture.width == 0 || texture.height == 0 || half <= 0.0 {
        return;
    }
    let top = height as f64 - 1.0;
    let reach = half * std::f64::consts::SQRT_2 + 1.0;
    let (sin_a, cos_a) = angle.to_radians().sin_cos();
    let scale = f64::from(texture.width) / (half * 2.0);

    let x_lo = ((origin.x - reach).floor().max(0.0)) as usize;
    let x_hi = ((origin.x + reach).ceil().min(width as f64 - 1.0)) as usize;
    let y_lo = ((top - origin.y - reach).floor().max(0.0)) as usize;
    let y_hi = ((top - origin.y + reach).ceil().min(top)) as usize;
    if x_lo > x_hi || y_lo > y_hi {
        return;
    }
    for py in y_lo..=y_hi {
        for px in x_lo..=x_hi {
            let ox = px as f64 - origin.x;
            let oy = (top - py as f64) - origin.y;
            // Counter-rotate the offset back into the unrotated sprite.
            let u = ox * cos_a - oy * sin_a;
            let v = ox * sin_a + oy * cos_a;
            let tx = ((half + u) * scale).floor() as i32;
            let ty = ((half - v) * scale).floor() as i32;
            if tx < 0 || ty < 0 || tx >= texture.width as i32 || ty >= texture.height as i32 {
                continue;
            }
            let idx = (ty as usize * texture.width as usize + tx as usize) * 4;
            let a = texture.pixels[idx + 3];
            if a > 0 {
                set_pixel(
                    frame,
                    width,
                    px,
                    py,
                    texture.pixels[idx],
                    texture.pixels[idx + 1],
                    texture.pixels[idx + 2],
                    f32::from(a) / 255.0,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Group, Scene};

    fn red_at(frame: &[u8], width: usize, x: usize, y: usize) -> u8 {
        frame[(y * width + x) * 4]
    }

    #[test]
    fn clear_fills_opaque() {
        let mut frame = vec![0u8; 8 * 8 * 4];
        clear(&mut frame, Color::new(1, 2, 3));
        assert_eq!(&frame[0..4], &[1, 2, 3, 0xff]);
        assert_eq!(&frame[frame.len() - 4..], &[1, 2, 3, 0xff]);
    }

    #[test]
    fn wedge_covers_only_its_angular_range() {
        let mut scene = Scene::new();
        let size = 101usize;
        let center = Point::new(50.0, 50.0);
        // Quarter wedge from straight up to the right.
        scene.push(
            Group::Sectors,
            Primitive::Wedge {
                center,
                radius: 40.0,
                a0: 0.0,
                a1: 90.0,
                color: Color::new(0xff, 0, 0),
            },
        );
        let mut frame = vec![0u8; size * size * 4];
        rasterize(&scene, &mut frame, size, size);
        // Dial angle 45 (up-right) is inside; local (70, 70) is screen
        // (70, 100 - 1 - 70).
        assert!(red_at(&frame, size, 70, 30) > 0);
        // Dial angle 225 (down-left) is outside.
        assert_eq!(red_at(&frame, size, 30, 70), 0);
    }

    #[test]
    fn sprite_rotation_moves_the_blade() {
        let mut scene = Scene::new();
        let size = 101usize;
        let center = Point::new(50.0, 50.0);
        let tex = needle_sprite(40.0, Color::new(0xff, 0, 0));
        let h = scene.push_sprite(Group::Needle, center, 40.0, 0.0, tex);

        let mut frame = vec![0u8; size * size * 4];
        rasterize(&scene, &mut frame, size, size);
        // Angle 0: blade points up -> local (50, 80) = screen (50, 20).
        assert!(red_at(&frame, size, 50, 20) > 0);

        scene.set_rotation(h, 90.0);
        let mut frame = vec![0u8; size * size * 4];
        rasterize(&scene, &mut frame, size, size);
        // Angle 90: blade points right -> local (80, 50) = screen (80, 50).
        assert!(red_at(&frame, size, 80, 50) > 0);
        assert_eq!(red_at(&frame, size, 50, 20), 0);
    }

    #[test]
    fn undersized_frame_is_left_alone() {
        let scene = Scene::new();
        let mut frame = vec![0u8; 8];
        rasterize(&scene, &mut frame, 10, 10);
        assert!(frame.iter().all(|&b| b == 0));
    }
}
