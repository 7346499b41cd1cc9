//! Low-level pixel work: alpha-blended plotting, thick anti-aliased lines,
//! and the procedural needle sprite.

use crate::config::Color;
use crate::scene::RgbaTexture;

/// Blend one pixel into an RGBA8 framebuffer.
pub(crate) fn set_pixel(
    frame: &mut [u8],
    width: usize,
    x: usize,
    y: usize,
    r: u8,
    g: u8,
    b: u8,
    alpha: f32,
) {
    if x < width && y < frame.len() / (width * 4) {
        let idx = (y * width + x) * 4;
        let src = [r as f32, g as f32, b as f32, 255.0 * alpha];
        let dst = [
            frame[idx] as f32,
            frame[idx + 1] as f32,
            frame[idx + 2] as f32,
            frame[idx + 3] as f32,
        ];
        let a = src[3] / 255.0;
        let out = [
            (src[0] * a + dst[0] * (1.0 - a)).round() as u8,
            (src[1] * a + dst[1] * (1.0 - a)).round() as u8,
            (src[2] * a + dst[2] * (1.0 - a)).round() as u8,
            0xff,
        ];
        frame[idx..idx + 4].copy_from_slice(&out);
    }
}

/// Scan a thick anti-aliased segment, optionally tapered toward the far
/// end, handing coverage samples to `plot`.
pub(crate) fn thick_line(
    plot: &mut dyn FnMut(i32, i32, f32),
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    thickness: f32,
    taper: bool,
) {
    let min_x = x0.min(x1) - thickness.ceil() as i32 - 1;
    let max_x = x0.max(x1) + thickness.ceil() as i32 + 1;
    let min_y = y0.min(y1) - thickness.ceil() as i32 - 1;
    let max_y = y0.max(y1) + thickness.ceil() as i32 + 1;
    let dx = (x1 - x0) as f32;
    let dy = (y1 - y0) as f32;
    let len_sq = (dx * dx + dy * dy).max(1.0);
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let px = (x - x0) as f32;
            let py = (y - y0) as f32;
            let t = ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0);
            let lx = x0 as f32 + t * dx;
            let ly = y0 as f32 + t * dy;
            let dist = ((lx - x as f32).powi(2) + (ly - y as f32).powi(2)).sqrt();
            let local_thickness = if taper {
                thickness * (1.0 - t * 0.95) // keep a visible point at the tip
            } else {
                thickness
            };
            let aa = (1.0 - (dist - local_thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
            if aa > 0.01 {
                plot(x, y, aa);
            }
        }
    }
}

fn put_texel(tex: &mut RgbaTexture, x: i32, y: i32, color: Color, alpha: f32) {
    if x < 0 || y < 0 || x >= tex.width as i32 || y >= tex.height as i32 {
        return;
    }
    let idx = (y as usize * tex.width as usize + x as usize) * 4;
    let a = (alpha * 255.0).round() as u8;
    if a > tex.pixels[idx + 3] {
        tex.pixels[idx] = color.r;
        tex.pixels[idx + 1] = color.g;
        tex.pixels[idx + 2] = color.b;
        tex.pixels[idx + 3] = a;
    }
}

/// Build the default needle sprite: a tapered blade from the hub to the
/// rim, a short back extension, and a hub dot, pointing at dial angle 0
/// (straight up). The widget only ever rotates this texture.
pub fn needle_sprite(radius: f64, color: Color) -> RgbaTexture {
    let side = ((radius * 2.0).ceil() as u32).max(8);
    let mut tex = RgbaTexture {
        width: side,
        height: side,
        pixels: vec![0; side as usize * side as usize * 4],
    };
    let c = side as i32 / 2;
    let blade = (f64::from(side) / 2.0 - 1.0) as i32;
    let back = (f64::from(blade) * 0.3).round() as i32;

    {
        let mut plot = |x: i32, y: i32, aa: f32| put_texel(&mut tex, x, y, color, aa);
        // Texture row 0 is the top, which is dial angle 0.
        thick_line(&mut plot, c, c, c, c - blade, 4.0, true);
        thick_line(&mut plot, c, c, c, c + back, 4.0, false);
    }

    let dot = 6.0_f64.min(radius / 4.0);
    for y in -(dot.ceil() as i32 + 1)..=(dot.ceil() as i32 + 1) {
        for x in -(dot.ceil() as i32 + 1)..=(dot.ceil() as i32 + 1) {
            let dist = f64::from(x * x + y * y).sqrt();
            let aa = (1.0 - (dist - dot).clamp(0.0, 1.0)).clamp(0.0, 1.0);
            if aa > 0.0 {
                put_texel(&mut tex, c + x, c + y, color, aa as f32);
            }
        }
    }
    tex
}
