//! Procedurally generated window icon — a padlock.
//!
//! Rendered at startup so the binary ships without image assets.

/// Render the padlock as top-to-bottom RGBA pixels.
pub fn render_icon_rgba(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut px = vec![0u8; (size * size * 4) as usize];

    // Body: rounded rectangle in the lower part.
    let body_l = s * 0.18;
    let body_r = s * 0.82;
    let body_t = s * 0.44;
    let body_b = s * 0.92;
    let corner = s * 0.08;

    // Shackle: ring centred above the body.
    let cx = s * 0.5;
    let cy = s * 0.40;
    let ring_outer = s * 0.26;
    let ring_inner = s * 0.16;

    let body_rgb = [0x00u8, 0x78, 0xd7];
    let shackle_rgb = [0x9a, 0xa0, 0xa6];
    let keyhole_rgb = [0x10, 0x10, 0x18];

    for y in 0..size {
        for x in 0..size {
            let fx = x as f32 + 0.5;
            let fy = y as f32 + 0.5;
            let mut rgba = [0u8; 4];

            // Shackle (upper half of the ring only).
            let d = ((fx - cx).powi(2) + (fy - cy).powi(2)).sqrt();
            if fy <= body_t && d >= ring_inner && d <= ring_outer {
                rgba = [shackle_rgb[0], shackle_rgb[1], shackle_rgb[2], 255];
            }

            if in_rounded_rect(fx, fy, body_l, body_t, body_r, body_b, corner) {
                // Slight vertical gradient.
                let t = (fy - body_t) / (body_b - body_t);
                let shade = 1.0 - 0.25 * t;
                rgba = [
                    (body_rgb[0] as f32 * shade) as u8,
                    (body_rgb[1] as f32 * shade) as u8,
                    (body_rgb[2] as f32 * shade) as u8,
                    255,
                ];

                // Keyhole: circle plus a slot beneath it.
                let kx = cx;
                let ky = body_t + (body_b - body_t) * 0.40;
                let kr = s * 0.07;
                let in_hole = ((fx - kx).powi(2) + (fy - ky).powi(2)).sqrt() <= kr;
                let in_slot = (fx - kx).abs() <= kr * 0.45 && fy >= ky && fy <= ky + s * 0.17;
                if in_hole || in_slot {
                    rgba = [keyhole_rgb[0], keyhole_rgb[1], keyhole_rgb[2], 255];
                }
            }

            let idx = ((y * size + x) * 4) as usize;
            px[idx..idx + 4].copy_from_slice(&rgba);
        }
    }

    px
}

fn in_rounded_rect(x: f32, y: f32, l: f32, t: f32, r: f32, b: f32, radius: f32) -> bool {
    if x < l || x > r || y < t || y > b {
        return false;
    }
    let cx = x.clamp(l + radius, r - radius);
    let cy = y.clamp(t + radius, b - radius);
    (x - cx).powi(2) + (y - cy).powi(2) <= radius * radius
}

/// Window icon for `eframe::NativeOptions`.
pub fn generate_icon(size: u32) -> egui::IconData {
    egui::IconData {
        rgba: render_icon_rgba(size),
        width: size,
        height: size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_has_expected_dimensions() {
        let icon = generate_icon(32);
        assert_eq!(icon.width, 32);
        assert_eq!(icon.rgba.len(), 32 * 32 * 4);
    }

    #[test]
    fn corners_are_transparent_and_body_is_opaque() {
        let size = 64;
        let px = render_icon_rgba(size);
        assert_eq!(px[3], 0, "top-left corner must be transparent");
        let centre_bottom = ((size * 50 + 20) * 4 + 3) as usize;
        assert_eq!(px[centre_bottom], 255, "padlock body must be opaque");
    }
}
