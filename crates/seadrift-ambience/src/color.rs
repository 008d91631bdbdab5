//! Color conversion helpers for the ambient renderer.

use ratatui::style::Color;
use seadrift_core::Hsl;

/// Convert a palette triple to a terminal RGB color.
pub fn hsl_to_rgb(hsl: Hsl) -> Color {
    components(hsl.h as f32, hsl.s as f32 / 100.0, hsl.l as f32 / 100.0)
}

/// Approximate `hsla(h, s%, l%, alpha)` on a terminal cell.
///
/// Cells have no alpha channel, so the opacity is folded into lightness
/// against the dark sea backdrop.
pub fn hsla_on_dark(h: f32, s: f32, l: f32, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    components(h, s, l * (0.35 + 0.65 * alpha))
}

/// Linear blend between two palette triples, converted to RGB.
pub fn mix(a: Hsl, b: Hsl, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let lerp = |x: f32, y: f32| x + (y - x) * t;
    components(
        lerp(a.h as f32, b.h as f32),
        lerp(a.s as f32, b.s as f32) / 100.0,
        lerp(a.l as f32, b.l as f32) / 100.0,
    )
}

/// HSL to RGB with hue in degrees and saturation/lightness as fractions.
fn components(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
