//! Dashboard colors.
//!
//! Theme constants for chrome and callouts, plus the categorical palettes
//! and the viridis scale used by the charts.

use ratatui::style::Color;

use crate::charts::Palette;

pub const INFO: Color = Color::Rgb(0x56, 0x9C, 0xD6);      // #569CD6 - blue
pub const WARNING: Color = Color::Rgb(0xD1, 0x9A, 0x66);   // #D19A66 - orange
pub const ERROR: Color = Color::Rgb(0xD1, 0x69, 0x69);     // #D16969 - red
pub const SUCCESS: Color = Color::Rgb(0x60, 0x8B, 0x4E);   // #608B4E - green
pub const HEADER: Color = Color::Rgb(0x4E, 0xC9, 0xB0);    // #4EC9B0 - cyan
pub const ACCENT: Color = Color::Rgb(0xDC, 0xDC, 0xAA);    // #DCDCAA - yellow
pub const GRAY: Color = Color::Rgb(0x66, 0x66, 0x66);      // #666666 - dark gray
pub const GRAY_BG: Color = Color::Rgb(0x3E, 0x44, 0x51);   // #3E4451 - background gray

const T10: &[Color] = &[
    Color::Rgb(0x4C, 0x78, 0xA8),
    Color::Rgb(0xF5, 0x85, 0x18),
    Color::Rgb(0xE4, 0x57, 0x56),
    Color::Rgb(0x72, 0xB7, 0xB2),
    Color::Rgb(0x54, 0xA2, 0x4B),
    Color::Rgb(0xEE, 0xCA, 0x3B),
    Color::Rgb(0xB2, 0x79, 0xA2),
    Color::Rgb(0xFF, 0x9D, 0xA6),
    Color::Rgb(0x9D, 0x75, 0x5D),
    Color::Rgb(0xBA, 0xB0, 0xAC),
];

const VIVID: &[Color] = &[
    Color::Rgb(229, 134, 6),
    Color::Rgb(93, 105, 177),
    Color::Rgb(82, 188, 163),
    Color::Rgb(153, 201, 69),
    Color::Rgb(204, 97, 176),
    Color::Rgb(36, 121, 108),
    Color::Rgb(218, 165, 27),
    Color::Rgb(47, 138, 196),
    Color::Rgb(118, 78, 159),
    Color::Rgb(237, 100, 90),
    Color::Rgb(165, 170, 153),
];

const BOLD: &[Color] = &[
    Color::Rgb(127, 60, 141),
    Color::Rgb(17, 165, 121),
    Color::Rgb(57, 105, 172),
    Color::Rgb(242, 183, 1),
    Color::Rgb(231, 63, 116),
    Color::Rgb(128, 186, 90),
    Color::Rgb(230, 131, 16),
    Color::Rgb(0, 134, 149),
    Color::Rgb(207, 28, 144),
    Color::Rgb(249, 123, 114),
    Color::Rgb(165, 170, 153),
];

const DARK24: &[Color] = &[
    Color::Rgb(0x2E, 0x91, 0xE5),
    Color::Rgb(0xE1, 0x5F, 0x99),
    Color::Rgb(0x1C, 0xA7, 0x1C),
    Color::Rgb(0xFB, 0x0D, 0x0D),
    Color::Rgb(0xDA, 0x16, 0xFF),
    Color::Rgb(0x22, 0x2A, 0x2A),
    Color::Rgb(0xB6, 0x81, 0x00),
    Color::Rgb(0x75, 0x0D, 0x86),
    Color::Rgb(0xEB, 0x66, 0x3B),
    Color::Rgb(0x51, 0x1C, 0xFB),
    Color::Rgb(0x00, 0xA0, 0x8B),
    Color::Rgb(0xFB, 0x00, 0xD1),
    Color::Rgb(0xFC, 0x00, 0x80),
    Color::Rgb(0xB2, 0x82, 0x8D),
    Color::Rgb(0x6C, 0x7C, 0x32),
    Color::Rgb(0x77, 0x8A, 0xAE),
    Color::Rgb(0x86, 0x2A, 0x16),
    Color::Rgb(0xA7, 0x77, 0xF1),
    Color::Rgb(0x62, 0x00, 0x42),
    Color::Rgb(0x16, 0x16, 0xA7),
    Color::Rgb(0xDA, 0x60, 0xCA),
    Color::Rgb(0x6C, 0x45, 0x16),
    Color::Rgb(0x0D, 0x2A, 0x63),
    Color::Rgb(0xAF, 0x00, 0x38),
];

const VIRIDIS: &[(u8, u8, u8)] = &[
    (0x44, 0x01, 0x54),
    (0x48, 0x28, 0x78),
    (0x3E, 0x49, 0x89),
    (0x31, 0x68, 0x8E),
    (0x26, 0x82, 0x8E),
    (0x1F, 0x9E, 0x89),
    (0x35, 0xB7, 0x79),
    (0x6D, 0xCD, 0x59),
    (0xB4, 0xDE, 0x2C),
    (0xFD, 0xE7, 0x25),
];

fn colors(palette: Palette) -> &'static [Color] {
    match palette {
        Palette::T10 => T10,
        Palette::Vivid => VIVID,
        Palette::Bold => BOLD,
        Palette::Dark24 => DARK24,
    }
}

/// Color of the `index`-th series, cycling through the palette.
pub fn series_color(palette: Palette, index: usize) -> Color {
    let c = colors(palette);
    c[index % c.len()]
}

/// Samples the viridis scale at `t` in `[0, 1]`.
pub fn viridis(t: f64) -> Color {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let pos = t * (VIRIDIS.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = (lo + 1).min(VIRIDIS.len() - 1);
    let frac = pos - lo as f64;
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (a, b) = (VIRIDIS[lo], VIRIDIS[hi]);
    Color::Rgb(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Black or white, whichever reads better on `bg`.
pub fn contrast_text(bg: Color) -> Color {
    match bg {
        Color::Rgb(r, g, b) => {
            let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
            if luma > 140.0 {
                Color::Black
            } else {
                Color::White
            }
        }
        _ => Color::White,
    }
}
