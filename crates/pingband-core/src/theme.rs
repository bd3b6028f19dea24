// File: crates/pingband-core/src/theme.rs
// Summary: Light/Dark theming for band-chart rendering colors.

use crate::types::Color;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    /// Band pair fills, outermost first (d0–d1 & d9–d10 … d3–d4 & d6–d7).
    pub band_pairs: [Color; 4],
    /// Solid center band fill (d4–d6).
    pub band_center: Color,
    /// Tinted band variant for buckets with at least one failed probe.
    pub band_pairs_degraded: [Color; 4],
    pub band_center_degraded: Color,
    /// Full-column tint for buckets where every probe failed.
    pub error_fill: Color,
    pub center_line: Color,
    pub center_line_degraded: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            grid: Color::from_argb(255, 230, 230, 235),
            axis_line: Color::from_argb(255, 60, 60, 70),
            axis_label: Color::from_argb(255, 20, 20, 30),
            tick: Color::from_argb(255, 100, 100, 110),
            band_pairs: [
                Color::from_argb(255, 0xf0, 0xf0, 0xf0),
                Color::from_argb(255, 0xe0, 0xe0, 0xe0),
                Color::from_argb(255, 0xd0, 0xd0, 0xd0),
                Color::from_argb(255, 0xc0, 0xc0, 0xc0),
            ],
            band_center: Color::from_argb(255, 0x99, 0x99, 0x99),
            band_pairs_degraded: [
                Color::from_argb(255, 0xf5, 0xe6, 0xe6),
                Color::from_argb(255, 0xe5, 0xd6, 0xd6),
                Color::from_argb(255, 0xd5, 0xc6, 0xc6),
                Color::from_argb(255, 0xc5, 0xb6, 0xb6),
            ],
            band_center_degraded: Color::from_argb(255, 0xa5, 0x96, 0x96),
            error_fill: Color::from_argb(255, 0xff, 0xeb, 0xee),
            center_line: Color::from_argb(255, 0x00, 0x7b, 0xff),
            center_line_degraded: Color::from_argb(255, 0xcc, 0x4c, 0x4c),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            grid: Color::from_argb(255, 40, 40, 45),
            axis_line: Color::from_argb(255, 180, 180, 190),
            axis_label: Color::from_argb(255, 235, 235, 245),
            tick: Color::from_argb(255, 150, 150, 160),
            // Shading runs the other way on dark: brighter toward the center.
            band_pairs: [
                Color::from_argb(255, 0x2a, 0x2a, 0x2e),
                Color::from_argb(255, 0x3a, 0x3a, 0x3f),
                Color::from_argb(255, 0x4a, 0x4a, 0x50),
                Color::from_argb(255, 0x5a, 0x5a, 0x61),
            ],
            band_center: Color::from_argb(255, 0x8a, 0x8a, 0x92),
            band_pairs_degraded: [
                Color::from_argb(255, 0x38, 0x2a, 0x2a),
                Color::from_argb(255, 0x48, 0x35, 0x35),
                Color::from_argb(255, 0x58, 0x40, 0x40),
                Color::from_argb(255, 0x68, 0x4b, 0x4b),
            ],
            band_center_degraded: Color::from_argb(255, 0x92, 0x6a, 0x6a),
            error_fill: Color::from_argb(255, 0x50, 0x2a, 0x2e),
            center_line: Color::from_argb(255, 64, 160, 255),
            center_line_degraded: Color::from_argb(255, 220, 80, 80),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
