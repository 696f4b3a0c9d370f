//! Color space conversion
//!
//! Conversion between RGB and HSL (hue, saturation, lightness).
//!
//! # Conventions
//!
//! - RGB channels are nominally in [0.0, 1.0]; other values are accepted
//!   and pass through the same formulas.
//! - Hue is a fraction of a full turn in [0.0, 1.0), not degrees.
//! - Hue is undefined exactly when chroma (max - min) is zero.
//! - Saturation is undefined exactly when its denominator
//!   `1 - |min + max - 1|` is zero, i.e. lightness is 0 or 1. This holds
//!   whatever the chroma.
//!
//! Undefined components are `None`. They are ordinary values of the
//! domain, not errors.

use hslstat_core::sample;

const SIXTH: f64 = 1.0 / 6.0;

/// RGB color with floating-point channels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Create a new color
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit samples, each divided by 255
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: sample::to_unit(r),
            g: sample::to_unit(g),
            b: sample::to_unit(b),
        }
    }

    /// Channels as `[r, g, b]`
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// HSL color representation
///
/// - `h`: Hue in [0.0, 1.0), or `None` for achromatic colors
/// - `s`: Saturation in [0.0, 1.0], or `None` for pure black and white
/// - `l`: Lightness in [0.0, 1.0]
///
/// Round-off may push a component slightly past its nominal range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: Option<f64>,
    pub s: Option<f64>,
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color
    pub fn new(h: Option<f64>, s: Option<f64>, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Whether the hue is defined (chroma is nonzero)
    pub fn has_hue(&self) -> bool {
        self.h.is_some()
    }

    /// Whether the saturation is defined (lightness is neither 0 nor 1)
    pub fn has_saturation(&self) -> bool {
        self.s.is_some()
    }
}

/// Floored modulus: `x mod y` with the sign of `y`.
///
/// Unlike `%`, which keeps the sign of `x`, this wraps negative hues back
/// into `[0, y)`. A zero remainder is returned as `+0.0`.
#[inline]
pub fn floored_mod(x: f64, y: f64) -> f64 {
    let r = x % y;
    if r == 0.0 {
        0.0
    } else if r.is_sign_negative() != y.is_sign_negative() {
        r + y
    } else {
        r
    }
}

/// Find the indices of the minimum and maximum of three values.
///
/// Returns `(imin, imax)`. The comparisons form a fixed tree, so ties
/// always resolve the same way: with `a == b`, `a` is the max unless a
/// later channel is strictly larger, and the later of equal channels is
/// the min. When all three are equal the result is `(2, 0)`.
#[inline]
pub fn min_max_index(n: &[f64; 3]) -> (usize, usize) {
    if n[0] < n[1] {
        if n[1] < n[2] {
            (0, 2)
        } else if n[0] < n[2] {
            (0, 1)
        } else {
            (2, 1)
        }
    } else if n[0] < n[2] {
        (1, 2)
    } else if n[1] < n[2] {
        (1, 0)
    } else {
        (2, 0)
    }
}

/// Convert RGB to HSL
///
/// The hue sector is chosen by the channel holding the maximum:
///
/// - red: `((g - b) / chroma) mod 6`, then divided by 6
/// - green: `((b - r) / chroma + 2) / 6`
/// - blue: `((r - g) / chroma + 4) / 6`
///
/// Lightness is `(min + max) / 2`; saturation is
/// `chroma / (1 - |min + max - 1|)`.
pub fn rgb_to_hsl(color: Color) -> Hsl {
    let rgb = color.to_array();
    let (imin, imax) = min_max_index(&rgb);
    let min = rgb[imin];
    let max = rgb[imax];
    let chroma = max - min;

    let h = if chroma == 0.0 {
        None
    } else {
        let sector = match imax {
            0 => floored_mod((color.g - color.b) / chroma, 6.0),
            1 => (color.b - color.r) / chroma + 2.0,
            _ => (color.r - color.g) / chroma + 4.0,
        };
        let turn = sector * SIXTH;
        // a tiny negative red offset wraps to exactly a full turn
        Some(if turn >= 1.0 { 0.0 } else { turn })
    };

    let sum = min + max;
    let denom = 1.0 - (sum - 1.0).abs();
    let s = if denom == 0.0 {
        None
    } else {
        Some(chroma / denom)
    };

    Hsl { h, s, l: sum * 0.5 }
}

/// Convert 8-bit RGB samples to HSL
#[inline]
pub fn rgb8_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    rgb_to_hsl(Color::from_rgb8(r, g, b))
}

/// Convert HSL to RGB
///
/// An undefined hue gives a grey of the given lightness. An undefined
/// saturation only arises at lightness 0 or 1, where chroma is zero
/// anyway, so it is treated the same way. A non-finite hue is treated as
/// undefined.
///
/// For any `Hsl` produced by [`rgb_to_hsl`] this recovers the input up to
/// floating-point round-off.
pub fn hsl_to_rgb(hsl: Hsl) -> Color {
    let l = hsl.l;
    let (h6, chroma) = match (hsl.h, hsl.s) {
        (Some(h), Some(s)) if h.is_finite() => {
            (floored_mod(h, 1.0) * 6.0, (1.0 - (2.0 * l - 1.0).abs()) * s)
        }
        _ => return Color::new(l, l, l),
    };

    let base = l - 0.5 * chroma;
    let mid = chroma * (1.0 - ((h6 % 2.0) - 1.0).abs());

    // Round-off can land exactly on 6.0
    let (dr, dg, db) = match (h6 as u32).min(5) {
        0 => (chroma, mid, 0.0),
        1 => (mid, chroma, 0.0),
        2 => (0.0, chroma, mid),
        3 => (0.0, mid, chroma),
        4 => (mid, 0.0, chroma),
        _ => (chroma, 0.0, mid),
    };

    Color::new(base + dr, base + dg, base + db)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_floored_mod_sign_follows_divisor() {
        assert_eq!(floored_mod(7.0, 3.0), 1.0);
        assert_eq!(floored_mod(-1.0, 3.0), 2.0);
        assert_eq!(floored_mod(1.0, -3.0), -2.0);
        assert_eq!(floored_mod(-0.25, 1.0), 0.75);
        assert_eq!(floored_mod(-1.0, 1.0), 0.0);
        assert!(floored_mod(-1.0, 1.0).is_sign_positive());
        assert_eq!(floored_mod(0.5, 1.0), 0.5);
    }

    #[test]
    fn test_min_max_index_distinct() {
        let perms = [
            ([0.0, 1.0, 2.0], (0, 2)),
            ([0.0, 2.0, 1.0], (0, 1)),
            ([1.0, 2.0, 0.0], (2, 1)),
            ([1.0, 0.0, 2.0], (1, 2)),
            ([2.0, 0.0, 1.0], (1, 0)),
            ([2.0, 1.0, 0.0], (2, 0)),
        ];
        for (n, expected) in perms {
            assert_eq!(min_max_index(&n), expected, "{n:?}");
        }
    }

    #[test]
    fn test_min_max_index_ties() {
        assert_eq!(min_max_index(&[0.5, 0.5, 0.5]), (2, 0));
        assert_eq!(min_max_index(&[1.0, 1.0, 0.0]), (2, 0));
        assert_eq!(min_max_index(&[0.0, 1.0, 1.0]), (0, 1));
        assert_eq!(min_max_index(&[1.0, 0.0, 1.0]), (1, 0));
    }

    #[test]
    fn test_primary_colors() {
        let red = rgb_to_hsl(Color::new(1.0, 0.0, 0.0));
        assert_eq!(red.h, Some(0.0));
        assert_eq!(red.s, Some(1.0));
        assert_eq!(red.l, 0.5);

        let green = rgb_to_hsl(Color::new(0.0, 1.0, 0.0));
        assert!((green.h.unwrap() - 1.0 / 3.0).abs() < EPS);

        let blue = rgb_to_hsl(Color::new(0.0, 0.0, 1.0));
        assert!((blue.h.unwrap() - 2.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_secondary_colors_with_ties() {
        let yellow = rgb_to_hsl(Color::new(1.0, 1.0, 0.0));
        assert!((yellow.h.unwrap() - 1.0 / 6.0).abs() < EPS);

        let cyan = rgb_to_hsl(Color::new(0.0, 1.0, 1.0));
        assert!((cyan.h.unwrap() - 0.5).abs() < EPS);

        let magenta = rgb_to_hsl(Color::new(1.0, 0.0, 1.0));
        assert!((magenta.h.unwrap() - 5.0 / 6.0).abs() < EPS);
    }

    #[test]
    fn test_black_and_white_are_undefined() {
        let black = rgb_to_hsl(Color::new(0.0, 0.0, 0.0));
        assert_eq!(black, Hsl::new(None, None, 0.0));

        let white = rgb_to_hsl(Color::new(1.0, 1.0, 1.0));
        assert_eq!(white, Hsl::new(None, None, 1.0));
    }

    #[test]
    fn test_grey_has_saturation_but_no_hue() {
        let grey = rgb8_to_hsl(128, 128, 128);
        assert!(!grey.has_hue());
        assert_eq!(grey.s, Some(0.0));
        assert!((grey.l - 128.0 / 255.0).abs() < EPS);
    }

    #[test]
    fn test_hue_stays_in_unit_turn() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(15) {
                    if let Some(h) = rgb8_to_hsl(r, g, b).h {
                        assert!((0.0..1.0).contains(&h), "hue {h} for {r},{g},{b}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_roundtrip_distinct_channels() {
        let colors = [
            Color::new(0.9, 0.2, 0.1),
            Color::new(0.1, 0.8, 0.3),
            Color::new(0.25, 0.5, 0.75),
            Color::new(0.7, 0.1, 0.6),
            Color::new(0.01, 0.02, 0.03),
            Color::new(0.99, 0.98, 0.97),
        ];
        for c in colors {
            let back = hsl_to_rgb(rgb_to_hsl(c));
            assert!((back.r - c.r).abs() < 1e-9, "{c:?} -> {back:?}");
            assert!((back.g - c.g).abs() < 1e-9, "{c:?} -> {back:?}");
            assert!((back.b - c.b).abs() < 1e-9, "{c:?} -> {back:?}");
        }
    }

    #[test]
    fn test_hsl_to_rgb_undefined_hue_is_grey() {
        let c = hsl_to_rgb(Hsl::new(None, Some(0.7), 0.4));
        assert_eq!(c, Color::new(0.4, 0.4, 0.4));

        let c = hsl_to_rgb(Hsl::new(Some(0.3), None, 1.0));
        assert_eq!(c, Color::new(1.0, 1.0, 1.0));

        let c = hsl_to_rgb(Hsl::new(Some(f64::NAN), Some(1.0), 0.5));
        assert_eq!(c, Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_hsl_to_rgb_wraps_hue() {
        let a = hsl_to_rgb(Hsl::new(Some(-0.25), Some(1.0), 0.5));
        let b = hsl_to_rgb(Hsl::new(Some(0.75), Some(1.0), 0.5));
        assert!((a.r - b.r).abs() < EPS);
        assert!((a.g - b.g).abs() < EPS);
        assert!((a.b - b.b).abs() < EPS);
    }

    #[test]
    fn test_out_of_range_input_passes_through() {
        let hsl = rgb_to_hsl(Color::new(1.2, -0.1, 0.0));
        assert!(hsl.h.is_some());
        assert!((hsl.l - 0.55).abs() < EPS);
    }

    #[test]
    fn test_red_hue_never_reaches_full_turn() {
        let hsl = rgb_to_hsl(Color::new(1.0, 0.0, 1e-17));
        assert_eq!(hsl.h, Some(0.0));
        assert_eq!(hsl.s, Some(1.0));
    }

    #[test]
    fn test_saturation_undefined_with_nonzero_chroma() {
        // min + max == 0 gives lightness 0 even though chroma is 1
        let hsl = rgb_to_hsl(Color::new(-0.5, 0.5, 0.0));
        assert!(hsl.has_hue());
        assert_eq!(hsl.s, None);
        assert_eq!(hsl.l, 0.0);
        assert!((hsl.h.unwrap() - 2.5 / 6.0).abs() < EPS);
    }
}
