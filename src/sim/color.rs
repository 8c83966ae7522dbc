//! Stroke color bands
//!
//! Maps a color percentage (how close the live radius is to the target) onto
//! a green -> yellow -> orange -> red gradient. Everything here is pure and
//! total: any `f64`, including NaN and infinities, yields a valid color.

use serde::{Deserialize, Serialize};

/// RGBA color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const GREEN: Rgba = Rgba::rgb8(0, 255, 0);
    pub const YELLOW: Rgba = Rgba::rgb8(255, 255, 0);
    pub const ORANGE: Rgba = Rgba::rgb8(255, 165, 0);
    pub const RED: Rgba = Rgba::rgb8(255, 0, 0);

    /// Opaque color from 8-bit channels
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Linear blend from `self` to `to`. `t` is clamped to [0, 1].
    pub fn lerp(self, to: Rgba, t: f64) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Rgba {
            r: self.r + t * (to.r - self.r),
            g: self.g + t * (to.g - self.g),
            b: self.b + t * (to.b - self.b),
            a: self.a + t * (to.a - self.a),
        }
    }

    /// Channels rounded to 8 bits (r, g, b, a)
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// `#rrggbb` hex string
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Percentage range a sample falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorBand {
    /// >= 95
    Green,
    /// [90, 95)
    GreenYellow,
    /// [80, 90)
    YellowOrange,
    /// < 80 (and NaN)
    OrangeRed,
}

impl ColorBand {
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= 95.0 {
            ColorBand::Green
        } else if percentage >= 90.0 {
            ColorBand::GreenYellow
        } else if percentage >= 80.0 {
            ColorBand::YellowOrange
        } else {
            ColorBand::OrangeRed
        }
    }

    /// Gradient endpoints for this band
    pub fn endpoints(&self) -> (Rgba, Rgba) {
        match self {
            ColorBand::Green => (Rgba::GREEN, Rgba::GREEN),
            ColorBand::GreenYellow => (Rgba::GREEN, Rgba::YELLOW),
            ColorBand::YellowOrange => (Rgba::YELLOW, Rgba::ORANGE),
            ColorBand::OrangeRed => (Rgba::ORANGE, Rgba::RED),
        }
    }

    /// Unclamped blend factor within the band
    pub fn blend_factor(&self, percentage: f64) -> f64 {
        match self {
            ColorBand::Green => 0.0,
            ColorBand::GreenYellow => (percentage - 90.0) / 5.0,
            ColorBand::YellowOrange => (percentage - 80.0) / 10.0,
            ColorBand::OrangeRed => percentage / 80.0,
        }
    }
}

/// Stroke color for a color percentage
pub fn color_for_percentage(percentage: f64) -> Rgba {
    let band = ColorBand::for_percentage(percentage);
    let (from, to) = band.endpoints();
    from.lerp(to, band.blend_factor(percentage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: Rgba, b: Rgba) -> bool {
        (a.r - b.r).abs() < 1e-9
            && (a.g - b.g).abs() < 1e-9
            && (a.b - b.b).abs() < 1e-9
            && (a.a - b.a).abs() < 1e-9
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ColorBand::for_percentage(100.0), ColorBand::Green);
        assert_eq!(ColorBand::for_percentage(95.0), ColorBand::Green);
        assert_eq!(ColorBand::for_percentage(94.999), ColorBand::GreenYellow);
        assert_eq!(ColorBand::for_percentage(90.0), ColorBand::GreenYellow);
        assert_eq!(ColorBand::for_percentage(89.9), ColorBand::YellowOrange);
        assert_eq!(ColorBand::for_percentage(80.0), ColorBand::YellowOrange);
        assert_eq!(ColorBand::for_percentage(79.9), ColorBand::OrangeRed);
        assert_eq!(ColorBand::for_percentage(f64::NAN), ColorBand::OrangeRed);
    }

    #[test]
    fn test_green_at_and_above_95() {
        assert!(approx(color_for_percentage(95.0), Rgba::GREEN));
        assert!(approx(color_for_percentage(250.0), Rgba::GREEN));
    }

    #[test]
    fn test_band_starts() {
        // Each band starts at its first endpoint at its lower cut point
        assert!(approx(color_for_percentage(90.0), Rgba::GREEN));
        assert!(approx(color_for_percentage(80.0), Rgba::YELLOW));
        assert!(approx(color_for_percentage(0.0), Rgba::ORANGE));
    }

    #[test]
    fn test_orange_red_factor_near_80() {
        let band = ColorBand::OrangeRed;
        assert!((band.blend_factor(80.0) - 1.0).abs() < 1e-12);
        let c = color_for_percentage(79.999_999);
        assert!(c.g < 1e-6 && (c.r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_midpoints() {
        let c = color_for_percentage(92.5);
        assert!(approx(c, Rgba::GREEN.lerp(Rgba::YELLOW, 0.5)));
        let c = color_for_percentage(85.0);
        assert!((c.g - (1.0 + 165.0 / 255.0) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_large_negative_is_clamped_to_orange() {
        assert!(approx(color_for_percentage(-5000.0), Rgba::ORANGE));
        assert!(approx(color_for_percentage(f64::NEG_INFINITY), Rgba::ORANGE));
        assert!(approx(color_for_percentage(f64::NAN), Rgba::ORANGE));
    }

    #[test]
    fn test_hex() {
        assert_eq!(Rgba::ORANGE.to_hex(), "#ffa500");
        assert_eq!(Rgba::GREEN.to_rgba8(), [0, 255, 0, 255]);
    }

    proptest! {
        #[test]
        fn color_channels_always_in_range(p in proptest::num::f64::ANY) {
            let c = color_for_percentage(p);
            for ch in [c.r, c.g, c.b, c.a] {
                prop_assert!((0.0..=1.0).contains(&ch));
            }
        }
    }
}
