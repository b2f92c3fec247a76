//! Colours and continuous colour scales.

use std::fmt::{Display, Formatter};

use colorgrad::Gradient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A continuous colour scale over `[0, 1]`.
pub struct ColourScale {
    name: &'static str,
    gradient: Box<dyn Gradient>,
}
impl ColourScale {
    /// The perceptually uniform "magma" scale, from black through purple to a pale yellow.
    pub fn magma() -> Self {
        Self {
            name: "magma",
            gradient: Box::new(colorgrad::preset::magma()),
        }
    }

    /// Samples the scale at `t`, which is clamped to `[0, 1]`.
    pub fn at(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let [r, g, b, _] = self.gradient.at(t as f32).to_rgba8();
        Rgb { r, g, b }
    }
}

impl std::fmt::Debug for ColourScale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColourScale").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb_near(expected: Rgb, actual: Rgb) {
        let channels = [
            (expected.r, actual.r),
            (expected.g, actual.g),
            (expected.b, actual.b),
        ];
        for (expected_channel, actual_channel) in channels {
            assert!(
                expected_channel.abs_diff(actual_channel) <= 1,
                "expected {expected}, got {actual}"
            );
        }
    }

    fn luma(rgb: Rgb) -> f64 {
        (0.2126 * rgb.r as f64 + 0.7152 * rgb.g as f64 + 0.0722 * rgb.b as f64) / 255.0
    }

    #[test]
    fn rgb_display() {
        assert_eq!("#000004", Rgb::new(0, 0, 4).to_string());
        assert_eq!("#fcfdbf", Rgb::new(252, 253, 191).to_string());
    }

    #[test]
    fn magma_endpoints() {
        let scale = ColourScale::magma();
        assert_rgb_near(Rgb::new(0x00, 0x00, 0x04), scale.at(0.0));
        assert_rgb_near(Rgb::new(0xfc, 0xfd, 0xbf), scale.at(1.0));
    }

    #[test]
    fn magma_clamps() {
        let scale = ColourScale::magma();
        assert_eq!(scale.at(0.0), scale.at(-3.0));
        assert_eq!(scale.at(1.0), scale.at(7.0));
        assert_eq!(scale.at(0.0), scale.at(f64::NAN));
    }

    #[test]
    fn magma_brightens_monotonically() {
        let scale = ColourScale::magma();
        let lumas = (0..=10)
            .map(|step| luma(scale.at(step as f64 / 10.0)))
            .collect::<Vec<_>>();
        for pair in lumas.windows(2) {
            assert!(pair[0] < pair[1], "{lumas:?}");
        }
    }

    #[test]
    fn magma_passes_through_purple() {
        let mid = ColourScale::magma().at(0.4);
        assert!(mid.r > mid.g && mid.b > mid.g, "{mid}");
    }
}
