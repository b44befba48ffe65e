/// An 8-bit RGBA pixel value as written into a [`PixelBuffer`].
///
/// [`PixelBuffer`]: crate::core::data::pixel_buffer::PixelBuffer
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Linear colour with each channel nominally in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// Clamps every channel into `[0, 1]`; NaN channels become 0.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(clamp_unit(self.r), clamp_unit(self.g), clamp_unit(self.b))
    }

    #[must_use]
    pub fn to_colour(self) -> Colour {
        self.to_colour_with_alpha(1.0)
    }

    #[must_use]
    pub fn to_colour_with_alpha(self, alpha: f64) -> Colour {
        let c = self.clamped();

        Colour {
            r: unit_to_byte(c.r),
            g: unit_to_byte(c.g),
            b: unit_to_byte(c.b),
            a: unit_to_byte(clamp_unit(alpha)),
        }
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn unit_to_byte(value: f64) -> u8 {
    (value * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_limits_channels_and_zeroes_nan() {
        let c = Rgb::new(-0.5, 1.5, f64::NAN).clamped();

        assert_eq!(c, Rgb::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_to_colour_rounds_and_is_opaque() {
        let colour = Rgb::new(1.0, 0.5, 0.0).to_colour();

        assert_eq!(colour, Colour { r: 255, g: 128, b: 0, a: 255 });
    }

    #[test]
    fn test_to_colour_with_alpha_clamps_alpha() {
        assert_eq!(Rgb::BLACK.to_colour_with_alpha(2.0).a, 255);
        assert_eq!(Rgb::BLACK.to_colour_with_alpha(-1.0).a, 0);
    }

    #[test]
    fn test_lerp_hits_endpoints() {
        let a = Rgb::new(0.1, 0.2, 0.3);
        let b = Rgb::new(0.9, 0.8, 0.7);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}
