use crate::core::data::colour::Rgb;
use std::f64::consts::PI;

const CHANNEL_PHASES: [f64; 3] = [0.0, 2.0 * PI / 3.0, 4.0 * PI / 3.0];
const LUMINANCE: [f64; 3] = [0.299, 0.587, 0.114];

/// Three-phase cosine palette sample.
#[must_use]
pub fn cosine_palette(index: f64) -> Rgb {
    Rgb::new(
        0.5 + 0.5 * (index + CHANNEL_PHASES[0]).cos(),
        0.5 + 0.5 * (index + CHANNEL_PHASES[1]).cos(),
        0.5 + 0.5 * (index + CHANNEL_PHASES[2]).cos(),
    )
}

/// Linear blend between the samples at `floor(index)` and
/// `floor(index) + 1`, weighted by the fractional part. Continuous across
/// integer boundaries because both sides meet at the shared sample.
#[must_use]
pub fn interpolated_palette(index: f64) -> Rgb {
    let lower = index.floor();
    let t = index - lower;

    cosine_palette(lower).lerp(cosine_palette(lower + 1.0), t)
}

#[must_use]
pub fn luminance(colour: Rgb) -> f64 {
    colour.r * LUMINANCE[0] + colour.g * LUMINANCE[1] + colour.b * LUMINANCE[2]
}

/// `saturation` 0 gives the grey of equal luminance, 1 the colour itself.
#[must_use]
pub fn desaturate(colour: Rgb, saturation: f64) -> Rgb {
    let grey = luminance(colour);

    Rgb::new(grey, grey, grey).lerp(colour, saturation.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(a: Rgb, b: Rgb) -> f64 {
        ((a.r - b.r).powi(2) + (a.g - b.g).powi(2) + (a.b - b.b).powi(2)).sqrt()
    }

    #[test]
    fn test_samples_stay_in_unit_range() {
        for step in -400..400 {
            let colour = cosine_palette(f64::from(step) * 0.05);

            for channel in [colour.r, colour.g, colour.b] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_interpolation_hits_samples_at_integers() {
        for index in [-3.0, 0.0, 1.0, 17.0] {
            assert!(distance(interpolated_palette(index), cosine_palette(index)) < 1e-12);
        }
    }

    #[test]
    fn test_interpolation_is_continuous_across_integer_boundaries() {
        let epsilon = 1e-9;

        for boundary in [-5.0, -1.0, 0.0, 1.0, 2.0, 10.0, 255.0] {
            let below = interpolated_palette(boundary - epsilon);
            let above = interpolated_palette(boundary + epsilon);

            assert!(
                distance(below, above) < 1e-8,
                "jump of {} at {}",
                distance(below, above),
                boundary
            );
        }
    }

    #[test]
    fn test_zero_saturation_is_grey_with_same_luminance() {
        let colour = Rgb::new(0.9, 0.2, 0.4);
        let grey = desaturate(colour, 0.0);

        assert!((grey.r - grey.g).abs() < 1e-12);
        assert!((grey.g - grey.b).abs() < 1e-12);
        assert!((luminance(grey) - luminance(colour)).abs() < 1e-12);
    }

    #[test]
    fn test_full_saturation_is_identity() {
        let colour = Rgb::new(0.9, 0.2, 0.4);

        assert!(distance(desaturate(colour, 1.0), colour) < 1e-12);
    }
}
