use crate::calibration::ScaleFactor;
use crate::error::{Error, Result};
use crate::measure::PixelMeasurements;

/// Convert a pixel distance into real-world units.
pub fn to_units(pixel_distance: f32, scale_factor: f32) -> Result<f32> {
    if !scale_factor.is_finite() || scale_factor == 0.0 {
        return Err(Error::DivisionByZero(format!(
            "cannot convert {} px with scale factor {}",
            pixel_distance, scale_factor
        )));
    }
    Ok(pixel_distance / scale_factor)
}

/// Body widths in real-world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitMeasurements {
    pub chest: f32,
    pub waist: f32,
    pub hips: f32,
}

impl UnitMeasurements {
    pub fn convert(pixels: &PixelMeasurements, scale: ScaleFactor) -> Result<Self> {
        let ppu = scale.pixels_per_unit();
        Ok(Self {
            chest: to_units(pixels.chest, ppu)?,
            waist: to_units(pixels.waist, ppu)?,
            hips: to_units(pixels.hips, ppu)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_by_scale() {
        assert!((to_units(250.0, 10.0).unwrap() - 25.0).abs() < 1e-6);
        assert_eq!(to_units(0.0, 4.0).unwrap(), 0.0);
    }

    #[test]
    fn rejects_degenerate_scale() {
        for scale in [0.0, f32::INFINITY, f32::NAN] {
            assert!(matches!(
                to_units(100.0, scale),
                Err(Error::DivisionByZero(_))
            ));
        }
    }

    #[test]
    fn converts_all_widths() {
        let pixels = PixelMeasurements {
            chest: 340.0,
            waist: 290.0,
            hips: 290.0,
        };
        let units = UnitMeasurements::convert(&pixels, ScaleFactor::new(10.0).unwrap()).unwrap();
        assert!((units.chest - 34.0).abs() < 1e-5);
        assert!((units.waist - 29.0).abs() < 1e-5);
        assert_eq!(units.waist, units.hips);
    }
}
