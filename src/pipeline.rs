//! End-to-end measurement of one photograph.
//!
//! Steps run in a fixed order and the first failure ends the run:
//!
//! 1. Fetch the four reference corners and compute the scale factor
//! 2. Ask the landmark provider for the person's pose landmarks
//! 3. Measure chest, waist and hips in pixels
//! 4. Convert the pixel widths to real-world units
//! 5. Add the caller's height and weight

use log::{debug, info};

use crate::calibration::calibrate;
use crate::error::{Error, Result};
use crate::landmarks::{LandmarkProvider, ReferencePointSource};
use crate::measure::PixelMeasurements;
use crate::measurement::{Attribute, MeasurementVector};
use crate::types::ImageInfo;
use crate::units::UnitMeasurements;

/// Real-world dimensions of the reference object, in the output unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceObject {
    pub length: f32,
    pub width: f32,
}

impl ReferenceObject {
    pub const fn new(length: f32, width: f32) -> Self {
        Self { length, width }
    }
}

/// Measures people in photographs using pluggable landmark and reference point sources.
///
/// Holds no per-request state, so one pipeline can serve any number of runs.
pub struct MeasurementPipeline<L, R> {
    landmarks: L,
    reference_points: R,
}

impl<L, R> MeasurementPipeline<L, R>
where
    L: LandmarkProvider,
    R: ReferencePointSource,
{
    pub fn new(landmarks: L, reference_points: R) -> Self {
        Self {
            landmarks,
            reference_points,
        }
    }

    /// Measure the person in `image`.
    ///
    /// `height` and `weight` are copied into the result unchanged; they must be
    /// finite and positive. A body width that comes out as zero (for example
    /// coincident shoulder landmarks) fails with [`Error::InvalidMeasurement`],
    /// so a successful result is always complete.
    pub fn run(
        &self,
        image: &ImageInfo,
        reference: ReferenceObject,
        height: f32,
        weight: f32,
    ) -> Result<MeasurementVector> {
        check_positive("Height", height)?;
        check_positive("Weight", weight)?;

        let points = self.reference_points.reference_points(image)?;
        let scale = calibrate(&points, reference.length, reference.width)?;
        debug!("Scale factor: {:.3} px/unit", scale.pixels_per_unit());

        let landmarks = self
            .landmarks
            .detect(image)?
            .ok_or(Error::NoLandmarksDetected)?;
        debug!("Detected {} landmarks", landmarks.len());

        let pixels = PixelMeasurements::from_landmarks(&landmarks, image)?;
        debug!(
            "Pixel widths: chest {:.1}, waist {:.1}, hips {:.1}",
            pixels.chest, pixels.waist, pixels.hips
        );

        let units = UnitMeasurements::convert(&pixels, scale)?;
        check_positive("Chest", units.chest)?;
        check_positive("Waist", units.waist)?;
        check_positive("Hips", units.hips)?;
        info!(
            "Measured chest {:.2}, waist {:.2}, hips {:.2}",
            units.chest, units.waist, units.hips
        );

        Ok(MeasurementVector::new()
            .with(Attribute::Chest, units.chest)
            .with(Attribute::Waist, units.waist)
            .with(Attribute::Hips, units.hips)
            .with(Attribute::Height, height)
            .with(Attribute::Weight, weight))
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidMeasurement { field, value })
    }
}
