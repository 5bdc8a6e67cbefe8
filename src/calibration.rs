//! Pixel-to-unit calibration from a reference object of known size.
//!
//! The user marks the four corners of a reference object in the photograph.
//! The segment from corner 0 to corner 1 is its length edge and the segment
//! from corner 1 to corner 2 its width edge. Comparing those pixel lengths
//! with the real-world dimensions gives a pixels-per-unit scale factor.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Point;

/// Number of corner points that describe a reference object.
pub const REFERENCE_POINT_COUNT: usize = 4;

/// Pixels per real-world unit (e.g. pixels per inch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactor(f32);

impl ScaleFactor {
    /// Wrap a raw pixels-per-unit value, rejecting zero and non-finite values.
    pub fn new(pixels_per_unit: f32) -> Result<Self> {
        if pixels_per_unit.is_finite() && pixels_per_unit > 0.0 {
            Ok(Self(pixels_per_unit))
        } else {
            Err(Error::DivisionByZero(format!(
                "scale factor must be finite and positive, got {}",
                pixels_per_unit
            )))
        }
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.0
    }
}

/// Pixel and real-world lengths of the two reference edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCalibration {
    pub length_pixels: f32,
    pub width_pixels: f32,
    pub length_units: f32,
    pub width_units: f32,
}

impl ReferenceCalibration {
    /// Measure the reference edges from four ordered corner points.
    ///
    /// Fails with [`Error::InvalidReferenceInput`] unless exactly four finite
    /// points are supplied.
    pub fn from_points(points: &[Point], length_units: f32, width_units: f32) -> Result<Self> {
        if points.len() != REFERENCE_POINT_COUNT {
            return Err(Error::InvalidReferenceInput(format!(
                "expected {} reference points, got {}",
                REFERENCE_POINT_COUNT,
                points.len()
            )));
        }
        if let Some(p) = points.iter().find(|p| !p.is_finite()) {
            return Err(Error::InvalidReferenceInput(format!(
                "reference point ({}, {}) is not finite",
                p.x, p.y
            )));
        }

        Ok(Self {
            length_pixels: points[0].distance(&points[1]),
            width_pixels: points[1].distance(&points[2]),
            length_units,
            width_units,
        })
    }

    /// Average of the length and width pixels-per-unit ratios.
    pub fn scale_factor(&self) -> Result<ScaleFactor> {
        check_units("length", self.length_units)?;
        check_units("width", self.width_units)?;

        let ppu_length = self.length_pixels / self.length_units;
        let ppu_width = self.width_pixels / self.width_units;

        ScaleFactor::new((ppu_length + ppu_width) / 2.0)
    }
}

/// Compute the scale factor for a reference object marked by four corners.
pub fn calibrate(points: &[Point], length_units: f32, width_units: f32) -> Result<ScaleFactor> {
    ReferenceCalibration::from_points(points, length_units, width_units)?.scale_factor()
}

fn check_units(edge: &str, units: f32) -> Result<()> {
    if units.is_finite() && units > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidReferenceInput(format!(
            "reference {} must be a positive number, got {}",
            edge, units
        )))
    }
}
