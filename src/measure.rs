//! Body widths in pixels, derived from landmark pairs.
//!
//! A single frontal photograph gives only 2D widths, not girths. Chest is the
//! shoulder-to-shoulder span and waist is the hip-to-hip span. There is no
//! landmark pair that separates the hip girth from the waist, so `hips` is the
//! same hip-to-hip span as `waist`. This is a known approximation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::landmarks::{Landmark, LandmarkSet};
use crate::types::{ImageInfo, Point};

/// Raw body widths in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelMeasurements {
    /// Left shoulder to right shoulder
    pub chest: f32,

    /// Left hip to right hip
    pub waist: f32,

    /// Same span as `waist`
    pub hips: f32,
}

impl PixelMeasurements {
    /// Measure a landmark set detected in an image of the given size.
    ///
    /// Fails with [`Error::LandmarksNotFound`] if any shoulder or hip landmark
    /// is missing, and with [`Error::InvalidLandmark`] if one lies outside
    /// [0,1] or is not finite.
    pub fn from_landmarks(landmarks: &LandmarkSet, image: &ImageInfo) -> Result<Self> {
        if image.is_empty() {
            return Err(Error::InvalidImage {
                width: image.width,
                height: image.height,
            });
        }

        let points = landmarks.require(Landmark::REQUIRED)?;
        for (lm, p) in Landmark::REQUIRED.iter().zip(points.iter()) {
            check_normalized(*lm, *p)?;
        }

        let [left_shoulder, right_shoulder, left_hip, right_hip] =
            points.map(|p| image.denormalize_point(p));
        let chest = left_shoulder.distance(&right_shoulder);
        let waist = left_hip.distance(&right_hip);

        Ok(Self {
            chest,
            waist,
            hips: waist,
        })
    }
}

/// Measure chest, waist and hips in pixels.
pub fn measure(landmarks: &LandmarkSet, image_width: u32, image_height: u32) -> Result<PixelMeasurements> {
    PixelMeasurements::from_landmarks(landmarks, &ImageInfo::new(image_width, image_height))
}

fn check_normalized(landmark: Landmark, p: Point) -> Result<()> {
    let in_range = |v: f32| (0.0..=1.0).contains(&v);
    if in_range(p.x) && in_range(p.y) {
        Ok(())
    } else {
        Err(Error::InvalidLandmark {
            name: landmark.name(),
            x: p.x,
            y: p.y,
        })
    }
}
