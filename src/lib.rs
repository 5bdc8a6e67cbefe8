//! # fit-size
//!
//! Body measurement estimation from a single photograph and garment size
//! classification.
//!
//! This crate provides:
//! - **Calibration**: pixels-per-unit scale from a reference object of known size
//! - **Body Measurements**: chest, waist and hip widths from pose landmarks
//! - **Size Classification**: first-match lookup in gendered, tiered size charts
//!
//! Pose detection and reference point picking are external. Plug them in by
//! implementing [`LandmarkProvider`] and [`ReferencePointSource`].
//!
//! ## Quick Start
//!
//! ```rust
//! use fit_size::{
//!     FixedPoints, ImageInfo, Landmark, LandmarkSet, MeasurementPipeline, Point,
//!     ReferenceObject, SizeChart, StaticLandmarks,
//! };
//!
//! // Corners of a 100 x 50 px reference object that is 10 x 5 inches
//! let corners = FixedPoints(vec![
//!     Point::new(10.0, 10.0),
//!     Point::new(110.0, 10.0),
//!     Point::new(110.0, 60.0),
//!     Point::new(10.0, 60.0),
//! ]);
//!
//! // Normalized landmarks, e.g. from a pose model
//! let landmarks = LandmarkSet::new()
//!     .with(Landmark::LeftShoulder, Point::new(0.67, 0.3))
//!     .with(Landmark::RightShoulder, Point::new(0.33, 0.3))
//!     .with(Landmark::LeftHip, Point::new(0.645, 0.6))
//!     .with(Landmark::RightHip, Point::new(0.355, 0.6));
//!
//! let pipeline = MeasurementPipeline::new(StaticLandmarks(Some(landmarks)), corners);
//! let image = ImageInfo::new(1000, 1000);
//! let measurements = pipeline
//!     .run(&image, ReferenceObject::new(10.0, 5.0), 65.0, 130.0)
//!     .unwrap();
//!
//! let chart = SizeChart::standard();
//! println!("{}", chart.classify("female", &measurements));
//! ```

mod calibration;
mod error;
mod landmarks;
mod measure;
mod measurement;
mod pipeline;
mod request;
mod sizing;
mod types;
mod units;

pub use calibration::{calibrate, ReferenceCalibration, ScaleFactor, REFERENCE_POINT_COUNT};
pub use error::{Error, Result};
pub use landmarks::{
    FixedPoints, Landmark, LandmarkProvider, LandmarkSet, ReferencePointSource, StaticLandmarks,
};
pub use measure::{measure, PixelMeasurements};
pub use measurement::{Attribute, Gender, MeasurementVector};
pub use pipeline::{MeasurementPipeline, ReferenceObject};
pub use request::{SizeReport, SizeRequest};
pub use sizing::{Classification, Interval, SizeChart, SizeTier};
pub use types::{ImageInfo, Point};
pub use units::{to_units, UnitMeasurements};
