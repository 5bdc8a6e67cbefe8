//! Body pose landmarks and the capability traits that supply them.
//!
//! Landmark detection itself happens outside this crate. A pose model, a stub,
//! or a manual annotation file can all stand behind [`LandmarkProvider`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{ImageInfo, Point};

/// The 33-point body pose vocabulary, in the detector's index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    Nose,
    LeftEyeInner,
    LeftEye,
    LeftEyeOuter,
    RightEyeInner,
    RightEye,
    RightEyeOuter,
    LeftEar,
    RightEar,
    MouthLeft,
    MouthRight,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftPinky,
    RightPinky,
    LeftIndex,
    RightIndex,
    LeftThumb,
    RightThumb,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    LeftHeel,
    RightHeel,
    LeftFootIndex,
    RightFootIndex,
}

impl Landmark {
    pub const COUNT: usize = 33;

    /// All landmarks in index order.
    pub const ALL: [Landmark; Landmark::COUNT] = [
        Landmark::Nose,
        Landmark::LeftEyeInner,
        Landmark::LeftEye,
        Landmark::LeftEyeOuter,
        Landmark::RightEyeInner,
        Landmark::RightEye,
        Landmark::RightEyeOuter,
        Landmark::LeftEar,
        Landmark::RightEar,
        Landmark::MouthLeft,
        Landmark::MouthRight,
        Landmark::LeftShoulder,
        Landmark::RightShoulder,
        Landmark::LeftElbow,
        Landmark::RightElbow,
        Landmark::LeftWrist,
        Landmark::RightWrist,
        Landmark::LeftPinky,
        Landmark::RightPinky,
        Landmark::LeftIndex,
        Landmark::RightIndex,
        Landmark::LeftThumb,
        Landmark::RightThumb,
        Landmark::LeftHip,
        Landmark::RightHip,
        Landmark::LeftKnee,
        Landmark::RightKnee,
        Landmark::LeftAnkle,
        Landmark::RightAnkle,
        Landmark::LeftHeel,
        Landmark::RightHeel,
        Landmark::LeftFootIndex,
        Landmark::RightFootIndex,
    ];

    /// Landmarks the measurer needs to derive chest, waist and hips.
    pub const REQUIRED: [Landmark; 4] = [
        Landmark::LeftShoulder,
        Landmark::RightShoulder,
        Landmark::LeftHip,
        Landmark::RightHip,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Landmark::Nose => "nose",
            Landmark::LeftEyeInner => "left_eye_inner",
            Landmark::LeftEye => "left_eye",
            Landmark::LeftEyeOuter => "left_eye_outer",
            Landmark::RightEyeInner => "right_eye_inner",
            Landmark::RightEye => "right_eye",
            Landmark::RightEyeOuter => "right_eye_outer",
            Landmark::LeftEar => "left_ear",
            Landmark::RightEar => "right_ear",
            Landmark::MouthLeft => "mouth_left",
            Landmark::MouthRight => "mouth_right",
            Landmark::LeftShoulder => "left_shoulder",
            Landmark::RightShoulder => "right_shoulder",
            Landmark::LeftElbow => "left_elbow",
            Landmark::RightElbow => "right_elbow",
            Landmark::LeftWrist => "left_wrist",
            Landmark::RightWrist => "right_wrist",
            Landmark::LeftPinky => "left_pinky",
            Landmark::RightPinky => "right_pinky",
            Landmark::LeftIndex => "left_index",
            Landmark::RightIndex => "right_index",
            Landmark::LeftThumb => "left_thumb",
            Landmark::RightThumb => "right_thumb",
            Landmark::LeftHip => "left_hip",
            Landmark::RightHip => "right_hip",
            Landmark::LeftKnee => "left_knee",
            Landmark::RightKnee => "right_knee",
            Landmark::LeftAnkle => "left_ankle",
            Landmark::RightAnkle => "right_ankle",
            Landmark::LeftHeel => "left_heel",
            Landmark::RightHeel => "right_heel",
            Landmark::LeftFootIndex => "left_foot_index",
            Landmark::RightFootIndex => "right_foot_index",
        }
    }
}

/// Normalized landmark coordinates for one person in one image.
///
/// Coordinates are fractions of the image width and height, so (0.5, 0.5)
/// is the image center regardless of resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    points: BTreeMap<Landmark, Point>,
}

impl LandmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a detector's dense output, where index `i` is `Landmark::ALL[i]`.
    /// Extra trailing points are ignored.
    pub fn from_dense(points: &[Point]) -> Self {
        let points = Landmark::ALL
            .iter()
            .zip(points.iter())
            .map(|(lm, p)| (*lm, *p))
            .collect();
        Self { points }
    }

    /// Load a manual annotation file: a JSON object mapping landmark names to `{x, y}`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let set: Self = serde_json::from_str(&contents)?;
        Ok(set)
    }

    pub fn with(mut self, landmark: Landmark, point: Point) -> Self {
        self.insert(landmark, point);
        self
    }

    pub fn insert(&mut self, landmark: Landmark, point: Point) {
        self.points.insert(landmark, point);
    }

    pub fn get(&self, landmark: Landmark) -> Option<Point> {
        self.points.get(&landmark).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Look up every landmark in `required`, in order.
    ///
    /// Fails with [`Error::LandmarksNotFound`] naming all absent landmarks.
    pub fn require<const N: usize>(&self, required: [Landmark; N]) -> Result<[Point; N]> {
        let mut points = [Point::new(0.0, 0.0); N];
        let mut missing = Vec::new();
        for (slot, lm) in points.iter_mut().zip(required) {
            match self.get(lm) {
                Some(p) => *slot = p,
                None => missing.push(lm.name()),
            }
        }

        if missing.is_empty() {
            Ok(points)
        } else {
            Err(Error::LandmarksNotFound(missing))
        }
    }
}

/// Source of body landmarks for an image.
///
/// Returns `Ok(None)` when the detector ran but found no person.
pub trait LandmarkProvider {
    fn detect(&self, image: &ImageInfo) -> Result<Option<LandmarkSet>>;
}

/// Source of the four reference-object corners, in length-edge then width-edge order.
pub trait ReferencePointSource {
    fn reference_points(&self, image: &ImageInfo) -> Result<Vec<Point>>;
}

/// A provider that returns a fixed, pre-annotated landmark set.
#[derive(Debug, Clone, Default)]
pub struct StaticLandmarks(pub Option<LandmarkSet>);

impl LandmarkProvider for StaticLandmarks {
    fn detect(&self, _image: &ImageInfo) -> Result<Option<LandmarkSet>> {
        Ok(self.0.clone())
    }
}

/// Reference points that were picked ahead of time.
#[derive(Debug, Clone, Default)]
pub struct FixedPoints(pub Vec<Point>);

impl ReferencePointSource for FixedPoints {
    fn reference_points(&self, _image: &ImageInfo) -> Result<Vec<Point>> {
        Ok(self.0.clone())
    }
}
