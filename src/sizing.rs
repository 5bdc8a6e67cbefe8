//! Garment size classification against gendered, tiered size charts.
//!
//! A chart holds one ordered list of tiers per gender, smallest first. A
//! measurement vector matches a tier when every attribute lies inside that
//! tier's inclusive interval. Tiers are scanned in order and the first match
//! wins, so where adjacent tiers overlap the smaller size is chosen.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::measurement::{Attribute, Gender, MeasurementVector};

/// Inclusive `[min, max]` range. Serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval(pub f32, pub f32);

impl Interval {
    pub fn min(&self) -> f32 {
        self.0
    }

    pub fn max(&self) -> f32 {
        self.1
    }

    pub fn contains(&self, value: f32) -> bool {
        self.0 <= value && value <= self.1
    }

    fn is_valid(&self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.0 <= self.1
    }
}

/// One row of a size chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeTier {
    pub size: String,
    pub height: Interval,
    pub weight: Interval,
    pub chest: Interval,
    pub waist: Interval,
    pub hips: Interval,
}

impl SizeTier {
    pub fn range(&self, attribute: Attribute) -> Interval {
        match attribute {
            Attribute::Height => self.height,
            Attribute::Weight => self.weight,
            Attribute::Chest => self.chest,
            Attribute::Waist => self.waist,
            Attribute::Hips => self.hips,
        }
    }

    /// True if every attribute is present and inside this tier's range.
    pub fn matches(&self, measurements: &MeasurementVector) -> bool {
        Attribute::ALL.iter().all(|a| {
            measurements
                .get(*a)
                .map_or(false, |v| self.range(*a).contains(v))
        })
    }
}

/// Outcome of classifying a measurement vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Size(String),
    /// Display names of every absent required attribute.
    MissingMeasurements(Vec<&'static str>),
    UnsupportedGender,
    NoMatchingTier,
}

impl Classification {
    pub fn size(&self) -> Option<&str> {
        match self {
            Classification::Size(label) => Some(label),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Size(label) => f.write_str(label),
            Classification::MissingMeasurements(names) => write!(
                f,
                "Missing measurements for: {}. Please try again.",
                names.join(", ")
            ),
            Classification::UnsupportedGender => {
                f.write_str("Size chart not available for the specified gender.")
            }
            Classification::NoMatchingTier => {
                f.write_str("Size exceeds available range. Please consult a specialist.")
            }
        }
    }
}

/// Size tables for both genders. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeChart {
    female: Vec<SizeTier>,
    male: Vec<SizeTier>,
}

impl SizeChart {
    /// Build a chart from explicit tier lists, validating every range.
    pub fn new(female: Vec<SizeTier>, male: Vec<SizeTier>) -> Result<Self> {
        let chart = Self { female, male };
        chart.validate()?;
        Ok(chart)
    }

    /// The standard chart, in inches and pounds.
    pub fn standard() -> Self {
        Self {
            female: vec![
                tier("XS", (60.0, 63.0), (104.0, 119.0), (30.5, 33.0), (26.0, 27.0), (32.0, 35.0)),
                tier("S", (62.0, 65.0), (115.0, 130.0), (33.5, 35.5), (27.6, 29.5), (35.5, 38.0)),
                tier("M", (63.0, 66.0), (126.0, 141.0), (36.0, 38.0), (30.0, 32.0), (38.0, 40.0)),
                tier("L", (64.0, 68.0), (137.0, 152.0), (39.0, 41.0), (33.0, 35.5), (40.5, 42.5)),
                tier("XL", (67.0, 69.0), (159.0, 174.0), (41.0, 43.0), (36.0, 40.0), (43.0, 45.5)),
                tier("XXL", (68.0, 70.0), (192.0, 207.0), (43.0, 46.0), (41.0, 44.0), (45.5, 48.0)),
            ],
            male: vec![
                tier("XXS", (63.0, 66.0), (119.0, 128.0), (30.0, 32.0), (24.5, 26.0), (30.5, 32.5)),
                tier("XS", (65.0, 68.0), (123.0, 139.0), (32.0, 34.5), (26.0, 27.5), (32.5, 35.0)),
                tier("S", (67.0, 69.0), (135.0, 150.0), (34.5, 38.0), (28.0, 30.0), (35.5, 38.0)),
                tier("M", (69.0, 71.0), (146.0, 161.0), (38.0, 41.0), (30.0, 33.5), (38.0, 40.0)),
                tier("L", (70.0, 80.0), (168.0, 187.0), (41.5, 45.0), (34.0, 37.5), (40.5, 42.5)),
                tier("XL", (72.0, 75.0), (190.0, 209.0), (45.5, 48.0), (38.0, 41.5), (43.0, 45.5)),
                tier("XXL", (74.0, 76.0), (221.0, 232.0), (49.0, 52.0), (41.5, 55.0), (45.5, 48.0)),
            ],
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let chart: Self = serde_json::from_str(json)?;
        chart.validate()?;
        Ok(chart)
    }

    /// Load a chart from a JSON file of the form
    /// `{"female": [{"size": "S", "height": [62, 65], ...}], "male": [...]}`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let chart = Self::from_json_str(&contents)?;
        info!(
            "Loaded size chart from {} ({} female, {} male tiers)",
            path.display(),
            chart.female.len(),
            chart.male.len()
        );
        Ok(chart)
    }

    pub fn tiers(&self, gender: Gender) -> &[SizeTier] {
        match gender {
            Gender::Female => &self.female,
            Gender::Male => &self.male,
        }
    }

    /// Classify measurements for a gender given as a string.
    ///
    /// Anything other than `"female"` or `"male"` yields
    /// [`Classification::UnsupportedGender`].
    pub fn classify(&self, gender: &str, measurements: &MeasurementVector) -> Classification {
        match gender.parse::<Gender>() {
            Ok(gender) => self.classify_gender(gender, measurements),
            Err(_) => Classification::UnsupportedGender,
        }
    }

    pub fn classify_gender(&self, gender: Gender, measurements: &MeasurementVector) -> Classification {
        let missing = measurements.missing();
        if !missing.is_empty() {
            return Classification::MissingMeasurements(
                missing.into_iter().map(|a| a.label(gender)).collect(),
            );
        }

        match self.tiers(gender).iter().find(|t| t.matches(measurements)) {
            Some(tier) => {
                debug!("Matched {} size {}", gender, tier.size);
                Classification::Size(tier.size.clone())
            }
            None => {
                debug!("No {} size matches {:?}", gender, measurements);
                Classification::NoMatchingTier
            }
        }
    }

    fn validate(&self) -> Result<()> {
        for gender in [Gender::Female, Gender::Male] {
            let tiers = self.tiers(gender);
            if tiers.is_empty() {
                return Err(Error::InvalidSizeChart(format!("no {} tiers", gender)));
            }
            for t in tiers {
                if t.size.trim().is_empty() {
                    return Err(Error::InvalidSizeChart(format!(
                        "{} tier with empty size label",
                        gender
                    )));
                }
                for a in Attribute::ALL {
                    let r = t.range(a);
                    if !r.is_valid() {
                        return Err(Error::InvalidSizeChart(format!(
                            "{} size {}: invalid {} range [{}, {}]",
                            gender,
                            t.size,
                            a.label(gender),
                            r.min(),
                            r.max()
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for SizeChart {
    fn default() -> Self {
        Self::standard()
    }
}

fn tier(
    size: &str,
    height: (f32, f32),
    weight: (f32, f32),
    chest: (f32, f32),
    waist: (f32, f32),
    hips: (f32, f32),
) -> SizeTier {
    SizeTier {
        size: size.to_string(),
        height: Interval(height.0, height.1),
        weight: Interval(weight.0, weight.1),
        chest: Interval(chest.0, chest.1),
        waist: Interval(waist.0, waist.1),
        hips: Interval(hips.0, hips.1),
    }
}
