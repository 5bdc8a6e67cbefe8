use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Size chart selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "female" => Ok(Gender::Female),
            "male" => Ok(Gender::Male),
            _ => Err(Error::InvalidInput("Invalid gender provided".to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A measured body attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Height,
    Weight,
    Chest,
    Waist,
    Hips,
}

impl Attribute {
    /// Attributes every size tier constrains, in reporting order.
    pub const ALL: [Attribute; 5] = [
        Attribute::Height,
        Attribute::Weight,
        Attribute::Chest,
        Attribute::Waist,
        Attribute::Hips,
    ];

    /// Display name. The chest is called "Chest/Bust" on the female chart.
    pub fn label(self, gender: Gender) -> &'static str {
        match (self, gender) {
            (Attribute::Height, _) => "Height",
            (Attribute::Weight, _) => "Weight",
            (Attribute::Chest, Gender::Female) => "Chest/Bust",
            (Attribute::Chest, Gender::Male) => "Chest",
            (Attribute::Waist, _) => "Waist",
            (Attribute::Hips, _) => "Hips",
        }
    }
}

/// Body measurements in real-world units.
///
/// Each attribute is either a finite positive number or absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeasurementVector {
    height: Option<f32>,
    weight: Option<f32>,
    chest: Option<f32>,
    waist: Option<f32>,
    hips: Option<f32>,
}

impl MeasurementVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value. Zero, negative and non-finite values leave the attribute absent.
    pub fn set(&mut self, attribute: Attribute, value: f32) {
        let value = (value.is_finite() && value > 0.0).then_some(value);
        *self.slot_mut(attribute) = value;
    }

    pub fn with(mut self, attribute: Attribute, value: f32) -> Self {
        self.set(attribute, value);
        self
    }

    pub fn clear(&mut self, attribute: Attribute) {
        *self.slot_mut(attribute) = None;
    }

    pub fn get(&self, attribute: Attribute) -> Option<f32> {
        match attribute {
            Attribute::Height => self.height,
            Attribute::Weight => self.weight,
            Attribute::Chest => self.chest,
            Attribute::Waist => self.waist,
            Attribute::Hips => self.hips,
        }
    }

    /// Attributes with no recorded value, in [`Attribute::ALL`] order.
    pub fn missing(&self) -> Vec<Attribute> {
        Attribute::ALL
            .iter()
            .copied()
            .filter(|a| self.get(*a).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Present values keyed by their display name for `gender`.
    pub fn labeled(&self, gender: Gender) -> BTreeMap<&'static str, f32> {
        Attribute::ALL
            .iter()
            .filter_map(|a| self.get(*a).map(|v| (a.label(gender), v)))
            .collect()
    }

    fn slot_mut(&mut self, attribute: Attribute) -> &mut Option<f32> {
        match attribute {
            Attribute::Height => &mut self.height,
            Attribute::Weight => &mut self.weight,
            Attribute::Chest => &mut self.chest,
            Attribute::Waist => &mut self.waist,
            Attribute::Hips => &mut self.hips,
        }
    }
}
