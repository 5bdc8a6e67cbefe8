//! Validation of inbound form fields and the serializable size report.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::landmarks::{LandmarkProvider, ReferencePointSource};
use crate::measurement::{Gender, MeasurementVector};
use crate::pipeline::{MeasurementPipeline, ReferenceObject};
use crate::sizing::{Classification, SizeChart};
use crate::types::ImageInfo;

/// A validated size request. Every number is finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRequest {
    pub gender: Gender,
    pub height: f32,
    pub weight: f32,
    pub reference: ReferenceObject,
}

impl SizeRequest {
    /// Parse the form fields `gender`, `height`, `weight`, `ref_length` and `ref_width`.
    pub fn from_form(fields: &HashMap<String, String>) -> Result<Self> {
        let gender = fields
            .get("gender")
            .map(|g| g.trim())
            .unwrap_or_default()
            .parse::<Gender>()?;

        Ok(Self {
            gender,
            height: positive_field(fields, "height")?,
            weight: positive_field(fields, "weight")?,
            reference: ReferenceObject::new(
                positive_field(fields, "ref_length")?,
                positive_field(fields, "ref_width")?,
            ),
        })
    }

    /// Run the pipeline on `image` and classify the result.
    pub fn process<L, R>(
        &self,
        pipeline: &MeasurementPipeline<L, R>,
        chart: &SizeChart,
        image: &ImageInfo,
    ) -> Result<SizeReport>
    where
        L: LandmarkProvider,
        R: ReferencePointSource,
    {
        let measurements = pipeline.run(image, self.reference, self.height, self.weight)?;
        let classification = chart.classify_gender(self.gender, &measurements);
        Ok(SizeReport::new(self.gender, &measurements, &classification))
    }
}

fn positive_field(fields: &HashMap<String, String>, name: &str) -> Result<f32> {
    let raw = fields
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::InvalidInput(format!("Missing value for {}", name)))?;

    match raw.parse::<f32>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(Error::InvalidInput(format!(
            "Invalid numeric input for {}: {:?}",
            name, raw
        ))),
    }
}

/// JSON output for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeReport {
    pub gender: Gender,
    /// Present measurements keyed by display name
    pub measurements: BTreeMap<&'static str, f32>,
    /// Size label when a tier matched
    pub recommended_size: Option<String>,
    /// The size label, or why no size could be given
    pub message: String,
}

impl SizeReport {
    pub fn new(gender: Gender, measurements: &MeasurementVector, classification: &Classification) -> Self {
        Self {
            gender,
            measurements: measurements.labeled(gender),
            recommended_size: classification.size().map(str::to_string),
            message: classification.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Attribute;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid() -> Vec<(&'static str, &'static str)> {
        vec![
            ("gender", "male"),
            ("height", "70"),
            ("weight", "160"),
            ("ref_length", "11"),
            ("ref_width", "8.5"),
        ]
    }

    #[test]
    fn parses_valid_form() {
        let req = SizeRequest::from_form(&form(&valid())).unwrap();
        assert_eq!(req.gender, Gender::Male);
        assert_eq!(req.height, 70.0);
        assert_eq!(req.weight, 160.0);
        assert_eq!(req.reference, ReferenceObject::new(11.0, 8.5));
    }

    #[test]
    fn rejects_bad_gender() {
        let mut fields = valid();
        fields[0] = ("gender", "other");
        let err = SizeRequest::from_form(&form(&fields)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid gender provided");
    }

    #[test]
    fn rejects_missing_and_non_numeric_fields() {
        for (name, value) in [("height", "tall"), ("weight", ""), ("ref_length", "0"), ("ref_width", "-2"), ("height", "inf")] {
            let fields: Vec<_> = valid()
                .into_iter()
                .map(|(k, v)| if k == name { (k, value) } else { (k, v) })
                .collect();
            let err = SizeRequest::from_form(&form(&fields)).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(ref msg) if msg.contains(name)), "{}", err);
        }

        let without_width: Vec<_> = valid().into_iter().filter(|(k, _)| *k != "ref_width").collect();
        assert!(SizeRequest::from_form(&form(&without_width)).is_err());
    }

    #[test]
    fn report_serializes_label_or_message() {
        let m = MeasurementVector::new()
            .with(Attribute::Height, 65.0)
            .with(Attribute::Weight, 130.0)
            .with(Attribute::Chest, 34.0);

        let ok = SizeReport::new(Gender::Female, &m, &Classification::Size("S".into()));
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["gender"], "female");
        assert_eq!(json["recommended_size"], "S");
        assert_eq!(json["measurements"]["Chest/Bust"], 34.0);

        let missing = Classification::MissingMeasurements(vec!["Waist", "Hips"]);
        let report = SizeReport::new(Gender::Female, &m, &missing);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["recommended_size"].is_null());
        assert_eq!(json["message"], "Missing measurements for: Waist, Hips. Please try again.");
    }
}
