//! End-to-end tests: reference calibration, landmark measurement and sizing.

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use fit_size::{
    Attribute, Classification, Error, FixedPoints, ImageInfo, Landmark, LandmarkProvider,
    LandmarkSet, MeasurementPipeline, MeasurementVector, Point, ReferenceObject, Result,
    SizeChart, SizeRequest, StaticLandmarks,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Letter-size sheet (11 x 8.5 in) photographed at 20 px/in.
fn letter_sheet() -> FixedPoints {
    FixedPoints(vec![
        Point::new(50.0, 900.0),
        Point::new(270.0, 900.0),
        Point::new(270.0, 1070.0),
        Point::new(50.0, 1070.0),
    ])
}

/// Dense 33-point detector output for a 1200 x 1600 image.
///
/// Shoulders are 720 px apart (36 in) and hips 620 px apart (31 in).
fn detector_output() -> Vec<Point> {
    let mut dense = vec![Point::new(0.5, 0.5); Landmark::COUNT];
    dense[Landmark::LeftShoulder.index()] = Point::new(0.8, 0.25);
    dense[Landmark::RightShoulder.index()] = Point::new(0.2, 0.25);
    dense[Landmark::LeftHip.index()] = Point::new(0.5 + 310.0 / 1200.0, 0.55);
    dense[Landmark::RightHip.index()] = Point::new(0.5 - 310.0 / 1200.0, 0.55);
    dense
}

struct DenseDetector;

impl LandmarkProvider for DenseDetector {
    fn detect(&self, _image: &ImageInfo) -> Result<Option<LandmarkSet>> {
        Ok(Some(LandmarkSet::from_dense(&detector_output())))
    }
}

fn form(gender: &str, height: &str, weight: &str) -> HashMap<String, String> {
    [
        ("gender", gender),
        ("height", height),
        ("weight", weight),
        ("ref_length", "11"),
        ("ref_width", "8.5"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[test]
fn photograph_to_size() {
    init_logging();

    let pipeline = MeasurementPipeline::new(DenseDetector, letter_sheet());
    let chart = SizeChart::standard();
    let image = ImageInfo::new(1200, 1600);

    let request = SizeRequest::from_form(&form("female", "64", "130")).unwrap();
    let report = request.process(&pipeline, &chart, &image).unwrap();

    let chest = report.measurements["Chest/Bust"];
    let waist = report.measurements["Waist"];
    let hips = report.measurements["Hips"];
    assert!((chest - 36.0).abs() < 0.01, "chest {}", chest);
    assert!((waist - 31.0).abs() < 0.01, "waist {}", waist);
    assert_eq!(waist, hips);

    // Hips come out equal to the waist, which is below the M hip range.
    assert_eq!(report.recommended_size, None);
    assert_eq!(
        report.message,
        "Size exceeds available range. Please consult a specialist."
    );
}

#[test]
fn documented_female_sample() {
    let chart = SizeChart::standard();
    let m = MeasurementVector::new()
        .with(Attribute::Height, 65.0)
        .with(Attribute::Weight, 130.0)
        .with(Attribute::Chest, 34.0)
        .with(Attribute::Waist, 29.0)
        .with(Attribute::Hips, 36.0);

    // Chest 34 is below the M range (36-38); first match in table order is S.
    assert_eq!(chart.classify("female", &m), Classification::Size("S".into()));
}

#[test]
fn male_chart_uses_chest_name() {
    let pipeline = MeasurementPipeline::new(DenseDetector, letter_sheet());
    let image = ImageInfo::new(1200, 1600);
    let m = pipeline
        .run(&image, ReferenceObject::new(11.0, 8.5), 70.0, 160.0)
        .unwrap();

    let chart = SizeChart::standard();
    let report = SizeRequest::from_form(&form("male", "70", "160"))
        .unwrap()
        .process(&pipeline, &chart, &image)
        .unwrap();
    assert!(report.measurements.contains_key("Chest"));
    assert!(!report.measurements.contains_key("Chest/Bust"));
    assert_eq!(chart.classify("male", &m).size(), report.recommended_size.as_deref());
}

#[test]
fn failures_are_distinguishable() {
    let image = ImageInfo::new(1200, 1600);
    let reference = ReferenceObject::new(11.0, 8.5);

    let none = MeasurementPipeline::new(StaticLandmarks(None), letter_sheet());
    assert!(matches!(
        none.run(&image, reference, 65.0, 130.0),
        Err(Error::NoLandmarksDetected)
    ));

    let three_points = FixedPoints(letter_sheet().0[..3].to_vec());
    let bad_points = MeasurementPipeline::new(DenseDetector, three_points);
    assert!(matches!(
        bad_points.run(&image, reference, 65.0, 130.0),
        Err(Error::InvalidReferenceInput(_))
    ));

    let pipeline = MeasurementPipeline::new(DenseDetector, letter_sheet());
    assert!(matches!(
        pipeline.run(&image, ReferenceObject::new(11.0, 0.0), 65.0, 130.0),
        Err(Error::InvalidReferenceInput(_))
    ));

    let chart = SizeChart::standard();
    assert_eq!(
        chart.classify("other", &MeasurementVector::new()),
        Classification::UnsupportedGender
    );
}

#[test]
fn shared_chart_across_threads() {
    let chart = Arc::new(SizeChart::standard());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let chart = Arc::clone(&chart);
            thread::spawn(move || {
                let pipeline = MeasurementPipeline::new(DenseDetector, letter_sheet());
                let image = ImageInfo::new(1200, 1600);
                let m = pipeline
                    .run(&image, ReferenceObject::new(11.0, 8.5), 64.0 + i as f32, 130.0)
                    .unwrap();
                chart.classify("female", &m)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Classification::NoMatchingTier);
    }
}
