use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid reference input: {0}")]
    InvalidReferenceInput(String),

    #[error("Degenerate calibration: {0}")]
    DivisionByZero(String),

    #[error("No landmarks detected")]
    NoLandmarksDetected,

    #[error("Required landmarks not found: {}", .0.join(", "))]
    LandmarksNotFound(Vec<&'static str>),

    #[error("Landmark {name} at ({x}, {y}) is outside the normalized image")]
    InvalidLandmark { name: &'static str, x: f32, y: f32 },

    #[error("Invalid image: {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    #[error("Invalid measurement for {field}: {value}")]
    InvalidMeasurement { field: &'static str, value: f32 },

    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid size chart: {0}")]
    InvalidSizeChart(String),
}

pub type Result<T> = std::result::Result<T, Error>;
