//! CLI application for body measurement and size recommendation.
//!
//! Usage:
//!   fit-size <image> --gender female --height 65 --weight 130 \
//!       --ref-length 11 --ref-width 8.5 \
//!       --points 10,10 110,10 110,60 10,60 \
//!       --landmarks pose.json                    # Human-readable output
//!   fit-size <image> ... --json                  # JSON output
//!   fit-size <image> ... -o report.json          # Save to file

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use fit_size::{
    FixedPoints, ImageInfo, LandmarkSet, MeasurementPipeline, Point, SizeChart, SizeReport,
    SizeRequest, StaticLandmarks,
};
use log::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "fit-size")]
#[command(author, version, about = "Body measurements and garment size from a photograph", long_about = None)]
struct Args {
    /// Input image file
    #[arg(required = true)]
    image: PathBuf,

    /// Size chart to use: male or female
    #[arg(long)]
    gender: String,

    /// Height, in the size chart's unit
    #[arg(long)]
    height: String,

    /// Weight, in the size chart's unit
    #[arg(long)]
    weight: String,

    /// Real-world length of the reference object
    #[arg(long)]
    ref_length: String,

    /// Real-world width of the reference object
    #[arg(long)]
    ref_width: String,

    /// Reference object corners as x,y pixel pairs: length edge first, then width edge
    #[arg(long, required = true, num_args = 1.., value_parser = parse_point)]
    points: Vec<Point>,

    /// Landmark annotation file (JSON object of landmark name -> {x, y}, normalized)
    #[arg(long)]
    landmarks: PathBuf,

    /// Size chart JSON (default: built-in standard chart)
    #[arg(long)]
    size_chart: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {:?}", s))?;
    let x: f32 = x.trim().parse().map_err(|_| format!("invalid x in {:?}", s))?;
    let y: f32 = y.trim().parse().map_err(|_| format!("invalid y in {:?}", s))?;
    Ok(Point::new(x, y))
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let form: HashMap<String, String> = [
        ("gender", &args.gender),
        ("height", &args.height),
        ("weight", &args.weight),
        ("ref_length", &args.ref_length),
        ("ref_width", &args.ref_width),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.clone()))
    .collect();
    let request = SizeRequest::from_form(&form)?;

    let chart = match &args.size_chart {
        Some(path) => SizeChart::from_json_file(path)?,
        None => SizeChart::standard(),
    };

    debug!("Reading image {:?}...", args.image);
    let (width, height) = image::image_dimensions(&args.image)?;
    let image = ImageInfo::new(width, height);

    debug!("Loading landmarks from {:?}...", args.landmarks);
    let landmarks = LandmarkSet::from_json_file(&args.landmarks)?;
    let provider = StaticLandmarks((!landmarks.is_empty()).then_some(landmarks));

    let pipeline = MeasurementPipeline::new(provider, FixedPoints(args.points.clone()));
    let report = request.process(&pipeline, &chart, &image)?;
    info!("Recommendation: {}", report.message);

    let output_str = if args.json {
        serde_json::to_string_pretty(&report)?
    } else {
        format_human_readable(args, &image, &report)
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output_str)?;
        info!("Output written to {:?}", path);
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

fn format_human_readable(args: &Args, image: &ImageInfo, report: &SizeReport) -> String {
    let mut s = String::new();

    s.push_str(&format!(
        "Image: {} ({}x{})\n",
        args.image.display(),
        image.width,
        image.height
    ));
    s.push_str(&format!("Size chart: {}\n", report.gender));

    s.push_str("\nMeasurements:\n");
    for (name, value) in &report.measurements {
        s.push_str(&format!("  {:<11} {:.1}\n", format!("{}:", name), value));
    }

    match &report.recommended_size {
        Some(size) => s.push_str(&format!("\nRecommended size: {}\n", size)),
        None => s.push_str(&format!("\n{}\n", report.message)),
    }

    s
}
