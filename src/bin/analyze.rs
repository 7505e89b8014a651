use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use cmyk_strip_analyzer::chart::ChartLayout;
use cmyk_strip_analyzer::intensity::ChannelMode;
use cmyk_strip_analyzer::session::{AnalysisSettings, DEFAULT_CHART_PATH, DEFAULT_SLICES};
use cmyk_strip_analyzer::{AnalysisOutcome, run_analysis};

#[derive(Parser, Debug)]
#[command(
    name = "cmyk_analyze",
    about = "Slice an image into vertical strips, report per-strip channel intensity, and render a PDF strip chart",
    version
)]
struct Cli {
    /// Input image (png/jpg/bmp/tiff/...)
    input: PathBuf,

    /// Number of vertical slices
    #[arg(short = 'n', long = "slices", default_value_t = DEFAULT_SLICES)]
    slices: u32,

    /// Chart page width in millimeters
    #[arg(long = "canvas-width-mm", default_value_t = 1410.0)]
    canvas_width_mm: f64,

    /// Chart page height in millimeters
    #[arg(long = "canvas-height-mm", default_value_t = 100.0)]
    canvas_height_mm: f64,

    /// Chart output path
    #[arg(long = "chart", default_value = DEFAULT_CHART_PATH)]
    chart: PathBuf,

    /// TTF font for on-image labels (embedded DejaVu Sans Mono when omitted)
    #[arg(long = "font")]
    font: Option<PathBuf>,

    /// Convert mean colors to true CMYK instead of raw RGBA channel averages
    #[arg(long = "cmyk")]
    cmyk: bool,

    /// Also write a JSON sidecar next to the text report
    #[arg(long = "json")]
    json: bool,
}

fn run(cli: Cli) -> Result<AnalysisOutcome, Box<dyn Error>> {
    let settings = AnalysisSettings {
        input: Some(cli.input),
        num_slices: cli.slices,
        channel_mode: if cli.cmyk {
            ChannelMode::Cmyk
        } else {
            ChannelMode::Raw
        },
        chart_layout: ChartLayout {
            width_mm: cli.canvas_width_mm,
            height_mm: cli.canvas_height_mm,
            ..ChartLayout::default()
        },
        chart_path: cli.chart,
        font_path: cli.font,
        json_report: cli.json,
    };

    Ok(run_analysis(&settings)?)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(outcome) => {
            println!("Annotated image: {}", outcome.annotated_image.display());
            println!("Report:          {}", outcome.report.display());
            if let Some(json) = &outcome.json_report {
                println!("JSON report:     {}", json.display());
            }
            println!("Chart:           {}", outcome.chart.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Analysis failed: {e}");
            ExitCode::FAILURE
        }
    }
}
