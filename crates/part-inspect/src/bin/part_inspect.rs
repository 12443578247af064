//! `part-inspect`: inspect one part image from the command line.
//!
//! The process exit code is the inspection status (0 on success, 1-3 on an
//! inspection failure), 10 when a file could not be read or written, and 64
//! on invalid arguments.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{info, LevelFilter};
use part_inspect::{
    inspect, save_canvas, InspectConfig, InspectIoError, InspectReport, TimingsMs,
};

const EXIT_IO: u8 = 10;
const EXIT_USAGE: u8 = 64;

#[derive(Parser, Debug)]
#[command(name = "part-inspect")]
#[command(about = "Measure the outer box, round holes and slot of a part image")]
#[command(version)]
struct Cli {
    /// Input image. Required unless `--config` provides it.
    #[arg(required_unless_present = "config")]
    image: Option<PathBuf>,

    /// JSON config file; command line flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the annotated canvas here.
    #[arg(long)]
    annotated: Option<PathBuf>,

    /// Write the JSON report here.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Convert colour input to gray instead of rejecting it.
    #[arg(long)]
    force_gray: bool,

    /// Log verbosity (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Print the JSON report on stdout instead of the text summary.
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON lines.
    #[cfg(feature = "tracing")]
    #[arg(long)]
    json_logs: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    init_logging(&cli);

    match run(&cli) {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(EXIT_IO)
        }
    }
}

#[cfg(feature = "tracing")]
fn init_logging(cli: &Cli) {
    // With tracing, `RUST_LOG` takes over from `--log-level`.
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", cli.log_level.to_string().to_lowercase());
    }
    part_inspect::core::init_tracing(cli.json_logs);
}

#[cfg(not(feature = "tracing"))]
fn init_logging(cli: &Cli) {
    if let Err(err) = part_inspect::core::init_with_level(cli.log_level) {
        eprintln!("failed to install logger: {err}");
    }
}

fn resolve_config(cli: &Cli) -> Result<InspectConfig, InspectIoError> {
    let mut cfg = match &cli.config {
        Some(path) => InspectConfig::load_json(path)?,
        None => InspectConfig::default(),
    };
    if let Some(image) = &cli.image {
        cfg.image_path = image.to_string_lossy().into_owned();
    }
    if let Some(path) = &cli.annotated {
        cfg.annotated_path = Some(path.to_string_lossy().into_owned());
    }
    if let Some(path) = &cli.report {
        cfg.report_path = Some(path.to_string_lossy().into_owned());
    }
    cfg.force_grayscale |= cli.force_gray;
    Ok(cfg)
}

fn run(cli: &Cli) -> Result<u8, InspectIoError> {
    let cfg = resolve_config(cli)?;
    let t_total = Instant::now();

    let t_load = Instant::now();
    let img = cfg.load_image()?;
    let load_image_ms = t_load.elapsed().as_millis() as u64;
    info!(
        "loaded {} ({}x{}, {:?})",
        cfg.image_path,
        img.width(),
        img.height(),
        img.color()
    );

    let t_inspect = Instant::now();
    let outcome = inspect(&img);
    let inspect_ms = t_inspect.elapsed().as_millis() as u64;

    let timings = TimingsMs {
        load_image: load_image_ms,
        inspect: inspect_ms,
        total: 0,
    };
    let mut report = InspectReport::new(&cfg, &img, timings);

    let outcome = match outcome {
        Ok(inspection) => {
            if let Some(path) = cfg.annotated_path() {
                save_canvas(&inspection.canvas, &path)?;
                info!("wrote annotated image to {}", path.display());
            }
            Ok(inspection.results)
        }
        Err(err) => Err(err),
    };
    report.set_outcome(&outcome);
    report.timings_ms.total = t_total.elapsed().as_millis() as u64;

    if let Some(path) = cfg.report_path() {
        report.write_json(&path)?;
        info!("wrote report JSON to {}", path.display());
    }

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        match &outcome {
            Ok(results) => print!("{results}"),
            Err(err) => eprintln!("inspection failed (status {}): {err}", err.code()),
        }
    }

    Ok(report.status_code as u8)
}
