mod config;
mod processing;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::config::Config;
use crate::processing::Processor;

#[derive(Parser)]
#[command(name = "outline-extractor")]
#[command(about = "Extract a simplified SVG path outline from a binary mask image")]
#[command(version = "1.0")]
struct Args {
    /// Input mask image path
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generate default configuration file and exit
    #[arg(long)]
    generate_config: bool,

    /// Threshold for binarizing the mask (0-255)
    #[arg(long)]
    threshold: Option<u8>,

    /// Simplification tolerance as a fraction of the contour perimeter
    #[arg(long)]
    simplify_ratio: Option<f64>,

    /// Save a rendered overlay of the extracted outline to this path
    #[arg(long)]
    debug_outline: Option<PathBuf>,

    /// Verbose output
    #[arg(long)]
    verbose: bool,
}

fn build_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        Config::load(config_path)?
    } else {
        Config::default()
    };

    // Override config with command line arguments
    if let Some(input) = &args.input {
        config.input.mask = input.clone();
    }
    if let Some(threshold) = args.threshold {
        config.processing.threshold = threshold;
    }
    if let Some(simplify_ratio) = args.simplify_ratio {
        config.processing.simplify_ratio = simplify_ratio;
    }
    if args.debug_outline.is_some() {
        config.output.debug_outline = args.debug_outline.clone();
    }
    if args.verbose {
        config.processing.verbose = true;
    }

    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Handle config generation
    if args.generate_config {
        let config_path = args
            .config
            .unwrap_or_else(|| PathBuf::from("outline_config.json"));
        return match Config::save_default(&config_path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                ExitCode::FAILURE
            }
        };
    }

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    let processor = Processor::new(config);
    match processor.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The two pipeline failures report on stdout with their fixed
            // diagnostic strings.
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
