use geo::Polygon;

use masktrace::draw::DrawOutline;
use masktrace::error::Error;
use masktrace::{BinaryImage, largest_outline, simplify_outline, svg};

use crate::config::Config;

pub(crate) struct Processor {
    config: Config,
}

impl Processor {
    pub(crate) fn new(config: Config) -> Self {
        Processor { config }
    }

    /// Run the extraction pipeline once: load, binarize, trace, select the
    /// largest outline, simplify, and print the report.
    pub(crate) fn run(&self) -> Result<(), Error> {
        let verbose = self.config.processing.verbose;
        let input = &self.config.input.mask;

        if verbose {
            println!("Loading mask from: {}", input.display());
        }
        let gray = image::open(input).map_err(Error::Load)?.to_luma8();
        let (width, height) = gray.dimensions();

        let binary = BinaryImage::from_gray(&gray, self.config.processing.threshold);
        let outlines: Vec<Polygon> = binary.trace_outlines();
        if verbose {
            println!("Found {} outer contours", outlines.len());
        }

        let outline = largest_outline(outlines).ok_or(Error::NoContours)?;
        let simplified = simplify_outline(&outline, self.config.processing.simplify_ratio);

        if let Some(overlay_path) = &self.config.output.debug_outline {
            let overlay = simplified.draw(width, height);
            if let Err(err) = overlay.save(overlay_path) {
                eprintln!(
                    "Failed to save outline overlay {}: {}",
                    overlay_path.display(),
                    err
                );
            } else if verbose {
                println!("Saved outline overlay to: {}", overlay_path.display());
            }
        }

        println!("Image Size: {}x{}", width, height);
        println!("Path Tokens: {}", svg::point_count(&simplified));
        println!("{}", svg::path_data(&simplified));

        Ok(())
    }
}
