mod binary_image;
mod contour;
pub mod draw;
pub mod error;
pub mod svg;

pub use crate::binary_image::BinaryImage;
pub use crate::contour::{SIMPLIFY_PERIMETER_RATIO, largest_outline, simplify_outline};
