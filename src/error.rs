use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The mask image could not be opened or decoded.
    Load(image::ImageError),
    /// Thresholding produced no foreground connected component.
    NoContours,
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Load(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Load(_) => write!(f, "Error loading image"),
            Error::NoContours => write!(f, "No contours found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Load(err) => Some(err),
            Error::NoContours => None,
        }
    }
}
