use image::{GrayImage, Luma};
use num_traits::Zero;

/// A mask image constrained to the two values 0 (background) and 255
/// (foreground).
#[derive(Debug, Clone)]
pub struct BinaryImage {
    image: GrayImage,
}

impl BinaryImage {
    /// Binarize a grayscale image with a global threshold: any pixel with
    /// an intensity strictly greater than `threshold` becomes foreground.
    #[must_use]
    pub fn from_gray(image: &GrayImage, threshold: u8) -> Self {
        let data: Vec<u8> = image
            .pixels()
            .map(|pixel| if pixel.0[0] > threshold { 255 } else { 0 })
            .collect();
        Self::from_raw(image.width(), image.height(), &data)
    }

    /// Build a mask from a raw pixel buffer. Multi-channel buffers are
    /// compressed one pixel at a time; a pixel with any zero channel is
    /// background.
    #[must_use]
    pub fn from_raw<T>(width: u32, height: u32, buffer: &[T]) -> Self
    where
        T: Zero,
    {
        let image_size = (width * height) as usize;
        debug_assert!(
            buffer.len() >= image_size,
            "Buffer must not be smaller than image dimensions"
        );
        if image_size == 0 {
            return Self {
                image: GrayImage::new(width, height),
            };
        }
        let compress_step = buffer.len() / image_size;
        let mask: Vec<u8> = buffer
            .chunks(compress_step)
            .take(image_size)
            .map(|pixel| {
                if pixel.iter().any(Zero::is_zero) {
                    0
                } else {
                    255
                }
            })
            .collect();
        let image = GrayImage::from_raw(width, height, mask)
            .unwrap_or_else(|| GrayImage::new(width, height));
        Self { image }
    }

    #[inline]
    #[must_use]
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.image.get_pixel(x, y) != &Luma([0u8])
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// View the mask as a grayscale image (values 0 and 255 only).
    #[inline]
    #[must_use]
    pub fn as_luma8(&self) -> &GrayImage {
        &self.image
    }
}
