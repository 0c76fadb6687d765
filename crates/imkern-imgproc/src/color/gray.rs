use imkern_image::{Image, ImageError};

/// Define the RGB weights for the grayscale conversion.
const RW: f32 = 0.299;
const GW: f32 = 0.587;
const BW: f32 = 0.114;

/// Convert an RGB image to grayscale using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// # Arguments
///
/// * `src` - The input RGB image.
///
/// # Returns
///
/// A new single channel image of the same size.
///
/// # Errors
///
/// Returns an error if the input image does not have 3 channels.
///
/// # Example
///
/// ```
/// use imkern_image::{Image, ImageSize};
/// use imkern_imgproc::color::rgb_to_grayscale;
///
/// let image = Image::zeros(ImageSize { width: 4, height: 5 }, 3);
///
/// let gray = rgb_to_grayscale(&image).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// assert_eq!(gray.width(), 4);
/// assert_eq!(gray.height(), 5);
/// ```
pub fn rgb_to_grayscale(src: &Image) -> Result<Image, ImageError> {
    super::check_rgb(src)?;

    let (r, g, b) = (src.plane(0)?, src.plane(1)?, src.plane(2)?);
    let data = r
        .iter()
        .zip(g)
        .zip(b)
        .map(|((&r, &g), &b)| RW * r + GW * g + BW * b)
        .collect();

    Image::new(src.size(), 1, data)
}
