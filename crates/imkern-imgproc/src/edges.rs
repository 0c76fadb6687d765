use imkern_image::{Image, ImageError};

use crate::color::hsv_to_rgb_inplace;
use crate::filter::{convolve, kernels};
use crate::normalize::feature_normalize_inplace;

/// Compute the sobel gradient magnitude and direction of an image.
///
/// The horizontal and vertical sobel responses are summed over all channels,
/// so both outputs have a single channel.
///
/// # Arguments
///
/// * `src` - The input image with any number of channels.
///
/// # Returns
///
/// A pair `(magnitude, direction)` where magnitude is `sqrt(gx^2 + gy^2)` and
/// direction is `atan2(gy, gx)` in radians.
///
/// # Example
///
/// ```
/// use imkern_image::{Image, ImageSize};
/// use imkern_imgproc::edges::sobel;
///
/// let image = Image::from_size_val(ImageSize { width: 4, height: 4 }, 3, 0.5);
///
/// let (magnitude, direction) = sobel(&image).unwrap();
/// assert_eq!(magnitude.num_channels(), 1);
/// assert!(magnitude.as_slice().iter().all(|v| *v == 0.0));
/// assert_eq!(direction.size(), image.size());
/// ```
pub fn sobel(src: &Image) -> Result<(Image, Image), ImageError> {
    let gx = convolve(src, &kernels::sobel_x_kernel(), false)?;
    let gy = convolve(src, &kernels::sobel_y_kernel(), false)?;

    let mut magnitude = Image::zeros(src.size(), 1);
    let mut direction = Image::zeros(src.size(), 1);

    magnitude
        .as_slice_mut()
        .iter_mut()
        .zip(direction.as_slice_mut().iter_mut())
        .zip(gx.as_slice().iter().zip(gy.as_slice()))
        .for_each(|((mag, dir), (&gx, &gy))| {
            *mag = (gx * gx + gy * gy).sqrt();
            *dir = gy.atan2(gx);
        });

    Ok((magnitude, direction))
}

/// Render the sobel gradients of an image as a false color RGB image.
///
/// Magnitude and direction are min-max normalized independently, then used as
/// an HSV image with the direction as hue and saturation and the magnitude as
/// value, and converted to RGB. Flat regions come out black.
///
/// # Errors
///
/// Returns an error if the HSV to RGB conversion fails.
pub fn colorize_sobel(src: &Image) -> Result<Image, ImageError> {
    let (mut magnitude, mut direction) = sobel(src)?;
    feature_normalize_inplace(&mut magnitude);
    feature_normalize_inplace(&mut direction);

    let mut data = Vec::with_capacity(3 * magnitude.len());
    data.extend_from_slice(direction.as_slice());
    data.extend_from_slice(direction.as_slice());
    data.extend_from_slice(magnitude.as_slice());

    let mut dst = Image::new(src.size(), 3, data)?;
    hsv_to_rgb_inplace(&mut dst)?;

    Ok(dst)
}
