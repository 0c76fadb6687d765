use imkern_image::{Image, ImageError};

use super::{convolve, kernels};
use crate::enhance::clamp_inplace;

/// Blur an image using a box filter
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel_size` - The width and height of the box.
///
/// # Returns
///
/// A blurred image with the same channels as `src`.
pub fn box_blur(src: &Image, kernel_size: usize) -> Result<Image, ImageError> {
    let kernel = kernels::box_kernel(kernel_size)?;
    convolve(src, &kernel, true)
}

/// Blur an image using a gaussian filter
///
/// # Arguments
///
/// * `src` - The source image.
/// * `sigma` - The standard deviation of the gaussian.
///
/// # Returns
///
/// A blurred image with the same channels as `src`. The weights are positive
/// and sum to one so no clamping is needed.
pub fn gaussian_blur(src: &Image, sigma: f32) -> Result<Image, ImageError> {
    let kernel = kernels::gaussian_kernel(sigma)?;
    convolve(src, &kernel, true)
}

/// Sharpen an image, keeping its channels, and clamp the result to `[0, 1]`.
pub fn sharpen(src: &Image) -> Result<Image, ImageError> {
    let mut dst = convolve(src, &kernels::sharpen_kernel(), true)?;
    clamp_inplace(&mut dst);
    Ok(dst)
}

/// Emboss an image, keeping its channels, and clamp the result to `[0, 1]`.
pub fn emboss(src: &Image) -> Result<Image, ImageError> {
    let mut dst = convolve(src, &kernels::emboss_kernel(), true)?;
    clamp_inplace(&mut dst);
    Ok(dst)
}

/// Highpass filter an image into a single channel clamped to `[0, 1]`.
///
/// The per channel responses are summed since the kernel does not keep the
/// brightness of each channel.
pub fn highpass(src: &Image) -> Result<Image, ImageError> {
    let mut dst = convolve(src, &kernels::highpass_kernel(), false)?;
    clamp_inplace(&mut dst);
    Ok(dst)
}
