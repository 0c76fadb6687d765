use super::bilinear::bilinear_interpolate;
use super::nearest::nearest_interpolate;
use imkern_image::Image;

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image.
/// * `x` - The x coordinate of the pixel to interpolate.
/// * `y` - The y coordinate of the pixel to interpolate.
/// * `k` - The channel of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated pixel value.
pub fn interpolate_pixel(
    image: &Image,
    x: f32,
    y: f32,
    k: usize,
    interpolation: InterpolationMode,
) -> f32 {
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolate(image, x, y, k),
        InterpolationMode::Nearest => nearest_interpolate(image, x, y, k),
    }
}
