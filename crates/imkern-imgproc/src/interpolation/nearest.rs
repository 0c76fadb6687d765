use imkern_image::Image;

/// Kernel for nearest neighbor interpolation
///
/// The coordinates are rounded with [`f32::round`], so ties go away from zero.
///
/// # Arguments
///
/// * `image` - The input image.
/// * `x` - The x coordinate of the pixel to interpolate.
/// * `y` - The y coordinate of the pixel to interpolate.
/// * `k` - The channel of the pixel to interpolate.
///
/// # Returns
///
/// The value of the closest pixel, clamped to the image border.
pub fn nearest_interpolate(image: &Image, x: f32, y: f32, k: usize) -> f32 {
    image.get(x.round() as isize, y.round() as isize, k as isize)
}
