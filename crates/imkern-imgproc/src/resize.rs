use imkern_image::{Image, ImageSize};

use crate::interpolation::{interpolate_pixel, InterpolationMode};

/// Affine map from a destination pixel index to a source coordinate.
///
/// Pixel centers are aligned: `src = dst * scale + 0.5 * scale - 0.5` with
/// `scale = src_len / dst_len`.
#[derive(Debug, Clone, Copy)]
struct AxisMap {
    scale: f32,
    offset: f32,
}

impl AxisMap {
    fn new(src_len: usize, dst_len: usize) -> Self {
        let scale = src_len as f32 / dst_len as f32;
        Self {
            scale,
            offset: 0.5 * scale - 0.5,
        }
    }

    #[inline]
    fn map(&self, i: usize) -> f32 {
        i as f32 * self.scale + self.offset
    }
}

/// Resize an image to a new size.
///
/// Every destination pixel is mapped back to the source with pixel centers
/// aligned and sampled with the given interpolation mode. All channels are
/// resampled.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `new_size` - The size of the output image.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// A new image of size `new_size` with the channels of `src`.
///
/// # Example
///
/// ```
/// use imkern_image::{Image, ImageSize};
/// use imkern_imgproc::interpolation::InterpolationMode;
/// use imkern_imgproc::resize::resize;
///
/// let image = Image::zeros(ImageSize { width: 4, height: 5 }, 3);
///
/// let resized = resize(
///     &image,
///     ImageSize { width: 2, height: 3 },
///     InterpolationMode::Nearest,
/// );
///
/// assert_eq!(resized.num_channels(), 3);
/// assert_eq!(resized.width(), 2);
/// assert_eq!(resized.height(), 3);
/// ```
pub fn resize(src: &Image, new_size: ImageSize, interpolation: InterpolationMode) -> Image {
    log::debug!(
        "resize {} -> {} ({:?})",
        src.size(),
        new_size,
        interpolation
    );

    let channels = src.num_channels();
    let mut dst = Image::zeros(new_size, channels);

    let map_x = AxisMap::new(src.width(), new_size.width);
    let map_y = AxisMap::new(src.height(), new_size.height);

    let plane_len = new_size.width * new_size.height;
    for (k, plane) in dst
        .as_slice_mut()
        .chunks_exact_mut(plane_len.max(1))
        .enumerate()
    {
        for (idx, out) in plane.iter_mut().enumerate() {
            let x = map_x.map(idx % new_size.width);
            let y = map_y.map(idx / new_size.width);
            *out = interpolate_pixel(src, x, y, k, interpolation);
        }
    }

    dst
}

/// Resize an image with nearest neighbor sampling.
///
/// Source coordinates are rounded half away from zero.
pub fn nearest_resize(src: &Image, width: usize, height: usize) -> Image {
    resize(src, ImageSize { width, height }, InterpolationMode::Nearest)
}

/// Resize an image with bilinear sampling.
pub fn bilinear_resize(src: &Image, width: usize, height: usize) -> Image {
    resize(src, ImageSize { width, height }, InterpolationMode::Bilinear)
}
