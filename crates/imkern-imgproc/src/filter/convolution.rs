use imkern_image::{Image, ImageError};

/// Convolve an image with a 2D kernel.
///
/// Each output sample is the weighted sum of the neighborhood centered at the
/// pixel, `kernel(i, j) * src(x - kw / 2 + i, y - kh / 2 + j)`, where samples
/// past the image border replicate the nearest edge pixel. The kernel is not
/// flipped.
///
/// A single channel kernel is applied to every image channel. A kernel with as
/// many channels as the image pairs kernel channel `k` with image channel `k`.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `kernel` - The kernel, with 1 channel or as many channels as `src`.
/// * `preserve` - Keep one output channel per input channel. When false the
///   per channel results are summed into a single channel image.
///
/// # Returns
///
/// A new image of the same size as `src`.
///
/// # Errors
///
/// Returns an error if the kernel has neither 1 channel nor as many channels as `src`.
///
/// # Example
///
/// ```
/// use imkern_image::{Image, ImageSize};
/// use imkern_imgproc::filter::{convolve, kernels};
///
/// let image = Image::from_size_val(ImageSize { width: 4, height: 3 }, 3, 0.5);
///
/// let blurred = convolve(&image, &kernels::box_kernel(3).unwrap(), true).unwrap();
/// assert_eq!(blurred.num_channels(), 3);
///
/// let summed = convolve(&image, &kernels::box_kernel(3).unwrap(), false).unwrap();
/// assert_eq!(summed.num_channels(), 1);
/// ```
pub fn convolve(src: &Image, kernel: &Image, preserve: bool) -> Result<Image, ImageError> {
    let channels = src.num_channels();
    let kernel_channels = kernel.num_channels();
    if kernel_channels != 1 && kernel_channels != channels {
        return Err(ImageError::InvalidKernelChannels(kernel_channels, channels));
    }

    log::trace!(
        "convolve {}x{}x{} with {}x{}x{} kernel, preserve: {}",
        src.width(),
        src.height(),
        channels,
        kernel.width(),
        kernel.height(),
        kernel_channels,
        preserve
    );

    let dst_channels = if preserve { channels } else { 1 };
    let mut dst = Image::zeros(src.size(), dst_channels);

    for ch in 0..channels {
        let kernel_ch = if kernel_channels == 1 { 0 } else { ch };
        let dst_ch = if preserve { ch } else { 0 };

        let dst_plane = dst.plane_mut(dst_ch)?;
        for y in 0..src.height() {
            for x in 0..src.width() {
                dst_plane[y * src.width() + x] += convolve_pixel(src, kernel, x, y, ch, kernel_ch);
            }
        }
    }

    Ok(dst)
}

/// Weighted sum of the clamped neighborhood of `(x, y)` in channel `ch`.
fn convolve_pixel(
    src: &Image,
    kernel: &Image,
    x: usize,
    y: usize,
    ch: usize,
    kernel_ch: usize,
) -> f32 {
    let (kw, kh) = (kernel.width(), kernel.height());
    let x0 = x as isize - (kw / 2) as isize;
    let y0 = y as isize - (kh / 2) as isize;

    let mut sum = 0.0;
    for j in 0..kh {
        for i in 0..kw {
            let weight = kernel.get(i as isize, j as isize, kernel_ch as isize);
            sum += weight * src.get(x0 + i as isize, y0 + j as isize, ch as isize);
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use imkern_image::{Image, ImageError, ImageSize};

    use crate::filter::kernels;

    fn image_3x3() -> Result<Image, ImageError> {
        #[rustfmt::skip]
        let image = Image::new(
            ImageSize { width: 3, height: 3 },
            1,
            vec![
                1.0, 2.0, 3.0,
                4.0, 5.0, 6.0,
                7.0, 8.0, 9.0,
            ],
        )?;
        Ok(image)
    }

    #[test]
    fn test_box_filter_clamped_border() -> Result<(), ImageError> {
        let image = image_3x3()?;
        let dst = super::convolve(&image, &kernels::box_kernel(3)?, true)?;

        assert_eq!(dst.num_channels(), 1);
        assert_relative_eq!(dst.get(1, 1, 0), 5.0, epsilon = 1e-5);
        assert_relative_eq!(
            dst.get(0, 0, 0),
            (1.0 * 4.0 + 2.0 * 2.0 + 4.0 * 2.0 + 5.0) / 9.0,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            dst.get(2, 2, 0),
            (9.0 * 4.0 + 8.0 * 2.0 + 6.0 * 2.0 + 5.0) / 9.0,
            epsilon = 1e-5
        );

        Ok(())
    }

    #[test]
    fn test_box_size_one_is_identity() -> Result<(), ImageError> {
        let data = (0..24).map(|v| v as f32 * 0.1).collect();
        let image = Image::new(ImageSize::from([4, 2]), 3, data)?;

        let dst = super::convolve(&image, &kernels::box_kernel(1)?, true)?;
        assert_eq!(dst, image);

        Ok(())
    }

    #[test]
    fn test_full_size_ones_kernel_sums() -> Result<(), ImageError> {
        let image = Image::new(ImageSize::from([1, 1]), 1, vec![3.5])?;
        let kernel = Image::ones(ImageSize::from([1, 1]), 1);

        let dst = super::convolve(&image, &kernel, false)?;
        assert_eq!(dst.as_slice(), &[3.5]);

        // a 3x3 ones kernel over the 3x3 image reads every sample once at the center
        let image = image_3x3()?;
        let kernel = Image::ones(ImageSize::from([3, 3]), 1);
        let dst = super::convolve(&image, &kernel, false)?;
        assert_eq!(dst.get(1, 1, 0), 45.0);

        Ok(())
    }

    #[test]
    fn test_collapse_channels() -> Result<(), ImageError> {
        let image = Image::new(
            ImageSize::from([2, 1]),
            3,
            vec![1.0, 2.0, 10.0, 20.0, 100.0, 200.0],
        )?;
        let identity = kernels::box_kernel(1)?;

        let dst = super::convolve(&image, &identity, false)?;
        assert_eq!(dst.num_channels(), 1);
        assert_eq!(dst.as_slice(), &[111.0, 222.0]);

        Ok(())
    }

    #[test]
    fn test_per_channel_kernel() -> Result<(), ImageError> {
        let image = Image::new(
            ImageSize::from([2, 1]),
            2,
            vec![1.0, 2.0, 10.0, 20.0],
        )?;
        // channel 0 doubles, channel 1 negates
        let kernel = Image::new(ImageSize::from([1, 1]), 2, vec![2.0, -1.0])?;

        let dst = super::convolve(&image, &kernel, true)?;
        assert_eq!(dst.as_slice(), &[2.0, 4.0, -10.0, -20.0]);

        let dst = super::convolve(&image, &kernel, false)?;
        assert_eq!(dst.as_slice(), &[-8.0, -16.0]);

        Ok(())
    }

    #[test]
    fn test_kernel_is_not_flipped() -> Result<(), ImageError> {
        let image = Image::new(ImageSize::from([3, 1]), 1, vec![0.0, 1.0, 2.0])?;
        let dst = super::convolve(&image, &kernels::sobel_x_kernel(), true)?;
        // right minus left, rows replicated vertically: (1 + 2 + 1) * 2
        assert_eq!(dst.get(1, 0, 0), 8.0);

        Ok(())
    }

    #[test]
    fn test_invalid_kernel_channels() {
        let image = Image::zeros(ImageSize::from([3, 3]), 3);
        let kernel = Image::zeros(ImageSize::from([3, 3]), 2);

        let err = super::convolve(&image, &kernel, true).unwrap_err();
        assert_eq!(err, ImageError::InvalidKernelChannels(2, 3));
        assert!(err.is_invalid_argument());
    }
}
