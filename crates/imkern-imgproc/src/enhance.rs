use imkern_image::{Image, ImageError};

/// Add `delta` to every sample of one channel.
///
/// # Arguments
///
/// * `image` - The image to modify.
/// * `channel` - The channel index to shift.
/// * `delta` - The value added to each sample.
///
/// # Errors
///
/// Returns an error if the channel index is out of bounds.
///
/// # Example
///
/// ```
/// use imkern_image::{Image, ImageSize};
/// use imkern_imgproc::enhance::shift_inplace;
///
/// let mut image = Image::zeros(ImageSize { width: 2, height: 2 }, 3);
/// shift_inplace(&mut image, 1, 0.4).unwrap();
///
/// assert_eq!(image.get(0, 0, 0), 0.0);
/// assert_eq!(image.get(1, 1, 1), 0.4);
/// ```
pub fn shift_inplace(image: &mut Image, channel: usize, delta: f32) -> Result<(), ImageError> {
    image
        .plane_mut(channel)?
        .iter_mut()
        .for_each(|v| *v += delta);
    Ok(())
}

/// Multiply every sample of one channel by `factor`.
///
/// # Errors
///
/// Returns an error if the channel index is out of bounds.
pub fn scale_inplace(image: &mut Image, channel: usize, factor: f32) -> Result<(), ImageError> {
    image
        .plane_mut(channel)?
        .iter_mut()
        .for_each(|v| *v *= factor);
    Ok(())
}

/// Clamp every sample of the image into `[0, 1]`.
pub fn clamp_inplace(image: &mut Image) {
    image
        .as_slice_mut()
        .iter_mut()
        .for_each(|v| *v = v.clamp(0.0, 1.0));
}
