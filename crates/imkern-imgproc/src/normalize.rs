//! In-place normalization of the samples of an image.
//!
//! * [`l1_normalize_inplace`] divides every sample by the sum of all samples.
//! * [`feature_normalize_inplace`] rescales all samples to `[0, 1]` (min-max).

use imkern_image::Image;

/// Divide every sample by the sum of all samples so that they add up to one.
///
/// The sum runs over every channel. When the samples sum to zero the image is
/// set to zero instead.
///
/// # Example
///
/// ```
/// use imkern_image::{Image, ImageSize};
/// use imkern_imgproc::normalize::l1_normalize_inplace;
///
/// let mut image = Image::ones(ImageSize { width: 2, height: 2 }, 1);
/// l1_normalize_inplace(&mut image);
///
/// assert_eq!(image.as_slice(), &[0.25; 4]);
/// ```
pub fn l1_normalize_inplace(image: &mut Image) {
    let sum = image.as_slice().iter().sum::<f32>();
    if sum == 0.0 {
        image.as_slice_mut().iter_mut().for_each(|v| *v = 0.0);
        return;
    }
    image.as_slice_mut().iter_mut().for_each(|v| *v /= sum);
}

/// Rescale every sample of the image into `[0, 1]` using its global min and max.
///
/// All channels share the same min and max. A constant image has no range and
/// is set to zero instead.
pub fn feature_normalize_inplace(image: &mut Image) {
    let (min, max) = image
        .as_slice()
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });

    let range = max - min;
    if range == 0.0 {
        image.as_slice_mut().iter_mut().for_each(|v| *v = 0.0);
        return;
    }

    image
        .as_slice_mut()
        .iter_mut()
        .for_each(|v| *v = (*v - min) / range);
}
