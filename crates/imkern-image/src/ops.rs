use crate::{Image, ImageError};

fn check_same_shape(a: &Image, b: &Image) -> Result<(), ImageError> {
    if a.size() != b.size() || a.num_channels() != b.num_channels() {
        return Err(ImageError::InvalidImageSize(
            a.width(),
            a.height(),
            a.num_channels(),
            b.width(),
            b.height(),
            b.num_channels(),
        ));
    }
    Ok(())
}

/// Add two images sample by sample.
///
/// # Arguments
///
/// * `a` - The first image.
/// * `b` - The second image.
///
/// # Returns
///
/// A new image with `a + b`.
///
/// # Errors
///
/// Returns an error if the images differ in width, height or channels.
///
/// # Example
///
/// ```
/// use imkern_image::{Image, ImageSize};
/// use imkern_image::ops::add;
///
/// let a = Image::new(ImageSize { width: 2, height: 1 }, 1, vec![1.0, 2.0]).unwrap();
/// let b = Image::new(ImageSize { width: 2, height: 1 }, 1, vec![0.5, 0.5]).unwrap();
///
/// let sum = add(&a, &b).unwrap();
/// assert_eq!(sum.as_slice(), &[1.5, 2.5]);
/// ```
pub fn add(a: &Image, b: &Image) -> Result<Image, ImageError> {
    check_same_shape(a, b)?;
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| x + y)
        .collect();
    Image::new(a.size(), a.num_channels(), data)
}

/// Subtract `b` from `a` sample by sample.
///
/// # Errors
///
/// Returns an error if the images differ in width, height or channels.
pub fn sub(a: &Image, b: &Image) -> Result<Image, ImageError> {
    check_same_shape(a, b)?;
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| x - y)
        .collect();
    Image::new(a.size(), a.num_channels(), data)
}

/// Log the shape of an image and its leading samples at `info` level.
pub fn image_info(image: &Image) {
    let head = &image.as_slice()[..image.len().min(10)];
    log::info!(
        "image size: {}x{}x{}, first {} samples: {:?}",
        image.width(),
        image.height(),
        image.num_channels(),
        head.len(),
        head
    );
}
