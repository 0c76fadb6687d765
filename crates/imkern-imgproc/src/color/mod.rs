mod gray;
mod hsv;

pub use gray::rgb_to_grayscale;
pub use hsv::{hsv_to_rgb_inplace, rgb_to_hsv_inplace};

use imkern_image::{Image, ImageError};

pub(crate) fn check_rgb(image: &Image) -> Result<(), ImageError> {
    if image.num_channels() != 3 {
        return Err(ImageError::InvalidChannelCount(3, image.num_channels()));
    }
    Ok(())
}
