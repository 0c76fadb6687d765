/// An error type for the image processing crates.
///
/// All variants but [`ImageError::InternalInvariant`] describe a broken
/// caller contract; see [`ImageError::is_invalid_argument`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two images that must agree in shape do not.
    #[error("Image size mismatch: {0}x{1}x{2} vs {3}x{4}x{5}")]
    InvalidImageSize(usize, usize, usize, usize, usize, usize),

    /// Error when the image does not have the required number of channels.
    #[error("Invalid number of channels: expected {0}, got {1}")]
    InvalidChannelCount(usize, usize),

    /// Error when the kernel channels neither equal 1 nor the image channels.
    #[error("Kernel has {0} channels, expected 1 or {1}")]
    InvalidKernelChannels(usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a kernel is requested with an unusable size.
    #[error("Invalid kernel size {0}")]
    InvalidKernelSize(usize),

    /// Error when a gaussian kernel is requested with an unusable sigma.
    #[error("Invalid sigma {0}, expected a finite positive value")]
    InvalidSigma(f32),

    /// Error when an internal invariant of an algorithm does not hold.
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),
}

impl ImageError {
    /// Returns true when the error is caused by the arguments given by the caller.
    ///
    /// Internal invariant failures return false.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, ImageError::InternalInvariant(_))
    }
}
