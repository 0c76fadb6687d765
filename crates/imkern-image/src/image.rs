use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use imkern_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with planar `f32` pixel data.
///
/// The samples are stored channel by channel: the sample at column `x`, row `y`
/// and channel `k` lives at `x + width * y + width * height * k`.
///
/// Cloning an image produces an independent copy of its buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    size: ImageSize,
    channels: usize,
    data: Vec<f32>,
}

impl Image {
    /// Create a new image from planar pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `channels` - The number of channels.
    /// * `data` - The pixel data of the image, channel-major.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use imkern_image::{Image, ImageSize};
    ///
    /// let image = Image::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     3,
    ///     vec![0f32; 10 * 20 * 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.width(), 10);
    /// assert_eq!(image.height(), 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, channels: usize, data: Vec<f32>) -> Result<Self, ImageError> {
        let expected = size.width * size.height * channels;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self {
            size,
            channels,
            data,
        })
    }

    /// Create a new image with every sample set to `val`.
    pub fn from_size_val(size: ImageSize, channels: usize, val: f32) -> Self {
        Self {
            size,
            channels,
            data: vec![val; size.width * size.height * channels],
        }
    }

    /// Create a new image filled with zeros.
    pub fn zeros(size: ImageSize, channels: usize) -> Self {
        Self::from_size_val(size, channels, 0.0)
    }

    /// Create a new image filled with ones.
    pub fn ones(size: ImageSize, channels: usize) -> Self {
        Self::from_size_val(size, channels, 1.0)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        self.channels
    }

    /// Total number of samples, `width * height * channels`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the image holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the pixel data of the image.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Get the mutable pixel data of the image.
    pub fn as_slice_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the image and return its pixel data.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Get the samples of one channel plane.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn plane(&self, channel: usize) -> Result<&[f32], ImageError> {
        if channel >= self.channels {
            return Err(ImageError::ChannelIndexOutOfBounds(channel, self.channels));
        }
        let stride = self.width() * self.height();
        Ok(&self.data[channel * stride..(channel + 1) * stride])
    }

    /// Get the mutable samples of one channel plane.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn plane_mut(&mut self, channel: usize) -> Result<&mut [f32], ImageError> {
        if channel >= self.channels {
            return Err(ImageError::ChannelIndexOutOfBounds(channel, self.channels));
        }
        let stride = self.width() * self.height();
        Ok(&mut self.data[channel * stride..(channel + 1) * stride])
    }

    /// Get a channel of the image as a new single channel image.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn channel(&self, channel: usize) -> Result<Image, ImageError> {
        let plane = self.plane(channel)?;
        Image::new(self.size, 1, plane.to_vec())
    }

    /// Read a sample with clamp-to-edge addressing.
    ///
    /// Out of range coordinates and channel indices are clamped to the nearest
    /// valid one, so any `(x, y, k)` is accepted. An empty image reads as `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use imkern_image::{Image, ImageSize};
    ///
    /// let image = Image::new(ImageSize { width: 2, height: 1 }, 1, vec![1.0, 2.0]).unwrap();
    ///
    /// assert_eq!(image.get(-5, 0, 0), 1.0);
    /// assert_eq!(image.get(7, 3, 2), 2.0);
    /// ```
    pub fn get(&self, x: isize, y: isize, k: isize) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        let x = clamp_index(x, self.width());
        let y = clamp_index(y, self.height());
        let k = clamp_index(k, self.channels);
        self.data[self.offset(x, y, k)]
    }

    /// Write a sample if `(x, y, k)` lies inside the image.
    ///
    /// Writes outside `[0, width) x [0, height) x [0, channels)` are ignored.
    pub fn set(&mut self, x: isize, y: isize, k: isize, val: f32) {
        if x < 0 || y < 0 || k < 0 {
            return;
        }
        let (x, y, k) = (x as usize, y as usize, k as usize);
        if x >= self.width() || y >= self.height() || k >= self.channels {
            return;
        }
        let idx = self.offset(x, y, k);
        self.data[idx] = val;
    }

    /// Load the first channel plane from a row-major slice.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` does not hold exactly `width * height` samples,
    /// or if the image has no channel to fill.
    pub fn fill_from(&mut self, values: &[f32]) -> Result<(), ImageError> {
        if self.channels == 0 {
            return Err(ImageError::InvalidChannelCount(1, 0));
        }
        let expected = self.width() * self.height();
        if values.len() != expected {
            return Err(ImageError::InvalidChannelShape(values.len(), expected));
        }
        self.data[..expected].copy_from_slice(values);
        Ok(())
    }

    /// Copy the image into a new `width x height` image anchored at the top left.
    ///
    /// Samples beyond the source borders replicate the nearest edge pixel, so
    /// the copy is a crop when smaller and an edge padded image when larger.
    pub fn copy_region(&self, width: usize, height: usize) -> Image {
        let mut dst = Image::zeros(ImageSize { width, height }, self.channels);
        if self.data.is_empty() {
            return dst;
        }
        for k in 0..self.channels {
            for y in 0..height {
                for x in 0..width {
                    let v = self.get(x as isize, y as isize, k as isize);
                    let idx = dst.offset(x, y, k);
                    dst.data[idx] = v;
                }
            }
        }
        dst
    }

    #[inline]
    fn offset(&self, x: usize, y: usize, k: usize) -> usize {
        x + self.width() * y + self.width() * self.height() * k
    }
}

#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    if i < 0 {
        0
    } else {
        (i as usize).min(len - 1)
    }
}
