//! Small image processing kernels on planar `f32` buffers.
//!
//! ```
//! use imkern::image::{Image, ImageSize};
//! use imkern::imgproc::filter::{convolve, kernels};
//!
//! let image = Image::from_size_val(ImageSize { width: 4, height: 4 }, 3, 0.5);
//! let blurred = convolve(&image, &kernels::box_kernel(3).unwrap(), true).unwrap();
//!
//! assert_eq!(blurred.num_channels(), 3);
//! ```

#[doc(inline)]
pub use imkern_image as image;

#[doc(inline)]
pub use imkern_imgproc as imgproc;
