#![deny(missing_docs)]
//! Planar floating point image buffer and the error types shared by the imkern crates.

/// image representation for image processing purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// pixel-wise operations between images.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
