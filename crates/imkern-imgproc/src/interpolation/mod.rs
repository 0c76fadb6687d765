//! Pixel interpolation methods for image resampling.
//!
//! Coordinates are continuous pixel positions where the integer `(x, y)` is
//! the center of pixel `(x, y)`. Samples outside the image replicate the
//! nearest edge pixel.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: uses the value of the closest pixel (no interpolation)
//! - **Bilinear**: linear blend of the four surrounding pixels

mod bilinear;
mod interpolate;
mod nearest;

pub use bilinear::bilinear_interpolate;
pub use interpolate::{interpolate_pixel, InterpolationMode};
pub use nearest::nearest_interpolate;
