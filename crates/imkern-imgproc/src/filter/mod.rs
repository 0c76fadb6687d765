//! Filter operations
//!
//! This module provides kernel factories and 2D convolution.
//!
//! Kernels whose weights sum to one keep the average brightness and are meant
//! to be applied with channel preservation. Kernels that do not, like the
//! highpass kernel which sums to zero, are applied without it and the result
//! needs clamping since it can leave `[0, 1]`. The helpers in this module
//! follow that policy.

/// Filter kernels
pub mod kernels;

mod convolution;
pub use convolution::convolve;

/// Filter operations
mod ops;
pub use ops::*;
