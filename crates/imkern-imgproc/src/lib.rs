#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Operations come in two flavours. Functions taking `&Image` are pure
//! transforms that return a newly allocated image. Functions ending in
//! `_inplace` take `&mut Image` and rewrite the samples they are given.

/// color transformations module.
pub mod color;

/// edge detection module.
pub mod edges;

/// per channel intensity adjustments.
pub mod enhance;

/// image filtering module.
pub mod filter;

/// utilities for interpolation.
pub mod interpolation;

/// operations to normalize images.
pub mod normalize;

/// utility functions for resizing images.
pub mod resize;
