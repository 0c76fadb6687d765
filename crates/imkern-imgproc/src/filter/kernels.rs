use imkern_image::{Image, ImageError, ImageSize};

use crate::normalize::l1_normalize_inplace;

fn kernel3(values: [f32; 9]) -> Image {
    let mut kernel = Image::zeros(
        ImageSize {
            width: 3,
            height: 3,
        },
        1,
    );
    kernel.as_slice_mut().copy_from_slice(&values);
    kernel
}

/// Create a box blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The width and height of the kernel.
///
/// # Returns
///
/// A single channel `kernel_size x kernel_size` kernel whose weights sum to one.
///
/// # Errors
///
/// Returns an error if `kernel_size` is zero.
pub fn box_kernel(kernel_size: usize) -> Result<Image, ImageError> {
    if kernel_size == 0 {
        return Err(ImageError::InvalidKernelSize(kernel_size));
    }

    let mut kernel = Image::ones(
        ImageSize {
            width: kernel_size,
            height: kernel_size,
        },
        1,
    );
    l1_normalize_inplace(&mut kernel);
    Ok(kernel)
}

/// Create a gaussian blur kernel.
///
/// The kernel side is the smallest odd integer not below `6 * sigma`, which
/// covers about three sigmas on each side of the center.
///
/// # Arguments
///
/// * `sigma` - The standard deviation of the gaussian.
///
/// # Returns
///
/// A single channel square kernel whose weights sum to one.
///
/// # Errors
///
/// Returns an error if `sigma` is not a finite positive number, or so large
/// that the kernel cannot be addressed.
///
/// # Example
///
/// ```
/// use imkern_imgproc::filter::kernels::gaussian_kernel;
///
/// let kernel = gaussian_kernel(1.0).unwrap();
/// assert_eq!(kernel.width(), 7);
/// assert_eq!(kernel.height(), 7);
/// ```
pub fn gaussian_kernel(sigma: f32) -> Result<Image, ImageError> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ImageError::InvalidSigma(sigma));
    }

    let six_sigma = (6.0 * sigma).ceil() as usize;
    let kernel_size = if six_sigma % 2 == 1 {
        six_sigma
    } else {
        six_sigma.checked_add(1).ok_or(ImageError::InvalidSigma(sigma))?
    };
    if kernel_size.checked_mul(kernel_size).is_none() {
        return Err(ImageError::InvalidSigma(sigma));
    }

    let sigma_sq = sigma * sigma;
    let multiplier = 1.0 / (2.0 * std::f32::consts::PI * sigma_sq);
    let center = (kernel_size / 2) as f32;

    let mut kernel = Image::zeros(
        ImageSize {
            width: kernel_size,
            height: kernel_size,
        },
        1,
    );

    // compute the kernel
    for (idx, v) in kernel.as_slice_mut().iter_mut().enumerate() {
        let x = (idx % kernel_size) as f32 - center;
        let y = (idx / kernel_size) as f32 - center;
        *v = multiplier * (-(x * x + y * y) / (2.0 * sigma_sq)).exp();
    }

    l1_normalize_inplace(&mut kernel);
    Ok(kernel)
}

/// Create a 3x3 highpass (laplacian) kernel.
///
/// ```text
///  0 -1  0
/// -1  4 -1
///  0 -1  0
/// ```
///
/// The weights sum to zero: convolve without channel preservation and clamp.
pub fn highpass_kernel() -> Image {
    kernel3([0.0, -1.0, 0.0, -1.0, 4.0, -1.0, 0.0, -1.0, 0.0])
}

/// Create a 3x3 sharpen kernel.
///
/// ```text
///  0 -1  0
/// -1  5 -1
///  0 -1  0
/// ```
pub fn sharpen_kernel() -> Image {
    kernel3([0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0])
}

/// Create a 3x3 diagonal emboss kernel.
///
/// ```text
/// -2 -1  0
/// -1  1  1
///  0  1  2
/// ```
pub fn emboss_kernel() -> Image {
    kernel3([-2.0, -1.0, 0.0, -1.0, 1.0, 1.0, 0.0, 1.0, 2.0])
}

/// Create a 3x3 vertical emboss kernel.
///
/// ```text
/// 0  1  0
/// 0  1  0
/// 0 -1  0
/// ```
pub fn vertical_emboss_kernel() -> Image {
    kernel3([0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, -1.0, 0.0])
}

/// Create a 3x3 horizontal emboss kernel.
///
/// ```text
///  0  0  0
/// -1  1  1
///  0  0  0
/// ```
pub fn horizontal_emboss_kernel() -> Image {
    kernel3([0.0, 0.0, 0.0, -1.0, 1.0, 1.0, 0.0, 0.0, 0.0])
}

/// Create the 3x3 sobel kernel for the horizontal gradient.
///
/// ```text
/// -1  0  1
/// -2  0  2
/// -1  0  1
/// ```
pub fn sobel_x_kernel() -> Image {
    kernel3([-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0])
}

/// Create the 3x3 sobel kernel for the vertical gradient.
///
/// ```text
/// -1 -2 -1
///  0  0  0
///  1  2  1
/// ```
pub fn sobel_y_kernel() -> Image {
    kernel3([-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0])
}
