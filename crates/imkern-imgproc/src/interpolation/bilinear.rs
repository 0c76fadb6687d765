use imkern_image::Image;

/// Kernel for bilinear interpolation
///
/// The four pixels around `(x, y)` are blended first vertically with weights
/// `(1 - frac_y, frac_y)` and then horizontally with `(1 - frac_x, frac_x)`.
/// On an integral coordinate both corners coincide and the blend reduces to a
/// plain read.
///
/// # Arguments
///
/// * `image` - The input image.
/// * `x` - The x coordinate of the pixel to interpolate.
/// * `y` - The y coordinate of the pixel to interpolate.
/// * `k` - The channel of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel value.
pub fn bilinear_interpolate(image: &Image, x: f32, y: f32, k: usize) -> f32 {
    let (x1, x2) = (x.floor(), x.ceil());
    let (y1, y2) = (y.floor(), y.ceil());

    let frac_x = x - x1;
    let frac_y = y - y1;

    let k = k as isize;
    let (x1, x2) = (x1 as isize, x2 as isize);
    let (y1, y2) = (y1 as isize, y2 as isize);

    let q1 = image.get(x1, y1, k) * (1.0 - frac_y) + image.get(x1, y2, k) * frac_y;
    let q2 = image.get(x2, y1, k) * (1.0 - frac_y) + image.get(x2, y2, k) * frac_y;

    q1 * (1.0 - frac_x) + q2 * frac_x
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use imkern_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_bilinear() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::new(
            ImageSize { width: 2, height: 2 },
            1,
            vec![
                0.0, 1.0,
                2.0, 3.0,
            ],
        )?;

        assert_eq!(super::bilinear_interpolate(&image, 0.0, 0.0, 0), 0.0);
        assert_eq!(super::bilinear_interpolate(&image, 1.0, 1.0, 0), 3.0);
        assert_relative_eq!(super::bilinear_interpolate(&image, 0.5, 0.5, 0), 1.5);
        assert_relative_eq!(super::bilinear_interpolate(&image, 0.25, 0.0, 0), 0.25);
        assert_relative_eq!(super::bilinear_interpolate(&image, 0.0, 0.75, 0), 1.5);

        Ok(())
    }

    #[test]
    fn test_bilinear_border() -> Result<(), ImageError> {
        let image = Image::new(ImageSize::from([2, 1]), 1, vec![4.0, 8.0])?;

        assert_eq!(super::bilinear_interpolate(&image, -0.5, 0.0, 0), 4.0);
        assert_eq!(super::bilinear_interpolate(&image, 1.25, 0.0, 0), 8.0);
        assert_relative_eq!(super::bilinear_interpolate(&image, 0.5, -2.0, 0), 6.0);

        Ok(())
    }
}
