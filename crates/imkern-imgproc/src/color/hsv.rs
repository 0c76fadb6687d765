use imkern_image::{Image, ImageError};

fn split_planes(image: &mut Image) -> (&mut [f32], &mut [f32], &mut [f32]) {
    let stride = image.width() * image.height();
    let (c0, rest) = image.as_slice_mut().split_at_mut(stride);
    let (c1, c2) = rest.split_at_mut(stride);
    (c0, c1, c2)
}

/// Convert an RGB image to HSV in place.
///
/// The hue is stored as a fraction of a full turn in `[0, 1)`, saturation and
/// value keep the scale of the input. Inputs are not clamped beforehand, so a
/// value above one stays above one.
///
/// # Arguments
///
/// * `image` - The RGB image, rewritten as H, S, V planes.
///
/// # Errors
///
/// Returns an error if the image does not have 3 channels.
///
/// # Example
///
/// ```
/// use imkern_image::{Image, ImageSize};
/// use imkern_imgproc::color::rgb_to_hsv_inplace;
///
/// let mut image = Image::new(ImageSize { width: 1, height: 1 }, 3, vec![1.0, 0.0, 0.0]).unwrap();
/// rgb_to_hsv_inplace(&mut image).unwrap();
///
/// assert_eq!(image.as_slice(), &[0.0, 1.0, 1.0]);
/// ```
pub fn rgb_to_hsv_inplace(image: &mut Image) -> Result<(), ImageError> {
    super::check_rgb(image)?;

    let (c0, c1, c2) = split_planes(image);
    for ((p0, p1), p2) in c0.iter_mut().zip(c1.iter_mut()).zip(c2.iter_mut()) {
        let (h, s, v) = hsv_from_rgb_pixel(*p0, *p1, *p2);
        *p0 = h;
        *p1 = s;
        *p2 = v;
    }

    Ok(())
}

/// Convert an HSV image back to RGB in place.
///
/// Hues outside `[0, 1)` are wrapped around the color wheel first.
///
/// # Errors
///
/// Returns an error if the image does not have 3 channels, or
/// [`ImageError::InternalInvariant`] if a hue cannot be mapped to a sector of
/// the color wheel (a NaN or infinite hue). In the latter case the pixels
/// before the failing one are already converted.
pub fn hsv_to_rgb_inplace(image: &mut Image) -> Result<(), ImageError> {
    super::check_rgb(image)?;

    let (c0, c1, c2) = split_planes(image);
    for ((p0, p1), p2) in c0.iter_mut().zip(c1.iter_mut()).zip(c2.iter_mut()) {
        let (r, g, b) = rgb_from_hsv_pixel(*p0, *p1, *p2)?;
        *p0 = r;
        *p1 = g;
        *p2 = b;
    }

    Ok(())
}

fn hsv_from_rgb_pixel(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let value = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = value - min;

    let saturation = if value > 0.0 { chroma / value } else { 0.0 };

    // blue wins ties over green, green over red
    let h = if chroma == 0.0 {
        0.0
    } else if value == b {
        (r - g) / chroma + 4.0
    } else if value == g {
        (b - r) / chroma + 2.0
    } else {
        (g - b) / chroma
    };

    // negative sectors wrap around; tiny ones round up to a full turn
    let hue = wrap_hue(h / 6.0);

    (hue, saturation, value)
}

fn wrap_hue(h: f32) -> f32 {
    let w = h - h.floor();
    // -tiny wraps to exactly 1.0 in f32
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}

fn rgb_from_hsv_pixel(h: f32, s: f32, v: f32) -> Result<(f32, f32, f32), ImageError> {
    let h = wrap_hue(h) * 360.0;

    let c = s * v;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else if h < 360.0 {
        (c, 0.0, x)
    } else {
        log::error!("hue overflow: {h} degrees");
        return Err(ImageError::InternalInvariant(format!(
            "hue {h} is outside of [0, 360) degrees"
        )));
    };

    Ok((r + m, g + m, b + m))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use imkern_image::{Image, ImageError, ImageSize};

    fn pixel(r: f32, g: f32, b: f32) -> Result<Image, ImageError> {
        Image::new(ImageSize::from([1, 1]), 3, vec![r, g, b])
    }

    #[test]
    fn hsv_primaries() -> Result<(), ImageError> {
        let cases = [
            ([1.0, 0.0, 0.0], [0.0, 1.0, 1.0]),
            ([1.0, 1.0, 1.0], [0.0, 0.0, 1.0]),
            ([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            ([0.0, 1.0, 0.0], [1.0 / 3.0, 1.0, 1.0]),
            ([0.0, 0.0, 0.5], [2.0 / 3.0, 1.0, 0.5]),
            ([1.0, 0.0, 1.0], [5.0 / 6.0, 1.0, 1.0]),
        ];

        for (rgb, hsv) in cases {
            let mut image = pixel(rgb[0], rgb[1], rgb[2])?;
            super::rgb_to_hsv_inplace(&mut image)?;
            for (a, b) in image.as_slice().iter().zip(hsv.iter()) {
                assert_abs_diff_eq!(*a, *b, epsilon = 1e-6);
            }
        }

        Ok(())
    }

    #[test]
    fn hsv_negative_hue_wraps() -> Result<(), ImageError> {
        // max is red, g < b gives a negative sector offset
        let mut image = pixel(1.0, 0.0, 0.5)?;
        super::rgb_to_hsv_inplace(&mut image)?;
        assert_abs_diff_eq!(image.get(0, 0, 0), 1.0 - 0.5 / 6.0, epsilon = 1e-6);

        Ok(())
    }

    #[test]
    fn hsv_hue_stays_below_full_turn() -> Result<(), ImageError> {
        let mut image = pixel(1.0, 0.0, 1e-7)?;
        super::rgb_to_hsv_inplace(&mut image)?;

        let hue = image.get(0, 0, 0);
        assert!((0.0..1.0).contains(&hue), "hue {hue} outside [0, 1)");
        assert_abs_diff_eq!(hue, 0.0, epsilon = 1e-6);

        Ok(())
    }

    #[test]
    fn hsv_headroom_not_clamped() -> Result<(), ImageError> {
        let mut image = pixel(2.0, 1.0, 1.0)?;
        super::rgb_to_hsv_inplace(&mut image)?;
        assert_abs_diff_eq!(image.get(0, 0, 2), 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(image.get(0, 0, 1), 0.5, epsilon = 1e-6);

        super::hsv_to_rgb_inplace(&mut image)?;
        assert_abs_diff_eq!(image.get(0, 0, 0), 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(image.get(0, 0, 1), 1.0, epsilon = 1e-6);

        Ok(())
    }

    #[test]
    fn hsv_round_trip() -> Result<(), ImageError> {
        let data = vec![
            0.1, 0.9, 0.5, 0.3, 0.7, 0.2, //
            0.8, 0.2, 0.5, 0.6, 0.1, 0.9, //
            0.3, 0.4, 0.1, 0.95, 0.6, 0.05,
        ];
        let original = Image::new(ImageSize::from([3, 2]), 3, data)?;

        let mut image = original.clone();
        super::rgb_to_hsv_inplace(&mut image)?;
        super::hsv_to_rgb_inplace(&mut image)?;

        for (a, b) in image.as_slice().iter().zip(original.as_slice()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-5);
        }

        Ok(())
    }

    #[test]
    fn rgb_full_turn_hue_is_red() -> Result<(), ImageError> {
        let mut image = pixel(1.0, 1.0, 1.0)?;
        super::hsv_to_rgb_inplace(&mut image)?;
        assert_abs_diff_eq!(image.get(0, 0, 0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(image.get(0, 0, 1), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(image.get(0, 0, 2), 0.0, epsilon = 1e-6);

        let mut image = pixel(-0.5, 1.0, 1.0)?;
        super::hsv_to_rgb_inplace(&mut image)?;
        // -0.5 turns is cyan
        assert_abs_diff_eq!(image.get(0, 0, 0), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(image.get(0, 0, 1), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(image.get(0, 0, 2), 1.0, epsilon = 1e-6);

        Ok(())
    }

    #[test]
    fn rgb_nan_hue_is_internal_error() -> Result<(), ImageError> {
        let mut image = pixel(f32::NAN, 1.0, 1.0)?;
        let err = super::hsv_to_rgb_inplace(&mut image).unwrap_err();
        assert!(matches!(err, ImageError::InternalInvariant(_)));
        assert!(!err.is_invalid_argument());

        Ok(())
    }

    #[test]
    fn hsv_wrong_channels() {
        let mut image = Image::zeros(ImageSize::from([2, 2]), 4);
        assert_eq!(
            super::rgb_to_hsv_inplace(&mut image),
            Err(ImageError::InvalidChannelCount(3, 4))
        );
        assert!(super::hsv_to_rgb_inplace(&mut image).is_err());
    }
}
