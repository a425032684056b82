/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convolution kernels
//!
//! A [`Filter`] is an odd sided square grid of real weights applied
//! independently per channel. The weighted sum accumulates in `f64`,
//! negative results clamp to zero, results above the channel maximum
//! clamp to it and anything in between truncates toward zero.
use crate::errors::ImageErrors;

/// 3x3 Gaussian approximation used by the `blur` command
const BLUR_KERNEL: [f64; 9] = [
    1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
    1.0 / 8.0,  1.0 / 4.0, 1.0 / 8.0,
    1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0
];

/// 5x5 kernel used by the `sharpen` command, the outer ring pulls
/// samples down, the inner ring and center push the pixel's own
/// neighborhood up
const SHARPEN_KERNEL: [f64; 25] = [
    -0.125, -0.125, -0.125, -0.125, -0.125,
    -0.125,  0.25,   0.25,   0.25,  -0.125,
    -0.125,  0.25,   1.0,    0.25,  -0.125,
    -0.125,  0.25,   0.25,   0.25,  -0.125,
    -0.125, -0.125, -0.125, -0.125, -0.125
];

/// An odd sided square convolution kernel
///
/// Weights are stored row major. Construction validates the shape,
/// an even side or a weight count that is not `size * size` is
/// rejected, never coerced.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter
{
    size:   usize,
    kernel: Vec<f64>
}

impl Filter
{
    /// Create a new filter from a row major weight grid
    ///
    /// `size` is the side length of the square kernel and must be
    /// odd, `kernel` must hold exactly `size * size` weights.
    pub fn new(size: usize, kernel: Vec<f64>) -> Result<Filter, ImageErrors>
    {
        if size == 0 || size % 2 == 0
        {
            return Err(ImageErrors::InvalidKernelShape(format!(
                "kernel side length must be odd, got {size}"
            )));
        }
        if kernel.len() != size * size
        {
            return Err(ImageErrors::InvalidKernelShape(format!(
                "a {size}x{size} kernel needs {} weights but got {}",
                size * size,
                kernel.len()
            )));
        }

        Ok(Filter { size, kernel })
    }

    /// The blur preset, a 3x3 Gaussian approximation
    #[must_use]
    pub fn blur() -> Filter
    {
        Filter {
            size:   3,
            kernel: BLUR_KERNEL.to_vec()
        }
    }

    /// The sharpen preset, a 5x5 edge amplifying kernel
    #[must_use]
    pub fn sharpen() -> Filter
    {
        Filter {
            size:   5,
            kernel: SHARPEN_KERNEL.to_vec()
        }
    }

    /// Return the side length of the kernel
    #[must_use]
    pub const fn size(&self) -> usize
    {
        self.size
    }

    /// Return the kernel weights in row major order
    #[must_use]
    pub fn kernel(&self) -> &[f64]
    {
        &self.kernel
    }

    /// Convolve one channel window with the kernel
    ///
    /// `window` holds the `size * size` neighborhood samples of a
    /// single channel in row major order, the caller zero pads
    /// samples outside the image. A window of any other length is a
    /// dimensions mismatch error.
    ///
    /// The weighted sum clamps to `[0, max_value]`, in range sums
    /// truncate toward zero.
    pub fn apply(&self, window: &[u16], max_value: u16) -> Result<u16, ImageErrors>
    {
        if window.len() != self.kernel.len()
        {
            return Err(ImageErrors::DimensionsMismatch(
                self.kernel.len(),
                window.len()
            ));
        }

        let sum: f64 = self
            .kernel
            .iter()
            .zip(window)
            .map(|(weight, sample)| weight * f64::from(*sample))
            .sum();

        if sum <= 0.0
        {
            return Ok(0);
        }

        let max = f64::from(max_value);

        if sum > max
        {
            return Ok(max_value);
        }

        Ok(sum as u16)
    }
}
