/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Linear color transforms
//!
//! A [`Transform`] is a 3x3 matrix of real coefficients applied per
//! pixel, each output channel is the dot product of a matrix row
//! with the `(red, green, blue)` input vector. Results clamp to the
//! pixel's own channel range and truncate toward zero.
use kuva_core::pixel::{Pixel, LUMA_BLUE, LUMA_GREEN, LUMA_RED};

use crate::errors::ImageErrors;

/// Matrix for the `sepia` command
const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131]
];

/// A 3x3 linear color transform
///
/// Rows map to output channels, columns weigh the input channels in
/// `(red, green, blue)` order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform
{
    matrix: [[f64; 3]; 3]
}

impl Transform
{
    /// Create a transform from a fixed 3x3 coefficient matrix
    #[must_use]
    pub const fn new(matrix: [[f64; 3]; 3]) -> Transform
    {
        Transform { matrix }
    }

    /// Create a transform from nine coefficients in row major order
    ///
    /// Any other slice length is rejected.
    pub fn from_slice(coefficients: &[f64]) -> Result<Transform, ImageErrors>
    {
        if coefficients.len() != 9
        {
            return Err(ImageErrors::InvalidMatrixShape(format!(
                "a color transform needs 9 coefficients but got {}",
                coefficients.len()
            )));
        }

        Ok(Transform {
            matrix: [
                [coefficients[0], coefficients[1], coefficients[2]],
                [coefficients[3], coefficients[4], coefficients[5]],
                [coefficients[6], coefficients[7], coefficients[8]]
            ]
        })
    }

    /// The greyscale preset
    ///
    /// All three rows carry the luma weights, so every output channel
    /// receives the same weighted sum and the pixel turns grey.
    #[must_use]
    pub const fn greyscale() -> Transform
    {
        const LUMA_ROW: [f64; 3] = [LUMA_RED, LUMA_GREEN, LUMA_BLUE];

        Transform {
            matrix: [LUMA_ROW, LUMA_ROW, LUMA_ROW]
        }
    }

    /// The sepia preset, a warm brown tone
    #[must_use]
    pub const fn sepia() -> Transform
    {
        Transform {
            matrix: SEPIA_MATRIX
        }
    }

    /// Return the coefficient matrix
    #[must_use]
    pub const fn matrix(&self) -> &[[f64; 3]; 3]
    {
        &self.matrix
    }

    /// Apply the transform to a single pixel
    ///
    /// The output keeps the input's bit depth, every channel clamps
    /// to `[0, max_value]` and truncates toward zero.
    #[must_use]
    pub fn apply(&self, pixel: Pixel) -> Pixel
    {
        let max = f64::from(pixel.max_value());

        let input = [
            f64::from(pixel.red()),
            f64::from(pixel.green()),
            f64::from(pixel.blue())
        ];

        let mut output = [0_u16; 3];

        for (result, row) in output.iter_mut().zip(&self.matrix)
        {
            let sum: f64 = row.iter().zip(&input).map(|(c, v)| c * v).sum();

            *result = sum.clamp(0.0, max) as u16;
        }

        Pixel::new_clamped(pixel.depth(), output[0], output[1], output[2])
    }
}
