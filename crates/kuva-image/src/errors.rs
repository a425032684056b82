/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors raised by image operations and the command layer
//!
//! Everything here is a recoverable domain error, the command runner
//! reports the failing command and halts, bindings made by earlier
//! commands stay intact.
use std::fmt::{Debug, Formatter};

use kuva_core::errors::CoreErrors;

/// All errors possible during image operations and command execution
pub enum ImageErrors
{
    /// No image is bound to this name in the store
    UnknownImage(String),
    /// Unknown command word, wrong argument count or a malformed
    /// argument value
    MalformedCommand(String),
    /// Kernel construction rejected, the reason is inside
    InvalidKernelShape(String),
    /// Matrix construction rejected, the reason is inside
    InvalidMatrixShape(String),
    /// Expected and found element counts disagree
    DimensionsMismatch(usize, usize),
    /// The codec boundary could not produce an image
    LoadFailed(String),
    /// The codec boundary could not write an image
    SaveFailed(String),
    /// A validation failure bubbled up from the core primitives
    CoreErrors(CoreErrors),
    GenericStr(&'static str),
    GenericString(String)
}

impl Debug for ImageErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Self::UnknownImage(name) =>
            {
                writeln!(f, "No image loaded under the name `{name}`")
            }
            Self::MalformedCommand(reason) =>
            {
                writeln!(f, "Malformed command: {reason}")
            }
            Self::InvalidKernelShape(reason) =>
            {
                writeln!(f, "Invalid kernel shape: {reason}")
            }
            Self::InvalidMatrixShape(reason) =>
            {
                writeln!(f, "Invalid matrix shape: {reason}")
            }
            Self::DimensionsMismatch(expected, found) =>
            {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} elements but found {found}"
                )
            }
            Self::LoadFailed(reason) =>
            {
                writeln!(f, "Could not load image: {reason}")
            }
            Self::SaveFailed(reason) =>
            {
                writeln!(f, "Could not save image: {reason}")
            }
            Self::CoreErrors(err) =>
            {
                writeln!(f, "{err:?}")
            }
            Self::GenericStr(val) => writeln!(f, "{val}"),
            Self::GenericString(val) => writeln!(f, "{val}")
        }
    }
}

impl From<CoreErrors> for ImageErrors
{
    fn from(err: CoreErrors) -> Self
    {
        ImageErrors::CoreErrors(err)
    }
}
