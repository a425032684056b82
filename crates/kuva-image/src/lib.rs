/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An in memory image editing engine
//!
//! The crate stores named raster images, applies a fixed catalog of
//! per pixel and neighborhood operations to them and loads/saves the
//! raster formats of the command surface.
//!
//! The pieces compose leaf first
//!
//! - [`image::Image`](crate::image::Image), an immutable grid of pixels where every
//!   operation returns a new image
//! - [`filter::Filter`](crate::filter::Filter), an odd sized square convolution kernel
//! - [`transform::Transform`](crate::transform::Transform), a 3x3 linear color mapping
//! - [`store::ImageStore`](crate::store::ImageStore), the named image map a session
//!   accumulates into
//! - [`commands`](crate::commands), the textual command layer tying the
//!   above together
//!
//! Anything that is not the plain text ppm format crosses the opaque
//! codec boundary in [`codecs`](crate::codecs).
pub mod codecs;
pub mod commands;
pub mod errors;
pub mod filter;
pub mod image;
pub mod store;
pub mod transform;
