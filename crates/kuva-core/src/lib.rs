//! Core primitives shared by the kuva crates
//!
//! This crate provides the small set of types every other
//! kuva crate builds on
//!
//! It currently contains
//!
//! - Bit depth information for channel samples
//! - The [`Pixel`](crate::pixel::Pixel) value type and its derived scalars
//! - Channel and component selectors used for greyscale
//!   conversion and histogram selection
//! - A byte reader used by the textual codec
//!
//! The crate is dependency free and purely computational, errors
//! raised here are validation failures, never I/O.
pub mod bit_depth;
pub mod bytestream;
pub mod channel;
pub mod errors;
pub mod pixel;
