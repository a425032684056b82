//! A plain text ppm codec
//!
//! This crate decodes and encodes the `P3` flavour of the netpbm
//! family, a human readable grid of ASCII sample triples. It is the
//! one format the kuva crates understand natively, binary raster
//! containers are handled elsewhere.
//!
//! The decoder honours `#` comments anywhere whitespace may appear
//! and derives the image bit depth from the `maxval` header, the
//! encoder writes the image's true maximum sample value so depths
//! above 8 bits survive a save/load round trip.
pub use crate::decoder::{DecoderOptions, PpmDecodeErrors, PpmDecoder};
pub use crate::encoder::{PpmEncodeErrors, PpmEncoder};

mod decoder;
mod encoder;
