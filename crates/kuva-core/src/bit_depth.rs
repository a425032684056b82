//! Image bit depth, information and manipulations

use crate::errors::CoreErrors;

/// Number of bits used to store a single channel sample.
///
/// Depths from 1 to 16 bits are supported, the underlying
/// storage for a sample is always a `u16`.
///
/// This comfortably covers the common raster depths,
/// e.g 8 bit ppm and png, 10 bit av1 stills and 16 bit ppm.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitDepth
{
    bits: u8
}

impl BitDepth
{
    /// Smallest supported bit count
    pub const MIN_BITS: u8 = 1;
    /// Largest supported bit count, chosen so that a sample fits a `u16`
    pub const MAX_BITS: u8 = 16;

    /// The depth of most common images, one byte per channel sample
    pub const EIGHT: BitDepth = BitDepth { bits: 8 };

    /// Create a new depth from a bit count
    ///
    /// Returns an error when `bits` is zero or greater than 16
    ///
    /// # Example
    /// ```
    /// use kuva_core::bit_depth::BitDepth;
    ///
    /// let depth = BitDepth::new(10).unwrap();
    /// assert_eq!(depth.max_value(), 1023);
    /// assert!(BitDepth::new(17).is_err());
    /// ```
    pub const fn new(bits: u8) -> Result<BitDepth, CoreErrors>
    {
        if bits < Self::MIN_BITS || bits > Self::MAX_BITS
        {
            return Err(CoreErrors::BadBitDepth(bits));
        }
        Ok(BitDepth { bits })
    }

    /// Return the smallest depth whose samples can hold `max_value`
    ///
    /// Used when deriving a depth from a codec's max channel value
    /// header, e.g a ppm `maxval` of 1000 needs a 10 bit depth.
    ///
    /// Returns an error when `max_value` is zero.
    pub const fn from_max_value(max_value: u16) -> Result<BitDepth, CoreErrors>
    {
        if max_value == 0
        {
            return Err(CoreErrors::BadBitDepth(0));
        }
        let bits = (u16::BITS - max_value.leading_zeros()) as u8;

        Ok(BitDepth { bits })
    }

    /// Return the number of bits of a channel sample
    #[must_use]
    pub const fn bits(self) -> u8
    {
        self.bits
    }

    /// Return the largest channel sample this depth can represent
    ///
    /// This is `(1 << bits) - 1`, e.g `255` for 8 bit samples
    #[must_use]
    pub const fn max_value(self) -> u16
    {
        ((1_u32 << self.bits) - 1) as u16
    }
}

impl Default for BitDepth
{
    fn default() -> BitDepth
    {
        BitDepth::EIGHT
    }
}

#[cfg(test)]
mod tests
{
    use crate::bit_depth::BitDepth;

    #[test]
    fn reject_out_of_range_bits()
    {
        assert!(BitDepth::new(0).is_err());
        assert!(BitDepth::new(17).is_err());

        for bits in 1..=16
        {
            assert!(BitDepth::new(bits).is_ok());
        }
    }

    #[test]
    fn max_values_per_depth()
    {
        assert_eq!(BitDepth::new(1).unwrap().max_value(), 1);
        assert_eq!(BitDepth::new(8).unwrap().max_value(), 255);
        assert_eq!(BitDepth::new(10).unwrap().max_value(), 1023);
        assert_eq!(BitDepth::new(16).unwrap().max_value(), 65535);
    }

    #[test]
    fn depth_from_max_value()
    {
        assert_eq!(BitDepth::from_max_value(255).unwrap().bits(), 8);
        assert_eq!(BitDepth::from_max_value(256).unwrap().bits(), 9);
        assert_eq!(BitDepth::from_max_value(1).unwrap().bits(), 1);
        assert_eq!(BitDepth::from_max_value(1000).unwrap().bits(), 10);
        assert_eq!(BitDepth::from_max_value(65535).unwrap().bits(), 16);

        assert!(BitDepth::from_max_value(0).is_err());
    }

    #[test]
    fn default_depth_is_eight_bits()
    {
        assert_eq!(BitDepth::default(), BitDepth::EIGHT);
        assert_eq!(BitDepth::default().max_value(), 255);
    }
}
