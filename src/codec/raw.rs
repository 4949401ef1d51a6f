//! Raw-memory codecs. A host byte sequence is already identity-ordered on
//! the byte axis; the bit axis within each byte is taken left-to-right.

use crate::error::{Error, Result};
use crate::ops::op_truncate;
use crate::region::Region;

pub fn from_bit_list(bits: &[u8]) -> Result<Region> {
    if let Some(value) = bits.iter().find(|&&bit| bit > 1) {
        return Err(Error::NumericRange {
            value: value.to_string(),
            bit_length: 1,
            target: "a bit",
        });
    }
    Ok(bits.iter().copied().collect())
}

/// Loads the byte list left-to-right, then keeps the first `bit_length`
/// bits.
pub fn from_byte_list(bytes: &[u8], bit_length: usize) -> Result<Region> {
    op_truncate(&from_bytes(bytes), bit_length)
}

pub fn from_bytes(bytes: &[u8]) -> Region {
    Region::from_parts(bytes.to_vec(), bytes.len() * 8)
}

pub fn into_bit_list(region: &Region) -> Vec<u8> {
    region.bits().collect()
}

/// The packed cells, padding included as zero bits.
pub fn into_byte_list(region: &Region) -> Vec<u8> {
    region.cells().to_vec()
}

/// The cells of a whole-byte region.
pub fn into_bytes(region: &Region) -> Result<Vec<u8>> {
    if region.bit_length() % 8 != 0 {
        return Err(Error::ByteAlignment {
            context: "into_bytes",
            value: region.bit_length(),
        });
    }
    Ok(region.cells().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits;

    #[test]
    fn bit_list_round_trips() {
        let region = from_bit_list(&[1, 0, 1]).unwrap();

        assert_eq!(region.bit_length(), 3);
        assert_eq!(region.byte_length(), 1);
        assert_eq!(into_bit_list(&region), vec![1, 0, 1]);
    }

    #[test]
    fn bit_list_rejects_values_other_than_zero_and_one() {
        let error = from_bit_list(&[1, 2, 0]).unwrap_err();

        assert_eq!(error.symbol(), "NumericRangeError");
    }

    #[test]
    fn byte_list_keeps_the_leading_bits() {
        let region = from_byte_list(&[0b1011_0110, 0xFF], 4).unwrap();

        assert_eq!(region, bits![1, 0, 1, 1]);
    }

    #[test]
    fn byte_list_cannot_claim_more_bits_than_the_bytes_hold() {
        let error = from_byte_list(&[0xFF], 9).unwrap_err();

        assert_eq!(error.symbol(), "BoundsError");
    }

    #[test]
    fn bytes_round_trip() {
        let region = from_bytes(&[0x12, 0x34]);

        assert_eq!(region.bit_length(), 16);
        assert_eq!(into_bytes(&region).unwrap(), vec![0x12, 0x34]);
    }

    #[test]
    fn into_bytes_refuses_a_partial_final_cell() {
        let error = into_bytes(&bits![1, 0, 1]).unwrap_err();

        assert_eq!(error.symbol(), "ByteAlignmentError");
    }

    #[test]
    fn into_byte_list_exposes_padding_as_zeros() {
        assert_eq!(into_byte_list(&bits![1, 0, 1]), vec![0b1010_0000]);
        assert_eq!(into_byte_list(&bits![]), Vec::<u8>::new());
    }

    #[test]
    fn empty_inputs_produce_empty_regions() {
        assert_eq!(from_bit_list(&[]).unwrap(), bits![]);
        assert_eq!(from_bytes(&[]), bits![]);
        assert_eq!(from_byte_list(&[], 0).unwrap(), bits![]);
    }
}
