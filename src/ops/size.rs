//! Operations that change a region's length.

use std::iter;

use crate::error::{Error, Result};
use crate::region::Region;

/// Drops the logical bits beyond `new_length`. Truncation never extends.
pub fn op_truncate(region: &Region, new_length: usize) -> Result<Region> {
    if new_length > region.bit_length() {
        return Err(Error::bounds(0, new_length, region.bit_length()));
    }
    Ok(region.bits().take(new_length).collect())
}

/// Appends `fill` bits until the length equals `new_length`.
pub fn op_extend(region: &Region, new_length: usize, fill: bool) -> Result<Region> {
    if new_length < region.bit_length() {
        return Err(Error::bounds(0, new_length, region.bit_length()));
    }
    let padding = new_length - region.bit_length();
    Ok(region
        .bits()
        .chain(iter::repeat(fill as u8).take(padding))
        .collect())
}

/// Truncates or extends as needed to reach `new_length`.
pub fn op_ensure_bit_length(region: &Region, new_length: usize, fill: bool) -> Result<Region> {
    if new_length < region.bit_length() {
        op_truncate(region, new_length)
    } else {
        op_extend(region, new_length, fill)
    }
}

/// Byte-granular variant of [`op_ensure_bit_length`]; the target is a
/// whole byte count.
pub fn op_ensure_byte_length(
    region: &Region,
    new_byte_length: usize,
    fill: bool,
) -> Result<Region> {
    op_ensure_bit_length(region, new_byte_length * 8, fill)
}

/// `a`'s bits followed by `b`'s, repacked so padding stays in the final
/// cell only.
pub fn op_concatenate(a: &Region, b: &Region) -> Region {
    a.bits().chain(b.bits()).collect()
}

#[cfg(test)]
mod tests {
    use yare::parameterized;

    use super::*;
    use crate::bits;

    #[test]
    fn truncate_keeps_a_prefix_of_the_logical_sequence() {
        let region = bits![1, 0, 1, 1, 0, 1];

        assert_eq!(op_truncate(&region, 3).unwrap(), bits![1, 0, 1]);
        assert_eq!(op_truncate(&region, 6).unwrap(), region);
        assert_eq!(op_truncate(&region, 0).unwrap(), bits![]);
    }

    #[test]
    fn truncate_does_not_extend() {
        let region = bits![1, 0, 1];

        assert_eq!(op_truncate(&region, 4).unwrap_err().symbol(), "BoundsError");
    }

    #[parameterized(
        with_zeros = { false, bits![1, 0, 1, 0, 0] },
        with_ones = { true, bits![1, 0, 1, 1, 1] },
    )]
    fn extend_appends_fill_bits(fill: bool, expected: crate::Region) {
        let region = bits![1, 0, 1];

        assert_eq!(op_extend(&region, 5, fill).unwrap(), expected);
    }

    #[test]
    fn extend_does_not_truncate() {
        let region = bits![1, 0, 1];

        assert_eq!(
            op_extend(&region, 2, false).unwrap_err().symbol(),
            "BoundsError"
        );
    }

    #[parameterized(
        shrink = { 2, bits![1, 0] },
        keep = { 3, bits![1, 0, 1] },
        grow = { 5, bits![1, 0, 1, 0, 0] },
        empty = { 0, bits![] },
    )]
    fn ensure_bit_length_dispatches_to_truncate_or_extend(
        new_length: usize,
        expected: crate::Region,
    ) {
        let region = bits![1, 0, 1];

        assert_eq!(op_ensure_bit_length(&region, new_length, false).unwrap(), expected);
    }

    #[test]
    fn ensure_byte_length_works_in_whole_cells() {
        let region = bits![1, 0, 1];

        let grown = op_ensure_byte_length(&region, 2, false).unwrap();

        assert_eq!(grown.bit_length(), 16);
        assert_eq!(grown.cells(), &[0b1010_0000, 0x00]);
    }

    #[test]
    fn concatenate_appends_and_repacks() {
        let concatenated = op_concatenate(&bits![1, 0, 1], &bits![1, 0, 1]);

        assert_eq!(concatenated, bits![1, 0, 1, 1, 0, 1]);
        assert_eq!(concatenated.bit_length(), 6);
        assert_eq!(concatenated.cells(), &[0b1011_0100]);
    }

    #[test]
    fn concatenate_with_empty_is_a_unit() {
        let region = bits![1, 0, 1];

        assert_eq!(op_concatenate(&region, &bits![]), region);
        assert_eq!(op_concatenate(&bits![], &region), region);
        assert_eq!(op_concatenate(&bits![], &bits![]), bits![]);
    }

    #[test]
    fn truncate_undoes_a_concatenation() {
        let region = bits![1, 0, 1];
        let doubled = op_concatenate(&region, &region);

        assert_eq!(op_truncate(&doubled, 3).unwrap(), region);
    }
}
