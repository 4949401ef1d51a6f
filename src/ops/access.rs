//! Reads and writes on the logical bit sequence.
//!
//! Bit-granular operations address individual logical bits; byte-granular
//! operations address whole cells and refuse to touch a partial final
//! cell. Writes never extend the destination.

use crate::error::{Error, Result};
use crate::region::Region;

/// Extracts the half-open range `[start, stop)` of logical bits.
pub fn op_get_bits(region: &Region, start: usize, stop: usize) -> Result<Region> {
    if start > stop || stop > region.bit_length() {
        return Err(Error::bounds(start, stop, region.bit_length()));
    }
    Ok(region.bits().skip(start).take(stop - start).collect())
}

/// The length-1 specialization of [`op_get_bits`].
pub fn op_get_bit(region: &Region, index: usize) -> Result<Region> {
    op_get_bits(region, index, index + 1)
}

/// Extracts whole cell `index`.
pub fn op_get_byte(region: &Region, index: usize) -> Result<Region> {
    op_get_bytes(region, index, index + 1)
}

/// Extracts whole cells `[start, stop)`.
pub fn op_get_bytes(region: &Region, start: usize, stop: usize) -> Result<Region> {
    whole_cell_span(region, start, stop)?;
    let cells = region.cells()[start..stop].to_vec();
    Ok(Region::from_parts(cells, (stop - start) * 8))
}

/// Returns `destination` with the logical bits starting at `offset`
/// overwritten by the logical bits of `source`. The destination is never
/// extended.
pub fn op_set_bits(destination: &Region, offset: usize, source: &Region) -> Result<Region> {
    let stop = offset + source.bit_length();
    if stop > destination.bit_length() {
        return Err(Error::bounds(offset, stop, destination.bit_length()));
    }
    let mut result = destination.clone();
    for (index, bit) in source.bits().enumerate() {
        result.set(offset + index, bit);
    }
    Ok(result)
}

/// Writes a single-bit `source` at bit `offset`.
pub fn op_set_bit(destination: &Region, offset: usize, source: &Region) -> Result<Region> {
    if source.bit_length() != 1 {
        return Err(Error::bounds(0, source.bit_length(), 1));
    }
    op_set_bits(destination, offset, source)
}

/// Writes an 8-bit `source` over whole cell `index`.
pub fn op_set_byte(destination: &Region, index: usize, source: &Region) -> Result<Region> {
    if source.bit_length() != 8 {
        return Err(Error::ByteAlignment {
            context: "op_set_byte payload",
            value: source.bit_length(),
        });
    }
    op_set_bytes(destination, index, source)
}

/// Writes a whole-byte `source` over the cells starting at cell `index`.
pub fn op_set_bytes(destination: &Region, index: usize, source: &Region) -> Result<Region> {
    if source.bit_length() % 8 != 0 {
        return Err(Error::ByteAlignment {
            context: "op_set_bytes payload",
            value: source.bit_length(),
        });
    }
    whole_cell_span(destination, index, index + source.byte_length())?;
    op_set_bits(destination, index * 8, source)
}

/// Classifies a whole-cell span: a span past the last cell is out of
/// bounds, a span that reaches into the partial final cell is misaligned.
fn whole_cell_span(region: &Region, start: usize, stop: usize) -> Result<()> {
    if start > stop || stop > region.byte_length() {
        return Err(Error::bounds(start * 8, stop * 8, region.bit_length()));
    }
    if stop * 8 > region.bit_length() {
        return Err(Error::ByteAlignment {
            context: "whole-byte access to a partial final cell",
            value: region.bit_length(),
        });
    }
    Ok(())
}
