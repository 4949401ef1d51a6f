//! Numeric codecs.
//!
//! Numbers live in numeric order: significance grows right to left on both
//! axes. `from_numeric_*` lays the value's two's-complement bits out
//! least-significant-first and lets the orientation adapter produce
//! identity order; `into_numeric_*` adapts back and reads the bits off.
//! Under identity order the leftmost bit of a numeric region is therefore
//! its most significant.

use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};
use crate::ops::op_get_bits;
use crate::order::Orientation;
use crate::region::Region;

use super::raw::from_bytes;

/// Whether a numeric codec reads and writes two's complement. Always an
/// explicit choice; the core never defaults it.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Signedness {
    Unsigned,
    Signed,
}

impl Signedness {
    fn target(self) -> &'static str {
        match self {
            Signedness::Unsigned => "an unsigned integer",
            Signedness::Signed => "a signed integer",
        }
    }
}

/// Byte order of a host numeric buffer.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Endianness {
    Big,
    Little,
}

fn numeric_region(value: u64, width: usize) -> Region {
    let lsb_first: Region = (0..width).map(|i| ((value >> i) & 1) as u8).collect();
    Orientation::NUMERIC.apply(&lsb_first)
}

fn numeric_value(region: &Region, width: usize, target: &'static str) -> Result<u64> {
    if region.bit_length() > width {
        return Err(Error::NumericRange {
            value: format!("a {}-bit region", region.bit_length()),
            bit_length: width,
            target,
        });
    }
    let numeric = Orientation::NUMERIC.apply(region);
    let mut value = 0u64;
    for (index, bit) in numeric.bits().enumerate() {
        value |= u64::from(bit) << index;
    }
    Ok(value)
}

fn sign_extend(value: u64, bit_length: usize) -> u64 {
    if bit_length == 0 || bit_length >= 64 {
        return value;
    }
    if (value >> (bit_length - 1)) & 1 == 1 {
        value | (!0u64 << bit_length)
    } else {
        value
    }
}

macro_rules! unsigned_codecs {
    ($($ty:ident: $from:ident / $into:ident;)*) => {$(
        pub fn $from(value: $ty) -> Region {
            numeric_region(u64::from(value), $ty::BITS as usize)
        }

        /// Requires the region to fit the target width; shorter regions
        /// zero-extend.
        pub fn $into(region: &Region) -> Result<$ty> {
            numeric_value(region, $ty::BITS as usize, stringify!($ty)).map(|value| value as $ty)
        }
    )*};
}

unsigned_codecs! {
    u8: from_numeric_u8 / into_numeric_u8;
    u16: from_numeric_u16 / into_numeric_u16;
    u32: from_numeric_u32 / into_numeric_u32;
    u64: from_numeric_u64 / into_numeric_u64;
}

macro_rules! signed_codecs {
    ($($ty:ident: $from:ident / $into:ident;)*) => {$(
        pub fn $from(value: $ty) -> Region {
            numeric_region(value as u64, $ty::BITS as usize)
        }

        /// Requires the region to fit the target width; shorter regions
        /// sign-extend from their leading bit.
        pub fn $into(region: &Region) -> Result<$ty> {
            let raw = numeric_value(region, $ty::BITS as usize, stringify!($ty))?;
            Ok(sign_extend(raw, region.bit_length()) as $ty)
        }
    )*};
}

signed_codecs! {
    i8: from_numeric_i8 / into_numeric_i8;
    i16: from_numeric_i16 / into_numeric_i16;
    i32: from_numeric_i32 / into_numeric_i32;
    i64: from_numeric_i64 / into_numeric_i64;
}

pub fn from_numeric_f32(value: f32) -> Region {
    numeric_region(u64::from(value.to_bits()), 32)
}

/// A float has no sub-width embedding, so the region must be exactly 32
/// bits.
pub fn into_numeric_f32(region: &Region) -> Result<f32> {
    if region.bit_length() != 32 {
        return Err(Error::NumericRange {
            value: format!("a {}-bit region", region.bit_length()),
            bit_length: 32,
            target: "f32",
        });
    }
    Ok(f32::from_bits(numeric_value(region, 32, "f32")? as u32))
}

pub fn from_numeric_f64(value: f64) -> Region {
    numeric_region(value.to_bits(), 64)
}

pub fn into_numeric_f64(region: &Region) -> Result<f64> {
    if region.bit_length() != 64 {
        return Err(Error::NumericRange {
            value: format!("a {}-bit region", region.bit_length()),
            bit_length: 64,
            target: "f64",
        });
    }
    Ok(f64::from_bits(numeric_value(region, 64, "f64")?))
}

/// Encodes an arbitrary-precision integer into `bit_length` bits.
pub fn from_numeric_big_integer(
    value: &BigInt,
    bit_length: usize,
    signedness: Signedness,
) -> Result<Region> {
    let encoded = twos_complement(value, bit_length, signedness)?;
    if bit_length == 0 {
        return Ok(Region::empty());
    }
    let (_, bytes) = encoded.to_bytes_be();
    let cell_count = bit_length.div_ceil(8);
    let mut cells = vec![0u8; cell_count - bytes.len()];
    cells.extend_from_slice(&bytes);
    // the value occupies the low bit_length bits of the padded byte string
    op_get_bits(&from_bytes(&cells), cell_count * 8 - bit_length, cell_count * 8)
}

/// Reads the region as an integer of its own width. Total: every region
/// is a representable big integer.
pub fn into_numeric_big_integer(region: &Region, signedness: Signedness) -> BigInt {
    let mut value = BigInt::zero();
    for bit in region.bits() {
        value = (value << 1) + BigInt::from(bit);
    }
    if signedness == Signedness::Signed && !region.is_empty() && region.get(0) == 1 {
        value -= BigInt::one() << region.bit_length();
    }
    value
}

/// Loads a host numeric buffer of unsigned `bit_length`-bit memory with
/// the given byte order.
pub fn from_numeric_bytes(
    bytes: &[u8],
    bit_length: usize,
    endianness: Endianness,
) -> Result<Region> {
    if bit_length > bytes.len() * 8 {
        return Err(Error::bounds(0, bit_length, bytes.len() * 8));
    }
    check_numeric_layout(bit_length, bytes.len(), endianness)?;
    let mut ordered = bytes.to_vec();
    if endianness == Endianness::Little {
        ordered.reverse();
    }
    let value = BigInt::from_bytes_be(Sign::Plus, &ordered);
    from_numeric_big_integer(&value, bit_length, Signedness::Unsigned)
}

pub fn into_numeric_bytes(region: &Region, endianness: Endianness) -> Result<Vec<u8>> {
    check_numeric_layout(region.bit_length(), region.byte_length(), endianness)?;
    if region.is_empty() {
        return Ok(Vec::new());
    }
    let value = into_numeric_big_integer(region, Signedness::Unsigned);
    let (_, bytes) = value.to_bytes_be();
    let mut out = vec![0u8; region.byte_length() - bytes.len()];
    out.extend_from_slice(&bytes);
    if endianness == Endianness::Little {
        out.reverse();
    }
    Ok(out)
}

fn twos_complement(value: &BigInt, bit_length: usize, signedness: Signedness) -> Result<BigInt> {
    let fits = match signedness {
        Signedness::Unsigned => {
            !value.is_negative() && *value < (BigInt::one() << bit_length)
        }
        Signedness::Signed if bit_length == 0 => value.is_zero(),
        Signedness::Signed => {
            let half = BigInt::one() << (bit_length - 1);
            *value >= -&half && *value < half
        }
    };
    if !fits {
        return Err(Error::NumericRange {
            value: value.to_string(),
            bit_length,
            target: signedness.target(),
        });
    }
    if value.is_negative() {
        Ok(value + (BigInt::one() << bit_length))
    } else {
        Ok(value.clone())
    }
}

/// A partial group only has a defined place when it leads, which only
/// big-endian byte order expresses.
fn check_numeric_layout(bit_length: usize, byte_count: usize, endianness: Endianness) -> Result<()> {
    if bit_length % 8 != 0 && byte_count > 1 && endianness == Endianness::Little {
        return Err(Error::Orientation(format!(
            "little-endian byte order cannot place the partial group of a {bit_length}-bit number"
        )));
    }
    Ok(())
}
