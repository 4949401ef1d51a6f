//! Bit-addressed memory regions.
//!
//! The unit of reasoning here is the bit, not the byte. A [`Region`] is an
//! opaque sequence of logical bits; the `op_*` functions are a closed
//! algebra over it, and the `from_*` / `into_*` codecs bridge host values
//! in and out under an explicit orientation. The algebra itself is
//! orientation-free: a region always presents in identity order (bit 0
//! leftmost), and every bit-order/byte-order concern lives in the codecs
//! and the [`Orientation`] adapter.

pub use crate::codec::from_ascii;
pub use crate::codec::from_bit_list;
pub use crate::codec::from_byte_list;
pub use crate::codec::from_bytes;
pub use crate::codec::from_numeric_big_integer;
pub use crate::codec::from_numeric_bytes;
pub use crate::codec::from_numeric_f32;
pub use crate::codec::from_numeric_f64;
pub use crate::codec::from_numeric_i16;
pub use crate::codec::from_numeric_i32;
pub use crate::codec::from_numeric_i64;
pub use crate::codec::from_numeric_i8;
pub use crate::codec::from_numeric_u16;
pub use crate::codec::from_numeric_u32;
pub use crate::codec::from_numeric_u64;
pub use crate::codec::from_numeric_u8;
pub use crate::codec::from_utf8;
pub use crate::codec::into_ascii;
pub use crate::codec::into_bit_list;
pub use crate::codec::into_byte_list;
pub use crate::codec::into_bytes;
pub use crate::codec::into_numeric_big_integer;
pub use crate::codec::into_numeric_bytes;
pub use crate::codec::into_numeric_f32;
pub use crate::codec::into_numeric_f64;
pub use crate::codec::into_numeric_i16;
pub use crate::codec::into_numeric_i32;
pub use crate::codec::into_numeric_i64;
pub use crate::codec::into_numeric_i8;
pub use crate::codec::into_numeric_u16;
pub use crate::codec::into_numeric_u32;
pub use crate::codec::into_numeric_u64;
pub use crate::codec::into_numeric_u8;
pub use crate::codec::into_utf8;
pub use crate::codec::Endianness;
pub use crate::codec::Signedness;
pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::ops::op_concatenate;
pub use crate::ops::op_ensure_bit_length;
pub use crate::ops::op_ensure_byte_length;
pub use crate::ops::op_extend;
pub use crate::ops::op_get_bit;
pub use crate::ops::op_get_bits;
pub use crate::ops::op_get_byte;
pub use crate::ops::op_get_bytes;
pub use crate::ops::op_identity;
pub use crate::ops::op_reverse;
pub use crate::ops::op_reverse_bits;
pub use crate::ops::op_reverse_bytes;
pub use crate::ops::op_set_bit;
pub use crate::ops::op_set_bits;
pub use crate::ops::op_set_byte;
pub use crate::ops::op_set_bytes;
pub use crate::ops::op_truncate;
pub use crate::order::BitOrder;
pub use crate::order::ByteOrder;
pub use crate::order::Orientation;
pub use crate::region::Bits;
pub use crate::region::Region;
pub use crate::suite::Suite;
pub use crate::suite::SuiteReport;

mod codec;
mod error;
mod ops;
mod order;
mod region;
mod suite;

/// Builds a [`Region`] from bit literals. Panics on values other than 0
/// and 1, so it belongs in tests and examples.
///
/// ```
/// use tidbytes::{bits, Region};
///
/// let region: Region = bits![1, 0, 1];
/// assert_eq!(region.bit_length(), 3);
/// ```
#[macro_export]
macro_rules! bits {
    () => {
        $crate::Region::empty()
    };
    ($( $bit: expr ),* $(,)?) => {
        $crate::from_bit_list(&[$($bit),*]).unwrap()
    };
}
