//! Codecs bridging host primitives and regions.
//!
//! A codec is the only place orientation exists. `from_*` codecs accept a
//! host value (plus an explicit bit length where the value alone is
//! ambiguous) and emit an identity-ordered region; `into_*` codecs invert
//! them. Raw-memory codecs load left-to-right on both axes and need no
//! adaptation; numeric codecs build in numeric order and go through the
//! orientation adapter.

pub use self::numeric::from_numeric_big_integer;
pub use self::numeric::from_numeric_bytes;
pub use self::numeric::from_numeric_f32;
pub use self::numeric::from_numeric_f64;
pub use self::numeric::from_numeric_i16;
pub use self::numeric::from_numeric_i32;
pub use self::numeric::from_numeric_i64;
pub use self::numeric::from_numeric_i8;
pub use self::numeric::from_numeric_u16;
pub use self::numeric::from_numeric_u32;
pub use self::numeric::from_numeric_u64;
pub use self::numeric::from_numeric_u8;
pub use self::numeric::into_numeric_big_integer;
pub use self::numeric::into_numeric_bytes;
pub use self::numeric::into_numeric_f32;
pub use self::numeric::into_numeric_f64;
pub use self::numeric::into_numeric_i16;
pub use self::numeric::into_numeric_i32;
pub use self::numeric::into_numeric_i64;
pub use self::numeric::into_numeric_i8;
pub use self::numeric::into_numeric_u16;
pub use self::numeric::into_numeric_u32;
pub use self::numeric::into_numeric_u64;
pub use self::numeric::into_numeric_u8;
pub use self::numeric::Endianness;
pub use self::numeric::Signedness;
pub use self::raw::from_bit_list;
pub use self::raw::from_byte_list;
pub use self::raw::from_bytes;
pub use self::raw::into_bit_list;
pub use self::raw::into_byte_list;
pub use self::raw::into_bytes;
pub use self::text::from_ascii;
pub use self::text::from_utf8;
pub use self::text::into_ascii;
pub use self::text::into_utf8;

mod numeric;
mod raw;
mod text;
