//! The natural operations of the algebra.
//!
//! Every operation is pure: it reads its input regions, returns a freshly
//! allocated region, and performs no orientation change. Operation names
//! carry the `op_` prefix, the port-stable vocabulary shared by every
//! implementation of the algebra; codec names never do.

pub use self::access::op_get_bit;
pub use self::access::op_get_bits;
pub use self::access::op_get_byte;
pub use self::access::op_get_bytes;
pub use self::access::op_set_bit;
pub use self::access::op_set_bits;
pub use self::access::op_set_byte;
pub use self::access::op_set_bytes;
pub use self::size::op_concatenate;
pub use self::size::op_ensure_bit_length;
pub use self::size::op_ensure_byte_length;
pub use self::size::op_extend;
pub use self::size::op_truncate;
pub use self::transform::op_identity;
pub use self::transform::op_reverse;
pub use self::transform::op_reverse_bits;
pub use self::transform::op_reverse_bytes;

mod access;
mod size;
mod transform;
