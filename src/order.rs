//! Bit and byte order, and the adapter that maps a foreign region into
//! identity order.
//!
//! The algebra itself is orientation-free; a region always presents as
//! identity order (bit 0 leftmost, cell 0 leftmost). Orientation is a
//! property of the memory universe a region came from, and applying that
//! declared orientation as a transformation upon the region itself yields
//! its identity-ordered equivalent. The same table maps back out again.

use crate::ops::{op_identity, op_reverse, op_reverse_bits, op_reverse_bytes};
use crate::region::Region;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum BitOrder {
    LeftToRight,
    RightToLeft,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum ByteOrder {
    LeftToRight,
    RightToLeft,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub struct Orientation {
    pub bit_order: BitOrder,
    pub byte_order: ByteOrder,
}

impl Orientation {
    /// The order the algebra operates in: bit 0 is the leftmost bit of the
    /// leftmost cell.
    pub const IDENTITY: Orientation = Orientation {
        bit_order: BitOrder::LeftToRight,
        byte_order: ByteOrder::LeftToRight,
    };

    /// The canonical numeric order: significance grows right to left on
    /// both axes.
    pub const NUMERIC: Orientation = Orientation {
        bit_order: BitOrder::RightToLeft,
        byte_order: ByteOrder::RightToLeft,
    };

    pub const fn new(bit_order: BitOrder, byte_order: ByteOrder) -> Self {
        Orientation {
            bit_order,
            byte_order,
        }
    }

    /// Applies this orientation as a transformation. Maps a region declared
    /// with this orientation into identity order, and an identity-ordered
    /// region back into this orientation. The transform is its own inverse,
    /// except that the pure byte-reversing row realigns with its original
    /// grouping only at whole-byte lengths.
    pub fn apply(&self, region: &Region) -> Region {
        match (self.bit_order, self.byte_order) {
            (BitOrder::LeftToRight, ByteOrder::LeftToRight) => op_identity(region),
            (BitOrder::RightToLeft, ByteOrder::LeftToRight) => op_reverse_bits(region),
            (BitOrder::LeftToRight, ByteOrder::RightToLeft) => op_reverse_bytes(region),
            (BitOrder::RightToLeft, ByteOrder::RightToLeft) => op_reverse(region),
        }
    }
}
