//! Fixed-size binary layouts, one per beacon type.
//!
//! Every layout starts with a common 5-byte header (1-byte tag + 4-byte MET
//! in deciseconds) written by the codec; the structs here define the body.
//! Bodies are plain records of narrow wire types, serialized field-by-field
//! little-endian in `codec.rs` order.

pub mod long;
pub mod short;

/// Hard transport limit: no layout may encode to more than this many bytes.
pub const MAX_BEACON_SIZE: usize = 200;

/// Common prefix: tag (u8) + MET deciseconds (u32 LE).
pub const HEADER_SIZE: usize = 5;

/// Elements that fit in one packet after the header. Part of the wire
/// contract: changing an element's size changes the capacity.
pub const fn long_capacity(entry_size: usize) -> usize {
    (MAX_BEACON_SIZE - HEADER_SIZE) / entry_size
}
