//! DNS message wire format (RFC 1035 §4).
//!
//! All packers take the destination buffer and a write offset and return the
//! offset just past what they wrote; all unpackers take a source buffer and a
//! read offset and return the decoded value together with the next offset.
//! Every fixed-width access is bounds checked and reported as
//! [`WireError::BufferOverflow`](crate::WireError::BufferOverflow).

pub mod address;
pub mod constants;
pub mod decoder;
pub mod header;
pub mod message;
pub mod name;
pub mod primitives;
pub mod question;
mod section;
pub mod txt;

pub use constants::*;
pub use decoder::Decoder;
pub use header::Header;
pub use message::Msg;
pub use name::{
    domain_name_len, pack_domain_name, unpack_domain_name, unpack_domain_name_with,
    CompressionMap, PointerWidth,
};
pub use primitives::{pack_u16, pack_u32, unpack_u16, unpack_u32};
pub use question::Question;
