use super::primitives::{pack_bytes, unpack_bytes};
use crate::errors::WireError;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Writes the 4 address bytes; an absent address writes nothing.
pub fn pack_a(address: Option<Ipv4Addr>, buf: &mut [u8], off: usize) -> Result<usize, WireError> {
    match address {
        Some(addr) => pack_bytes(&addr.octets(), buf, off),
        None => Ok(off),
    }
}

/// Writes all 16 address bytes; an absent address writes nothing.
pub fn pack_aaaa(
    address: Option<Ipv6Addr>,
    buf: &mut [u8],
    off: usize,
) -> Result<usize, WireError> {
    match address {
        Some(addr) => pack_bytes(&addr.octets(), buf, off),
        None => Ok(off),
    }
}

pub fn unpack_a(buf: &[u8], off: usize) -> Result<(Ipv4Addr, usize), WireError> {
    let (bytes, end) = unpack_bytes(buf, off, 4).map_err(|_| WireError::BufferOverflow {
        context: "unpacking a",
    })?;
    Ok((Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]), end))
}

pub fn unpack_aaaa(buf: &[u8], off: usize) -> Result<(Ipv6Addr, usize), WireError> {
    let (bytes, end) = unpack_bytes(buf, off, 16).map_err(|_| WireError::BufferOverflow {
        context: "unpacking aaaa",
    })?;
    let mut octets = [0u8; 16];
    octets.copy_from_slice(bytes);
    Ok((Ipv6Addr::from(octets), end))
}
