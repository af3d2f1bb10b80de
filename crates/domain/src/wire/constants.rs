pub const HEADER_SIZE: usize = 12;

// Header flag bits
pub const BIT_QR: u16 = 1 << 15;
pub const BIT_AA: u16 = 1 << 10;
pub const BIT_TC: u16 = 1 << 9;
pub const BIT_RD: u16 = 1 << 8;
pub const BIT_RA: u16 = 1 << 7;
pub const BIT_Z: u16 = 1 << 6;

pub const OPCODE_SHIFT: u16 = 11;
pub const NIBBLE_MASK: u16 = 0xF;

pub const CLASS_INET: u16 = 1;

pub const RCODE_SUCCESS: u8 = 0;
pub const RCODE_FORMAT_ERROR: u8 = 1;
pub const RCODE_SERVER_FAILURE: u8 = 2;
pub const RCODE_NAME_ERROR: u8 = 3;
pub const RCODE_NOT_IMPLEMENTED: u8 = 4;
pub const RCODE_REFUSED: u8 = 5;

/// Name decoding gives up after this many compression pointer jumps.
pub const MAX_POINTER_HOPS: usize = 126;
pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;
