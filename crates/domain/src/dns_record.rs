mod rdata;
mod record;
mod record_type;

pub use rdata::{RData, RecordData, A, AAAA, CNAME, MX, NS, PTR, SOA, TXT};
pub use record::{Record, RecordHeader};
pub use record_type::RecordType;
