#![allow(dead_code)]
use spirit_dns_domain::{Msg, Question, RData, Record, A, CNAME};
use std::net::Ipv4Addr;

pub struct MsgBuilder {
    msg: Msg,
}

impl MsgBuilder {
    pub fn new() -> Self {
        Self { msg: Msg::new() }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.msg.id = id;
        self
    }

    pub fn response(mut self) -> Self {
        self.msg.response = true;
        self.msg.recursion_available = true;
        self
    }

    pub fn recursion_desired(mut self) -> Self {
        self.msg.recursion_desired = true;
        self
    }

    pub fn question(mut self, name: &str, qtype: u16) -> Self {
        self.msg.question.push(Question::new(name, qtype));
        self
    }

    pub fn answer(mut self, record: Record) -> Self {
        self.msg.answer.push(record);
        self
    }

    pub fn authority(mut self, record: Record) -> Self {
        self.msg.ns.push(record);
        self
    }

    pub fn additional(mut self, record: Record) -> Self {
        self.msg.extra.push(record);
        self
    }

    pub fn build(self) -> Msg {
        self.msg
    }
}

pub fn a_record(name: &str, octets: [u8; 4], ttl: u32) -> Record {
    Record::new(name, ttl, A::new(Ipv4Addr::from(octets)))
}

pub fn cname_record(name: &str, target: &str, ttl: u32) -> Record {
    Record::new(name, ttl, CNAME::new(target))
}

/// Response to `www.baidu.com. A` answered through a CNAME chain; the two
/// owner names share the `com.` tail and the CNAME target is repeated as the
/// A record owner.
pub fn cname_chain_response() -> Msg {
    MsgBuilder::new()
        .id(51158)
        .response()
        .recursion_desired()
        .question("www.baidu.com.", 1)
        .answer(cname_record("www.baidu.com.", "www.a.shifen.com.", 1200))
        .answer(a_record("www.a.shifen.com.", [36, 155, 132, 3], 120))
        .build()
}

/// Compares everything a decoder recovers; rdlength is excluded because it
/// reflects compression applied at pack time.
pub fn assert_records_match(expected: &[Record], actual: &[Record]) {
    assert_eq!(expected.len(), actual.len(), "record count differs");
    for (e, a) in expected.iter().zip(actual) {
        assert_eq!(e.header.name, a.header.name);
        assert_eq!(e.header.rrtype, a.header.rrtype);
        assert_eq!(e.header.class, a.header.class);
        assert_eq!(e.header.ttl, a.header.ttl);
        assert_eq!(e.data, a.data);
    }
}

pub fn raw_header(qdcount: u16, ancount: u16) -> Vec<u8> {
    let mut buf = vec![0x12, 0x34, 0x81, 0x80];
    buf.extend_from_slice(&qdcount.to_be_bytes());
    buf.extend_from_slice(&ancount.to_be_bytes());
    buf.extend_from_slice(&[0, 0, 0, 0]);
    buf
}

/// Appends a root-owned record with the given type and raw payload.
pub fn push_raw_record(buf: &mut Vec<u8>, rrtype: u16, rdlength: u16, payload: &[u8]) {
    buf.push(0);
    buf.extend_from_slice(&rrtype.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&60u32.to_be_bytes());
    buf.extend_from_slice(&rdlength.to_be_bytes());
    buf.extend_from_slice(payload);
}

pub fn unknown_record(name: &str, rrtype: u16, payload: &[u8]) -> Record {
    Record::new(
        name,
        30,
        RData::Unknown {
            rrtype,
            data: payload.to_vec(),
        },
    )
}
