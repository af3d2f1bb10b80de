use spirit_dns_domain::{Msg, RData, Record, RecordType};
use std::fmt::Write as _;

fn type_name(code: u16) -> String {
    RecordType::from_u16(code)
        .map(|t| t.to_string())
        .unwrap_or_else(|| format!("TYPE{}", code))
}

fn class_name(code: u16) -> String {
    if code == spirit_dns_domain::wire::CLASS_INET {
        "IN".to_string()
    } else {
        format!("CLASS{}", code)
    }
}

fn render_rdata(data: &RData) -> String {
    match data {
        RData::A(a) => a.address.map(|ip| ip.to_string()).unwrap_or_default(),
        RData::AAAA(aaaa) => aaaa.address.map(|ip| ip.to_string()).unwrap_or_default(),
        RData::NS(ns) => ns.ns.clone(),
        RData::CNAME(cname) => cname.target.clone(),
        RData::PTR(ptr) => ptr.ptr.clone(),
        RData::MX(mx) => format!("{} {}", mx.preference, mx.exchange),
        RData::SOA(soa) => format!(
            "{} {} {} {} {} {} {}",
            soa.mname, soa.rname, soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum
        ),
        RData::TXT(txt) => txt
            .txt
            .iter()
            .map(|segment| format!("{:?}", String::from_utf8_lossy(segment)))
            .collect::<Vec<_>>()
            .join(" "),
        RData::Unknown { data, .. } => format!("\\# {}", data.len()),
    }
}

/// Zone-file style line.
pub fn render_record(record: &Record) -> String {
    let header = &record.header;
    format!(
        "{}\t{}\t{}\t{}\t{}",
        header.name,
        header.ttl,
        class_name(header.class),
        type_name(header.rrtype),
        render_rdata(&record.data)
    )
}

pub fn render_msg(msg: &Msg) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        ";; id: {} opcode: {} rcode: {} flags: {:#06x}",
        msg.id,
        msg.opcode,
        msg.rcode,
        msg.flags()
    );

    let _ = writeln!(out, ";; QUESTION: {}", msg.question.len());
    for q in &msg.question {
        let _ = writeln!(
            out,
            "{}\t\t{}\t{}",
            q.name,
            class_name(q.qclass),
            type_name(q.qtype)
        );
    }

    for (title, records) in [
        ("ANSWER", &msg.answer),
        ("AUTHORITY", &msg.ns),
        ("ADDITIONAL", &msg.extra),
    ] {
        let _ = writeln!(out, ";; {}: {}", title, records.len());
        for record in records {
            let _ = writeln!(out, "{}", render_record(record));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use spirit_dns_domain::{A, MX};
    use std::net::Ipv4Addr;

    #[test]
    fn test_render_a_record() {
        let record = Record::new("www.example.com.", 300, A::new(Ipv4Addr::new(93, 184, 216, 34)));
        assert_eq!(
            render_record(&record),
            "www.example.com.\t300\tIN\tA\t93.184.216.34"
        );
    }

    #[test]
    fn test_render_mx_record() {
        let record = Record::new("example.com.", 60, MX::new(10, "mail.example.com."));
        assert!(render_record(&record).ends_with("MX\t10 mail.example.com."));
    }
}
