use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use spirit_dns_domain::{
    CompressionMap, Decoder, DomainError, Question, RData, Record, RecordHeader, RecordType,
    WireError,
};

/// Stored form of one cached record. The TTL is not part of it; expiry is
/// carried by the member's score.
#[derive(Debug, Serialize, Deserialize)]
struct CachedRecord {
    #[serde(rename = "type")]
    rrtype: u16,
    name: String,
    class: u16,
    /// Uncompressed wire payload, base64.
    rdata: String,
}

/// Maps questions to store keys and records to sorted-set members.
#[derive(Debug, Clone)]
pub struct AnswerCodec {
    key_prefix: String,
}

impl AnswerCodec {
    pub fn new(key_prefix: impl Into<String>) -> Self {
        Self {
            key_prefix: key_prefix.into(),
        }
    }

    /// Glob matching every key this codec produces.
    pub fn key_pattern(&self) -> String {
        format!("{}*", self.key_prefix)
    }

    pub fn encode_key(&self, question: &Question) -> Result<String, DomainError> {
        let json = serde_json::to_string(question)
            .map_err(|e| DomainError::CacheEncoding(e.to_string()))?;
        Ok(format!("{}{}", self.key_prefix, json))
    }

    pub fn decode_key(&self, key: &str) -> Result<Question, DomainError> {
        let json = key.strip_prefix(&self.key_prefix).ok_or_else(|| {
            DomainError::CacheEncoding(format!("key {} is outside the cache namespace", key))
        })?;
        serde_json::from_str(json).map_err(|e| DomainError::CacheEncoding(e.to_string()))
    }

    /// Serialises `record` tagged with its type code.
    ///
    /// Records without a codec are refused: they could never be read back.
    pub fn encode_member(record: &Record) -> Result<String, DomainError> {
        if let RData::Unknown { rrtype, .. } = record.data {
            return Err(WireError::UnsupportedType(rrtype).into());
        }

        let mut rdata = vec![0u8; record.data.wire_len()];
        let end = record
            .data
            .pack(&mut rdata, 0, &mut CompressionMap::disabled())?;
        rdata.truncate(end);

        let cached = CachedRecord {
            rrtype: record.header.rrtype,
            name: record.header.name.clone(),
            class: record.header.class,
            rdata: STANDARD.encode(&rdata),
        };
        serde_json::to_string(&cached).map_err(|e| DomainError::CacheEncoding(e.to_string()))
    }

    /// Rebuilds a record from its stored form, reporting `ttl` as its TTL.
    ///
    /// A type tag missing from the registry means the store holds something
    /// this cache never wrote and fails with
    /// [`DomainError::UnsupportedCachedType`].
    pub fn decode_member(member: &str, ttl: u32) -> Result<Record, DomainError> {
        let cached: CachedRecord =
            serde_json::from_str(member).map_err(|e| DomainError::CacheEncoding(e.to_string()))?;
        let record_type = RecordType::from_u16(cached.rrtype)
            .ok_or(DomainError::UnsupportedCachedType(cached.rrtype))?;

        let rdata = STANDARD
            .decode(cached.rdata.as_bytes())
            .map_err(|e| DomainError::CacheEncoding(e.to_string()))?;
        let rdlength = u16::try_from(rdata.len())
            .map_err(|_| DomainError::from(WireError::RdataTooLong(rdata.len())))?;

        let decoder = Decoder::new(&rdata);
        let (data, _) = RData::unpack(record_type, &decoder, 0, rdlength)?;

        Ok(Record {
            header: RecordHeader {
                name: cached.name,
                rrtype: cached.rrtype,
                class: cached.class,
                ttl,
                rdlength,
            },
            data,
        })
    }
}
