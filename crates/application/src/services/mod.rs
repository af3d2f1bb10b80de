mod answer_codec;
mod audit_trail;
mod store_handle;

pub use answer_codec::AnswerCodec;
pub use audit_trail::{AnswerAuditEvent, AuditTrail};
pub use store_handle::StoreHandle;
