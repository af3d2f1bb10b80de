use spirit_dns_application::ports::Clock;
use spirit_dns_application::services::{AnswerCodec, AuditTrail, StoreHandle};
use spirit_dns_application::use_cases::{
    DumpAnswersUseCase, LookupAnswersUseCase, StoreAnswersUseCase, SweepExpiredAnswersUseCase,
};
use spirit_dns_domain::Config;
use spirit_dns_infrastructure::audit::TracingAuditPublisher;
use spirit_dns_infrastructure::system::SystemClock;
use std::sync::Arc;

pub struct CacheServices {
    pub store_answers: Arc<StoreAnswersUseCase>,
    pub lookup: Arc<LookupAnswersUseCase>,
    pub dump: Arc<DumpAnswersUseCase>,
    pub sweep: Arc<SweepExpiredAnswersUseCase>,
}

impl CacheServices {
    pub fn new(config: &Config, store: Arc<StoreHandle>) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let codec = Arc::new(AnswerCodec::new(config.cache.key_prefix.clone()));
        let batch = config.cache.scan_batch_size;

        let audit = config.audit.enabled.then(|| {
            Arc::new(AuditTrail::new(
                Arc::new(TracingAuditPublisher),
                config.audit.destination.clone(),
            ))
        });

        let mut store_answers =
            StoreAnswersUseCase::new(store.clone(), clock.clone(), codec.clone());
        let mut lookup = LookupAnswersUseCase::new(store.clone(), clock.clone(), codec.clone());
        if let Some(audit) = audit {
            store_answers = store_answers.with_audit(audit.clone());
            lookup = lookup.with_audit(audit);
        }
        let lookup = Arc::new(lookup);

        Self {
            store_answers: Arc::new(store_answers),
            dump: Arc::new(DumpAnswersUseCase::new(
                store.clone(),
                lookup.clone(),
                codec.clone(),
                batch,
            )),
            sweep: Arc::new(SweepExpiredAnswersUseCase::new(store, clock, codec, batch)),
            lookup,
        }
    }
}
