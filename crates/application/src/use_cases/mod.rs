pub mod cache;

pub use cache::{
    CachedAnswers, DumpAnswersUseCase, LookupAnswersUseCase, StoreAnswersUseCase,
    SweepExpiredAnswersUseCase,
};
