//! Spirit DNS Infrastructure Layer
//!
//! Adapters for the application ports: the sorted-set cache store, the
//! system clock and audit log publishers.
pub mod audit;
pub mod store;
pub mod system;
