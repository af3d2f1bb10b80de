//! Spirit DNS Application Layer
//!
//! Ports for the external collaborators (sorted-set store, clock, audit log)
//! and the answer-cache use cases built on top of them.
pub mod ports;
pub mod services;
pub mod use_cases;
