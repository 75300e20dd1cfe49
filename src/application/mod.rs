//! Application layer
//!
//! Thin per-operation handlers that orchestrate the domain services to
//! fulfill each supported request kind.

pub mod handlers;
