//! gk-core: shared foundation for the graph kernel crates.
//!
//! Contains:
//! - error (shared error type)
//! - numeric (Real, tolerances, the generic `Scalar` bound)
//! - vertex (dense vertex indices + range checks)
//! - timing (opt-in phase timers)

pub mod error;
pub mod numeric;
pub mod timing;
pub mod vertex;

// Re-exports: nice ergonomics for downstream crates
pub use error::{GkError, GkResult};
pub use numeric::*;
pub use vertex::{Vertex, check_vertex};
