//! Shared types for tapgen: release metadata, architectures, digests.
//!
//! Everything here is plain data plus validation. The rendering logic
//! lives in `tapgen-core`; this crate only guarantees that metadata
//! reaching it is well-formed.

pub mod arch;
pub mod digest;
pub mod release;

// Re-exports
pub use arch::*;
pub use digest::*;
pub use release::*;
