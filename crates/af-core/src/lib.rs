//! Core types for the April Fools prank generator.
//!
//! A [`Target`] pairs a name with a [`Role`]; [`generate_prank`] maps it to
//! one of four fixed prank messages. Everything here is pure and
//! allocation is limited to the returned string.

/// Error types used throughout the crate.
pub mod error;
/// Prank message generation.
pub mod prank;
/// The closed set of target roles.
pub mod role;
/// The person being pranked.
pub mod target;

/// Re-export error types.
pub use error::{PrankError, PrankResult};
/// Re-export the generator entry points.
pub use prank::{PrankMessage, generate_prank, generate_prank_for};
/// Re-export the role enum.
pub use role::Role;
/// Re-export the target type.
pub use target::Target;
