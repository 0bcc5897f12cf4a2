//! Kinema Core
//!
//! Foundational pieces shared by the Kinema crates:
//!
//! - [`errors`]: [`KinemaError`], [`ConfigurationError`] and the [`Result`] alias
//! - [`interner`]: component-name interning ([`Symbol`])
//! - [`time`]: millisecond [`Timestamp`]s and the host-side [`FrameClock`]

pub mod errors;
pub mod interner;
pub mod time;

pub use errors::{ConfigurationError, KinemaError, Result};
pub use interner::Symbol;
pub use time::{FrameClock, Timestamp};
