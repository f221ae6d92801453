//! Core types for flagmap.
//!
//! `flagmap-core` implements [`FlagSet`], a set of named boolean flags stored
//! as single bits of one unsigned integer. Names are bound to bits once, at
//! construction, and every later operation either looks a name up or
//! resolves the bits of a raw value back to names.
//!
//! # Role In The Architecture
//!
//! - **Storage abstraction**: [`FlagBits`] covers every unsigned width
//!   (`u8` through `u128`, plus `usize`), so one generic `FlagSet<T>` serves
//!   all of them.
//! - **Errors**: [`FlagError`] distinguishes unknown names, unknown bits and
//!   rejected definitions.
//! - **Options**: [`FlagSetOptions`] selects strict or permissive
//!   definition checks and the binary display width.
//!
//! Most applications should use the `flagmap` facade and its prelude.

pub mod bits;
pub mod config;
pub mod error;
pub mod flag_set;
mod snapshot;

pub use bits::{FlagBits, SingleBits};
pub use config::{DisplayWidth, FlagSetOptions, Validation};
pub use error::{FlagError, Result};
pub use flag_set::FlagSet;
