//! Named bit flags backed by a single unsigned integer.
//!
//! `flagmap` maps human-readable flag names to bit positions and lets
//! callers set, clear, toggle and query flags by name, or decompose a raw
//! integer back into named flags.
//!
//! The implementation lives in `flagmap-core`; this crate re-exports it
//! together with a [`prelude`] so applications depend on one crate.
//!
//! # Example
//!
//! ```
//! use flagmap::prelude::*;
//!
//! let mut opts = FlagSet::from_map([("x", 1u8), ("y", 2), ("z", 4)]);
//! opts.set_by_value(6)?;
//!
//! assert_eq!(opts.value(), 6);
//! assert_eq!(opts.active_names(), vec!["y", "z"]);
//! assert!(opts.set_by_value(8).unwrap_err().is_unknown_flag_bit());
//! # Ok::<(), FlagError>(())
//! ```

pub mod prelude;

pub use flagmap_core::{
    DisplayWidth, FlagBits, FlagError, FlagSet, FlagSetOptions, Result, SingleBits, Validation,
};
pub use flagmap_core::{bits, config, error, flag_set};
