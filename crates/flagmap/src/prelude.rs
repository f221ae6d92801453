//! Common imports for flagmap users.
//!
//! ```
//! use flagmap::prelude::*;
//!
//! let fs = FlagSet::from_names(["a", "b"])?;
//! assert_eq!(fs.len(), 2);
//! # Ok::<(), FlagError>(())
//! ```

pub use flagmap_core::{DisplayWidth, FlagBits, FlagError, FlagSet, FlagSetOptions, Validation};
