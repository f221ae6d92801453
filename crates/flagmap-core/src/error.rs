//! Error types for flag set construction and lookup.

use std::error::Error as StdError;
use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T, E = FlagError> = std::result::Result<T, E>;

/// Errors returned by [`FlagSet`](crate::FlagSet) operations.
///
/// Bit values are widened to `u128` so the error type does not depend on
/// the width of the flag set that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagError {
    /// A flag name was not found in the flag definitions.
    UnknownFlag { name: String },
    /// A bit in a raw value has no flag defined for it.
    UnknownFlagBit { bit: u128 },
    /// More names were supplied than the backing integer has bits.
    TooManyFlags { count: usize, capacity: u32 },
    /// The same name was supplied twice in a name list.
    DuplicateFlag { name: String },
    /// Strict construction rejected a value that is not a single bit.
    InvalidFlagValue { name: String, value: u128 },
    /// Strict construction found two names mapped to the same bit.
    DuplicateFlagBit {
        bit: u128,
        first: String,
        second: String,
    },
}

impl FlagError {
    pub(crate) fn unknown_flag(name: &str) -> Self {
        FlagError::UnknownFlag {
            name: name.to_string(),
        }
    }

    /// True for [`FlagError::UnknownFlag`].
    pub fn is_unknown_flag(&self) -> bool {
        matches!(self, FlagError::UnknownFlag { .. })
    }

    /// True for [`FlagError::UnknownFlagBit`].
    pub fn is_unknown_flag_bit(&self) -> bool {
        matches!(self, FlagError::UnknownFlagBit { .. })
    }

    /// True for errors raised while building a flag set rather than using one.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            FlagError::TooManyFlags { .. }
                | FlagError::DuplicateFlag { .. }
                | FlagError::InvalidFlagValue { .. }
                | FlagError::DuplicateFlagBit { .. }
        )
    }
}

impl fmt::Display for FlagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagError::UnknownFlag { name } => write!(f, "unknown flag: {}", name),
            FlagError::UnknownFlagBit { bit } => write!(f, "invalid flag bit: {:08b}", bit),
            FlagError::TooManyFlags { count, capacity } => {
                write!(
                    f,
                    "too many flags: {} names for a {}-bit flag set",
                    count, capacity
                )
            }
            FlagError::DuplicateFlag { name } => write!(f, "duplicate flag name: {}", name),
            FlagError::InvalidFlagValue { name, value } => {
                write!(
                    f,
                    "flag {} has value {:08b}, expected exactly one set bit",
                    name, value
                )
            }
            FlagError::DuplicateFlagBit { bit, first, second } => {
                write!(
                    f,
                    "flags {} and {} share bit {:08b}",
                    first, second, bit
                )
            }
        }
    }
}

impl StdError for FlagError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_flag_message() {
        let err = FlagError::unknown_flag("verbose");
        assert_eq!(err.to_string(), "unknown flag: verbose");
        assert!(err.is_unknown_flag());
        assert!(!err.is_unknown_flag_bit());
        assert!(!err.is_construction_error());
    }

    #[test]
    fn test_unknown_flag_bit_message_pads_to_eight_digits() {
        let err = FlagError::UnknownFlagBit { bit: 8 };
        assert_eq!(err.to_string(), "invalid flag bit: 00001000");
        assert!(err.is_unknown_flag_bit());
    }

    #[test]
    fn test_unknown_flag_bit_message_wide_bit() {
        let err = FlagError::UnknownFlagBit { bit: 1 << 9 };
        assert_eq!(err.to_string(), "invalid flag bit: 1000000000");
    }

    #[test]
    fn test_construction_errors() {
        let errors = [
            FlagError::TooManyFlags {
                count: 65,
                capacity: 64,
            },
            FlagError::DuplicateFlag {
                name: "a".to_string(),
            },
            FlagError::InvalidFlagValue {
                name: "a".to_string(),
                value: 3,
            },
            FlagError::DuplicateFlagBit {
                bit: 1,
                first: "a".to_string(),
                second: "b".to_string(),
            },
        ];
        for err in &errors {
            assert!(err.is_construction_error(), "{err}");
        }
    }

    #[test]
    fn test_invalid_value_message() {
        let err = FlagError::InvalidFlagValue {
            name: "rw".to_string(),
            value: 6,
        };
        assert_eq!(
            err.to_string(),
            "flag rw has value 00000110, expected exactly one set bit"
        );
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn StdError> = Box::new(FlagError::TooManyFlags {
            count: 9,
            capacity: 8,
        });
        assert_eq!(err.to_string(), "too many flags: 9 names for a 8-bit flag set");
    }
}
