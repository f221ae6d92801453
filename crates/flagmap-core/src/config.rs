//! Construction options for [`FlagSet`](crate::FlagSet).

/// How flag definitions are checked when a flag set is built from a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Accept any value. Zero or multi-bit values are stored but never
    /// resolved by `set_by_value`.
    #[default]
    Permissive,
    /// Every value must be a single bit and no bit may be shared by two names.
    Strict,
}

impl Validation {
    /// Check if definitions must be validated before the set is built.
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Validation::Strict)
    }
}

/// Width used when rendering the accumulated value as binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayWidth {
    /// Zero-pad to at least this many digits. Wider values print in full.
    Fixed(usize),
    /// Zero-pad to the bit width of the backing integer.
    TypeWidth,
}

impl Default for DisplayWidth {
    fn default() -> Self {
        DisplayWidth::Fixed(8)
    }
}

impl DisplayWidth {
    /// Minimum number of digits for a flag set backed by a `bits`-wide integer.
    #[must_use]
    pub const fn digits(self, bits: u32) -> usize {
        match self {
            DisplayWidth::Fixed(n) => n,
            DisplayWidth::TypeWidth => bits as usize,
        }
    }
}

/// Options applied when a flag set is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlagSetOptions {
    /// Definition checks performed at construction.
    pub validation: Validation,
    /// Width used by `Display`.
    pub display: DisplayWidth,
}

impl FlagSetOptions {
    /// Create options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with strict validation enabled.
    #[must_use]
    pub fn strict() -> Self {
        Self::new().validation(Validation::Strict)
    }

    /// Set the validation mode.
    #[must_use]
    pub fn validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Set the display width.
    #[must_use]
    pub fn display(mut self, display: DisplayWidth) -> Self {
        self.display = display;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = FlagSetOptions::default();
        assert_eq!(opts.validation, Validation::Permissive);
        assert_eq!(opts.display, DisplayWidth::Fixed(8));
        assert!(!opts.validation.is_strict());
    }

    #[test]
    fn test_builder() {
        let opts = FlagSetOptions::new()
            .validation(Validation::Strict)
            .display(DisplayWidth::TypeWidth);
        assert!(opts.validation.is_strict());
        assert_eq!(opts.display, DisplayWidth::TypeWidth);
        assert_eq!(FlagSetOptions::strict().validation, Validation::Strict);
    }

    #[test]
    fn test_display_digits() {
        assert_eq!(DisplayWidth::Fixed(8).digits(64), 8);
        assert_eq!(DisplayWidth::Fixed(4).digits(8), 4);
        assert_eq!(DisplayWidth::TypeWidth.digits(16), 16);
    }
}
