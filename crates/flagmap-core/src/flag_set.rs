//! Named bit flags backed by a single unsigned integer.
//!
//! A [`FlagSet`] pairs an accumulated value with an immutable table of
//! flag definitions (name to single-bit value). Flags are set, cleared,
//! toggled and queried by name, or resolved from a raw integer.

use std::collections::HashMap;
use std::fmt;

use crate::bits::FlagBits;
use crate::config::{DisplayWidth, FlagSetOptions};
use crate::error::{FlagError, Result};

/// A set of named single-bit flags stored in one integer of type `T`.
///
/// The definitions are fixed at construction. Every mutating operation is
/// gated by a name lookup, or in the case of [`set_by_value`], by resolving
/// each bit of the input to a defined flag, so the public API never sets a
/// bit that has no name.
///
/// # Example
///
/// ```
/// use flagmap_core::FlagSet;
///
/// let mut perms = FlagSet::from_names(["read", "write", "exec"]).unwrap();
/// perms.set_by_name("read").unwrap();
/// perms.set_by_name("exec").unwrap();
///
/// assert_eq!(perms.value(), 0b101);
/// assert!(perms.has_by_name("exec").unwrap());
/// assert!(!perms.has_all_by_name(["read", "write"]).unwrap());
/// assert_eq!(perms.to_string(), "00000101");
/// ```
///
/// [`set_by_value`]: FlagSet::set_by_value
#[derive(Debug, Clone)]
pub struct FlagSet<T> {
    flags: T,
    flag_map: HashMap<String, T>,
    /// Single-bit definitions keyed by bit, for value-to-name resolution.
    by_bit: HashMap<T, String>,
    options: FlagSetOptions,
}

impl FlagSet<u64> {
    /// Build a 64-bit flag set assigning `1, 2, 4, ...` to `names` in order.
    ///
    /// Fails with [`FlagError::TooManyFlags`] for more than 64 names and with
    /// [`FlagError::DuplicateFlag`] if a name repeats.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_names_in(names)
    }
}

impl<T: FlagBits> FlagSet<T> {
    /// Build a flag set from name/value pairs without validating the values.
    ///
    /// Values that are zero or have several bits set are kept as
    /// definitions but can never be resolved by [`set_by_value`]. Use
    /// [`from_map_strict`] to reject them up front.
    ///
    /// [`set_by_value`]: FlagSet::set_by_value
    /// [`from_map_strict`]: FlagSet::from_map_strict
    #[must_use]
    pub fn from_map<I, K>(flags: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        let flag_map = collect_map(flags);
        Self::build(flag_map, FlagSetOptions::default())
    }

    /// Build a flag set from name/value pairs, requiring every value to be a
    /// distinct single bit.
    pub fn from_map_strict<I, K>(flags: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        Self::with_options(flags, FlagSetOptions::strict())
    }

    /// Build a flag set from name/value pairs with explicit options.
    pub fn with_options<I, K>(flags: I, options: FlagSetOptions) -> Result<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        let flag_map = collect_map(flags);
        if options.validation.is_strict() {
            validate_definitions(&flag_map)?;
        }
        Ok(Self::build(flag_map, options))
    }

    /// Build a flag set of any width assigning ascending bits to `names`.
    pub fn from_names_in<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() > T::BITS as usize {
            tracing::debug!(
                count = names.len(),
                capacity = T::BITS,
                "Rejecting flag names past type width"
            );
            return Err(FlagError::TooManyFlags {
                count: names.len(),
                capacity: T::BITS,
            });
        }

        // The length check above guarantees a bit for every name.
        let mut flag_map = HashMap::with_capacity(names.len());
        for (bit, name) in (0..T::BITS).filter_map(T::bit).zip(names) {
            if flag_map.contains_key(&name) {
                return Err(FlagError::DuplicateFlag { name });
            }
            flag_map.insert(name, bit);
        }
        Ok(Self::build(flag_map, FlagSetOptions::default()))
    }

    fn build(flag_map: HashMap<String, T>, options: FlagSetOptions) -> Self {
        // Sorted so that a bit shared by several names (permissive mode)
        // always resolves to the same name.
        let mut entries: Vec<(&String, &T)> = flag_map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut by_bit = HashMap::with_capacity(entries.len());
        for (name, &value) in entries {
            if value.is_single_bit() {
                by_bit.entry(value).or_insert_with(|| name.clone());
            }
        }

        tracing::trace!(
            flags = flag_map.len(),
            width = T::BITS,
            strict = options.validation.is_strict(),
            "Built flag set"
        );

        Self {
            flags: T::ZERO,
            flag_map,
            by_bit,
            options,
        }
    }

    /// The raw accumulated value.
    #[must_use]
    pub fn value(&self) -> T {
        self.flags
    }

    /// Options this set was built with.
    #[must_use]
    pub fn options(&self) -> FlagSetOptions {
        self.options
    }

    /// Number of defined flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flag_map.len()
    }

    /// True if no flags are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flag_map.is_empty()
    }

    /// True if `name` is a defined flag.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.flag_map.contains_key(name)
    }

    /// The value defined for `name`, if any.
    #[must_use]
    pub fn flag_value(&self, name: &str) -> Option<T> {
        self.flag_map.get(name).copied()
    }

    /// Iterate over all defined flag names in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.flag_map.keys().map(String::as_str)
    }

    /// Iterate over all `(name, value)` definitions in unspecified order.
    pub fn definitions(&self) -> impl Iterator<Item = (&str, T)> {
        self.flag_map
            .iter()
            .map(|(name, &value)| (name.as_str(), value))
    }

    fn lookup(&self, name: &str) -> Result<T> {
        self.flag_map
            .get(name)
            .copied()
            .ok_or_else(|| FlagError::unknown_flag(name))
    }

    /// Definitions of `names` in argument order. Fails on the first unknown name.
    fn resolve_all<I, S>(&self, names: I) -> Result<Vec<T>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.lookup(name.as_ref()))
            .collect()
    }

    fn is_set(&self, flag: T) -> bool {
        self.flags & flag != T::ZERO
    }

    /// Set the flag called `name`.
    pub fn set_by_name(&mut self, name: &str) -> Result<()> {
        let flag = self.lookup(name)?;
        self.flags |= flag;
        Ok(())
    }

    /// Clear the flag called `name`.
    pub fn clear_by_name(&mut self, name: &str) -> Result<()> {
        let flag = self.lookup(name)?;
        self.flags &= !flag;
        Ok(())
    }

    /// Flip the flag called `name`.
    pub fn toggle_by_name(&mut self, name: &str) -> Result<()> {
        let flag = self.lookup(name)?;
        self.flags ^= flag;
        Ok(())
    }

    /// Check whether the flag called `name` is set.
    pub fn has_by_name(&self, name: &str) -> Result<bool> {
        let flag = self.lookup(name)?;
        Ok(self.is_set(flag))
    }

    /// Check whether any bit of `value` is set.
    ///
    /// This is a raw intersection test. Bits without a definition are not
    /// an error here, unlike the by-name queries.
    #[must_use]
    pub fn has_by_value(&self, value: T) -> bool {
        self.flags & value != T::ZERO
    }

    /// Check whether at least one of `names` is set.
    ///
    /// Every name is resolved before the test, so an unknown name fails
    /// with [`FlagError::UnknownFlag`] wherever it appears. An empty list
    /// yields `false`.
    pub fn has_any_by_name<I, S>(&self, names: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let flags = self.resolve_all(names)?;
        Ok(flags.into_iter().any(|flag| self.is_set(flag)))
    }

    /// Check whether every one of `names` is set.
    ///
    /// Names are resolved eagerly as in [`has_any_by_name`]. An empty list
    /// yields `true`.
    ///
    /// [`has_any_by_name`]: FlagSet::has_any_by_name
    pub fn has_all_by_name<I, S>(&self, names: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let flags = self.resolve_all(names)?;
        Ok(flags.into_iter().all(|flag| self.is_set(flag)))
    }

    /// Set every flag whose bit appears in `value`.
    ///
    /// Bits are examined from least significant upward. If any bit has no
    /// single-bit definition the call fails with
    /// [`FlagError::UnknownFlagBit`] for the lowest such bit and the set is
    /// left unchanged.
    pub fn set_by_value(&mut self, value: T) -> Result<()> {
        if let Some(bit) = value
            .single_bits()
            .find(|bit| !self.by_bit.contains_key(bit))
        {
            tracing::debug!(value = %value, bit = %bit, "Rejecting value with undefined bit");
            return Err(FlagError::UnknownFlagBit { bit: bit.to_u128() });
        }
        self.flags |= value;
        tracing::trace!(value = %value, flags = %self.flags, "Applied flags by value");
        Ok(())
    }

    /// Clear every bit of the accumulated value.
    pub fn clear_all(&mut self) {
        self.flags = T::ZERO;
    }

    /// Set every defined flag.
    pub fn set_all(&mut self) {
        for &value in self.flag_map.values() {
            self.flags |= value;
        }
    }

    /// All definitions whose bit is currently set, in unspecified order.
    #[must_use]
    pub fn active_flags(&self) -> HashMap<String, T> {
        self.flag_map
            .iter()
            .filter(|&(_, &flag)| self.flags & flag != T::ZERO)
            .map(|(name, &flag)| (name.clone(), flag))
            .collect()
    }

    /// Names of the active flags ordered by value, then name.
    #[must_use]
    pub fn active_names(&self) -> Vec<&str> {
        let mut active: Vec<(&str, T)> = self
            .flag_map
            .iter()
            .filter(|&(_, &flag)| self.flags & flag != T::ZERO)
            .map(|(name, &flag)| (name.as_str(), flag))
            .collect();
        active.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        active.into_iter().map(|(name, _)| name).collect()
    }

    /// Render the accumulated value as zero-padded binary.
    #[must_use]
    pub fn render(&self, width: DisplayWidth) -> String {
        format!("{:0width$b}", self.flags, width = width.digits(T::BITS))
    }
}

impl<T: FlagBits> fmt::Display for FlagSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(self.options.display))
    }
}

/// Two flag sets are equal when they hold the same value and definitions.
impl<T: FlagBits> PartialEq for FlagSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.flags == other.flags && self.flag_map == other.flag_map
    }
}

impl<T: FlagBits> Eq for FlagSet<T> {}

fn collect_map<I, K, T>(flags: I) -> HashMap<String, T>
where
    I: IntoIterator<Item = (K, T)>,
    K: Into<String>,
{
    flags
        .into_iter()
        .map(|(name, value)| (name.into(), value))
        .collect()
}

fn validate_definitions<T: FlagBits>(flag_map: &HashMap<String, T>) -> Result<()> {
    let mut entries: Vec<(&String, &T)> = flag_map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut seen: HashMap<T, &String> = HashMap::with_capacity(entries.len());
    for (name, &value) in entries {
        if !value.is_single_bit() {
            tracing::debug!(flag = %name, value = %value, "Rejecting non single-bit flag value");
            return Err(FlagError::InvalidFlagValue {
                name: name.clone(),
                value: value.to_u128(),
            });
        }
        if let Some(first) = seen.insert(value, name) {
            tracing::debug!(first = %first, second = %name, "Rejecting shared flag bit");
            return Err(FlagError::DuplicateFlagBit {
                bit: value.to_u128(),
                first: first.clone(),
                second: name.clone(),
            });
        }
    }
    Ok(())
}
