//! Shared flag definitions for flagmap integration tests.

#![allow(dead_code)]

use flagmap::prelude::*;

/// Unix-style permission bits.
pub const PERMISSIONS: [&str; 3] = ["read", "write", "exec"];

/// The `x`/`y`/`z` definitions used by the value-resolution scenarios.
pub fn xyz() -> FlagSet<u64> {
    FlagSet::from_map([("x", 1u64), ("y", 2), ("z", 4)])
}

/// Twenty-three flags named `flag1..=flag23`, one per bit.
pub fn wide_map() -> Vec<(String, u32)> {
    (0..23).map(|i| (format!("flag{}", i + 1), 1u32 << i)).collect()
}

/// Every name defined in `fs`, sorted.
pub fn sorted_names<T: FlagBits>(fs: &FlagSet<T>) -> Vec<String> {
    let mut names: Vec<String> = fs.names().map(str::to_string).collect();
    names.sort();
    names
}

/// Names whose bit is set in `value`, computed independently of the set.
pub fn expected_active<T: FlagBits>(fs: &FlagSet<T>, value: T) -> Vec<String> {
    let mut names: Vec<String> = fs
        .definitions()
        .filter(|&(_, flag)| value & flag != T::ZERO)
        .map(|(name, _)| name.to_string())
        .collect();
    names.sort();
    names
}
