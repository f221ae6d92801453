//! Serde support for [`FlagSet`].
//!
//! A flag set serializes as its accumulated value plus its definitions:
//!
//! ```json
//! { "value": 5, "flags": { "read": 1, "write": 2, "exec": 4 } }
//! ```
//!
//! Deserialization rebuilds the set with strict validation and then applies
//! `value` through `set_by_value`, so malformed definitions or bits without a
//! name are rejected.

use std::collections::{BTreeMap, HashMap};

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::bits::FlagBits;
use crate::flag_set::FlagSet;

impl<T> Serialize for FlagSet<T>
where
    T: FlagBits + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // BTreeMap keeps the output stable across runs.
        let flags: BTreeMap<&str, T> = self.definitions().collect();

        let mut state = serializer.serialize_struct("FlagSet", 2)?;
        state.serialize_field("value", &self.value())?;
        state.serialize_field("flags", &flags)?;
        state.end()
    }
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct Snapshot<T> {
    #[serde(default)]
    value: Option<T>,
    flags: HashMap<String, T>,
}

impl<'de, T> Deserialize<'de> for FlagSet<T>
where
    T: FlagBits + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = Snapshot::<T>::deserialize(deserializer)?;
        let mut set = FlagSet::from_map_strict(snapshot.flags).map_err(de::Error::custom)?;
        if let Some(value) = snapshot.value {
            set.set_by_value(value).map_err(de::Error::custom)?;
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_shape() {
        let mut fs = FlagSet::from_names(["read", "write", "exec"]).unwrap();
        fs.set_by_name("read").unwrap();
        fs.set_by_name("exec").unwrap();

        let value = serde_json::to_value(&fs).unwrap();
        assert_eq!(
            value,
            json!({ "value": 5, "flags": { "exec": 4, "read": 1, "write": 2 } })
        );
    }

    #[test]
    fn test_serialize_is_sorted_by_name() {
        let fs = FlagSet::from_map([("b", 1u8), ("a", 2)]);
        let text = serde_json::to_string(&fs).unwrap();
        assert_eq!(text, r#"{"value":0,"flags":{"a":2,"b":1}}"#);
    }

    #[test]
    fn test_deserialize_restores_value() {
        let fs: FlagSet<u16> =
            serde_json::from_str(r#"{"value": 6, "flags": {"x": 1, "y": 2, "z": 4}}"#).unwrap();
        assert_eq!(fs.value(), 6);
        assert_eq!(fs.active_names(), vec!["y", "z"]);
        assert!(fs.options().validation.is_strict());
    }

    #[test]
    fn test_deserialize_value_defaults_to_zero() {
        let fs: FlagSet<u8> = serde_json::from_str(r#"{"flags": {"a": 1}}"#).unwrap();
        assert_eq!(fs.value(), 0);
    }

    #[test]
    fn test_deserialize_rejects_unknown_bit() {
        let err = serde_json::from_str::<FlagSet<u32>>(r#"{"value": 8, "flags": {"x": 1}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid flag bit: 00001000"));
    }

    #[test]
    fn test_deserialize_rejects_multi_bit_definition() {
        let err = serde_json::from_str::<FlagSet<u8>>(r#"{"value": 0, "flags": {"rw": 3}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("expected exactly one set bit"));
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_value() {
        let result = serde_json::from_str::<FlagSet<u8>>(r#"{"value": 0, "flags": {"big": 256}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip_preserves_equality() {
        let mut fs = FlagSet::from_map([("lo", 1u64), ("hi", 1 << 40)]);
        fs.set_by_name("hi").unwrap();

        let text = serde_json::to_string(&fs).unwrap();
        let back: FlagSet<u64> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, fs);
    }
}
