//! Type-safe identifier for items.
//!
//! Item IDs are assigned by the store on insert (a `PostgreSQL` identity
//! column), are strictly increasing, and are never reused. Application
//! code never invents one except when parsing a request path.

use core::num::ParseIntError;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Unique, store-assigned identifier of an [`Item`](crate::Item).
///
/// Serializes as a bare JSON number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct ItemId(#[ts(type = "number")] pub i64);

impl ItemId {
    /// Return the inner integer value.
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ItemId> for i64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&ItemId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn parses_integer_paths() {
        assert_eq!("7".parse::<ItemId>().unwrap(), ItemId(7));
        assert!("abc".parse::<ItemId>().is_err());
        assert!("1.5".parse::<ItemId>().is_err());
        assert!("".parse::<ItemId>().is_err());
    }
}
