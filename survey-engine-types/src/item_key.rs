use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The unique key of an item within one survey definition, e.g. `"root.3"`.
///
/// Keys are opaque to the engine: by convention they are dot-separated paths
/// mirroring the tree (`"root.group.item"`), but only equality matters for
/// `follows` resolution.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(String);

impl ItemKey {
    /// Create a new key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ItemKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for ItemKey {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl PartialEq<str> for ItemKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ItemKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn display() {
        let key = ItemKey::new("root.3");
        assert_eq!(format!("{key}"), "root.3");
    }

    #[test]
    fn from_str() {
        let key: ItemKey = "root.group.1".into();
        assert_eq!(key.as_str(), "root.group.1");
        assert_eq!(key, "root.group.1");
    }

    #[test]
    fn lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(ItemKey::new("root.1"), 1);
        assert_eq!(map.get("root.1"), Some(&1));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ItemKey::new("root.1")).unwrap();
        assert_eq!(json, "\"root.1\"");
    }
}
