use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Store symbol for energy.
pub const ENERGY: &str = "energy";
/// Store symbol for power.
pub const POWER: &str = "power";

/// The contents of a store, keyed by resource symbol.
///
/// Entries keep the order they were reported in, which is also the order
/// content listings draw them in. (De)serializes as a map, the same shape
/// as a game object's `store`.
///
/// # Example
/// ```rust
/// use screeps_svg::snapshot::Store;
///
/// let store: Store = [("energy", 1000), ("H", 250)].into_iter().collect();
/// assert_eq!(store.get("energy"), 1000);
/// assert_eq!(store.get("power"), 0);
/// assert_eq!(store.total(), 1250);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    entries: Vec<(String, u32)>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the amount held of a resource, replacing any previous amount.
    pub fn insert(&mut self, resource: impl Into<String>, amount: u32) {
        let resource = resource.into();
        match self.entries.iter_mut().find(|(r, _)| *r == resource) {
            Some(entry) => entry.1 = amount,
            None => self.entries.push((resource, amount)),
        }
    }

    /// Amount held of a resource, 0 if absent.
    pub fn get(&self, resource: &str) -> u32 {
        self.entries
            .iter()
            .find(|(r, _)| r == resource)
            .map(|(_, amount)| *amount)
            .unwrap_or(0)
    }

    /// Sum of every resource held.
    pub fn total(&self) -> u32 {
        self.entries
            .iter()
            .fold(0u32, |sum, (_, amount)| sum.saturating_add(*amount))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(r, amount)| (r.as_str(), *amount))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Store {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut store = Store::new();
        for (resource, amount) in iter {
            store.insert(resource, amount);
        }
        store
    }
}

impl Serialize for Store {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (resource, amount) in &self.entries {
            map.serialize_entry(resource, amount)?;
        }
        map.end()
    }
}

struct StoreVisitor;

impl<'de> Visitor<'de> for StoreVisitor {
    type Value = Store;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of resource symbols to amounts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut store = Store::new();
        while let Some((resource, amount)) = access.next_entry::<String, u32>()? {
            store.insert(resource, amount);
        }
        Ok(store)
    }
}

impl<'de> Deserialize<'de> for Store {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StoreVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_existing_amount() {
        let mut store = Store::new();
        store.insert(ENERGY, 10);
        store.insert("H", 5);
        store.insert(ENERGY, 20);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(ENERGY), 20);
        assert_eq!(store.iter().next(), Some((ENERGY, 20)));
    }

    #[test]
    fn deserializes_in_reported_order() {
        let store: Store = serde_json::from_str(r#"{"power": 5, "energy": 100, "XGH2O": 30}"#).unwrap();
        let order: Vec<&str> = store.iter().map(|(r, _)| r).collect();
        assert_eq!(order, vec!["power", "energy", "XGH2O"]);
        assert_eq!(store.total(), 135);
    }

    #[test]
    fn serializes_as_map() {
        let store: Store = [("energy", 1), ("O", 2)].into_iter().collect();
        assert_eq!(serde_json::to_string(&store).unwrap(), r#"{"energy":1,"O":2}"#);
    }

    #[test]
    fn total_saturates() {
        let store: Store = [("energy", u32::MAX), ("H", 1)].into_iter().collect();
        assert_eq!(store.total(), u32::MAX);
    }
}
