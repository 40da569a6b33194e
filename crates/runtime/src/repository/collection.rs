//! JSON-array collections persisted under a single store key.
//!
//! Loading is fail-soft: a missing key, a store failure or a malformed blob
//! all produce an empty collection with a warning. Saving is fire-and-forget
//! from the repositories' point of view; failures are logged and the
//! in-memory list stays authoritative.

use std::cmp::Ordering;
use std::sync::Arc;

use keeper_core::catalog::name_order;
use keeper_core::{CombatRoster, Fighter, Spell, ValidationError, Weapon};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::confirm::{Confirmation, Deletion};
use super::{RecordStore, Result};
use crate::error::KeeperError;

/// Decode the array stored under `key`, or an empty list.
pub fn load_collection<T: DeserializeOwned>(store: &dyn RecordStore, key: &str) -> Vec<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(error) => {
            tracing::warn!(key, %error, "failed to read collection, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(error) => {
            tracing::warn!(key, %error, "malformed collection, starting empty");
            Vec::new()
        }
    }
}

/// Encode `items` as a JSON array and store it under `key`.
pub fn save_collection<T: Serialize>(store: &dyn RecordStore, key: &str, items: &[T]) -> Result<()> {
    let raw = serde_json::to_string(items)?;
    store.set(key, &raw)
}

/// Records addressed by a display name.
pub(crate) trait Named {
    fn name(&self) -> &str;
}

impl Named for Fighter {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Spell {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Weapon {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for CombatRoster {
    fn name(&self) -> &str {
        &self.name
    }
}

/// In-memory list mirrored to one store key.
pub(crate) struct Collection<T> {
    store: Arc<dyn RecordStore>,
    key: &'static str,
    kind: &'static str,
    sorted: bool,
    items: Vec<T>,
}

impl<T> Collection<T>
where
    T: Named + Serialize + DeserializeOwned,
{
    /// Load a list kept in case-insensitive name order.
    pub(crate) fn sorted(store: Arc<dyn RecordStore>, key: &'static str, kind: &'static str) -> Self {
        let mut collection = Self::load(store, key, kind, true);
        collection.sort();
        collection
    }

    /// Load a list kept in insertion order.
    pub(crate) fn unsorted(
        store: Arc<dyn RecordStore>,
        key: &'static str,
        kind: &'static str,
    ) -> Self {
        Self::load(store, key, kind, false)
    }

    fn load(store: Arc<dyn RecordStore>, key: &'static str, kind: &'static str, sorted: bool) -> Self {
        let items: Vec<T> = load_collection(store.as_ref(), key);
        tracing::debug!(key, count = items.len(), "loaded {kind} collection");
        Self {
            store,
            key,
            kind,
            sorted,
            items,
        }
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn get(&self, index: usize) -> std::result::Result<&T, ValidationError> {
        self.items
            .get(index)
            .ok_or_else(|| ValidationError::out_of_range(self.kind, index, self.items.len()))
    }

    /// Case-insensitive lookup by name.
    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.items
            .iter()
            .position(|item| item.name().to_lowercase() == wanted)
    }

    /// Insert, persist and return the item's new position.
    pub(crate) fn insert(&mut self, item: T) -> usize {
        let index = if self.sorted {
            let index = self
                .items
                .partition_point(|existing| name_order(existing.name(), item.name()) != Ordering::Greater);
            self.items.insert(index, item);
            index
        } else {
            self.items.push(item);
            self.items.len() - 1
        };
        self.persist();
        index
    }

    /// Mutate the item at `index`, then restore order and persist.
    ///
    /// Returns the item's position after re-sorting.
    pub(crate) fn modify<F>(
        &mut self,
        index: usize,
        change: F,
    ) -> std::result::Result<usize, ValidationError>
    where
        F: FnOnce(&mut T) -> std::result::Result<(), ValidationError>,
    {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or_else(|| ValidationError::out_of_range(self.kind, index, len))?;
        change(item)?;

        let index = if self.sorted {
            let item = self.items.remove(index);
            let index = self
                .items
                .partition_point(|existing| name_order(existing.name(), item.name()) != Ordering::Greater);
            self.items.insert(index, item);
            index
        } else {
            index
        };
        self.persist();
        Ok(index)
    }

    /// Replace the item at `index` in place.
    pub(crate) fn replace(&mut self, index: usize, item: T) -> std::result::Result<usize, ValidationError> {
        self.modify(index, |slot| {
            *slot = item;
            Ok(())
        })
    }

    pub(crate) fn remove(&mut self, index: usize) -> std::result::Result<T, ValidationError> {
        if index >= self.items.len() {
            return Err(ValidationError::out_of_range(self.kind, index, self.items.len()));
        }
        let item = self.items.remove(index);
        self.persist();
        Ok(item)
    }

    /// Describe the deletion of the item at `index` without performing it.
    pub(crate) fn propose_delete(
        &self,
        index: usize,
        prompt: impl FnOnce(&str) -> String,
    ) -> std::result::Result<Confirmation<Deletion>, ValidationError> {
        let name = self.get(index)?.name().to_string();
        let prompt = prompt(&name);
        Ok(Confirmation::new(Deletion { index, name }, prompt))
    }

    /// Perform a proposed deletion if the list still matches the proposal.
    pub(crate) fn confirm_delete(
        &mut self,
        confirmation: Confirmation<Deletion>,
    ) -> std::result::Result<T, KeeperError> {
        let Deletion { index, name } = confirmation.into_subject();
        let unchanged = self
            .items
            .get(index)
            .is_some_and(|item| item.name() == name);
        if !unchanged {
            tracing::warn!(kind = self.kind, index, %name, "stale deletion rejected");
            return Err(KeeperError::stale(name));
        }
        Ok(self.remove(index)?)
    }

    fn sort(&mut self) {
        self.items.sort_by(|a, b| name_order(a.name(), b.name()));
    }

    /// Write the whole list back. Failures are logged, never returned.
    pub(crate) fn persist(&self) {
        if let Err(error) = save_collection(self.store.as_ref(), self.key, &self.items) {
            tracing::error!(key = self.key, %error, "failed to save {} collection", self.kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryStore;
    use keeper_core::Cost;

    fn spell(name: &str) -> Spell {
        Spell::new(name, Cost::default(), "1 round").unwrap()
    }

    #[test]
    fn malformed_blob_loads_empty() {
        let store = InMemoryStore::with_values([("CoC7e_UserSpells", "{not json")]);
        let spells: Vec<Spell> = load_collection(&store, "CoC7e_UserSpells");
        assert!(spells.is_empty());
    }

    #[test]
    fn missing_key_loads_empty() {
        let store = InMemoryStore::new();
        let weapons: Vec<Weapon> = load_collection(&store, "CoC7e_UserWeapons");
        assert!(weapons.is_empty());
    }

    #[test]
    fn sorted_insert_keeps_case_insensitive_order() {
        let store: Arc<dyn RecordStore> = Arc::new(InMemoryStore::new());
        let mut spells = Collection::<Spell>::sorted(store.clone(), "CoC7e_UserSpells", "spell");

        spells.insert(spell("shrivelling"));
        spells.insert(spell("Bless Blade"));
        let index = spells.insert(spell("Contact Deity"));

        assert_eq!(index, 1);
        let names: Vec<&str> = spells.items().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Bless Blade", "Contact Deity", "shrivelling"]);

        let reloaded: Vec<Spell> = load_collection(store.as_ref(), "CoC7e_UserSpells");
        assert_eq!(reloaded.len(), 3);
    }

    #[test]
    fn unsorted_insert_appends() {
        let store: Arc<dyn RecordStore> = Arc::new(InMemoryStore::new());
        let mut spells = Collection::<Spell>::unsorted(store, "k", "spell");
        spells.insert(spell("b"));
        assert_eq!(spells.insert(spell("a")), 1);
    }

    #[test]
    fn modify_resorts_after_rename() {
        let store: Arc<dyn RecordStore> = Arc::new(InMemoryStore::new());
        let mut spells = Collection::<Spell>::sorted(store, "k", "spell");
        spells.insert(spell("Alpha"));
        spells.insert(spell("Beta"));

        let index = spells
            .modify(0, |s| {
                s.name = "Zeta".to_string();
                Ok(())
            })
            .unwrap();
        assert_eq!(index, 1);
        assert_eq!(spells.position("zeta"), Some(1));
    }

    #[test]
    fn stale_deletion_mutates_nothing() {
        let store: Arc<dyn RecordStore> = Arc::new(InMemoryStore::new());
        let mut spells = Collection::<Spell>::sorted(store, "k", "spell");
        spells.insert(spell("Beta"));

        let confirmation = spells
            .propose_delete(0, |name| format!("delete {name}?"))
            .unwrap();
        assert_eq!(confirmation.prompt(), "delete Beta?");

        spells.insert(spell("Alpha"));
        assert!(matches!(
            spells.confirm_delete(confirmation),
            Err(KeeperError::StaleConfirmation { .. })
        ));
        assert_eq!(spells.items().len(), 2);
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let store: Arc<dyn RecordStore> = Arc::new(InMemoryStore::new());
        let mut spells = Collection::<Spell>::sorted(store, "k", "spell");
        assert_eq!(
            spells.remove(0),
            Err(ValidationError::out_of_range("spell", 0, 0))
        );
    }
}
