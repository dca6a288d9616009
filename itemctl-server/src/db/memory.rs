//! In-memory item store
//!
//! Same contract as [`PgItemStore`](super::PgItemStore), kept in a
//! `BTreeMap` so listing order is by name. Nothing survives a restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::store::{ItemStore, StoreError};
use crate::models::{Item, ItemNumber, NewItem};

#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: RwLock<BTreeMap<String, i32>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing items
    pub fn with_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Item>,
    {
        let map = items
            .into_iter()
            .map(|item| (item.name, item.number))
            .collect();
        Self {
            items: RwLock::new(map),
        }
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .map(|(name, number)| Item {
                name: name.clone(),
                number: *number,
            })
            .collect())
    }

    async fn insert(&self, item: &NewItem) -> Result<Option<Item>, StoreError> {
        let mut items = self.items.write().await;
        if items.contains_key(item.name.as_str()) {
            return Ok(None);
        }

        items.insert(item.name.as_str().to_owned(), item.number.get());
        Ok(Some(Item {
            name: item.name.as_str().to_owned(),
            number: item.number.get(),
        }))
    }

    async fn delete(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.items.write().await.remove(name).is_some())
    }

    async fn update_number(
        &self,
        name: &str,
        number: ItemNumber,
    ) -> Result<Option<Item>, StoreError> {
        let mut items = self.items.write().await;
        Ok(items.get_mut(name).map(|slot| {
            *slot = number.get();
            Item {
                name: name.to_owned(),
                number: *slot,
            }
        }))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemName;

    fn new_item(name: &str, number: i32) -> NewItem {
        NewItem::new(ItemName::new(name).unwrap(), ItemNumber::new(number))
    }

    #[tokio::test]
    async fn insert_rejects_existing_name() {
        let store = MemoryItemStore::new();

        assert!(store.insert(&new_item("alice", 5)).await.unwrap().is_some());
        assert!(store.insert(&new_item("alice", 9)).await.unwrap().is_none());

        let items = store.list().await.unwrap();
        assert_eq!(items, vec![Item { name: "alice".into(), number: 5 }]);
    }

    #[tokio::test]
    async fn lists_in_name_order() {
        let store = MemoryItemStore::with_items([
            Item { name: "carol".into(), number: 3 },
            Item { name: "alice".into(), number: 1 },
            Item { name: "bob".into(), number: 2 },
        ]);

        let names: Vec<_> = store.list().await.unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["alice", "bob", "carol"]);
    }

    #[tokio::test]
    async fn update_touches_only_the_target() {
        let store = MemoryItemStore::with_items([
            Item { name: "alice".into(), number: 1 },
            Item { name: "bob".into(), number: 2 },
        ]);

        let updated = store.update_number("alice", ItemNumber::new(10)).await.unwrap();
        assert_eq!(updated, Some(Item { name: "alice".into(), number: 10 }));
        assert_eq!(store.update_number("zed", ItemNumber::new(1)).await.unwrap(), None);

        let items = store.list().await.unwrap();
        assert_eq!(
            items,
            vec![
                Item { name: "alice".into(), number: 10 },
                Item { name: "bob".into(), number: 2 },
            ]
        );
    }

    #[tokio::test]
    async fn delete_reports_whether_removed() {
        let store = MemoryItemStore::with_items([Item { name: "alice".into(), number: 1 }]);

        assert!(store.delete("alice").await.unwrap());
        assert!(!store.delete("alice").await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }
}
