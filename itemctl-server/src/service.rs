//! Item service - validation and outcome mapping over an [`ItemStore`]
//!
//! Every operation is a single store call. Store failures never escape as
//! raw errors; they become [`ServiceError::StoreUnavailable`] tagged with the
//! operation, and no operation is retried.

use std::sync::Arc;

use crate::db::{ItemStore, StoreError};
use crate::error::{Operation, ServiceError, ServiceResult};
use crate::models::{CreateItemRequest, Item, NewItem, UpdateNumberRequest};

/// Item service, cheap to clone
#[derive(Clone)]
pub struct ItemService {
    store: Arc<dyn ItemStore>,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// All items, in store order
    pub async fn list(&self) -> ServiceResult<Vec<Item>> {
        self.store
            .list()
            .await
            .map_err(ServiceError::unavailable(Operation::List))
    }

    /// Validate and insert a new item.
    ///
    /// A name that is already taken yields `Conflict` and leaves the existing
    /// item untouched, whether detected by the conditional insert or by the
    /// store's uniqueness constraint.
    pub async fn create(&self, req: CreateItemRequest) -> ServiceResult<Item> {
        let item = NewItem::try_from(req).map_err(ServiceError::invalid(Operation::Create))?;

        match self.store.insert(&item).await {
            Ok(Some(created)) => {
                tracing::debug!(name = %created.name, number = created.number, "item created");
                Ok(created)
            }
            Ok(None) | Err(StoreError::Duplicate { .. }) => Err(ServiceError::Conflict {
                name: item.name.into_string(),
            }),
            Err(e) => Err(ServiceError::StoreUnavailable {
                operation: Operation::Create,
                source: e,
            }),
        }
    }

    /// Delete by name; absent names are `NotFound`
    pub async fn delete(&self, name: &str) -> ServiceResult<()> {
        let deleted = self
            .store
            .delete(name)
            .await
            .map_err(ServiceError::unavailable(Operation::Delete))?;

        if deleted {
            tracing::debug!(name, "item deleted");
            Ok(())
        } else {
            Err(ServiceError::NotFound {
                name: name.to_owned(),
            })
        }
    }

    /// Validate the new number and apply it to an existing item
    pub async fn update_number(&self, name: &str, req: UpdateNumberRequest) -> ServiceResult<Item> {
        let number = req
            .validate()
            .map_err(ServiceError::invalid(Operation::Update))?;

        self.store
            .update_number(name, number)
            .await
            .map_err(ServiceError::unavailable(Operation::Update))?
            .ok_or_else(|| ServiceError::NotFound {
                name: name.to_owned(),
            })
    }

    /// True when the store answers a trivial query. Never fails.
    pub async fn health_check(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Health check failed: {}", e);
                false
            }
        }
    }
}
