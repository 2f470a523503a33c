use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::models::product::{Product, ProductData};

pub type SharedProductStore = Arc<Mutex<ProductStore>>;

/// Failure modes of a store mutation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The id does not correspond to any stored record.
    #[error("product {id} not found")]
    NotFound { id: u32 },

    /// An update collided with a concurrent mutation and the record could not
    /// be unambiguously located. When the record turns out to be gone the
    /// store reports [`StoreError::NotFound`] instead; this variant is the
    /// unrecoverable remainder and is never retried.
    #[error("concurrent modification of product {id} could not be resolved")]
    Conflict { id: u32 },
}

/// The authoritative in-memory product collection.
///
/// Ids are assigned here and only here, from a counter that never goes
/// backwards, so a deleted id stays unknown for the rest of the process
/// lifetime. All access goes through the surrounding [`SharedProductStore`]
/// mutex; a whole operation holds the lock, which is what makes an update
/// racing a delete resolve cleanly to NotFound.
#[derive(Debug)]
pub struct ProductStore {
    records: HashMap<u32, Product>,
    next_id: u32,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            next_id: 1,
        }
    }

    /// Returns a snapshot of every stored record. Order is not significant.
    pub fn get_all(&self) -> Vec<Product> {
        self.records.values().cloned().collect()
    }

    pub fn get(&self, id: u32) -> Option<Product> {
        self.records.get(&id).cloned()
    }

    /// Stores a new record under a freshly assigned id and returns it.
    pub fn insert(&mut self, data: ProductData) -> Product {
        let id = self.next_id;
        self.next_id += 1;

        let product = Product {
            id,
            name: data.name,
            description: data.description,
            price: data.price,
            stock: data.stock,
            category: None,
            created_at: None,
            updated_at: None,
        };

        self.records.insert(id, product.clone());
        product
    }

    /// Replaces every mutable field of an existing record. The id never
    /// changes.
    pub fn update(&mut self, id: u32, data: ProductData) -> Result<Product, StoreError> {
        match self.records.get_mut(&id) {
            Some(product) => {
                product.name = data.name;
                product.description = data.description;
                product.price = data.price;
                product.stock = data.stock;
                Ok(product.clone())
            }
            None => Err(StoreError::NotFound { id }),
        }
    }

    /// Removes a record, returning it, or `None` when the id is unknown.
    /// A second remove of the same id therefore yields `None`.
    pub fn remove(&mut self, id: u32) -> Option<Product> {
        self.records.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
