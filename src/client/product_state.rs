use thiserror::Error;
use tokio::sync::watch;

use crate::client::api_client::{ApiClient, ApiError};
use crate::models::product::{Product, ProductData, ValidationError};

/// Failure modes of a state operation. Validation happens before any network
/// call; everything past that point surfaces as an [`ApiError`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Api(#[from] ApiError),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// The client-side view of the catalog: the last-known product list and a
/// busy flag, both observable through `watch` channels.
///
/// After a successful mutation the cached list is patched from that single
/// operation's result instead of re-fetched, so it can drift from server
/// truth when other clients mutate concurrently. Fine for a single-user
/// administrative tool; a multi-client deployment would need re-fetch or
/// server-pushed invalidation instead.
pub struct ProductState {
    api: ApiClient,
    products: watch::Sender<Vec<Product>>,
    loading: watch::Sender<bool>,
}

impl ProductState {
    pub fn new(api: ApiClient) -> Self {
        let (products, _) = watch::channel(Vec::new());
        let (loading, _) = watch::channel(false);
        Self {
            api,
            products,
            loading,
        }
    }

    /// Snapshot of the cached product list.
    pub fn products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn subscribe_products(&self) -> watch::Receiver<Vec<Product>> {
        self.products.subscribe()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Fetches the full list and replaces the cache. On failure the previous
    /// cache stays in place; stale-but-present beats empty. The busy flag is
    /// cleared on both paths.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        self.loading.send_replace(true);
        let result = self.api.get::<Vec<Product>>("/products").await;
        self.loading.send_replace(false);

        let list = result?;
        self.products.send_replace(list);
        Ok(())
    }

    pub async fn get(&self, id: u32) -> Result<Product, ApiError> {
        self.api.get(&format!("/products/{id}")).await
    }

    /// Creates a product and appends the server-returned record to the cache.
    pub async fn create(&self, data: ProductData) -> Result<Product, ClientError> {
        data.validate().map_err(ClientError::Validation)?;

        let product: Product = self.api.post("/products", &data).await?;
        self.products
            .send_modify(|list| list.push(product.clone()));

        Ok(product)
    }

    /// Updates a product and patches the matching cache entry. The server
    /// replies 204 with no body, so the cached record is rebuilt from the
    /// submitted fields plus the id. An id missing from the cache is left
    /// alone.
    pub async fn update(&self, id: u32, data: ProductData) -> Result<Product, ClientError> {
        data.validate().map_err(ClientError::Validation)?;

        self.api.put(&format!("/products/{id}"), &data).await?;

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

        self.products.send_modify(|list| {
            if let Some(entry) = list.iter_mut().find(|p| p.id == id) {
                *entry = product.clone();
            }
        });

        Ok(product)
    }

    /// Deletes a product and drops the matching cache entry.
    pub async fn delete(&self, id: u32) -> Result<(), ClientError> {
        self.api.delete(&format!("/products/{id}")).await?;
        self.products
            .send_modify(|list| list.retain(|p| p.id != id));

        Ok(())
    }
}
