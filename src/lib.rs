//! Product catalog CRUD application.
//!
//! The server half is an actix-web REST API over an in-memory store, with
//! endpoint handlers dispatching typed commands and queries through a shared
//! [`mediator::DefaultMediator`]. The client half ([`client`]) wraps the REST
//! surface and mirrors server data into an observable state container.

pub mod client;
pub mod commands;
pub mod endpoints;
pub mod events;
pub mod models;
pub mod queries;
pub mod services;

use std::sync::{Arc, Mutex};

use mediator::DefaultMediator;

use crate::services::product_store::{ProductStore, SharedProductStore};

pub type SharedMediator = Arc<Mutex<DefaultMediator>>;

/// Creates a fresh, isolated store. Each server (and each test) owns its own
/// instance; there is no ambient global state.
pub fn create_product_store() -> SharedProductStore {
    Arc::new(Mutex::new(ProductStore::new()))
}

/// Wires every command and query handler to the given store and subscribes
/// the logging event handlers.
pub fn create_mediator_service(store: &SharedProductStore) -> SharedMediator {
    use commands::*;
    use events::*;
    use queries::*;

    let store = store.clone();
    let mediator = DefaultMediator::builder()
        // Requests
        .add_handler(GetProductRequestHandler(store.clone()))
        .add_handler(GetAllProductsRequestHandler(store.clone()))
        .add_handler_deferred(|m| AddProductRequestHandler(store.clone(), m))
        .add_handler_deferred(|m| UpdateProductRequestHandler(store.clone(), m))
        .add_handler_deferred(|m| DeleteProductRequestHandler(store.clone(), m))
        // Events
        .subscribe_fn(|event: ProductAddedEvent| {
            log::info!(
                "Product created: id={}, name={}, price={}, stock={}",
                event.0.id,
                event.0.name,
                event.0.price,
                event.0.stock
            );
        })
        .subscribe_fn(|event: ProductUpdatedEvent| {
            log::info!(
                "Product updated: id={}, name={}, stock {} -> {}",
                event.product.id,
                event.product.name,
                event.previous_stock,
                event.product.stock
            );
        })
        .subscribe_fn(|event: ProductDeletedEvent| {
            log::info!(
                "Product deleted: id={}, name={}",
                event.0.id,
                event.0.name
            );
        })
        .build();

    Arc::new(Mutex::new(mediator))
}
