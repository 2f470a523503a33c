use mediator::{DefaultMediator, Mediator, Request, RequestHandler};
use serde::{Deserialize, Serialize};

use crate::events::ProductUpdatedEvent;
use crate::models::product::{Product, ProductData};
use crate::services::product_store::{SharedProductStore, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProductCommand {
    pub id: u32,
    pub data: ProductData,
}

impl Request<Result<Product, StoreError>> for UpdateProductCommand {}

pub struct UpdateProductRequestHandler(pub SharedProductStore, pub DefaultMediator);
impl RequestHandler<UpdateProductCommand, Result<Product, StoreError>>
    for UpdateProductRequestHandler
{
    fn handle(&mut self, command: UpdateProductCommand) -> Result<Product, StoreError> {
        let updated = {
            let mut store = self.0.lock().expect("Could not lock the product store");

            let previous_stock = store
                .get(command.id)
                .map(|product| product.stock)
                .ok_or(StoreError::NotFound { id: command.id })?;

            let product = store.update(command.id, command.data)?;

            ProductUpdatedEvent {
                product,
                previous_stock,
            }
        };

        let product = updated.product.clone();

        self.1
            .publish(updated)
            .expect("Could not publish the event");

        Ok(product)
    }
}
