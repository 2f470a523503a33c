use mediator::{DefaultMediator, Mediator, Request, RequestHandler};
use serde::{Deserialize, Serialize};

use crate::events::ProductAddedEvent;
use crate::models::product::{Product, ProductData};
use crate::services::product_store::SharedProductStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddProductCommand(pub ProductData);

impl Request<Product> for AddProductCommand {}

pub struct AddProductRequestHandler(pub SharedProductStore, pub DefaultMediator);
impl RequestHandler<AddProductCommand, Product> for AddProductRequestHandler {
    fn handle(&mut self, command: AddProductCommand) -> Product {
        let product = self
            .0
            .lock()
            .expect("Could not lock the product store")
            .insert(command.0);

        self.1
            .publish(ProductAddedEvent(product.clone()))
            .expect("Could not publish the event");

        product
    }
}
