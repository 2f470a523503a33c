use mediator::{DefaultMediator, Mediator, Request, RequestHandler};

use crate::events::ProductDeletedEvent;
use crate::models::product::Product;
use crate::services::product_store::SharedProductStore;

pub struct DeleteProductCommand(pub u32);
impl Request<Option<Product>> for DeleteProductCommand {}

pub struct DeleteProductRequestHandler(pub SharedProductStore, pub DefaultMediator);
impl RequestHandler<DeleteProductCommand, Option<Product>> for DeleteProductRequestHandler {
    fn handle(&mut self, request: DeleteProductCommand) -> Option<Product> {
        let result = self
            .0
            .lock()
            .expect("Could not lock the product store")
            .remove(request.0);

        if let Some(deleted) = result.clone() {
            self.1
                .publish(ProductDeletedEvent(deleted))
                .expect("Could not publish the event");
        }

        result
    }
}
