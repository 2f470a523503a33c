use mediator::{Request, RequestHandler};

use crate::models::product::Product;
use crate::services::product_store::SharedProductStore;

pub struct GetProductRequest(pub u32);
impl Request<Option<Product>> for GetProductRequest {}

pub struct GetProductRequestHandler(pub SharedProductStore);
impl RequestHandler<GetProductRequest, Option<Product>> for GetProductRequestHandler {
    fn handle(&mut self, request: GetProductRequest) -> Option<Product> {
        self.0
            .lock()
            .expect("Could not lock the product store")
            .get(request.0)
    }
}
