use mediator::{Request, RequestHandler};

use crate::models::product::Product;
use crate::services::product_store::SharedProductStore;

pub struct GetAllProductsRequest;
impl Request<Vec<Product>> for GetAllProductsRequest {}

pub struct GetAllProductsRequestHandler(pub SharedProductStore);
impl RequestHandler<GetAllProductsRequest, Vec<Product>> for GetAllProductsRequestHandler {
    fn handle(&mut self, _: GetAllProductsRequest) -> Vec<Product> {
        self.0
            .lock()
            .expect("Could not lock the product store")
            .get_all()
    }
}
