use actix_web::web::{Data, Json};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use mediator::Mediator;
use serde_json::json;

use crate::commands::{AddProductCommand, DeleteProductCommand, UpdateProductCommand};
use crate::models::product::{ProductData, ValidationError};
use crate::queries::{GetAllProductsRequest, GetProductRequest};
use crate::services::product_store::StoreError;
use crate::SharedMediator;

fn validation_response(errors: &[ValidationError]) -> HttpResponse {
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    log::warn!("Rejected invalid product data: {}", messages.join("; "));
    HttpResponse::BadRequest().json(json!({ "errors": messages }))
}

fn internal_error(operation: &str, err: mediator::error::Error) -> HttpResponse {
    log::error!("Unexpected failure during {}: {}", operation, err);
    HttpResponse::InternalServerError().finish()
}

#[post("")]
pub async fn create(mediator: Data<SharedMediator>, body: Json<ProductData>) -> impl Responder {
    let data = body.into_inner();
    if let Err(errors) = data.validate() {
        return validation_response(&errors);
    }

    let mut mediator = mediator.lock().expect("Unable to lock mediator");
    match mediator.send(AddProductCommand(data)) {
        Ok(product) => HttpResponse::Created()
            .insert_header(("Location", format!("/api/products/{}", product.id)))
            .json(product),
        Err(err) => internal_error("create", err),
    }
}

#[put("/{id}")]
pub async fn update(
    path: web::Path<u32>,
    mediator: Data<SharedMediator>,
    body: Json<ProductData>,
) -> impl Responder {
    let id = path.into_inner();
    let data = body.into_inner();
    if let Err(errors) = data.validate() {
        return validation_response(&errors);
    }

    let mut mediator = mediator.lock().expect("Unable to lock mediator");
    match mediator.send(UpdateProductCommand { id, data }) {
        Ok(Ok(_)) => HttpResponse::NoContent().finish(),
        Ok(Err(StoreError::NotFound { .. })) => {
            log::warn!("Attempt to update missing product: id={}", id);
            HttpResponse::NotFound().finish()
        }
        Ok(Err(err @ StoreError::Conflict { .. })) => {
            log::error!("Unresolved conflict while updating product: id={}, {}", id, err);
            HttpResponse::Conflict().finish()
        }
        Err(err) => internal_error("update", err),
    }
}

#[delete("/{id}")]
pub async fn delete(path: web::Path<u32>, mediator: Data<SharedMediator>) -> impl Responder {
    let id = path.into_inner();
    let mut mediator = mediator.lock().expect("Unable to lock mediator");
    match mediator.send(DeleteProductCommand(id)) {
        Ok(Some(_)) => HttpResponse::NoContent().finish(),
        Ok(None) => {
            log::warn!("Attempt to delete missing product: id={}", id);
            HttpResponse::NotFound().finish()
        }
        Err(err) => internal_error("delete", err),
    }
}

#[get("/{id}")]
pub async fn get(path: web::Path<u32>, mediator: Data<SharedMediator>) -> impl Responder {
    let id = path.into_inner();
    let mut mediator = mediator.lock().expect("Unable to lock mediator");
    match mediator.send(GetProductRequest(id)) {
        Ok(Some(product)) => HttpResponse::Ok().json(product),
        Ok(None) => {
            log::warn!("Attempt to fetch missing product: id={}", id);
            HttpResponse::NotFound().finish()
        }
        Err(err) => internal_error("get", err),
    }
}

#[get("")]
pub async fn get_all(mediator: Data<SharedMediator>) -> impl Responder {
    let mut mediator = mediator.lock().expect("Unable to lock mediator");
    match mediator.send(GetAllProductsRequest) {
        Ok(products) => {
            log::info!("Product listing returned {} items", products.len());
            HttpResponse::Ok().json(products)
        }
        Err(err) => internal_error("list", err),
    }
}
