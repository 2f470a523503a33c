//! Tests of the client half (`ApiClient` + `ProductState`) against a live
//! server instance, covering the optimistic cache-patching behavior.

use actix_test::TestServer;
use actix_web::web::Data;
use actix_web::{web, App};

use product_catalog::client::{ApiClient, ClientError, ProductState};
use product_catalog::models::product::ProductData;
use product_catalog::{create_mediator_service, create_product_store, endpoints};

fn spawn_server() -> TestServer {
    let store = create_product_store();
    let mediator = create_mediator_service(&store);

    actix_test::start(move || {
        App::new().app_data(Data::new(mediator.clone())).service(
            web::scope("/api/products")
                .service(endpoints::products::create)
                .service(endpoints::products::update)
                .service(endpoints::products::delete)
                .service(endpoints::products::get)
                .service(endpoints::products::get_all),
        )
    })
}

fn state_for(server: &TestServer) -> ProductState {
    ProductState::new(ApiClient::new(format!("http://{}/api", server.addr())))
}

fn widget() -> ProductData {
    ProductData {
        name: "Widget".to_owned(),
        description: Some("A widget".to_owned()),
        price: 9.99,
        stock: 10,
    }
}

fn gadget() -> ProductData {
    ProductData {
        name: "Gadget".to_owned(),
        description: None,
        price: 19.99,
        stock: 3,
    }
}

#[actix_web::test]
async fn refresh_replaces_the_cache_with_the_server_list() {
    let server = spawn_server();
    let writer = state_for(&server);

    writer.create(widget()).await.unwrap();
    writer.create(gadget()).await.unwrap();

    let reader = state_for(&server);
    assert!(reader.products().is_empty());

    reader.refresh().await.unwrap();

    assert_eq!(2, reader.products().len());
    assert!(!reader.is_loading());
}

#[actix_web::test]
async fn create_appends_exactly_one_record_to_the_cache() {
    let server = spawn_server();
    let state = state_for(&server);

    let before = state.products().len();
    let created = state.create(widget()).await.unwrap();

    let cached = state.products();
    assert_eq!(before + 1, cached.len());

    let entry = cached.iter().find(|p| p.id == created.id).unwrap();
    assert_eq!("Widget", entry.name);
    assert_eq!(9.99, entry.price);
    assert_eq!(10, entry.stock);
}

#[actix_web::test]
async fn update_patches_the_matching_cache_entry_in_place() {
    let server = spawn_server();
    let state = state_for(&server);

    let created = state.create(widget()).await.unwrap();
    state.update(created.id, gadget()).await.unwrap();

    let cached = state.products();
    assert_eq!(1, cached.len());

    let entry = &cached[0];
    assert_eq!(created.id, entry.id);
    assert_eq!("Gadget", entry.name);
    assert_eq!(None, entry.description);
    assert_eq!(19.99, entry.price);
    assert_eq!(3, entry.stock);

    // The server agrees with the patched cache.
    let fetched = state.get(created.id).await.unwrap();
    assert_eq!("Gadget", fetched.name);
    assert_eq!(3, fetched.stock);
}

#[actix_web::test]
async fn update_of_an_uncached_record_leaves_the_cache_alone() {
    let server = spawn_server();
    let writer = state_for(&server);
    let created = writer.create(widget()).await.unwrap();

    // A second state whose cache never saw the record.
    let other = state_for(&server);
    other.update(created.id, gadget()).await.unwrap();

    assert!(other.products().is_empty());

    // The server still applied the update.
    let fetched = other.get(created.id).await.unwrap();
    assert_eq!("Gadget", fetched.name);
}

#[actix_web::test]
async fn delete_drops_the_matching_cache_entry() {
    let server = spawn_server();
    let state = state_for(&server);

    let keep = state.create(widget()).await.unwrap();
    let gone = state.create(gadget()).await.unwrap();

    state.delete(gone.id).await.unwrap();

    let cached = state.products();
    assert_eq!(1, cached.len());
    assert!(cached.iter().all(|p| p.id != gone.id));
    assert!(cached.iter().any(|p| p.id == keep.id));
}

#[actix_web::test]
async fn deleting_twice_surfaces_a_404_error() {
    let server = spawn_server();
    let state = state_for(&server);

    let created = state.create(widget()).await.unwrap();
    state.delete(created.id).await.unwrap();

    let err = state.delete(created.id).await.unwrap_err();
    match err {
        ClientError::Api(api) => {
            assert_eq!(Some(404), api.status);
            assert!(api.to_string().contains("404"));
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[actix_web::test]
async fn not_found_is_normalized_into_code_and_message() {
    let server = spawn_server();
    let state = state_for(&server);

    let err = state.get(999_999).await.unwrap_err();
    assert_eq!(Some(404), err.status);
    assert_eq!("code 404: Not Found", err.to_string());
}

#[actix_web::test]
async fn refresh_failure_keeps_the_previous_cache_and_clears_loading() {
    let server = spawn_server();
    let state = state_for(&server);

    state.create(widget()).await.unwrap();
    state.refresh().await.unwrap();
    assert_eq!(1, state.products().len());

    server.stop().await;

    let err = state.refresh().await.unwrap_err();
    assert_eq!(None, err.status);

    assert_eq!(1, state.products().len());
    assert!(!state.is_loading());
}

#[actix_web::test]
async fn validation_blocks_the_submission_before_any_network_call() {
    // Nothing listens on this address; a network attempt would be a
    // transport error, not a validation error.
    let state = ProductState::new(ApiClient::new("http://127.0.0.1:1/api"));

    let err = state
        .create(ProductData {
            name: "ab".to_owned(),
            description: None,
            price: 0.0,
            stock: 0,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(errors) if errors.len() == 2));
    assert!(state.products().is_empty());
}

#[actix_web::test]
async fn watchers_observe_cache_changes() {
    let server = spawn_server();
    let state = state_for(&server);

    let mut products = state.subscribe_products();
    let loading = state.subscribe_loading();

    state.create(widget()).await.unwrap();

    assert!(products.has_changed().unwrap());
    assert_eq!(1, products.borrow_and_update().len());
    assert!(!*loading.borrow());
}
