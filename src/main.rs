use actix_cors::Cors;
use actix_web::middleware::{self, TrailingSlash};
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};

use product_catalog::{create_mediator_service, create_product_store, endpoints};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let port = std::env::var("PORT")
        .map(|port| port.parse::<u16>().ok())
        .ok()
        .flatten()
        .unwrap_or(8080);

    let store = create_product_store();
    let mediator = create_mediator_service(&store);

    log::info!("Starting product catalog API on port {}", port);
    log::info!("Using volatile in-memory storage; records do not survive a restart");
    log::warn!("Permissive CORS policy active; development use only");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::new(TrailingSlash::Trim))
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .app_data(Data::new(mediator.clone()))
            .service(
                web::scope("/api/products")
                    .service(endpoints::products::create)
                    .service(endpoints::products::update)
                    .service(endpoints::products::delete)
                    .service(endpoints::products::get)
                    .service(endpoints::products::get_all),
            )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
