use axum::{routing::get, Json, Router};
use common::types::{Health, Welcome};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod entities;

use entities::entity_routes;

entity_routes!(tasks: service::tasks::Task, tag = "tasks", collection = "/tasks", route = "/tasks/:id", item = "/tasks/{id}", doc = TaskDoc);
entity_routes!(links: service::links::Link, tag = "links", collection = "/links", route = "/links/:id", item = "/links/{id}", doc = LinkDoc);
entity_routes!(products: service::products::Product, tag = "products", collection = "/products", route = "/products/:id", item = "/products/{id}", doc = ProductDoc);
entity_routes!(users: service::users::User, tag = "users", collection = "/users", route = "/users/:id", item = "/users/{id}", doc = UserDoc);

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn root() -> Json<Welcome> {
    Json(Welcome::new("entity store"))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, docs, and the entity routes.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    public
        .merge(tasks::router())
        .merge(links::router())
        .merge(products::router())
        .merge(users::router())
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
