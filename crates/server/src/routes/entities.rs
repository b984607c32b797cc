//! Request/response shapes shared by the entity routes.

use serde::{Deserialize, Serialize};
use service::pagination::Pagination;
use service::storage::memory_store::EntityId;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// max items to return (clamped to the configured maximum)
    pub limit: Option<u32>,
    /// items to skip, in id order
    pub offset: Option<u32>,
}

impl From<ListQuery> for Pagination {
    fn from(q: ListQuery) -> Self {
        Pagination { limit: q.limit, offset: q.offset }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deleted {
    pub id: EntityId,
    pub deleted: bool,
}

impl Deleted {
    pub fn new(id: EntityId) -> Self { Self { id, deleted: true } }
}

/// Generate the CRUD handlers and router for one entity kind.
///
/// `route` is the axum item path, `item` the same path in OpenAPI form.
macro_rules! entity_routes {
    (
        $module:ident: $payload:ty,
        tag = $tag:literal,
        collection = $collection:literal,
        route = $route:literal,
        item = $item:literal,
        doc = $doc:ident $(,)?
    ) => {
        pub mod $module {
            use axum::{
                extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, Path, Query, State},
                http::StatusCode,
                Json, Router,
            };
            use ::service::crud::CrudService;
            use ::service::storage::memory_store::{Entity, EntityId};

            use crate::errors::JsonApiError;
            #[allow(unused_imports)] // referenced by name in #[utoipa::path] responses
            use crate::openapi::ErrorDoc;
            use crate::routes::entities::{Deleted, ListQuery};
            use crate::state::{ServerState, ServiceFor};

            type Item = $payload;

            fn svc(state: &ServerState) -> &CrudService<Item> {
                <ServerState as ServiceFor<Item>>::service(state)
            }

            pub fn router() -> Router<ServerState> {
                Router::new()
                    .route($collection, axum::routing::get(list).post(create))
                    .route($route, axum::routing::get(get).put(update).delete(delete))
            }

            /// List entities in id order
            #[utoipa::path(
                get, path = $collection, tag = $tag,
                params(ListQuery),
                responses(
                    (status = 200, description = "List OK"),
                    (status = 400, description = "Invalid Query", body = ErrorDoc)
                )
            )]
            pub async fn list(
                State(state): State<ServerState>,
                query: Result<Query<ListQuery>, QueryRejection>,
            ) -> Result<Json<Vec<Entity<Item>>>, JsonApiError> {
                let Query(q) = query?;
                Ok(Json(svc(&state).list(q.into()).await))
            }

            /// Create an entity; the id is assigned by the store
            #[utoipa::path(
                post, path = $collection, tag = $tag,
                request_body = crate::openapi::$doc,
                responses(
                    (status = 201, description = "Created"),
                    (status = 400, description = "Bad Request", body = ErrorDoc)
                )
            )]
            pub async fn create(
                State(state): State<ServerState>,
                body: Result<Json<Item>, JsonRejection>,
            ) -> Result<(StatusCode, Json<Entity<Item>>), JsonApiError> {
                let Json(payload) = body?;
                let created = svc(&state).create(payload).await?;
                Ok((StatusCode::CREATED, Json(created)))
            }

            /// Fetch one entity by id
            #[utoipa::path(
                get, path = $item, tag = $tag,
                params(("id" = u64, Path, description = "Entity id")),
                responses(
                    (status = 200, description = "OK"),
                    (status = 400, description = "Invalid Id", body = ErrorDoc),
                    (status = 404, description = "Not Found", body = ErrorDoc)
                )
            )]
            pub async fn get(
                State(state): State<ServerState>,
                id: Result<Path<EntityId>, PathRejection>,
            ) -> Result<Json<Entity<Item>>, JsonApiError> {
                let Path(id) = id?;
                Ok(Json(svc(&state).get(id).await?))
            }

            /// Replace the payload of an existing entity
            #[utoipa::path(
                put, path = $item, tag = $tag,
                params(("id" = u64, Path, description = "Entity id")),
                request_body = crate::openapi::$doc,
                responses(
                    (status = 200, description = "Updated"),
                    (status = 400, description = "Bad Request", body = ErrorDoc),
                    (status = 404, description = "Not Found", body = ErrorDoc)
                )
            )]
            pub async fn update(
                State(state): State<ServerState>,
                id: Result<Path<EntityId>, PathRejection>,
                body: Result<Json<Item>, JsonRejection>,
            ) -> Result<Json<Entity<Item>>, JsonApiError> {
                let Path(id) = id?;
                let Json(payload) = body?;
                Ok(Json(svc(&state).update(id, payload).await?))
            }

            /// Delete an entity; its id is never handed out again
            #[utoipa::path(
                delete, path = $item, tag = $tag,
                params(("id" = u64, Path, description = "Entity id")),
                responses(
                    (status = 200, description = "Deleted"),
                    (status = 400, description = "Invalid Id", body = ErrorDoc),
                    (status = 404, description = "Not Found", body = ErrorDoc)
                )
            )]
            pub async fn delete(
                State(state): State<ServerState>,
                id: Result<Path<EntityId>, PathRejection>,
            ) -> Result<Json<Deleted>, JsonApiError> {
                let Path(id) = id?;
                svc(&state).delete(id).await?;
                Ok(Json(Deleted::new(id)))
            }
        }
    };
}

pub(crate) use entity_routes;
