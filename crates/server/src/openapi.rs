use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct TaskDoc { pub description: String, pub deadline: i64 }

#[derive(ToSchema)]
pub struct LinkDoc { pub external: String, pub internal: String }

#[derive(ToSchema)]
pub struct ProductDoc { pub slug: String, pub title: Option<String>, pub description: Option<String>, pub price_cents: i64 }

#[derive(ToSchema)]
pub struct UserDoc { pub name: String, pub email: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::tasks::list,
        crate::routes::tasks::create,
        crate::routes::tasks::get,
        crate::routes::tasks::update,
        crate::routes::tasks::delete,
        crate::routes::links::list,
        crate::routes::links::create,
        crate::routes::links::get,
        crate::routes::links::update,
        crate::routes::links::delete,
        crate::routes::products::list,
        crate::routes::products::create,
        crate::routes::products::get,
        crate::routes::products::update,
        crate::routes::products::delete,
        crate::routes::users::list,
        crate::routes::users::create,
        crate::routes::users::get,
        crate::routes::users::update,
        crate::routes::users::delete,
    ),
    components(
        schemas(
            HealthResponse,
            TaskDoc,
            LinkDoc,
            ProductDoc,
            UserDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "tasks", description = "Task CRUD"),
        (name = "links", description = "Short link CRUD"),
        (name = "products", description = "Product CRUD"),
        (name = "users", description = "User CRUD"),
    )
)]
pub struct ApiDoc;
