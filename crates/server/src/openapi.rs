use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Product as exchanged over HTTP. `id` is ignored on input and assigned by the store.
#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::list_products,
        crate::routes::products::create_product,
        crate::routes::products::get_product,
        crate::routes::products::update_product,
        crate::routes::products::delete_product,
    ),
    components(
        schemas(
            HealthResponse,
            ProductDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products")
    )
)]
pub struct ApiDoc;
