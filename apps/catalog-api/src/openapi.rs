//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "MongoDB-based REST API for the multilingual product catalog",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/product", api = domain_catalog::ApiDoc)
    ),
    tags(
        (name = "products", description = "Product catalog endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;
