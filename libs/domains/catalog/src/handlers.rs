use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadGatewayResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{
    CreateProduct, ListParams, LocalizedOverride, ProductCreated, ProductDocument, ProductPage,
};
use crate::repository::ProductRepository;
use crate::service::CatalogService;

const TAG: &str = "products";

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, get_product),
    components(
        schemas(
            CreateProduct,
            LocalizedOverride,
            ProductCreated,
            ProductDocument,
            ProductPage
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadGatewayResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", get(get_product))
        .with_state(shared_service)
}

/// List products with pagination and sorting
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ListParams),
    responses(
        (status = 200, description = "One page of products with the total count", body = ProductPage),
        (status = 502, response = BadGatewayResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(params): Query<ListParams>,
) -> CatalogResult<Json<ProductPage>> {
    let page = service.list_products(params).await?;
    Ok(Json(page))
}

/// Create a product with its language and price documents
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ProductCreated),
        (status = 400, response = BadRequestValidationResponse),
        (status = 502, response = BadGatewayResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> CatalogResult<impl IntoResponse> {
    let created = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductDocument),
        (status = 404, response = NotFoundResponse),
        (status = 502, response = BadGatewayResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<ProductDocument>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}
