use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::products::{CreateProductRequest, ProductId, ProductList, ReplaceProduct, ReplaceProductRequest},
    error::AppResult,
    middleware::Valid,
    models::Product,
    response::{ApiResponse, ErrorBody, ValidationErrors},
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(replace_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
}

#[utoipa::path(
    get,
    path = "/api/productos",
    responses(
        (status = 200, description = "All products", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    Ok(Json(product_service::list_products(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/productos/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product", body = ApiResponse<Product>),
        (status = 400, description = "Invalid id", body = ValidationErrors),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Valid(id): Valid<ProductId>,
) -> AppResult<Json<ApiResponse<Product>>> {
    Ok(Json(product_service::get_product(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/productos",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<Product>),
        (status = 400, description = "Invalid product", body = ValidationErrors),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Valid(payload): Valid<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let created = product_service::create_product(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/productos/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ReplaceProductRequest,
    responses(
        (status = 200, description = "Product replaced", body = ApiResponse<Product>),
        (status = 400, description = "Invalid id or product", body = ValidationErrors),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn replace_product(
    State(state): State<AppState>,
    Valid(request): Valid<ReplaceProduct>,
) -> AppResult<Json<ApiResponse<Product>>> {
    Ok(Json(product_service::replace_product(&state, request).await?))
}

#[utoipa::path(
    patch,
    path = "/api/productos/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Availability toggled", body = ApiResponse<Product>),
        (status = 400, description = "Invalid id", body = ValidationErrors),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn toggle_availability(
    State(state): State<AppState>,
    Valid(id): Valid<ProductId>,
) -> AppResult<Json<ApiResponse<Product>>> {
    Ok(Json(product_service::toggle_availability(&state, id).await?))
}

#[utoipa::path(
    delete,
    path = "/api/productos/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<String>,
            example = json!({ "data": "Product deleted successfully" })),
        (status = 400, description = "Invalid id", body = ValidationErrors),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Valid(id): Valid<ProductId>,
) -> AppResult<Json<ApiResponse<&'static str>>> {
    Ok(Json(product_service::delete_product(&state, id).await?))
}
