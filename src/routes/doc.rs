use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::products::{CreateProductRequest, ProductList, ReplaceProductRequest},
    models::Product,
    response::{ApiResponse, ErrorBody, MessageResponse, ValidationErrors},
    routes::{health, products},
    validation::{Location, Violation, ViolationKind},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "1.0.0",
        description = "REST API for managing a product catalog."
    ),
    paths(
        health::health_check,
        health::api_root,
        products::list_products,
        products::get_product,
        products::create_product,
        products::replace_product,
        products::toggle_availability,
        products::delete_product
    ),
    components(
        schemas(
            Product,
            ProductList,
            CreateProductRequest,
            ReplaceProductRequest,
            Violation,
            ViolationKind,
            Location,
            ValidationErrors,
            ErrorBody,
            MessageResponse,
            health::HealthData,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<String>,
            ApiResponse<health::HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Products", description = "API endpoints for managing products"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
