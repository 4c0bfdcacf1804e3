use crate::{
    dto::products::{CreateProductRequest, ProductId, ProductList, ReplaceProduct},
    error::{AppError, AppResult},
    models::{Product, ProductFields},
    response::ApiResponse,
    state::AppState,
};

pub const DELETED_MESSAGE: &str = "Product deleted successfully";

pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let items = state.store.find_all().await?;
    Ok(ApiResponse::success(ProductList { items }))
}

pub async fn get_product(state: &AppState, id: ProductId) -> AppResult<ApiResponse<Product>> {
    let product = find_existing(state, id).await?;
    Ok(ApiResponse::success(product))
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let product = state.store.create(ProductFields::from(payload)).await?;
    Ok(ApiResponse::success(product))
}

pub async fn replace_product(
    state: &AppState,
    request: ReplaceProduct,
) -> AppResult<ApiResponse<Product>> {
    let existing = find_existing(state, request.id).await?;
    let product = state
        .store
        .update(existing.id, ProductFields::from(request.payload))
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success(product))
}

pub async fn toggle_availability(
    state: &AppState,
    id: ProductId,
) -> AppResult<ApiResponse<Product>> {
    let existing = find_existing(state, id).await?;

    let mut fields = ProductFields::from(&existing);
    fields.availability = !existing.availability;

    let product = state
        .store
        .update(existing.id, fields)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success(product))
}

pub async fn delete_product(
    state: &AppState,
    id: ProductId,
) -> AppResult<ApiResponse<&'static str>> {
    let existing = find_existing(state, id).await?;
    if !state.store.delete(existing.id).await? {
        return Err(AppError::NotFound);
    }
    Ok(ApiResponse::success(DELETED_MESSAGE))
}

async fn find_existing(state: &AppState, ProductId(id): ProductId) -> AppResult<Product> {
    state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)
}
