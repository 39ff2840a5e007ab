// src/handlers/product.rs
//! Thin HTTP adapters: extract params, validate the payload, call the
//! service, translate the result. No business logic here.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use crate::dtos::product::{
    KeywordQuery, NameQuery, PriceRangeQuery, ProductRequest, ProductResponse,
};
use crate::error::AppError;
use crate::state::AppState;

// GET /products - List all products
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.service.get_all_products().await?;
    Ok(Json(products))
}

// GET /products/:id - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.service.get_product_by_id(id).await?;
    Ok(Json(product))
}

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    payload.validate()?;
    let created = state.service.create_product(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// PUT /products/:id - Update product
#[instrument(skip(state, payload))]
pub async fn update_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    payload.validate()?;
    let updated = state.service.update_product(id, &payload).await?;
    Ok(Json(updated))
}

// DELETE /products/:id - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// GET /products/search?name= - Search by name fragment
#[instrument(skip(state))]
pub async fn search_products_by_name(
    Query(query): Query<NameQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.service.search_products_by_name(&query.name).await?;
    Ok(Json(products))
}

// GET /products/search/keyword?q= - Search across name and description
#[instrument(skip(state))]
pub async fn search_products_by_keyword(
    Query(query): Query<KeywordQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.service.search_products_by_keyword(&query.q).await?;
    Ok(Json(products))
}

// GET /products/price-range?min=&max= - Inclusive price interval
#[instrument(skip(state))]
pub async fn find_products_by_price_range(
    Query(query): Query<PriceRangeQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state
        .service
        .find_products_by_price_range(query.min, query.max)
        .await?;
    Ok(Json(products))
}
