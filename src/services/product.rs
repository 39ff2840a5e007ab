// src/services/product.rs
//! Business logic for products: existence checks, range validation, and
//! the DTO <-> entity boundary. Handlers stay thin; everything with a
//! decision in it lives here.

use std::sync::Arc;

use crate::dtos::product::{ProductRequest, ProductResponse};
use crate::error::AppError;
use crate::mappers::product as mapper;
use crate::repositories::product::ProductRepository;

const RESOURCE: &str = "Product";

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_products(&self) -> Result<Vec<ProductResponse>, AppError> {
        let products = self.repository.find_all().await?;
        Ok(mapper::to_response_list(products))
    }

    pub async fn get_product_by_id(&self, id: i64) -> Result<ProductResponse, AppError> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, "id", id))?;
        Ok(mapper::to_response(product))
    }

    /// Field validation (non-blank name, non-negative price) has already run
    /// at the boundary; the request is taken as-is.
    pub async fn create_product(
        &self,
        request: &ProductRequest,
    ) -> Result<ProductResponse, AppError> {
        let product = mapper::to_entity(request);
        let saved = self.repository.save(product).await?;
        Ok(mapper::to_response(saved))
    }

    pub async fn update_product(
        &self,
        id: i64,
        request: &ProductRequest,
    ) -> Result<ProductResponse, AppError> {
        let mut existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, "id", id))?;
        mapper::apply_update(request, &mut existing);
        let updated = self.repository.save(existing).await?;
        Ok(mapper::to_response(updated))
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), AppError> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, "id", id))?;
        self.repository.delete(&product).await?;
        Ok(())
    }

    pub async fn search_products_by_name(
        &self,
        name: &str,
    ) -> Result<Vec<ProductResponse>, AppError> {
        let products = self
            .repository
            .find_by_name_containing_ignore_case(name)
            .await?;
        Ok(mapper::to_response_list(products))
    }

    pub async fn search_products_by_keyword(
        &self,
        keyword: &str,
    ) -> Result<Vec<ProductResponse>, AppError> {
        let products = self.repository.search_by_keyword(keyword).await?;
        Ok(mapper::to_response_list(products))
    }

    pub async fn find_products_by_price_range(
        &self,
        min: f64,
        max: f64,
    ) -> Result<Vec<ProductResponse>, AppError> {
        if min < 0.0 || max < 0.0 {
            return Err(AppError::invalid_argument("price must not be negative"));
        }
        if min > max {
            return Err(AppError::invalid_argument(
                "minimum price must not exceed maximum price",
            ));
        }
        let products = self.repository.find_by_price_between(min, max).await?;
        Ok(mapper::to_response_list(products))
    }
}
