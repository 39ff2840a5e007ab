// src/dtos/product.rs
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Inbound shape for create and update. Carries no `id`; the path (update)
/// or the database (create) supplies it.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl ProductRequest {
    /// Field-level checks run at the boundary, before the service is called.
    /// Collects every violation into a field -> message map.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = HashMap::new();
        if self.name.trim().is_empty() {
            errors.insert("name".to_string(), "name must not be blank".to_string());
        }
        if self.price < 0.0 {
            errors.insert("price".to_string(), "price must not be negative".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(errors))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct PriceRangeQuery {
    pub min: f64,
    pub max: f64,
}
