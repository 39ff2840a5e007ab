// src/mappers/product.rs
//! Entity <-> DTO translation for Product. Pure functions, no state.

use crate::dtos::product::{ProductRequest, ProductResponse};
use crate::models::product::Product;

/// Builds a fresh entity from an inbound request. `id` stays unset; the
/// database assigns it on first save.
pub fn to_entity(request: &ProductRequest) -> Product {
    Product {
        id: None,
        name: request.name.clone(),
        description: request.description.clone(),
        price: request.price,
    }
}

/// Projects a persisted entity onto the wire shape. Rows coming out of
/// storage always carry an id.
pub fn to_response(product: Product) -> ProductResponse {
    ProductResponse {
        id: product.id.unwrap_or_default(),
        name: product.name,
        description: product.description,
        price: product.price,
    }
}

/// Maps a result set in order. Empty in, empty out.
pub fn to_response_list(products: Vec<Product>) -> Vec<ProductResponse> {
    products.into_iter().map(to_response).collect()
}

/// Overwrites the mutable fields of an existing entity from a request,
/// leaving `id` untouched.
pub fn apply_update(request: &ProductRequest, product: &mut Product) {
    product.name = request.name.clone();
    product.description = request.description.clone();
    product.price = request.price;
}
