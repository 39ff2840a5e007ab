use axum::{routing::get, Router};

use crate::handlers::product::{
    create_product, delete_product, find_products_by_price_range, get_product, get_products,
    search_products_by_keyword, search_products_by_name, update_product,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(get_products).post(create_product))
        .route("/products/search", get(search_products_by_name))
        .route("/products/search/keyword", get(search_products_by_keyword))
        .route("/products/price-range", get(find_products_by_price_range))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
