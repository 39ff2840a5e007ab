use sqlx::FromRow;

/// Persisted product row. `id` is `None` only before the first save;
/// every row coming back from the database carries one.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}
