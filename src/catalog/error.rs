use thiserror::Error;

/// Store fault. Not-found is never an error; lookups return `Option`.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Product must be saved before it can be linked to order {order_id}")]
    Unsaved { order_id: i64 },

    #[error("Order {0} does not exist")]
    OrderMissing(i64),

    #[error("Product {0} does not exist")]
    ProductMissing(i64),
}

pub type StoreResult<T> = Result<T, StoreError>;
