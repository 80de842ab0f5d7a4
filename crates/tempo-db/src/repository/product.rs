//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Unfiltered listing capped at a row limit
//! - Insert / update / delete, one committed statement each
//! - Substring search on name and category
//!
//! ## Substring Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Search Works                                     │
//! │                                                                         │
//! │  Form: name = "gui", category = ""                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SearchFilter { name: Some("gui"), category: None }                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT ... FROM products WHERE 1=1                                    │
//! │    AND product_name LIKE '%gui%' ESCAPE '\'                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ 1 | Guitar        | Strings    | ...   │ ← MATCH (LIKE ignores     │
//! │  │ 2 | Bass Guitar   | Strings    | ...   │ ← MATCH  ASCII case)      │
//! │  │ 3 | Snare Drum    | Percussion | ...   │                           │
//! │  └─────────────────────────────────────────┘                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `%` and `_` typed by the user are escaped, so they match literally.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use crate::repository::ProductStore;
use tempo_core::validation::like_contains_pattern;
use tempo_core::{MutationOutcome, NewProduct, Product, SearchFilter};

/// Column list shared by every product read.
///
/// The schema allows NULLs, so they are read back as empty values.
const PRODUCT_COLUMNS: &str = r#"
    product_id,
    COALESCE(product_name, '') AS product_name,
    COALESCE(category, '') AS category,
    COALESCE(price, 0.0) AS price,
    COALESCE(description, '') AS description
"#;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let id = repo.add(&product).await?;
/// let rows = repo.list(50).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Gets a product by its id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        debug!(id, "Getting product by ID");

        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE product_id = ?1",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Counts all products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

impl ProductStore for ProductRepository {
    /// Lists products in id order, up to `limit`.
    ///
    /// Ids only grow, so this is insertion order and stable between calls.
    async fn list(&self, limit: u32) -> DbResult<Vec<Product>> {
        debug!(limit, "Listing products");

        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products ORDER BY product_id LIMIT ?1",
            PRODUCT_COLUMNS
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// The id SQLite assigned to the row.
    async fn add(&self, product: &NewProduct) -> DbResult<i64> {
        debug!(name = %product.name, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (product_name, category, price, description)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price)
        .bind(&product.description)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Updates an existing product.
    ///
    /// ## Returns
    /// * `Applied` - the row was overwritten
    /// * `NotFound` - no product has this id; nothing changed
    async fn update(&self, id: i64, product: &NewProduct) -> DbResult<MutationOutcome> {
        debug!(id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                product_name = ?2,
                category = ?3,
                price = ?4,
                description = ?5
            WHERE product_id = ?1
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price)
        .bind(&product.description)
        .execute(&self.pool)
        .await?;

        Ok(MutationOutcome::from_rows_affected(result.rows_affected()))
    }

    /// Hard-deletes a product. There is no soft delete and no cascade.
    async fn delete(&self, id: i64) -> DbResult<MutationOutcome> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE product_id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(MutationOutcome::from_rows_affected(result.rows_affected()))
    }

    /// Searches products by name and/or category substring.
    ///
    /// Provided filters are ANDed. No row cap is applied.
    async fn search(&self, filter: &SearchFilter) -> DbResult<Vec<Product>> {
        debug!(name = ?filter.name(), category = ?filter.category(), "Searching products");

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {} FROM products WHERE 1=1",
            PRODUCT_COLUMNS
        ));

        if let Some(name) = filter.name() {
            query
                .push(" AND product_name LIKE ")
                .push_bind(like_contains_pattern(name))
                .push(r" ESCAPE '\'");
        }

        if let Some(category) = filter.category() {
            query
                .push(" AND category LIKE ")
                .push_bind(like_contains_pattern(category))
                .push(r" ESCAPE '\'");
        }

        query.push(" ORDER BY product_id");

        let products = query
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }
}
