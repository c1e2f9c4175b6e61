//! Product catalog snapshot embedded into the assistant's system prompt.
//!
//! The catalog is read once at startup. A failed read is logged and treated
//! as an empty catalog so the assistant still answers general questions.

use std::fmt::Write;

use sqlx::PgPool;
use tracing::{error, info};

/// One row of the `products` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub characteristics: String,
    pub price: f64,
    pub stock: i32,
    pub warranty_years: i32,
    pub category: String,
}

/// Load every product ordered by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn load_products(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
    let rows = sqlx::query_as::<_, (i64, String, String, f64, i32, i32, String)>(
        "SELECT id, name, characteristics, price, stock, warranty_years, category
         FROM products
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, characteristics, price, stock, warranty_years, category)| Product {
            id,
            name,
            characteristics,
            price,
            stock,
            warranty_years,
            category,
        })
        .collect())
}

/// Load the catalog, logging and swallowing failures.
pub async fn load_products_or_empty(pool: &PgPool) -> Vec<Product> {
    match load_products(pool).await {
        Ok(products) => {
            info!(count = products.len(), "product catalog loaded");
            products
        }
        Err(e) => {
            error!(error = %e, "product catalog load failed; continuing with empty catalog");
            Vec::new()
        }
    }
}

#[must_use]
pub fn catalog_line(product: &Product) -> String {
    format!(
        "Product: {}, Category: {}, Specs: {}, Price: {} rub., Stock: {} pcs., Warranty: {} yr.",
        product.name, product.category, product.characteristics, product.price, product.stock, product.warranty_years
    )
}

/// Render the catalog as newline-separated `catalog_line`s.
#[must_use]
pub fn catalog_text(products: &[Product]) -> String {
    let mut out = String::new();
    for (i, product) in products.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{}", catalog_line(product));
    }
    out
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
