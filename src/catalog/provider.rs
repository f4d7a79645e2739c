// BookLing Core - Storybook Reading for Mobile
// Copyright (C) 2025 BookLing contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! Catalog providers
//!
//! [`CatalogProvider`] is the injection seam between the app logic and the
//! book data. The shipped implementation, [`StaticCatalog`], serves the
//! embedded JSON asset and simulates the latency of a real backend so
//! loading states stay exercised in the host app; tests construct it with
//! [`CatalogLatency::none`] (or use a fixture provider) and pay nothing.
//!
//! Unknown book IDs are an expected condition, not a fault: persisted state
//! can outlive a catalog revision. `fetch_book_by_id` therefore returns
//! `Ok(None)` rather than an error.

use crate::catalog::models::Book;
use crate::error::Result;
use async_trait::async_trait;
use lazy_static::lazy_static;
use std::time::Duration;

const BOOKS_ASSET: &str = include_str!("../../assets/data/books.json");
const CATEGORIES_ASSET: &str = include_str!("../../assets/data/categories.json");

lazy_static! {
    /// The embedded catalog, parsed once. A malformed asset is a build
    /// defect, so the panic here is acceptable and covered by tests.
    static ref EMBEDDED_BOOKS: Vec<Book> =
        serde_json::from_str(BOOKS_ASSET).expect("embedded books.json is valid");
    static ref EMBEDDED_CATEGORIES: Vec<String> =
        serde_json::from_str(CATEGORIES_ASSET).expect("embedded categories.json is valid");
}

/// Read-only source of books and categories
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// All books, in catalog order
    async fn fetch_books(&self) -> Result<Vec<Book>>;

    /// All category names, in display order
    async fn fetch_categories(&self) -> Result<Vec<String>>;

    /// Look up a single book; `Ok(None)` for IDs not in the catalog
    async fn fetch_book_by_id(&self, id: &str) -> Result<Option<Book>> {
        let books = self.fetch_books().await?;
        Ok(books.into_iter().find(|b| b.id == id))
    }
}

/// Simulated fetch latency for the static catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogLatency {
    pub books: Duration,
    pub categories: Duration,
}

impl CatalogLatency {
    /// No artificial delay; what tests want
    pub fn none() -> Self {
        Self {
            books: Duration::ZERO,
            categories: Duration::ZERO,
        }
    }
}

impl Default for CatalogLatency {
    fn default() -> Self {
        Self {
            books: Duration::from_millis(800),
            categories: Duration::from_millis(500),
        }
    }
}

/// Catalog provider backed by the embedded JSON assets
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    latency: CatalogLatency,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            latency: CatalogLatency::default(),
        }
    }

    pub fn with_latency(latency: CatalogLatency) -> Self {
        Self { latency }
    }

    async fn simulate_delay(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn fetch_books(&self) -> Result<Vec<Book>> {
        self.simulate_delay(self.latency.books).await;
        Ok(EMBEDDED_BOOKS.clone())
    }

    async fn fetch_categories(&self) -> Result<Vec<String>> {
        self.simulate_delay(self.latency.categories).await;
        Ok(EMBEDDED_CATEGORIES.clone())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// In-memory provider over an arbitrary fixture catalog
    #[derive(Debug, Clone)]
    pub struct FixtureCatalog {
        books: Vec<Book>,
        categories: Vec<String>,
    }

    impl FixtureCatalog {
        pub fn new(books: Vec<Book>) -> Self {
            let mut categories = vec![crate::catalog::ALL_CATEGORY.to_string()];
            for book in &books {
                if !categories.contains(&book.category) {
                    categories.push(book.category.clone());
                }
            }
            Self { books, categories }
        }
    }

    #[async_trait]
    impl CatalogProvider for FixtureCatalog {
        async fn fetch_books(&self) -> Result<Vec<Book>> {
            Ok(self.books.clone())
        }

        async fn fetch_categories(&self) -> Result<Vec<String>> {
            Ok(self.categories.clone())
        }
    }
}
