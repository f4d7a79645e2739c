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


//! The storybook catalog
//!
//! The catalog is the static, read-only collection of every book the app can
//! show. It is shipped inside the binary as a JSON asset and exposed behind
//! the [`CatalogProvider`] trait so the library and reader logic can be tested
//! against fixture catalogs.
//!
//! Book and category ordering comes from the asset and is stable for the
//! process lifetime; nothing in the crate ever mutates a [`Book`].

pub mod filter;
pub mod models;
pub mod provider;

pub use filter::{filter_books, ALL_CATEGORY};
pub use models::{Book, Chapter};
pub use provider::{CatalogLatency, CatalogProvider, StaticCatalog};
