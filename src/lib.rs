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


//! BookLing Core - the native core of the BookLing storybook reader
//!
//! The host app (React Native / Expo screens) owns all presentation; this
//! crate owns the state underneath it: the embedded book catalog, the
//! persisted reading state (nickname, read/pending lists, chapter cursors,
//! streak), the library reconciliation that turns those into screen views,
//! and the chapter-by-chapter reader session.
//!
//! There is no server. "Fetching" the catalog is a local read behind a
//! simulated latency, and persistence is a local key-value store.

uniffi::setup_scaffolding!();

pub mod catalog;
pub mod error;
pub mod library;
pub mod profile;
pub mod reader;
pub mod storage;

pub use catalog::{Book, CatalogProvider, Chapter, StaticCatalog};
pub use error::{BooklingError, Result};
pub use library::{LibrarySnapshot, LibraryService, ReaderLevel};
pub use profile::{ProfileService, ReaderStats};
pub use reader::{Advance, ReaderSession, ReadingProgress};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore, StorageFacade};

/// Crate version, exposed to the host app for diagnostics screens
#[uniffi::export]
pub fn core_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Round-trip probe for verifying the native bridge from the host app
#[uniffi::export]
pub fn bridge_probe(message: String) -> String {
    format!("bookling-core says: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_probe() {
        let result = bridge_probe("Hello".to_string());
        assert!(result.contains("bookling-core says: Hello"));
    }

    #[test]
    fn test_core_version_is_semver_ish() {
        assert!(core_version().split('.').count() >= 2);
    }
}
