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


//! Persistence for reading state
//!
//! Everything the app remembers between launches lives in a small key-value
//! space: the nickname, the read/pending book ID lists, per-book chapter
//! cursors, and the reading-streak bookkeeping. [`KeyValueStore`] is the
//! backend seam (in-memory for tests, SQLite for devices) and
//! [`StorageFacade`] layers the typed accessors and recovery semantics on
//! top.
//!
//! # Key space
//! - `nickname` - plain string
//! - `readBooks` - JSON array of book ID strings
//! - `pendingBooks` - JSON array of book ID strings
//! - `progress_<bookId>` - stringified 0-based chapter index
//! - `lastReadDay` / `dayStreak` - streak bookkeeping (ISO date / integer)
//!
//! Keys are independent; multi-key updates are not transactional. Every
//! mutating operation in the crate is idempotent, so a retry after a partial
//! failure converges to the intended end state.
//!
//! # Usage Example
//! ```no_run
//! use bookling_core::storage::{MemoryStore, StorageFacade};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = StorageFacade::new(MemoryStore::new());
//! storage.set_nickname("Luna").await?;
//! assert_eq!(storage.nickname().await, "Luna");
//! # Ok(())
//! # }
//! ```

pub mod facade;
pub mod keys;
pub mod kv;
pub mod memory;
pub mod sqlite;

pub use facade::{StorageFacade, DEFAULT_NICKNAME};
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
