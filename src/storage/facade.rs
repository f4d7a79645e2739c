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


//! Typed storage accessors with recovery semantics
//!
//! Reads never fail: a missing key, malformed stored JSON, or a backend read
//! error all collapse to the safe default (placeholder nickname, empty ID
//! list, absent cursor) with a `warn!` so the condition is visible without
//! ever reaching a screen. Writes return `Result`; the mutating library
//! operations decide what to do with them.
//!
//! The ID lists are stored as JSON arrays for compatibility but treated as
//! sets: de-duplication (first occurrence wins) is applied on every load.

use crate::error::Result;
use crate::storage::{keys, kv::KeyValueStore};
use log::warn;
use std::collections::HashSet;
use std::sync::Arc;

/// Placeholder shown until the user picks a nickname
pub const DEFAULT_NICKNAME: &str = "Explorer";

/// Typed view over a [`KeyValueStore`]
#[derive(Debug)]
pub struct StorageFacade<S> {
    store: Arc<S>,
}

impl<S> Clone for StorageFacade<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> StorageFacade<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_shared(store: Arc<S>) -> Self {
        Self { store }
    }

    /// The raw backend, for host-app maintenance
    pub fn store(&self) -> &S {
        &self.store
    }

    // ===== Nickname =====

    /// Stored nickname, or the placeholder when absent/unreadable
    pub async fn nickname(&self) -> String {
        match self.store.get(keys::NICKNAME).await {
            Ok(Some(name)) => name,
            Ok(None) => DEFAULT_NICKNAME.to_string(),
            Err(e) => {
                warn!("nickname read failed, using placeholder: {e}");
                DEFAULT_NICKNAME.to_string()
            }
        }
    }

    pub async fn set_nickname(&self, nickname: &str) -> Result<()> {
        self.store.set(keys::NICKNAME, nickname).await
    }

    // ===== Read / pending ID lists =====

    /// Finished book IDs, de-duplicated, first occurrence first
    pub async fn read_ids(&self) -> Vec<String> {
        self.id_list(keys::READ_BOOKS).await
    }

    /// In-progress book IDs, de-duplicated, first occurrence first
    pub async fn pending_ids(&self) -> Vec<String> {
        self.id_list(keys::PENDING_BOOKS).await
    }

    pub async fn set_read_ids(&self, ids: &[String]) -> Result<()> {
        self.set_id_list(keys::READ_BOOKS, ids).await
    }

    pub async fn set_pending_ids(&self, ids: &[String]) -> Result<()> {
        self.set_id_list(keys::PENDING_BOOKS, ids).await
    }

    async fn id_list(&self, key: &str) -> Vec<String> {
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("{key} read failed, treating as empty: {e}");
                return Vec::new();
            }
        };

        let ids: Vec<String> = match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(e) => {
                warn!("{key} holds malformed JSON, treating as empty: {e}");
                return Vec::new();
            }
        };

        dedup_preserving_order(ids)
    }

    async fn set_id_list(&self, key: &str, ids: &[String]) -> Result<()> {
        let deduped = dedup_preserving_order(ids.to_vec());
        let encoded = serde_json::to_string(&deduped)?;
        self.store.set(key, &encoded).await
    }

    // ===== Progress cursors =====

    /// Saved chapter index for `book_id`; absent or unreadable yields `None`
    pub async fn progress(&self, book_id: &str) -> Option<usize> {
        let key = keys::progress(book_id);
        let raw = match self.store.get(&key).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("{key} read failed, treating as no saved progress: {e}");
                return None;
            }
        };
        match raw.trim().parse::<usize>() {
            Ok(index) => Some(index),
            Err(_) => {
                warn!("{key} holds non-numeric value {raw:?}, ignoring");
                None
            }
        }
    }

    pub async fn set_progress(&self, book_id: &str, chapter_index: usize) -> Result<()> {
        self.store
            .set(&keys::progress(book_id), &chapter_index.to_string())
            .await
    }

    pub async fn clear_progress(&self, book_id: &str) -> Result<()> {
        self.store.remove(&keys::progress(book_id)).await
    }

    // ===== Streak bookkeeping =====

    /// Last recorded reading day as stored (ISO date string)
    pub async fn last_read_day(&self) -> Option<String> {
        match self.store.get(keys::LAST_READ_DAY).await {
            Ok(day) => day,
            Err(e) => {
                warn!("lastReadDay read failed: {e}");
                None
            }
        }
    }

    pub async fn set_last_read_day(&self, day: &str) -> Result<()> {
        self.store.set(keys::LAST_READ_DAY, day).await
    }

    /// Current streak; absent or malformed reads as 0
    pub async fn day_streak(&self) -> u32 {
        match self.store.get(keys::DAY_STREAK).await {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("dayStreak holds non-numeric value {raw:?}, resetting to 0");
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                warn!("dayStreak read failed, treating as 0: {e}");
                0
            }
        }
    }

    pub async fn set_day_streak(&self, streak: u32) -> Result<()> {
        self.store.set(keys::DAY_STREAK, &streak.to_string()).await
    }
}

/// Keep the first occurrence of each ID, preserving order
fn dedup_preserving_order(ids: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn facade() -> StorageFacade<MemoryStore> {
        StorageFacade::new(MemoryStore::new())
    }

    #[tokio::test]
    async fn test_nickname_defaults_to_placeholder() {
        let storage = facade();
        assert_eq!(storage.nickname().await, DEFAULT_NICKNAME);

        storage.set_nickname("Luna").await.unwrap();
        assert_eq!(storage.nickname().await, "Luna");
    }

    #[tokio::test]
    async fn test_id_lists_default_empty_and_round_trip() {
        let storage = facade();
        assert!(storage.read_ids().await.is_empty());
        assert!(storage.pending_ids().await.is_empty());

        storage
            .set_read_ids(&["2".to_string(), "1".to_string()])
            .await
            .unwrap();
        assert_eq!(storage.read_ids().await, vec!["2", "1"]);
    }

    #[tokio::test]
    async fn test_malformed_list_reads_as_empty() {
        let storage = facade();
        storage
            .store()
            .set(keys::READ_BOOKS, "not json at all")
            .await
            .unwrap();
        assert!(storage.read_ids().await.is_empty());
    }

    #[tokio::test]
    async fn test_duplicates_are_dropped_on_load_and_store() {
        let storage = facade();
        storage
            .store()
            .set(keys::PENDING_BOOKS, r#"["3","1","3","1","2"]"#)
            .await
            .unwrap();
        assert_eq!(storage.pending_ids().await, vec!["3", "1", "2"]);

        storage
            .set_pending_ids(&["5".to_string(), "5".to_string()])
            .await
            .unwrap();
        assert_eq!(storage.pending_ids().await, vec!["5"]);
    }

    #[tokio::test]
    async fn test_progress_cursor_round_trip() {
        let storage = facade();
        assert_eq!(storage.progress("8").await, None);

        storage.set_progress("8", 2).await.unwrap();
        assert_eq!(storage.progress("8").await, Some(2));

        storage.clear_progress("8").await.unwrap();
        assert_eq!(storage.progress("8").await, None);
    }

    #[tokio::test]
    async fn test_non_numeric_progress_reads_as_absent() {
        let storage = facade();
        storage
            .store()
            .set(&keys::progress("8"), "chapter two")
            .await
            .unwrap();
        assert_eq!(storage.progress("8").await, None);
    }

    #[tokio::test]
    async fn test_failed_reads_recover_to_defaults() {
        let store = Arc::new(crate::storage::kv::test_support::FlakyStore::new());
        let storage = StorageFacade::from_shared(Arc::clone(&store));

        storage.set_nickname("Luna").await.unwrap();
        storage.set_read_ids(&["1".to_string()]).await.unwrap();
        storage.set_progress("1", 2).await.unwrap();
        storage.set_day_streak(3).await.unwrap();
        storage.set_last_read_day("2025-11-02").await.unwrap();

        // Every accessor absorbs the backend failure with its safe default
        store.fail_reads(true);
        assert_eq!(storage.nickname().await, DEFAULT_NICKNAME);
        assert!(storage.read_ids().await.is_empty());
        assert!(storage.pending_ids().await.is_empty());
        assert_eq!(storage.progress("1").await, None);
        assert_eq!(storage.day_streak().await, 0);
        assert_eq!(storage.last_read_day().await, None);

        // The data was never lost, only unreadable
        store.fail_reads(false);
        assert_eq!(storage.nickname().await, "Luna");
        assert_eq!(storage.read_ids().await, vec!["1"]);
        assert_eq!(storage.progress("1").await, Some(2));
        assert_eq!(storage.day_streak().await, 3);
    }

    #[tokio::test]
    async fn test_streak_defaults() {
        let storage = facade();
        assert_eq!(storage.day_streak().await, 0);
        assert_eq!(storage.last_read_day().await, None);

        storage.set_day_streak(4).await.unwrap();
        storage.set_last_read_day("2025-11-02").await.unwrap();
        assert_eq!(storage.day_streak().await, 4);
        assert_eq!(storage.last_read_day().await.as_deref(), Some("2025-11-02"));
    }
}
