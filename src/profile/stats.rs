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


//! Profile service: nickname, reading stats, and streak persistence

use crate::error::{BooklingError, Result};
use crate::library::ReaderLevel;
use crate::profile::streak::{self, DAY_FORMAT};
use crate::storage::{KeyValueStore, StorageFacade};
use chrono::{Local, NaiveDate};
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};

/// The numbers on the profile screen's stat tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderStats {
    /// Finished books
    pub books_read: usize,

    /// Books started but not finished
    pub pending: usize,

    /// Consecutive reading days
    pub day_streak: u32,

    /// Earned badges (level milestones plus one per five finished books)
    pub badges: u32,
}

/// Where "Continue Reading" should drop the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeTarget {
    pub book_id: String,
    /// Saved cursor, or the first chapter when nothing is saved
    pub chapter_index: usize,
}

/// Storage-backed profile operations
#[derive(Debug)]
pub struct ProfileService<S> {
    storage: StorageFacade<S>,
}

impl<S> Clone for ProfileService<S> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<S: KeyValueStore> ProfileService<S> {
    pub fn new(storage: StorageFacade<S>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &StorageFacade<S> {
        &self.storage
    }

    // ===== Nickname =====

    pub async fn nickname(&self) -> String {
        self.storage.nickname().await
    }

    /// Store the onboarding nickname, trimmed.
    ///
    /// Empty or whitespace-only input is rejected; returns the stored form.
    pub async fn set_nickname(&self, raw: &str) -> Result<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BooklingError::InvalidNickname {
                reason: "nickname cannot be empty".to_string(),
            });
        }
        self.storage.set_nickname(trimmed).await?;
        Ok(trimmed.to_string())
    }

    // ===== Stats =====

    /// Load the stat tiles; the three keys are read concurrently
    pub async fn stats(&self) -> ReaderStats {
        let (read_ids, pending_ids, day_streak) = tokio::join!(
            self.storage.read_ids(),
            self.storage.pending_ids(),
            self.storage.day_streak(),
        );
        let books_read = read_ids.len();
        ReaderStats {
            books_read,
            pending: pending_ids.len(),
            day_streak,
            badges: badges_for(books_read),
        }
    }

    // ===== Streak =====

    /// Record that the user read today; returns the updated streak
    pub async fn record_reading_day(&self) -> Result<u32> {
        self.record_reading_day_on(Local::now().date_naive()).await
    }

    /// Streak update pinned to a specific day (clock injected for tests)
    pub async fn record_reading_day_on(&self, today: NaiveDate) -> Result<u32> {
        let last_day = self
            .storage
            .last_read_day()
            .await
            .and_then(|raw| streak::parse_day(&raw));
        let current = self.storage.day_streak().await;

        let updated = streak::next_streak(last_day, current, today);
        self.storage.set_day_streak(updated).await?;
        self.storage
            .set_last_read_day(&today.format(DAY_FORMAT).to_string())
            .await?;
        Ok(updated)
    }

    // ===== Continue reading =====

    /// Resume target for one pending book
    pub async fn resume_target(&self, book_id: &str) -> ResumeTarget {
        let chapter_index = self.storage.progress(book_id).await.unwrap_or(0);
        ResumeTarget {
            book_id: book_id.to_string(),
            chapter_index,
        }
    }

    /// Resume targets for a batch of pending books, cursors read concurrently
    pub async fn resume_targets(&self, book_ids: &[String]) -> Vec<ResumeTarget> {
        join_all(book_ids.iter().map(|id| self.resume_target(id))).await
    }
}

/// Badge count for a number of finished books: one per reader level attained
/// beyond "New Reader", plus one per five books
fn badges_for(books_read: usize) -> u32 {
    let level = ReaderLevel::from_count(books_read);
    let milestones = ReaderLevel::ladder()
        .iter()
        .position(|l| *l == level)
        .unwrap_or(0) as u32;
    milestones + (books_read / 5) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, DEFAULT_NICKNAME};

    fn service() -> ProfileService<MemoryStore> {
        ProfileService::new(StorageFacade::new(MemoryStore::new()))
    }

    fn day(s: &str) -> NaiveDate {
        streak::parse_day(s).expect("test date")
    }

    #[tokio::test]
    async fn test_nickname_trim_and_reject() {
        let profile = service();
        assert_eq!(profile.nickname().await, DEFAULT_NICKNAME);

        let stored = profile.set_nickname("  Luna  ").await.expect("valid");
        assert_eq!(stored, "Luna");
        assert_eq!(profile.nickname().await, "Luna");

        let err = profile.set_nickname("   ").await.expect_err("rejected");
        assert!(matches!(err, BooklingError::InvalidNickname { .. }));
        // Rejected input leaves the stored nickname untouched
        assert_eq!(profile.nickname().await, "Luna");
    }

    #[tokio::test]
    async fn test_stats_from_empty_storage() {
        let stats = service().stats().await;
        assert_eq!(
            stats,
            ReaderStats {
                books_read: 0,
                pending: 0,
                day_streak: 0,
                badges: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_badge_milestones() {
        assert_eq!(badges_for(0), 0);
        assert_eq!(badges_for(1), 1); // Rising Star
        assert_eq!(badges_for(3), 2); // Book Worm
        assert_eq!(badges_for(5), 3); // Book Worm + five-book badge
        assert_eq!(badges_for(7), 4); // Master Reader + five-book badge
        assert_eq!(badges_for(10), 5);
    }

    #[tokio::test]
    async fn test_streak_persists_and_extends() {
        let profile = service();
        assert_eq!(
            profile.record_reading_day_on(day("2025-11-01")).await.unwrap(),
            1
        );
        assert_eq!(
            profile.record_reading_day_on(day("2025-11-02")).await.unwrap(),
            2
        );
        // Same day again changes nothing
        assert_eq!(
            profile.record_reading_day_on(day("2025-11-02")).await.unwrap(),
            2
        );
        // A gap starts over
        assert_eq!(
            profile.record_reading_day_on(day("2025-11-09")).await.unwrap(),
            1
        );
        assert_eq!(profile.stats().await.day_streak, 1);
    }

    #[tokio::test]
    async fn test_resume_targets_default_to_first_chapter() {
        let profile = service();
        profile.storage().set_progress("2", 3).await.unwrap();

        let targets = profile
            .resume_targets(&["1".to_string(), "2".to_string()])
            .await;
        assert_eq!(targets[0].chapter_index, 0);
        assert_eq!(targets[1].chapter_index, 3);
    }
}
