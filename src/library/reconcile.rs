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


//! Pure library-state derivation

use crate::catalog::Book;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Reader level badge, derived from the finished-book count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReaderLevel {
    NewReader,
    RisingStar,
    BookWorm,
    MasterReader,
}

impl ReaderLevel {
    /// Level for a given number of finished books
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => ReaderLevel::NewReader,
            1..=2 => ReaderLevel::RisingStar,
            3..=6 => ReaderLevel::BookWorm,
            _ => ReaderLevel::MasterReader,
        }
    }

    /// Display label, as shown on the home and profile screens
    pub fn label(&self) -> &'static str {
        match self {
            ReaderLevel::NewReader => "New Reader",
            ReaderLevel::RisingStar => "Rising Star",
            ReaderLevel::BookWorm => "Book Worm",
            ReaderLevel::MasterReader => "Master Reader",
        }
    }

    /// Levels in ascending order, for milestone counting
    pub fn ladder() -> [ReaderLevel; 4] {
        [
            ReaderLevel::NewReader,
            ReaderLevel::RisingStar,
            ReaderLevel::BookWorm,
            ReaderLevel::MasterReader,
        ]
    }
}

impl std::fmt::Display for ReaderLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The user-facing view of the library, derived on every screen load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibrarySnapshot {
    /// Finished books, in catalog order
    pub finished_books: Vec<Book>,

    /// In-progress books, in catalog order
    pub pending_books: Vec<Book>,

    /// Level derived from the finished count
    pub reader_level: ReaderLevel,
}

/// Derive the library view from the catalog and the persisted ID lists.
///
/// Books come out in catalog order with no duplicates. IDs absent from the
/// catalog are skipped, and an ID present in both lists (stale pending entry
/// left by an interrupted finish) shows up in both views; the next
/// `mark_as_done` touch cleans it up.
pub fn reconcile(catalog: &[Book], read_ids: &[String], pending_ids: &[String]) -> LibrarySnapshot {
    let read: HashSet<&str> = read_ids.iter().map(String::as_str).collect();
    let pending: HashSet<&str> = pending_ids.iter().map(String::as_str).collect();

    let finished_books: Vec<Book> = catalog
        .iter()
        .filter(|b| read.contains(b.id.as_str()))
        .cloned()
        .collect();
    let pending_books: Vec<Book> = catalog
        .iter()
        .filter(|b| pending.contains(b.id.as_str()))
        .cloned()
        .collect();

    // Level counts catalog-known finished books, not raw list entries
    let reader_level = ReaderLevel::from_count(finished_books.len());

    LibrarySnapshot {
        finished_books,
        pending_books,
        reader_level,
    }
}
