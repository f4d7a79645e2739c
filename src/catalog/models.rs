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


//! Catalog data models
//!
//! A [`Book`] owns an ordered sequence of [`Chapter`]s; the order is the
//! reading order. Both types are immutable once loaded from the catalog
//! asset. Image fields are asset names resolved by the host app, never
//! touched by this crate.

use serde::{Deserialize, Serialize};

/// One illustrated chapter of a storybook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter ID, unique within its book
    pub id: String,

    /// Chapter title for display
    pub title: String,

    /// Full chapter text
    pub content: String,

    /// Background illustration asset name
    pub image: String,
}

/// A storybook from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable, unique book ID (the key used across all persisted state)
    pub id: String,

    /// Book title for display
    pub title: String,

    /// Catalog category this book belongs to
    pub category: String,

    /// Short blurb shown on the details screen
    pub description: String,

    /// Cover illustration asset name
    pub image: String,

    /// Chapters in reading order
    pub chapters: Vec<Chapter>,
}

impl Book {
    /// Number of chapters in this book
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Index of the last chapter, or `None` for a book with no chapters
    pub fn last_chapter_index(&self) -> Option<usize> {
        self.chapters.len().checked_sub(1)
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    /// Build a minimal book with `chapters` numbered chapters
    pub fn book(id: &str, title: &str, category: &str, chapters: usize) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            description: format!("About {title}"),
            image: format!("{id}.jpg"),
            chapters: (0..chapters)
                .map(|n| Chapter {
                    id: (n + 1).to_string(),
                    title: format!("Chapter {}", n + 1),
                    content: format!("Once upon a time, part {}.", n + 1),
                    image: format!("{id}-ch{}.jpg", n + 1),
                })
                .collect(),
        }
    }

    /// A small fixture catalog: three books across two categories
    pub fn fixture_catalog() -> Vec<Book> {
        vec![
            book("1", "The Sleepy Fox", "Animal Tales", 3),
            book("2", "Moon Garden", "Magic World", 5),
            book("3", "Comet Friends", "Space & Stars", 2),
        ]
    }
}
