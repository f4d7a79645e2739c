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


//! Home-screen catalog filtering
//!
//! Pure helpers over a book slice; the home screen combines a selected
//! category pill with a free-text title search.

use crate::catalog::models::Book;

/// The pseudo-category that matches every book
pub const ALL_CATEGORY: &str = "All";

/// Filter books by category pill and title search, preserving catalog order.
///
/// `category` equal to [`ALL_CATEGORY`] matches everything; the title match
/// is a case-insensitive substring test and an empty query matches all.
pub fn filter_books<'a>(books: &'a [Book], category: &str, query: &str) -> Vec<&'a Book> {
    let query = query.to_lowercase();
    books
        .iter()
        .filter(|book| category == ALL_CATEGORY || book.category == category)
        .filter(|book| query.is_empty() || book.title.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::test_fixtures::fixture_catalog;

    #[test]
    fn test_all_category_matches_everything() {
        let books = fixture_catalog();
        assert_eq!(filter_books(&books, ALL_CATEGORY, "").len(), books.len());
    }

    #[test]
    fn test_category_filter() {
        let books = fixture_catalog();
        let magic = filter_books(&books, "Magic World", "");
        assert_eq!(magic.len(), 1);
        assert_eq!(magic[0].id, "2");
    }

    #[test]
    fn test_search_is_case_insensitive_and_composes() {
        let books = fixture_catalog();
        let hits = filter_books(&books, ALL_CATEGORY, "mOoN");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Moon Garden");

        // Search within a non-matching category yields nothing
        assert!(filter_books(&books, "Animal Tales", "moon").is_empty());
    }
}
