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


//! The persisted key space
//!
//! These names are a compatibility contract with existing installs; do not
//! rename them.

/// User-chosen display name
pub const NICKNAME: &str = "nickname";

/// JSON array of finished book IDs
pub const READ_BOOKS: &str = "readBooks";

/// JSON array of in-progress book IDs
pub const PENDING_BOOKS: &str = "pendingBooks";

/// ISO date (YYYY-MM-DD) of the most recent reading day
pub const LAST_READ_DAY: &str = "lastReadDay";

/// Consecutive reading days, stringified integer
pub const DAY_STREAK: &str = "dayStreak";

/// Per-book chapter cursor key, `progress_<bookId>`
pub fn progress(book_id: &str) -> String {
    format!("progress_{book_id}")
}
