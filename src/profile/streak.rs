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


//! Day-streak arithmetic
//!
//! Pure date logic; the persistence side lives in
//! [`ProfileService`](crate::profile::ProfileService).

use chrono::NaiveDate;

/// Stored format for `lastReadDay`
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// New streak value after reading on `today`.
///
/// Same day twice keeps the streak, a consecutive day extends it, and a gap
/// (or an unparseable stored day) starts over at 1.
pub fn next_streak(last_day: Option<NaiveDate>, current: u32, today: NaiveDate) -> u32 {
    match last_day {
        Some(last) if last == today => current.max(1),
        Some(last) if last.succ_opt() == Some(today) => current.saturating_add(1),
        _ => 1,
    }
}

/// Parse a stored `lastReadDay` value; `None` for malformed strings
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DAY_FORMAT).ok()
}
