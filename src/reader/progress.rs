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


//! Reading-progress snapshot for the progress screen

use serde::{Deserialize, Serialize};

/// Where the reader is inside the open book
///
/// Chapter numbers are 1-based for display ("Chapter 3 of 5"); the session
/// itself works with 0-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadingProgress {
    /// 1-based chapter currently shown
    pub chapter_number: usize,

    /// Total chapters in the book
    pub chapter_count: usize,

    /// Share of chapters reached, 0.0 - 100.0
    pub percent_complete: f64,
}

impl ReadingProgress {
    pub fn new(chapter_index: usize, chapter_count: usize) -> Self {
        let chapter_number = chapter_index + 1;
        let percent_complete = if chapter_count == 0 {
            0.0
        } else {
            (chapter_number as f64 / chapter_count as f64) * 100.0
        };
        Self {
            chapter_number,
            chapter_count,
            percent_complete,
        }
    }
}
