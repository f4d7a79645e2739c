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


//! The chapter-by-chapter reading session
//!
//! A [`ReaderSession`] tracks the open book and the current chapter index,
//! persisting the cursor on every turn so a killed app resumes at the last
//! *viewed* chapter. Turning past the final chapter performs the
//! finished-book transition and ends the session.

pub mod progress;
pub mod session;

pub use progress::ReadingProgress;
pub use session::{Advance, ReaderSession, SessionState};
