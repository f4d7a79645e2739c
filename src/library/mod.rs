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


//! Library state: finished and in-progress books
//!
//! The persisted state is two ID lists (read and pending) plus per-book
//! chapter cursors; everything a screen shows is derived on load by
//! reconciling those lists against the catalog. [`reconcile`] is the pure
//! derivation; [`LibraryService`] wires it to a [`CatalogProvider`] and the
//! storage facade and owns the two mutating transitions, `mark_as_done` and
//! `mark_as_pending`.
//!
//! Both transitions are idempotent so a retry after a partially applied
//! update (the keys are independent, there is no cross-key transaction)
//! converges to the same end state.
//!
//! [`CatalogProvider`]: crate::catalog::CatalogProvider

pub mod reconcile;
pub mod service;

pub use reconcile::{reconcile, LibrarySnapshot, ReaderLevel};
pub use service::LibraryService;
