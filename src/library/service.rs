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


//! Library service: loads and mutates the persisted library state

use crate::catalog::CatalogProvider;
use crate::error::Result;
use crate::library::reconcile::{reconcile, LibrarySnapshot};
use crate::storage::{KeyValueStore, StorageFacade};
use log::debug;
use std::sync::Arc;

/// Owns the catalog and storage collaborators for the library screens
#[derive(Debug)]
pub struct LibraryService<C, S> {
    catalog: Arc<C>,
    storage: StorageFacade<S>,
}

impl<C, S> Clone for LibraryService<C, S> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            storage: self.storage.clone(),
        }
    }
}

impl<C, S> LibraryService<C, S>
where
    C: CatalogProvider,
    S: KeyValueStore,
{
    pub fn new(catalog: C, storage: StorageFacade<S>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            storage,
        }
    }

    pub fn from_shared(catalog: Arc<C>, storage: StorageFacade<S>) -> Self {
        Self { catalog, storage }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn storage(&self) -> &StorageFacade<S> {
        &self.storage
    }

    /// Load the current library view.
    ///
    /// The catalog fetch and both list reads touch independent sources, so
    /// they are issued concurrently and awaited jointly.
    pub async fn load(&self) -> Result<LibrarySnapshot> {
        let (books, read_ids, pending_ids) = tokio::join!(
            self.catalog.fetch_books(),
            self.storage.read_ids(),
            self.storage.pending_ids(),
        );
        Ok(reconcile(&books?, &read_ids, &pending_ids))
    }

    /// Mark a book finished: add to the read list, drop from pending, clear
    /// the chapter cursor.
    ///
    /// Unknown catalog IDs are a silent no-op; stale IDs must never crash a
    /// screen action. Idempotent, and safe to retry after a partial write
    /// failure since each step re-derives its target state.
    pub async fn mark_as_done(&self, book_id: &str) -> Result<()> {
        if self.catalog.fetch_book_by_id(book_id).await?.is_none() {
            debug!("mark_as_done({book_id}): not in catalog, ignoring");
            return Ok(());
        }

        let mut read_ids = self.storage.read_ids().await;
        if !read_ids.iter().any(|id| id == book_id) {
            read_ids.push(book_id.to_string());
        }

        let pending_ids: Vec<String> = self
            .storage
            .pending_ids()
            .await
            .into_iter()
            .filter(|id| id != book_id)
            .collect();

        self.storage.set_read_ids(&read_ids).await?;
        self.storage.set_pending_ids(&pending_ids).await?;
        self.storage.clear_progress(book_id).await?;

        debug!("mark_as_done({book_id}): {} books finished", read_ids.len());
        Ok(())
    }

    /// Mark a book as in progress when the user starts reading.
    ///
    /// No-op if the book is already finished (a finished book never returns
    /// to pending) or already pending.
    pub async fn mark_as_pending(&self, book_id: &str) -> Result<()> {
        let (read_ids, mut pending_ids) =
            tokio::join!(self.storage.read_ids(), self.storage.pending_ids());

        if read_ids.iter().any(|id| id == book_id) {
            debug!("mark_as_pending({book_id}): already finished, ignoring");
            return Ok(());
        }
        if pending_ids.iter().any(|id| id == book_id) {
            return Ok(());
        }

        pending_ids.push(book_id.to_string());
        self.storage.set_pending_ids(&pending_ids).await
    }
}
