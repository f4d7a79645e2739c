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


//! Reader session state machine

use crate::catalog::{Book, CatalogProvider, Chapter};
use crate::error::{BooklingError, Result};
use crate::library::LibraryService;
use crate::reader::progress::ReadingProgress;
use crate::storage::KeyValueStore;
use log::debug;

/// Lifecycle of a reading session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// A chapter is open
    Reading,
    /// The final chapter was turned past; the book is finished
    Finished,
}

/// Outcome of an [`advance`](ReaderSession::advance) call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the chapter at this index
    Turned { chapter_index: usize },
    /// The book is finished; the caller navigates away
    Finished,
}

/// One open book, one cursor
///
/// The session resolves its starting chapter from, in order of precedence:
/// an explicit chapter parameter (the "continue reading" deep link), the
/// persisted cursor, or the first chapter. The resolved index is persisted
/// on open and after every turn, never batched, so a killed process resumes
/// at the last chapter the reader actually saw.
#[derive(Debug)]
pub struct ReaderSession<C, S> {
    library: LibraryService<C, S>,
    book: Book,
    chapter_index: usize,
    state: SessionState,
    /// "Sombre" dim reading mode; per-session UI state, never persisted
    dim_mode: bool,
}

impl<C, S> ReaderSession<C, S>
where
    C: CatalogProvider,
    S: KeyValueStore,
{
    /// Open a session on `book_id`.
    ///
    /// `chapter_param` is the navigation parameter, if the caller arrived
    /// through a deep link; it wins over the persisted cursor. Out-of-range
    /// values (from a cursor saved against an older catalog revision) are
    /// clamped to the last chapter.
    ///
    /// Fails with [`BooklingError::BookNotFound`] when the ID is unknown or
    /// the book has no chapters to show; the data is static, so there is
    /// nothing to retry.
    pub async fn open(
        library: LibraryService<C, S>,
        book_id: &str,
        chapter_param: Option<usize>,
    ) -> Result<Self> {
        let book = library
            .catalog()
            .fetch_book_by_id(book_id)
            .await?
            .ok_or_else(|| BooklingError::BookNotFound {
                book_id: book_id.to_string(),
            })?;

        let last_index = book.last_chapter_index().ok_or_else(|| {
            // A chapterless book cannot be read; same screen as an unknown ID
            BooklingError::BookNotFound {
                book_id: book_id.to_string(),
            }
        })?;

        let resolved = match chapter_param {
            Some(index) => index,
            None => library.storage().progress(book_id).await.unwrap_or(0),
        };
        let chapter_index = resolved.min(last_index);

        let session = Self {
            library,
            book,
            chapter_index,
            state: SessionState::Reading,
            dim_mode: false,
        };
        session
            .library
            .storage()
            .set_progress(&session.book.id, chapter_index)
            .await?;

        debug!(
            "reader session open: book {} at chapter {}",
            session.book.id, chapter_index
        );
        Ok(session)
    }

    /// Turn the page.
    ///
    /// Before the last chapter this moves the cursor forward and persists it.
    /// On the last chapter it performs the finished-book transition (read
    /// list gains the book, pending list and cursor drop it) and the session
    /// becomes [`SessionState::Finished`]; further calls are no-ops that
    /// report [`Advance::Finished`] again.
    pub async fn advance(&mut self) -> Result<Advance> {
        if self.state == SessionState::Finished {
            return Ok(Advance::Finished);
        }

        let last_index = self.book.chapters.len() - 1;
        if self.chapter_index < last_index {
            self.chapter_index += 1;
            self.library
                .storage()
                .set_progress(&self.book.id, self.chapter_index)
                .await?;
            Ok(Advance::Turned {
                chapter_index: self.chapter_index,
            })
        } else {
            self.library.mark_as_done(&self.book.id).await?;
            self.state = SessionState::Finished;
            debug!("reader session finished: book {}", self.book.id);
            Ok(Advance::Finished)
        }
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn chapter_index(&self) -> usize {
        self.chapter_index
    }

    /// The chapter currently on screen
    pub fn current_chapter(&self) -> &Chapter {
        &self.book.chapters[self.chapter_index]
    }

    /// Whether the next advance finishes the book
    pub fn on_last_chapter(&self) -> bool {
        self.chapter_index + 1 == self.book.chapters.len()
    }

    pub fn progress(&self) -> ReadingProgress {
        ReadingProgress::new(self.chapter_index, self.book.chapters.len())
    }

    // ===== Dim ("sombre") reading mode =====

    pub fn dim_mode(&self) -> bool {
        self.dim_mode
    }

    pub fn toggle_dim_mode(&mut self) -> bool {
        self.dim_mode = !self.dim_mode;
        self.dim_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::test_fixtures::fixture_catalog;
    use crate::catalog::provider::test_support::FixtureCatalog;
    use crate::storage::{MemoryStore, StorageFacade};

    fn library() -> LibraryService<FixtureCatalog, MemoryStore> {
        LibraryService::new(
            FixtureCatalog::new(fixture_catalog()),
            StorageFacade::new(MemoryStore::new()),
        )
    }

    #[tokio::test]
    async fn test_open_starts_at_first_chapter() {
        let lib = library();
        let session = ReaderSession::open(lib.clone(), "2", None).await.expect("open");
        assert_eq!(session.chapter_index(), 0);
        assert_eq!(session.state(), SessionState::Reading);
        // The resolved position is persisted immediately
        assert_eq!(lib.storage().progress("2").await, Some(0));
    }

    #[tokio::test]
    async fn test_open_resumes_from_cursor() {
        let lib = library();
        lib.storage().set_progress("2", 2).await.unwrap();

        let session = ReaderSession::open(lib, "2", None).await.expect("open");
        assert_eq!(session.chapter_index(), 2);
    }

    #[tokio::test]
    async fn test_chapter_param_beats_cursor() {
        let lib = library();
        lib.storage().set_progress("2", 2).await.unwrap();

        let session = ReaderSession::open(lib, "2", Some(4)).await.expect("open");
        assert_eq!(session.chapter_index(), 4);
    }

    #[tokio::test]
    async fn test_out_of_range_cursor_is_clamped() {
        let lib = library();
        // Book "1" has 3 chapters; a cursor from an older, longer edition
        lib.storage().set_progress("1", 9).await.unwrap();

        let session = ReaderSession::open(lib, "1", None).await.expect("open");
        assert_eq!(session.chapter_index(), 2);
        assert!(session.on_last_chapter());
    }

    #[tokio::test]
    async fn test_unknown_book_is_not_found() {
        let err = ReaderSession::open(library(), "ghost", None)
            .await
            .expect_err("unknown ID cannot start a session");
        assert!(matches!(err, BooklingError::BookNotFound { .. }));
    }

    #[tokio::test]
    async fn test_advance_persists_every_turn() {
        let lib = library();
        let mut session = ReaderSession::open(lib.clone(), "2", None).await.expect("open");

        let advance = session.advance().await.expect("advance");
        assert_eq!(advance, Advance::Turned { chapter_index: 1 });
        assert_eq!(lib.storage().progress("2").await, Some(1));

        session.advance().await.expect("advance");
        assert_eq!(lib.storage().progress("2").await, Some(2));
        assert_eq!(session.current_chapter().title, "Chapter 3");
    }

    #[tokio::test]
    async fn test_finishing_transition() {
        let lib = library();
        lib.mark_as_pending("3").await.unwrap();
        // Book "3" has 2 chapters; open on the last one
        let mut session = ReaderSession::open(lib.clone(), "3", Some(1)).await.expect("open");
        assert!(session.on_last_chapter());

        let advance = session.advance().await.expect("advance");
        assert_eq!(advance, Advance::Finished);
        assert_eq!(session.state(), SessionState::Finished);

        assert_eq!(lib.storage().read_ids().await, vec!["3"]);
        assert!(lib.storage().pending_ids().await.is_empty());
        assert_eq!(lib.storage().progress("3").await, None);

        // Advancing a finished session stays a no-op
        assert_eq!(session.advance().await.expect("advance"), Advance::Finished);
        assert_eq!(lib.storage().read_ids().await, vec!["3"]);
    }

    #[tokio::test]
    async fn test_dim_mode_is_session_only() {
        let lib = library();
        let mut session = ReaderSession::open(lib.clone(), "1", None).await.expect("open");
        assert!(!session.dim_mode());
        assert!(session.toggle_dim_mode());
        assert!(!session.toggle_dim_mode());

        // Nothing about the toggle reaches storage
        let reopened = ReaderSession::open(lib, "1", None).await.expect("open");
        assert!(!reopened.dim_mode());
    }

    #[tokio::test]
    async fn test_progress_snapshot() {
        let lib = library();
        let session = ReaderSession::open(lib, "2", Some(2)).await.expect("open");
        let progress = session.progress();
        assert_eq!(progress.chapter_number, 3);
        assert_eq!(progress.chapter_count, 5);
        assert!((progress.percent_complete - 60.0).abs() < f64::EPSILON);
    }
}
