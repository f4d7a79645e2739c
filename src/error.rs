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


//! Error types for BookLing Core
//!
//! This module defines error types using thiserror for ergonomic error handling.
//! Errors are categorized by domain (catalog, storage, profile) for better
//! error handling and reporting.
//!
//! The recovery policy is deliberately forgiving: read-side storage failures
//! are absorbed at the facade with safe defaults (empty list, placeholder
//! nickname, absent cursor) and only logged, so most of these variants are
//! only ever seen by callers of the mutating operations.

use thiserror::Error;

/// Result type alias using our BooklingError type
pub type Result<T> = std::result::Result<T, BooklingError>;

/// Main error type for BookLing Core
#[derive(Error, Debug)]
pub enum BooklingError {
    // ===== Catalog Errors =====

    /// Requested book ID is not present in the catalog
    #[error("Book not found in catalog: {book_id}")]
    BookNotFound { book_id: String },

    // ===== Storage Errors =====

    /// Reading a key from the key-value store failed
    #[error("Storage read failed for key '{key}': {message}")]
    StorageReadFailed { key: String, message: String },

    /// Writing a key to the key-value store failed
    #[error("Storage write failed for key '{key}': {message}")]
    StorageWriteFailed { key: String, message: String },

    /// SQLite database error (via sqlx)
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Filesystem error while opening the backing store
    #[error("File I/O error: {0}")]
    FileIoError(String),

    // ===== Profile Errors =====

    /// Nickname is empty or whitespace-only
    #[error("Invalid nickname: {reason}")]
    InvalidNickname { reason: String },
}

impl BooklingError {
    /// Wrap a storage backend error as a read failure for `key`
    pub fn read_failed(key: impl Into<String>, err: impl std::fmt::Display) -> Self {
        BooklingError::StorageReadFailed {
            key: key.into(),
            message: err.to_string(),
        }
    }

    /// Wrap a storage backend error as a write failure for `key`
    pub fn write_failed(key: impl Into<String>, err: impl std::fmt::Display) -> Self {
        BooklingError::StorageWriteFailed {
            key: key.into(),
            message: err.to_string(),
        }
    }
}
