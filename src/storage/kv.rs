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


//! The key-value backend seam

use crate::error::Result;
use async_trait::async_trait;

/// Abstract asynchronous key-value store
///
/// Values are strings; structured values (the ID lists) are JSON-encoded at
/// the [`StorageFacade`](crate::storage::StorageFacade) layer, never here.
/// `remove` of an absent key is not an error.
///
/// Implementations backed by host-app storage should map backend faults to
/// [`BooklingError::StorageReadFailed`] / [`BooklingError::StorageWriteFailed`]
/// (see [`BooklingError::read_failed`] and [`BooklingError::write_failed`]);
/// the facade absorbs read faults with safe defaults.
///
/// [`BooklingError::StorageReadFailed`]: crate::error::BooklingError::StorageReadFailed
/// [`BooklingError::StorageWriteFailed`]: crate::error::BooklingError::StorageWriteFailed
/// [`BooklingError::read_failed`]: crate::error::BooklingError::read_failed
/// [`BooklingError::write_failed`]: crate::error::BooklingError::write_failed
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `Ok(None)` when the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, overwriting any previous one
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key; absent keys are a no-op
    async fn remove(&self, key: &str) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::KeyValueStore;
    use crate::error::{BooklingError, Result};
    use crate::storage::memory::MemoryStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Store double with injectable backend failures
    ///
    /// Wraps a [`MemoryStore`] so data written before a failure window is
    /// still there once the backend "recovers".
    #[derive(Debug, Default)]
    pub struct FlakyStore {
        inner: MemoryStore,
        fail_reads: AtomicBool,
        fail_set_in: AtomicUsize,
    }

    impl FlakyStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every `get` fail until turned off again
        pub fn fail_reads(&self, failing: bool) {
            self.fail_reads.store(failing, Ordering::SeqCst);
        }

        /// Fail the nth upcoming `set` call (1 = the very next one)
        pub fn fail_next_set(&self, nth: usize) {
            self.fail_set_in.store(nth, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl KeyValueStore for FlakyStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(BooklingError::read_failed(key, "injected backend failure"));
            }
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<()> {
            let armed = self.fail_set_in.load(Ordering::SeqCst);
            if armed > 0 {
                self.fail_set_in.store(armed - 1, Ordering::SeqCst);
                if armed == 1 {
                    return Err(BooklingError::write_failed(key, "injected backend failure"));
                }
            }
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<()> {
            self.inner.remove(key).await
        }
    }
}
