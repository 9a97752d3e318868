//! Test utilities for the backend crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is compiled for unit tests and when the
//! `test-support` feature is enabled.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use tempfile::TempDir;

use crate::domain::ports::{
    GuestRepository, GuestRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{Guest, GuestCatalogService, User};
use crate::outbound::XlsxGuestExporter;

/// Temporary data directory opened as a capability handle.
///
/// The directory is removed when the value is dropped.
///
/// # Examples
///
/// ```rust
/// use guest_desk::test_support::DataDir;
///
/// let data = DataDir::new();
/// data.write("users.json", b"[]");
/// assert_eq!(data.read_to_string("users.json").as_deref(), Some("[]"));
/// ```
pub struct DataDir {
    temp: TempDir,
    dir: Arc<Dir>,
}

impl DataDir {
    /// Create and open a fresh temporary directory.
    ///
    /// # Panics
    ///
    /// Panics when the directory cannot be created or opened.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let dir = Dir::open_ambient_dir(temp.path(), ambient_authority()).expect("open temp dir");
        Self {
            temp,
            dir: Arc::new(dir),
        }
    }

    /// Shared handle to the directory.
    pub fn dir(&self) -> Arc<Dir> {
        Arc::clone(&self.dir)
    }

    /// Ambient path of the directory.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write `contents` to `name`, replacing any existing file.
    ///
    /// # Panics
    ///
    /// Panics when the write fails.
    pub fn write(&self, name: &str, contents: &[u8]) {
        self.dir.write(name, contents).expect("write fixture file");
    }

    /// Read `name` as UTF-8, or `None` when it does not exist.
    pub fn read_to_string(&self, name: &str) -> Option<String> {
        self.dir.read_to_string(name).ok()
    }
}

/// Guest repository backed by a vector; never fails.
#[derive(Debug, Default)]
pub struct MemoryGuestRepository {
    guests: Mutex<Vec<Guest>>,
}

impl MemoryGuestRepository {
    /// Seed the repository with `guests`.
    pub fn new(guests: Vec<Guest>) -> Self {
        Self {
            guests: Mutex::new(guests),
        }
    }

    /// Snapshot of the stored guests.
    pub fn stored(&self) -> Vec<Guest> {
        self.guests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl GuestRepository for MemoryGuestRepository {
    async fn load_all(&self) -> Result<Vec<Guest>, GuestRepositoryError> {
        Ok(self.stored())
    }

    async fn save_all(&self, guests: &[Guest]) -> Result<(), GuestRepositoryError> {
        *self.guests.lock().unwrap_or_else(PoisonError::into_inner) = guests.to_vec();
        Ok(())
    }
}

/// User repository backed by a vector; never fails.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl MemoryUserRepository {
    /// Seed the repository with `users`.
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    /// Snapshot of the stored users.
    pub fn stored(&self) -> Vec<User> {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn load_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.stored())
    }

    async fn save_all(&self, users: &[User]) -> Result<(), UserRepositoryError> {
        *self.users.lock().unwrap_or_else(PoisonError::into_inner) = users.to_vec();
        Ok(())
    }
}

/// Guest catalog over an in-memory repository and the real spreadsheet
/// exporter.
pub fn memory_catalog(guests: Vec<Guest>) -> GuestCatalogService<MemoryGuestRepository, XlsxGuestExporter> {
    GuestCatalogService::new(
        Arc::new(MemoryGuestRepository::new(guests)),
        Arc::new(XlsxGuestExporter),
    )
}
