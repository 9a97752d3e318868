//! JSON-file repositories for operators and guests.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    GuestRepository, GuestRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{Guest, User};

use super::json_file::{JsonFile, JsonFileError};

/// Stores users as a JSON array of `{username, password}` objects.
#[derive(Clone)]
pub struct JsonUserRepository {
    file: JsonFile,
}

impl JsonUserRepository {
    pub fn new(file: JsonFile) -> Self {
        Self { file }
    }
}

fn map_user_error(error: JsonFileError) -> UserRepositoryError {
    match error {
        JsonFileError::Malformed { file, message } => UserRepositoryError::malformed(file, message),
        JsonFileError::Io { file, message } => UserRepositoryError::io(file, message),
    }
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    async fn load_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let users: Option<Vec<User>> = self.file.read().await.map_err(map_user_error)?;
        if users.is_none() {
            debug!(file = self.file.name(), "user file absent; starting empty");
        }
        Ok(users.unwrap_or_default())
    }

    async fn save_all(&self, users: &[User]) -> Result<(), UserRepositoryError> {
        self.file.write(users).await.map_err(map_user_error)
    }
}

/// Stores guests as a JSON array of records keyed as in [`Guest`].
#[derive(Clone)]
pub struct JsonGuestRepository {
    file: JsonFile,
}

impl JsonGuestRepository {
    pub fn new(file: JsonFile) -> Self {
        Self { file }
    }
}

fn map_guest_error(error: JsonFileError) -> GuestRepositoryError {
    match error {
        JsonFileError::Malformed { file, message } => {
            GuestRepositoryError::malformed(file, message)
        }
        JsonFileError::Io { file, message } => GuestRepositoryError::io(file, message),
    }
}

#[async_trait]
impl GuestRepository for JsonGuestRepository {
    async fn load_all(&self) -> Result<Vec<Guest>, GuestRepositoryError> {
        let guests: Option<Vec<Guest>> = self.file.read().await.map_err(map_guest_error)?;
        Ok(guests.unwrap_or_default())
    }

    async fn save_all(&self, guests: &[Guest]) -> Result<(), GuestRepositoryError> {
        self.file.write(guests).await.map_err(map_guest_error)
    }
}
