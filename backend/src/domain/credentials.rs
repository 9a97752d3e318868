//! Credential store service.
//!
//! Implements [`CredentialStore`] over a [`UserRepository`]. The user list is
//! reloaded for every call and written back in full on registration. Password
//! storage and comparison go through a [`PasswordPolicy`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{CredentialStore, UserRepository, UserRepositoryError};
use crate::domain::{
    Error, LoginCredentials, Notice, PasswordPolicy, PlaintextPasswords, Reported, User,
};

pub(crate) const USER_ADDED: &str = "Utilisateur ajouté avec succès.";
pub(crate) const USER_EXISTS: &str = "Cet utilisateur existe déjà.";

/// Credential store backed by a user repository.
#[derive(Clone)]
pub struct CredentialStoreService<R, P = PlaintextPasswords> {
    users: Arc<R>,
    passwords: P,
}

impl<R> CredentialStoreService<R, PlaintextPasswords> {
    /// Create a service comparing passwords in plaintext.
    pub fn new(users: Arc<R>) -> Self {
        Self::with_policy(users, PlaintextPasswords)
    }
}

impl<R, P> CredentialStoreService<R, P> {
    /// Create a service using a custom password policy.
    pub fn with_policy(users: Arc<R>, passwords: P) -> Self {
        Self { users, passwords }
    }
}

impl<R, P> CredentialStoreService<R, P>
where
    R: UserRepository,
    P: PasswordPolicy,
{
    /// Load every user.
    ///
    /// A malformed user file does not fail the call: it yields an empty list
    /// and an error notice naming the file.
    pub async fn load(&self) -> Result<Reported<Vec<User>>, Error> {
        match self.users.load_all().await {
            Ok(users) => Ok(Reported::quiet(users)),
            Err(UserRepositoryError::Malformed { file, message }) => {
                error!(file = %file, error = %message, "user file unreadable; using empty user set");
                Ok(Reported::with_notice(
                    Vec::new(),
                    Notice::error(format!("Erreur de lecture du fichier {file}.")),
                ))
            }
            Err(err @ UserRepositoryError::Io { .. }) => Err(map_user_error(err)),
        }
    }

    /// Overwrite the stored users.
    pub async fn save(&self, users: &[User]) -> Result<(), Error> {
        self.users.save_all(users).await.map_err(map_user_error)
    }
}

fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Malformed { file, message } => {
            Error::internal(format!("user file {file} is malformed: {message}"))
        }
        UserRepositoryError::Io { file, message } => {
            Error::service_unavailable(format!("user file {file} unavailable: {message}"))
        }
    }
}

#[async_trait]
impl<R, P> CredentialStore for CredentialStoreService<R, P>
where
    R: UserRepository,
    P: PasswordPolicy,
{
    async fn check_credentials(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Reported<bool>, Error> {
        let loaded = self.load().await?;
        Ok(loaded.map(|users| {
            users.iter().any(|user| {
                user.username() == credentials.username()
                    && self.passwords.matches(user.password(), credentials.password())
            })
        }))
    }

    async fn add_user(&self, credentials: &LoginCredentials) -> Result<Reported<bool>, Error> {
        let Reported {
            value: mut users,
            mut notices,
        } = self.load().await?;

        if users
            .iter()
            .any(|user| user.username() == credentials.username())
        {
            notices.push(Notice::warning(USER_EXISTS));
            return Ok(Reported {
                value: false,
                notices,
            });
        }

        users.push(User::new(
            credentials.username(),
            self.passwords.stored_form(credentials.password()),
        ));
        self.save(&users).await?;
        info!(username = credentials.username(), total = users.len(), "user registered");

        notices.push(Notice::success(USER_ADDED));
        Ok(Reported {
            value: true,
            notices,
        })
    }
}
