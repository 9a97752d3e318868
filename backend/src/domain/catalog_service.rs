//! Guest catalog service.
//!
//! Holds the process-wide guest list behind a mutex. The list is loaded from
//! the repository on first use; a failed load is reported to the caller and
//! retried on the next call. Every mutation writes the full list before the
//! in-memory copy is updated, so memory never runs ahead of storage. Exports
//! encode a snapshot on the blocking pool after the lock is released.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::domain::catalog::{
    self, GUEST_ADDED, NO_GUESTS, NO_MATCHES, NO_SELECTION_MATCH, NOTHING_TO_DELETE,
    NOTHING_TO_EXPORT,
};
use crate::domain::ports::{
    GuestCatalog, GuestExportError, GuestExporter, GuestRepository, GuestRepositoryError,
    SearchOutcome,
};
use crate::domain::{
    Error, ExportArtifact, Guest, GuestDraft, GuestKey, GuestLabelError, Notice, Reported,
};

/// Guest catalog implementing the [`GuestCatalog`] driving port.
pub struct GuestCatalogService<R, X> {
    repo: Arc<R>,
    exporter: Arc<X>,
    guests: Mutex<Option<Vec<Guest>>>,
}

impl<R, X> GuestCatalogService<R, X> {
    /// Create a service; nothing is loaded until the first call.
    pub fn new(repo: Arc<R>, exporter: Arc<X>) -> Self {
        Self {
            repo,
            exporter,
            guests: Mutex::new(None),
        }
    }
}

/// Locked, loaded guest list.
struct Loaded<'a> {
    guard: MutexGuard<'a, Option<Vec<Guest>>>,
}

impl Loaded<'_> {
    fn guests(&self) -> &[Guest] {
        self.guard.as_deref().unwrap_or_default()
    }

    fn replace(&mut self, guests: Vec<Guest>) {
        *self.guard = Some(guests);
    }
}

impl<R, X> GuestCatalogService<R, X>
where
    R: GuestRepository,
    X: GuestExporter,
{
    fn map_repository_error(error: GuestRepositoryError) -> Error {
        match error {
            GuestRepositoryError::Malformed { file, message } => {
                Error::internal(format!("guest file {file} is malformed: {message}"))
            }
            GuestRepositoryError::Io { file, message } => {
                Error::service_unavailable(format!("guest file {file} unavailable: {message}"))
            }
        }
    }

    fn map_export_error(error: GuestExportError) -> Error {
        match error {
            GuestExportError::Write { message } => {
                Error::internal(format!("guest export failed: {message}"))
            }
        }
    }

    fn map_label_error(error: GuestLabelError) -> Error {
        Error::invalid_request(error.to_string())
    }

    async fn lock_loaded(&self) -> Result<Loaded<'_>, Error> {
        let mut guard = self.guests.lock().await;
        if guard.is_none() {
            let guests = self
                .repo
                .load_all()
                .await
                .map_err(Self::map_repository_error)?;
            debug!(count = guests.len(), "guest list loaded");
            *guard = Some(guests);
        }
        Ok(Loaded { guard })
    }

    /// Persist `next`, then make it the in-memory list.
    async fn commit(&self, loaded: &mut Loaded<'_>, next: Vec<Guest>) -> Result<(), Error> {
        self.repo
            .save_all(&next)
            .await
            .map_err(Self::map_repository_error)?;
        loaded.replace(next);
        Ok(())
    }
}

#[async_trait]
impl<R, X> GuestCatalog for GuestCatalogService<R, X>
where
    R: GuestRepository,
    X: GuestExporter + 'static,
{
    async fn add(&self, draft: GuestDraft) -> Result<Reported<Guest>, Error> {
        let guest = Guest::from(draft);
        let mut loaded = self.lock_loaded().await?;
        let mut next = loaded.guests().to_vec();
        next.push(guest.clone());
        self.commit(&mut loaded, next).await?;
        info!(label = %guest.label(), "guest added");
        Ok(Reported::with_notice(guest, Notice::success(GUEST_ADDED)))
    }

    async fn list(&self) -> Result<Reported<Vec<Guest>>, Error> {
        let loaded = self.lock_loaded().await?;
        let guests = loaded.guests().to_vec();
        if guests.is_empty() {
            return Ok(Reported::with_notice(guests, Notice::info(NO_GUESTS)));
        }
        Ok(Reported::quiet(guests))
    }

    async fn search(&self, query: &str) -> Result<Reported<SearchOutcome>, Error> {
        if query.is_empty() {
            return Ok(Reported::quiet(SearchOutcome::Skipped));
        }
        let loaded = self.lock_loaded().await?;
        let matches = catalog::search(loaded.guests(), query);
        debug!(query, count = matches.len(), "guest search");
        if matches.is_empty() {
            return Ok(Reported::with_notice(
                SearchOutcome::Matches(matches),
                Notice::warning(NO_MATCHES),
            ));
        }
        Ok(Reported::quiet(SearchOutcome::Matches(matches)))
    }

    async fn delete_labels(&self) -> Result<Reported<Vec<String>>, Error> {
        let loaded = self.lock_loaded().await?;
        let labels = catalog::labels(loaded.guests());
        if labels.is_empty() {
            return Ok(Reported::with_notice(labels, Notice::info(NOTHING_TO_DELETE)));
        }
        Ok(Reported::quiet(labels))
    }

    async fn delete(&self, label: &str) -> Result<Reported<usize>, Error> {
        let key = GuestKey::parse_label(label).map_err(Self::map_label_error)?;
        let mut loaded = self.lock_loaded().await?;
        let mut next = loaded.guests().to_vec();
        let removed = catalog::remove_matching(&mut next, &key);
        if removed == 0 {
            warn!(key = %key, "delete matched no guest");
            return Ok(Reported::with_notice(0, Notice::warning(NO_SELECTION_MATCH)));
        }
        self.commit(&mut loaded, next).await?;
        info!(key = %key, removed, "guests deleted");
        Ok(Reported::with_notice(
            removed,
            Notice::success(catalog::guest_deleted(key.nom())),
        ))
    }

    async fn export(&self) -> Result<Reported<Option<ExportArtifact>>, Error> {
        let guests = self.lock_loaded().await?.guests().to_vec();
        if guests.is_empty() {
            return Ok(Reported::with_notice(None, Notice::info(NOTHING_TO_EXPORT)));
        }
        let count = guests.len();
        let exporter = Arc::clone(&self.exporter);
        let bytes = tokio::task::spawn_blocking(move || exporter.export(&guests))
            .await
            .map_err(|err| Error::internal(format!("guest export task failed: {err}")))?
            .map_err(Self::map_export_error)?;
        info!(count, size = bytes.len(), "guest list exported");
        Ok(Reported::quiet(Some(ExportArtifact::new(
            self.exporter.file_name(),
            self.exporter.content_type(),
            bytes,
        ))))
    }
}

#[cfg(test)]
#[path = "catalog_service_tests.rs"]
mod tests;
