//! Driving port for the guest catalog menu actions.

use async_trait::async_trait;

use crate::domain::{Error, ExportArtifact, Guest, GuestDraft, Reported};

/// Result of a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was empty; no search ran.
    Skipped,
    /// Guests whose `nom` or `prenom` contains the query, in list order.
    Matches(Vec<Guest>),
}

/// Domain use-case port for guest records.
///
/// Every mutating call persists the full list before returning.
#[async_trait]
pub trait GuestCatalog: Send + Sync {
    /// Append a guest built from the add form.
    async fn add(&self, draft: GuestDraft) -> Result<Reported<Guest>, Error>;

    /// Every guest in insertion order.
    async fn list(&self) -> Result<Reported<Vec<Guest>>, Error>;

    /// Case-insensitive substring search over `nom` and `prenom`.
    async fn search(&self, query: &str) -> Result<Reported<SearchOutcome>, Error>;

    /// Selector labels, one per guest, in list order.
    async fn delete_labels(&self) -> Result<Reported<Vec<String>>, Error>;

    /// Remove every guest matching the key parsed from `label`; returns the
    /// number removed.
    async fn delete(&self, label: &str) -> Result<Reported<usize>, Error>;

    /// Spreadsheet of the full list, or `None` when there is nothing to export.
    async fn export(&self) -> Result<Reported<Option<ExportArtifact>>, Error>;
}
