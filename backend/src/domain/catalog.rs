//! Pure guest catalog operations over an in-memory list.
//!
//! These functions never touch storage; [`crate::domain::GuestCatalogService`]
//! wraps them with persistence and notices.

use crate::domain::{Guest, GuestKey};

pub(crate) const GUEST_ADDED: &str = "Invité ajouté avec succès.";
pub(crate) const NO_GUESTS: &str = "Aucun invité enregistré.";
pub(crate) const NO_MATCHES: &str = "Aucun invité trouvé.";
pub(crate) const NOTHING_TO_DELETE: &str = "Aucun invité à supprimer.";
pub(crate) const NO_SELECTION_MATCH: &str = "Aucun invité ne correspond à la sélection.";
pub(crate) const NOTHING_TO_EXPORT: &str = "Aucun invité à exporter.";

pub(crate) fn guest_deleted(nom: &str) -> String {
    format!("L'invité **{nom}** a été supprimé avec succès.")
}

/// Guests whose lower-cased `nom` or `prenom` contains the lower-cased
/// `query`, in list order.
///
/// # Examples
/// ```
/// use guest_desk::domain::{Guest, catalog};
///
/// let guests = vec![Guest { nom: "Ali".into(), ..Guest::default() }];
/// assert_eq!(catalog::search(&guests, "ALI").len(), 1);
/// ```
pub fn search(guests: &[Guest], query: &str) -> Vec<Guest> {
    let needle = query.to_lowercase();
    guests
        .iter()
        .filter(|guest| guest.name_contains(&needle))
        .cloned()
        .collect()
}

/// Remove every guest matching `key`; returns how many were removed.
pub fn remove_matching(guests: &mut Vec<Guest>, key: &GuestKey) -> usize {
    let before = guests.len();
    guests.retain(|guest| !guest.has_key(key));
    before - guests.len()
}

/// Selector labels for the delete form, one per guest.
pub fn labels(guests: &[Guest]) -> Vec<String> {
    guests.iter().map(Guest::label).collect()
}
