//! Guest booking records and the composite key used to delete them.
//!
//! A [`Guest`] is a free-text record except for the invitation date, which is
//! entered as a calendar date and stored as its ISO string. Records carry no
//! identifier: deletion works on the `(nom, date d'invitation)` pair rendered
//! as a selector label, see [`GuestKey`].

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Separator between the name and the date in a selector label.
const LABEL_SEPARATOR: &str = " (";

/// Booking record for a person invited onto a programme.
///
/// ## Serialisation
/// Field order and keys match the guest file, including the apostrophe-bearing
/// `"date d'invitation"` key. Missing keys load as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Guest {
    /// Family name.
    pub nom: String,
    /// Given name.
    pub prenom: String,
    /// Field of expertise.
    pub domaine: String,
    /// Employer or affiliation.
    pub organisation: String,
    /// Invitation date as stored, normally `YYYY-MM-DD`.
    #[serde(rename = "date d'invitation")]
    #[schema(example = "2024-01-01")]
    pub date_invitation: String,
    /// Contact phone number.
    pub numero: String,
    /// Programme the guest appears on.
    pub emission: String,
    /// Channel broadcasting the programme.
    pub chaine: String,
    /// Studio booked for the recording.
    pub studio: String,
}

impl Guest {
    /// Composite key used for deletion.
    pub fn key(&self) -> GuestKey {
        GuestKey {
            nom: self.nom.clone(),
            date_invitation: self.date_invitation.clone(),
        }
    }

    /// Selector label, `"{nom} ({date d'invitation})"`.
    pub fn label(&self) -> String {
        format_label(&self.nom, &self.date_invitation)
    }

    /// Whether this record's `(nom, date d'invitation)` equals `key`.
    pub fn has_key(&self, key: &GuestKey) -> bool {
        self.nom == key.nom && self.date_invitation == key.date_invitation
    }

    /// Whether the lower-cased `nom` or `prenom` contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        self.nom.to_lowercase().contains(needle) || self.prenom.to_lowercase().contains(needle)
    }
}

/// Values collected by the add-guest form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestDraft {
    pub nom: String,
    pub prenom: String,
    pub domaine: String,
    pub organisation: String,
    pub date_invitation: NaiveDate,
    pub numero: String,
    pub emission: String,
    pub chaine: String,
    pub studio: String,
}

impl From<GuestDraft> for Guest {
    fn from(draft: GuestDraft) -> Self {
        let GuestDraft {
            nom,
            prenom,
            domaine,
            organisation,
            date_invitation,
            numero,
            emission,
            chaine,
            studio,
        } = draft;
        Self {
            nom,
            prenom,
            domaine,
            organisation,
            date_invitation: date_invitation.format("%Y-%m-%d").to_string(),
            numero,
            emission,
            chaine,
            studio,
        }
    }
}

/// The nine guest fields in storage and display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GuestField {
    Nom,
    Prenom,
    Domaine,
    Organisation,
    DateInvitation,
    Numero,
    Emission,
    Chaine,
    Studio,
}

impl GuestField {
    /// Every field, in column order.
    pub const ALL: [GuestField; 9] = [
        Self::Nom,
        Self::Prenom,
        Self::Domaine,
        Self::Organisation,
        Self::DateInvitation,
        Self::Numero,
        Self::Emission,
        Self::Chaine,
        Self::Studio,
    ];

    /// Key used in the guest file and the export header row.
    pub fn key(self) -> &'static str {
        match self {
            Self::Nom => "nom",
            Self::Prenom => "prenom",
            Self::Domaine => "domaine",
            Self::Organisation => "organisation",
            Self::DateInvitation => "date d'invitation",
            Self::Numero => "numero",
            Self::Emission => "emission",
            Self::Chaine => "chaine",
            Self::Studio => "studio",
        }
    }

    /// Form label shown to the operator.
    pub fn label(self) -> &'static str {
        match self {
            Self::Nom => "Nom",
            Self::Prenom => "Prénom",
            Self::Domaine => "Domaine",
            Self::Organisation => "Organisation",
            Self::DateInvitation => "Date d'invitation",
            Self::Numero => "Numéro",
            Self::Emission => "Émission",
            Self::Chaine => "Chaîne",
            Self::Studio => "Studio",
        }
    }

    /// Whether the form collects this field with a date picker.
    pub fn is_date(self) -> bool {
        matches!(self, Self::DateInvitation)
    }

    /// Borrow this field's value from `guest`.
    pub fn value(self, guest: &Guest) -> &str {
        match self {
            Self::Nom => &guest.nom,
            Self::Prenom => &guest.prenom,
            Self::Domaine => &guest.domaine,
            Self::Organisation => &guest.organisation,
            Self::DateInvitation => &guest.date_invitation,
            Self::Numero => &guest.numero,
            Self::Emission => &guest.emission,
            Self::Chaine => &guest.chaine,
            Self::Studio => &guest.studio,
        }
    }
}

/// Failure to turn a selector label back into a [`GuestKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuestLabelError {
    /// The label has no `" ("` separator.
    #[error("label must look like \"nom (date)\": {label}")]
    MissingSeparator { label: String },
    /// The label has more than one `" ("` so the name cannot be isolated.
    #[error("label is ambiguous, it contains more than one \" (\": {label}")]
    Ambiguous { label: String },
}

/// The `(nom, date d'invitation)` pair identifying guests for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestKey {
    nom: String,
    date_invitation: String,
}

impl GuestKey {
    /// Build a key from its parts.
    pub fn new(nom: impl Into<String>, date_invitation: impl Into<String>) -> Self {
        Self {
            nom: nom.into(),
            date_invitation: date_invitation.into(),
        }
    }

    /// Parse a selector label produced by [`Guest::label`].
    ///
    /// The label is split at `" ("` and trailing `')'` characters are removed
    /// from the date part. A name containing `" ("` cannot be recovered and is
    /// rejected as [`GuestLabelError::Ambiguous`].
    ///
    /// # Examples
    /// ```
    /// use guest_desk::domain::GuestKey;
    ///
    /// let key = GuestKey::parse_label("Ali (2024-01-01)").unwrap();
    /// assert_eq!(key.nom(), "Ali");
    /// assert_eq!(key.date_invitation(), "2024-01-01");
    /// ```
    pub fn parse_label(label: &str) -> Result<Self, GuestLabelError> {
        let Some((nom, rest)) = label.split_once(LABEL_SEPARATOR) else {
            return Err(GuestLabelError::MissingSeparator {
                label: label.to_owned(),
            });
        };
        if rest.contains(LABEL_SEPARATOR) {
            return Err(GuestLabelError::Ambiguous {
                label: label.to_owned(),
            });
        }
        Ok(Self::new(nom, rest.trim_end_matches(')')))
    }

    /// Family name part.
    pub fn nom(&self) -> &str {
        self.nom.as_str()
    }

    /// Invitation date part.
    pub fn date_invitation(&self) -> &str {
        self.date_invitation.as_str()
    }
}

impl fmt::Display for GuestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_label(&self.nom, &self.date_invitation))
    }
}

fn format_label(nom: &str, date_invitation: &str) -> String {
    format!("{nom}{LABEL_SEPARATOR}{date_invitation})")
}

#[cfg(test)]
mod tests {
    //! Regression coverage for guest records and labels.
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn ali() -> Guest {
        Guest {
            nom: "Ali".into(),
            prenom: "Ben".into(),
            domaine: "Économie".into(),
            organisation: "Université d'Alger".into(),
            date_invitation: "2024-01-01".into(),
            numero: "0555".into(),
            emission: "Le Débat".into(),
            chaine: "Canal Algérie".into(),
            studio: "B".into(),
        }
    }

    #[rstest]
    fn serialises_with_file_keys_in_order(ali: Guest) {
        let text = serde_json::to_string(&ali).expect("serialise guest");
        let positions: Vec<usize> = GuestField::ALL
            .iter()
            .map(|field| {
                text.find(&format!("\"{}\"", field.key()))
                    .expect("key present")
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(text.contains("\"date d'invitation\":\"2024-01-01\""));
    }

    #[rstest]
    fn missing_keys_load_as_empty() {
        let guest: Guest = serde_json::from_value(json!({ "nom": "Ali" })).expect("lenient load");
        assert_eq!(guest.nom, "Ali");
        assert!(guest.studio.is_empty());
    }

    #[rstest]
    fn draft_formats_date_as_iso(ali: Guest) {
        let draft = GuestDraft {
            nom: ali.nom.clone(),
            prenom: ali.prenom.clone(),
            domaine: ali.domaine.clone(),
            organisation: ali.organisation.clone(),
            date_invitation: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            numero: ali.numero.clone(),
            emission: ali.emission.clone(),
            chaine: ali.chaine.clone(),
            studio: ali.studio.clone(),
        };
        assert_eq!(Guest::from(draft), ali);
    }

    #[rstest]
    fn label_round_trips_through_key(ali: Guest) {
        assert_eq!(ali.label(), "Ali (2024-01-01)");
        let key = GuestKey::parse_label(&ali.label()).expect("parse label");
        assert_eq!(key, ali.key());
        assert!(ali.has_key(&key));
        assert_eq!(key.to_string(), ali.label());
    }

    #[rstest]
    #[case("Ali (2024-01-01))", "Ali", "2024-01-01")]
    #[case(" (2024-01-01)", "", "2024-01-01")]
    #[case("Ali (", "Ali", "")]
    fn parse_label_strips_trailing_parentheses(
        #[case] label: &str,
        #[case] nom: &str,
        #[case] date: &str,
    ) {
        let key = GuestKey::parse_label(label).expect("parse label");
        assert_eq!(key.nom(), nom);
        assert_eq!(key.date_invitation(), date);
    }

    #[rstest]
    fn parse_label_requires_separator() {
        let err = GuestKey::parse_label("Ali 2024-01-01").expect_err("no separator");
        assert!(matches!(err, GuestLabelError::MissingSeparator { .. }));
    }

    #[rstest]
    fn parse_label_rejects_names_containing_separator() {
        let err = GuestKey::parse_label("Ali (junior) (2024-01-01)").expect_err("ambiguous");
        assert!(matches!(err, GuestLabelError::Ambiguous { .. }));
    }

    #[rstest]
    fn name_match_is_case_insensitive(ali: Guest) {
        assert!(ali.name_contains("ali"));
        assert!(ali.name_contains("be"));
        assert!(!ali.name_contains("alger"));
    }

    #[rstest]
    fn field_values_follow_column_order(ali: Guest) {
        let values: Vec<&str> = GuestField::ALL.iter().map(|f| f.value(&ali)).collect();
        assert_eq!(values[0], "Ali");
        assert_eq!(values[4], "2024-01-01");
        assert_eq!(values[8], "B");
        assert!(GuestField::DateInvitation.is_date());
        assert_eq!(GuestField::Prenom.label(), "Prénom");
    }
}
