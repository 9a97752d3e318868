//! Guest catalog handlers.
//!
//! ```text
//! GET    /api/v1/guests/form
//! POST   /api/v1/guests          {"nom":"Ali","prenom":"Ben","dateInvitation":"2024-01-01",...}
//! GET    /api/v1/guests
//! GET    /api/v1/guests/search?q=ali
//! GET    /api/v1/guests/labels
//! DELETE /api/v1/guests          {"label":"Ali (2024-01-01)"}
//! GET    /api/v1/guests/export
//! ```

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, delete, get, post, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::SearchOutcome;
use crate::domain::{Error, Guest, GuestDraft, GuestField, MenuAction, Notice};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::NoticesResponse;

/// How the add form collects a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Date,
}

/// One input of the add-guest form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Property name in [`NewGuestRequest`].
    #[schema(example = "dateInvitation")]
    pub name: String,
    #[schema(example = "Date d'invitation")]
    pub label: String,
    pub input: InputKind,
}

impl From<GuestField> for FormField {
    fn from(field: GuestField) -> Self {
        let name = match field {
            GuestField::DateInvitation => "dateInvitation".to_owned(),
            other => other.key().to_owned(),
        };
        Self {
            name,
            label: field.label().to_owned(),
            input: if field.is_date() {
                InputKind::Date
            } else {
                InputKind::Text
            },
        }
    }
}

/// Inputs of the add-guest form, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GuestFormResponse {
    pub fields: Vec<FormField>,
}

/// Body of `POST /api/v1/guests`.
///
/// Text fields default to empty strings; the invitation date is required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewGuestRequest {
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub prenom: String,
    #[serde(default)]
    pub domaine: String,
    #[serde(default)]
    pub organisation: String,
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub date_invitation: NaiveDate,
    #[serde(default)]
    pub numero: String,
    #[serde(default)]
    pub emission: String,
    #[serde(default)]
    pub chaine: String,
    #[serde(default)]
    pub studio: String,
}

impl From<NewGuestRequest> for GuestDraft {
    fn from(value: NewGuestRequest) -> Self {
        Self {
            nom: value.nom,
            prenom: value.prenom,
            domaine: value.domaine,
            organisation: value.organisation,
            date_invitation: value.date_invitation,
            numero: value.numero,
            emission: value.emission,
            chaine: value.chaine,
            studio: value.studio,
        }
    }
}

/// Guest created by `POST /api/v1/guests`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GuestCreatedResponse {
    pub guest: Guest,
    pub notices: Vec<Notice>,
}

/// Tabular guest listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GuestTableResponse {
    /// Column keys, in field order.
    pub columns: Vec<String>,
    pub guests: Vec<Guest>,
    pub notices: Vec<Notice>,
}

impl GuestTableResponse {
    fn new(guests: Vec<Guest>, notices: Vec<Notice>) -> Self {
        Self {
            columns: GuestField::ALL
                .iter()
                .map(|field| field.key().to_owned())
                .collect(),
            guests,
            notices,
        }
    }
}

/// Result of `GET /api/v1/guests/search`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    /// `false` when the query was empty and no search ran.
    pub searched: bool,
    #[serde(flatten)]
    pub table: GuestTableResponse,
}

/// Query string of `GET /api/v1/guests/search`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring matched against `nom` and `prenom`, ignoring case.
    #[serde(default)]
    pub q: String,
}

/// Delete selector labels.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LabelsResponse {
    pub labels: Vec<String>,
    pub notices: Vec<Notice>,
}

/// Body of `DELETE /api/v1/guests`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteGuestRequest {
    #[schema(example = "Ali (2024-01-01)")]
    pub label: String,
}

/// Result of `DELETE /api/v1/guests`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteGuestResponse {
    pub removed: usize,
    pub notices: Vec<Notice>,
}

/// Fields of the add-guest form.
#[utoipa::path(
    get,
    path = "/api/v1/guests/form",
    responses(
        (status = 200, description = "Form fields", body = GuestFormResponse),
        (status = 401, description = "Not logged in", body = Error)
    ),
    tags = ["guests"],
    operation_id = "guestForm"
)]
#[get("/guests/form")]
pub async fn guest_form(session: SessionContext) -> ApiResult<web::Json<GuestFormResponse>> {
    session.require_main(MenuAction::AddGuest)?;
    Ok(web::Json(GuestFormResponse {
        fields: GuestField::ALL.into_iter().map(FormField::from).collect(),
    }))
}

/// Append a guest.
#[utoipa::path(
    post,
    path = "/api/v1/guests",
    request_body = NewGuestRequest,
    responses(
        (status = 201, description = "Guest added", body = GuestCreatedResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not logged in", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Guest file unavailable", body = Error)
    ),
    tags = ["guests"],
    operation_id = "addGuest"
)]
#[post("/guests")]
pub async fn add_guest(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<NewGuestRequest>,
) -> ApiResult<HttpResponse> {
    session.require_main(MenuAction::AddGuest)?;
    let added = state
        .guests
        .add(GuestDraft::from(payload.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(GuestCreatedResponse {
        guest: added.value,
        notices: added.notices,
    }))
}

/// Every guest in insertion order.
#[utoipa::path(
    get,
    path = "/api/v1/guests",
    responses(
        (status = 200, description = "Guest table", body = GuestTableResponse),
        (status = 401, description = "Not logged in", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["guests"],
    operation_id = "listGuests"
)]
#[get("/guests")]
pub async fn list_guests(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<GuestTableResponse>> {
    session.require_main(MenuAction::ListGuests)?;
    let listed = state.guests.list().await?;
    Ok(web::Json(GuestTableResponse::new(
        listed.value,
        listed.notices,
    )))
}

/// Case-insensitive search over `nom` and `prenom`.
#[utoipa::path(
    get,
    path = "/api/v1/guests/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching guests", body = SearchResponse),
        (status = 401, description = "Not logged in", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["guests"],
    operation_id = "searchGuests"
)]
#[get("/guests/search")]
pub async fn search_guests(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<SearchResponse>> {
    session.require_main(MenuAction::SearchGuests)?;
    let outcome = state.guests.search(&query.q).await?;
    let (searched, guests) = match outcome.value {
        SearchOutcome::Skipped => (false, Vec::new()),
        SearchOutcome::Matches(guests) => (true, guests),
    };
    Ok(web::Json(SearchResponse {
        searched,
        table: GuestTableResponse::new(guests, outcome.notices),
    }))
}

/// Labels offered by the delete selector.
#[utoipa::path(
    get,
    path = "/api/v1/guests/labels",
    responses(
        (status = 200, description = "Selector labels", body = LabelsResponse),
        (status = 401, description = "Not logged in", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["guests"],
    operation_id = "guestLabels"
)]
#[get("/guests/labels")]
pub async fn guest_labels(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<LabelsResponse>> {
    session.require_main(MenuAction::DeleteGuest)?;
    let labels = state.guests.delete_labels().await?;
    Ok(web::Json(LabelsResponse {
        labels: labels.value,
        notices: labels.notices,
    }))
}

/// Delete every guest matching the selected label.
#[utoipa::path(
    delete,
    path = "/api/v1/guests",
    request_body = DeleteGuestRequest,
    responses(
        (status = 200, description = "Deletion outcome", body = DeleteGuestResponse),
        (status = 400, description = "Label cannot be parsed", body = Error),
        (status = 401, description = "Not logged in", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["guests"],
    operation_id = "deleteGuest"
)]
#[delete("/guests")]
pub async fn delete_guest(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<DeleteGuestRequest>,
) -> ApiResult<web::Json<DeleteGuestResponse>> {
    session.require_main(MenuAction::DeleteGuest)?;
    let outcome = state.guests.delete(&payload.label).await?;
    Ok(web::Json(DeleteGuestResponse {
        removed: outcome.value,
        notices: outcome.notices,
    }))
}

/// Download the guest list as a spreadsheet.
///
/// With no guests the response is a JSON notice instead of a file.
#[utoipa::path(
    get,
    path = "/api/v1/guests/export",
    responses(
        (status = 200, description = "Spreadsheet attachment; JSON notices when there is nothing to export",
            body = String,
            content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 401, description = "Not logged in", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["guests"],
    operation_id = "exportGuests"
)]
#[get("/guests/export")]
pub async fn export_guests(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    session.require_main(MenuAction::ExportGuests)?;
    let exported = state.guests.export().await?;
    let Some(artifact) = exported.value else {
        return Ok(HttpResponse::Ok().json(NoticesResponse {
            notices: exported.notices,
        }));
    };
    let disposition = ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(artifact.file_name().to_owned())],
    };
    Ok(HttpResponse::Ok()
        .content_type(artifact.content_type().to_owned())
        .insert_header(disposition)
        .body(artifact.into_bytes()))
}
