//! Decorative banner image shown beside the main page title.
//!
//! ```text
//! GET /assets/banner
//! ```
//!
//! The image is optional: when the file is missing or unreadable the endpoint
//! answers 404 and the main view omits the banner URL. Nothing else changes.

use std::io;
use std::sync::Arc;

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get, web};
use cap_std::fs::Dir;
use tracing::debug;

use super::ApiResult;
use super::state::HttpState;
use crate::domain::Error;

/// Public path of the banner endpoint.
pub const BANNER_URL: &str = "/assets/banner";

const BANNER_MISSING: &str = "no banner image available";

/// Image file located in a capability-scoped directory.
#[derive(Clone)]
pub struct BannerFile {
    dir: Arc<Dir>,
    name: String,
}

impl BannerFile {
    pub fn new(dir: Arc<Dir>, name: impl Into<String>) -> Self {
        Self {
            dir,
            name: name.into(),
        }
    }

    /// Image bytes, or `None` when the file cannot be read.
    pub async fn read(&self) -> Option<Vec<u8>> {
        let dir = Arc::clone(&self.dir);
        let name = self.name.clone();
        let result = tokio::task::spawn_blocking(move || dir.read(&name))
            .await
            .unwrap_or_else(|err| Err(io::Error::other(err)));
        match result {
            Ok(bytes) => Some(bytes),
            Err(error) => {
                debug!(file = %self.name, %error, "banner image unavailable");
                None
            }
        }
    }

    /// Whether the image file is present.
    pub async fn is_available(&self) -> bool {
        let dir = Arc::clone(&self.dir);
        let name = self.name.clone();
        tokio::task::spawn_blocking(move || dir.is_file(&name))
            .await
            .unwrap_or(false)
    }

    fn content_type(&self) -> ContentType {
        let lower = self.name.to_ascii_lowercase();
        if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
            ContentType::jpeg()
        } else {
            ContentType::png()
        }
    }
}

/// URL of the banner when one is configured and present.
pub(crate) async fn banner_url(state: &HttpState) -> Option<String> {
    match &state.banner {
        Some(file) if file.is_available().await => Some(BANNER_URL.to_owned()),
        _ => None,
    }
}

/// Serve the banner image.
#[utoipa::path(
    get,
    path = "/assets/banner",
    responses(
        (status = 200, description = "Banner image", body = String, content_type = "image/png"),
        (status = 404, description = "No banner image available", body = Error)
    ),
    tags = ["assets"],
    operation_id = "banner",
    security([])
)]
#[get("/assets/banner")]
pub async fn banner(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let Some(file) = state.banner.as_ref() else {
        return Err(Error::not_found(BANNER_MISSING));
    };
    let bytes = file
        .read()
        .await
        .ok_or_else(|| Error::not_found(BANNER_MISSING))?;
    Ok(HttpResponse::Ok()
        .content_type(file.content_type())
        .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
        .body(bytes))
}
