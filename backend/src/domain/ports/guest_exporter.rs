//! Driven port rendering the guest list as a downloadable spreadsheet.

use crate::domain::Guest;

use super::define_port_error;

define_port_error! {
    /// Errors raised while building the export document.
    pub enum GuestExportError {
        /// The document writer rejected the data or failed to serialise.
        Write { message: String } => "guest export failed: {message}",
    }
}

/// Encodes guests into spreadsheet bytes.
///
/// Implementations write one header row of field keys followed by one row per
/// guest, columns in [`crate::domain::GuestField::ALL`] order.
#[cfg_attr(test, mockall::automock)]
pub trait GuestExporter: Send + Sync {
    /// Encode `guests`. Callers never pass an empty slice.
    fn export(&self, guests: &[Guest]) -> Result<Vec<u8>, GuestExportError>;

    /// File name offered to the browser.
    fn file_name(&self) -> &'static str;

    /// MIME type of the encoded document.
    fn content_type(&self) -> &'static str;
}
