//! Downloadable export of the guest list.

/// File name of the guest spreadsheet download.
pub const EXPORT_FILE_NAME: &str = "invites_eptv.xlsx";

/// MIME type of an Office Open XML workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Sheet holding the exported guests.
pub const EXPORT_SHEET_NAME: &str = "Invités";

/// Encoded document ready to be sent as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn file_name(&self) -> &str {
        self.file_name.as_str()
    }

    pub fn content_type(&self) -> &str {
        self.content_type.as_str()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the artifact, returning the document bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
