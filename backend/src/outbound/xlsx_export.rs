//! Spreadsheet exporter writing the guest list as an `.xlsx` workbook.

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::domain::ports::{GuestExportError, GuestExporter};
use crate::domain::{EXPORT_FILE_NAME, EXPORT_SHEET_NAME, Guest, GuestField, XLSX_CONTENT_TYPE};

/// Single-sheet workbook: a bold header row of field keys, then one row per
/// guest.
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxGuestExporter;

impl XlsxGuestExporter {
    fn build(guests: &[Guest]) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();
        let sheet = workbook.add_worksheet();
        sheet.set_name(EXPORT_SHEET_NAME)?;

        for (col, field) in (0u16..).zip(GuestField::ALL) {
            sheet.write_string_with_format(0, col, field.key(), &header)?;
        }
        for (row, guest) in (1u32..).zip(guests) {
            for (col, field) in (0u16..).zip(GuestField::ALL) {
                sheet.write_string(row, col, field.value(guest))?;
            }
        }

        workbook.save_to_buffer()
    }
}

impl GuestExporter for XlsxGuestExporter {
    fn export(&self, guests: &[Guest]) -> Result<Vec<u8>, GuestExportError> {
        Self::build(guests).map_err(|err| GuestExportError::write(err.to_string()))
    }

    fn file_name(&self) -> &'static str {
        EXPORT_FILE_NAME
    }

    fn content_type(&self) -> &'static str {
        XLSX_CONTENT_TYPE
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
    use rstest::rstest;
    use std::io::Cursor;

    fn read_back(bytes: Vec<u8>) -> (Vec<String>, Vec<Vec<String>>) {
        let mut workbook: Xlsx<_> =
            open_workbook_from_rs(Cursor::new(bytes)).expect("readable workbook");
        let names = workbook.sheet_names();
        let range = workbook
            .worksheet_range(EXPORT_SHEET_NAME)
            .expect("guest sheet");
        let rows = range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Data::String(text) => text.clone(),
                        Data::Empty => String::new(),
                        other => panic!("unexpected cell {other:?}"),
                    })
                    .collect()
            })
            .collect();
        (names, rows)
    }

    #[rstest]
    fn sheet_holds_header_then_guests_in_field_order() {
        let guest = Guest {
            nom: "Ali".into(),
            prenom: "Ben".into(),
            domaine: "Culture".into(),
            organisation: "Université d'Alger".into(),
            date_invitation: "2024-01-01".into(),
            numero: "0550".into(),
            emission: "Émission spéciale".into(),
            chaine: "Canal Algérie".into(),
            studio: "Studio 3".into(),
        };

        let (names, rows) = read_back(XlsxGuestExporter.export(&[guest]).expect("export"));

        assert_eq!(names, vec!["Invités".to_owned()]);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            [
                "nom",
                "prenom",
                "domaine",
                "organisation",
                "date d'invitation",
                "numero",
                "emission",
                "chaine",
                "studio",
            ]
        );
        assert_eq!(
            rows[1],
            [
                "Ali",
                "Ben",
                "Culture",
                "Université d'Alger",
                "2024-01-01",
                "0550",
                "Émission spéciale",
                "Canal Algérie",
                "Studio 3",
            ]
        );
    }

    #[rstest]
    fn produces_a_zip_container() {
        let guests = vec![Guest {
            nom: "Ali".into(),
            prenom: "Ben".into(),
            date_invitation: "2024-01-01".into(),
            emission: "Émission spéciale".into(),
            ..Guest::default()
        }];

        let bytes = XlsxGuestExporter.export(&guests).expect("export");

        assert!(bytes.starts_with(b"PK\x03\x04"));
        assert_eq!(XlsxGuestExporter.file_name(), "invites_eptv.xlsx");
        assert_eq!(
            XlsxGuestExporter.content_type(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
    }

    #[rstest]
    fn larger_lists_grow_the_document() {
        let one = XlsxGuestExporter
            .export(&[Guest::default()])
            .expect("export one");
        let many: Vec<Guest> = (0..200)
            .map(|i| Guest {
                nom: format!("Invité {i}"),
                ..Guest::default()
            })
            .collect();
        let big = XlsxGuestExporter.export(&many).expect("export many");
        assert!(big.len() > one.len());
    }
}
