//! Tests for the guest catalog service.

use std::sync::{Arc, Mutex as StdMutex};

use chrono::NaiveDate;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockGuestExporter, MockGuestRepository};
use crate::domain::{ErrorCode, NoticeLevel};

type Service = GuestCatalogService<MockGuestRepository, MockGuestExporter>;

fn draft(nom: &str, prenom: &str, day: u32) -> GuestDraft {
    GuestDraft {
        nom: nom.into(),
        prenom: prenom.into(),
        domaine: "Économie".into(),
        organisation: "EPTV".into(),
        date_invitation: NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date"),
        numero: "0555".into(),
        emission: "Le Débat".into(),
        chaine: "Canal Algérie".into(),
        studio: "B".into(),
    }
}

/// Repository double backed by a shared vector standing in for the file.
fn file_backed_repo(initial: Vec<Guest>) -> (MockGuestRepository, Arc<StdMutex<Vec<Guest>>>) {
    let file = Arc::new(StdMutex::new(initial));
    let mut repo = MockGuestRepository::new();
    let read = file.clone();
    repo.expect_load_all()
        .returning(move || Ok(read.lock().expect("lock").clone()));
    let write = file.clone();
    repo.expect_save_all().returning(move |guests| {
        *write.lock().expect("lock") = guests.to_vec();
        Ok(())
    });
    (repo, file)
}

fn unused_exporter() -> MockGuestExporter {
    let mut exporter = MockGuestExporter::new();
    exporter.expect_export().never();
    exporter
}

fn service(repo: MockGuestRepository, exporter: MockGuestExporter) -> Service {
    GuestCatalogService::new(Arc::new(repo), Arc::new(exporter))
}

#[fixture]
fn empty() -> (Service, Arc<StdMutex<Vec<Guest>>>) {
    let (repo, file) = file_backed_repo(Vec::new());
    (service(repo, unused_exporter()), file)
}

#[rstest]
#[tokio::test]
async fn add_list_search_delete_scenario(empty: (Service, Arc<StdMutex<Vec<Guest>>>)) {
    let (service, file) = empty;

    let added = service.add(draft("Ali", "Ben", 1)).await.expect("add");
    assert_eq!(added.value.date_invitation, "2024-01-01");
    assert_eq!(added.notices, vec![Notice::success(GUEST_ADDED)]);

    let listed = service.list().await.expect("list");
    assert_eq!(listed.value.len(), 1);
    assert!(listed.notices.is_empty());

    let found = service.search("ali").await.expect("search");
    assert_eq!(found.value, SearchOutcome::Matches(vec![added.value.clone()]));

    let labels = service.delete_labels().await.expect("labels");
    assert_eq!(labels.value, vec!["Ali (2024-01-01)".to_owned()]);

    let deleted = service.delete("Ali (2024-01-01)").await.expect("delete");
    assert_eq!(deleted.value, 1);
    assert_eq!(
        deleted.notices,
        vec![Notice::success("L'invité **Ali** a été supprimé avec succès.")]
    );

    let listed = service.list().await.expect("list");
    assert!(listed.value.is_empty());
    assert_eq!(listed.notices, vec![Notice::info(NO_GUESTS)]);
    assert!(file.lock().expect("lock").is_empty());
}

#[rstest]
#[tokio::test]
async fn additions_are_persisted_in_insertion_order(empty: (Service, Arc<StdMutex<Vec<Guest>>>)) {
    let (service, file) = empty;
    service.add(draft("Ali", "Ben", 1)).await.expect("add");
    service.add(draft("Haddad", "Samir", 2)).await.expect("add");

    let stored: Vec<String> = file
        .lock()
        .expect("lock")
        .iter()
        .map(Guest::label)
        .collect();
    assert_eq!(stored, vec!["Ali (2024-01-01)", "Haddad (2024-01-02)"]);
}

#[rstest]
#[tokio::test]
async fn empty_query_skips_search() {
    let mut repo = MockGuestRepository::new();
    repo.expect_load_all().never();
    let service = service(repo, unused_exporter());

    let outcome = service.search("").await.expect("search");
    assert_eq!(outcome.value, SearchOutcome::Skipped);
    assert!(outcome.notices.is_empty());
}

#[rstest]
#[tokio::test]
async fn search_without_matches_warns(empty: (Service, Arc<StdMutex<Vec<Guest>>>)) {
    let (service, _) = empty;
    service.add(draft("Ali", "Ben", 1)).await.expect("add");

    let outcome = service.search("zz").await.expect("search");
    assert_eq!(outcome.value, SearchOutcome::Matches(Vec::new()));
    assert_eq!(outcome.notices, vec![Notice::warning(NO_MATCHES)]);
}

#[rstest]
#[tokio::test]
async fn deleting_unknown_pair_leaves_file_untouched() {
    let existing = vec![Guest::from(draft("Ali", "Ben", 1))];
    let mut repo = MockGuestRepository::new();
    let loaded = existing.clone();
    repo.expect_load_all()
        .times(1)
        .returning(move || Ok(loaded.clone()));
    repo.expect_save_all().never();
    let service = service(repo, unused_exporter());

    let outcome = service.delete("Ali (2024-02-02)").await.expect("delete");
    assert_eq!(outcome.value, 0);
    assert_eq!(outcome.notices, vec![Notice::warning(NO_SELECTION_MATCH)]);
    assert_eq!(service.list().await.expect("list").value, existing);
}

#[rstest]
#[tokio::test]
async fn delete_removes_every_guest_sharing_the_key() {
    let mut twin = Guest::from(draft("Ali", "Autre", 1));
    twin.studio = "A".into();
    let other = Guest::from(draft("Ali", "Ben", 3));
    let (repo, file) = file_backed_repo(vec![
        Guest::from(draft("Ali", "Ben", 1)),
        other.clone(),
        twin,
    ]);
    let service = service(repo, unused_exporter());

    let outcome = service.delete("Ali (2024-01-01)").await.expect("delete");
    assert_eq!(outcome.value, 2);
    assert_eq!(*file.lock().expect("lock"), vec![other]);
}

#[rstest]
#[case("Ali 2024-01-01")]
#[case("Ali (junior) (2024-01-01)")]
#[tokio::test]
async fn unparseable_labels_are_invalid_requests(#[case] label: &str) {
    let mut repo = MockGuestRepository::new();
    repo.expect_load_all().never();
    let service = service(repo, unused_exporter());

    let err = service.delete(label).await.expect_err("invalid label");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn labels_on_empty_list_report_nothing_to_delete(
    empty: (Service, Arc<StdMutex<Vec<Guest>>>),
) {
    let (service, _) = empty;
    let labels = service.delete_labels().await.expect("labels");
    assert!(labels.value.is_empty());
    assert_eq!(labels.notices, vec![Notice::info(NOTHING_TO_DELETE)]);
}

#[rstest]
#[tokio::test]
async fn export_with_zero_guests_yields_no_artifact(empty: (Service, Arc<StdMutex<Vec<Guest>>>)) {
    let (service, _) = empty;
    let outcome = service.export().await.expect("export");
    assert!(outcome.value.is_none());
    assert_eq!(outcome.notices, vec![Notice::info(NOTHING_TO_EXPORT)]);
}

#[rstest]
#[tokio::test]
async fn export_wraps_exporter_output() {
    let (repo, _) = file_backed_repo(vec![Guest::from(draft("Ali", "Ben", 1))]);
    let mut exporter = MockGuestExporter::new();
    exporter
        .expect_export()
        .times(1)
        .withf(|guests| guests.len() == 1 && guests[0].nom == "Ali")
        .returning(|_| Ok(b"PK\x03\x04".to_vec()));
    exporter
        .expect_file_name()
        .return_const("invites_eptv.xlsx");
    exporter.expect_content_type().return_const("application/test");
    let service = service(repo, exporter);

    let outcome = service.export().await.expect("export");
    let artifact = outcome.value.expect("artifact");
    assert_eq!(artifact.file_name(), "invites_eptv.xlsx");
    assert_eq!(artifact.content_type(), "application/test");
    assert_eq!(artifact.bytes(), b"PK\x03\x04");
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn catalog_stays_usable_while_export_is_encoded() {
    use std::sync::mpsc;
    use std::time::Duration;

    let (repo, _) = file_backed_repo(vec![Guest::from(draft("Ali", "Ben", 1))]);
    let (started_tx, started_rx) = mpsc::channel::<()>();
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let release_rx = StdMutex::new(release_rx);
    let mut exporter = MockGuestExporter::new();
    exporter.expect_export().times(1).returning(move |_| {
        started_tx.send(()).expect("signal start");
        release_rx
            .lock()
            .expect("lock")
            .recv()
            .expect("release signal");
        Ok(b"PK".to_vec())
    });
    exporter.expect_file_name().return_const("invites_eptv.xlsx");
    exporter.expect_content_type().return_const("application/test");
    let service = Arc::new(service(repo, exporter));

    let exporting = tokio::spawn({
        let service = Arc::clone(&service);
        async move { service.export().await }
    });
    tokio::task::spawn_blocking(move || started_rx.recv())
        .await
        .expect("join")
        .expect("export started");

    let listed = tokio::time::timeout(Duration::from_secs(5), service.list())
        .await
        .expect("list must not wait for the export")
        .expect("list");
    assert_eq!(listed.value.len(), 1);

    release_tx.send(()).expect("release export");
    let outcome = exporting.await.expect("join").expect("export");
    assert!(outcome.value.is_some());
}

#[rstest]
#[tokio::test]
async fn exporter_failure_is_internal() {
    let (repo, _) = file_backed_repo(vec![Guest::from(draft("Ali", "Ben", 1))]);
    let mut exporter = MockGuestExporter::new();
    exporter
        .expect_export()
        .returning(|_| Err(GuestExportError::write("disk full")));
    let service = service(repo, exporter);

    let err = service.export().await.expect_err("export fails");
    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn malformed_file_is_not_cached() {
    let mut repo = MockGuestRepository::new();
    let mut seq = mockall::Sequence::new();
    repo.expect_load_all()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Err(GuestRepositoryError::malformed("invites.json", "EOF")));
    repo.expect_load_all()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(Vec::new()));
    let service = service(repo, unused_exporter());

    let err = service.list().await.expect_err("malformed");
    assert_eq!(err.code(), ErrorCode::InternalError);

    let listed = service.list().await.expect("second load succeeds");
    assert_eq!(listed.notices[0].level(), NoticeLevel::Info);
}

#[rstest]
#[tokio::test]
async fn failed_save_keeps_memory_in_step_with_file() {
    let mut repo = MockGuestRepository::new();
    repo.expect_load_all().times(1).returning(|| Ok(Vec::new()));
    repo.expect_save_all()
        .returning(|_| Err(GuestRepositoryError::io("invites.json", "read-only")));
    let service = service(repo, unused_exporter());

    let err = service.add(draft("Ali", "Ben", 1)).await.expect_err("save fails");
    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    assert!(service.list().await.expect("list").value.is_empty());
}
