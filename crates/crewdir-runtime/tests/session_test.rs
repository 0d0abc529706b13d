use crewdir_client::RemoteStore;
use crewdir_runtime::{
    Action, DirectorySession, FormField, FormMode, NotificationKind, RemoveOutcome, SubmitOutcome,
};
use crewdir_testing::MockDirectoryServer;
use crewdir_testing::fixtures::sample_directory;

fn session_for(server: &MockDirectoryServer) -> DirectorySession {
    DirectorySession::new(RemoteStore::new(server.base_url()))
}

#[tokio::test]
async fn test_add_submit_success_resets_form_and_refreshes_once() {
    let server = MockDirectoryServer::start().expect("server start");
    let mut session = session_for(&server);

    session.form_mut().set_field(FormField::Id, "7");
    session.form_mut().set_field(FormField::Name, "Di Sousa");
    session.form_mut().set_field(FormField::Role, "Analyst");
    session.form_mut().set_field(FormField::Email, "di@corp.example");

    let before = server.list_calls();
    let outcome = session.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Created(ref id) if id.as_str() == "7"));
    assert_eq!(session.form().mode(), &FormMode::Add);
    assert!(session.form().fields().id.is_empty());
    // Exactly one refresh per successful submit
    assert_eq!(server.list_calls(), before + 1);
    assert_eq!(session.cache().len(), 1);
    assert_eq!(session.cache().all()[0].name, "Di Sousa");
}

#[tokio::test]
async fn test_duplicate_id_keeps_fields_and_posts_specific_notification() {
    let server = MockDirectoryServer::start_with(sample_directory()).expect("server start");
    let mut session = session_for(&server);
    session.refresh().await.expect("refresh");

    session.form_mut().set_field(FormField::Id, "1");
    session.form_mut().set_field(FormField::Name, "Imposter");
    session.form_mut().set_field(FormField::Role, "Eng");
    session.form_mut().set_field(FormField::Email, "x@corp.example");

    let before = server.list_calls();
    let outcome = session.submit().await;

    assert!(matches!(outcome, SubmitOutcome::DuplicateId(ref id) if id.as_str() == "1"));
    // Still in add mode with the typed fields intact
    assert_eq!(session.form().mode(), &FormMode::Add);
    assert_eq!(session.form().fields().name, "Imposter");
    // No refresh on rejection
    assert_eq!(server.list_calls(), before);

    let notification = session.notification().expect("notification");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(notification.message.contains("already exists"));
    assert!(!notification.message.contains("Failed"));
}

#[tokio::test]
async fn test_edit_submit_updates_and_returns_to_add_mode() {
    let server = MockDirectoryServer::start_with(sample_directory()).expect("server start");
    let mut session = session_for(&server);
    session.refresh().await.expect("refresh");

    assert!(session.start_edit(&"2".into()));
    assert!(session.form().id_locked());
    session.form_mut().set_field(FormField::Role, "Sales Manager");

    let outcome = session.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Updated(ref id) if id.as_str() == "2"));
    assert_eq!(session.form().mode(), &FormMode::Add);
    let updated = session.cache().find_by_id(&"2".into()).expect("cached");
    assert_eq!(updated.role, "Sales Manager");
}

#[tokio::test]
async fn test_start_edit_stale_id_is_silent() {
    let server = MockDirectoryServer::start_with(sample_directory()).expect("server start");
    let mut session = session_for(&server);
    session.refresh().await.expect("refresh");
    // Let the refresh settle; no notification is pending at this point.
    assert!(session.notification().is_none());

    assert!(!session.start_edit(&"gone".into()));
    assert_eq!(session.form().mode(), &FormMode::Add);
    assert!(session.notification().is_none());
}

#[tokio::test]
async fn test_failed_refresh_keeps_stale_cache() {
    let server = MockDirectoryServer::start_with(sample_directory()).expect("server start");
    let mut session = session_for(&server);
    session.refresh().await.expect("refresh");
    assert_eq!(session.cache().len(), 3);

    server.set_fail_all(true);
    let result = session.refresh().await;

    assert!(result.is_err());
    // Stale-but-available: the previous snapshot survives
    assert_eq!(session.cache().len(), 3);
    let notification = session.notification().expect("notification");
    assert_eq!(notification.kind, NotificationKind::Error);
}

#[tokio::test]
async fn test_declined_delete_sends_no_request() {
    let server = MockDirectoryServer::start_with(sample_directory()).expect("server start");
    let mut session = session_for(&server);
    session.refresh().await.expect("refresh");

    session.request_delete("1".into());
    session.decline_delete();

    assert_eq!(server.delete_calls(), 0);
    assert_eq!(server.employees().len(), 3);
    assert_eq!(session.cache().len(), 3);
    // Declining is silent
    assert!(session.notification().is_none());

    // Confirming with nothing pending is also a no-op
    let outcome = session.confirm_delete().await;
    assert!(matches!(outcome, RemoveOutcome::NothingPending));
    assert_eq!(server.delete_calls(), 0);
}

#[tokio::test]
async fn test_confirmed_delete_removes_and_refreshes() {
    let server = MockDirectoryServer::start_with(sample_directory()).expect("server start");
    let mut session = session_for(&server);
    session.refresh().await.expect("refresh");

    session.request_delete("3".into());
    let outcome = session.confirm_delete().await;

    assert!(matches!(outcome, RemoveOutcome::Removed(ref id) if id.as_str() == "3"));
    assert_eq!(server.delete_calls(), 1);
    assert_eq!(session.cache().len(), 2);
    assert!(session.cache().find_by_id(&"3".into()).is_none());
}

#[tokio::test]
async fn test_dispatch_routes_filter_and_form_actions() {
    let server = MockDirectoryServer::start_with(sample_directory()).expect("server start");
    let mut session = session_for(&server);
    session.dispatch(Action::Refresh).await;

    for c in "ann".chars() {
        session.dispatch(Action::SearchInput(c)).await;
    }
    assert_eq!(session.filter().search, "ann");
    assert_eq!(session.filtered().len(), 1);

    session.dispatch(Action::SearchBackspace).await;
    assert_eq!(session.filter().search, "an");

    session.dispatch(Action::ClearFilters).await;
    assert!(session.filter().is_empty());
    assert_eq!(session.filtered().len(), 3);

    session
        .dispatch(Action::FieldInput(FormField::Name, 'Z'))
        .await;
    assert_eq!(session.form().fields().name, "Z");
}

#[tokio::test]
async fn test_cycle_department_walks_known_set_and_wraps() {
    let server = MockDirectoryServer::start().expect("server start");
    let mut session = session_for(&server);

    let mut seen = Vec::new();
    for _ in 0..=crewdir_engine::KNOWN_DEPARTMENTS.len() {
        session.cycle_department();
        seen.push(session.filter().department.clone());
    }

    assert_eq!(seen.first().map(String::as_str), Some("Engineering"));
    // Wraps back to "all departments"
    assert_eq!(seen.last().map(String::as_str), Some(""));
}
