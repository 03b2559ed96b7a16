use std::fs;

use runtime::{FileMatchStore, MatchSession, MatchStore};
use strike_core::restore::{RepairedField, reconcile_document};
use strike_core::{MatchConfig, MatchFormat, MatchState, Phase, PlayerIdx};

fn setup_config() -> MatchConfig {
    MatchConfig {
        player1_name: "Alice".into(),
        player2_name: "Bob".into(),
        match_format: MatchFormat::Bo5,
        first_banner: PlayerIdx::P2,
        gentlemans_agreement: false,
    }
}

#[test]
fn file_store_round_trips_a_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileMatchStore::new(dir.path()).expect("store");
    assert!(!store.exists());

    let state = MatchState::new();
    store.save(&state).expect("save");
    assert!(store.exists());
    assert_eq!(
        store.path().file_name().and_then(|n| n.to_str()),
        Some("smash-stage-ban-app.json")
    );
    // The temp file from the atomic write must not linger.
    assert!(!store.path().with_extension("json.tmp").exists());

    let raw = store.load_raw().expect("load").expect("document present");
    let (loaded, repairs) = reconcile_document(raw);
    assert!(repairs.is_empty());
    assert_eq!(loaded, state);

    store.clear().expect("clear");
    assert!(!store.exists());
    assert!(store.load_raw().expect("load").is_none());
}

#[test]
fn autosave_carries_a_match_across_sessions() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut first = MatchSession::new(Box::new(
        FileMatchStore::new(dir.path()).expect("store"),
    ));
    first.setup_match(setup_config()).expect("setup");
    first.ban_stage("battlefield").expect("legal");
    first.ban_stage("smashville").expect("legal");

    // A second session over the same directory picks up where we left off.
    let mut second = MatchSession::new(Box::new(
        FileMatchStore::new(dir.path()).expect("store"),
    ));
    assert!(second.restore());
    assert!(second.validate_restored_state().is_empty());
    assert_eq!(second.state(), first.state());
    assert_eq!(second.state().phase(), Phase::Banning);
    assert_eq!(second.state().stage_bans().len(), 2);
    assert_eq!(second.state().acting_player(), Some(PlayerIdx::P2));
}

#[test]
fn unreadable_document_degrades_to_a_fresh_match() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileMatchStore::new(dir.path()).expect("store");
    fs::write(store.path(), b"not json {").expect("write garbage");

    let mut session = MatchSession::new(Box::new(store));
    assert!(session.restore());

    let repairs = session.validate_restored_state();
    assert_eq!(repairs.len(), 1);
    assert_eq!(repairs[0].field, RepairedField::Document);
    assert_eq!(session.state(), &MatchState::new());
}

#[test]
fn restore_reports_nothing_without_a_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = MatchSession::new(Box::new(
        FileMatchStore::new(dir.path()).expect("store"),
    ));
    assert!(!session.restore());
    assert!(session.validate_restored_state().is_empty());
    assert_eq!(session.state().phase(), Phase::Setup);
}
