use std::fs;

use runtime::{FileMatchStore, InMemoryMatchStore, MatchSession};
use serde_json::json;
use strike_core::restore::RepairedField;
use strike_core::{Phase, PlayerIdx};

#[test]
fn diverged_cursor_is_clamped_on_restore() {
    // Mid-game-2 document whose cursor ran ahead of the recorded strikes.
    let document = json!({
        "players": [
            { "id": 0, "name": "Alice", "score": 1 },
            { "id": 1, "name": "Bob", "score": 0 }
        ],
        "match_format": "bo5",
        "current_game": 2,
        "current_phase": "banning",
        "ban_order": [0, 0, 0],
        "current_ban_index": 3,
        "stage_bans": [["battlefield", 0]],
        "selected_stage": null,
        "gentlemans_agreement": false,
        "game_history": [
            {
                "game_number": 1,
                "winner": 0,
                "selected_stage": "smashville",
                "stage_bans": []
            }
        ]
    });

    let mut session = MatchSession::new(Box::new(InMemoryMatchStore::with_document(document)));
    assert!(session.restore());

    let repairs = session.validate_restored_state();
    assert!(repairs.iter().any(|r| r.field == RepairedField::Consistency));

    let state = session.state();
    assert_eq!(state.current_ban_index(), 1);
    assert_eq!(state.phase(), Phase::Banning);
    assert_eq!(state.acting_player(), Some(PlayerIdx::P1));
    assert_eq!(state.player(PlayerIdx::P1).score, 1);
}

#[test]
fn selected_stage_that_was_struck_is_dropped() {
    let document = json!({
        "players": [
            { "id": 0, "name": "Alice", "score": 0 },
            { "id": 1, "name": "Bob", "score": 0 }
        ],
        "match_format": "bo3",
        "current_game": 1,
        "current_phase": "winner-select",
        "ban_order": [0, 0, 0, 1, 1, 1, 1],
        "current_ban_index": 7,
        "stage_bans": [
            ["battlefield", 0], ["final-destination", 0], ["small-battlefield", 0],
            ["pokemon-stadium-2", 1], ["smashville", 1], ["town-and-city", 1],
            ["kalos-pokemon-league", 1]
        ],
        "selected_stage": "battlefield",
        "gentlemans_agreement": false,
        "game_history": []
    });

    let mut session = MatchSession::new(Box::new(InMemoryMatchStore::with_document(document)));
    assert!(session.restore());
    session.validate_restored_state();

    // The struck pick is dropped and play resumes from stage selection.
    let state = session.state();
    assert_eq!(state.selected_stage(), None);
    assert_eq!(state.phase(), Phase::Selecting);
    assert_eq!(state.stage_bans().len(), 7);
}

#[test]
fn repaired_document_is_persisted_back_in_canonical_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileMatchStore::new(dir.path()).expect("store");
    let broken = json!({
        "players": "nobody",
        "match_format": "bo7",
        "current_phase": "banning",
        "ban_order": [],
        "current_ban_index": 0,
        "stage_bans": [],
        "selected_stage": null,
        "gentlemans_agreement": false,
        "game_history": []
    });
    fs::write(store.path(), broken.to_string()).expect("seed document");

    let mut first = MatchSession::new(Box::new(store));
    assert!(first.restore());
    assert!(!first.validate_restored_state().is_empty());

    // The autosave after repair leaves a document that restores cleanly.
    let mut second = MatchSession::new(Box::new(
        FileMatchStore::new(dir.path()).expect("store"),
    ));
    assert!(second.restore());
    assert!(second.validate_restored_state().is_empty());
    assert_eq!(second.state(), first.state());
}
