//! Defensive repair of match state restored from storage.
//!
//! A storage round-trip can hand back documents with lost type fidelity:
//! fields missing, collections flattened, numbers turned into strings.
//! [`reconcile_document`] rebuilds a trustworthy [`MatchState`] from the raw
//! document, replacing every malformed field with its canonical default and
//! recording a [`FieldRepair`] per replacement. A consistency audit then
//! clamps cross-field anomalies the per-field pass cannot see.
//!
//! This is repair, not migration: no versioning, never a rejection. The
//! result is always a safe, resumable state.

use core::fmt;

use serde_json::Value;

use crate::catalog;
use crate::order;
use crate::state::{
    BanLedger, BanOrder, BanRecord, GameResult, MatchFormat, MatchState, Phase, Player, PlayerIdx,
    MAX_BANS_PER_GAME,
};

/// Field a repair replaced or clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepairedField {
    Document,
    Players,
    MatchFormat,
    CurrentGame,
    CurrentPhase,
    BanOrder,
    CurrentBanIndex,
    StageBans,
    SelectedStage,
    GentlemansAgreement,
    GameHistory,
    /// Cross-field clamp applied by the audit pass.
    Consistency,
}

impl RepairedField {
    pub fn as_str(self) -> &'static str {
        match self {
            RepairedField::Document => "document",
            RepairedField::Players => "players",
            RepairedField::MatchFormat => "match_format",
            RepairedField::CurrentGame => "current_game",
            RepairedField::CurrentPhase => "current_phase",
            RepairedField::BanOrder => "ban_order",
            RepairedField::CurrentBanIndex => "current_ban_index",
            RepairedField::StageBans => "stage_bans",
            RepairedField::SelectedStage => "selected_stage",
            RepairedField::GentlemansAgreement => "gentlemans_agreement",
            RepairedField::GameHistory => "game_history",
            RepairedField::Consistency => "consistency",
        }
    }
}

/// One repair applied while reconciling a restored document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRepair {
    pub field: RepairedField,
    pub reason: String,
}

impl FieldRepair {
    fn new(field: RepairedField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldRepair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.as_str(), self.reason)
    }
}

/// Rebuilds a match state from a raw storage document.
///
/// Every field with the wrong shape or value range is replaced by its
/// canonical default and reported; well-formed sibling fields are kept. The
/// returned state has already been through [`audit_state`].
pub fn reconcile_document(doc: Value) -> (MatchState, Vec<FieldRepair>) {
    let mut repairs = Vec::new();
    let Value::Object(map) = doc else {
        repairs.push(FieldRepair::new(
            RepairedField::Document,
            "document is not an object; starting from a fresh state",
        ));
        return (MatchState::new(), repairs);
    };

    let mut state = MatchState::new();

    match decode_players(map.get("players")) {
        Some(players) => state.players = players,
        None => repairs.push(FieldRepair::new(
            RepairedField::Players,
            "expected two players with string names and non-negative scores",
        )),
    }

    match decode_format(map.get("match_format")) {
        Some(format) => state.match_format = format,
        None => repairs.push(FieldRepair::new(
            RepairedField::MatchFormat,
            "expected 'bo3' or 'bo5'; reset to bo3",
        )),
    }

    match decode_game_number(map.get("current_game")) {
        Some(game) => state.current_game = game,
        None => repairs.push(FieldRepair::new(
            RepairedField::CurrentGame,
            "expected a game number of 1 or more; reset to 1",
        )),
    }

    match decode_phase(map.get("current_phase")) {
        Some(phase) => state.current_phase = phase,
        None => repairs.push(FieldRepair::new(
            RepairedField::CurrentPhase,
            "expected one of the five phase tokens; reset to setup",
        )),
    }

    match decode_ban_order(map.get("ban_order")) {
        Some(ban_order) => state.ban_order = ban_order,
        None => repairs.push(FieldRepair::new(
            RepairedField::BanOrder,
            "expected a list of seat numbers; reset to empty",
        )),
    }

    match decode_ban_index(map.get("current_ban_index")) {
        Some(index) => state.current_ban_index = index,
        None => repairs.push(FieldRepair::new(
            RepairedField::CurrentBanIndex,
            "expected a non-negative number; reset to 0",
        )),
    }

    match decode_ledger(map.get("stage_bans")) {
        Some(ledger) => state.stage_bans = ledger,
        None => repairs.push(FieldRepair::new(
            RepairedField::StageBans,
            "expected a list of [stage, seat] pairs; reset to empty",
        )),
    }

    match decode_selected(map.get("selected_stage")) {
        Some(selected) => state.selected_stage = selected,
        None => repairs.push(FieldRepair::new(
            RepairedField::SelectedStage,
            "expected null or a stage id string; reset to null",
        )),
    }

    match map.get("gentlemans_agreement").and_then(Value::as_bool) {
        Some(flag) => state.gentlemans_agreement = flag,
        None => repairs.push(FieldRepair::new(
            RepairedField::GentlemansAgreement,
            "expected a boolean; reset to false",
        )),
    }

    match decode_history(map.get("game_history")) {
        Some(history) => state.game_history = history,
        None => repairs.push(FieldRepair::new(
            RepairedField::GameHistory,
            "expected a list of game records; reset to empty",
        )),
    }

    repairs.extend(audit_state(&mut state));
    (state, repairs)
}

/// Clamps cross-field anomalies on an already-typed state.
///
/// Idempotent: auditing a state it has already repaired reports nothing.
/// Each clamp converges toward the phase's canonical entry state instead of
/// rejecting the restore.
pub fn audit_state(state: &mut MatchState) -> Vec<FieldRepair> {
    let mut repairs = Vec::new();
    let note = |reason: &str| FieldRepair::new(RepairedField::Consistency, reason);

    if state.current_phase == Phase::SetComplete && !state.is_set_complete() {
        state.current_phase = Phase::Setup;
        repairs.push(note("set-complete without a winning score; returned to setup"));
    }

    if state.gentlemans_agreement && state.current_phase == Phase::Banning {
        state.clear_current_bans();
        state.current_phase = Phase::Selecting;
        repairs.push(note(
            "banning phase while the gentleman's agreement is active; moved to selecting",
        ));
    }

    if state.current_phase == Phase::Banning
        && !state.gentlemans_agreement
        && state.ban_order.is_empty()
    {
        state.ban_order = match state.game_history.last() {
            Some(last) => order::games2_plus_order(last.winner),
            None => order::game1_order(PlayerIdx::P1),
        };
        repairs.push(note("banning phase without a ban order; recomputed"));
    }

    if state.current_ban_index != state.stage_bans.len() {
        state.current_ban_index = state.stage_bans.len();
        repairs.push(note(
            "ban cursor diverged from the ledger; cursor rewound to the ledger length",
        ));
    }

    if state.current_ban_index > state.ban_order.len() {
        state.clear_current_bans();
        repairs.push(note(
            "more strikes recorded than the ban order allows; striking restarted",
        ));
    }

    if state.current_phase == Phase::Banning
        && state.stage_bans.len() >= catalog::ban_count_for_game(state.current_game)
    {
        state.current_phase = Phase::Selecting;
        repairs.push(note("striking already complete for this game; moved to selecting"));
    }

    match state.current_phase {
        Phase::WinnerSelect => {
            let unusable = match state.selected_stage.as_deref() {
                None => true,
                Some(stage) => !catalog::is_known_stage(stage) || state.stage_bans.contains(stage),
            };
            if unusable {
                state.selected_stage = None;
                state.current_phase = Phase::Selecting;
                repairs.push(note(
                    "winner-select without a usable selected stage; back to selecting",
                ));
            }
        }
        Phase::Setup | Phase::Banning | Phase::Selecting => {
            if state.selected_stage.is_some() {
                state.selected_stage = None;
                repairs.push(note("selected stage present before winner-select; cleared"));
            }
        }
        Phase::SetComplete => {}
    }

    if state.current_phase == Phase::Setup
        && (!state.stage_bans.is_empty() || !state.ban_order.is_empty())
    {
        state.clear_current_bans();
        state.ban_order = BanOrder::new();
        repairs.push(note("setup phase with striking residue; cleared"));
    }

    repairs
}

// ===== Field decoders =====
//
// Each returns `None` for any shape or range violation; the caller keeps the
// canonical default and records the repair.

fn decode_players(value: Option<&Value>) -> Option<[Player; 2]> {
    let entries = value?.as_array()?;
    if entries.len() != 2 {
        return None;
    }
    let mut players = Player::default_pair();
    for (slot, entry) in entries.iter().enumerate() {
        let object = entry.as_object()?;
        let id = object.get("id")?.as_u64()?;
        if id != slot as u64 {
            return None;
        }
        let name = object.get("name")?.as_str()?;
        let score = u32::try_from(object.get("score")?.as_u64()?).ok()?;
        players[slot].name = name.to_owned();
        players[slot].score = score;
    }
    Some(players)
}

fn decode_format(value: Option<&Value>) -> Option<MatchFormat> {
    match value?.as_str()? {
        "bo3" => Some(MatchFormat::Bo3),
        "bo5" => Some(MatchFormat::Bo5),
        _ => None,
    }
}

fn decode_game_number(value: Option<&Value>) -> Option<u32> {
    let game = u32::try_from(value?.as_u64()?).ok()?;
    (game >= 1).then_some(game)
}

fn decode_phase(value: Option<&Value>) -> Option<Phase> {
    match value?.as_str()? {
        "setup" => Some(Phase::Setup),
        "banning" => Some(Phase::Banning),
        "selecting" => Some(Phase::Selecting),
        "winner-select" => Some(Phase::WinnerSelect),
        "set-complete" => Some(Phase::SetComplete),
        _ => None,
    }
}

fn decode_seat(value: &Value) -> Option<PlayerIdx> {
    let raw = u8::try_from(value.as_u64()?).ok()?;
    PlayerIdx::new(raw)
}

fn decode_ban_order(value: Option<&Value>) -> Option<BanOrder> {
    let entries = value?.as_array()?;
    if entries.len() > MAX_BANS_PER_GAME {
        return None;
    }
    let mut ban_order = BanOrder::new();
    for entry in entries {
        ban_order.push(decode_seat(entry)?);
    }
    Some(ban_order)
}

fn decode_ban_index(value: Option<&Value>) -> Option<usize> {
    usize::try_from(value?.as_u64()?).ok()
}

fn decode_pair(value: &Value) -> Option<(String, PlayerIdx)> {
    let pair = value.as_array()?;
    if pair.len() != 2 {
        return None;
    }
    let stage = pair[0].as_str()?.to_owned();
    let seat = decode_seat(&pair[1])?;
    Some((stage, seat))
}

fn decode_ledger(value: Option<&Value>) -> Option<BanLedger> {
    let entries = value?.as_array()?;
    if entries.len() > MAX_BANS_PER_GAME {
        return None;
    }
    let mut ledger = BanLedger::new();
    for entry in entries {
        let (stage, seat) = decode_pair(entry)?;
        if ledger.contains(&stage) {
            return None;
        }
        ledger.push(BanRecord::new(stage, seat)).ok()?;
    }
    Some(ledger)
}

fn decode_selected(value: Option<&Value>) -> Option<Option<String>> {
    match value? {
        Value::Null => Some(None),
        Value::String(stage) => Some(Some(stage.clone())),
        _ => None,
    }
}

fn decode_history(value: Option<&Value>) -> Option<Vec<GameResult>> {
    let entries = value?.as_array()?;
    let mut history = Vec::with_capacity(entries.len());
    for entry in entries {
        let object = entry.as_object()?;
        let game_number = decode_game_number(object.get("game_number"))?;
        let winner = decode_seat(object.get("winner")?)?;
        let selected_stage = object.get("selected_stage")?.as_str()?.to_owned();
        let pairs = object.get("stage_bans")?.as_array()?;
        let mut stage_bans = Vec::with_capacity(pairs.len());
        for pair in pairs {
            stage_bans.push(decode_pair(pair)?);
        }
        history.push(GameResult {
            game_number,
            winner,
            selected_stage,
            stage_bans,
        });
    }
    Some(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document_for_state(state: &MatchState) -> Value {
        serde_json::to_value(state).unwrap()
    }

    #[test]
    fn clean_round_trip_needs_no_repairs() {
        let mut original = MatchState::new();
        crate::engine::MatchEngine::new(&mut original)
            .execute(&crate::action::MatchAction::setup(
                crate::action::MatchConfig {
                    player1_name: "Alice".into(),
                    player2_name: "Bob".into(),
                    match_format: MatchFormat::Bo5,
                    first_banner: PlayerIdx::P2,
                    gentlemans_agreement: false,
                },
            ))
            .unwrap();
        crate::engine::MatchEngine::new(&mut original)
            .execute(&crate::action::MatchAction::ban("battlefield"))
            .unwrap();

        let (restored, repairs) = reconcile_document(document_for_state(&original));
        assert_eq!(repairs, Vec::new());
        assert_eq!(restored, original);
    }

    #[test]
    fn each_broken_field_falls_back_to_its_default() {
        let doc = json!({
            "players": "not-a-pair",
            "match_format": "bo7",
            "current_game": 0,
            "current_phase": "intermission",
            "ban_order": {"seat": 0},
            "current_ban_index": -3,
            "stage_bans": {"battlefield": 0},
            "selected_stage": 17,
            "gentlemans_agreement": "yes",
            "game_history": 42,
        });

        let (state, repairs) = reconcile_document(doc);
        assert_eq!(state.players()[0].name, "Player 1");
        assert_eq!(state.match_format(), MatchFormat::Bo3);
        assert_eq!(state.current_game(), 1);
        assert_eq!(state.phase(), Phase::Setup);
        assert!(state.ban_order().is_empty());
        assert_eq!(state.current_ban_index(), 0);
        assert!(state.stage_bans().is_empty());
        assert_eq!(state.selected_stage(), None);
        assert!(!state.gentlemans_agreement());
        assert!(state.game_history().is_empty());

        let fields: Vec<_> = repairs.iter().map(|r| r.field).collect();
        for field in [
            RepairedField::Players,
            RepairedField::MatchFormat,
            RepairedField::CurrentGame,
            RepairedField::CurrentPhase,
            RepairedField::BanOrder,
            RepairedField::CurrentBanIndex,
            RepairedField::StageBans,
            RepairedField::SelectedStage,
            RepairedField::GentlemansAgreement,
            RepairedField::GameHistory,
        ] {
            assert!(fields.contains(&field), "missing repair for {field:?}");
        }
    }

    #[test]
    fn one_broken_field_repairs_alone_and_keeps_siblings() {
        // Mid-set state under the gentleman's agreement: no striking residue,
        // so no field repair can cascade into a consistency clamp.
        let base = json!({
            "players": [
                {"id": 0, "name": "Alice", "score": 1},
                {"id": 1, "name": "Bob", "score": 0},
            ],
            "match_format": "bo5",
            "current_game": 2,
            "current_phase": "selecting",
            "ban_order": [],
            "current_ban_index": 0,
            "stage_bans": [],
            "selected_stage": null,
            "gentlemans_agreement": true,
            "game_history": [
                {
                    "game_number": 1,
                    "winner": 0,
                    "selected_stage": "battlefield",
                    "stage_bans": [],
                },
            ],
        });

        let cases = [
            ("players", json!(3), RepairedField::Players),
            ("match_format", json!("bo9"), RepairedField::MatchFormat),
            ("current_game", json!("two"), RepairedField::CurrentGame),
            ("current_phase", json!("warmup"), RepairedField::CurrentPhase),
            ("ban_order", json!("1221221"), RepairedField::BanOrder),
            ("current_ban_index", json!(null), RepairedField::CurrentBanIndex),
            ("stage_bans", json!({"battlefield": 0}), RepairedField::StageBans),
            ("selected_stage", json!(false), RepairedField::SelectedStage),
            ("gentlemans_agreement", json!("on"), RepairedField::GentlemansAgreement),
            ("game_history", json!("none"), RepairedField::GameHistory),
        ];

        for (key, bad, field) in cases {
            let mut doc = base.clone();
            doc[key] = bad;

            let (state, repairs) = reconcile_document(doc);
            assert_eq!(repairs.len(), 1, "{key} should repair alone, got {repairs:?}");
            assert_eq!(repairs[0].field, field);
            if field != RepairedField::Players {
                assert_eq!(state.players()[0].name, "Alice", "{key} broke a sibling");
            }
            if field != RepairedField::GameHistory {
                assert_eq!(state.game_history().len(), 1, "{key} broke a sibling");
            }
        }
    }

    #[test]
    fn pair_list_ledger_is_reconstructed() {
        let doc = json!({
            "players": [
                {"id": 0, "name": "Alice", "score": 0},
                {"id": 1, "name": "Bob", "score": 0},
            ],
            "match_format": "bo3",
            "current_game": 1,
            "current_phase": "banning",
            "ban_order": [0, 0, 0, 1, 1, 1, 1],
            "current_ban_index": 2,
            "stage_bans": [["battlefield", 0], ["smashville", 0]],
            "selected_stage": null,
            "gentlemans_agreement": false,
            "game_history": [],
        });

        let (state, repairs) = reconcile_document(doc);
        assert_eq!(repairs, Vec::new());
        assert_eq!(state.stage_bans().len(), 2);
        assert_eq!(state.stage_bans().struck_by("smashville"), Some(PlayerIdx::P1));
        assert_eq!(state.current_ban_index(), 2);
    }

    #[test]
    fn non_object_documents_reset_wholesale() {
        let (state, repairs) = reconcile_document(json!([1, 2, 3]));
        assert_eq!(state, MatchState::new());
        assert_eq!(repairs.len(), 1);
        assert_eq!(repairs[0].field, RepairedField::Document);
    }

    #[test]
    fn audit_rewinds_a_diverged_cursor() {
        let mut state = MatchState::new();
        state.current_phase = Phase::Banning;
        state.ban_order = order::game1_order(PlayerIdx::P1);
        state
            .stage_bans
            .push(BanRecord::new("battlefield", PlayerIdx::P1))
            .unwrap();
        state.current_ban_index = 5;

        let repairs = audit_state(&mut state);
        assert_eq!(state.current_ban_index(), 1);
        assert!(repairs.iter().any(|r| r.field == RepairedField::Consistency));

        // A second pass has nothing left to fix.
        assert_eq!(audit_state(&mut state), Vec::new());
    }

    #[test]
    fn audit_restores_selecting_when_the_selected_stage_is_gone() {
        let mut state = MatchState::new();
        state.current_phase = Phase::WinnerSelect;
        state.selected_stage = Some("not-a-stage".into());

        let repairs = audit_state(&mut state);
        assert_eq!(state.phase(), Phase::Selecting);
        assert_eq!(state.selected_stage(), None);
        assert_eq!(repairs.len(), 1);
    }
}
