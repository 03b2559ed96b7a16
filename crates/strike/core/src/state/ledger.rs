use arrayvec::ArrayVec;

use super::PlayerIdx;

/// Largest number of strikes any game requires (game 1 of the striking
/// protocol). Games 2+ use 3.
pub const MAX_BANS_PER_GAME: usize = 7;

/// Ordered sequence of seat turns for one game's striking phase.
pub type BanOrder = ArrayVec<PlayerIdx, MAX_BANS_PER_GAME>;

/// A single recorded strike: which stage, struck by whom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BanRecord {
    /// Catalog id of the struck stage.
    pub stage: String,
    /// Seat that struck it.
    pub by: PlayerIdx,
}

impl BanRecord {
    pub fn new(stage: impl Into<String>, by: PlayerIdx) -> Self {
        Self {
            stage: stage.into(),
            by,
        }
    }
}

/// Insertion-ordered ledger of the current game's strikes.
///
/// The record list is the primary structure; "is this stage banned" is a
/// derived lookup over it. Undo only ever touches the latest record, so no
/// container iteration order is load-bearing beyond the list itself.
///
/// On the wire the ledger is an ordered list of `[stage_id, player_index]`
/// pairs; see the serde impls at the bottom of this module.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BanLedger {
    records: ArrayVec<BanRecord, MAX_BANS_PER_GAME>,
}

impl BanLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded strikes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the given stage has been struck this game.
    pub fn contains(&self, stage_id: &str) -> bool {
        self.records.iter().any(|record| record.stage == stage_id)
    }

    /// Seat that struck the given stage, if any.
    pub fn struck_by(&self, stage_id: &str) -> Option<PlayerIdx> {
        self.records
            .iter()
            .find(|record| record.stage == stage_id)
            .map(|record| record.by)
    }

    /// Most recent record, the only one undo may remove.
    pub fn latest(&self) -> Option<&BanRecord> {
        self.records.last()
    }

    /// Records in strike order.
    pub fn records(&self) -> &[BanRecord] {
        &self.records
    }

    /// Snapshot of the ledger as `(stage, seat)` pairs, the shape kept in
    /// game history and on the wire.
    pub fn to_pairs(&self) -> Vec<(String, PlayerIdx)> {
        self.records
            .iter()
            .map(|record| (record.stage.clone(), record.by))
            .collect()
    }

    /// Appends a strike. Fails when the ledger is at game-1 capacity.
    pub(crate) fn push(&mut self, record: BanRecord) -> Result<(), BanRecord> {
        self.records.try_push(record).map_err(|err| err.element())
    }

    /// Removes and returns the most recent strike.
    pub(crate) fn pop(&mut self) -> Option<BanRecord> {
        self.records.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}

impl FromIterator<BanRecord> for BanLedger {
    /// Collects at most [`MAX_BANS_PER_GAME`] records; extras are dropped.
    fn from_iter<I: IntoIterator<Item = BanRecord>>(iter: I) -> Self {
        let mut ledger = BanLedger::new();
        for record in iter.into_iter().take(MAX_BANS_PER_GAME) {
            let _ = ledger.push(record);
        }
        ledger
    }
}

// ===== Wire codec =====
//
// The persisted form is `[["battlefield", 0], ["smashville", 1], ...]`,
// preserving strike order. Decoding rejects documents that exceed the ledger
// capacity; shape repair for such documents happens in the restore module.

#[cfg(feature = "serde")]
impl serde::Serialize for BanLedger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for record in &self.records {
            seq.serialize_element(&(&record.stage, record.by))?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BanLedger {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let pairs = Vec::<(String, PlayerIdx)>::deserialize(deserializer)?;
        if pairs.len() > MAX_BANS_PER_GAME {
            return Err(D::Error::custom(format!(
                "ban ledger holds at most {MAX_BANS_PER_GAME} records, got {}",
                pairs.len()
            )));
        }
        let mut ledger = BanLedger::new();
        for (stage, by) in pairs {
            let _ = ledger.push(BanRecord::new(stage, by));
        }
        Ok(ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_derived_from_records() {
        let mut ledger = BanLedger::new();
        ledger
            .push(BanRecord::new("battlefield", PlayerIdx::P1))
            .unwrap();
        ledger
            .push(BanRecord::new("smashville", PlayerIdx::P2))
            .unwrap();

        assert!(ledger.contains("battlefield"));
        assert_eq!(ledger.struck_by("smashville"), Some(PlayerIdx::P2));
        assert_eq!(ledger.struck_by("yoshis-story"), None);
        assert_eq!(ledger.latest().map(|r| r.stage.as_str()), Some("smashville"));
    }

    #[test]
    fn capacity_is_bounded_at_game_one_count() {
        let mut ledger = BanLedger::new();
        for i in 0..MAX_BANS_PER_GAME {
            ledger
                .push(BanRecord::new(format!("stage-{i}"), PlayerIdx::P1))
                .unwrap();
        }
        let overflow = ledger.push(BanRecord::new("one-more", PlayerIdx::P2));
        assert_eq!(overflow.unwrap_err().stage, "one-more");
        assert_eq!(ledger.len(), MAX_BANS_PER_GAME);
    }

    #[test]
    fn pop_removes_only_the_latest() {
        let mut ledger = BanLedger::new();
        ledger
            .push(BanRecord::new("battlefield", PlayerIdx::P1))
            .unwrap();
        ledger
            .push(BanRecord::new("smashville", PlayerIdx::P1))
            .unwrap();

        let popped = ledger.pop().unwrap();
        assert_eq!(popped.stage, "smashville");
        assert!(ledger.contains("battlefield"));
        assert!(!ledger.contains("smashville"));
    }
}
