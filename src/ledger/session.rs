use crate::ID;
use crate::ledger::Entry;
use crate::ledger::Settlement;
use chrono::DateTime;
use chrono::Utc;

/// One night of play: who sat down with what, who left with what, and the
/// transfers that square it all up.
///
/// Entries are an unordered set, one per participant. The settlement list
/// is derived from the entries by [`crate::ledger::Solver`] and must be
/// regenerated whenever the entries change; it is carried here only so
/// hosts can display and persist the plan alongside the night it settles.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    id: ID<Session>,
    date: DateTime<Utc>,
    #[serde(rename = "players")]
    entries: Vec<Entry>,
    settlements: Vec<Settlement>,
}

impl Session {
    pub fn id(&self) -> ID<Session> {
        self.id
    }
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }
    /// Replace the entries and their freshly solved settlements together.
    /// There is deliberately no way to swap one without the other.
    pub fn revise(&mut self, entries: Vec<Entry>, settlements: Vec<Settlement>) {
        self.entries = entries;
        self.settlements = settlements;
    }
}

impl From<(DateTime<Utc>, Vec<Entry>, Vec<Settlement>)> for Session {
    fn from((date, entries, settlements): (DateTime<Utc>, Vec<Entry>, Vec<Settlement>)) -> Self {
        Self {
            id: ID::default(),
            date,
            entries,
            settlements,
        }
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}  {} player{}, {} transfer{}",
            self.date.format("%Y-%m-%d"),
            self.entries.len(),
            if self.entries.len() == 1 { "" } else { "s" },
            self.settlements.len(),
            if self.settlements.len() == 1 { "" } else { "s" },
        )
    }
}
