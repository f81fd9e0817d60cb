use crate::ledger::Player;
use crate::ledger::Session;

/// The bulk export/import shape: the entire club in one document.
///
/// Both keys are required; deserialization fails cleanly (mutating
/// nothing) when either is missing or `sessions` is not a sequence.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    pub players: Vec<Player>,
    pub sessions: Vec<Session>,
}

impl From<(Vec<Player>, Vec<Session>)> for Document {
    fn from((players, sessions): (Vec<Player>, Vec<Session>)) -> Self {
        Self { players, sessions }
    }
}
