use crate::Currency;
use crate::ID;
use colored::Colorize;

/// A club member and their derived lifetime standing.
///
/// `winnings` and `games` are never set directly. They are pure functions
/// of session history, rebuilt by [`crate::ledger::Ledger::tally`] whenever
/// the history changes; patching them incrementally is how ledgers drift.
/// Retired players stay on the roster with `active = false` so historical
/// sessions keep resolving their id.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Player {
    id: ID<Player>,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
    #[serde(rename = "totalWinnings")]
    winnings: Currency,
    #[serde(rename = "gamesPlayed")]
    games: u32,
    #[serde(default = "active")]
    active: bool,
}

fn active() -> bool {
    true
}

impl Player {
    pub fn id(&self) -> ID<Player> {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
    pub fn winnings(&self) -> Currency {
        self.winnings
    }
    pub fn games(&self) -> u32 {
        self.games
    }
    pub fn active(&self) -> bool {
        self.active
    }
    /// Soft removal: ineligible for new sessions, history untouched.
    pub fn retire(&mut self) {
        self.active = false;
    }
    /// Same identity, stats replaced. The only way stats ever change.
    pub fn with(&self, winnings: Currency, games: u32) -> Self {
        Self {
            winnings,
            games,
            ..self.clone()
        }
    }
}

impl From<String> for Player {
    fn from(name: String) -> Self {
        Self {
            id: ID::default(),
            name,
            avatar: None,
            winnings: 0.0,
            games: 0,
            active: true,
        }
    }
}
impl From<&str> for Player {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let winnings = if self.winnings > 0.0 {
            format!("{:+.2}", self.winnings).green()
        } else if self.winnings < 0.0 {
            format!("{:+.2}", self.winnings).red()
        } else {
            format!("{:.2}", self.winnings).normal()
        };
        write!(
            f,
            "{:<16} {:>10} over {:>3} game{}",
            self.name,
            winnings,
            self.games,
            if self.games == 1 { "" } else { "s" }
        )
    }
}

impl crate::Arbitrary for Player {
    fn random() -> Self {
        Self::from(format!("player-{}", rand::random::<u16>()))
    }
}
