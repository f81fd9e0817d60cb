use crate::Arbitrary;
use crate::Currency;
use crate::ID;
use crate::ledger::Player;

/// One player's money in and money out for a single session.
///
/// Both amounts are non-negative by caller contract; the net can swing
/// either way.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
    #[serde(rename = "playerId")]
    player: ID<Player>,
    #[serde(rename = "buyIn")]
    buy_in: Currency,
    #[serde(rename = "cashOut")]
    cash_out: Currency,
}

impl Entry {
    pub fn player(&self) -> ID<Player> {
        self.player
    }
    pub fn buy_in(&self) -> Currency {
        self.buy_in
    }
    pub fn cash_out(&self) -> Currency {
        self.cash_out
    }
    /// Signed result for the night. Positive means the player left up.
    pub fn net(&self) -> Currency {
        self.cash_out - self.buy_in
    }
}

impl From<(ID<Player>, Currency, Currency)> for Entry {
    fn from((player, buy_in, cash_out): (ID<Player>, Currency, Currency)) -> Self {
        Self {
            player,
            buy_in,
            cash_out,
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "in {:>8.2}  out {:>8.2}  net {:+.2}",
            self.buy_in,
            self.cash_out,
            self.net()
        )
    }
}

impl Arbitrary for Entry {
    fn random() -> Self {
        Self {
            player: ID::random(),
            buy_in: crate::round(rand::random::<Currency>() * 100.0),
            cash_out: crate::round(rand::random::<Currency>() * 100.0),
        }
    }
}
