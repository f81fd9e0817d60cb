use crate::Currency;
use crate::ID;
use crate::ledger::Player;
use colored::Colorize;

/// A single directed payment instruction: debtor pays creditor.
///
/// Amounts are positive and rounded to whole cents. A session's settlement
/// list is derived data, always exactly the solver's output for that
/// session's entries.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Settlement {
    #[serde(rename = "fromId")]
    from: ID<Player>,
    #[serde(rename = "toId")]
    to: ID<Player>,
    amount: Currency,
}

impl Settlement {
    pub fn from_id(&self) -> ID<Player> {
        self.from
    }
    pub fn to_id(&self) -> ID<Player> {
        self.to
    }
    pub fn amount(&self) -> Currency {
        self.amount
    }
}

impl From<(ID<Player>, ID<Player>, Currency)> for Settlement {
    fn from((from, to, amount): (ID<Player>, ID<Player>, Currency)) -> Self {
        Self { from, to, amount }
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let amount = format!("{:.2}", self.amount).green();
        write!(f, "{} -> {}  {}", self.from, self.to, amount)
    }
}
