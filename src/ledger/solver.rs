use crate::Currency;
use crate::EPSILON;
use crate::ID;
use crate::ledger::Entry;
use crate::ledger::Player;
use crate::ledger::Settlement;

/// Total buy-ins and cash-outs disagree beyond numeric tolerance.
///
/// This is a data-entry problem, not a fatal one: the caller re-prompts
/// with corrected figures and tries again. Carries both totals and the
/// signed difference so the message is actionable.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("buy-ins total {buy_ins:.2} but cash-outs total {cash_outs:.2} ({difference:+.2})")]
pub struct Imbalance {
    pub buy_ins: Currency,
    pub cash_outs: Currency,
    /// `cash_outs - buy_ins`.
    pub difference: Currency,
}

/// Computes the pairwise transfers that cancel a session's net positions.
///
/// Players who lost money pay players who won it. Matching is greedy
/// largest-first: sort debtors and creditors descending by magnitude, then
/// sweep two pointers, always pairing the biggest unresolved debt against
/// the biggest unresolved credit. Not guaranteed globally minimal, but
/// deterministic, reproducible, and short in practice: never more than
/// `debtors + creditors - 1` transfers.
pub struct Solver {
    entries: Vec<Entry>,
}

impl From<Vec<Entry>> for Solver {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl Solver {
    /// Produces the full settlement plan, or `Imbalance` if money was
    /// conjured or vanished. Never returns a partial plan. An all-broke-even
    /// session settles to an empty list.
    pub fn settle(self) -> Result<Vec<Settlement>, Imbalance> {
        self.balanced()?;
        let mut debtors = self.debtors();
        let mut creditors = self.creditors();
        let mut settlements = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < debtors.len() && j < creditors.len() {
            let amount = Currency::min(debtors[i].1, creditors[j].1);
            settlements.push(Settlement::from((
                debtors[i].0,
                creditors[j].0,
                crate::round(amount),
            )));
            debtors[i].1 -= amount;
            creditors[j].1 -= amount;
            if debtors[i].1 < EPSILON {
                i += 1;
            }
            if creditors[j].1 < EPSILON {
                j += 1;
            }
        }
        Ok(settlements)
    }

    /// Conservation of money, up to floating point noise.
    fn balanced(&self) -> Result<(), Imbalance> {
        let buy_ins = self.entries.iter().map(|e| e.buy_in()).sum::<Currency>();
        let cash_outs = self.entries.iter().map(|e| e.cash_out()).sum::<Currency>();
        if (buy_ins - cash_outs).abs() > EPSILON {
            Err(Imbalance {
                buy_ins,
                cash_outs,
                difference: cash_outs - buy_ins,
            })
        } else {
            Ok(())
        }
    }

    /// Players down money, largest loss first. Stable sort keeps input
    /// order on ties, which keeps output deterministic.
    fn debtors(&self) -> Vec<(ID<Player>, Currency)> {
        let mut debtors = self
            .entries
            .iter()
            .filter(|e| e.net() < -EPSILON)
            .map(|e| (e.player(), -e.net()))
            .collect::<Vec<_>>();
        debtors.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        debtors
    }

    /// Players up money, largest win first.
    fn creditors(&self) -> Vec<(ID<Player>, Currency)> {
        let mut creditors = self
            .entries
            .iter()
            .filter(|e| e.net() > EPSILON)
            .map(|e| (e.player(), e.net()))
            .collect::<Vec<_>>();
        creditors.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        creditors
    }
}
