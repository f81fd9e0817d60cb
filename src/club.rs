use crate::ID;
use crate::ledger::Entry;
use crate::ledger::Ledger;
use crate::ledger::Player;
use crate::ledger::Session;
use crate::ledger::Settlement;
use crate::ledger::Solver;
use crate::save::Document;
use crate::save::Store;
use chrono::DateTime;
use chrono::Utc;

/// Host-side orchestrator. Single source of truth for the live snapshot.
///
/// Every path that touches session history funnels through [`Club::commit`],
/// which re-tallies all player stats from scratch and persists players and
/// sessions together. There is no way to persist a history edit without the
/// matching recompute, so readers never observe players and sessions that
/// disagree.
pub struct Club<S: Store> {
    players: Vec<Player>,
    sessions: Vec<Session>,
    store: S,
}

impl<S: Store> Club<S> {
    /// Load the snapshot, or start an empty club if none exists yet.
    pub fn open(store: S) -> anyhow::Result<Self> {
        let document = if store.done() {
            store.load()?
        } else {
            Document::default()
        };
        Ok(Self {
            players: document.players,
            sessions: document.sessions,
            store,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }
    /// Players eligible for new sessions.
    pub fn roster(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.active())
    }
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }
    pub fn ledger(&self) -> Ledger<'_> {
        Ledger::from((&self.players[..], &self.sessions[..]))
    }

    /// Add a member to the roster.
    pub fn register(&mut self, name: &str) -> anyhow::Result<ID<Player>> {
        if self.players.iter().any(|p| p.name() == name && p.active()) {
            return Err(anyhow::anyhow!("{} is already on the roster", name));
        }
        let player = Player::from(name);
        let id = player.id();
        self.players.push(player);
        self.commit()?;
        log::info!("registered {}", name);
        Ok(id)
    }

    /// Soft removal: drops the player from future eligibility but keeps
    /// every historical record referencing their id.
    pub fn retire(&mut self, id: ID<Player>) -> anyhow::Result<()> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| anyhow::anyhow!("no player {}", id))?;
        player.retire();
        let name = player.name().to_string();
        self.commit()?;
        log::info!("retired {}", name);
        Ok(())
    }

    /// Record a new session: solve the settlements, append to history,
    /// re-tally, persist. Fails on imbalanced money (recoverable: correct
    /// the figures and retry) without touching any state.
    pub fn record(
        &mut self,
        date: DateTime<Utc>,
        entries: Vec<Entry>,
    ) -> anyhow::Result<ID<Session>> {
        self.sanitize(&entries)?;
        let settlements = self.solve(&entries)?;
        let session = Session::from((date, entries, settlements));
        let id = session.id();
        self.sessions.push(session);
        self.commit()?;
        log::info!("recorded session {}", id);
        Ok(id)
    }

    /// Replace a past session's entries, re-solving its settlements.
    pub fn amend(&mut self, id: ID<Session>, entries: Vec<Entry>) -> anyhow::Result<()> {
        self.sanitize(&entries)?;
        let settlements = self.solve(&entries)?;
        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or_else(|| anyhow::anyhow!("no session {}", id))?;
        session.revise(entries, settlements);
        self.commit()?;
        log::info!("amended session {}", id);
        Ok(())
    }

    /// Remove a session from history.
    pub fn delete(&mut self, id: ID<Session>) -> anyhow::Result<()> {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id() != id);
        if self.sessions.len() == before {
            return Err(anyhow::anyhow!("no session {}", id));
        }
        self.commit()?;
        log::info!("deleted session {}", id);
        Ok(())
    }

    pub fn export(&self) -> Document {
        Document::from((self.players.clone(), self.sessions.clone()))
    }

    /// Replace the whole snapshot with an imported document. The document
    /// was already validated by deserialization; stats are re-tallied from
    /// the imported history rather than trusted. The live snapshot is only
    /// swapped in once the store accepts the new one, so a failed import
    /// mutates nothing anywhere.
    pub fn import(&mut self, document: Document) -> anyhow::Result<()> {
        let players =
            Ledger::from((&document.players[..], &document.sessions[..])).tally();
        let incoming = Document::from((players, document.sessions));
        self.store.save(&incoming)?;
        self.players = incoming.players;
        self.sessions = incoming.sessions;
        log::info!(
            "imported {} players, {} sessions",
            self.players.len(),
            self.sessions.len()
        );
        Ok(())
    }

    /// The mutate-then-rebuild pipeline stage: re-tally every player from
    /// the full history, then persist players and sessions as one unit.
    fn commit(&mut self) -> anyhow::Result<()> {
        self.players = self.ledger().tally();
        self.store.save(&self.export())
    }

    fn solve(&self, entries: &[Entry]) -> anyhow::Result<Vec<Settlement>> {
        Ok(Solver::from(entries.to_vec()).settle()?)
    }

    /// Input sanitization the core does not defend against: numeric
    /// validity, duplicate participants, and the two-player minimum.
    fn sanitize(&self, entries: &[Entry]) -> anyhow::Result<()> {
        if entries.len() < 2 {
            return Err(anyhow::anyhow!("a session needs at least 2 players"));
        }
        for entry in entries {
            if !entry.buy_in().is_finite() || entry.buy_in() < 0.0 {
                return Err(anyhow::anyhow!("invalid buy-in {}", entry.buy_in()));
            }
            if !entry.cash_out().is_finite() || entry.cash_out() < 0.0 {
                return Err(anyhow::anyhow!("invalid cash-out {}", entry.cash_out()));
            }
            if entries.iter().filter(|e| e.player() == entry.player()).count() > 1 {
                return Err(anyhow::anyhow!("duplicate player {}", entry.player()));
            }
        }
        Ok(())
    }
}
