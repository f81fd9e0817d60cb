use crate::Currency;
use crate::ID;
use crate::ledger::Player;
use crate::ledger::Session;
use std::collections::HashMap;

/// Immutable snapshot of the whole club, ready to be re-tallied.
///
/// Rebuilds every player's standing from scratch on each call rather than
/// patching stats in place. That makes edits and deletions trivially safe:
/// whatever happened to the history, a tally over it is the ground truth.
/// Sessions referencing unknown player ids (retired-and-purged imports,
/// foreign documents) are skipped without complaint; the history must
/// never break the tally.
pub struct Ledger<'a> {
    players: &'a [Player],
    sessions: &'a [Session],
}

impl<'a> From<(&'a [Player], &'a [Session])> for Ledger<'a> {
    fn from((players, sessions): (&'a [Player], &'a [Session])) -> Self {
        Self { players, sessions }
    }
}

impl Ledger<'_> {
    /// Rebuild all player stats from the full session history.
    ///
    /// Idempotent and side-effect-free: the players' incoming stats are
    /// discarded, so two tallies over the same history are identical and
    /// no incremental drift is possible. Returns the roster in input
    /// order, identities untouched, stats replaced.
    pub fn tally(&self) -> Vec<Player> {
        let mut standings = self
            .players
            .iter()
            .map(|p| (p.id(), (0.0 as Currency, 0 as u32)))
            .collect::<HashMap<_, _>>();
        for session in self.chronological() {
            for entry in session.entries() {
                if let Some((winnings, games)) = standings.get_mut(&entry.player()) {
                    *winnings += entry.net();
                    *games += 1;
                }
            }
        }
        self.players
            .iter()
            .map(|p| match standings.get(&p.id()) {
                Some((winnings, games)) => p.with(*winnings, *games),
                None => p.with(0.0, 0),
            })
            .collect()
    }

    /// Sessions in date order. The sort is stable, so sessions sharing a
    /// timestamp keep their input order.
    pub fn chronological(&self) -> Vec<&Session> {
        let mut sessions = self.sessions.iter().collect::<Vec<_>>();
        sessions.sort_by_key(|s| s.date());
        sessions
    }

    pub fn players(&self) -> &[Player] {
        self.players
    }

    /// Resolve an id against the roster. Orphaned ids render as unknown
    /// at display time; they are never an error.
    pub fn name(&self, id: ID<Player>) -> &str {
        self.players
            .iter()
            .find(|p| p.id() == id)
            .map(|p| p.name())
            .unwrap_or("(unknown)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Entry;
    use chrono::TimeZone;
    use chrono::Utc;

    fn date(day: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, day, 20, 0, 0).unwrap()
    }

    fn session(day: u32, entries: Vec<Entry>) -> Session {
        Session::from((date(day), entries, vec![]))
    }

    #[test]
    fn tally_accumulates_across_sessions() {
        let players = vec![Player::from("alice"), Player::from("bob")];
        let (a, b) = (players[0].id(), players[1].id());
        let sessions = vec![
            session(1, vec![
                Entry::from((a, 50.0, 80.0)),
                Entry::from((b, 50.0, 20.0)),
            ]),
            session(2, vec![
                Entry::from((a, 40.0, 10.0)),
                Entry::from((b, 40.0, 70.0)),
            ]),
        ];
        let tallied = Ledger::from((&players[..], &sessions[..])).tally();
        assert_eq!(tallied[0].winnings(), 0.0);
        assert_eq!(tallied[0].games(), 2);
        assert_eq!(tallied[1].winnings(), 0.0);
        assert_eq!(tallied[1].games(), 2);
    }

    #[test]
    fn tally_discards_incoming_stats() {
        let players = vec![Player::from("alice").with(9999.0, 42)];
        let a = players[0].id();
        let sessions = vec![session(1, vec![Entry::from((a, 10.0, 25.0))])];
        let tallied = Ledger::from((&players[..], &sessions[..])).tally();
        assert_eq!(tallied[0].winnings(), 15.0);
        assert_eq!(tallied[0].games(), 1);
    }

    #[test]
    fn tally_is_idempotent() {
        let players = vec![Player::from("alice"), Player::from("bob")];
        let (a, b) = (players[0].id(), players[1].id());
        let sessions = vec![session(1, vec![
            Entry::from((a, 50.0, 120.0)),
            Entry::from((b, 100.0, 30.0)),
        ])];
        let once = Ledger::from((&players[..], &sessions[..])).tally();
        let twice = Ledger::from((&once[..], &sessions[..])).tally();
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_player_ids_are_skipped() {
        let players = vec![Player::from("alice")];
        let a = players[0].id();
        let stranger = crate::ID::default();
        let sessions = vec![session(1, vec![
            Entry::from((a, 50.0, 70.0)),
            Entry::from((stranger, 50.0, 30.0)),
        ])];
        let tallied = Ledger::from((&players[..], &sessions[..])).tally();
        assert_eq!(tallied.len(), 1);
        assert_eq!(tallied[0].winnings(), 20.0);
        assert_eq!(tallied[0].games(), 1);
    }

    #[test]
    fn deleting_a_session_subtracts_exactly_its_contribution() {
        let players = vec![Player::from("alice"), Player::from("bob")];
        let (a, b) = (players[0].id(), players[1].id());
        let mut sessions = vec![
            session(1, vec![
                Entry::from((a, 50.0, 90.0)),
                Entry::from((b, 50.0, 10.0)),
            ]),
            session(2, vec![
                Entry::from((a, 20.0, 5.0)),
                Entry::from((b, 20.0, 35.0)),
            ]),
        ];
        let before = Ledger::from((&players[..], &sessions[..])).tally();
        let dropped = sessions.remove(1);
        let after = Ledger::from((&players[..], &sessions[..])).tally();
        for (b4, af) in before.iter().zip(after.iter()) {
            let net = dropped
                .entries()
                .iter()
                .filter(|e| e.player() == b4.id())
                .map(|e| e.net())
                .sum::<Currency>();
            assert_eq!(b4.games() - 1, af.games());
            assert!((b4.winnings() - net - af.winnings()).abs() < 1e-9);
        }
    }

    #[test]
    fn chronological_is_stable_on_ties() {
        let players = vec![Player::from("alice")];
        let a = players[0].id();
        let sessions = vec![
            session(5, vec![Entry::from((a, 1.0, 0.0))]),
            session(5, vec![Entry::from((a, 2.0, 0.0))]),
            session(1, vec![Entry::from((a, 3.0, 0.0))]),
        ];
        let ledger = Ledger::from((&players[..], &sessions[..]));
        let ordered = ledger.chronological();
        assert_eq!(ordered[0].entries()[0].buy_in(), 3.0);
        assert_eq!(ordered[1].entries()[0].buy_in(), 1.0);
        assert_eq!(ordered[2].entries()[0].buy_in(), 2.0);
    }

    #[test]
    fn name_resolves_or_falls_back() {
        let players = vec![Player::from("alice")];
        let sessions: Vec<Session> = vec![];
        let ledger = Ledger::from((&players[..], &sessions[..]));
        assert_eq!(ledger.name(players[0].id()), "alice");
        assert_eq!(ledger.name(crate::ID::default()), "(unknown)");
    }
}
