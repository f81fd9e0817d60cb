use crate::Currency;
use crate::ID;
use crate::ledger::Ledger;
use crate::ledger::Player;
use std::collections::HashMap;

/// One snapshot of cumulative standings, suitable for direct plotting.
///
/// Full snapshot rather than a delta: every rostered player has a score at
/// every point, so a chart can read y-values straight off.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Point {
    label: String,
    scores: HashMap<ID<Player>, Currency>,
}

impl Point {
    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn scores(&self) -> &HashMap<ID<Player>, Currency> {
        &self.scores
    }
    pub fn score(&self, id: ID<Player>) -> Currency {
        self.scores.get(&id).copied().unwrap_or(0.0)
    }
}

/// Cumulative net-worth history, one point per session plus a zero start.
///
/// Built by the same arithmetic as [`Ledger::tally`]: each point is the
/// previous point plus that session's per-player nets, so the final point
/// always agrees with the tally. Players absent from a session carry their
/// prior score forward. Points are labeled "Start", "G1", "G2", ...
pub struct Series {
    points: Vec<Point>,
}

impl<'a> From<Ledger<'a>> for Series {
    fn from(ledger: Ledger<'a>) -> Self {
        let zeros = ledger
            .players()
            .iter()
            .map(|p| (p.id(), 0.0))
            .collect::<HashMap<_, _>>();
        let mut points = vec![Point {
            label: "Start".to_string(),
            scores: zeros,
        }];
        for (i, session) in ledger.chronological().into_iter().enumerate() {
            let mut scores = points[i].scores.clone();
            for entry in session.entries() {
                if let Some(score) = scores.get_mut(&entry.player()) {
                    *score += entry.net();
                }
            }
            points.push(Point {
                label: format!("G{}", i + 1),
                scores,
            });
        }
        Self { points }
    }
}

impl Series {
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn last(&self) -> &Point {
        self.points.last().expect("series always has a start point")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Entry;
    use crate::ledger::Session;
    use chrono::TimeZone;
    use chrono::Utc;

    fn session(day: u32, entries: Vec<Entry>) -> Session {
        let date = Utc.with_ymd_and_hms(2025, 6, day, 20, 0, 0).unwrap();
        Session::from((date, entries, vec![]))
    }

    #[test]
    fn starts_at_zero_with_one_point_per_session() {
        let players = vec![Player::from("alice"), Player::from("bob")];
        let (a, b) = (players[0].id(), players[1].id());
        let sessions = vec![
            session(1, vec![
                Entry::from((a, 50.0, 70.0)),
                Entry::from((b, 50.0, 30.0)),
            ]),
            session(2, vec![
                Entry::from((a, 50.0, 40.0)),
                Entry::from((b, 50.0, 60.0)),
            ]),
        ];
        let series = Series::from(Ledger::from((&players[..], &sessions[..])));
        let points = series.points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].label(), "Start");
        assert_eq!(points[1].label(), "G1");
        assert_eq!(points[2].label(), "G2");
        assert_eq!(points[0].score(a), 0.0);
        assert_eq!(points[1].score(a), 20.0);
        assert_eq!(points[2].score(a), 10.0);
        assert_eq!(points[2].score(b), -10.0);
    }

    #[test]
    fn absent_players_carry_their_score() {
        let players = vec![Player::from("alice"), Player::from("bob")];
        let (a, b) = (players[0].id(), players[1].id());
        let sessions = vec![
            session(1, vec![
                Entry::from((a, 50.0, 75.0)),
                Entry::from((b, 50.0, 25.0)),
            ]),
            session(2, vec![Entry::from((b, 10.0, 10.0))]),
        ];
        let series = Series::from(Ledger::from((&players[..], &sessions[..])));
        assert_eq!(series.points()[2].score(a), 25.0);
    }

    #[test]
    fn sessions_are_walked_in_date_order() {
        let players = vec![Player::from("alice")];
        let a = players[0].id();
        let sessions = vec![
            session(9, vec![Entry::from((a, 0.0, 5.0))]),
            session(1, vec![Entry::from((a, 0.0, 1.0))]),
        ];
        let series = Series::from(Ledger::from((&players[..], &sessions[..])));
        assert_eq!(series.points()[1].score(a), 1.0);
        assert_eq!(series.points()[2].score(a), 6.0);
    }

    #[test]
    fn final_point_agrees_with_tally() {
        let players = vec![
            Player::from("alice"),
            Player::from("bob"),
            Player::from("carol"),
        ];
        let (a, b, c) = (players[0].id(), players[1].id(), players[2].id());
        let sessions = vec![
            session(1, vec![
                Entry::from((a, 50.0, 0.0)),
                Entry::from((b, 50.0, 150.0)),
                Entry::from((c, 50.0, 0.0)),
            ]),
            session(3, vec![
                Entry::from((a, 25.0, 60.0)),
                Entry::from((b, 60.0, 25.0)),
            ]),
        ];
        let ledger = Ledger::from((&players[..], &sessions[..]));
        let tallied = Ledger::from((&players[..], &sessions[..])).tally();
        let series = Series::from(ledger);
        for player in tallied {
            assert!((series.last().score(player.id()) - player.winnings()).abs() < 1e-9);
        }
    }
}
