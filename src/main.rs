//! Home-game ledger CLI.
//!
//! All mutation goes through `Club`, which re-tallies standings and
//! persists the snapshot on every edit. Amounts are validated here, at the
//! door; the solver only ever sees finite non-negative numbers.

use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;
use clap::Parser;
use clap::Subcommand;
use dialoguer::Confirm;
use dialoguer::Input;
use homegame::Currency;
use homegame::chart::Color;
use homegame::chart::Series;
use homegame::club::Club;
use homegame::ledger::Entry;
use homegame::ledger::Imbalance;
use homegame::save::Document;
use homegame::save::JsonStore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Ledger and settlement tracking for home poker games")]
struct Args {
    /// Club snapshot file.
    #[arg(long, default_value = "club.json")]
    store: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a player to the roster.
    Register { name: String },
    /// Retire a player. Their history stays on the books.
    Retire { name: String },
    /// Record a session interactively.
    Record {
        /// Session date (RFC 3339 or YYYY-MM-DD); defaults to now.
        #[arg(long)]
        date: Option<String>,
    },
    /// Re-enter a past session's figures.
    Amend {
        /// 1-based position in chronological history.
        index: usize,
    },
    /// Remove a session from history.
    Delete {
        /// 1-based position in chronological history.
        index: usize,
    },
    /// Lifetime standings.
    Standings,
    /// Session history with settlements.
    History,
    /// Cumulative score per player per session.
    Chart,
    /// Write the whole club to a JSON document.
    Export { path: PathBuf },
    /// Replace the whole club from a JSON document.
    Import { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    homegame::log();
    let args = Args::parse();
    let mut club = Club::open(JsonStore::from(args.store))?;
    match args.command {
        Command::Register { name } => {
            club.register(&name)?;
        }
        Command::Retire { name } => {
            let id = club
                .player(&name)
                .ok_or_else(|| anyhow::anyhow!("no player named {}", name))?
                .id();
            club.retire(id)?;
        }
        Command::Record { date } => {
            let date = date.map(parse_date).transpose()?.unwrap_or_else(Utc::now);
            record(&mut club, date)?;
        }
        Command::Amend { index } => {
            let id = session_at(&club, index)?;
            let entries = prompt(&club)?;
            club.amend(id, entries)?;
        }
        Command::Delete { index } => {
            let id = session_at(&club, index)?;
            club.delete(id)?;
        }
        Command::Standings => standings(&club),
        Command::History => history(&club),
        Command::Chart => chart(&club),
        Command::Export { path } => {
            let json = serde_json::to_string_pretty(&club.export())?;
            std::fs::write(&path, json)?;
            log::info!("exported to {}", path.display());
        }
        Command::Import { path } => {
            let json = std::fs::read_to_string(&path)?;
            let document: Document = serde_json::from_str(&json)?;
            club.import(document)?;
        }
    }
    Ok(())
}

/// Prompt, solve, and re-prompt until the money balances.
fn record(club: &mut Club<JsonStore>, date: DateTime<Utc>) -> anyhow::Result<()> {
    loop {
        let entries = prompt(club)?;
        match club.record(date, entries) {
            Ok(id) => {
                let ledger = club.ledger();
                for session in club.sessions().iter().filter(|s| s.id() == id) {
                    for settlement in session.settlements() {
                        println!(
                            "{} pays {} {:.2}",
                            ledger.name(settlement.from_id()),
                            ledger.name(settlement.to_id()),
                            settlement.amount(),
                        );
                    }
                }
                return Ok(());
            }
            Err(e) => match e.downcast_ref::<Imbalance>() {
                Some(imbalance) => {
                    log::warn!("{}; check the figures and re-enter", imbalance);
                    continue;
                }
                None => return Err(e),
            },
        }
    }
}

/// Walk the active roster, asking who played and for how much.
fn prompt(club: &Club<JsonStore>) -> anyhow::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for player in club.roster() {
        let played = Confirm::new()
            .with_prompt(format!("Did {} play?", player.name()))
            .default(true)
            .interact()?;
        if played {
            let buy_in = amount(format!("{} buy-in", player.name()))?;
            let cash_out = amount(format!("{} cash-out", player.name()))?;
            entries.push(Entry::from((player.id(), buy_in, cash_out)));
        }
    }
    Ok(entries)
}

fn amount(label: String) -> anyhow::Result<Currency> {
    Ok(Input::<String>::new()
        .with_prompt(label)
        .validate_with(|i: &String| -> Result<(), &str> {
            match i.parse::<Currency>() {
                Ok(v) if v.is_finite() && v >= 0.0 => Ok(()),
                Ok(_) => Err("Enter a non-negative amount"),
                Err(_) => Err("Enter a NUMBER"),
            }
        })
        .interact()?
        .parse::<Currency>()?)
}

fn standings(club: &Club<JsonStore>) {
    let mut players = club.players().to_vec();
    players.sort_by(|a, b| {
        b.winnings()
            .partial_cmp(&a.winnings())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for player in players {
        println!("{}", player);
    }
}

fn history(club: &Club<JsonStore>) {
    let ledger = club.ledger();
    for (i, session) in ledger.chronological().into_iter().enumerate() {
        println!("{:>3}  {}", i + 1, session);
        for entry in session.entries() {
            println!("      {:<16} {}", ledger.name(entry.player()), entry);
        }
        for settlement in session.settlements() {
            println!(
                "      {} pays {} {:.2}",
                ledger.name(settlement.from_id()),
                ledger.name(settlement.to_id()),
                settlement.amount(),
            );
        }
    }
}

fn chart(club: &Club<JsonStore>) {
    for player in club.players() {
        println!("{:<16} {}", player.name(), Color::from(&player.id()));
    }
    let series = Series::from(club.ledger());
    for point in series.points() {
        let row = club
            .players()
            .iter()
            .map(|p| format!("{:>10.2}", point.score(p.id())))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{:<8} {}", point.label(), row);
    }
}

fn session_at(club: &Club<JsonStore>, index: usize) -> anyhow::Result<homegame::ID<homegame::ledger::Session>> {
    let ledger = club.ledger();
    let sessions = ledger.chronological();
    sessions
        .get(index.wrapping_sub(1))
        .map(|s| s.id())
        .ok_or_else(|| anyhow::anyhow!("no session at {}", index))
}

fn parse_date(raw: String) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(date.with_timezone(&Utc));
    }
    let date = chrono::NaiveDate::parse_from_str(&raw, "%Y-%m-%d")?;
    Utc.from_local_datetime(&date.and_hms_opt(20, 0, 0).expect("valid time"))
        .single()
        .ok_or_else(|| anyhow::anyhow!("ambiguous date {}", raw))
}
