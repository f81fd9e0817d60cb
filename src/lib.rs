//! Ledger, settlement, and standings tracking for home poker games.
//!
//! The interesting parts are pure: [`ledger::Solver`] turns one night's
//! buy-ins and cash-outs into a short list of who-pays-whom transfers, and
//! [`ledger::Ledger`] rebuilds every player's lifetime standing from the
//! full session history. Everything stateful (the JSON store, the CLI)
//! lives at the edges and only ever hands the core immutable snapshots.

pub mod chart;
pub mod club;
pub mod ledger;
pub mod save;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Money amounts in the club's single currency.
pub type Currency = f64;

/// Numeric tolerance for currency comparisons.
///
/// Buy-ins and cash-outs ride through floating point, so balance and
/// break-even checks compare against a cent rather than zero. This is an
/// equality epsilon, not an acceptable-shortfall policy; keep it small.
pub const EPSILON: Currency = 0.01;

/// Round to whole cents.
pub fn round(amount: Currency) -> Currency {
    (amount * 100.0).round() / 100.0
}

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for test fixtures.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
///
/// Serializes as the hyphenated uuid string, which is also the opaque id
/// form the export document promises to hosts.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
}

impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}
impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        uuid::Uuid::deserialize(deserializer).map(Self::from)
    }
}

impl<T> Arbitrary for ID<T> {
    fn random() -> Self {
        Self::from(uuid::Uuid::new_v4())
    }
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging. INFO to the terminal, no source locations.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_are_distinct() {
        let a: ID<()> = ID::random();
        let b: ID<()> = ID::random();
        assert_ne!(a, b);
    }

    #[test]
    fn ids_serialize_as_opaque_strings() {
        let id: ID<()> = ID::random();
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{}\"", id));
        let back: ID<()> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, back);
    }
}
