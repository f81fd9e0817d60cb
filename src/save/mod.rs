pub mod document;
pub mod json;

pub use document::Document;
pub use json::JsonStore;

/// Durable storage for the club snapshot.
///
/// The core never sees this trait; only the host shell does. Implementors
/// must make `load` after `save` round-trip the document exactly, and must
/// fail `load` without side effects on malformed input so an aborted import
/// leaves prior state intact.
pub trait Store {
    /// Read the whole snapshot.
    fn load(&self) -> anyhow::Result<Document>;
    /// Replace the whole snapshot.
    fn save(&self, document: &Document) -> anyhow::Result<()>;
    /// Whether a snapshot exists yet.
    fn done(&self) -> bool;
}
