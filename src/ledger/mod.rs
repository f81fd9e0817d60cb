pub mod entry;
pub mod player;
pub mod session;
pub mod settlement;
pub mod solver;
pub mod tally;

pub use entry::Entry;
pub use player::Player;
pub use session::Session;
pub use settlement::Settlement;
pub use solver::Imbalance;
pub use solver::Solver;
pub use tally::Ledger;
