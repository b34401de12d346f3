pub mod filter;
pub mod stats;
pub mod store;

pub use filter::StatusFilter;
pub use stats::{LedgerStats, PairStats, WagerStats};
pub use store::{Ledger, PairPatch, WagerPatch};
