//! Core of a bet-tracking dashboard: wagers and surebet pairs parsed from
//! OCR-extracted slip fields, held in an owned in-memory [`Ledger`] that
//! serves filtered views and on-demand aggregate statistics.
//!
//! The only asynchronous boundary is the [`intake::IntakeAdapter`] — the
//! component that turns an uploaded slip image into raw string fields. A
//! simulated OCR client ships in [`intake::MockOcrClient`]; everything
//! downstream of the adapter is synchronous.

pub mod config;
pub mod error;
pub mod intake;
pub mod ledger;
pub mod types;

pub use error::{LedgerError, Result};
pub use intake::{
    ExtractedLeg, ExtractedPair, ExtractedSlip, ExtractedWager, ImagePayload, IntakeAdapter,
    IntakeOutcome, IntakeService, MockOcrClient,
};
pub use ledger::{Ledger, LedgerStats, PairPatch, PairStats, StatusFilter, WagerPatch, WagerStats};
pub use types::{BettingHouse, LedgerEntry, MatchInfo, PairStatus, Wager, WagerPair, WagerStatus};
