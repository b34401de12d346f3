use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::error::{LedgerError, Result};
use crate::intake::{ExtractedPair, ExtractedSlip, ExtractedWager};
use crate::ledger::filter::{self, StatusFilter};
use crate::ledger::stats::{compute_pair_stats, compute_wager_stats, LedgerStats};
use crate::types::{BettingHouse, LedgerEntry, PairStatus, Wager, WagerPair, WagerStatus};

// ---------------------------------------------------------------------------
// Patches — the editable field sets of the review dialogs
// ---------------------------------------------------------------------------

/// Partial update for a single wager — standalone or one leg of a pair.
/// `None` leaves the field alone.
#[derive(Debug, Clone, Default)]
pub struct WagerPatch {
    /// Replacing the house name re-derives the house id.
    pub house_name: Option<String>,
    pub country: Option<String>,
    pub bet_type: Option<String>,
    pub odds: Option<f64>,
    pub amount: Option<f64>,
    pub potential_profit: Option<f64>,
}

/// Partial update for a pair. After any patch the save-time derivations run
/// again: `total_amount` from the leg amounts, `expected_profit` from the
/// margin percentage.
#[derive(Debug, Clone, Default)]
pub struct PairPatch {
    pub teams: Option<String>,
    pub sport: Option<String>,
    pub league: Option<String>,
    pub platform: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub profit_percentage: Option<f64>,
    pub roi: Option<f64>,
    pub bet1: Option<WagerPatch>,
    pub bet2: Option<WagerPatch>,
}

fn apply_wager_patch(wager: &mut Wager, patch: &WagerPatch) {
    if let Some(name) = &patch.house_name {
        let country = wager.house.country.clone();
        wager.house = BettingHouse::from_name(name, country.as_deref());
    }
    if let Some(country) = &patch.country {
        wager.house.country = Some(country.clone());
    }
    if let Some(bet_type) = &patch.bet_type {
        wager.bet_type = bet_type.clone();
    }
    if let Some(odds) = patch.odds {
        wager.odds = odds;
    }
    if let Some(amount) = patch.amount {
        wager.amount = amount;
    }
    if let Some(profit) = patch.potential_profit {
        wager.potential_profit = profit;
    }
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

/// The owning collection of wagers and surebet pairs. One instance per
/// session, explicitly constructed and passed to whatever consumes it —
/// mutations take `&mut self`, reads are pure.
///
/// Entries keep insertion order; reads iterate newest first.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    // -- intake -------------------------------------------------------------

    /// Validate and store a standalone wager from raw extracted fields.
    /// Returns the stored record.
    pub fn add_wager(&mut self, fields: &ExtractedWager) -> Wager {
        let wager = Wager::from_extracted(fields);
        info!(
            wager_id = %wager.id,
            house = %wager.house.name,
            bet_type = %wager.bet_type,
            amount = wager.amount,
            "wager added"
        );
        self.entries.push(LedgerEntry::Standalone(wager.clone()));
        wager
    }

    /// Validate and store a surebet pair from raw extracted fields.
    pub fn add_pair(&mut self, fields: &ExtractedPair) -> WagerPair {
        let pair = WagerPair::from_extracted(fields);
        info!(
            pair_id = %pair.id,
            teams = %pair.match_info.teams,
            total_amount = pair.total_amount,
            expected_profit = pair.expected_profit,
            "pair added"
        );
        self.entries.push(LedgerEntry::Paired(pair.clone()));
        pair
    }

    /// Store whichever record shape an extraction produced.
    pub fn add_slip(&mut self, slip: &ExtractedSlip) -> LedgerEntry {
        match slip {
            ExtractedSlip::Single(fields) => LedgerEntry::Standalone(self.add_wager(fields)),
            ExtractedSlip::Pair(fields) => LedgerEntry::Paired(self.add_pair(fields)),
        }
    }

    // -- mutation -----------------------------------------------------------

    /// Apply a partial edit to a standalone wager.
    pub fn update_wager(&mut self, id: Uuid, patch: &WagerPatch) -> Result<Wager> {
        let wager = self.find_wager_mut(id)?;
        apply_wager_patch(wager, patch);
        info!(wager_id = %id, "wager updated");
        Ok(wager.clone())
    }

    /// Apply a partial edit to a pair and re-run the save-time derivations.
    pub fn update_pair(&mut self, id: Uuid, patch: &PairPatch) -> Result<WagerPair> {
        let pair = self.find_pair_mut(id)?;
        if let Some(teams) = &patch.teams {
            pair.match_info.teams = teams.clone();
        }
        if let Some(sport) = &patch.sport {
            pair.match_info.sport = sport.clone();
        }
        if let Some(league) = &patch.league {
            pair.match_info.league = league.clone();
        }
        if let Some(platform) = &patch.platform {
            pair.match_info.platform = platform.clone();
        }
        if let Some(event_date) = patch.event_date {
            pair.match_info.event_date = event_date;
        }
        if let Some(pct) = patch.profit_percentage {
            pair.profit_percentage = pct;
        }
        if let Some(roi) = patch.roi {
            pair.roi = roi;
        }
        if let Some(leg_patch) = &patch.bet1 {
            apply_wager_patch(&mut pair.bets[0], leg_patch);
        }
        if let Some(leg_patch) = &patch.bet2 {
            apply_wager_patch(&mut pair.bets[1], leg_patch);
        }
        pair.recompute_derived();
        info!(pair_id = %id, total_amount = pair.total_amount, "pair updated");
        Ok(pair.clone())
    }

    /// Replace the status of a standalone wager. No other field changes;
    /// reverting to `Pending` from any state is allowed.
    pub fn set_status(&mut self, id: Uuid, status: WagerStatus) -> Result<Wager> {
        let wager = self.find_wager_mut(id)?;
        wager.status = status;
        info!(wager_id = %id, status = %status, "wager status updated");
        Ok(wager.clone())
    }

    /// Settle a surebet: `winning_index` names the winning leg.
    ///
    /// The winning leg goes `Won` with `actual_profit = potential_profit`,
    /// the other goes `Lost` with `actual_profit = −amount`, and the pair
    /// realizes `winner.potential_profit − loser.amount`. One-shot — a
    /// resolved pair rejects further calls.
    pub fn resolve(&mut self, pair_id: Uuid, winning_index: usize) -> Result<WagerPair> {
        if winning_index > 1 {
            return Err(LedgerError::InvalidWinningIndex(winning_index));
        }
        let pair = self.find_pair_mut(pair_id)?;
        if pair.status == PairStatus::Resolved {
            return Err(LedgerError::AlreadyResolved(pair_id));
        }

        let losing_index = 1 - winning_index;
        pair.bets[winning_index].status = WagerStatus::Won;
        pair.bets[winning_index].actual_profit = pair.bets[winning_index].potential_profit;
        pair.bets[losing_index].status = WagerStatus::Lost;
        pair.bets[losing_index].actual_profit = -pair.bets[losing_index].amount;

        pair.actual_profit =
            pair.bets[winning_index].potential_profit - pair.bets[losing_index].amount;
        pair.status = PairStatus::Resolved;
        pair.resolved_at = Some(Utc::now());

        info!(
            pair_id = %pair_id,
            winning_index,
            actual_profit = pair.actual_profit,
            "pair resolved"
        );
        Ok(pair.clone())
    }

    /// Remove a record from the collection, returning it.
    pub fn remove(&mut self, id: Uuid) -> Result<LedgerEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id() == id)
            .ok_or(LedgerError::NotFound(id))?;
        let entry = self.entries.remove(index);
        info!(entry_id = %id, "entry removed");
        Ok(entry)
    }

    // -- reads --------------------------------------------------------------

    pub fn get(&self, id: Uuid) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter().rev()
    }

    /// The filtered view the dashboard renders: search term and status
    /// filter applied, newest first. Pure read.
    pub fn list_filtered(&self, search_term: &str, status: StatusFilter) -> Vec<&LedgerEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| filter::matches(e, search_term, status))
            .collect()
    }

    /// Aggregate statistics over the full collection, recomputed on every
    /// call. Standalone wagers and pairs aggregate separately; a pair's legs
    /// never count toward the standalone family.
    pub fn aggregate(&self) -> LedgerStats {
        LedgerStats {
            wagers: compute_wager_stats(self.entries.iter().filter_map(LedgerEntry::as_wager)),
            pairs: compute_pair_stats(self.entries.iter().filter_map(LedgerEntry::as_pair)),
        }
    }

    // -- lookup helpers -----------------------------------------------------

    fn find_wager_mut(&mut self, id: Uuid) -> Result<&mut Wager> {
        match self.entries.iter_mut().find(|e| e.id() == id) {
            Some(LedgerEntry::Standalone(w)) => Ok(w),
            _ => Err(LedgerError::NotFound(id)),
        }
    }

    fn find_pair_mut(&mut self, id: Uuid) -> Result<&mut WagerPair> {
        match self.entries.iter_mut().find(|e| e.id() == id) {
            Some(LedgerEntry::Paired(p)) => Ok(p),
            _ => Err(LedgerError::NotFound(id)),
        }
    }
}
