use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::intake::fields::{house_slug, lenient_number, parse_event_date};
use crate::intake::{ExtractedLeg, ExtractedPair, ExtractedWager};

// ---------------------------------------------------------------------------
// Status enums
// ---------------------------------------------------------------------------

/// Outcome state of a single wager. Any state may transition to any other,
/// including back to `Pending` (explicit revert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WagerStatus {
    Pending,
    Won,
    Lost,
    Returned,
}

impl std::fmt::Display for WagerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WagerStatus::Pending => "pending",
            WagerStatus::Won => "won",
            WagerStatus::Lost => "lost",
            WagerStatus::Returned => "returned",
        };
        write!(f, "{s}")
    }
}

/// Lifecycle state of a surebet pair. `Pending → Resolved` is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairStatus {
    Pending,
    Resolved,
}

impl std::fmt::Display for PairStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PairStatus::Pending => "pending",
            PairStatus::Resolved => "resolved",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// BettingHouse
// ---------------------------------------------------------------------------

/// The counterparty a wager was placed with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BettingHouse {
    /// Slug derived from `name`. Not globally unique — collisions between
    /// houses with the same normalized name are acceptable.
    pub id: String,
    pub name: String,
    pub country: Option<String>,
    pub logo: Option<String>,
}

impl BettingHouse {
    pub fn from_name(name: &str, country: Option<&str>) -> Self {
        Self {
            id: house_slug(name),
            name: name.to_string(),
            country: country
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            logo: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Wager
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wager {
    pub id: Uuid,
    pub house: BettingHouse,
    /// Free-text category label, e.g. "H1(-5.5)" or "Over 2.5".
    pub bet_type: String,
    /// Decimal odds: stake × odds returned on a win.
    pub odds: f64,
    pub amount: f64,
    /// Expected profit on a win. Supplied by the slip, never derived from
    /// `odds × amount`.
    pub potential_profit: f64,
    /// Realized profit. 0 while the wager is pending.
    pub actual_profit: f64,
    pub status: WagerStatus,
    pub created_at: DateTime<Utc>,
}

impl Wager {
    /// Build a pending wager from raw extracted fields. Numeric fields parse
    /// leniently: malformed or non-finite input coerces to 0 so a bad OCR
    /// read never rejects the record.
    pub fn from_extracted(fields: &ExtractedWager) -> Self {
        Self {
            id: Uuid::new_v4(),
            house: BettingHouse::from_name(&fields.house, None),
            bet_type: fields.bet_type.clone(),
            odds: lenient_number(&fields.odds),
            amount: lenient_number(&fields.amount),
            potential_profit: lenient_number(&fields.potential_profit),
            actual_profit: 0.0,
            status: WagerStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Build one leg of a surebet pair from raw extracted fields.
    pub fn from_leg(leg: &ExtractedLeg) -> Self {
        Self {
            id: Uuid::new_v4(),
            house: BettingHouse::from_name(&leg.house, Some(&leg.country)),
            bet_type: leg.bet_type.clone(),
            odds: lenient_number(&leg.odds),
            amount: lenient_number(&leg.amount),
            potential_profit: lenient_number(&leg.profit),
            actual_profit: 0.0,
            status: WagerStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// WagerPair (surebet)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchInfo {
    pub id: Uuid,
    /// e.g. "PSG Andebol - USAM Nimes"
    pub teams: String,
    pub sport: String,
    pub league: String,
    pub event_date: DateTime<Utc>,
    /// Arbitrage platform the slip came from, e.g. "Surebet".
    pub platform: String,
}

/// Two wagers on mutually exclusive outcomes of one event. At most one leg
/// is `Won` at any time; `total_amount` always equals the sum of the leg
/// amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WagerPair {
    pub id: Uuid,
    pub match_info: MatchInfo,
    pub bets: [Wager; 2],
    /// Sum of the two leg amounts. Recomputed at construction and after
    /// every update — the supplied slip total is ignored.
    pub total_amount: f64,
    /// `total_amount × profit_percentage / 100`. Pair-level derivation,
    /// distinct from the per-leg pass-through `potential_profit`.
    pub expected_profit: f64,
    /// Realized profit. 0 until resolved.
    pub actual_profit: f64,
    /// Arbitrage margin percentage from the slip, e.g. 2.25.
    pub profit_percentage: f64,
    pub roi: f64,
    pub status: PairStatus,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl WagerPair {
    /// Build a pending pair from raw extracted fields. Leg amounts drive
    /// `total_amount`; the slip's own total is discarded.
    pub fn from_extracted(fields: &ExtractedPair) -> Self {
        let bets = [Wager::from_leg(&fields.bet1), Wager::from_leg(&fields.bet2)];
        let mut pair = Self {
            id: Uuid::new_v4(),
            match_info: MatchInfo {
                id: Uuid::new_v4(),
                teams: fields.teams.clone(),
                sport: fields.sport.clone(),
                league: fields.league.clone(),
                event_date: parse_event_date(&fields.event_date),
                platform: fields.platform.clone(),
            },
            bets,
            total_amount: 0.0,
            expected_profit: 0.0,
            actual_profit: 0.0,
            profit_percentage: lenient_number(&fields.profit_percentage),
            roi: lenient_number(&fields.roi),
            status: PairStatus::Pending,
            resolved_at: None,
            created_at: Utc::now(),
        };
        pair.recompute_derived();
        pair
    }

    /// Re-run the save-time derivations: `total_amount` from the leg amounts
    /// and `expected_profit` from the pair-level margin.
    pub fn recompute_derived(&mut self) {
        self.total_amount = self.bets[0].amount + self.bets[1].amount;
        self.expected_profit = self.total_amount * self.profit_percentage / 100.0;
    }
}

// ---------------------------------------------------------------------------
// LedgerEntry — one collection for both record shapes
// ---------------------------------------------------------------------------

/// A ledger record: a standalone wager or a surebet pair. The two shapes
/// share id lookup, filtering, and removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEntry {
    Standalone(Wager),
    Paired(WagerPair),
}

impl LedgerEntry {
    pub fn id(&self) -> Uuid {
        match self {
            LedgerEntry::Standalone(w) => w.id,
            LedgerEntry::Paired(p) => p.id,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            LedgerEntry::Standalone(w) => w.created_at,
            LedgerEntry::Paired(p) => p.created_at,
        }
    }

    pub fn as_wager(&self) -> Option<&Wager> {
        match self {
            LedgerEntry::Standalone(w) => Some(w),
            LedgerEntry::Paired(_) => None,
        }
    }

    pub fn as_pair(&self) -> Option<&WagerPair> {
        match self {
            LedgerEntry::Standalone(_) => None,
            LedgerEntry::Paired(p) => Some(p),
        }
    }
}
