use serde::Serialize;

use crate::types::{PairStatus, Wager, WagerPair, WagerStatus};

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// Aggregates over standalone wagers. Every field is recomputed from the
/// full collection on each call; no cached or incremental state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WagerStats {
    pub total: usize,
    pub pending: usize,
    pub won: usize,
    pub lost: usize,
    pub returned: usize,
    /// Σ amount over all wagers.
    pub total_invested: f64,
    /// Σ potential_profit over won wagers.
    pub total_won: f64,
    /// Σ amount over lost wagers.
    pub total_lost: f64,
    /// Σ amount over returned wagers.
    pub total_returned: f64,
    /// total_won − total_lost.
    pub net_profit: f64,
    /// won / (won + lost) × 100; 0 when no wager has settled either way.
    pub win_rate: f64,
}

/// Aggregates over surebet pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PairStats {
    pub total: usize,
    pub pending: usize,
    pub resolved: usize,
    /// Σ total_amount over all pairs.
    pub total_invested: f64,
    /// Σ expected_profit over all pairs.
    pub total_expected_profit: f64,
    /// Σ actual_profit over resolved pairs only.
    pub total_actual_profit: f64,
    /// Arithmetic mean of roi; 0 for an empty collection.
    pub average_roi: f64,
    /// Arithmetic mean of profit_percentage; 0 for an empty collection.
    pub average_profit_percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LedgerStats {
    pub wagers: WagerStats,
    pub pairs: PairStats,
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

pub fn compute_wager_stats<'a>(wagers: impl Iterator<Item = &'a Wager>) -> WagerStats {
    let mut stats = WagerStats::default();
    for w in wagers {
        stats.total += 1;
        stats.total_invested += w.amount;
        match w.status {
            WagerStatus::Pending => stats.pending += 1,
            WagerStatus::Won => {
                stats.won += 1;
                stats.total_won += w.potential_profit;
            }
            WagerStatus::Lost => {
                stats.lost += 1;
                stats.total_lost += w.amount;
            }
            WagerStatus::Returned => {
                stats.returned += 1;
                stats.total_returned += w.amount;
            }
        }
    }
    stats.net_profit = stats.total_won - stats.total_lost;

    let settled = stats.won + stats.lost;
    stats.win_rate = if settled > 0 {
        stats.won as f64 / settled as f64 * 100.0
    } else {
        0.0
    };
    stats
}

pub fn compute_pair_stats<'a>(pairs: impl Iterator<Item = &'a WagerPair>) -> PairStats {
    let mut stats = PairStats::default();
    let mut roi_sum = 0.0;
    let mut pct_sum = 0.0;
    for p in pairs {
        stats.total += 1;
        stats.total_invested += p.total_amount;
        stats.total_expected_profit += p.expected_profit;
        roi_sum += p.roi;
        pct_sum += p.profit_percentage;
        match p.status {
            PairStatus::Pending => stats.pending += 1,
            PairStatus::Resolved => {
                stats.resolved += 1;
                stats.total_actual_profit += p.actual_profit;
            }
        }
    }
    if stats.total > 0 {
        stats.average_roi = roi_sum / stats.total as f64;
        stats.average_profit_percentage = pct_sum / stats.total as f64;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BettingHouse;
    use chrono::Utc;
    use uuid::Uuid;

    fn wager(status: WagerStatus, amount: f64, potential_profit: f64) -> Wager {
        Wager {
            id: Uuid::new_v4(),
            house: BettingHouse::from_name("Bet365", None),
            bet_type: "1x2".to_string(),
            odds: 2.25,
            amount,
            potential_profit,
            actual_profit: 0.0,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn win_rate_is_zero_without_settled_wagers() {
        let wagers = vec![
            wager(WagerStatus::Pending, 100.0, 225.0),
            wager(WagerStatus::Returned, 50.0, 90.0),
        ];
        let stats = compute_wager_stats(wagers.iter());
        assert_eq!(stats.win_rate, 0.0);
    }

    #[test]
    fn empty_collection_yields_zeroed_stats() {
        let stats = compute_wager_stats(std::iter::empty());
        assert_eq!(stats, WagerStats::default());
    }

    #[test]
    fn totals_split_by_status() {
        let wagers = vec![
            wager(WagerStatus::Won, 100.0, 225.0),
            wager(WagerStatus::Lost, 80.0, 160.0),
            wager(WagerStatus::Returned, 60.0, 90.0),
            wager(WagerStatus::Pending, 40.0, 70.0),
        ];
        let stats = compute_wager_stats(wagers.iter());

        assert_eq!((stats.won, stats.lost, stats.returned, stats.pending), (1, 1, 1, 1));
        assert!((stats.total_invested - 280.0).abs() < 1e-6);
        assert!((stats.total_won - 225.0).abs() < 1e-6);
        assert!((stats.total_lost - 80.0).abs() < 1e-6);
        assert!((stats.total_returned - 60.0).abs() < 1e-6);
        assert!((stats.net_profit - 145.0).abs() < 1e-6);
        assert!((stats.win_rate - 50.0).abs() < 1e-6);
    }

    fn pair(status: PairStatus, actual_profit: f64, roi: f64, pct: f64) -> WagerPair {
        let legs = [wager(WagerStatus::Pending, 300.0, 11.94), wager(WagerStatus::Pending, 231.06, 11.93)];
        WagerPair {
            id: Uuid::new_v4(),
            match_info: crate::types::MatchInfo {
                id: Uuid::new_v4(),
                teams: "A - B".to_string(),
                sport: "Handebol".to_string(),
                league: "LNH".to_string(),
                event_date: Utc::now(),
                platform: "Surebet".to_string(),
            },
            total_amount: 531.06,
            expected_profit: 11.948_85,
            actual_profit,
            profit_percentage: pct,
            roi,
            status,
            resolved_at: (status == PairStatus::Resolved).then(Utc::now),
            created_at: Utc::now(),
            bets: legs,
        }
    }

    #[test]
    fn pair_averages_are_zero_when_empty() {
        let stats = compute_pair_stats(std::iter::empty());
        assert_eq!(stats.average_roi, 0.0);
        assert_eq!(stats.average_profit_percentage, 0.0);
    }

    #[test]
    fn actual_profit_counts_resolved_pairs_only() {
        let pairs = vec![
            pair(PairStatus::Resolved, -219.12, 400.0, 2.0),
            pair(PairStatus::Pending, 0.0, 428.38, 2.5),
        ];
        let stats = compute_pair_stats(pairs.iter());

        assert_eq!((stats.pending, stats.resolved), (1, 1));
        assert!((stats.total_actual_profit + 219.12).abs() < 1e-6);
        assert!((stats.total_invested - 1062.12).abs() < 1e-6);
        assert!((stats.average_roi - 414.19).abs() < 1e-6);
        assert!((stats.average_profit_percentage - 2.25).abs() < 1e-6);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let wagers = vec![
            wager(WagerStatus::Won, 100.0, 225.0),
            wager(WagerStatus::Pending, 40.0, 70.0),
        ];
        let first = compute_wager_stats(wagers.iter());
        let second = compute_wager_stats(wagers.iter());
        assert_eq!(first, second);
    }
}
