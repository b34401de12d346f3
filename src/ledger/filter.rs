use crate::types::{LedgerEntry, PairStatus, WagerStatus};

/// Status side of the dashboard filter: everything, or an exact status of
/// one record shape. A wager-status filter never matches pairs and vice
/// versa — each dashboard tab addresses its own shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Wager(WagerStatus),
    Pair(PairStatus),
}

/// Combined filter predicate: case-insensitive substring search AND exact
/// status match. Pure — callers decide what to do with the subset.
pub fn matches(entry: &LedgerEntry, search_term: &str, filter: StatusFilter) -> bool {
    matches_search(entry, search_term) && matches_status(entry, filter)
}

/// Empty term matches everything. Otherwise the term must appear (case
/// insensitively) in at least one searchable field: house name or bet type
/// for a standalone wager; teams, sport, league, or either leg's house name
/// for a pair.
pub fn matches_search(entry: &LedgerEntry, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    let hit = |field: &str| field.to_lowercase().contains(&needle);

    match entry {
        LedgerEntry::Standalone(w) => hit(&w.house.name) || hit(&w.bet_type),
        LedgerEntry::Paired(p) => {
            hit(&p.match_info.teams)
                || hit(&p.match_info.sport)
                || hit(&p.match_info.league)
                || p.bets.iter().any(|b| hit(&b.house.name))
        }
    }
}

pub fn matches_status(entry: &LedgerEntry, filter: StatusFilter) -> bool {
    match (entry, filter) {
        (_, StatusFilter::All) => true,
        (LedgerEntry::Standalone(w), StatusFilter::Wager(s)) => w.status == s,
        (LedgerEntry::Paired(p), StatusFilter::Pair(s)) => p.status == s,
        _ => false,
    }
}
