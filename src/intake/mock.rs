use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::config::{Config, MOCK_INTAKE_DELAY_MS};
use crate::error::{LedgerError, Result};
use crate::intake::adapter::{ExtractedSlip, ImagePayload, IntakeAdapter};

// ---------------------------------------------------------------------------
// Canned OCR documents
// ---------------------------------------------------------------------------
//
// Real OCR backends deliver JSON field documents; the mock carries a fixed
// set of them and picks one uniformly per extraction. The image payload is
// never inspected.

const SINGLE_FIXTURES: [&str; 4] = [
    r#"{
        "kind": "single",
        "house": "Bet365",
        "bet_type": "1x2 - Resultado Final",
        "odds": "2.25",
        "amount": "100.00",
        "potential_profit": "225.00"
    }"#,
    r#"{
        "kind": "single",
        "house": "Betano",
        "bet_type": "Ambas Marcam - Sim",
        "odds": "1.85",
        "amount": "150.00",
        "potential_profit": "277.50"
    }"#,
    r#"{
        "kind": "single",
        "house": "Sportingbet",
        "bet_type": "Over 2.5 Gols",
        "odds": "3.10",
        "amount": "75.00",
        "potential_profit": "232.50"
    }"#,
    r#"{
        "kind": "single",
        "house": "Betfair",
        "bet_type": "Dupla Chance 1X",
        "odds": "1.45",
        "amount": "200.00",
        "potential_profit": "290.00"
    }"#,
];

const PAIR_FIXTURES: [&str; 1] = [r#"{
    "kind": "pair",
    "platform": "Surebet",
    "teams": "PSG Andebol - USAM Nimes",
    "sport": "Handebol",
    "league": "France - LNH Division 1",
    "event_date": "15/01/2025 16:00",
    "profit_percentage": "2.25",
    "roi": "414.19",
    "total_amount": "531.06",
    "bet1": {
        "house": "Betfast",
        "country": "BR",
        "bet_type": "H1(-5.5)",
        "odds": "1.810",
        "amount": "300.00",
        "profit": "11.94"
    },
    "bet2": {
        "house": "Betano",
        "country": "BR",
        "bet_type": "H2(+5.5)",
        "odds": "2.350",
        "amount": "231.06",
        "profit": "11.93"
    }
}"#];

// ---------------------------------------------------------------------------
// MockOcrClient
// ---------------------------------------------------------------------------

/// Simulated OCR backend: sleeps for the configured delay, then returns one
/// of its canned slip documents. `failing()` flips it into an adapter that
/// always errors, for exercising the intake failure path.
pub struct MockOcrClient {
    fixtures: Vec<&'static str>,
    delay: Duration,
    fail: bool,
}

impl MockOcrClient {
    /// All canned slips, single and pair, at the default delay.
    pub fn new() -> Self {
        let mut fixtures = Vec::with_capacity(SINGLE_FIXTURES.len() + PAIR_FIXTURES.len());
        fixtures.extend_from_slice(&SINGLE_FIXTURES);
        fixtures.extend_from_slice(&PAIR_FIXTURES);
        Self {
            fixtures,
            delay: Duration::from_millis(MOCK_INTAKE_DELAY_MS),
            fail: false,
        }
    }

    /// Only the single-wager slips — the upload flow of the plain dashboard.
    pub fn singles_only() -> Self {
        Self {
            fixtures: SINGLE_FIXTURES.to_vec(),
            ..Self::new()
        }
    }

    /// Only the surebet slips.
    pub fn pairs_only() -> Self {
        Self {
            fixtures: PAIR_FIXTURES.to_vec(),
            ..Self::new()
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new().with_delay(Duration::from_millis(cfg.intake_delay_ms))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Every extraction fails with an intake error.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl Default for MockOcrClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IntakeAdapter for MockOcrClient {
    async fn extract(&self, payload: ImagePayload) -> Result<ExtractedSlip> {
        let payload_kind = match &payload {
            ImagePayload::FileBytes(bytes) => format!("file ({} bytes)", bytes.len()),
            ImagePayload::DataUrl(url) => format!("data-url ({} chars)", url.len()),
        };
        debug!(payload = %payload_kind, delay_ms = self.delay.as_millis() as u64, "mock extraction started");

        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(LedgerError::Intake(
                "simulated OCR backend failure".to_string(),
            ));
        }

        let doc = self
            .fixtures
            .choose(&mut rand::thread_rng())
            .ok_or_else(|| LedgerError::Intake("mock has no slip fixtures".to_string()))?;
        let slip: ExtractedSlip = serde_json::from_str(doc)?;

        let kind = match &slip {
            ExtractedSlip::Single(_) => "single",
            ExtractedSlip::Pair(_) => "pair",
        };
        info!(kind, "mock extraction complete");
        Ok(slip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ImagePayload {
        ImagePayload::FileBytes(vec![0u8; 4])
    }

    #[tokio::test]
    async fn singles_client_returns_single_slips() {
        let client = MockOcrClient::singles_only().with_delay(Duration::ZERO);
        for _ in 0..8 {
            let slip = client.extract(payload()).await.expect("extraction");
            assert!(matches!(slip, ExtractedSlip::Single(_)));
        }
    }

    #[tokio::test]
    async fn pair_fixture_parses_with_both_legs() {
        let client = MockOcrClient::pairs_only().with_delay(Duration::ZERO);
        let slip = client.extract(payload()).await.expect("extraction");
        match slip {
            ExtractedSlip::Pair(p) => {
                assert_eq!(p.teams, "PSG Andebol - USAM Nimes");
                assert_eq!(p.bet1.house, "Betfast");
                assert_eq!(p.bet2.house, "Betano");
            }
            ExtractedSlip::Single(_) => panic!("pairs_only client returned a single slip"),
        }
    }

    #[tokio::test]
    async fn failing_client_surfaces_intake_error() {
        let client = MockOcrClient::new()
            .with_delay(Duration::ZERO)
            .failing();
        let err = client.extract(payload()).await.unwrap_err();
        assert!(matches!(err, LedgerError::Intake(_)));
    }
}
