use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ---------------------------------------------------------------------------
// Image payload
// ---------------------------------------------------------------------------

/// The slip image handed to the adapter. Opaque to the core — only the
/// adapter interprets it.
#[derive(Debug, Clone)]
pub enum ImagePayload {
    /// Raw file bytes from an upload or drop.
    FileBytes(Vec<u8>),
    /// A data-URL-encoded image from a clipboard paste.
    DataUrl(String),
}

// ---------------------------------------------------------------------------
// Extracted field documents
// ---------------------------------------------------------------------------
//
// Everything the adapter returns is raw text, numeric-looking fields
// included. Parsing into domain values happens downstream, under the
// lenient coercion policy.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedWager {
    pub house: String,
    pub bet_type: String,
    pub odds: String,
    pub amount: String,
    pub potential_profit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedLeg {
    pub house: String,
    pub country: String,
    pub bet_type: String,
    pub odds: String,
    pub amount: String,
    pub profit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedPair {
    pub platform: String,
    pub teams: String,
    pub sport: String,
    pub league: String,
    pub event_date: String,
    pub profit_percentage: String,
    pub roi: String,
    /// Slip-level total. Carried through for display fidelity but ignored by
    /// construction, which recomputes the total from the leg amounts.
    pub total_amount: String,
    pub bet1: ExtractedLeg,
    pub bet2: ExtractedLeg,
}

/// Tagged result of an extraction: the adapter states which slip shape it
/// read instead of leaving the caller to sniff the field set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractedSlip {
    Single(ExtractedWager),
    Pair(ExtractedPair),
}

// ---------------------------------------------------------------------------
// Adapter trait
// ---------------------------------------------------------------------------

/// The one external boundary the core depends on: something that turns a
/// slip image into raw string fields. Implemented by [`crate::intake::MockOcrClient`];
/// a real OCR backend would slot in behind the same trait.
#[async_trait]
pub trait IntakeAdapter: Send + Sync + 'static {
    async fn extract(&self, payload: ImagePayload) -> Result<ExtractedSlip>;
}
