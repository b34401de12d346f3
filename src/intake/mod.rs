pub mod adapter;
pub mod fields;
pub mod mock;
pub mod service;

pub use adapter::{
    ExtractedLeg, ExtractedPair, ExtractedSlip, ExtractedWager, ImagePayload, IntakeAdapter,
};
pub use mock::MockOcrClient;
pub use service::{IntakeOutcome, IntakeService};
