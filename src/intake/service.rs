use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::intake::adapter::{ExtractedSlip, ImagePayload, IntakeAdapter};

/// Delivered on the outcome channel once per submitted extraction. A failure
/// is a notification for the caller to surface, never a fatal condition.
#[derive(Debug)]
pub enum IntakeOutcome {
    Extracted(ExtractedSlip),
    Failed(String),
}

/// Runs extractions against an [`IntakeAdapter`], one in flight at a time.
///
/// Each `submit` spawns the adapter call on its own task and delivers exactly
/// one [`IntakeOutcome`] on the channel — unless the request is cancelled
/// first, in which case the task is aborted and nothing is delivered.
/// Submitting while an extraction is in flight aborts the previous request.
pub struct IntakeService {
    adapter: Arc<dyn IntakeAdapter>,
    outcome_tx: mpsc::Sender<IntakeOutcome>,
    in_flight: Option<JoinHandle<()>>,
}

impl IntakeService {
    pub fn new(adapter: Arc<dyn IntakeAdapter>, outcome_tx: mpsc::Sender<IntakeOutcome>) -> Self {
        Self {
            adapter,
            outcome_tx,
            in_flight: None,
        }
    }

    /// Start extracting fields from a slip image. Any extraction still in
    /// flight is aborted first — its outcome will never be delivered.
    pub fn submit(&mut self, payload: ImagePayload) {
        self.cancel();

        let adapter = Arc::clone(&self.adapter);
        let tx = self.outcome_tx.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = match adapter.extract(payload).await {
                Ok(slip) => IntakeOutcome::Extracted(slip),
                Err(e) => {
                    warn!(error = %e, "intake extraction failed");
                    IntakeOutcome::Failed(e.to_string())
                }
            };
            if tx.send(outcome).await.is_err() {
                warn!("intake outcome receiver dropped");
            }
        }));
    }

    /// Abort the in-flight extraction, if any. Call when the user dismisses
    /// the review dialog so the request does not outlive its purpose.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                info!("aborting in-flight intake request");
            }
            handle.abort();
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::INTAKE_CHANNEL_CAPACITY;
    use crate::intake::mock::MockOcrClient;
    use std::time::Duration;

    fn payload() -> ImagePayload {
        ImagePayload::DataUrl("data:image/png;base64,AAAA".to_string())
    }

    #[tokio::test]
    async fn submit_delivers_one_outcome() {
        let (tx, mut rx) = mpsc::channel(INTAKE_CHANNEL_CAPACITY);
        let adapter = Arc::new(MockOcrClient::new().with_delay(Duration::ZERO));
        let mut service = IntakeService::new(adapter, tx);

        service.submit(payload());
        let outcome = rx.recv().await.expect("outcome");
        assert!(matches!(outcome, IntakeOutcome::Extracted(_)));
        assert!(rx.try_recv().is_err(), "exactly one outcome expected");
    }

    #[tokio::test]
    async fn failure_is_delivered_not_raised() {
        let (tx, mut rx) = mpsc::channel(INTAKE_CHANNEL_CAPACITY);
        let adapter = Arc::new(MockOcrClient::new().with_delay(Duration::ZERO).failing());
        let mut service = IntakeService::new(adapter, tx);

        service.submit(payload());
        let outcome = rx.recv().await.expect("outcome");
        match outcome {
            IntakeOutcome::Failed(msg) => assert!(msg.contains("OCR")),
            IntakeOutcome::Extracted(_) => panic!("failing adapter must not extract"),
        }
    }

    #[tokio::test]
    async fn cancel_suppresses_the_outcome() {
        let (tx, mut rx) = mpsc::channel(INTAKE_CHANNEL_CAPACITY);
        let adapter = Arc::new(MockOcrClient::new().with_delay(Duration::from_secs(30)));
        let mut service = IntakeService::new(adapter, tx);

        service.submit(payload());
        assert!(service.is_busy());
        service.cancel();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err(), "cancelled request must deliver nothing");
        assert!(!service.is_busy());
    }

    #[tokio::test]
    async fn resubmit_aborts_previous_request() {
        let (tx, mut rx) = mpsc::channel(INTAKE_CHANNEL_CAPACITY);
        let slow = Arc::new(MockOcrClient::new().with_delay(Duration::from_secs(30)));
        let mut service = IntakeService::new(slow, tx);

        service.submit(payload());
        service.submit(payload());

        // Only the second request is alive; it never completes within the
        // test, so nothing is on the channel and the service is busy.
        assert!(service.is_busy());
        assert!(rx.try_recv().is_err());
    }
}
