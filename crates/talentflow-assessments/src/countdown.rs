use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::session::{RunSession, SubmitReason, Tick};
use crate::submission::{ResultRecorder, SubmissionReport};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// The one-second timer behind an in-progress session.
///
/// Ticks the shared session until it completes. If the clock runs out the
/// task submits and records the result exactly like a manual submit. The
/// task is aborted when the handle is cancelled or dropped, so a timer
/// never outlives the session it drives.
pub struct Countdown {
    handle: Option<JoinHandle<Option<SubmissionReport>>>,
}

impl Countdown {
    pub fn spawn(
        session: Arc<Mutex<RunSession>>,
        candidate_id: Uuid,
        recorder: ResultRecorder,
    ) -> Self {
        let handle = tokio::spawn(run(session, candidate_id, recorder));
        Self {
            handle: Some(handle),
        }
    }

    /// Stop the timer without submitting.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("countdown cancelled");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(|h| h.is_finished())
    }

    /// Wait for the timer to stop. Returns the report if it was the timer
    /// that submitted the run; `None` if the run ended some other way or
    /// the countdown was cancelled.
    pub async fn wait(mut self) -> Option<SubmissionReport> {
        let handle = self.handle.take()?;
        match handle.await {
            Ok(report) => report,
            Err(e) => {
                if !e.is_cancelled() {
                    tracing::error!(error = %e, "countdown task failed");
                }
                None
            }
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run(
    session: Arc<Mutex<RunSession>>,
    candidate_id: Uuid,
    recorder: ResultRecorder,
) -> Option<SubmissionReport> {
    let mut interval = tokio::time::interval(TICK_PERIOD);
    // The first tick completes immediately
    interval.tick().await;

    loop {
        interval.tick().await;

        let mut guard = session.lock().await;
        match guard.tick() {
            Ok(Tick::Running { .. }) => continue,
            Ok(Tick::Idle) => return None,
            Ok(Tick::Expired(score)) => {
                let assessment = guard.assessment().clone();
                drop(guard);
                let report = recorder
                    .finish(&assessment, candidate_id, score, SubmitReason::TimedOut)
                    .await;
                return Some(report);
            }
            Err(e) => {
                tracing::error!(error = %e, "countdown could not submit the run");
                return None;
            }
        }
    }
}
