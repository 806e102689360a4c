//! One-second tick source background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Tick cadence
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that delivers ticks while the timer is working or on break.
///
/// The interval is created when a published snapshot enters an active phase
/// and dropped as soon as one shows Stopped or Paused.
pub async fn tick_source_task(state: Arc<AppState>) {
    info!("Starting tick source task");

    let mut timer_rx = state.subscribe();

    loop {
        let phase = timer_rx.borrow_and_update().phase;

        if !phase.is_active() {
            debug!("Timer {}, tick source idle", phase);
            if timer_rx.changed().await.is_err() {
                error!("Timer update channel closed, stopping tick source");
                return;
            }
            continue;
        }

        info!("Timer {}, tick source running", phase);

        // First tick lands one full period after entering the phase
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = state.tick() {
                        error!("Failed to deliver tick: {}", e);
                        sleep(TICK_PERIOD).await;
                    }
                }

                changed = timer_rx.changed() => {
                    if changed.is_err() {
                        error!("Timer update channel closed, stopping tick source");
                        return;
                    }
                    let phase = timer_rx.borrow_and_update().phase;
                    if !phase.is_active() {
                        info!("Timer {}, stopping tick source", phase);
                        break;
                    }
                }
            }
        }
    }
}
