//! Background session refresh.
//!
//! While the admin surface is active, the session is extended every
//! thirty minutes so an editor working through the day never trips the
//! 24-hour window. The loop stops as soon as a refresh fails, which
//! covers logout and expiry alike.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::gate::SessionGate;

/// How often the background task refreshes the session.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Spawn the periodic refresh loop for `gate`.
///
/// The task ticks every [`REFRESH_INTERVAL`] and exits when a refresh
/// reports `false` (no session, expired, or persist failure). Dropping
/// the handle leaves the task running; abort it to stop early.
pub fn spawn_refresh_task(gate: Arc<SessionGate>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(REFRESH_INTERVAL);
        // The first tick fires immediately; skip it so a fresh login is
        // not refreshed right away.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if !gate.refresh().await {
                tracing::debug!("session refresh loop stopping");
                break;
            }
        }
    })
}
