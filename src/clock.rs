use async_trait::async_trait;
use tokio::time::{sleep, Duration};

/// Pacing seam for the two timer-driven phases. Injected so tests can run
/// the loops without real waiting.
#[async_trait]
pub trait Clock: Send + Sync {
    async fn tick(&self, ms: u64);
}

/// Wall-clock pacing via the tokio timer.
pub struct IntervalClock;

#[async_trait]
impl Clock for IntervalClock {
    async fn tick(&self, ms: u64) {
        sleep(Duration::from_millis(ms)).await;
    }
}

/// Completes every tick immediately. Test pacing.
pub struct ImmediateClock;

#[async_trait]
impl Clock for ImmediateClock {
    async fn tick(&self, _ms: u64) {}
}
