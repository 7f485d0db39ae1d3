use governor::clock::{Clock, DefaultClock};
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::sync::Arc;
use std::time::Duration;

pub type Limiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Builds a limiter that lets one call through per `interval`.
///
/// Returns `None` for a zero interval, which disables spacing entirely.
pub fn interval_limiter(interval: Duration) -> Option<Limiter> {
    let quota = Quota::with_period(interval)?;
    Some(Arc::new(RateLimiter::direct(quota)))
}

/// Blocks the current thread until the limiter admits one more call.
pub fn wait(limiter: &Limiter) {
    let clock = DefaultClock::default();
    while let Err(not_until) = limiter.check() {
        let delay = not_until.wait_time_from(clock.now());
        log::debug!("Rate limiter engaged, sleeping {:?}", delay);
        std::thread::sleep(delay);
    }
}
