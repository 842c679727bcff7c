// File: crates/stats-client/src/refresh.rs
// Summary: Periodic refresh scheduler with a host-supplied visibility predicate.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Handle to a running refresh loop. Dropping it leaves the loop running;
/// call [`RefreshHandle::stop`] for teardown.
pub struct RefreshHandle {
    handle: JoinHandle<()>,
}

impl RefreshHandle {
    pub fn stop(self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Run `cycle` once per `interval` tick, for as long as the handle lives.
///
/// A tick is skipped while `should_run` reports false (view hidden) —
/// resource conservation, re-arming the same ticker afterward. The cycle is
/// awaited inline and missed ticks are skipped, so two refreshes can never
/// run concurrently: a tick that fires while a cycle is still in flight is
/// simply dropped.
///
/// The first tick fires immediately, matching the source view's refresh on
/// initialization.
pub fn spawn_refresh<P, C, Fut>(interval: Duration, should_run: P, mut cycle: C) -> RefreshHandle
where
    P: Fn() -> bool + Send + 'static,
    C: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if !should_run() {
                tracing::debug!("view hidden; skipping stats refresh");
                continue;
            }
            cycle().await;
        }
    });
    RefreshHandle { handle }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn hidden_view_suppresses_cycles() {
        let runs = Arc::new(AtomicUsize::new(0));
        let runs_in_cycle = runs.clone();
        let handle = spawn_refresh(
            Duration::from_millis(100),
            || false,
            move || {
                let runs = runs_in_cycle.clone();
                async move {
                    runs.fetch_add(1, Ordering::SeqCst);
                }
            },
        );

        tokio::time::sleep(Duration::from_millis(550)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn cycles_never_overlap_even_when_slow() {
        let runs = Arc::new(AtomicUsize::new(0));
        let in_flight = Arc::new(AtomicUsize::new(0));
        let overlapped = Arc::new(AtomicBool::new(false));

        let runs_c = runs.clone();
        let in_flight_c = in_flight.clone();
        let overlapped_c = overlapped.clone();
        let handle = spawn_refresh(Duration::from_millis(100), || true, move || {
            let runs = runs_c.clone();
            let in_flight = in_flight_c.clone();
            let overlapped = overlapped_c.clone();
            async move {
                if in_flight.fetch_add(1, Ordering::SeqCst) > 0 {
                    overlapped.store(true, Ordering::SeqCst);
                }
                // Cycle latency far above the tick interval.
                tokio::time::sleep(Duration::from_millis(250)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                runs.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_millis(1_000)).await;
        handle.stop();

        assert!(!overlapped.load(Ordering::SeqCst), "cycles overlapped");
        let total = runs.load(Ordering::SeqCst);
        assert!(total >= 1, "at least the immediate first cycle ran");
        assert!(
            total <= 5,
            "ticks during in-flight cycles must be dropped, got {total}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn stop_tears_the_loop_down() {
        let runs = Arc::new(AtomicUsize::new(0));
        let runs_c = runs.clone();
        let handle = spawn_refresh(Duration::from_millis(100), || true, move || {
            let runs = runs_c.clone();
            async move {
                runs.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_millis(250)).await;
        handle.stop();
        let after_stop = runs.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(runs.load(Ordering::SeqCst), after_stop);
    }
}
