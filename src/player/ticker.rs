use std::io;
use std::ops::ControlFlow;
use std::time::Duration;

use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Where tick tasks run.
///
/// Inside a tokio runtime that runtime is reused. Outside of one a
/// single-worker runtime is started and owned here.
pub enum TickRuntime {
    Ambient(Handle),
    Owned(Option<Runtime>),
}

impl TickRuntime {
    pub fn current_or_owned() -> io::Result<Self> {
        if let Ok(handle) = Handle::try_current() {
            return Ok(Self::Ambient(handle));
        }

        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("playdeck-ticker")
            .enable_time()
            .build()?;
        Ok(Self::Owned(Some(runtime)))
    }

    pub fn handle(&self) -> Option<&Handle> {
        match self {
            TickRuntime::Ambient(handle) => Some(handle),
            TickRuntime::Owned(runtime) => runtime.as_ref().map(Runtime::handle),
        }
    }
}

impl Drop for TickRuntime {
    fn drop(&mut self) {
        // A plain drop blocks, which panics when it happens on an async thread.
        if let TickRuntime::Owned(runtime) = self {
            if let Some(runtime) = runtime.take() {
                runtime.shutdown_background();
            }
        }
    }
}

/// A recurring task that is aborted when the handle is dropped.
///
/// The first call happens one `period` after spawning, not immediately.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    pub fn spawn<F>(runtime: &Handle, period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if on_tick().is_break() {
                    break;
                }
            }
        });

        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test(start_paused = true)]
    async fn fires_once_per_period() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();
        let _ticker = Ticker::spawn(&Handle::current(), Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            ControlFlow::Continue(())
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_the_task() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();
        let ticker = Ticker::spawn(&Handle::current(), Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            ControlFlow::Continue(())
        });

        tokio::time::sleep(Duration::from_millis(150)).await;
        drop(ticker);
        tokio::time::sleep(Duration::from_millis(1_000)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn break_ends_the_task() {
        let ticker = Ticker::spawn(&Handle::current(), Duration::from_millis(100), || {
            ControlFlow::Break(())
        });
        tokio::time::sleep(Duration::from_millis(150)).await;
        tokio::task::yield_now().await;
        assert!(ticker.is_finished());
    }

    #[test]
    fn owns_a_runtime_when_none_is_running() {
        let runtime = TickRuntime::current_or_owned().unwrap();
        assert!(matches!(runtime, TickRuntime::Owned(Some(_))));

        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();
        let handle = runtime.handle().unwrap();
        let _ticker = Ticker::spawn(handle, Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            ControlFlow::Continue(())
        });

        std::thread::sleep(Duration::from_millis(200));
        assert!(count.load(Ordering::SeqCst) > 0);
    }

    #[tokio::test]
    async fn reuses_the_ambient_runtime() {
        let runtime = TickRuntime::current_or_owned().unwrap();
        assert!(matches!(runtime, TickRuntime::Ambient(_)));
    }
}
