use crate::core::driver::ProgressDriver;
use crate::domain::model::DriverState;
use crate::domain::ports::{DriverConfig, ProgressSink, RandomSource};
use crate::utils::monitor::RunMonitor;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

struct Shared<R> {
    driver: ProgressDriver,
    rng: R,
    // Bumped on every start/cancel; a ticker whose id no longer matches must
    // not touch the driver or the sink again.
    run: u64,
}

/// Drives a `ProgressDriver` on a fixed tokio interval and reports every
/// change to the rendering sink.
///
/// `start` is cancel-and-replace: calling it while a run is live aborts the
/// old ticker first, so two tickers are never alive at once and a stale tick
/// can never advance the new run.
pub struct ProgressEngine<R: RandomSource, S: ProgressSink> {
    shared: Arc<Mutex<Shared<R>>>,
    sink: Arc<S>,
    monitor: Arc<RunMonitor>,
    tick_interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl<R, S> ProgressEngine<R, S>
where
    R: RandomSource + 'static,
    S: ProgressSink + 'static,
{
    pub fn new<C: DriverConfig + ?Sized>(config: &C, rng: R, sink: S) -> Self {
        Self::new_with_monitoring(config, rng, sink, false)
    }

    pub fn new_with_monitoring<C: DriverConfig + ?Sized>(
        config: &C,
        rng: R,
        sink: S,
        monitor_enabled: bool,
    ) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                driver: ProgressDriver::new(config.step_min(), config.step_max()),
                rng,
                run: 0,
            })),
            sink: Arc::new(sink),
            monitor: Arc::new(RunMonitor::new(monitor_enabled)),
            // A zero interval would make tokio panic; validation rejects it
            // upstream, this is the last line.
            tick_interval: config.tick_interval().max(Duration::from_millis(1)),
            task: None,
        }
    }

    /// Start (or restart) filling the bar. Any live run is cancelled first
    /// and the sink immediately sees progress 0.
    pub async fn start(&mut self) {
        self.abort_ticker();
        self.monitor.log_phase("Progress start");

        let run = {
            let mut shared = self.shared.lock().await;
            shared.run += 1;
            let report = shared.driver.begin();
            self.sink.set_progress_width(report.progress);
            shared.run
        };

        let shared = Arc::clone(&self.shared);
        let sink = Arc::clone(&self.sink);
        let monitor = Arc::clone(&self.monitor);
        let period = self.tick_interval;

        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first interval tick fires immediately; the bar already
            // shows 0, so swallow it.
            interval.tick().await;

            loop {
                interval.tick().await;

                let mut shared = shared.lock().await;
                if shared.run != run {
                    return;
                }

                let Shared { driver, rng, .. } = &mut *shared;
                let report = match driver.tick(rng) {
                    Ok(report) => report,
                    Err(e) => {
                        tracing::error!("Tick failed, stopping run: {}", e);
                        return;
                    }
                };

                sink.set_progress_width(report.progress);
                if report.state == DriverState::Complete {
                    monitor.log_phase("Progress complete");
                    return;
                }
            }
        }));
    }

    /// Stop ticking and keep the current fill level. The previously
    /// scheduled tick is guaranteed not to fire.
    pub async fn cancel(&mut self) {
        self.abort_ticker();

        let mut shared = self.shared.lock().await;
        shared.run += 1;
        let report = shared.driver.cancel();
        self.sink.set_progress_width(report.progress);
    }

    /// Clear the bar back to 0 without starting a run.
    pub async fn reset(&mut self) {
        self.abort_ticker();

        let mut shared = self.shared.lock().await;
        shared.run += 1;
        let report = shared.driver.reset();
        self.sink.set_progress_width(report.progress);
    }

    /// Wait until the current run finishes (completes or is aborted).
    pub async fn join(&mut self) {
        if let Some(task) = self.task.take() {
            // An aborted ticker surfaces as JoinError::Cancelled; that is a
            // normal outcome here.
            let _ = task.await;
        }
    }

    pub async fn progress(&self) -> u8 {
        self.shared.lock().await.driver.progress()
    }

    pub async fn state(&self) -> DriverState {
        self.shared.lock().await.driver.state()
    }

    fn abort_ticker(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<R: RandomSource, S: ProgressSink> Drop for ProgressEngine<R, S> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
