//! Cancellable tokio timers.
//!
//! A [`TimerHandle`] owns a spawned task and aborts it when dropped, so a
//! widget that is torn down can never be mutated by a stray tick.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Handle to a running timer task. Aborts the task on drop.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Call `on_tick` every `period`, starting one period from now, until it
    /// returns `ControlFlow::Break`.
    ///
    /// Returns `None` when no tokio runtime is running on this thread; the
    /// caller is then expected to drive the state manually.
    pub fn interval<F>(period: Duration, mut on_tick: F) -> Option<Self>
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let runtime = Handle::try_current().ok()?;
        let task = runtime.spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                if on_tick().is_break() {
                    break;
                }
            }
        });
        Some(Self { task })
    }

    /// Call `on_fire` once after `delay`.
    ///
    /// Returns `None` when no tokio runtime is running on this thread.
    pub fn timeout<F>(delay: Duration, on_fire: F) -> Option<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        let runtime = Handle::try_current().ok()?;
        let task = runtime.spawn(async move {
            time::sleep(delay).await;
            on_fire();
        });
        Some(Self { task })
    }

    /// Whether the task has run to completion (or was aborted).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the timer now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
