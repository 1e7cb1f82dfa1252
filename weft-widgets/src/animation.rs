//! Discrete height animation for expanding and collapsing panels.
//!
//! Each animating key moves one row per tick between 0 and a full height
//! and is dropped once it reaches its target. Ticks come from a tokio
//! interval when a runtime is available; [`Animations::step`] drives the
//! same transition by hand otherwise.

use std::collections::HashMap;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::timer::TimerHandle;
use crate::wakeup::WakeupHandle;

/// Height of a fully open panel, in rows.
pub const FULL_HEIGHT: u16 = 5;

/// Time between animation steps.
pub const DEFAULT_STEP_PERIOD: Duration = Duration::from_millis(100);

/// In-flight animation for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationEntry {
    pub target_height: u16,
    pub current_height: u16,
    pub is_expanding: bool,
}

impl AnimationEntry {
    pub fn new(is_expanding: bool, full_height: u16) -> Self {
        if is_expanding {
            Self {
                target_height: full_height,
                current_height: 0,
                is_expanding,
            }
        } else {
            Self {
                target_height: 0,
                current_height: full_height,
                is_expanding,
            }
        }
    }

    /// Advance one row toward the target. Returns true once it is reached.
    pub fn step(&mut self) -> bool {
        self.current_height = if self.is_expanding {
            (self.current_height + 1).min(self.target_height)
        } else {
            self.current_height.saturating_sub(1).max(self.target_height)
        };
        self.current_height == self.target_height
    }
}

type Entries = Arc<RwLock<HashMap<String, AnimationEntry>>>;

/// Per-key animation registry owned by a widget.
///
/// Dropping it aborts every running timer.
#[derive(Debug)]
pub struct Animations {
    entries: Entries,
    timers: HashMap<String, TimerHandle>,
    period: Duration,
    full_height: u16,
    dirty: Arc<AtomicBool>,
    wakeup: WakeupHandle,
}

impl Default for Animations {
    fn default() -> Self {
        Self::new()
    }
}

impl Animations {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            timers: HashMap::new(),
            period: DEFAULT_STEP_PERIOD,
            full_height: FULL_HEIGHT,
            dirty: Arc::new(AtomicBool::new(false)),
            wakeup: WakeupHandle::new(),
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn with_full_height(mut self, full_height: u16) -> Self {
        self.full_height = full_height;
        self
    }

    /// Handle used to signal the host after each timer step.
    pub fn wakeup_handle(&self) -> &WakeupHandle {
        &self.wakeup
    }

    pub fn set_wakeup(&mut self, wakeup: WakeupHandle) {
        self.wakeup = wakeup;
    }

    pub fn full_height(&self) -> u16 {
        self.full_height
    }

    /// Begin animating `key`, restarting it if it is already in flight.
    pub fn start(&mut self, key: &str, is_expanding: bool) {
        // Replacing the handle aborts the previous timer for this key.
        self.timers.remove(key);
        self.timers.retain(|_, timer| !timer.is_finished());

        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), AnimationEntry::new(is_expanding, self.full_height));
        }
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("animation: start {key} (expanding: {is_expanding})");

        let entries = Arc::clone(&self.entries);
        let dirty = Arc::clone(&self.dirty);
        let wakeup = self.wakeup.clone();
        let tick_key = key.to_string();
        let timer = TimerHandle::interval(self.period, move || {
            let finished = step_entry(&entries, &tick_key).is_none();
            dirty.store(true, Ordering::SeqCst);
            wakeup.send();
            if finished {
                log::debug!("animation: {tick_key} finished");
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        match timer {
            Some(timer) => {
                self.timers.insert(key.to_string(), timer);
            }
            None => log::trace!("animation: no runtime, {key} will be stepped manually"),
        }
    }

    /// Current entry for `key`, if it is animating.
    pub fn get(&self, key: &str) -> Option<AnimationEntry> {
        self.entries
            .read()
            .map(|entries| entries.get(key).copied())
            .unwrap_or_default()
    }

    pub fn is_animating(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn active_count(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or_default()
    }

    /// Advance `key` by one step. Returns the entry after the step, or `None`
    /// if it finished (or was not animating).
    pub fn step(&mut self, key: &str) -> Option<AnimationEntry> {
        let result = step_entry(&self.entries, key);
        if result.is_none() {
            self.timers.remove(key);
        }
        self.dirty.store(true, Ordering::SeqCst);
        result
    }

    /// Advance every animating key by one step.
    pub fn step_all(&mut self) {
        let keys: Vec<String> = self
            .entries
            .read()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default();
        for key in keys {
            self.step(&key);
        }
    }

    /// Stop every animation immediately.
    pub fn cancel_all(&mut self) {
        if !self.timers.is_empty() {
            log::debug!("animation: cancelling {} timers", self.timers.len());
        }
        self.timers.clear();
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Check and clear the dirty flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }
}

impl Drop for Animations {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

fn step_entry(entries: &Entries, key: &str) -> Option<AnimationEntry> {
    let Ok(mut entries) = entries.write() else {
        return None;
    };
    let entry = entries.get_mut(key)?;
    if entry.step() {
        entries.remove(key);
        None
    } else {
        Some(*entry)
    }
}
