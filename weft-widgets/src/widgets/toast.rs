//! Transient notifications with single-shot auto-dismiss timers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use tokio::time::Instant;
use uuid::Uuid;
use weft::{Border, Color, Edges, Element, Key, Position};

use crate::props;
use crate::theme::{ComponentTheme, ConfigValue, StyleAttributes, Theme};
use crate::timer::TimerHandle;
use crate::wakeup::WakeupHandle;
use crate::widgets::events::{EventResult, Widget};

/// How long a toast stays up unless told otherwise.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastVariant::Success => "success",
            ToastVariant::Error => "error",
            ToastVariant::Warning => "warning",
            ToastVariant::Info => "info",
        }
    }
}

/// Where the manager stacks its toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPosition {
    #[default]
    Top,
    Bottom,
}

// =============================================================================
// Toast
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub variant: ToastVariant,
    pub message: String,
    /// `None` (or zero) keeps the toast until dismissed.
    pub duration: Option<Duration>,
    pub has_icon: bool,
    pub created_at: Instant,
}

impl Toast {
    pub const THEME: &'static str = "Toast";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            variant: ToastVariant::Info,
            message: message.into(),
            duration: Some(DEFAULT_TOAST_DURATION),
            has_icon: true,
            created_at: Instant::now(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn duration(mut self, duration: Option<Duration>) -> Self {
        self.duration = duration;
        self
    }

    pub fn icon(mut self, has_icon: bool) -> Self {
        self.has_icon = has_icon;
        self
    }

    /// Effective auto-dismiss delay.
    pub fn auto_close(&self) -> Option<Duration> {
        self.duration.filter(|duration| !duration.is_zero())
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.auto_close()
            .is_some_and(|duration| now.saturating_duration_since(self.created_at) >= duration)
    }

    pub fn element(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Self::THEME);
        let variant = self.variant.as_str();
        let state = props! { variant: variant };
        let icon = self.has_icon.then(|| {
            let icon = styles.config().str_or(&format!("icons.{variant}"), "ℹ");
            styles.apply("icon", &state, Element::text(icon))
        });

        styles.apply(
            "container",
            &state,
            Element::row()
                .id(format!("toast-{}", self.id))
                .maybe_child(icon)
                .child(styles.apply("message", &state, Element::text(self.message.clone()))),
        )
    }
}

// =============================================================================
// ToastManager
// =============================================================================

type DismissHandler = Box<dyn FnMut(&str) + Send>;
type SharedToasts = Arc<RwLock<Vec<Toast>>>;
type SharedHandler = Arc<Mutex<Option<DismissHandler>>>;

/// A stack of toasts, each removed when its timer fires or when dismissed.
///
/// Timer tasks only touch the shared toast list; they flag the manager
/// dirty and send a wakeup so the host re-renders. Dropping the manager
/// aborts every pending timer.
pub struct ToastManager {
    toasts: SharedToasts,
    timers: HashMap<String, TimerHandle>,
    on_dismiss: SharedHandler,
    position: ToastPosition,
    dirty: Arc<AtomicBool>,
    wakeup: WakeupHandle,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Arc::new(RwLock::new(Vec::new())),
            timers: HashMap::new(),
            on_dismiss: Arc::new(Mutex::new(None)),
            position: ToastPosition::Top,
            dirty: Arc::new(AtomicBool::new(false)),
            wakeup: WakeupHandle::new(),
        }
    }

    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    /// Called with the id of every toast that goes away.
    pub fn on_dismiss(self, handler: impl FnMut(&str) + Send + 'static) -> Self {
        if let Ok(mut slot) = self.on_dismiss.lock() {
            *slot = Some(Box::new(handler));
        }
        self
    }

    pub fn wakeup(mut self, wakeup: WakeupHandle) -> Self {
        self.wakeup = wakeup;
        self
    }

    pub fn wakeup_handle(&self) -> &WakeupHandle {
        &self.wakeup
    }

    /// Show `toast` and arm its timer. Returns the toast id.
    pub fn push(&mut self, toast: Toast) -> String {
        let id = toast.id.clone();
        let delay = toast.auto_close();
        if let Ok(mut toasts) = self.toasts.write() {
            toasts.push(toast);
        }
        self.dirty.store(true, Ordering::SeqCst);
        self.timers.retain(|_, timer| !timer.is_finished());
        log::debug!("toast: show {id}");

        if let Some(delay) = delay {
            let toasts = Arc::clone(&self.toasts);
            let on_dismiss = Arc::clone(&self.on_dismiss);
            let dirty = Arc::clone(&self.dirty);
            let wakeup = self.wakeup.clone();
            let timer_id = id.clone();
            let timer = TimerHandle::timeout(delay, move || {
                if remove_toast(&toasts, &on_dismiss, &timer_id) {
                    log::debug!("toast: {timer_id} expired");
                    dirty.store(true, Ordering::SeqCst);
                    wakeup.send();
                }
            });
            match timer {
                Some(timer) => {
                    self.timers.insert(id.clone(), timer);
                }
                None => log::trace!("toast: no runtime, {id} expires via prune_expired"),
            }
        }
        id
    }

    /// Remove a toast now. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: &str) -> bool {
        self.timers.remove(id);
        let removed = remove_toast(&self.toasts, &self.on_dismiss, id);
        if removed {
            log::debug!("toast: dismissed {id}");
            self.dirty.store(true, Ordering::SeqCst);
        }
        removed
    }

    /// Dismiss every toast whose duration has elapsed at `now`. For hosts
    /// without a tokio runtime.
    pub fn prune_expired(&mut self, now: Instant) -> Vec<String> {
        let expired: Vec<String> = self
            .toasts
            .read()
            .map(|toasts| {
                toasts
                    .iter()
                    .filter(|toast| toast.is_expired(now))
                    .map(|toast| toast.id.clone())
                    .collect()
            })
            .unwrap_or_default();
        expired.into_iter().filter(|id| self.dismiss(id)).collect()
    }

    /// Snapshot of the visible toasts, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().map(|toasts| toasts.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.toasts.read().map(|toasts| toasts.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check and clear the dirty flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }
}

impl Drop for ToastManager {
    fn drop(&mut self) {
        if !self.timers.is_empty() {
            log::debug!("toast: cancelling {} timers", self.timers.len());
        }
        self.timers.clear();
    }
}

fn remove_toast(toasts: &SharedToasts, on_dismiss: &SharedHandler, id: &str) -> bool {
    let removed = match toasts.write() {
        Ok(mut toasts) => {
            let before = toasts.len();
            toasts.retain(|toast| toast.id != id);
            toasts.len() != before
        }
        Err(_) => false,
    };
    if removed {
        if let Ok(mut handler) = on_dismiss.lock() {
            if let Some(handler) = handler.as_mut() {
                handler(id);
            }
        }
    }
    removed
}

impl Widget for ToastManager {
    fn handle_key(&mut self, _key: Key) -> EventResult {
        EventResult::Ignored
    }

    fn element(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Toast::THEME);
        let position = match self.position {
            ToastPosition::Top => "top",
            ToastPosition::Bottom => "bottom",
        };
        let stack = Element::col()
            .id("toast-manager")
            .position(Position::Absolute)
            .left(0)
            .right(0);
        let stack = match self.position {
            ToastPosition::Top => stack.top(0),
            ToastPosition::Bottom => stack.bottom(0),
        };
        styles.apply(
            "manager",
            &props! { position: position },
            stack.children(self.toasts().iter().map(|toast| toast.element(theme))),
        )
    }
}

fn variant_color(variant: Option<&str>) -> Color {
    match variant {
        Some("success") => Color::GREEN,
        Some("error") => Color::RED,
        Some("warning") => Color::YELLOW,
        _ => Color::BLUE,
    }
}

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("container", |p| {
            StyleAttributes::new()
                .gap(1)
                .padding(Edges::all(1))
                .border(Border::Single)
                .border_color(variant_color(p.str("variant")))
        })
        .style("icon", |p| StyleAttributes::new().color(variant_color(p.str("variant"))))
        .style("message", |p| StyleAttributes::new().color(variant_color(p.str("variant"))))
        .style("manager", |_| StyleAttributes::new().gap(1).padding(Edges::all(1)))
        .config(|| {
            ConfigValue::map([(
                "icons",
                ConfigValue::map([
                    ("success", "✔"),
                    ("error", "✖"),
                    ("warning", "⚠"),
                    ("info", "ℹ"),
                ]),
            )])
        })
}
