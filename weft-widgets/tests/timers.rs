use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::{self, Instant};
use weft_widgets::animation::{Animations, DEFAULT_STEP_PERIOD, FULL_HEIGHT};
use weft_widgets::wakeup::{self, WakeupHandle};
use weft_widgets::widgets::{Toast, ToastManager, ToastVariant, Widget};

/// Let spawned timer tasks run after the clock moved.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

async fn advance(duration: Duration) {
    time::advance(duration).await;
    settle().await;
}

fn dismiss_log(manager: ToastManager) -> (ToastManager, Arc<Mutex<Vec<String>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let manager = manager.on_dismiss(move |id| sink.lock().unwrap().push(id.to_string()));
    (manager, log)
}

// ============================================================================
// Animations
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_animation_steps_on_timer() {
    let (tx, mut rx) = wakeup::channel();
    let handle = WakeupHandle::new();
    handle.install(tx);

    let mut animations = Animations::new();
    animations.set_wakeup(handle);
    animations.start("panel", true);
    assert!(animations.take_dirty());
    assert_eq!(animations.get("panel").unwrap().current_height, 0);

    advance(DEFAULT_STEP_PERIOD + Duration::from_millis(10)).await;
    assert_eq!(animations.get("panel").unwrap().current_height, 1);
    assert!(animations.take_dirty());
    assert_eq!(rx.recv().await, Some(()));

    for _ in 1..FULL_HEIGHT {
        advance(DEFAULT_STEP_PERIOD).await;
    }
    assert!(!animations.is_animating("panel"));
    assert_eq!(animations.active_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_animations_stops_timers() {
    let handle = WakeupHandle::new();
    let (tx, mut rx) = wakeup::channel();
    handle.install(tx);

    let mut animations = Animations::new();
    animations.set_wakeup(handle.clone());
    animations.start("panel", false);
    drop(animations);

    advance(DEFAULT_STEP_PERIOD * 3).await;
    rx.drain();
    handle.send();
    // Only the manual signal arrives.
    assert_eq!(rx.recv().await, Some(()));
    advance(DEFAULT_STEP_PERIOD * 3).await;
    assert!(time::timeout(Duration::from_millis(1), rx.recv()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_accordion_animation_finishes_on_timer() {
    use weft_widgets::widgets::{Accordion, AccordionItem};

    let mut accordion = Accordion::new(vec![AccordionItem::text("a", "A", "body")]);
    accordion.toggle("a");
    assert!(accordion.animations().is_animating("a"));

    for _ in 0..=FULL_HEIGHT {
        advance(DEFAULT_STEP_PERIOD).await;
    }
    assert!(!accordion.animations().is_animating("a"));
    assert!(accordion.is_expanded("a"));
}

// ============================================================================
// Toasts
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_toast_expires_after_duration() {
    let (mut manager, log) = dismiss_log(ToastManager::new());
    let (tx, mut rx) = wakeup::channel();
    manager.wakeup_handle().install(tx);

    let id = manager.push(
        Toast::new("Saved")
            .variant(ToastVariant::Success)
            .duration(Some(Duration::from_secs(1))),
    );
    assert_eq!(manager.len(), 1);
    assert!(manager.take_dirty());

    advance(Duration::from_millis(900)).await;
    assert_eq!(manager.len(), 1);
    assert!(!manager.take_dirty());

    advance(Duration::from_millis(200)).await;
    assert!(manager.is_empty());
    assert!(manager.take_dirty());
    assert_eq!(*log.lock().unwrap(), vec![id]);
    assert_eq!(rx.recv().await, Some(()));
}

#[tokio::test(start_paused = true)]
async fn test_toast_default_duration_and_persistent() {
    let (mut manager, log) = dismiss_log(ToastManager::new());
    let short = manager.push(Toast::new("Default"));
    let sticky = manager.push(Toast::new("Sticky").duration(None));
    let zero = manager.push(Toast::new("Zero").duration(Some(Duration::ZERO)));

    advance(Duration::from_secs(5)).await;
    let remaining: Vec<String> = manager.toasts().into_iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![sticky, zero]);
    assert_eq!(*log.lock().unwrap(), vec![short]);
}

#[tokio::test(start_paused = true)]
async fn test_manual_dismiss_cancels_timer() {
    let (mut manager, log) = dismiss_log(ToastManager::new());
    let id = manager.push(Toast::new("Bye").duration(Some(Duration::from_secs(1))));

    assert!(manager.dismiss(&id));
    assert!(!manager.dismiss(&id));
    advance(Duration::from_secs(2)).await;
    assert_eq!(*log.lock().unwrap(), vec![id]);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_manager_never_fires() {
    let (mut manager, log) = dismiss_log(ToastManager::new());
    manager.push(Toast::new("Gone").duration(Some(Duration::from_secs(1))));
    drop(manager);

    advance(Duration::from_secs(2)).await;
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_toast_manager_renders_stack() {
    let mut manager = ToastManager::new();
    let id = manager.push(Toast::new("Hello").id("greeting").variant(ToastVariant::Info));
    assert_eq!(id, "greeting");

    let element = manager.element(&weft_widgets::default_theme());
    assert_eq!(element.id, "toast-manager");
    let toast = element.find("toast-greeting").unwrap();
    assert!(toast.plain_text().contains("Hello"));
}

#[test]
fn test_prune_expired_without_runtime() {
    let (mut manager, log) = dismiss_log(ToastManager::new());
    let quick = manager.push(Toast::new("Quick").duration(Some(Duration::from_secs(1))));
    let slow = manager.push(Toast::new("Slow").duration(Some(Duration::from_secs(10))));

    assert!(manager.prune_expired(Instant::now()).is_empty());
    let pruned = manager.prune_expired(Instant::now() + Duration::from_secs(2));
    assert_eq!(pruned, vec![quick.clone()]);
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.toasts()[0].id, slow);
    assert_eq!(*log.lock().unwrap(), vec![quick]);
}
