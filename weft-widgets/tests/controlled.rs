use std::sync::{Arc, Mutex};

use weft_widgets::controlled::ControlledValue;

fn recorder<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl FnMut(&T) + Send + 'static) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    (log, move |value: &T| sink.lock().unwrap().push(value.clone()))
}

#[test]
fn test_uncontrolled_updates_internal() {
    let (log, handler) = recorder();
    let mut value = ControlledValue::uncontrolled(1).on_change(handler);
    assert!(!value.is_controlled());

    value.update(2);
    assert_eq!(*value.value(), 2);
    assert_eq!(*log.lock().unwrap(), vec![2]);
}

#[test]
fn test_controlled_value_wins() {
    let (log, handler) = recorder();
    let mut value = ControlledValue::new(Some(10), 1).on_change(handler);
    assert!(value.is_controlled());
    assert_eq!(*value.value(), 10);

    value.update(11);
    assert_eq!(*value.value(), 10);
    assert_eq!(*log.lock().unwrap(), vec![11]);
}

#[test]
fn test_releasing_control_falls_back_to_internal() {
    let mut value = ControlledValue::new(Some("outer"), "inner");
    value.update("requested");
    value.set_controlled(None);
    assert_eq!(*value.value(), "inner");

    value.set_controlled(Some("again"));
    assert_eq!(*value.value(), "again");
}

#[test]
fn test_set_internal_is_silent() {
    let (log, handler) = recorder::<String>();
    let mut value = ControlledValue::<String>::default().on_change(handler);
    value.set_internal("seed".to_string());
    assert_eq!(value.value(), "seed");
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_update_without_handler() {
    let mut value = ControlledValue::uncontrolled(vec![1]);
    value.update(vec![1, 2]);
    assert_eq!(value.value(), &vec![1, 2]);
}
