//! Controlled/uncontrolled value resolution.
//!
//! Every widget with a value accepts an optional externally owned value and
//! keeps an internal fallback. When the external value is present it always
//! wins; interactions then only report the requested change and leave the
//! stored value alone.

use std::fmt;

/// Change handler invoked with the requested new value.
pub type ChangeHandler<T> = Box<dyn FnMut(&T) + Send>;

/// A value that is either owned by the caller (controlled) or by the widget.
pub struct ControlledValue<T> {
    controlled: Option<T>,
    internal: T,
    on_change: Option<ChangeHandler<T>>,
}

impl<T> ControlledValue<T> {
    /// Create a resolver. `controlled` is the caller-owned value, if any;
    /// `default` seeds the internal store.
    pub fn new(controlled: Option<T>, default: T) -> Self {
        Self {
            controlled,
            internal: default,
            on_change: None,
        }
    }

    /// Create an uncontrolled resolver.
    pub fn uncontrolled(default: T) -> Self {
        Self::new(None, default)
    }

    /// Install the change handler.
    pub fn on_change(mut self, handler: impl FnMut(&T) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Replace the change handler in place.
    pub fn set_on_change(&mut self, handler: impl FnMut(&T) + Send + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    /// The effective value.
    pub fn value(&self) -> &T {
        self.controlled.as_ref().unwrap_or(&self.internal)
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// Set or clear the caller-owned value. Switching modes is allowed at any
    /// time; clearing falls back to whatever the internal store holds.
    pub fn set_controlled(&mut self, value: Option<T>) {
        self.controlled = value;
    }

    /// Overwrite the internal store without notifying the handler.
    pub fn set_internal(&mut self, value: T) {
        self.internal = value;
    }

    /// Request a change. The handler always sees `value`; the internal store
    /// is only written when uncontrolled.
    pub fn update(&mut self, value: T) {
        if let Some(handler) = self.on_change.as_mut() {
            handler(&value);
        }
        if self.controlled.is_none() {
            self.internal = value;
        }
    }
}

impl<T: Default> Default for ControlledValue<T> {
    fn default() -> Self {
        Self::uncontrolled(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for ControlledValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlledValue")
            .field("controlled", &self.controlled)
            .field("internal", &self.internal)
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}
