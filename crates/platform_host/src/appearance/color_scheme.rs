//! OS-level color-scheme preference contracts.

use std::{cell::RefCell, fmt, rc::Rc};

/// Media query that matches when the OS prefers a dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Listener invoked with `true` when the OS switches to dark mode and `false` for light mode.
pub type ColorSchemeListener = Rc<dyn Fn(bool)>;

/// Host service exposing the OS dark-mode preference and its change notifications.
pub trait ColorSchemeSource {
    /// Returns whether the OS currently prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;

    /// Registers `listener` for preference changes.
    ///
    /// The listener stays registered until the returned subscription is dropped or cancelled.
    fn subscribe(&self, listener: ColorSchemeListener) -> ColorSchemeSubscription;
}

/// Registration handle returned by [`ColorSchemeSource::subscribe`].
///
/// Dropping the handle unregisters the listener.
#[must_use = "dropping the subscription unregisters the listener"]
pub struct ColorSchemeSubscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ColorSchemeSubscription {
    /// Creates a subscription that runs `cancel` exactly once when released.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Creates a subscription with nothing to release.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Unregisters the listener now.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for ColorSchemeSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ColorSchemeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSchemeSubscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Color-scheme source for targets without a media-query API. Always reports light mode.
pub struct NoopColorSchemeSource;

impl ColorSchemeSource for NoopColorSchemeSource {
    fn prefers_dark(&self) -> bool {
        false
    }

    fn subscribe(&self, _listener: ColorSchemeListener) -> ColorSchemeSubscription {
        ColorSchemeSubscription::detached()
    }
}

#[derive(Default)]
struct MemoryColorSchemeInner {
    prefers_dark: bool,
    next_listener_id: u64,
    listeners: Vec<(u64, ColorSchemeListener)>,
}

#[derive(Clone, Default)]
/// In-memory color-scheme source whose preference is driven by the caller.
pub struct MemoryColorSchemeSource {
    inner: Rc<RefCell<MemoryColorSchemeInner>>,
}

impl MemoryColorSchemeSource {
    /// Creates a source with the given initial preference.
    pub fn new(prefers_dark: bool) -> Self {
        let source = Self::default();
        source.inner.borrow_mut().prefers_dark = prefers_dark;
        source
    }

    /// Changes the preference and notifies every registered listener when it differs.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.prefers_dark == prefers_dark {
                return;
            }
            inner.prefers_dark = prefers_dark;
            inner
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect::<Vec<_>>()
        };
        for listener in listeners {
            listener(prefers_dark);
        }
    }

    /// Returns the number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl fmt::Debug for MemoryColorSchemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MemoryColorSchemeSource")
            .field("prefers_dark", &inner.prefers_dark)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl ColorSchemeSource for MemoryColorSchemeSource {
    fn prefers_dark(&self) -> bool {
        self.inner.borrow().prefers_dark
    }

    fn subscribe(&self, listener: ColorSchemeListener) -> ColorSchemeSubscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, listener));
            id
        };
        let weak = Rc::downgrade(&self.inner);
        ColorSchemeSubscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .borrow_mut()
                    .listeners
                    .retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn memory_source_notifies_only_on_change() {
        let source = MemoryColorSchemeSource::new(false);
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::new(Cell::new(false));
        let _subscription = source.subscribe({
            let calls = Rc::clone(&calls);
            let seen = Rc::clone(&seen);
            Rc::new(move |prefers_dark| {
                calls.set(calls.get() + 1);
                seen.set(prefers_dark);
            })
        });

        source.set_prefers_dark(false);
        assert_eq!(calls.get(), 0);

        source.set_prefers_dark(true);
        assert_eq!(calls.get(), 1);
        assert!(seen.get());
        assert!(source.prefers_dark());
    }

    #[test]
    fn dropping_subscription_unregisters_listener() {
        let source = MemoryColorSchemeSource::new(false);
        let calls = Rc::new(Cell::new(0));
        let subscription = source.subscribe({
            let calls = Rc::clone(&calls);
            Rc::new(move |_| calls.set(calls.get() + 1))
        });
        assert_eq!(source.listener_count(), 1);

        drop(subscription);
        assert_eq!(source.listener_count(), 0);

        source.set_prefers_dark(true);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn cancel_releases_once_and_subscription_may_outlive_source() {
        let source = MemoryColorSchemeSource::new(true);
        let subscription = source.subscribe(Rc::new(|_| {}));
        drop(source);
        subscription.cancel();
    }

    #[test]
    fn noop_source_reports_light_and_detached_subscription() {
        let source = NoopColorSchemeSource;
        assert!(!source.prefers_dark());
        let subscription = source.subscribe(Rc::new(|_| {}));
        assert_eq!(
            format!("{subscription:?}"),
            "ColorSchemeSubscription { active: false }"
        );
    }
}
