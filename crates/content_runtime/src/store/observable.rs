use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use super::Readable;

type Callback<T> = Rc<dyn Fn(&T)>;

struct ObservableInner<T> {
    value: T,
    next_subscriber_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
    notifying: bool,
    dirty: bool,
}

impl<T> ObservableInner<T> {
    fn snapshot(&self) -> Vec<Callback<T>> {
        self.subscribers
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect()
    }
}

/// Mutable value container that synchronously notifies subscribers after every update.
///
/// Clones share the same value and subscriber list.
pub struct Observable<T> {
    inner: Rc<RefCell<ObservableInner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default + Clone + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + 'static> Observable<T> {
    /// Creates an observable holding `initial` with no subscribers.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservableInner {
                value: initial,
                next_subscriber_id: 0,
                subscribers: Vec::new(),
                notifying: false,
                dirty: false,
            })),
        }
    }

    /// Replaces the value with `f(old)` and notifies every subscriber in subscription order.
    ///
    /// `f` runs while the value is borrowed; it may read this observable but must not update
    /// it. An update issued from inside a subscriber callback is applied immediately and
    /// delivered in a follow-up pass once the current pass finishes.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = {
            let inner = self.inner.borrow();
            f(&inner.value)
        };
        {
            let mut inner = self.inner.borrow_mut();
            inner.value = next;
            if inner.notifying {
                inner.dirty = true;
                return;
            }
            inner.notifying = true;
        }
        self.flush();
    }

    /// Replaces the value and notifies subscribers.
    pub fn set(&self, value: T) {
        self.update(move |_| value);
    }

    /// Returns the number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn flush(&self) {
        let _pass = NotifyingGuard {
            inner: &self.inner,
        };
        loop {
            let (value, subscribers) = {
                let mut inner = self.inner.borrow_mut();
                inner.dirty = false;
                (inner.value.clone(), inner.snapshot())
            };
            for callback in subscribers {
                callback(&value);
            }
            if !self.inner.borrow().dirty {
                return;
            }
        }
    }
}

/// Clears the notifying flag when a flush ends, including by a subscriber panic.
struct NotifyingGuard<'a, T> {
    inner: &'a RefCell<ObservableInner<T>>,
}

impl<T> Drop for NotifyingGuard<'_, T> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.notifying = false;
            inner.dirty = false;
        }
    }
}

impl<T: Clone + 'static> Readable<T> for Observable<T> {
    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let callback: Callback<T> = Rc::new(callback);
        let (id, value) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_subscriber_id;
            inner.next_subscriber_id += 1;
            inner.subscribers.push((id, Rc::clone(&callback)));
            (id, inner.value.clone())
        };
        callback(&value);

        let weak: Weak<RefCell<ObservableInner<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .borrow_mut()
                    .subscribers
                    .retain(|(subscriber_id, _)| *subscriber_id != id);
            }
        })
    }

    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }
}

/// Registration handle returned by [`Readable::subscribe`].
///
/// Dropping the handle unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Removes the callback from its observable. No-op once the observable is gone.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
