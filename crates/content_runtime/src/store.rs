//! Observable containers with synchronous subscriber notification.
//!
//! [`Observable`] holds a value and a subscriber list; [`Derived`] republishes a pure
//! projection of another observable. Both are single-threaded handles meant to live on the
//! browser event loop, and both are read through the [`Readable`] trait.

mod derived;
mod observable;

pub use derived::Derived;
pub use observable::{Observable, Subscription};

/// Read side shared by [`Observable`] and [`Derived`].
pub trait Readable<T: Clone + 'static> {
    /// Registers `callback`, invokes it with the current value, and again after every change.
    ///
    /// The callback stays registered until the returned [`Subscription`] is dropped or
    /// [`Subscription::unsubscribe`] is called.
    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static;

    /// Reads the current value through a borrow.
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    /// Returns a clone of the current value.
    fn get(&self) -> T {
        self.with(T::clone)
    }
}
