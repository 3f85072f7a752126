use std::{cell::Cell, fmt, rc::Rc};

use super::{Observable, Readable, Subscription};

/// Read-only observable recomputed from a source observable on every source change.
///
/// The link to the source lives as long as any clone of the derived handle does.
pub struct Derived<T> {
    output: Observable<T>,
    _link: Rc<Subscription>,
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            output: self.output.clone(),
            _link: Rc::clone(&self._link),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Derived").field(&self.output).finish()
    }
}

impl<T: Clone + 'static> Derived<T> {
    /// Derives a value from `source` with the pure projection `map`.
    pub fn new<S, M>(source: &Observable<S>, map: M) -> Self
    where
        S: Clone + 'static,
        M: Fn(&S) -> T + 'static,
    {
        let output = Observable::new(source.with(&map));
        let sink = output.clone();
        let primed = Cell::new(false);
        let link = source.subscribe(move |value: &S| {
            // The first call replays the value the output was built from.
            if primed.replace(true) {
                sink.set(map(value));
            }
        });
        Self {
            output,
            _link: Rc::new(link),
        }
    }
}

impl<T: Clone + 'static> Readable<T> for Derived<T> {
    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        self.output.subscribe(callback)
    }

    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.output.with(f)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn derived_value_tracks_source_changes() {
        let source = Observable::new(2);
        let doubled = Derived::new(&source, |value: &i32| value * 2);
        assert_eq!(doubled.get(), 4);

        source.set(5);
        assert_eq!(doubled.get(), 10);
    }

    #[test]
    fn derived_subscribers_get_current_value_then_every_recompute() {
        let source = Observable::new(vec![1]);
        let lengths = Derived::new(&source, |values: &Vec<i32>| values.len());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let seen = Rc::clone(&seen);
            lengths.subscribe(move |len: &usize| seen.borrow_mut().push(*len))
        };

        source.update(|values| {
            let mut next = values.clone();
            next.push(2);
            next
        });
        source.update(|values| values.clone());

        assert_eq!(*seen.borrow(), vec![1, 2, 2]);
    }

    #[test]
    fn projection_runs_once_per_source_change() {
        let source = Observable::new(0);
        let runs = Rc::new(Cell::new(0));
        let _derived = {
            let runs = Rc::clone(&runs);
            Derived::new(&source, move |value: &i32| {
                runs.set(runs.get() + 1);
                *value
            })
        };
        assert_eq!(runs.get(), 1);

        source.set(1);
        source.set(2);
        assert_eq!(runs.get(), 3);
    }

    #[test]
    fn dropping_every_derived_handle_unlinks_from_source() {
        let source = Observable::new(0);
        let derived = Derived::new(&source, |value: &i32| *value);
        let clone = derived.clone();
        assert_eq!(source.subscriber_count(), 1);

        drop(derived);
        assert_eq!(source.subscriber_count(), 1);
        drop(clone);
        assert_eq!(source.subscriber_count(), 0);
    }
}
