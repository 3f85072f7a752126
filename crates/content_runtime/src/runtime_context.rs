//! Leptos context wiring for the content store.
//!
//! The provider bridges the store's observables into Leptos signals so components can render
//! the cache and the derived list reactively.

use leptos::*;

use crate::{
    content::{ContentFiles, ContentStore},
    store::{Readable, Subscription},
};

#[derive(Clone, Copy)]
/// Leptos context exposing the content store and signal mirrors of its observables.
pub struct ContentContext {
    /// Store handle used to start loads.
    pub store: StoredValue<ContentStore>,
    /// Mirror of [`ContentStore::files`].
    pub files: ReadSignal<ContentFiles>,
    /// Mirror of [`ContentStore::responses`].
    pub responses: ReadSignal<Vec<String>>,
}

impl ContentContext {
    /// Starts a fire-and-forget load of `name`.
    pub fn load(&self, name: impl Into<String>) {
        self.store.with_value(|store| store.spawn_load(name));
    }
}

/// Forwards every value published by `source` into `write` until the subscription drops.
pub fn bind_observable<T, O>(source: &O, write: WriteSignal<T>) -> Subscription
where
    T: Clone + 'static,
    O: Readable<T>,
{
    source.subscribe(move |value: &T| write.set(value.clone()))
}

/// Mirrors `source` into a Leptos signal for the lifetime of the current reactive owner.
pub fn create_observable_signal<T, O>(source: &O) -> ReadSignal<T>
where
    T: Clone + 'static,
    O: Readable<T>,
{
    let (read, write) = create_signal(source.get());
    let subscription = bind_observable(source, write);
    on_cleanup(move || subscription.unsubscribe());
    read
}

#[component]
/// Provides [`ContentContext`] to descendant components.
pub fn ContentProvider(
    /// Store assembled by the entry layer.
    store: ContentStore,
    children: Children,
) -> impl IntoView {
    let files = create_observable_signal(store.files());
    let responses = create_observable_signal(store.responses());
    provide_context(ContentContext {
        store: store_value(store),
        files,
        responses,
    });

    children().into_view()
}

/// Returns the current [`ContentContext`].
///
/// # Panics
///
/// Panics if called outside [`ContentProvider`].
pub fn use_content() -> ContentContext {
    use_context::<ContentContext>().expect("ContentContext not provided")
}
