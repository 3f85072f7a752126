use content_host::ContentManifest;
use content_host_web::{content_fetcher, host_strategy_name};
use content_runtime::{content_manifest, use_content, ContentProvider, ContentStore};
use leptos::*;
use leptos_meta::*;

/// Builds the page's content store for the selected host transport and `manifest` root.
pub fn build_content_store(manifest: &ContentManifest) -> ContentStore {
    ContentStore::from_manifest(content_fetcher(), manifest)
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let manifest = content_manifest();
    let store = build_content_store(&manifest);
    logging::log!(
        "content host `{}` serving from `{}`",
        host_strategy_name(),
        manifest.root.as_str()
    );
    store.spawn_load_all(manifest.preload.iter().cloned());

    view! {
        <Title text="Content" />
        <ContentProvider store=store>
            <main class="site-root">
                <ContentIndex />
            </main>
        </ContentProvider>
    }
}

#[component]
pub fn ContentIndex() -> impl IntoView {
    let content = use_content();
    let loaded = move || content.files.with(|files| files.len());

    view! {
        <section class="content-index">
            <p class="content-count">{move || format!("{} loaded", loaded())}</p>
            <For
                each=move || content.responses.get().into_iter().enumerate()
                key=|(idx, body)| (*idx, body.clone())
                children=|(_, body)| view! { <pre class="content-body">{body}</pre> }
            />
        </section>
    }
}
