//! Post Feed Component
//!
//! Infinite list of posts. The first page loads on mount; each further page
//! loads when the last rendered post scrolls into view.

use leptos::html::Ul;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_sentinel::use_sentinel;
use reactive_stores::Store;

use crate::api::{self, FeedConfig};
use crate::components::{FeedStatus, PostCard};
use crate::store::{FeedState, FeedStateStoreFields, FeedStore, FetchOutcome};

const FEED_HEADING: &str = "Infinite Scroll with Intersection Observer";

/// CSS selector for the rendered entry of one post
fn post_selector(id: u32) -> String {
    format!("li[data-post-id=\"{}\"]", id)
}

/// Claim the next page together with the config to load it with.
///
/// The config is read first, so a disposed config never leaves `loading` set.
fn claim_page(store: FeedStore, config: StoredValue<FeedConfig>) -> Option<(u32, FeedConfig)> {
    let config = config.try_get_value()?;
    let page = store.try_update(FeedState::begin_fetch).flatten()?;
    Some((page, config))
}

#[component]
pub fn PostFeed(#[prop(optional)] config: FeedConfig) -> impl IntoView {
    let store = Store::new(FeedState::new());
    let config = StoredValue::new(config);
    let list_ref = NodeRef::<Ul>::new();
    let sentinel = use_sentinel::<u32>();

    // Claim the next page and load it. No-op while loading or once exhausted.
    let request_next = Callback::new(move |()| {
        let Some((page, config)) = claim_page(store, config) else {
            return;
        };
        web_sys::console::log_1(&format!("[Feed] Loading page {}", page).into());

        spawn_local(async move {
            let result = api::fetch_page(&config, page).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("[Feed] Failed to fetch page {}: {}", page, e).into());
            }

            // The store is gone once the feed unmounts; late responses are dropped
            match store.try_update(|state| state.finish_fetch(page, result)) {
                Some(FetchOutcome::Appended(count)) => {
                    web_sys::console::log_1(&format!("[Feed] Loaded {} posts from page {}", count, page).into());
                }
                Some(FetchOutcome::Exhausted) => {
                    web_sys::console::log_1(&format!("[Feed] Page {} was empty, no more posts", page).into());
                }
                Some(FetchOutcome::Failed) => {}
                Some(FetchOutcome::Stale) => {
                    web_sys::console::warn_1(&format!("[Feed] Ignoring unexpected response for page {}", page).into());
                }
                None => {
                    web_sys::console::log_1(&format!("[Feed] Discarding page {} response after unmount", page).into());
                }
            }
        });
    });

    // Load first page on mount
    Effect::new(move |_| {
        request_next.run(());
    });

    // Keep the sentinel on the last rendered post
    Effect::new(move |_| {
        let last = store.with(FeedState::last_item_id);
        let loading = store.loading().get();
        let exhausted = !store.has_more().get();

        sentinel.sync(
            last,
            loading,
            exhausted,
            |id| {
                // Only the entry for this id; a stale element would pin the watch to it
                let list = list_ref.get_untracked()?;
                list.query_selector(&post_selector(id)).ok().flatten()
            },
            move || request_next.run(()),
        );
    });

    view! {
        <div class="post-feed">
            <h1>{FEED_HEADING}</h1>
            <ul node_ref=list_ref>
                <For
                    each=move || store.items().get()
                    key=|post| post.id
                    children=move |post| view! { <PostCard post=post /> }
                />
            </ul>
            <FeedStatus store=store />
        </div>
    }
}
