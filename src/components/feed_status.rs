//! Feed Status Component
//!
//! Loading / exhausted indicators shown below the list.

use leptos::prelude::*;

use crate::store::{FeedStateStoreFields, FeedStore};

pub const LOADING_TEXT: &str = "Loading more items...";
pub const EXHAUSTED_TEXT: &str = "No more items to load.";

#[component]
pub fn FeedStatus(store: FeedStore) -> impl IntoView {
    view! {
        <Show when=move || store.loading().get()>
            <p class="feed-status loading">{LOADING_TEXT}</p>
        </Show>
        <Show when=move || !store.has_more().get()>
            <p class="feed-status exhausted">{EXHAUSTED_TEXT}</p>
        </Show>
    }
}
