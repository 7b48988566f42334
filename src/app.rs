//! Infinite Feed App
//!
//! Root component hosting the post feed.

use leptos::prelude::*;

use crate::components::PostFeed;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-layout">
            <PostFeed />
        </main>
    }
}
