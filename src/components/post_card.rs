//! Post Card Component
//!
//! One list entry: title and body.

use leptos::prelude::*;

use crate::models::Post;

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    view! {
        <li class="post-card" data-post-id=post.id.to_string()>
            <h3>{post.title}</h3>
            <p>{post.body}</p>
        </li>
    }
}
