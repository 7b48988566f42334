//! UI Components
//!
//! Leptos components for the post feed.

mod post_feed;
mod post_card;
mod feed_status;

pub use post_feed::PostFeed;
pub use post_card::PostCard;
pub use feed_status::FeedStatus;
