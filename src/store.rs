//! Feed State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! All changes go through `begin_fetch` / `finish_fetch`.

use reactive_stores::Store;

use crate::error::FetchError;
use crate::models::Post;

/// Where the feed is in its load cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedPhase {
    Idle,
    Loading,
    Exhausted,
}

/// Result of settling one page load
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Posts appended, cursor advanced
    Appended(usize),
    /// Empty page: no further loads
    Exhausted,
    /// Load failed, cursor unchanged
    Failed,
    /// No load was in flight for that page
    Stale,
}

/// Per-instance feed state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct FeedState {
    /// Posts in fetch order
    pub items: Vec<Post>,
    /// Next page to request, starting at 1
    pub page: u32,
    /// True only while a load is in flight
    pub loading: bool,
    /// Cleared for good once a load returns an empty page
    pub has_more: bool,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            loading: false,
            has_more: true,
        }
    }

    pub fn phase(&self) -> FeedPhase {
        if !self.has_more {
            FeedPhase::Exhausted
        } else if self.loading {
            FeedPhase::Loading
        } else {
            FeedPhase::Idle
        }
    }

    pub fn last_item_id(&self) -> Option<u32> {
        self.items.last().map(|post| post.id)
    }

    /// Claim the next load.
    ///
    /// Returns the page to request, or `None` if a load is already in flight
    /// or the feed is exhausted. The loading flag is set before returning.
    pub fn begin_fetch(&mut self) -> Option<u32> {
        if self.phase() != FeedPhase::Idle {
            return None;
        }
        self.loading = true;
        Some(self.page)
    }

    /// Settle the load started for `page`
    pub fn finish_fetch(&mut self, page: u32, result: Result<Vec<Post>, FetchError>) -> FetchOutcome {
        if !self.loading || page != self.page {
            return FetchOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(posts) if posts.is_empty() => {
                self.has_more = false;
                self.page += 1;
                FetchOutcome::Exhausted
            }
            Ok(posts) => {
                let count = posts.len();
                self.items.extend(posts);
                self.page += 1;
                FetchOutcome::Appended(count)
            }
            Err(_) => FetchOutcome::Failed,
        }
    }
}

/// Type alias for the store
pub type FeedStore = Store<FeedState>;

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::*;
    use leptos::reactive::owner::Owner;

    fn make_page(first_id: u32, len: u32) -> Vec<Post> {
        (first_id..first_id + len)
            .map(|id| Post {
                id,
                title: format!("Post {}", id),
                body: format!("Body of post {}", id),
            })
            .collect()
    }

    /// Run one full load cycle against a canned page
    fn load(state: &mut FeedState, result: Result<Vec<Post>, FetchError>) -> FetchOutcome {
        let page = state.begin_fetch().expect("load should be allowed");
        state.finish_fetch(page, result)
    }

    #[test]
    fn test_initial_state() {
        let state = FeedState::new();
        assert!(state.items.is_empty());
        assert_eq!(state.page, 1);
        assert!(!state.loading);
        assert!(state.has_more);
        assert_eq!(state.phase(), FeedPhase::Idle);
        assert_eq!(state.last_item_id(), None);
    }

    #[test]
    fn test_first_page() {
        let mut state = FeedState::new();

        assert_eq!(state.begin_fetch(), Some(1));
        assert_eq!(state.phase(), FeedPhase::Loading);

        let outcome = state.finish_fetch(1, Ok(make_page(1, 10)));

        assert_eq!(outcome, FetchOutcome::Appended(10));
        assert_eq!(state.items.len(), 10);
        assert_eq!(state.page, 2);
        assert!(state.has_more);
        assert_eq!(state.phase(), FeedPhase::Idle);
        assert_eq!(state.last_item_id(), Some(10));
    }

    #[test]
    fn test_short_page_does_not_exhaust() {
        let mut state = FeedState::new();
        load(&mut state, Ok(make_page(1, 10)));
        load(&mut state, Ok(make_page(11, 10)));
        let outcome = load(&mut state, Ok(make_page(21, 3)));

        assert_eq!(outcome, FetchOutcome::Appended(3));
        assert_eq!(state.items.len(), 23);
        assert_eq!(state.page, 4);
        assert!(state.has_more);

        // Fetch order is display order
        let ids: Vec<u32> = state.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=23).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_page_exhausts() {
        let mut state = FeedState::new();
        load(&mut state, Ok(make_page(1, 10)));

        let outcome = load(&mut state, Ok(Vec::new()));

        assert_eq!(outcome, FetchOutcome::Exhausted);
        assert_eq!(state.items.len(), 10);
        assert!(!state.has_more);
        assert!(!state.loading);
        assert_eq!(state.phase(), FeedPhase::Exhausted);

        // Terminal: no further loads are claimed
        assert_eq!(state.begin_fetch(), None);
        assert_eq!(state.begin_fetch(), None);
        assert!(!state.loading);
    }

    #[test]
    fn test_only_one_load_in_flight() {
        let mut state = FeedState::new();

        assert_eq!(state.begin_fetch(), Some(1));
        // Further intersections while loading are ignored
        assert_eq!(state.begin_fetch(), None);
        assert_eq!(state.begin_fetch(), None);

        state.finish_fetch(1, Ok(make_page(1, 10)));
        assert_eq!(state.begin_fetch(), Some(2));
    }

    #[test]
    fn test_failure_keeps_cursor() {
        let mut state = FeedState::new();
        load(&mut state, Ok(make_page(1, 10)));

        let outcome = load(&mut state, Err(FetchError::Network("offline".into())));

        assert_eq!(outcome, FetchOutcome::Failed);
        assert!(!state.loading);
        assert_eq!(state.page, 2);
        assert_eq!(state.items.len(), 10);
        assert!(state.has_more);

        // Next trigger asks for the same page again
        assert_eq!(state.begin_fetch(), Some(2));
    }

    #[test]
    fn test_decode_failure_is_handled_like_network_failure() {
        let mut state = FeedState::new();
        let outcome = load(&mut state, Err(FetchError::Decode("expected a sequence".into())));

        assert_eq!(outcome, FetchOutcome::Failed);
        assert_eq!(state.phase(), FeedPhase::Idle);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_cursor_counts_successful_pages() {
        let mut state = FeedState::new();
        for n in 0..5 {
            load(&mut state, Ok(make_page(n * 10 + 1, 10)));
            if n == 2 {
                load(&mut state, Err(FetchError::Status(500)));
            }
        }
        assert_eq!(state.page, 1 + 5);
        assert_eq!(state.items.len(), 50);
    }

    #[test]
    fn test_response_after_unmount_is_discarded() {
        let owner = Owner::new();
        let store = owner.with(|| Store::new(FeedState::new()));

        assert_eq!(store.try_update(FeedState::begin_fetch), Some(Some(1)));

        // Feed unmounted while page 1 was in flight
        drop(owner);

        let settled = store.try_update(|state| state.finish_fetch(1, Ok(make_page(1, 10))));
        assert_eq!(settled, None);
        assert_eq!(store.try_with(|state| state.items.len()), None);
    }

    #[test]
    fn test_unexpected_settle_is_stale() {
        let mut state = FeedState::new();

        // Nothing in flight
        assert_eq!(state.finish_fetch(1, Ok(make_page(1, 10))), FetchOutcome::Stale);
        assert!(state.items.is_empty());

        // Wrong page
        state.begin_fetch();
        assert_eq!(state.finish_fetch(7, Ok(make_page(1, 10))), FetchOutcome::Stale);
        assert!(state.loading);
        assert_eq!(state.page, 1);
    }
}
