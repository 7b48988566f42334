//! Leptos Sentinel Utilities
//!
//! Watches a single "sentinel" element for viewport intersection.
//! At most one watch is active at a time; a new handle replaces the old one.

use js_sys::Array;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

/// What to do with the current watch after a state change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchPlan<K> {
    /// Leave the current watch (or lack of one) alone
    Keep,
    /// Release the current watch and attach nothing
    Detach,
    /// Release the current watch and attach to the element for this key
    Attach(K),
}

/// Decide how the watch follows the list.
///
/// `watched` is the key currently observed, `last` the key of the last rendered entry.
pub fn plan_watch<K: PartialEq>(
    watched: Option<K>,
    last: Option<K>,
    loading: bool,
    exhausted: bool,
) -> WatchPlan<K> {
    if exhausted {
        return if watched.is_some() { WatchPlan::Detach } else { WatchPlan::Keep };
    }
    // Skip attaching while a load is in flight
    if loading {
        return WatchPlan::Keep;
    }
    match last {
        Some(key) if watched.as_ref() != Some(&key) => WatchPlan::Attach(key),
        _ => WatchPlan::Keep,
    }
}

/// One IntersectionObserver bound to one element.
///
/// Disconnects on drop, so the observer never outlives its owner.
pub struct SentinelWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl SentinelWatch {
    /// Observe `target`, calling `on_visible` each time it enters the viewport
    pub fn observe(target: &Element, on_visible: impl Fn() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if visible {
                    on_visible();
                }
            },
        );

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for SentinelWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Holder for at most one keyed watch
pub struct Sentinel<K> {
    watched: Option<(K, SentinelWatch)>,
}

impl<K: Copy + PartialEq> Sentinel<K> {
    pub fn new() -> Self {
        Self { watched: None }
    }

    /// Key of the element currently observed
    pub fn watched_key(&self) -> Option<K> {
        self.watched.as_ref().map(|(key, _)| *key)
    }

    /// Carry out a plan.
    ///
    /// `resolve` maps a key to its rendered element. If it yields nothing,
    /// the sentinel stays detached until the next attach.
    pub fn apply(
        &mut self,
        plan: WatchPlan<K>,
        resolve: impl FnOnce(K) -> Option<Element>,
        on_visible: impl Fn() + 'static,
    ) {
        match plan {
            WatchPlan::Keep => {}
            WatchPlan::Detach => self.release(),
            WatchPlan::Attach(key) => {
                self.release();
                let Some(element) = resolve(key) else {
                    return;
                };
                match SentinelWatch::observe(&element, on_visible) {
                    Ok(watch) => self.watched = Some((key, watch)),
                    Err(err) => {
                        web_sys::console::error_2(&"[Sentinel] Failed to observe element:".into(), &err);
                    }
                }
            }
        }
    }

    /// Disconnect the current watch, if any
    pub fn release(&mut self) {
        if let Some((_, watch)) = self.watched.take() {
            watch.disconnect();
        }
    }
}

impl<K: Copy + PartialEq> Default for Sentinel<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sentinel owned by the current reactive owner.
///
/// Released when the owner is cleaned up (component unmount).
#[derive(Clone, Copy)]
pub struct SentinelHandle<K: 'static> {
    inner: StoredValue<Sentinel<K>, LocalStorage>,
}

/// Create a sentinel tied to the current component
pub fn use_sentinel<K: Copy + PartialEq + 'static>() -> SentinelHandle<K> {
    let inner = StoredValue::new_local(Sentinel::new());
    on_cleanup(move || {
        inner.try_update_value(|sentinel| sentinel.release());
    });
    SentinelHandle { inner }
}

impl<K: Copy + PartialEq + 'static> SentinelHandle<K> {
    /// Re-plan against the latest list state and apply the result
    pub fn sync(
        &self,
        last: Option<K>,
        loading: bool,
        exhausted: bool,
        resolve: impl FnOnce(K) -> Option<Element>,
        on_visible: impl Fn() + 'static,
    ) {
        self.inner.try_update_value(|sentinel| {
            let plan = plan_watch(sentinel.watched_key(), last, loading, exhausted);
            sentinel.apply(plan, resolve, on_visible);
        });
    }
}
