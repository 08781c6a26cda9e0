//! Leptos Scroll Reveal Utilities
//!
//! Visibility subscriptions for elements built on `IntersectionObserver`.
//! A subscription reports discrete `true`/`false` transitions and disconnects
//! its observer when dropped.

use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Share of an element's bounding box that must intersect the viewport
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Errors raised while wiring up an observer
#[derive(Debug, thiserror::Error)]
pub enum RevealError {
    #[error("threshold {0} is outside 0.0..=1.0")]
    InvalidThreshold(f64),
    #[error("failed to create intersection observer: {0}")]
    Observer(String),
}

impl RevealError {
    fn from_js(err: JsValue) -> Self {
        RevealError::Observer(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

/// Whether an intersection ratio counts as visible
pub fn meets_threshold(ratio: f64, threshold: f64) -> bool {
    ratio >= threshold
}

/// Turns a stream of intersection ratios into visibility transitions.
///
/// The first sample always reports; after that only changes do.
#[derive(Clone, Copy, Debug)]
pub struct TransitionFilter {
    threshold: f64,
    last: Option<bool>,
}

impl TransitionFilter {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, last: None }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed one ratio sample; returns the new state if it changed
    pub fn sample(&mut self, ratio: f64) -> Option<bool> {
        let visible = meets_threshold(ratio, self.threshold);
        if self.last == Some(visible) {
            return None;
        }
        self.last = Some(visible);
        Some(visible)
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live observer on one element. Dropping it disconnects the observer.
pub struct VisibilitySubscription {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilitySubscription {
    /// Start observing `target`, calling `on_change` on every visibility transition
    pub fn observe<F>(target: &Element, threshold: f64, on_change: F) -> Result<Self, RevealError>
    where
        F: Fn(bool) + 'static,
    {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(RevealError::InvalidThreshold(threshold));
        }

        let filter = RefCell::new(TransitionFilter::new(threshold));
        let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            // Entries arrive oldest first; only the latest state matters
            let latest = entries
                .iter()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                .last();
            if let Some(entry) = latest {
                if let Some(visible) = filter.borrow_mut().sample(entry.intersection_ratio()) {
                    on_change(visible);
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(RevealError::from_js)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilitySubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe the element behind `node_ref` for as long as the calling
/// component lives.
///
/// The observer is attached once the element mounts and released in the
/// owner's cleanup. If it cannot be created, `on_change(true)` is called so
/// the content is not left hidden.
pub fn use_visibility<F>(node_ref: NodeRef<leptos::html::Section>, threshold: f64, on_change: F)
where
    F: Fn(bool) + Clone + 'static,
{
    let subscription = StoredValue::new_local(None::<VisibilitySubscription>);

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };
        match VisibilitySubscription::observe(&element, threshold, on_change.clone()) {
            Ok(sub) => subscription.set_value(Some(sub)),
            Err(err) => {
                tracing::warn!(error = %err, "visibility observer unavailable, revealing immediately");
                on_change(true);
            }
        }
    });

    on_cleanup(move || {
        if let Some(Some(sub)) = subscription.try_update_value(|slot| slot.take()) {
            drop(sub);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(meets_threshold(0.1, DEFAULT_THRESHOLD));
        assert!(meets_threshold(1.0, DEFAULT_THRESHOLD));
        assert!(!meets_threshold(0.099, DEFAULT_THRESHOLD));
        assert!(!meets_threshold(0.0, DEFAULT_THRESHOLD));
    }

    #[test]
    fn test_first_sample_always_reports() {
        let mut filter = TransitionFilter::new(DEFAULT_THRESHOLD);
        assert_eq!(filter.sample(0.0), Some(false));

        let mut filter = TransitionFilter::new(DEFAULT_THRESHOLD);
        assert_eq!(filter.sample(0.5), Some(true));
    }

    #[test]
    fn test_only_transitions_are_reported() {
        let mut filter = TransitionFilter::new(DEFAULT_THRESHOLD);
        let samples = [0.0, 0.05, 0.1, 0.4, 1.0, 0.3, 0.09, 0.0, 0.2];
        let reported: Vec<Option<bool>> = samples.iter().map(|r| filter.sample(*r)).collect();

        assert_eq!(
            reported,
            vec![
                Some(false),
                None,
                Some(true),
                None,
                None,
                None,
                Some(false),
                None,
                Some(true),
            ]
        );
    }

    #[test]
    fn test_scrolling_out_and_back_retriggers() {
        let mut filter = TransitionFilter::new(DEFAULT_THRESHOLD);
        for _ in 0..3 {
            assert_eq!(filter.sample(0.6), Some(true));
            assert_eq!(filter.sample(0.0), Some(false));
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RevealError::InvalidThreshold(1.5).to_string(),
            "threshold 1.5 is outside 0.0..=1.0"
        );
        assert_eq!(
            RevealError::Observer("SyntaxError".to_string()).to_string(),
            "failed to create intersection observer: SyntaxError"
        );
    }
}
