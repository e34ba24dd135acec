//! One-shot viewport visibility detection.
//!
//! Every section of the page reveals its content the first time it scrolls
//! into view and never hides it again. [`use_visibility_gate`] wraps an
//! `IntersectionObserver` around that contract: observe the section root,
//! flip once, release the observation.

use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Whether a section root has entered the viewport yet.
///
/// Monotonic by construction: a gate starts out `NotYetVisible` and can only
/// move to `Visible`, never back.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Visibility {
    #[default]
    NotYetVisible,
    Visible,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Observes `node` and flips to [`Visibility::Visible`] the first time at
/// least `threshold` of its area is on screen.
///
/// The intersection subscription is released on that first activation, so
/// observation cost is bounded to the pre-activation window; unmounting
/// releases it as well. Content that is already on screen at mount still
/// activates through the first (asynchronous) observer callback.
///
/// If the observer facility is unavailable the gate fails open and treats
/// the content as immediately visible.
#[hook]
pub fn use_visibility_gate(node: NodeRef, threshold: f64) -> Visibility {
    let state = use_state(Visibility::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match node.cast::<Element>() {
                    Some(element) => observe(&element, threshold, state),
                    None => {
                        warn!("visibility gate found no element to observe, revealing content");
                        state.set(Visibility::Visible);
                        Box::new(|| ())
                    }
                };
                destructor
            },
            (),
        );
    }

    *state
}

fn observe(
    element: &Element,
    threshold: f64,
    state: UseStateHandle<Visibility>,
) -> Box<dyn FnOnce()> {
    // Released either by the first qualifying intersection or by unmount,
    // whichever comes first, never both.
    let released = Rc::new(Cell::new(false));

    let on_intersect = {
        let state = state.clone();
        let released = Rc::clone(&released);
        Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let entry: IntersectionObserverEntry = entries.get(0).unchecked_into();
                if entry.is_intersecting() && !released.get() {
                    state.set(Visibility::Visible);
                    released.set(true);
                    observer.disconnect();
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Box::new(move || {
                if !released.get() {
                    released.set(true);
                    observer.disconnect();
                }
                drop(on_intersect);
            })
        }
        Err(_) => {
            // Fail open rather than leaving the section hidden forever.
            warn!("IntersectionObserver unavailable, revealing content immediately");
            state.set(Visibility::Visible);
            Box::new(|| ())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_starts_closed() {
        assert!(!Visibility::default().is_visible());
    }

    #[test]
    fn visible_is_terminal() {
        assert!(Visibility::Visible.is_visible());
    }
}
