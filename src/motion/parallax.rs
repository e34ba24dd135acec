//! Scroll-linked parallax offsets.
//!
//! Two variants appear on the page: the hero image drifts against the page
//! scroll (with a slight zoom), and the about/services images drift against
//! their own section's position in the viewport. Both are pure functions of
//! the scroll input, recomputed on every scroll event with no throttling
//! beyond the passive-listener cadence.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement};
use yew::prelude::*;

/// A transform for a parallax target: vertical translation in pixels plus
/// an optional uniform scale.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform {
    pub translate_y: f64,
    pub scale: Option<f64>,
}

impl Transform {
    /// CSS `transform` value for this descriptor.
    pub fn to_css(&self) -> String {
        match self.scale {
            Some(scale) => format!("translateY({}px) scale({})", self.translate_y, scale),
            None => format!("translateY({}px)", self.translate_y),
        }
    }
}

/// Page-relative parallax: the element drifts upward as the page scrolls
/// down and grows by a small scale factor.
pub fn page_parallax(scroll_y: f64, coefficient: f64, scale_coefficient: f64) -> Transform {
    Transform {
        translate_y: -(scroll_y * coefficient),
        scale: Some(1.0 + scroll_y * scale_coefficient),
    }
}

/// Region-relative parallax: offset proportional to how far the region's
/// top edge has scrolled past the viewport top, independent of page length.
///
/// Degenerate viewport heights yield a zero offset.
pub fn section_parallax(region_top: f64, viewport_height: f64, coefficient: f64) -> Transform {
    let translate_y = if viewport_height.is_finite() && viewport_height > 0.0 {
        (-region_top / viewport_height) * coefficient
    } else {
        0.0
    };
    Transform {
        translate_y,
        scale: None,
    }
}

/// Applies a region-relative parallax to `target` whenever the page
/// scrolls, reading `section`'s bounding rect for the region position.
///
/// The transform is written straight to the target node's style rather than
/// through a render pass, so scrolling does not re-render the section. The
/// listener is passive and removed on unmount.
#[hook]
pub fn use_section_parallax(section: NodeRef, target: NodeRef, coefficient: f64) {
    use_effect_with_deps(
        move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let on_scroll = Closure::<dyn Fn()>::new(move || {
                    let (Some(section), Some(target)) =
                        (section.cast::<HtmlElement>(), target.cast::<HtmlElement>())
                    else {
                        return;
                    };
                    let Some(win) = web_sys::window() else { return };
                    let viewport = win
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    let top = section.get_bounding_client_rect().top();
                    let transform = section_parallax(top, viewport, coefficient);
                    let _ = target
                        .style()
                        .set_property("transform", &transform.to_css());
                });
                let options = AddEventListenerOptions::new();
                options.set_passive(true);
                let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                    "scroll",
                    on_scroll.as_ref().unchecked_ref(),
                    &options,
                );
                Box::new(move || {
                    if let Some(win) = web_sys::window() {
                        let _ = win.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                })
            } else {
                Box::new(|| ())
            };
            destructor
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn page_parallax_drifts_upward() {
        let t = page_parallax(1000.0, 0.3, 0.0002);
        assert!((t.translate_y - -300.0).abs() < 1e-9);
        assert!((t.scale.unwrap() - 1.2).abs() < 1e-9);
    }

    #[test]
    fn section_parallax_follows_region_progress() {
        // Top edge 500 px above the viewport top, viewport 1000 px tall:
        // half a viewport of progress at coefficient 40 is 20 px.
        let t = section_parallax(-500.0, 1000.0, 40.0);
        assert_eq!(t.translate_y, 20.0);
        assert_eq!(t.scale, None);
    }

    #[test]
    fn degenerate_viewport_yields_no_offset() {
        assert_eq!(section_parallax(-500.0, 0.0, 40.0).translate_y, 0.0);
        assert_eq!(section_parallax(-500.0, -200.0, 40.0).translate_y, 0.0);
        assert_eq!(section_parallax(-500.0, f64::NAN, 40.0).translate_y, 0.0);
    }

    #[test]
    fn transform_renders_to_css() {
        let both = Transform {
            translate_y: -300.0,
            scale: Some(1.2),
        };
        assert_eq!(both.to_css(), "translateY(-300px) scale(1.2)");

        let translate_only = Transform {
            translate_y: 20.0,
            scale: None,
        };
        assert_eq!(translate_only.to_css(), "translateY(20px)");
    }

    proptest! {
        #[test]
        fn parallax_is_idempotent(
            scroll in -10_000.0_f64..=10_000.0,
            top in -10_000.0_f64..=10_000.0,
            viewport in 1.0_f64..=5_000.0,
        ) {
            prop_assert_eq!(
                page_parallax(scroll, 0.3, 0.0002),
                page_parallax(scroll, 0.3, 0.0002)
            );
            prop_assert_eq!(
                section_parallax(top, viewport, 40.0),
                section_parallax(top, viewport, 40.0)
            );
        }
    }
}
