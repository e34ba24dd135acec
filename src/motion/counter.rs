//! Eased counting animation for the statistics cards.
//!
//! The pure layer maps elapsed time to a displayed integer; the hook layer
//! drives it from `requestAnimationFrame` once a section's visibility gate
//! opens.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::visibility::Visibility;

/// Wall-clock length of one counter run.
pub const COUNT_DURATION_MS: f64 = 2000.0;

/// Exponential ease-out: fast start, asymptotic approach to 1.
///
/// Returns exactly 1.0 once progress reaches 1 so a finished run lands on
/// its target instead of one short of it.
pub fn ease_out_expo(progress: f64) -> f64 {
    if progress >= 1.0 {
        1.0
    } else if progress <= 0.0 {
        0.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * progress)
    }
}

/// Elapsed-time fraction of a run, clamped to `[0, 1]`.
///
/// Durations under 1 ms count as 1 ms, so degenerate durations complete
/// immediately instead of dividing by zero.
pub fn run_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    let duration = if duration_ms.is_finite() {
        duration_ms.max(1.0)
    } else {
        1.0
    };
    let elapsed = if elapsed_ms.is_finite() { elapsed_ms } else { 0.0 };
    (elapsed / duration).clamp(0.0, 1.0)
}

/// Displayed integer for a run at `progress` toward `target`.
///
/// Non-finite or negative targets display as 0; a visibly wrong number
/// beats a crashed page here.
pub fn counter_value(target: f64, progress: f64) -> u32 {
    if !target.is_finite() || target < 0.0 {
        return 0;
    }
    (ease_out_expo(progress) * target).floor() as u32
}

/// Animates from 0 to `target` over [`COUNT_DURATION_MS`] once `visible`
/// becomes [`Visibility::Visible`].
///
/// The run is keyed on the visibility flag alone: the gate is monotonic, so
/// at most one run ever starts, and changing `target` afterwards does not
/// restart a finished run. Ticks stop as soon as progress reaches 1.
#[hook]
pub fn use_animated_counter(target: u32, visible: Visibility) -> u32 {
    let count = use_state(|| 0_u32);

    {
        let count = count.clone();
        use_effect_with_deps(
            move |visible| {
                let destructor: Box<dyn FnOnce()> = if visible.is_visible() {
                    start_run(target, count)
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            visible,
        );
    }

    *count
}

/// Kicks off one frame-driven run and returns its cancellation closure.
fn start_run(target: u32, count: UseStateHandle<u32>) -> Box<dyn FnOnce()> {
    let Some(window) = web_sys::window() else {
        count.set(target);
        return Box::new(|| ());
    };

    let running = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(0_i32));
    // The tick closure re-registers itself each frame, so it lives in a
    // RefCell it can reach from inside its own body.
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

    {
        let running = Rc::clone(&running);
        let raf_id = Rc::clone(&raf_id);
        let tick_handle = Rc::clone(&tick);
        let window = window.clone();
        let count = count.clone();
        let start_time = Cell::new(None::<f64>);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            if !running.get() {
                return;
            }
            let start = start_time.get().unwrap_or_else(|| {
                start_time.set(Some(timestamp));
                timestamp
            });
            let progress = run_progress(timestamp - start, COUNT_DURATION_MS);
            count.set(counter_value(f64::from(target), progress));

            if progress < 1.0 {
                if let Some(tick) = tick_handle.borrow().as_ref() {
                    match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
                        Ok(id) => raf_id.set(id),
                        Err(_) => {
                            warn!("animation frames stopped mid-run, jumping counter to target");
                            count.set(target);
                        }
                    }
                }
            }
        }) as Box<dyn FnMut(f64)>));
    }

    let first = tick
        .borrow()
        .as_ref()
        .map(|tick| window.request_animation_frame(tick.as_ref().unchecked_ref()));
    match first {
        Some(Ok(id)) => raf_id.set(id),
        _ => {
            // Fail closed: without frame scheduling the counter would hang
            // at zero, so show the final value instead.
            warn!("requestAnimationFrame unavailable, jumping counter to target");
            running.set(false);
            count.set(target);
        }
    }

    Box::new(move || {
        running.set(false);
        let _ = window.cancel_animation_frame(raf_id.get());
        tick.borrow_mut().take();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ease_spans_zero_to_one() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert!(ease_out_expo(0.5) > 0.9);
        assert!(ease_out_expo(0.5) < 1.0);
    }

    #[test]
    fn full_run_lands_exactly_on_target() {
        // target=200 over 2000 ms: at t=2000 ms the display reads 200.
        assert_eq!(counter_value(200.0, run_progress(2000.0, 2000.0)), 200);
    }

    #[test]
    fn run_not_started_displays_zero() {
        assert_eq!(counter_value(200.0, 0.0), 0);
    }

    #[test]
    fn degenerate_durations_complete_immediately() {
        assert_eq!(run_progress(16.0, 0.0), 1.0);
        assert_eq!(run_progress(16.0, -2000.0), 1.0);
        assert_eq!(run_progress(16.0, f64::NAN), 1.0);
    }

    #[test]
    fn negative_elapsed_clamps_to_zero() {
        assert_eq!(run_progress(-10.0, 2000.0), 0.0);
    }

    #[test]
    fn malformed_targets_display_zero() {
        assert_eq!(counter_value(f64::NAN, 0.5), 0);
        assert_eq!(counter_value(f64::INFINITY, 1.0), 0);
        assert_eq!(counter_value(-3.0, 1.0), 0);
    }

    proptest! {
        #[test]
        fn displayed_value_is_monotonic(
            target in 0_u32..=100_000,
            a in 0.0_f64..=1.0,
            b in 0.0_f64..=1.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                counter_value(f64::from(target), lo) <= counter_value(f64::from(target), hi)
            );
        }

        #[test]
        fn displayed_value_never_overshoots(target in 0_u32..=100_000, p in 0.0_f64..=1.0) {
            prop_assert!(counter_value(f64::from(target), p) <= target);
        }
    }
}
