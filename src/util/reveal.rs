//! One-shot scroll reveal.
//!
//! Each section owns an independent reveal flag. An IntersectionObserver
//! watches the section element; the first time 10% of it enters the
//! viewport the flag flips to `true` and the observation is torn down.
//! The flag never resets while the section stays mounted.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::html::Section;
use leptos::prelude::*;

/// Fraction of the element that must be visible before the reveal fires.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Monotonic one-shot flag: [`RevealLatch::fire`] returns `true` exactly
/// once. Guards against observer callbacks that were already queued when
/// the observation was disconnected.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    /// Returns `true` only on the first call; the flag never resets.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            false
        } else {
            self.fired = true;
            true
        }
    }

    pub fn has_fired(self) -> bool {
        self.fired
    }
}

/// Compute a staggered `transition-delay` value for the child at `index`.
pub fn stagger_delay(index: usize, base_ms: usize, step_ms: usize) -> String {
    format!("{}ms", base_ms + index * step_ms)
}

/// Observe `target` and return a flag that flips to `true` once, the first
/// time the section crosses [`REVEAL_THRESHOLD`].
///
/// The observer is disconnected immediately after firing, and again on
/// component cleanup if it is still live, so no observation outlives the
/// section. Outside the browser the flag simply stays `false`.
pub fn use_reveal(target: NodeRef<Section>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};

        struct Watch {
            observer: web_sys::IntersectionObserver,
            // Keeps the callback alive for as long as the observer is.
            _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
        }

        let watch: Rc<RefCell<Option<Watch>>> = Rc::new(RefCell::new(None));

        // The node ref is a signal, so this effect re-runs once the
        // section element is actually attached.
        Effect::new({
            let watch = Rc::clone(&watch);
            move || {
                if watch.borrow().is_some() {
                    return;
                }
                let Some(element) = target.get() else {
                    return;
                };

                let mut latch = RevealLatch::default();
                let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                    move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                        let intersecting = entries.iter().any(|entry| {
                            entry
                                .dyn_into::<web_sys::IntersectionObserverEntry>()
                                .map_or(false, |e| e.is_intersecting())
                        });
                        if intersecting && latch.fire() {
                            set_revealed.set(true);
                            observer.disconnect();
                        }
                    },
                );

                let options = web_sys::IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

                let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) else {
                    return;
                };
                observer.observe(&element);

                *watch.borrow_mut() = Some(Watch { observer, _callback: callback });
            }
        });

        on_cleanup(move || {
            if let Some(w) = watch.borrow_mut().take() {
                w.observer.disconnect();
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = target;
    }

    revealed
}
