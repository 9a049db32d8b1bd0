use std::cell::RefCell;
use std::rc::Rc;

use lume_core::components::counter::CounterAnimation;
use lume_core::components::reveal::{RevealTracker, COUNTER_FALLBACK_DELAY_MS, REVEAL_THRESHOLD};
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::apply;
use crate::hooks::PageHooks;

pub fn wire(window: &Window, hooks: Rc<PageHooks>) {
    if hooks.reveals.is_empty() && hooks.counters.is_empty() {
        return;
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::new(
        hooks.reveals.len(),
        &hooks.counter_specs,
    )));

    if !hooks.reveals.is_empty() {
        observe_reveals(window, &hooks, &tracker);
    }

    // Fallback for counters that are in view from the start and never get a
    // fresh intersection.
    let window_fb = window.clone();
    let hooks_fb = hooks.clone();
    let tracker_fb = tracker.clone();
    let fallback = Closure::<dyn FnMut()>::new(move || {
        let update = tracker_fb.borrow_mut().on_fallback();
        apply::apply_all(&hooks_fb, &update.commands);
        start_counters(&window_fb, &hooks_fb, &update.start_counters);
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        fallback.as_ref().unchecked_ref(),
        COUNTER_FALLBACK_DELAY_MS as i32,
    );
    fallback.forget();
}

fn observe_reveals(window: &Window, hooks: &Rc<PageHooks>, tracker: &Rc<RefCell<RevealTracker>>) {
    let window = window.clone();
    let hooks_obs = hooks.clone();
    let tracker = tracker.clone();
    let on_entries = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(index) = hooks_obs.reveals.iter().position(|el| *el == target) else {
                    continue;
                };
                let contains_counter =
                    target.query_selector(".count").ok().flatten().is_some();
                let update = tracker
                    .borrow_mut()
                    .on_intersection(index, contains_counter);
                apply::apply_all(&hooks_obs, &update.commands);
                start_counters(&window, &hooks_obs, &update.start_counters);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    if let Ok(observer) =
        IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)
    {
        for el in &hooks.reveals {
            observer.observe(el);
        }
        on_entries.forget();
    }
}

/// Kick off a redraw-callback loop per counter. Each loop drops its own
/// closure on the final frame.
fn start_counters(window: &Window, hooks: &Rc<PageHooks>, indices: &[usize]) {
    for &index in indices {
        let (Some(spec), Some(el)) = (
            hooks.counter_specs.get(index),
            hooks.counters.get(index).cloned(),
        ) else {
            continue;
        };
        let start = window.performance().map_or(0.0, |p| p.now());
        let anim = CounterAnimation::new(spec.clone(), start);

        let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let inner = handle.clone();
        let window_cb = window.clone();
        *handle.borrow_mut() = Some(Closure::new(move |now: f64| {
            let frame = anim.frame(now);
            el.set_text_content(Some(&frame.text));
            if frame.done {
                let _ = inner.borrow_mut().take();
                return;
            }
            if let Some(cb) = inner.borrow().as_ref() {
                let _ = window_cb.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }));

        if let Some(cb) = handle.borrow().as_ref() {
            let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
